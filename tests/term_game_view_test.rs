use tui_2048::core::Board;
use tui_2048::term::{GameView, Viewport};

#[test]
fn term_view_renders_border_corners() {
    let board = Board::new(4).unwrap();
    let view = GameView::default();

    // With cell_w=7 and cell_h=3:
    // board pixels = 4*7 by 4*3 => 28x12
    // plus border => 30x14
    let vp = Viewport::new(30, 14);
    let fb = view.render(&board, vp);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(29, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 13).unwrap().ch, '└');
    assert_eq!(fb.get(29, 13).unwrap().ch, '┘');
}

#[test]
fn term_view_centers_tile_value_in_cell_block() {
    let mut board = Board::new(4).unwrap();
    board.set(0, 0, 2048);

    let view = GameView::default();
    let fb = view.render(&board, Viewport::new(30, 14));

    // Inside border: (1,1) origin. "2048" is centered in a 7-wide block and
    // sits on the middle of its 3 rows.
    let text: String = (2..6).map(|x| fb.get(x, 2).unwrap().ch).collect();
    assert_eq!(text, "2048");
}

#[test]
fn term_view_marks_empty_cells() {
    let board = Board::new(4).unwrap();
    let view = GameView::default();
    let fb = view.render(&board, Viewport::new(30, 14));

    // Center of the top-left cell block
    assert_eq!(fb.get(1 + 3, 1 + 1).unwrap().ch, '·');
}

#[test]
fn term_view_draws_help_panel_when_wide_enough() {
    let board = Board::new(4).unwrap();
    let view = GameView::default();
    let fb = view.render(&board, Viewport::new(60, 14));

    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    assert!(all.contains("2048"));
    assert!(all.contains("restart"));
    assert!(all.contains("quit"));
}

#[test]
fn term_view_survives_tiny_viewport() {
    let mut board = Board::new(4).unwrap();
    board.set(3, 3, 16);
    let view = GameView::default();

    // Smaller than the frame: rendering must clip, not panic
    let fb = view.render(&board, Viewport::new(10, 4));
    assert_eq!(fb.width(), 10);
    assert_eq!(fb.height(), 4);
}
