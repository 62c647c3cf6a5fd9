//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view draws the board into a
//! plain framebuffer (pure, unit-testable) and the renderer flushes that
//! framebuffer to a real terminal. No widget/layout framework.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
