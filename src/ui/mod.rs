//! Text front end helpers: input parsing and panel rendering.
//!
//! Both work on plain values (`&str` in, `Snapshot` in) so the terminal
//! loop in `main.rs` stays a thin shell.

pub mod input;
pub mod render;

pub use input::{parse_command, Command, HELP};
pub use render::panel;
