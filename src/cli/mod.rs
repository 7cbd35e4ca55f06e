pub mod commands;
pub mod progress;
pub mod render;
pub mod ui;

pub use progress::RunProgress;
pub use render::{OutputFormat, render_reactive, render_scorecard};
pub use ui::Output;
