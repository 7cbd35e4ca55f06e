pub mod assess;
pub mod cases;
pub mod config;
