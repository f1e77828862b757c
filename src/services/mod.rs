pub mod config;
pub mod refresh;
pub mod render;
pub mod workout;
