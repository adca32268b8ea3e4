pub mod canvas_layer;
pub mod iced_ui;

pub use iced_ui::{LaunchOptions, run_iced_app};
