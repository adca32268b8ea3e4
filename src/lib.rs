pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod feedback;
pub mod gui_app;
pub mod loader;
pub mod logging;
pub mod magnifier;
pub mod sampler;
pub mod scene;
pub mod toast;
pub mod widget;

pub use color::{SampledColor, hex_from_rgb};
pub use config::DropperConfig;
pub use error::DropperError;
pub use widget::{DropperState, PickingMode};
