/// Errors surfaced by the color dropper library.
///
/// Most runtime failures (undecodable uploads, clipboard refusals) are logged and
/// swallowed by the GUI; this type exists so the library layer can still report
/// them precisely.
#[derive(Debug, thiserror::Error)]
pub enum DropperError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("failed to parse config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid config value: {0}")]
    InvalidConfig(String),
    #[error("clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
    #[error("background task failed: {0}")]
    Task(String),
}
