use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("figure has invalid size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("unable to render {title:?}: {reason}")]
    Render { title: String, reason: String },
}
