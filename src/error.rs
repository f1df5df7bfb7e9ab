// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("Window update error: {0}")]
    WindowUpdate(String), // Updating the window buffer failed
    #[error("Export error: {0}")]
    Export(#[from] image::ImageError), // Encoding/writing the PNG failed
    #[error("Config error: {0}")]
    Config(String), // Settings that can't produce a working canvas
}

pub type Result<T> = std::result::Result<T, Error>;
