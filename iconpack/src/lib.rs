use thiserror::Error;

mod archive;
mod catalog;
mod pipeline;
mod scaler;

pub use crate::archive::pack;
pub use crate::catalog::{Platform, SizeSpec};
pub use crate::pipeline::{generate, IconRecord};
pub use crate::scaler::{ImageSource, Scaler};

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported platform {0}")]
    UnsupportedPlatform(String),
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("expected a base64 data url")]
    DataUrl,
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("no icons to pack")]
    EmptyIconSet,
    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
