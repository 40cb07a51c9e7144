#[cfg(feature = "stl-io")]
mod stl;

#[cfg(feature = "stl-io")]
pub use stl::{to_stl_ascii, to_stl_binary, write_stl_file};

/// Export and rendering errors.
///
/// Some variants only exist when their cargo feature is enabled.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("std::io::Error: {0}")]
    StdIo(#[from] std::io::Error),

    #[error("The path is malformed: {0}")]
    MalformedPath(String),

    #[cfg(feature = "image-io")]
    /// Error bubbled up from the `image` crate while encoding.
    #[error("Image encoding error: {0}")]
    Image(#[from] ::image::ImageError),
}
