use thiserror::Error;

/// Everything that can stop a conversion.
///
/// Each stage of the pipeline produces exactly one of these kinds and the
/// pipeline short-circuits on the first failure. The library only classifies;
/// turning a kind into a user-facing message is the front-end's job.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The scale input did not parse as a number, or truncated below 1.
    #[error("invalid scale {0:?}: expected a number greater than or equal to 1")]
    InvalidScale(String),

    /// The image source could not be read or decoded. I/O failures while
    /// opening the source arrive here too, wrapped by the image crate.
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    /// The decoder produced a zero-width or zero-height image.
    #[error("decoded image has zero width or height")]
    EmptyImage,

    /// The destination could not be created or written.
    #[error("failed to write output file: {0}")]
    Write(#[source] std::io::Error),
}

/// Category of a [`ConvertError`], for callers that match on kind
/// rather than message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidScale,
    Decode,
    EmptyImage,
    Write,
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::InvalidScale(_) => ErrorKind::InvalidScale,
            ConvertError::Decode(_) => ErrorKind::Decode,
            ConvertError::EmptyImage => ErrorKind::EmptyImage,
            ConvertError::Write(_) => ErrorKind::Write,
        }
    }
}
