use std::path::Path;

use crate::error::{DisplayError, LoadError};

/// The decode/display primitives the pipeline is built on.
pub trait ImageBackend {
    type Buffer;

    fn load(&mut self, path: &Path) -> Result<Self::Buffer, LoadError>;
    fn to_grayscale(&mut self, buffer: &mut Self::Buffer);
    /// Blocks until the operator dismisses the image.
    fn show(&mut self, buffer: &Self::Buffer, title: &str) -> Result<(), DisplayError>;
}
