#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ImageState {
    Pending,   // Not attempted yet
    Loaded,    // Decoded into a buffer
    Converted, // Buffer converted to grayscale
    Displayed, // Shown and dismissed by the operator
    Skipped,   // Load failed, moved on
}

impl ImageState {
    pub fn is_terminal(self) -> bool {
        matches!(self, ImageState::Displayed | ImageState::Skipped)
    }
}
