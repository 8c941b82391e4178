pub const MAX_WINDOW_WIDTH: i32 = 1920;   // Largest viewer window width
pub const MAX_WINDOW_HEIGHT: i32 = 1080;  // Largest viewer window height
pub const FPS: u32 = 60;                  // Redraw rate while waiting for a key

pub const DEFAULT_WINDOW_TITLE: &str = "Render";

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;           // Bad arguments, unreadable manifest, display failure
pub const EXIT_PARTIAL: u8 = 2;           // --strict and at least one image skipped
