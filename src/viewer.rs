use std::path::Path;
use raylib::prelude::*;
use tracing::{debug, trace};

use crate::constants::*;
use crate::engine::ImageBackend;
use crate::error::{DisplayError, LoadError};
use crate::texture_loader::load_image_with_exif_rotation;

/// Shows each image in its own raylib window.
///
/// raylib allows a single window per process, so `show` opens the window,
/// blocks until a key is pressed or the window is closed, then closes it
/// again before returning.
#[derive(Debug, Default)]
pub struct RaylibViewer;

impl RaylibViewer {
    pub fn new() -> Self {
        Self
    }
}

impl ImageBackend for RaylibViewer {
    type Buffer = Image;

    fn load(&mut self, path: &Path) -> Result<Image, LoadError> {
        load_image_with_exif_rotation(path)
    }

    fn to_grayscale(&mut self, buffer: &mut Image) {
        buffer.color_grayscale();
    }

    fn show(&mut self, buffer: &Image, title: &str) -> Result<(), DisplayError> {
        let scale = fit_scale(buffer.width(), buffer.height(), MAX_WINDOW_WIDTH, MAX_WINDOW_HEIGHT);
        let width = ((buffer.width() as f32 * scale).round() as i32).max(1);
        let height = ((buffer.height() as f32 * scale).round() as i32).max(1);

        let (mut rl, thread) = raylib::init()
            .size(width, height)
            .title(title)
            .log_level(RAYLIB_LOG_LEVEL)
            .build();
        rl.set_target_fps(FPS);

        let texture = rl
            .load_texture_from_image(&thread, buffer)
            .map_err(|e| DisplayError::Texture { reason: e.to_string() })?;
        debug!(width, height, scale, "viewer window opened");

        // Any key dismisses; closing the window (or ESC) does too
        while !rl.window_should_close() {
            if let Some(key) = rl.get_key_pressed() {
                trace!(?key, "dismissed");
                break;
            }
            let mut d = rl.begin_drawing(&thread);
            d.clear_background(Color::BLACK);
            d.draw_texture_ex(&texture, Vector2::new(0.0, 0.0), 0.0, scale, Color::WHITE);
        }

        // The texture must be released while its GL context still exists
        drop(texture);
        drop(rl);
        Ok(())
    }
}

// build() applies this before InitWindow, once per window
const RAYLIB_LOG_LEVEL: TraceLogLevel = TraceLogLevel::LOG_ERROR;

/// Scale that fits `width` x `height` inside the bounds. Never enlarges.
pub fn fit_scale(width: i32, height: i32, max_width: i32, max_height: i32) -> f32 {
    if width <= 0 || height <= 0 {
        return 1.0;
    }
    let sx = max_width as f32 / width as f32;
    let sy = max_height as f32 / height as f32;
    sx.min(sy).min(1.0)
}
