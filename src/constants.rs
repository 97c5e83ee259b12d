pub const WINDOW_WIDTH: i32 = 1280;           // Initial window width
pub const WINDOW_HEIGHT: i32 = 720;           // Initial window height
pub const FPS: u32 = 60;                      // Frames per second

pub const ANIMATION_SPEED_SLOW: f32 = 0.6;    // Duration of every slider transition (seconds)
pub const MAX_SLIDES_VISIBLE: usize = 6;      // Slider capacity
pub const SLIDE_HEIGHT: f32 = 180.0;          // Height every slide image is scaled to (pixels)

pub const ROW_PADDING: f32 = 16.0;            // Space around each slider row
pub const BUTTON_WIDTH: f32 = 48.0;           // Width of the prev / next buttons
pub const BUTTON_SPACING: f32 = 12.0;         // Space between a button and the slide list
