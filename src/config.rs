use std::path::PathBuf;

use clap::Parser;

use crate::constants::*;

/// Per-slider settings, fixed when the slider is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderConfig {
    /// Maximum number of slides visible at once.
    pub capacity: usize,
    /// Duration of every width / gap transition (seconds).
    pub duration: f32,
    /// Interval between automatic forward steps (seconds), if enabled.
    pub autoplay: Option<f32>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            capacity: MAX_SLIDES_VISIBLE,
            duration: ANIMATION_SPEED_SLOW,
            autoplay: None,
        }
    }
}

/// Circular image slider: one row of evenly spaced slides per directory.
#[derive(Debug, Parser)]
#[command(name = "rhythm", version, about)]
pub struct Cli {
    /// Image directories, one slider row each
    #[arg(required = true)]
    pub directories: Vec<PathBuf>,

    /// Maximum number of slides visible in a row
    #[arg(short, long, default_value_t = MAX_SLIDES_VISIBLE, value_parser = parse_capacity)]
    pub capacity: usize,

    /// Transition duration in seconds
    #[arg(short, long, default_value_t = ANIMATION_SPEED_SLOW, value_parser = parse_seconds)]
    pub duration: f32,

    /// Height slides are scaled to, in pixels
    #[arg(long, default_value_t = SLIDE_HEIGHT, value_parser = parse_positive)]
    pub slide_height: f32,

    /// Step forward automatically every SECS seconds
    #[arg(short, long, value_name = "SECS", value_parser = parse_positive)]
    pub autoplay: Option<f32>,

    /// Shuffle the slide order of every row
    #[arg(long, default_value_t = false)]
    pub shuffle: bool,

    /// Enable debug logging and the marker overlay
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl Cli {
    pub fn slider_config(&self) -> SliderConfig {
        SliderConfig {
            capacity: self.capacity,
            duration: self.duration,
            autoplay: self.autoplay,
        }
    }
}

fn parse_capacity(s: &str) -> Result<usize, String> {
    let capacity: usize = s.parse().map_err(|e| format!("invalid capacity '{}': {}", s, e))?;
    if capacity == 0 {
        return Err("capacity must be at least 1".to_string());
    }
    Ok(capacity)
}

fn parse_seconds(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|e| format!("invalid number '{}': {}", s, e))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("'{}' must be a non-negative number", s));
    }
    Ok(value)
}

fn parse_positive(s: &str) -> Result<f32, String> {
    let value = parse_seconds(s)?;
    if value == 0.0 {
        return Err(format!("'{}' must be greater than zero", s));
    }
    Ok(value)
}
