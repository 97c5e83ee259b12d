use anyhow::{Result, bail};
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::{info, warn};

use crate::config::Cli;
use crate::slide::ContentId;
use crate::slider::Slider;
use crate::state::Direction;
use crate::texture_loader::{intrinsic_width, load_directory};
use crate::view::{Container, draw_row};

/// One slider bound to its on-screen container.
pub struct Row {
    pub container: Container,
    pub slider: Slider,
}

/// Owns every loaded texture and one slider row per image directory.
pub struct RhythmEngine {
    textures: Vec<Texture2D>,
    rows: Vec<Row>,
    slide_height: f32,
    debug: bool,
}

impl RhythmEngine {
    /// Builds one slider per directory given on the command line. Directories
    /// without a loadable image are skipped.
    pub fn initialize(rl: &mut RaylibHandle, thread: &RaylibThread, cli: &Cli) -> Result<Self> {
        let config = cli.slider_config();
        let mut textures: Vec<Texture2D> = Vec::new();
        let mut row_contents = Vec::new();

        for dir in cli.directories.iter() {
            let loaded = match load_directory(rl, thread, dir) {
                Ok(loaded) if !loaded.is_empty() => loaded,
                Ok(_) => {
                    warn!("no image of {} could be loaded", dir.display());
                    continue;
                }
                Err(e) => {
                    warn!("skipping {}: {:#}", dir.display(), e);
                    continue;
                }
            };

            let mut contents: Vec<(ContentId, f32)> = loaded
                .iter()
                .enumerate()
                .map(|(i, t)| (ContentId(textures.len() + i), intrinsic_width(t.width(), t.height(), cli.slide_height)))
                .collect();
            if cli.shuffle {
                contents.shuffle(&mut rand::rng());
            }

            info!("{}: {} slides", dir.display(), contents.len());
            textures.extend(loaded);
            row_contents.push(contents);
        }

        if row_contents.is_empty() {
            bail!("no slides were loaded");
        }

        let screen_width = rl.get_screen_width() as f32;
        let screen_height = rl.get_screen_height() as f32;
        let count = row_contents.len();
        let rows = row_contents
            .into_iter()
            .enumerate()
            .map(|(i, contents)| {
                let container = Container::for_row(i, count, screen_width, screen_height, cli.slide_height);
                let slider = Slider::new(contents, container.list.width, config);
                Row { container, slider }
            })
            .collect();

        Ok(Self {
            textures,
            rows,
            slide_height: cli.slide_height,
            debug: cli.debug,
        })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Recomputes every container for a new screen size.
    pub fn resize(&mut self, screen_width: f32, screen_height: f32) {
        let count = self.rows.len();
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.container = Container::for_row(i, count, screen_width, screen_height, self.slide_height);
            row.slider.set_container_width(row.container.list.width);
        }
    }

    /// Arrow keys step every row; a click steps the row whose button it hits.
    /// Left acts like "previous", Right like "next".
    pub fn handle_input(&mut self, rl: &RaylibHandle) {
        let key_step = if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            Some(Direction::Forward)
        } else if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            Some(Direction::Backward)
        } else {
            None
        };
        if let Some(direction) = key_step {
            for row in self.rows.iter_mut() {
                row.slider.step(direction);
            }
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let mouse = rl.get_mouse_position();
            for row in self.rows.iter_mut() {
                if let Some(direction) = row.container.button_at(mouse) {
                    row.slider.step(direction);
                }
            }
        }
    }

    pub fn update(&mut self, dt: f32) {
        for row in self.rows.iter_mut() {
            row.slider.update(dt);
        }
    }

    pub fn render_frame(&self, d: &mut RaylibDrawHandle, mouse: Vector2) {
        d.clear_background(Color::BLACK);
        for row in self.rows.iter() {
            draw_row(d, &row.container, &row.slider, &self.textures, mouse, self.debug);
        }
    }
}
