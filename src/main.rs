use std::time::Duration;

use clap::Parser;
use raylib::prelude::*;
use tracing::{error, info};

mod config;
mod constants;
mod engine;
mod fit;
mod logging;
mod slide;
mod slider;
mod state;
mod texture_loader;
mod tween;
mod view;

use crate::config::Cli;
use crate::constants::*;
use crate::engine::RhythmEngine;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.debug);

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Rhythm Slider")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut engine = match RhythmEngine::initialize(&mut rl, &thread, &cli) {
        Ok(engine) => engine,
        Err(e) => {
            error!("{:#}", e);
            let mut d = rl.begin_drawing(&thread);
            d.clear_background(Color::BLACK);
            d.draw_text(&format!("Error: {}", e), 20, 20, 20, Color::RED);
            drop(d);
            std::thread::sleep(Duration::from_secs(5));
            return Err(e);
        }
    };
    info!(rows = engine.rows().len(), capacity = cli.capacity, "slider ready");

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        if rl.is_window_resized() {
            engine.resize(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        }
        engine.handle_input(&rl);
        engine.update(dt);

        let mouse = rl.get_mouse_position();
        let mut d = rl.begin_drawing(&thread);
        engine.render_frame(&mut d, mouse);
    }

    Ok(())
}
