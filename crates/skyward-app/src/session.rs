//! Headless sessions behind the CLI subcommands.

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use skyward_core::state::{FlightSnapshot, SceneDescription};
use skyward_fireworks::StageConfig;
use skyward_sim::engine::{SimConfig, SimulationEngine};

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::game_loop::{frame_duration, spawn_fireworks_loop, spawn_flight_loop};
use crate::hud::{status_line, Hud, TextSurface};
use crate::raster::RasterCanvas;
use crate::script::KeyScript;
use crate::state::{FireworksLoopCommand, FlightLoopCommand, SharedSnapshot};

fn sim_config(config: &AppConfig) -> SimConfig {
    SimConfig {
        seed: config.seed,
        ..Default::default()
    }
}

/// Fly for `secs` seconds of wall-clock time, feeding the script's key
/// signals to the flight loop as their times come up. Returns the last frame.
pub fn fly(config: &AppConfig, script: &KeyScript, secs: f64) -> Result<Option<FlightSnapshot>> {
    if !secs.is_finite() || secs < 0.0 {
        return Err(AppError::InvalidDuration(secs));
    }
    let latest: SharedSnapshot = Arc::new(Mutex::new(None));
    let hud = Hud::bind(TextSurface::cockpit())?;
    let frame = frame_duration(config.frame_rate);
    let handle = spawn_flight_loop(
        sim_config(config),
        frame,
        hud,
        config.hud_log_interval,
        Arc::clone(&latest),
    )?;

    let start = Instant::now();
    let mut sent_until = 0.0;
    loop {
        let now = start.elapsed().as_secs_f64();
        for cmd in script.commands_between(sent_until, now) {
            handle.send(FlightLoopCommand::Key(cmd));
        }
        sent_until = now;
        if now >= secs {
            break;
        }
        std::thread::sleep(frame);
    }

    handle.send(FlightLoopCommand::Shutdown);
    handle.join().ok_or(AppError::LoopPanicked("flight"))?;

    let last = latest.lock().ok().and_then(|mut lock| lock.take());
    if let Some(snapshot) = &last {
        log::info!(
            "Flight ended at frame {}: {}",
            snapshot.time.frame,
            status_line(&snapshot.hud)
        );
    }
    Ok(last)
}

/// Launch the requested volleys and bursts together, let them burn out, and
/// return the final canvas. Written to `output` as PPM when given.
pub fn fireworks(
    config: &AppConfig,
    volleys: u32,
    bursts: u32,
    output: Option<&Path>,
) -> Result<RasterCanvas> {
    let handle = spawn_fireworks_loop(
        StageConfig {
            seed: config.seed,
            width: config.width,
            height: config.height,
        },
        frame_duration(config.frame_rate),
    )?;

    for _ in 0..volleys {
        handle.send(FireworksLoopCommand::LaunchRockets);
    }
    for _ in 0..bursts {
        handle.send(FireworksLoopCommand::LaunchBurst);
    }
    let canvas = handle.join().ok_or(AppError::LoopPanicked("fireworks"))?;

    if let Some(path) = output {
        canvas.save_ppm(path)?;
    }
    Ok(canvas)
}

/// The static scenery for the configured seed.
pub fn scene(config: &AppConfig) -> SceneDescription {
    SimulationEngine::new(sim_config(config)).scene().clone()
}
