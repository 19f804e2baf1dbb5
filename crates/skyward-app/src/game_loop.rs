//! Loop threads: the flight sim and the fireworks stage.
//!
//! Each simulation is created inside its own thread and never leaves it.
//! Commands arrive via `mpsc` channel and are drained at frame boundaries.
//! Frames are paced against `Instant`; a loop that falls too far behind
//! drops the missed frames instead of racing to catch up.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use skyward_core::state::FlightSnapshot;
use skyward_fireworks::{render, Stage, StageConfig, TickOutcome};
use skyward_sim::engine::{SimConfig, SimulationEngine};

use crate::error::Result;
use crate::hud::{status_line, Hud, Surface};
use crate::raster::RasterCanvas;
use crate::state::{FireworksLoopCommand, FlightLoopCommand, LoopHandle, SharedSnapshot};

/// Nominal duration of one frame at `frame_rate` Hz.
pub fn frame_duration(frame_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / frame_rate.max(1) as u64)
}

/// Fixed-rate frame scheduler.
#[derive(Debug, Clone)]
pub struct FramePacer {
    frame: Duration,
    next_frame: Instant,
}

impl FramePacer {
    pub fn new(frame: Duration, now: Instant) -> Self {
        Self {
            frame,
            next_frame: now,
        }
    }

    /// Start counting frames from `now`, e.g. after an idle wait.
    pub fn restart(&mut self, now: Instant) {
        self.next_frame = now;
    }

    /// Schedule the next frame. Returns how long to sleep before it, if at all.
    pub fn advance(&mut self, now: Instant) -> Option<Duration> {
        self.next_frame += self.frame;
        if self.next_frame > now {
            Some(self.next_frame - now)
        } else {
            if now - self.next_frame > self.frame * 2 {
                // Too far behind, reset to avoid a catch-up spiral
                self.next_frame = now;
            }
            None
        }
    }

    pub fn wait(&mut self) {
        if let Some(sleep) = self.advance(Instant::now()) {
            std::thread::sleep(sleep);
        }
    }
}

/// Spawns the flight loop in a new thread.
///
/// Each frame is presented on `hud` and stored in `latest_snapshot`. The
/// thread hands the HUD back when it stops.
pub fn spawn_flight_loop<S>(
    config: SimConfig,
    frame: Duration,
    mut hud: Hud<S>,
    hud_log_interval: u32,
    latest_snapshot: SharedSnapshot,
) -> Result<LoopHandle<FlightLoopCommand, Hud<S>>>
where
    S: Surface + Send + 'static,
{
    let (command_tx, cmd_rx) = mpsc::channel::<FlightLoopCommand>();

    let thread = std::thread::Builder::new()
        .name("skyward-flight-loop".into())
        .spawn(move || {
            let mut engine = SimulationEngine::new(config);
            log::info!("Flight loop started, frame every {:?}", frame);
            run_flight_loop(&mut engine, &cmd_rx, frame, |snapshot| {
                hud.present(&snapshot);
                if hud_log_interval > 0 && snapshot.time.frame % hud_log_interval as u64 == 0 {
                    log::debug!("frame {}: {}", snapshot.time.frame, status_line(&snapshot.hud));
                }
                if let Ok(mut lock) = latest_snapshot.lock() {
                    *lock = Some(snapshot);
                }
            });
            log::info!("Flight loop stopped after {} frames", engine.time().frame);
            hud
        })?;

    Ok(LoopHandle { command_tx, thread })
}

/// The flight loop. Runs until Shutdown command or channel disconnect.
pub fn run_flight_loop<F>(
    engine: &mut SimulationEngine,
    cmd_rx: &mpsc::Receiver<FlightLoopCommand>,
    frame: Duration,
    mut on_frame: F,
) where
    F: FnMut(FlightSnapshot),
{
    let clock = Instant::now();
    let mut pacer = FramePacer::new(frame, clock);

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(FlightLoopCommand::Key(cmd)) => engine.queue_command(cmd),
                Ok(FlightLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one frame against the host clock
        let snapshot = engine.tick(clock.elapsed());

        // 3. Hand the snapshot to the presentation side
        on_frame(snapshot);

        // 4. Sleep until the next frame
        pacer.wait();
    }
}

/// Spawns the fireworks loop in a new thread.
///
/// The thread hands its canvas back when it stops.
pub fn spawn_fireworks_loop(
    config: StageConfig,
    frame: Duration,
) -> Result<LoopHandle<FireworksLoopCommand, RasterCanvas>> {
    let (command_tx, cmd_rx) = mpsc::channel::<FireworksLoopCommand>();

    let thread = std::thread::Builder::new()
        .name("skyward-fireworks-loop".into())
        .spawn(move || {
            let mut canvas = RasterCanvas::new(config.width, config.height);
            let mut stage = Stage::new(config);
            run_fireworks_loop(&mut stage, &cmd_rx, frame, &mut canvas);
            log::info!(
                "Fireworks loop stopped after {} frames, {:?} still live",
                stage.frame(),
                stage.stats()
            );
            canvas
        })?;

    Ok(LoopHandle { command_tx, thread })
}

/// The fireworks loop.
///
/// Frames are only scheduled while the stage has something to animate. When
/// it goes idle the loop blocks on the channel until the next command. A
/// disconnected channel lets running shows finish before the loop returns.
pub fn run_fireworks_loop(
    stage: &mut Stage,
    cmd_rx: &mpsc::Receiver<FireworksLoopCommand>,
    frame: Duration,
    canvas: &mut RasterCanvas,
) {
    let mut pacer = FramePacer::new(frame, Instant::now());

    loop {
        if stage.is_idle() {
            match cmd_rx.recv() {
                Ok(cmd) => {
                    if !apply_fireworks_command(stage, canvas, cmd) {
                        return;
                    }
                }
                Err(mpsc::RecvError) => return,
            }
            pacer.restart(Instant::now());
        }

        loop {
            match cmd_rx.try_recv() {
                Ok(cmd) => {
                    if !apply_fireworks_command(stage, canvas, cmd) {
                        return;
                    }
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => break,
            }
        }

        let outcome = stage.tick();
        render(stage, canvas);

        if outcome == TickOutcome::Continue {
            pacer.wait();
        } else {
            log::debug!("Stage idle at frame {}", stage.frame());
        }
    }
}

/// Returns false on Shutdown.
fn apply_fireworks_command(
    stage: &mut Stage,
    canvas: &mut RasterCanvas,
    cmd: FireworksLoopCommand,
) -> bool {
    match cmd {
        FireworksLoopCommand::LaunchRockets => stage.launch_rockets(),
        FireworksLoopCommand::LaunchBurst => stage.launch_burst(),
        FireworksLoopCommand::Resize { width, height } => {
            stage.resize(width, height);
            canvas.resize(width, height);
        }
        FireworksLoopCommand::Shutdown => return false,
    }
    true
}
