//! Simulation engine, the core of the flight arcade.
//!
//! `SimulationEngine` owns the hecs ECS world and the plane, applies queued
//! input, runs all systems, and produces `FlightSnapshot`s. Completely
//! headless (no renderer dependency), enabling deterministic testing.

use std::collections::VecDeque;
use std::time::Duration;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skyward_core::commands::FlightCommand;
use skyward_core::constants::{BALLOON_COUNT, CLOUD_COUNT};
use skyward_core::enums::FlightPhase;
use skyward_core::events::FlightEvent;
use skyward_core::state::{FlightSnapshot, SceneDescription};
use skyward_core::types::SimTime;

use crate::camera::CameraRig;
use crate::crash::CrashState;
use crate::flight::{self, FlightState};
use crate::input::{ControlIntent, InputState};
use crate::systems;
use crate::systems::collision::Hit;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same world.
    pub seed: u64,
    pub balloon_count: usize,
    pub cloud_count: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            balloon_count: BALLOON_COUNT,
            cloud_count: CLOUD_COUNT,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    flight: FlightState,
    camera: CameraRig,
    crash: CrashState,
    input: InputState,
    command_queue: VecDeque<FlightCommand>,
    events: Vec<FlightEvent>,
    scene: SceneDescription,
}

impl SimulationEngine {
    /// Create a new simulation engine and populate its world.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let scene = world_setup::setup_world(
            &mut world,
            &mut rng,
            config.cloud_count,
            config.balloon_count,
        );

        Self {
            world,
            time: SimTime::default(),
            flight: FlightState::initial(),
            camera: CameraRig::default(),
            crash: CrashState::default(),
            input: InputState::new(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            scene,
        }
    }

    /// Queue an input command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: FlightCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = FlightCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame observed at `now` on the host
    /// clock, and return the resulting snapshot.
    pub fn tick(&mut self, now: Duration) -> FlightSnapshot {
        let now_secs = now.as_secs_f64();

        self.poll_timers(now);
        self.process_commands();
        self.time.advance_to(now_secs);
        self.run_systems(now_secs);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            &self.flight,
            &self.camera,
            &self.crash,
            events,
        )
    }

    /// Fire any wall-clock timer that is due. Returns `true` if the crash
    /// reset ran. The host may call this between frames.
    pub fn poll_timers(&mut self, now: Duration) -> bool {
        if self.crash.poll(now.as_secs_f64()) {
            self.reset();
            return true;
        }
        false
    }

    /// Get the current flight phase.
    pub fn phase(&self) -> FlightPhase {
        self.crash.phase()
    }

    /// Get the current frame time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the plane state.
    pub fn flight(&self) -> &FlightState {
        &self.flight
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    /// Static scenery generated at startup.
    pub fn scene(&self) -> &SceneDescription {
        &self.scene
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable plane access for tests that need a specific pose.
    #[cfg(test)]
    pub fn flight_mut(&mut self) -> &mut FlightState {
        &mut self.flight
    }

    /// Place a motionless balloon at an exact position.
    #[cfg(test)]
    pub fn spawn_test_balloon(&mut self, id: u32, position: glam::DVec3) -> hecs::Entity {
        world_setup::spawn_fixed_balloon(&mut self.world, id, position)
    }

    /// Apply all queued key signals to the sampler.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            match command {
                FlightCommand::KeyDown { key, code } => self.input.key_down(&key, &code),
                FlightCommand::KeyUp { key, code } => self.input.key_up(&key, &code),
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, now_secs: f64) {
        // 1. Controls + flight integration. Input is ignored while crashed.
        let intent = if self.crash.is_crashed() {
            ControlIntent::NEUTRAL
        } else {
            self.input.intent()
        };
        flight::integrate(&mut self.flight, intent);

        // 2. Collision checks
        let report = systems::collision::run(&self.world, self.flight.position);
        self.flight.collision_warning = report.warning;
        if let Some(hit) = report.hit {
            self.crash_into(hit, now_secs);
        }

        // 3. Chase camera
        self.camera.follow(&self.flight);

        // 4. Ambient animation
        systems::ambient::drift_clouds(&mut self.world);
        systems::ambient::bob_balloons(&mut self.world, now_secs);
    }

    /// Enter the crashed state. A hit while already crashed is ignored.
    fn crash_into(&mut self, hit: Hit, now_secs: f64) {
        if !self.crash.trigger(now_secs, self.flight.score) {
            return;
        }
        systems::collision::mark_hit(&mut self.world, hit.entity);
        self.flight.speed = 0.0;
        self.events.push(FlightEvent::Crashed {
            balloon_id: hit.balloon_id,
            final_score: self.flight.score,
        });
        log::info!(
            "crashed into balloon {} at ({:.1}, {:.1}, {:.1}), score {}",
            hit.balloon_id,
            self.flight.position.x,
            self.flight.position.y,
            self.flight.position.z,
            self.flight.score
        );
    }

    /// Restore the initial flight state and un-flag every balloon.
    fn reset(&mut self) {
        self.flight.reset();
        systems::collision::restore_materials(&mut self.world);
        self.events.push(FlightEvent::Reset);
        log::info!("flight reset after crash");
    }
}
