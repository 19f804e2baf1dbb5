//! Messages and shared state between the host thread and the loop threads.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use skyward_core::commands::FlightCommand;
use skyward_core::state::FlightSnapshot;

/// Commands sent from the host to the flight loop thread.
#[derive(Debug)]
pub enum FlightLoopCommand {
    /// A key signal to forward to the simulation engine.
    Key(FlightCommand),
    /// Shut down the flight loop thread gracefully.
    Shutdown,
}

/// Commands sent from the host to the fireworks loop thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireworksLoopCommand {
    /// The launch action: one volley of rockets.
    LaunchRockets,
    /// A single burst with no rockets.
    LaunchBurst,
    /// The canvas changed size.
    Resize { width: u32, height: u32 },
    Shutdown,
}

/// Latest flight snapshot, shared with the flight loop thread.
pub type SharedSnapshot = Arc<Mutex<Option<FlightSnapshot>>>;

/// A running loop thread: its command channel and its join handle.
///
/// The thread hands back `T` when it finishes.
pub struct LoopHandle<C, T> {
    pub command_tx: mpsc::Sender<C>,
    pub thread: JoinHandle<T>,
}

impl<C, T> LoopHandle<C, T> {
    pub fn send(&self, cmd: C) -> bool {
        self.command_tx.send(cmd).is_ok()
    }

    /// Wait for the thread to finish. `None` if it panicked.
    pub fn join(self) -> Option<T> {
        drop(self.command_tx);
        self.thread.join().ok()
    }
}
