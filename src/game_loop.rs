//! Fixed-tick game loop driver
//!
//! Runs the simulation on its own thread. The window layer talks to it
//! through two channels only:
//! - input events go in through an `mpsc` sender
//! - one `RenderSnapshot` per tick comes out through a `RenderSink`
//!
//! Pacing is a plain sleep after every tick. Drift is accepted; there is
//! no catch-up.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use crate::settings::Settings;
use crate::sim::{InputEvent, Level, RenderSnapshot, SimulationState, WallGeometry, apply_event, tick};

/// Receives a snapshot after every tick
pub trait RenderSink: Send {
    fn present(&mut self, snapshot: RenderSnapshot);
}

/// Latest-snapshot slot shared with the render thread
#[derive(Debug, Clone, Default)]
pub struct SharedSnapshot {
    slot: Arc<Mutex<Option<RenderSnapshot>>>,
}

impl SharedSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the most recent snapshot, if a tick has run
    pub fn latest(&self) -> Option<RenderSnapshot> {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Take the most recent snapshot, leaving the slot empty
    pub fn take(&self) -> Option<RenderSnapshot> {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
    }
}

impl RenderSink for SharedSnapshot {
    fn present(&mut self, snapshot: RenderSnapshot) {
        *self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(snapshot);
    }
}

/// Owns the simulation and steps it at a fixed cadence
pub struct GameLoop {
    state: SimulationState,
    level: Level,
    settings: Settings,
    walls: WallGeometry,
    events: Receiver<InputEvent>,
    sink: Box<dyn RenderSink>,
    running: Arc<AtomicBool>,
    input_closed: bool,
}

/// Handles the window layer keeps after spawning the loop
pub struct LoopHandle {
    pub input: Sender<InputEvent>,
    pub running: Arc<AtomicBool>,
    pub thread: JoinHandle<SimulationState>,
}

impl LoopHandle {
    /// Clear the running flag and wait for the loop to exit
    pub fn stop(self) -> thread::Result<SimulationState> {
        self.running.store(false, Ordering::Release);
        self.thread.join()
    }
}

impl GameLoop {
    /// Create a loop plus the sender the window layer feeds input into
    pub fn new(
        state: SimulationState,
        level: Level,
        settings: Settings,
        sink: Box<dyn RenderSink>,
    ) -> (Self, Sender<InputEvent>) {
        let (tx, rx) = mpsc::channel();
        let walls = WallGeometry::from(&settings);
        let game_loop = Self {
            state,
            level,
            settings,
            walls,
            events: rx,
            sink,
            running: Arc::new(AtomicBool::new(true)),
            input_closed: false,
        };
        (game_loop, tx)
    }

    /// Shared running flag
    pub fn running(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.running)
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Apply all queued input, in arrival order
    fn drain_input(&mut self) {
        loop {
            match self.events.try_recv() {
                Ok(event) => apply_event(&mut self.state, event, &self.settings),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !self.input_closed {
                        log::warn!("Input channel closed, keeping last latched input");
                        self.input_closed = true;
                    }
                    break;
                }
            }
        }
    }

    /// Drain input, run one tick and publish a snapshot
    pub fn step(&mut self) {
        self.drain_input();
        let report = tick(&mut self.state, &self.level, &self.settings);
        if report.knockbacks > 0 {
            log::debug!("Obstacle hit at tick {}", self.state.time_ticks);
        }
        self.sink
            .present(RenderSnapshot::capture(&self.state, &self.level, &self.walls));
    }

    /// Step until the running flag clears, sleeping between ticks
    pub fn run(mut self) -> SimulationState {
        log::info!(
            "Game loop started ({} platforms, {} ms ticks)",
            self.level.len(),
            self.settings.tick_interval_ms
        );
        let interval = self.settings.tick_interval();
        while self.running.load(Ordering::Acquire) {
            self.step();
            thread::sleep(interval);
        }
        log::info!("Game loop stopped after {} ticks", self.state.time_ticks);
        self.state
    }

    /// Build a loop and run it on a dedicated thread.
    ///
    /// The returned handle holds the only input sender, so dropping it closes
    /// the input channel.
    pub fn spawn(
        state: SimulationState,
        level: Level,
        settings: Settings,
        sink: Box<dyn RenderSink>,
    ) -> std::io::Result<LoopHandle> {
        let (game_loop, input) = Self::new(state, level, settings, sink);
        let running = game_loop.running();
        let thread = thread::Builder::new()
            .name("game-loop".into())
            .spawn(move || game_loop.run())?;
        Ok(LoopHandle {
            input,
            running,
            thread,
        })
    }
}
