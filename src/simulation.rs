use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::mpsc;
use std::sync::mpsc::Receiver;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::mpsc::Sender;
use std::time::Duration;

use tracing::debug;
use tracing::info;

use crate::grid::Grid;

/// Called once per tick with the current grid, before it is replaced by its next generation.
pub trait Render {
    type Error;

    fn render(&mut self, grid: &Grid, generation: u64) -> Result<(), Self::Error>;
}

/// Cancels a running [`SimulationLoop`]. Cheap to clone, and safe to hand to other threads.
#[derive(Clone)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,

    /// Wakes the loop up if it is waiting for its next tick
    wake: Sender<()>,
}

impl StopHandle {
    /// Stop the loop. It finishes the tick it is in, if any, and never ticks again.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);

        // the loop owns a receiver for as long as it lives, if it's gone there's nothing to wake
        let _ = self.wake.send(());
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

/// Advances a [`Grid`] one generation per tick, handing every generation to a [`Render`]er
/// first.
///
/// Ticks run on the thread calling [`SimulationLoop::start`]. A tick always completes, render
/// then swap, before the next one is scheduled.
pub struct SimulationLoop<R> {
    /// The current generation
    grid: Grid,

    /// Number of ticks so far
    generation: u64,

    render: R,

    handle: StopHandle,
    wake: Receiver<()>,
}

impl<R: Render> SimulationLoop<R> {
    pub fn new(grid: Grid, render: R) -> Self {
        let (tx, rx) = mpsc::channel();

        Self {
            grid,
            generation: 0,
            render,
            handle: StopHandle {
                stopped: Arc::new(AtomicBool::new(false)),
                wake: tx,
            },
            wake: rx,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn renderer(&self) -> &R {
        &self.render
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.render
    }

    /// A handle that stops this loop, from anywhere
    pub fn stop_handle(&self) -> StopHandle {
        self.handle.clone()
    }

    pub fn stop(&self) {
        self.handle.stop();
    }

    pub fn is_stopped(&self) -> bool {
        self.handle.is_stopped()
    }

    /// Run a single tick: bump the generation counter, render, then replace the grid with its
    /// next generation.
    pub fn tick(&mut self) -> Result<(), R::Error> {
        self.generation += 1;

        self.render.render(&self.grid, self.generation)?;

        let next = self.grid.next_generation();
        debug!(
            generation = self.generation,
            population = next.population(),
            "advanced"
        );
        self.grid = next;

        Ok(())
    }

    /// Tick every `interval` until stopped. The wait starts once a tick is done, so a slow
    /// renderer stretches the period. Returns the number of ticks run.
    ///
    /// Render errors end the loop and are returned as-is.
    pub fn start(&mut self, interval: Duration) -> Result<u64, R::Error> {
        info!(
            ?interval,
            width = self.grid.width(),
            height = self.grid.height(),
            "starting simulation"
        );

        let mut ticks = 0;

        while !self.handle.is_stopped() {
            self.tick()?;
            ticks += 1;

            if self.handle.is_stopped() {
                break;
            }

            // Either woken up early by a stop or timed out. We hold a sender, so the channel can't
            // disconnect.
            if let Err(RecvTimeoutError::Disconnected) = self.wake.recv_timeout(interval) {
                break;
            }
        }

        info!(ticks, generation = self.generation, "simulation stopped");

        Ok(ticks)
    }
}
