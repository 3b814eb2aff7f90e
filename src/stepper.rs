//! Continuous stepping of a grid at a fixed rate.

use crate::{
    config::{MAX_SPEED, MIN_SPEED},
    error::Error,
    grid::Grid,
};
use log::debug;
use std::{
    sync::{
        atomic::{AtomicBool, AtomicU32, Ordering},
        Arc,
    },
    thread::{self, JoinHandle},
    time::Duration,
};

/// Repeatedly advances a grid on a background thread.
///
/// While running, the stepper sleeps for `1 / speed` seconds and then
/// calls [`Grid::advance`], over and over. Stopping or dropping the
/// stepper cancels the task: no further generation is computed once
/// the current sleep interval elapses, and the worker thread is
/// joined.
#[derive(Debug)]
pub struct Stepper {
    grid: Arc<Grid>,
    speed: Arc<AtomicU32>,
    stepping: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl Stepper {
    /// Creates a stepper for `grid` at the slowest speed, not yet
    /// running.
    pub fn new(grid: Arc<Grid>) -> Self {
        Self {
            grid,
            speed: Arc::new(AtomicU32::new(MIN_SPEED)),
            stepping: Arc::new(AtomicBool::new(false)),
            worker: None,
        }
    }

    /// The current speed, in generations per second.
    pub fn speed(&self) -> u32 {
        self.speed.load(Ordering::Relaxed)
    }

    /// Sets the speed, in generations per second.
    ///
    /// A running stepper picks the new speed up from its next sleep
    /// interval. Fails with [`Error::InvalidSpeed`] unless the value
    /// lies in [`MIN_SPEED`]`..=`[`MAX_SPEED`].
    pub fn set_speed(&self, speed: u32) -> Result<(), Error> {
        if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
            return Err(Error::InvalidSpeed(speed));
        }
        self.speed.store(speed, Ordering::Relaxed);
        Ok(())
    }

    /// Whether the background task is currently running.
    pub fn is_stepping(&self) -> bool {
        self.stepping.load(Ordering::Relaxed)
    }

    /// Starts stepping indefinitely.
    ///
    /// Starting an already-running stepper is a no-op.
    pub fn start(&mut self) {
        if self.worker.is_some() {
            return;
        }
        self.stepping.store(true, Ordering::Relaxed);
        let grid = Arc::clone(&self.grid);
        let speed = Arc::clone(&self.speed);
        let stepping = Arc::clone(&self.stepping);
        self.worker = Some(thread::spawn(move || {
            while stepping.load(Ordering::Relaxed) {
                let millis = 1000 / u64::from(speed.load(Ordering::Relaxed));
                thread::sleep(Duration::from_millis(millis));
                // Re-check after sleeping so that cancellation takes
                // effect within one interval.
                if !stepping.load(Ordering::Relaxed) {
                    break;
                }
                grid.advance();
            }
            debug!("stepping task stopped");
        }));
    }

    /// Stops the background task and waits for it to wind down.
    ///
    /// The worker only sleeps between generations, so this returns
    /// within one sleep interval. Stopping a stepper that is not
    /// running is a no-op.
    pub fn stop(&mut self) {
        self.stepping.store(false, Ordering::Relaxed);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for Stepper {
    fn drop(&mut self) {
        self.stop();
    }
}
