//! Paced generation on a background worker with token-based cancellation
//!
//! Only one run is live at a time. Starting or cancelling bumps a shared
//! generation token while holding the renderer lock; a worker re-checks the
//! token under that same lock before every emission. Once `start` or
//! `cancel` returns, no frame from an older run can reach the renderer.
//!
//! Lock order is renderer, then token.

use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::algorithm::executor::{KruskalCarver, RandomSelector, StepOutcome};
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::dimensions::GridDimensions;
use crate::spatial::grid::MazeGrid;
use crate::spatial::walls::{WallFrame, WallRenderer};

/// Version number identifying one generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GenerationToken(pub u64);

/// Parameters of one paced run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PacedRequest {
    /// Grid sizing for the run
    pub dimensions: GridDimensions,
    /// Pause after each merge; zero emits only the finished maze
    pub merge_delay: Duration,
}

/// How a run ended
#[derive(Debug)]
pub enum PacedOutcome {
    /// The run finished and emitted its final frame
    Completed(MazeGrid),
    /// A newer run or an explicit cancel superseded this one
    Cancelled,
}

type SharedRenderer = Arc<Mutex<Box<dyn WallRenderer + Send>>>;

#[derive(Default)]
struct LiveGeneration {
    current: Mutex<u64>,
    changed: Condvar,
}

impl LiveGeneration {
    fn lock(&self) -> Result<MutexGuard<'_, u64>> {
        self.current
            .lock()
            .map_err(|_poisoned| AlgorithmError::LockPoisoned {
                resource: "generation token",
            })
    }

    fn is_live(&self, token: GenerationToken) -> Result<bool> {
        Ok(*self.lock()? == token.0)
    }

    // Returns whether the run is still live after the pause
    fn pause(&self, token: GenerationToken, delay: Duration) -> Result<bool> {
        let guard = self.lock()?;
        let (guard, _) = self
            .changed
            .wait_timeout_while(guard, delay, |current| *current == token.0)
            .map_err(|_poisoned| AlgorithmError::LockPoisoned {
                resource: "generation token",
            })?;
        Ok(*guard == token.0)
    }
}

/// Drives paced maze generation and guarantees stale runs stay silent
pub struct PacedGenerator {
    renderer: SharedRenderer,
    live: Arc<LiveGeneration>,
    worker: Option<JoinHandle<Result<PacedOutcome>>>,
}

impl PacedGenerator {
    /// Create a generator that emits every frame to `renderer`
    pub fn new<W>(renderer: W) -> Self
    where
        W: WallRenderer + Send + 'static,
    {
        let renderer: Box<dyn WallRenderer + Send> = Box::new(renderer);
        Self {
            renderer: Arc::new(Mutex::new(renderer)),
            live: Arc::new(LiveGeneration::default()),
            worker: None,
        }
    }

    /// Token of the run currently considered live
    ///
    /// # Errors
    ///
    /// Returns an error if the token lock was poisoned
    pub fn live_token(&self) -> Result<GenerationToken> {
        Ok(GenerationToken(*self.live.lock()?))
    }

    /// Cancel any previous run and start a new one
    ///
    /// # Errors
    ///
    /// Returns an error if a lock was poisoned or the worker thread could not
    /// be spawned
    pub fn start<R>(
        &mut self,
        request: PacedRequest,
        random_selector: RandomSelector<R>,
    ) -> Result<GenerationToken>
    where
        R: Rng + Send + 'static,
    {
        let token = self.cancel()?;
        self.reap_worker();

        let renderer = Arc::clone(&self.renderer);
        let live = Arc::clone(&self.live);
        let worker = thread::Builder::new()
            .name(format!("mazecarve-run-{}", token.0))
            .spawn(move || run_paced(&renderer, &live, token, request, random_selector))
            .map_err(|source| AlgorithmError::WorkerSpawn { source })?;
        self.worker = Some(worker);

        info!(
            token = token.0,
            width = request.dimensions.width,
            height = request.dimensions.height,
            delay_ms = request.merge_delay.as_millis() as u64,
            "Started paced generation"
        );
        Ok(token)
    }

    /// Invalidate the live run and return the token now considered live
    ///
    /// Blocks while a frame is being emitted, so nothing from the cancelled
    /// run reaches the renderer after this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if a lock was poisoned
    pub fn cancel(&mut self) -> Result<GenerationToken> {
        let _renderer = self
            .renderer
            .lock()
            .map_err(|_poisoned| AlgorithmError::LockPoisoned {
                resource: "wall renderer",
            })?;
        let mut current = self.live.lock()?;
        *current += 1;
        self.live.changed.notify_all();
        debug!(token = *current, "Generation token advanced");
        Ok(GenerationToken(*current))
    }

    /// Block until the most recent run ends
    ///
    /// Returns `None` when no run was started since the last wait.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker panicked or failed
    pub fn wait(&mut self) -> Result<Option<PacedOutcome>> {
        let Some(worker) = self.worker.take() else {
            return Ok(None);
        };
        let outcome = worker.join().map_err(|_panic| AlgorithmError::WorkerPanicked)??;
        Ok(Some(outcome))
    }

    // A superseded worker exits at its next token check; its result is moot
    fn reap_worker(&mut self) {
        if let Some(worker) = self.worker.take() {
            match worker.join() {
                Ok(Ok(_)) => {}
                Ok(Err(err)) => warn!(error = %err, "Superseded generation run failed"),
                Err(_panic) => warn!("Superseded generation run panicked"),
            }
        }
    }
}

impl Drop for PacedGenerator {
    fn drop(&mut self) {
        if self.cancel().is_ok() {
            self.reap_worker();
        }
    }
}

fn run_paced<R: Rng>(
    renderer: &SharedRenderer,
    live: &LiveGeneration,
    token: GenerationToken,
    request: PacedRequest,
    random_selector: RandomSelector<R>,
) -> Result<PacedOutcome> {
    let mut carver = KruskalCarver::new(request.dimensions, random_selector)?;
    let paced = !request.merge_delay.is_zero();

    loop {
        if !live.is_live(token)? {
            return Ok(cancelled(token, carver.merge_count()));
        }

        match carver.execute_step()? {
            StepOutcome::Merged { .. } if paced => {
                if !emit_if_live(renderer, live, token, &carver.frame(false))?
                    || !live.pause(token, request.merge_delay)?
                {
                    return Ok(cancelled(token, carver.merge_count()));
                }
            }
            StepOutcome::Merged { .. } | StepOutcome::Unchanged { .. } => {}
            StepOutcome::Finished => break,
        }
    }

    if !emit_if_live(renderer, live, token, &carver.frame(true))? {
        return Ok(cancelled(token, carver.merge_count()));
    }

    debug!(token = token.0, merges = carver.merge_count(), "Paced generation complete");
    Ok(PacedOutcome::Completed(carver.into_grid()))
}

fn emit_if_live(
    renderer: &SharedRenderer,
    live: &LiveGeneration,
    token: GenerationToken,
    frame: &WallFrame,
) -> Result<bool> {
    let mut renderer = renderer.lock().map_err(|_poisoned| AlgorithmError::LockPoisoned {
        resource: "wall renderer",
    })?;
    if !live.is_live(token)? {
        return Ok(false);
    }
    renderer.emit_walls(frame);
    Ok(true)
}

fn cancelled(token: GenerationToken, merges: usize) -> PacedOutcome {
    debug!(token = token.0, merges, "Paced generation cancelled");
    PacedOutcome::Cancelled
}
