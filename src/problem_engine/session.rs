//! Stepwise reveal controller.
//!
//! [`RevealState`] is the bare step counter; [`Session`] owns one active
//! problem plus its counter and drives the transitions a UI can trigger:
//!
//! | Action | Effect |
//! |--------|--------|
//! | `select_family` | switch family, then `reset` |
//! | `advance` | step + 1, or `reset` when already at step 3 |
//! | `new_problem` | `reset`, whatever the step |
//! | `reset` | step = 0, generate a new problem, land it after the delay |
//!
//! Landing always puts the step back to 0, even if the outgoing problem was
//! advanced while the new one waited.
//!
//! The reset delay is host-driven: call [`Session::elapse`] from the UI clock.
//! Only the newest reset's problem can ever land; older pending problems are
//! dropped when a newer reset supersedes them.

use std::time::Duration;

use rand::rngs::StdRng;
use tracing::debug;

use crate::config::SessionConfig;
use crate::error::ProblemError;
use crate::problem_engine::{
    generator::generate,
    models::{Family, ProblemInstance},
    random::{source_from_seed, RandomSource},
    reveal::{progress_fraction, scene, Scene, FINAL_STEP},
};

/// Outcome of [`RevealState::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved forward to the contained step.
    Stepped(u8),
    /// Already at the final step; the owner must replace the problem.
    Restart,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealState {
    step: u8,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(self) -> u8 {
        self.step
    }

    /// Step 3 is both a display state and the trigger for the next restart.
    pub fn is_finished(self) -> bool {
        self.step == FINAL_STEP
    }

    pub fn progress(self) -> f32 {
        progress_fraction(self.step)
    }

    pub fn advance(&mut self) -> Advance {
        if self.step < FINAL_STEP {
            self.step += 1;
            Advance::Stepped(self.step)
        } else {
            Advance::Restart
        }
    }

    pub fn reset(&mut self) {
        self.step = 0;
    }
}

#[derive(Debug)]
struct Pending {
    epoch: u64,
    problem: ProblemInstance,
    waited: Duration,
}

/// One learner's active problem and reveal progress.
#[derive(Debug)]
pub struct Session<R: RandomSource = StdRng> {
    rng: R,
    family: Family,
    config: SessionConfig,
    current: Option<ProblemInstance>,
    reveal: RevealState,
    pending: Option<Pending>,
    epoch: u64,
    generation: u64,
}

impl Session<StdRng> {
    /// Session with the default config (100 ms reset delay, entropy).
    pub fn new(family: Family) -> Result<Self, ProblemError> {
        Self::with_config(family, SessionConfig::default())
    }

    pub fn with_config(family: Family, config: SessionConfig) -> Result<Self, ProblemError> {
        let rng = source_from_seed(config.rng_seed);
        Session::with_source(family, config, rng)
    }
}

impl<R: RandomSource> Session<R> {
    /// Build a session around an injected randomness source and run the
    /// initial reset.
    pub fn with_source(family: Family, config: SessionConfig, rng: R) -> Result<Self, ProblemError> {
        let mut session = Session {
            rng,
            family,
            config,
            current: None,
            reveal: RevealState::new(),
            pending: None,
            epoch: 0,
            generation: 0,
        };
        session.reset()?;
        Ok(session)
    }

    // ── transitions ────────────────────────────────────────────────────────

    /// Back to step 0 with a freshly generated problem for the active family.
    pub fn reset(&mut self) -> Result<(), ProblemError> {
        let problem = generate(self.family, &mut self.rng)?;
        self.reveal.reset();
        self.epoch += 1;

        if let Some(stale) = self.pending.take() {
            debug!(stale_epoch = stale.epoch, id = %stale.problem.id, "discarding superseded problem");
        }
        debug!(epoch = self.epoch, family = self.family.tag(), id = %problem.id, "reset");
        self.pending = Some(Pending { epoch: self.epoch, problem, waited: Duration::ZERO });

        if self.config.reset_delay().is_zero() {
            self.land_pending();
        }
        Ok(())
    }

    pub fn select_family(&mut self, family: Family) -> Result<(), ProblemError> {
        self.family = family;
        self.reset()
    }

    /// Step forward; at the final step this replaces the problem instead.
    pub fn advance(&mut self) -> Result<Advance, ProblemError> {
        match self.reveal.advance() {
            Advance::Restart => {
                self.reset()?;
                Ok(Advance::Restart)
            }
            stepped => Ok(stepped),
        }
    }

    pub fn new_problem(&mut self) -> Result<(), ProblemError> {
        self.reset()
    }

    /// Feed elapsed wall time; returns `true` if a pending problem landed.
    pub fn elapse(&mut self, dt: Duration) -> bool {
        let delay = self.config.reset_delay();
        let due = match self.pending.as_mut() {
            Some(pending) => {
                pending.waited += dt;
                pending.waited >= delay
            }
            None => false,
        };
        due && self.land_pending()
    }

    /// Make the pending problem current now, skipping the rest of the delay.
    pub fn land_pending(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        debug!(epoch = pending.epoch, id = %pending.problem.id, "problem landed");
        // Steps taken on the outgoing problem while this one waited do not carry over.
        self.reveal.reset();
        self.current = Some(pending.problem);
        self.generation += 1;
        true
    }

    // ── accessors ──────────────────────────────────────────────────────────

    /// The visible problem; `None` until the first reset lands.
    pub fn current(&self) -> Option<&ProblemInstance> {
        self.current.as_ref()
    }

    pub fn step(&self) -> u8 {
        self.reveal.step()
    }

    pub fn reveal(&self) -> RevealState {
        self.reveal
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of problems that have landed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Scene for the visible problem at the current step.
    pub fn view(&self) -> Option<Scene<'_>> {
        self.current.as_ref().map(|p| scene(p, self.reveal.step()))
    }
}
