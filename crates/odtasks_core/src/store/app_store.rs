//! Store context: current state, dispatch, commit.
//!
//! # Invariants
//! - The state is only ever replaced by `reduce` output.
//! - Every non-hydrate dispatch is reduced then committed before returning,
//!   so no two reductions interleave.
//! - A failed commit keeps the in-memory state; the durable record lags by
//!   that one transition until the next successful commit.

use crate::clock::Clock;
use crate::model::state::AppState;
use crate::reducer::{reduce, Action};
use crate::repo::state_repo::{RepoError, StateRepository};
use crate::store::connectivity::Connectivity;
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    /// The transition was applied in memory but could not be persisted.
    Commit { action: &'static str, source: RepoError },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Commit { action, source } => {
                write!(f, "failed to persist state after `{action}`: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Commit { source, .. } => Some(source),
        }
    }
}

/// Owner of the single `AppState` value.
pub struct AppStore<R: StateRepository> {
    state: AppState,
    repo: R,
    clock: Box<dyn Clock + Send>,
    connectivity: Connectivity,
}

impl<R: StateRepository> AppStore<R> {
    /// Loads the durable record and hydrates from it, or starts from the
    /// initial state when nothing usable is stored.
    pub fn open(repo: R, clock: impl Clock + Send + 'static, connectivity: Connectivity) -> Self {
        let mut store = Self {
            state: AppState::initial(),
            repo,
            clock: Box::new(clock),
            connectivity,
        };

        match store.repo.load() {
            Some(snapshot) => {
                let hydrate = Action::Hydrate(Box::new(snapshot));
                store.state = reduce(&store.state, &hydrate, &*store.clock);
                info!(
                    "event=store_open module=store status=ok source=snapshot tasks={} notes={}",
                    store.state.tasks.len(),
                    store.state.notes.len()
                );
            }
            None => info!("event=store_open module=store status=ok source=initial"),
        }
        store
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn is_online(&self) -> bool {
        self.connectivity.is_online()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Reduces `action` and commits the result.
    ///
    /// # Errors
    /// - `StoreError::Commit` when saving fails; the new state is still
    ///   visible through `state()`.
    pub fn dispatch(&mut self, action: Action) -> StoreResult<()> {
        let started_at = Instant::now();
        let kind = action.kind();

        self.state = reduce(&self.state, &action, &*self.clock);
        if !action.commits() {
            debug!("event=dispatch module=store status=ok action={kind} committed=false");
            return Ok(());
        }

        match self.repo.save(&self.state) {
            Ok(()) => {
                debug!(
                    "event=dispatch module=store status=ok action={kind} duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(source) => {
                error!(
                    "event=dispatch module=store status=error action={kind} error_code=commit_failed error={source}"
                );
                Err(StoreError::Commit {
                    action: kind,
                    source,
                })
            }
        }
    }

    /// Dispatches several actions in order, stopping at the first failed
    /// commit.
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) -> StoreResult<()> {
        for action in actions {
            self.dispatch(action)?;
        }
        Ok(())
    }
}
