//! Loading/error/items state for a claim list, guarded by a generation
//! counter so a superseded response never lands.

use crate::error::ApiError;
use crate::model::Claim;
use log::debug;

/// Ticket handed out by [`ListQuery::begin`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Generation(u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListState {
    pub items: Vec<Claim>,
    pub loading: bool,
    /// Empty means no error.
    pub error: String,
}

impl ListState {
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// Settled with no error and nothing to show.
    pub fn is_settled_empty(&self) -> bool {
        !self.loading && !self.has_error() && self.items.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    state: ListState,
    current: u64,
}

impl ListQuery {
    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn items(&self) -> &[Claim] {
        &self.state.items
    }

    /// Starts a fetch. Any earlier ticket is superseded.
    pub fn begin(&mut self) -> Generation {
        self.current += 1;
        self.state.loading = true;
        self.state.error.clear();
        Generation(self.current)
    }

    /// Applies a result if `generation` is still current. Returns whether it was applied.
    pub fn resolve(
        &mut self,
        generation: Generation,
        result: Result<Vec<Claim>, ApiError>,
    ) -> bool {
        if generation.0 != self.current {
            debug!(
                "dropping stale response (generation {} < {})",
                generation.0, self.current
            );
            return false;
        }
        match result {
            Ok(items) => self.state.items = items,
            Err(err) => self.state.error = err.to_string(),
        }
        self.state.loading = false;
        true
    }

    /// Supersedes any in-flight fetch without starting a new one.
    pub fn invalidate(&mut self) {
        self.current += 1;
    }

    pub fn retain(&mut self, keep: impl FnMut(&Claim) -> bool) {
        self.state.items.retain(keep);
    }
}
