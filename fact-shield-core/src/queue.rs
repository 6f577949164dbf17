use crate::error::ApiError;
use crate::model::Claim;
use crate::query::{Generation, ListQuery, ListState};
use log::{info, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VoteOutcome {
    /// Vote accepted; the claim left the local list.
    Removed,
    /// Vote rejected; the list is untouched. Carries the alert text.
    Failed(String),
}

pub fn vote_failure_message(err: &ApiError) -> String {
    format!("Vote failed: {err}")
}

/// Decided from the response alone, so a failure can be reported even after
/// the list that issued the vote is gone.
pub fn vote_outcome(claim_id: &str, result: Result<(), ApiError>) -> VoteOutcome {
    match result {
        Ok(()) => {
            info!("vote recorded on claim {claim_id}");
            VoteOutcome::Removed
        }
        Err(err) => {
            warn!("vote on claim {claim_id} failed: {err}");
            VoteOutcome::Failed(vote_failure_message(&err))
        }
    }
}

/// Escalated claims awaiting this fact-checker's vote. Loads are triggered
/// explicitly (mount and Refresh) rather than by a parameter change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EscalatedQueue {
    query: ListQuery,
}

impl EscalatedQueue {
    pub fn state(&self) -> &ListState {
        self.query.state()
    }

    pub fn items(&self) -> &[Claim] {
        self.query.items()
    }

    /// Nothing left to vote on once loading finished. An error does not hide this.
    pub fn is_drained(&self) -> bool {
        !self.state().loading && self.items().is_empty()
    }

    pub fn begin_load(&mut self) -> Generation {
        self.query.begin()
    }

    pub fn finish_load(
        &mut self,
        generation: Generation,
        result: Result<Vec<Claim>, ApiError>,
    ) -> bool {
        self.query.resolve(generation, result)
    }

    /// Optimistic: a recorded vote drops the claim without re-fetching.
    /// A failed one leaves the list untouched for a retry.
    pub fn apply_vote(&mut self, claim_id: &str, outcome: &VoteOutcome) {
        if *outcome == VoteOutcome::Removed {
            self.query.retain(|c| c.id != claim_id);
        }
    }
}
