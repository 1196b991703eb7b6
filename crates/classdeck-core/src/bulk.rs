//! Sequential bulk-action runner.
//!
//! Bulk actions (mark-read, delete) apply one single-item mutation per
//! selected id, awaited strictly sequentially so server-side effects land
//! in list order and the backend is never flooded. The first failure stops
//! the run; instead of one aggregate success/error message, callers get a
//! per-item outcome list and can report exactly what happened.

use std::future::Future;

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkStatus {
    Succeeded,
    Failed(String),
    /// Not attempted because an earlier item failed
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkOutcome<Id> {
    pub id: Id,
    pub status: BulkStatus,
}

/// Per-item results of one bulk run, in execution order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkReport<Id> {
    pub outcomes: Vec<BulkOutcome<Id>>,
}

impl<Id> BulkReport<Id> {
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.count(|status| matches!(status, BulkStatus::Succeeded))
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(|status| matches!(status, BulkStatus::Failed(_)))
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(|status| matches!(status, BulkStatus::Skipped))
    }

    #[must_use]
    pub fn is_complete_success(&self) -> bool {
        self.failed() == 0 && self.skipped() == 0
    }

    fn count(&self, predicate: impl Fn(&BulkStatus) -> bool) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| predicate(&outcome.status))
            .count()
    }
}

/// Run `operation` over `ids` sequentially, stopping at the first failure.
///
/// When item `k` fails, items `1..k-1` stay mutated, `k` is recorded with
/// its reason, and `k+1..N` are marked skipped without being attempted.
pub async fn run_sequential<Id, Op, Fut>(ids: Vec<Id>, mut operation: Op) -> BulkReport<Id>
where
    Id: Clone,
    Op: FnMut(Id) -> Fut,
    Fut: Future<Output = Result<(), Error>>,
{
    let mut outcomes = Vec::with_capacity(ids.len());
    let mut halted = false;

    for id in ids {
        if halted {
            outcomes.push(BulkOutcome {
                id,
                status: BulkStatus::Skipped,
            });
            continue;
        }
        match operation(id.clone()).await {
            Ok(()) => outcomes.push(BulkOutcome {
                id,
                status: BulkStatus::Succeeded,
            }),
            Err(error) => {
                tracing::warn!("bulk action halted: {error}");
                outcomes.push(BulkOutcome {
                    id,
                    status: BulkStatus::Failed(error.user_message()),
                });
                halted = true;
            }
        }
    }

    BulkReport { outcomes }
}
