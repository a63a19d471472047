/// Outcome of a remote query that is allowed to fail without aborting the run.
///
/// `Failed` renders the same as "no data" in the digest, but callers and tests
/// can still tell a degraded fetch apart from a genuinely empty result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    Data(T),
    Failed,
}

impl<T> FetchOutcome<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            FetchOutcome::Data(value) => Some(value),
            FetchOutcome::Failed => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed)
    }
}

/// Snapshot of everything fetched from Notion for one run.
#[derive(Debug, Clone)]
pub struct DigestData {
    pub weekly_goals: FetchOutcome<Option<String>>,
    pub pending_actions: FetchOutcome<Vec<String>>,
    pub waiting_actions: FetchOutcome<Vec<String>>,
    pub stalled_projects: FetchOutcome<Vec<String>>,
    pub unscheduled: FetchOutcome<usize>,
    pub contacts_needing_review: FetchOutcome<usize>,
    pub interactions_project_review: FetchOutcome<usize>,
}

impl DigestData {
    pub fn weekly_goals_text(&self) -> Option<&str> {
        self.weekly_goals.data().and_then(|goals| goals.as_deref())
    }

    pub fn pending(&self) -> &[String] {
        self.pending_actions.data().map_or(&[], Vec::as_slice)
    }

    pub fn waiting(&self) -> &[String] {
        self.waiting_actions.data().map_or(&[], Vec::as_slice)
    }

    pub fn stalled(&self) -> &[String] {
        self.stalled_projects.data().map_or(&[], Vec::as_slice)
    }

    pub fn unscheduled_count(&self) -> usize {
        self.unscheduled.data().copied().unwrap_or(0)
    }

    pub fn contacts_count(&self) -> usize {
        self.contacts_needing_review.data().copied().unwrap_or(0)
    }

    pub fn interactions_count(&self) -> usize {
        self.interactions_project_review.data().copied().unwrap_or(0)
    }
}

/// A composed note ready to be sent to Joplin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    pub title: String,
    pub body: String,
}
