use std::collections::HashMap;

/// Per-location like/dislike counters.
///
/// Purely in-memory feedback for the running process. Counts start at
/// zero on every run and are never sent to the server.
#[derive(Debug, Default)]
pub struct Reactions {
    counts: HashMap<String, ReactionCounts>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReactionCounts {
    pub likes: u32,
    pub dislikes: u32,
}

impl Reactions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn like(&mut self, location_id: &str) {
        self.counts.entry(location_id.to_owned()).or_default().likes += 1;
    }

    pub fn dislike(&mut self, location_id: &str) {
        self.counts
            .entry(location_id.to_owned())
            .or_default()
            .dislikes += 1;
    }

    #[must_use]
    pub fn counts(&self, location_id: &str) -> ReactionCounts {
        self.counts.get(location_id).copied().unwrap_or_default()
    }
}
