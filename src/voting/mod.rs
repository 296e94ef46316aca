pub mod report;

use std::collections::HashMap;

/// Per-user number of polls answered correctly across one batch run.
#[derive(Debug, Clone, Default)]
pub struct VoterTally {
    counts: HashMap<i64, u32>,
    // first-seen order, used when asking for profiles
    order: Vec<i64>,
}

impl VoterTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one vote for every id in `voter_ids`. An id listed twice counts twice.
    pub fn record(&mut self, voter_ids: &[i64]) {
        for &id in voter_ids {
            let count = self.counts.entry(id).or_insert(0);
            if *count == 0 {
                self.order.push(id);
            }
            *count += 1;
        }
    }

    pub fn count(&self, user_id: i64) -> Option<u32> {
        self.counts.get(&user_id).copied()
    }

    /// Distinct voters in the order they were first seen.
    pub fn voter_ids(&self) -> &[i64] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

pub fn tally(tally: &mut VoterTally, voter_ids: &[i64]) {
    tally.record(voter_ids);
}
