//! Counters, primarily regarding a solve.

use serde::Serialize;

/// Counters, incremented during a solve and read after.
#[derive(Clone, Debug, Serialize)]
pub struct Counters {
    /// A count of decisions made, over every branch of the search.
    pub total_decisions: usize,

    /// A count of assignments made by unit propagation.
    pub total_propagations: usize,

    /// A count of assignments made by pure literal elimination.
    pub total_eliminations: usize,

    /// A count of conflicts found.
    pub total_conflicts: usize,

    /// The time taken by the most recent solve.
    pub time: std::time::Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            total_decisions: 0,
            total_propagations: 0,
            total_eliminations: 0,
            total_conflicts: 0,
            time: std::time::Duration::from_secs(0),
        }
    }
}
