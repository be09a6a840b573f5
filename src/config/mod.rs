use serde::{Deserialize, Serialize};

/// Engine behavior knobs supplied by the surrounding application.
///
/// The engine never reads or writes this from disk; the caller loads and
/// persists configuration alongside the rest of its settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct EngineConfig {
    /// Policy on pending transactions when aggregating spent and income.
    #[serde(default)]
    pub pending: PendingPolicy,
}

/// Whether pending transactions participate in aggregation.
///
/// Excluding them keeps `spent` stable until a transaction settles, which
/// is the documented default for rollover and recalc inputs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PendingPolicy {
    #[default]
    Exclude,
    Include,
}
