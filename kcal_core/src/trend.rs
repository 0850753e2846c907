//! Weight trend between the two most recent weigh-ins.

use crate::WeightLogEntry;
use serde::{Deserialize, Serialize};

/// Direction and size of the latest weight change
///
/// The variant carries the direction; the amount is always a non-negative
/// number of kilograms.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "trend", content = "kg", rename_all = "snake_case")]
pub enum WeightTrend {
    InsufficientData,
    Gained(f64),
    Lost(f64),
    Unchanged,
}

impl WeightTrend {
    /// Size of the change in kg, if there was one
    pub fn magnitude(&self) -> Option<f64> {
        match self {
            WeightTrend::Gained(kg) | WeightTrend::Lost(kg) => Some(*kg),
            WeightTrend::Unchanged => Some(0.0),
            WeightTrend::InsufficientData => None,
        }
    }
}

/// Compare the last two entries by position, not by date
pub fn weight_trend(history: &[WeightLogEntry]) -> WeightTrend {
    let [.., previous, last] = history else {
        return WeightTrend::InsufficientData;
    };

    let diff = last.weight_kg - previous.weight_kg;
    if diff > 0.0 {
        WeightTrend::Gained(diff)
    } else if diff < 0.0 {
        WeightTrend::Lost(-diff)
    } else {
        WeightTrend::Unchanged
    }
}
