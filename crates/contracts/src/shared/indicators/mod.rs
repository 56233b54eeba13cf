//! Page indicators
//!
//! Statistics shown above every list page. They are pure reductions over the
//! records currently held by the page and are recomputed on every render.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Display metadata
// ---------------------------------------------------------------------------

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

/// Visual status of the indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
    Warning,
}

// ---------------------------------------------------------------------------
// Computed values
// ---------------------------------------------------------------------------

/// A single computed indicator shown as a stat card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub label: String,
    pub icon: String,
    pub value: f64,
    pub format: ValueFormat,
    pub status: IndicatorStatus,
}

impl Indicator {
    pub fn count(label: &str, icon: &str, value: usize) -> Self {
        Self {
            label: label.to_string(),
            icon: icon.to_string(),
            value: value as f64,
            format: ValueFormat::Integer,
            status: IndicatorStatus::Neutral,
        }
    }

    pub fn quantity(label: &str, icon: &str, value: f64) -> Self {
        Self {
            format: ValueFormat::Number { decimals: 0 },
            ..Self::count(label, icon, 0).with_value(value)
        }
    }

    pub fn money(label: &str, icon: &str, value: f64) -> Self {
        Self {
            format: ValueFormat::Money {
                currency: "$".to_string(),
            },
            ..Self::count(label, icon, 0).with_value(value)
        }
    }

    pub fn percent(label: &str, icon: &str, value: f64) -> Self {
        Self {
            format: ValueFormat::Percent { decimals: 1 },
            ..Self::count(label, icon, 0).with_value(value)
        }
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn with_status(mut self, status: IndicatorStatus) -> Self {
        self.status = status;
        self
    }

    /// Mark the card as `Bad` when the value is above zero.
    pub fn bad_if_positive(self) -> Self {
        let status = if self.value > 0.0 {
            IndicatorStatus::Bad
        } else {
            IndicatorStatus::Neutral
        };
        self.with_status(status)
    }
}

// ---------------------------------------------------------------------------
// Reductions
// ---------------------------------------------------------------------------

/// Number of items matching the predicate
pub fn count_where<T>(items: &[T], pred: impl Fn(&T) -> bool) -> usize {
    items.iter().filter(|item| pred(item)).count()
}

/// Sum of a numeric projection over all items
pub fn sum_by<T>(items: &[T], value: impl Fn(&T) -> f64) -> f64 {
    items.iter().map(value).sum()
}

/// `part / whole * 100`, zero when the whole is zero
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}
