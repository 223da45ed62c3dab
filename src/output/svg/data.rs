//! Chart data model.

/// A single labelled count for bar charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPoint {
    /// Label for this data point (shown on axis or tooltip)
    pub label: String,
    pub value: usize,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: usize) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// Share of `max` in `0.0..=1.0`. `max` is clamped to at least 1.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio_of(&self, max: usize) -> f64 {
        self.value as f64 / max.max(1) as f64
    }
}

/// Largest value in `data`, or 0 when empty.
#[must_use]
pub fn max_value(data: &[DataPoint]) -> usize {
    data.iter().map(|d| d.value).max().unwrap_or(0)
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
