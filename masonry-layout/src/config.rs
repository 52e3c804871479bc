use serde::{Deserialize, Serialize};

/// How an item picks its column
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ColumnStrategy {
    /// Item `i` goes to column `i % columns`
    #[default]
    RoundRobin,
    /// Item goes to the column with the smallest accumulated height,
    /// the leftmost one on ties
    ShortestColumn,
}

/// Configuration for a masonry layout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Number of equal width columns
    pub columns: usize,
    /// Space kept free around every item, on each side
    pub padding: f64,
    /// Width available for all columns together
    pub content_width: f64,
    pub strategy: ColumnStrategy,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: 2,
            padding: 6.0,
            content_width: 390.0,
            strategy: ColumnStrategy::RoundRobin,
        }
    }
}
