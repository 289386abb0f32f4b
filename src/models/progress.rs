use serde::{Deserialize, Serialize};

/// Which lookup endpoint names an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Currency,
    Material,
}

/// An item id with a quantity. Produced raw by every inventory source and,
/// after aggregation, holding the summed quantity across all sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCount {
    pub id: u32,
    pub count: i64,
}

impl ItemCount {
    pub fn new(id: u32, count: i64) -> Self {
        Self { id, count }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedItem {
    pub id: u32,
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressColor {
    Green,
    Red,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressStat {
    pub name: String,
    /// `value/needed`
    pub value: String,
    /// Percentage clamped to 100, two decimals, right-justified, with `%`.
    pub progress: String,
    pub done: bool,
    pub color: ProgressColor,
    pub sort_key: f64,
}
