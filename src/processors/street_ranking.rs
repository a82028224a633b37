use serde::{Deserialize, Serialize};

use crate::models::{BaseTable, VictimCategory};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreetCount {
    pub street: String,
    pub count: u32,
}

impl StreetCount {
    pub fn new(street: impl Into<String>, count: u32) -> Self {
        Self {
            street: street.into(),
            count,
        }
    }
}

/// The `k` collisions that hurt the most people of `category`, ranked by
/// that count.
///
/// Rows with no victims of the category or no street name are skipped.
/// Equal counts keep their table order.
pub fn top_dangerous_streets(
    table: &BaseTable,
    category: VictimCategory,
    k: usize,
) -> Vec<StreetCount> {
    let mut ranked: Vec<StreetCount> = table
        .iter()
        .filter_map(|r| {
            let count = category.count_of(r);
            match r.street() {
                Some(street) if count >= 1 => Some(StreetCount::new(street, count)),
                _ => None,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(k);
    ranked
}
