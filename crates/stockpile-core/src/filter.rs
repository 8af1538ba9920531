// File: crates/stockpile-core/src/filter.rs
// Summary: Allow-list filtering of dataset rows.

use tracing::{debug, warn};

use crate::dataset::StockpileRow;
use crate::types::MAJOR_POWERS;

/// Keep rows whose entity is in `allow`, in their original order.
pub fn filter_entities(rows: Vec<StockpileRow>, allow: &[&str]) -> Vec<StockpileRow> {
    let before = rows.len();
    let kept: Vec<StockpileRow> = rows
        .into_iter()
        .filter(|r| allow.contains(&r.entity.as_str()))
        .collect();

    debug!(before, after = kept.len(), "filtered rows by entity");
    if kept.is_empty() && before > 0 {
        warn!("no rows matched the entity allow-list");
    }
    kept
}

/// Keep rows for the fixed set of major nuclear powers plus the world total.
pub fn filter_major_powers(rows: Vec<StockpileRow>) -> Vec<StockpileRow> {
    filter_entities(rows, &MAJOR_POWERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_allow_list() {
        let rows = vec![
            StockpileRow::new("India", 2000, 20.0),
            StockpileRow::new("Pakistan", 2000, 15.0),
            StockpileRow::new("India", 2001, 25.0),
        ];
        let kept = filter_entities(rows, &["India"]);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|r| r.entity == "India"));
        assert_eq!(kept[1].year, 2001);
    }

    #[test]
    fn match_is_exact() {
        let rows = vec![
            StockpileRow::new("russia", 1990, 1.0),
            StockpileRow::new("Russia ", 1990, 1.0),
        ];
        assert!(filter_major_powers(rows).is_empty());
    }
}
