// File: crates/stockpile-core/src/palette.rs
// Summary: Fixed entity -> color mapping with a deterministic fallback.

use tracing::warn;

/// Colors used by the arsenal chart, one per allow-listed entity.
pub const ARSENAL_COLORS: [(&str, &str); 6] = [
    ("United States", "#FF6B6B"),
    ("Russia", "#4ECDC4"),
    ("China", "#FFE66D"),
    ("United Kingdom", "#95E1D3"),
    ("France", "#C7CEEA"),
    ("World", "#FFFFFF"),
];

/// plotly's default qualitative colorway; handed out to unmapped entities in order.
pub const FALLBACK_COLORWAY: [&str; 10] = [
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A",
    "#19d3f3", "#FF6692", "#B6E880", "#FF97FF", "#FECB52",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<(String, String)>,
}

impl Palette {
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self { entries: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }

    pub fn arsenal() -> Self {
        Self::new(ARSENAL_COLORS)
    }

    /// Explicit color for `entity`, if mapped.
    pub fn get(&self, entity: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == entity)
            .map(|(_, v)| v.as_str())
    }

    /// Color for each entity in order. Unmapped entities take the next
    /// fallback color, cycling through [`FALLBACK_COLORWAY`].
    pub fn assign<'a, I>(&self, entities: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut next_fallback = 0usize;
        entities
            .into_iter()
            .map(|entity| match self.get(entity) {
                Some(c) => c.to_string(),
                None => {
                    let c = FALLBACK_COLORWAY[next_fallback % FALLBACK_COLORWAY.len()];
                    next_fallback += 1;
                    warn!(entity, color = c, "entity has no palette entry; using fallback color");
                    c.to_string()
                }
            })
            .collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::arsenal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAJOR_POWERS;

    #[test]
    fn every_major_power_is_mapped() {
        let p = Palette::arsenal();
        for e in MAJOR_POWERS {
            let c = p.get(e).expect("mapped");
            assert!(c.starts_with('#') && c.len() == 7, "{e} -> {c}");
        }
    }

    #[test]
    fn fallback_cycles_in_order_of_appearance() {
        let p = Palette::new([("A", "#000000")]);
        let colors = p.assign(["B", "A", "C"]);
        assert_eq!(colors, vec!["#636efa", "#000000", "#EF553B"]);
    }
}
