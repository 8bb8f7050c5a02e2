use crate::itemizer::Item;

/// Per-item occurrence counts, indexed by dense item id.
#[derive(Debug, Default, Clone)]
pub struct ItemCount {
    counts: Vec<u64>,
}

impl ItemCount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, item: Item, delta: u64) {
        let idx = item.as_index();
        if idx >= self.counts.len() {
            self.counts.resize(idx + 1, 0);
        }
        self.counts[idx] += delta;
    }

    /// Returns 0 for items never counted.
    pub fn get(&self, item: Item) -> u64 {
        self.counts.get(item.as_index()).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_items_count_zero() {
        let counts = ItemCount::new();
        assert_eq!(counts.get(Item::with_id(7)), 0);
    }

    #[test]
    fn increment_grows_on_demand() {
        let mut counts = ItemCount::new();
        counts.increment(Item::with_id(3), 2);
        counts.increment(Item::with_id(0), 1);
        counts.increment(Item::with_id(3), 1);
        assert_eq!(counts.get(Item::with_id(3)), 3);
        assert_eq!(counts.get(Item::with_id(0)), 1);
        assert_eq!(counts.get(Item::with_id(1)), 0);
    }
}
