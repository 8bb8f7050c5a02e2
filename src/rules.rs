use ahash::AHashMap;
use itertools::Itertools;
use rayon::prelude::*;

use crate::fp::ItemsetWithCount;
use crate::itemizer::Item;

/// An association rule `antecedent ⇒ consequent`. The two sides are
/// disjoint, non-empty, and each sorted by item id; `support` is relative
/// (fraction of all transactions containing their union).
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub antecedent: Vec<Item>,
    pub consequent: Vec<Item>,
    pub confidence: f64,
    pub lift: f64,
    pub support: f64,
}

/// Derives every rule A ⇒ C with A ∪ C a frequent itemset, confidence at
/// least `min_confidence`, and, when `min_lift > 0`, lift at least
/// `min_lift`. Itemsets are sharded across the rayon pool; output order is
/// unspecified.
pub fn generate_rules(
    itemsets: &[ItemsetWithCount],
    num_transactions: u64,
    min_confidence: f64,
    min_lift: f64,
) -> Vec<Rule> {
    // Support lookup keyed by canonical (sorted) itemset, so any subset's
    // support is one probe away during rule generation.
    let support: AHashMap<&[Item], u64> = itemsets
        .iter()
        .map(|iwc| (iwc.itemset.as_slice(), iwc.count))
        .collect();
    let n = num_transactions as f64;

    itemsets
        .par_iter()
        .filter(|iwc| iwc.itemset.len() >= 2)
        .map(|iwc| itemset_rules(iwc, &support, n, min_confidence, min_lift))
        .reduce(Vec::new, |mut rules, mut chunk| {
            rules.append(&mut chunk);
            rules
        })
}

/// All rules over one itemset: every non-empty proper subset becomes an
/// antecedent, the remainder the consequent. Both partitions of a split
/// are visited as the index combinations range over all sizes.
fn itemset_rules(
    iwc: &ItemsetWithCount,
    support: &AHashMap<&[Item], u64>,
    num_transactions: f64,
    min_confidence: f64,
    min_lift: f64,
) -> Vec<Rule> {
    let items = &iwc.itemset;
    let union_count = iwc.count as f64;
    let mut rules = Vec::new();

    for antecedent_len in 1..items.len() {
        for picked in (0..items.len()).combinations(antecedent_len) {
            let antecedent: Vec<Item> = picked.iter().map(|&i| items[i]).collect();
            let consequent: Vec<Item> = items
                .iter()
                .enumerate()
                .filter(|(i, _)| !picked.contains(i))
                .map(|(_, &item)| item)
                .collect();

            let antecedent_count = match support.get(antecedent.as_slice()) {
                Some(&count) => count as f64,
                None => continue,
            };
            let confidence = union_count / antecedent_count;
            if confidence < min_confidence {
                continue;
            }

            let consequent_count = match support.get(consequent.as_slice()) {
                Some(&count) => count as f64,
                None => continue,
            };
            let lift = confidence / (consequent_count / num_transactions);
            if min_lift > 0.0 && lift < min_lift {
                continue;
            }

            rules.push(Rule {
                antecedent,
                consequent,
                confidence,
                lift,
                support: union_count / num_transactions,
            });
        }
    }
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn items(ids: &[u32]) -> Vec<Item> {
        ids.iter().map(|&id| Item::with_id(id)).collect()
    }

    fn itemset(ids: &[u32], count: u64) -> ItemsetWithCount {
        ItemsetWithCount { itemset: items(ids), count }
    }

    fn fuzzy_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn rules_partition_each_itemset_both_ways() {
        // 4 transactions: {a,b,c}, {a,b}, {a,c}, {a}; a=0 b=1 c=2.
        let itemsets = vec![
            itemset(&[0], 4),
            itemset(&[1], 2),
            itemset(&[2], 2),
            itemset(&[0, 1], 2),
            itemset(&[0, 2], 2),
        ];
        let rules = generate_rules(&itemsets, 4, 0.5, 0.0);

        // (antecedent, consequent) -> (confidence, lift, support)
        let expected: HashMap<(Vec<Item>, Vec<Item>), (f64, f64, f64)> = [
            ((items(&[1]), items(&[0])), (1.0, 1.0, 0.5)),
            ((items(&[0]), items(&[1])), (0.5, 1.0, 0.5)),
            ((items(&[2]), items(&[0])), (1.0, 1.0, 0.5)),
            ((items(&[0]), items(&[2])), (0.5, 1.0, 0.5)),
        ]
        .into_iter()
        .collect();

        assert_eq!(rules.len(), expected.len());
        for rule in &rules {
            let key = (rule.antecedent.clone(), rule.consequent.clone());
            let (confidence, lift, support) = expected[&key];
            assert!(fuzzy_eq(rule.confidence, confidence));
            assert!(fuzzy_eq(rule.lift, lift));
            assert!(fuzzy_eq(rule.support, support));
        }
    }

    #[test]
    fn confidence_threshold_prunes() {
        let itemsets = vec![
            itemset(&[0], 4),
            itemset(&[1], 2),
            itemset(&[2], 2),
            itemset(&[0, 1], 2),
            itemset(&[0, 2], 2),
        ];
        let rules = generate_rules(&itemsets, 4, 0.75, 0.0);
        // Only the confidence-1.0 directions survive.
        assert_eq!(rules.len(), 2);
        assert!(rules.iter().all(|r| fuzzy_eq(r.confidence, 1.0)));
    }

    #[test]
    fn lift_threshold_prunes_when_enabled() {
        // b occurs in every transaction containing a, and also alone:
        // {a,b} x2, {b} x2 -> a=>b has confidence 1 but lift 1.
        let itemsets = vec![
            itemset(&[0], 2),
            itemset(&[1], 4),
            itemset(&[0, 1], 2),
        ];
        let with_filter = generate_rules(&itemsets, 4, 0.0, 1.5);
        assert!(with_filter.is_empty());

        // min_lift == 0 disables the filter entirely.
        let without_filter = generate_rules(&itemsets, 4, 0.0, 0.0);
        assert_eq!(without_filter.len(), 2);
    }

    #[test]
    fn three_item_sets_produce_all_six_partitions() {
        let itemsets = vec![
            itemset(&[0], 1),
            itemset(&[1], 1),
            itemset(&[2], 1),
            itemset(&[0, 1], 1),
            itemset(&[0, 2], 1),
            itemset(&[1, 2], 1),
            itemset(&[0, 1, 2], 1),
        ];
        let rules = generate_rules(&itemsets, 1, 1.0, 0.0);
        // 6 partitions of the triple plus 2 for each pair.
        assert_eq!(rules.len(), 12);
        for rule in &rules {
            assert!(!rule.antecedent.is_empty());
            assert!(!rule.consequent.is_empty());
            assert!(rule.antecedent.iter().all(|i| !rule.consequent.contains(i)));
            assert!(fuzzy_eq(rule.confidence, 1.0));
            assert!(fuzzy_eq(rule.lift, 1.0));
            assert!(fuzzy_eq(rule.support, 1.0));
        }
    }

    #[test]
    fn singleton_itemsets_yield_no_rules() {
        let itemsets = vec![itemset(&[0], 3), itemset(&[1], 2)];
        assert!(generate_rules(&itemsets, 4, 0.0, 0.0).is_empty());
    }
}
