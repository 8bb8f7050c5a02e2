use super::tree::FPTree;
use crate::itemizer::Item;

/// A frequent itemset with its absolute support count. Items are kept
/// sorted by id, giving every itemset one canonical representation no
/// matter the order the miner discovered it in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ItemsetWithCount {
    pub itemset: Vec<Item>,
    pub count: u64,
}

/// Items whose summed in-tree count reaches `min_count`, in unspecified
/// order.
pub fn frequent_items_in_tree(tree: &FPTree, min_count: u64) -> Vec<Item> {
    tree.items()
        .filter(|&(_, count)| count >= min_count)
        .map(|(item, _)| item)
        .collect()
}

/// Builds the conditional tree for `item`: for every node in `item`'s
/// header chain, the path from the root down to that node (excluding the
/// node itself) is inserted, weighted by the node's count. The resulting
/// root count equals the support of the conditioning itemset.
pub fn conditional_tree(tree: &FPTree, item: Item) -> FPTree {
    let mut conditional = FPTree::new();
    for node in tree.header_chain(item) {
        let path = tree.prefix_path(node);
        conditional.insert(&path, tree.node_count(node));
    }
    conditional
}

/// `prefix` with `item` inserted at its sorted position.
pub fn append_sorted(prefix: &[Item], item: Item) -> Vec<Item> {
    let at = prefix.partition_point(|&p| p < item);
    let mut itemset = Vec::with_capacity(prefix.len() + 1);
    itemset.extend_from_slice(&prefix[..at]);
    itemset.push(item);
    itemset.extend_from_slice(&prefix[at..]);
    itemset
}

/// Single-threaded FP-Growth: for every item frequent in `tree`, emits
/// `prefix ∪ {item}` with the item's support, then recurses on the item's
/// conditional tree. Recursion bottoms out when no item in a conditional
/// tree reaches `min_count`.
pub fn fp_growth(
    tree: &FPTree,
    prefix: &[Item],
    min_count: u64,
    out: &mut Vec<ItemsetWithCount>,
) {
    for item in frequent_items_in_tree(tree, min_count) {
        let conditional = conditional_tree(tree, item);
        let itemset = append_sorted(prefix, item);
        out.push(ItemsetWithCount {
            itemset: itemset.clone(),
            count: conditional.root_count(),
        });
        fp_growth(&conditional, &itemset, min_count, out);
    }
}
