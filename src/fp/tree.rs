use ahash::AHashMap;

use crate::itemizer::Item;

const ROOT: u32 = 0;

/// One arena slot of an [`FPTree`]. `parent`, `children`, and the header
/// chain all hold arena indices; the root sits at index 0 with `item: None`.
#[derive(Debug, Clone)]
pub struct FPNode {
    pub item: Option<Item>,
    pub count: u64,
    pub parent: Option<u32>,
    pub children: AHashMap<Item, u32>,
    pub next_in_header: Option<u32>,
}

impl FPNode {
    fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: AHashMap::new(),
            next_in_header: None,
        }
    }

    fn new_item(item: Item, parent: u32, next_in_header: Option<u32>) -> Self {
        Self {
            item: Some(item),
            count: 0,
            parent: Some(parent),
            children: AHashMap::new(),
            next_in_header,
        }
    }
}

/// Prefix tree of frequency-ordered transactions.
///
/// `header` maps each item to the most recently created node carrying it;
/// the nodes for one item are chained through `next_in_header`. `counts`
/// tracks, per item, the sum of `count` over all nodes with that item.
/// Nodes are never removed; the arena is dropped with the tree.
#[derive(Debug, Clone)]
pub struct FPTree {
    pub nodes: Vec<FPNode>,
    header: AHashMap<Item, u32>,
    counts: AHashMap<Item, u64>,
}

impl Default for FPTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FPTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            header: AHashMap::new(),
            counts: AHashMap::new(),
        }
    }

    /// Total weight inserted into the tree. For a conditional tree this is
    /// the support of the conditioning itemset.
    pub fn root_count(&self) -> u64 {
        self.nodes[ROOT as usize].count
    }

    /// Sum of node counts for `item` across the whole tree.
    pub fn item_count(&self, item: Item) -> u64 {
        self.counts.get(&item).copied().unwrap_or(0)
    }

    /// All items present in the tree with their summed counts, in
    /// unspecified order.
    pub fn items(&self) -> impl Iterator<Item = (Item, u64)> + '_ {
        self.counts.iter().map(|(&item, &count)| (item, count))
    }

    pub fn node_count(&self, node: u32) -> u64 {
        self.nodes[node as usize].count
    }

    /// Inserts one weighted path, which must already be in the tree's
    /// canonical item order. Every node along the path absorbs `weight`,
    /// the root included.
    pub fn insert(&mut self, path: &[Item], weight: u64) {
        self.nodes[ROOT as usize].count += weight;
        let mut current = ROOT;
        for &item in path {
            let child = match self.nodes[current as usize].children.get(&item).copied() {
                Some(idx) => idx,
                None => {
                    let idx = self.nodes.len() as u32;
                    let head = self.header.get(&item).copied();
                    self.nodes.push(FPNode::new_item(item, current, head));
                    self.nodes[current as usize].children.insert(item, idx);
                    self.header.insert(item, idx);
                    idx
                }
            };
            self.nodes[child as usize].count += weight;
            *self.counts.entry(item).or_insert(0) += weight;
            current = child;
        }
    }

    /// Walks the header chain for `item`, newest node first. Chain order is
    /// an implementation detail; callers must not rely on it.
    pub fn header_chain(&self, item: Item) -> HeaderChain<'_> {
        HeaderChain {
            tree: self,
            next: self.header.get(&item).copied(),
        }
    }

    /// Items on the path from `node`'s parent up to (excluding) the root,
    /// returned root-ward first, i.e. in insertion order.
    pub fn prefix_path(&self, node: u32) -> Vec<Item> {
        let mut path = Vec::new();
        let mut current = self.nodes[node as usize].parent;
        while let Some(idx) = current {
            let parent = &self.nodes[idx as usize];
            if let Some(item) = parent.item {
                path.push(item);
            }
            current = parent.parent;
        }
        path.reverse();
        path
    }
}

/// Iterator over the arena indices of all nodes carrying one item.
pub struct HeaderChain<'a> {
    tree: &'a FPTree,
    next: Option<u32>,
}

impl Iterator for HeaderChain<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let idx = self.next?;
        self.next = self.tree.nodes[idx as usize].next_in_header;
        Some(idx)
    }
}
