use ahash::AHashMap;

/// Dense id assigned to an item token in first-seen order. The `Ord` on the
/// id is the tiebreak order used everywhere itemsets need a canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Item(u32);

impl Item {
    pub fn with_id(id: u32) -> Self {
        Item(id)
    }

    pub fn id(self) -> u32 {
        self.0
    }

    pub(crate) fn as_index(self) -> usize {
        self.0 as usize
    }
}

/// Interner mapping item tokens to dense [`Item`] ids and back.
///
/// Ids are assigned monotonically; after the counting pass the assignment is
/// frozen and only the read-only methods are used.
#[derive(Debug, Default)]
pub struct Itemizer {
    index: AHashMap<String, Item>,
    tokens: Vec<String>,
}

impl Itemizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `token`, assigning the next dense id on first sight.
    pub fn intern(&mut self, token: &str) -> Item {
        if let Some(&item) = self.index.get(token) {
            return item;
        }
        let item = Item(self.tokens.len() as u32);
        self.tokens.push(token.to_owned());
        self.index.insert(token.to_owned(), item);
        item
    }

    /// Returns the id for `token` if it has been interned.
    pub fn lookup(&self, token: &str) -> Option<Item> {
        self.index.get(token).copied()
    }

    pub fn to_str(&self, item: Item) -> &str {
        &self.tokens[item.as_index()]
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Interns every token of one transaction. Repeated tokens are dropped,
    /// so an item contributes once per transaction.
    pub fn intern_transaction(&mut self, tokens: &[String]) -> Vec<Item> {
        let mut items: Vec<Item> = Vec::with_capacity(tokens.len());
        for token in tokens {
            let item = self.intern(token);
            if !items.contains(&item) {
                items.push(item);
            }
        }
        items
    }

    /// Read-only translation of one transaction for the second input pass,
    /// with the same in-transaction deduplication. Items failing `keep` are
    /// dropped.
    pub fn transaction_items<F>(&self, tokens: &[String], keep: F) -> Vec<Item>
    where
        F: Fn(Item) -> bool,
    {
        let mut items: Vec<Item> = Vec::with_capacity(tokens.len());
        for token in tokens {
            if let Some(item) = self.lookup(token) {
                if keep(item) && !items.contains(&item) {
                    items.push(item);
                }
            }
        }
        items
    }
}
