use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::num::NonZeroUsize;
use std::time::Instant;

use tracing::info;

use crate::arguments::Arguments;
use crate::count::ItemCount;
use crate::error::MineError;
use crate::fp::{parallel_fp_growth, FPTree, ItemsetWithCount};
use crate::itemizer::Itemizer;
use crate::output::{write_itemsets, write_rules};
use crate::rules::{generate_rules, Rule};
use crate::transactions::TransactionReader;

/// Everything one run of the pipeline produced.
#[derive(Debug)]
pub struct MiningResult {
    pub itemizer: Itemizer,
    pub num_transactions: u64,
    pub itemsets: Vec<ItemsetWithCount>,
    pub rules: Vec<Rule>,
}

/// First pass: count transactions and per-item frequencies. Every line is
/// a transaction, empty ones included; an item counts once per transaction.
pub fn count_items<R: BufRead>(input: R) -> Result<(Itemizer, ItemCount, u64), MineError> {
    let mut itemizer = Itemizer::new();
    let mut frequency = ItemCount::new();
    let mut num_transactions = 0u64;
    for transaction in TransactionReader::new(input) {
        let tokens = transaction.map_err(MineError::InputRead)?;
        num_transactions += 1;
        for item in itemizer.intern_transaction(&tokens) {
            frequency.increment(item, 1);
        }
    }
    Ok((itemizer, frequency, num_transactions))
}

/// `max(1, ⌈min_support · num_transactions⌉)`.
pub fn min_count(min_support: f64, num_transactions: u64) -> u64 {
    ((min_support * num_transactions as f64).ceil() as u64).max(1)
}

/// Second pass: rebuild each transaction as frequent items only, sorted by
/// decreasing global frequency (ties by id), and insert it into the tree.
/// Transactions with no frequent item are skipped.
pub fn build_tree<R: BufRead>(
    input: R,
    itemizer: &Itemizer,
    frequency: &ItemCount,
    min_count: u64,
) -> Result<FPTree, MineError> {
    let mut tree = FPTree::new();
    for transaction in TransactionReader::new(input) {
        let tokens = transaction.map_err(MineError::InputRead)?;
        let mut items =
            itemizer.transaction_items(&tokens, |item| frequency.get(item) >= min_count);
        if items.is_empty() {
            continue;
        }
        items.sort_unstable_by(|&a, &b| {
            frequency.get(b).cmp(&frequency.get(a)).then(a.cmp(&b))
        });
        tree.insert(&items, 1);
    }
    Ok(tree)
}

pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Runs the whole pipeline over abstract input streams. `open_input` is
/// called once per pass, so it must hand back a fresh reader over the same
/// data each time.
pub fn mine_streams<R, F>(mut open_input: F, args: &Arguments) -> Result<MiningResult, MineError>
where
    R: BufRead,
    F: FnMut() -> Result<R, MineError>,
{
    args.validate()?;

    let start = Instant::now();
    let (itemizer, frequency, num_transactions) = count_items(open_input()?)?;
    info!(
        transactions = num_transactions,
        items = itemizer.len(),
        elapsed = ?start.elapsed(),
        "counted item frequencies"
    );

    let min_count = min_count(args.min_support, num_transactions);
    let workers = args.workers.unwrap_or_else(default_workers);

    let start = Instant::now();
    let tree = build_tree(open_input()?, &itemizer, &frequency, min_count)?;
    let itemsets = parallel_fp_growth(tree, min_count, workers);
    info!(
        itemsets = itemsets.len(),
        workers,
        elapsed = ?start.elapsed(),
        "generated frequent itemsets"
    );

    let start = Instant::now();
    let rules = generate_rules(&itemsets, num_transactions, args.min_confidence, args.min_lift);
    info!(rules = rules.len(), elapsed = ?start.elapsed(), "generated association rules");

    Ok(MiningResult {
        itemizer,
        num_transactions,
        itemsets,
        rules,
    })
}

/// Runs the pipeline against the files named in `args` and writes the rule
/// (and, when requested, itemset) outputs.
pub fn mine(args: &Arguments) -> Result<MiningResult, MineError> {
    let result = mine_streams(
        || {
            File::open(&args.input)
                .map(BufReader::new)
                .map_err(MineError::InputOpen)
        },
        args,
    )?;

    if let Some(path) = &args.itemsets_path {
        let file = File::create(path).map_err(MineError::OutputWrite)?;
        write_itemsets(
            BufWriter::new(file),
            &result.itemsets,
            &result.itemizer,
            result.num_transactions,
        )
        .map_err(MineError::OutputWrite)?;
        info!(path = %path.display(), "wrote itemsets");
    }

    let file = File::create(&args.output).map_err(MineError::OutputWrite)?;
    write_rules(BufWriter::new(file), &result.rules, &result.itemizer)
        .map_err(MineError::OutputWrite)?;
    info!(path = %args.output.display(), "wrote rules");

    Ok(result)
}
