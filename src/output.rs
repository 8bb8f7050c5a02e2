use std::io::{self, Write};

use crate::fp::ItemsetWithCount;
use crate::itemizer::{Item, Itemizer};
use crate::rules::Rule;

fn write_tokens<W: Write>(out: &mut W, items: &[Item], itemizer: &Itemizer) -> io::Result<()> {
    for (i, &item) in items.iter().enumerate() {
        if i > 0 {
            write!(out, " ")?;
        }
        write!(out, "{}", itemizer.to_str(item))?;
    }
    Ok(())
}

/// Writes the itemsets file: a `Itemset,Support` header, then one line per
/// itemset of space-separated tokens followed by the relative support with
/// six decimals.
pub fn write_itemsets<W: Write>(
    mut out: W,
    itemsets: &[ItemsetWithCount],
    itemizer: &Itemizer,
    num_transactions: u64,
) -> io::Result<()> {
    writeln!(out, "Itemset,Support")?;
    let n = num_transactions as f64;
    for iwc in itemsets {
        write_tokens(&mut out, &iwc.itemset, itemizer)?;
        writeln!(out, " {:.6}", iwc.count as f64 / n)?;
    }
    out.flush()
}

/// Writes the rules file: an `Antecedent => Consequent,Confidence,Lift,Support`
/// header, then one line per rule.
pub fn write_rules<W: Write>(mut out: W, rules: &[Rule], itemizer: &Itemizer) -> io::Result<()> {
    writeln!(out, "Antecedent => Consequent,Confidence,Lift,Support")?;
    for rule in rules {
        write_tokens(&mut out, &rule.antecedent, itemizer)?;
        write!(out, " => ")?;
        write_tokens(&mut out, &rule.consequent, itemizer)?;
        writeln!(out, ",{:.6},{:.6},{:.6}", rule.confidence, rule.lift, rule.support)?;
    }
    out.flush()
}
