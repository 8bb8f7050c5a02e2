use std::sync::Arc;
use std::thread;

use crossbeam_channel::{bounded, select, Receiver, Sender};

use super::growth::{append_sorted, conditional_tree, frequent_items_in_tree, ItemsetWithCount};
use super::tree::FPTree;
use crate::itemizer::Item;

const CHANNEL_CAP: usize = 1024;

/// One conditional-mining step: extend `prefix` with `item` inside `tree`.
struct WorkerTask {
    tree: Arc<FPTree>,
    item: Item,
    prefix: Vec<Item>,
}

/// A mined subtree handed back to the master, with the items still worth
/// extending into it. The `Arc` lets several in-flight worker tasks read
/// the same subtree; it is freed when the last one finishes.
struct MasterTask {
    tree: Arc<FPTree>,
    prefix: Vec<Item>,
    items: Vec<Item>,
}

/// Mines `tree` with a pool of `workers` identical workers fed by one
/// master. Emission order is nondeterministic; the result is the same
/// multiset the sequential miner produces.
pub fn parallel_fp_growth(tree: FPTree, min_count: u64, workers: usize) -> Vec<ItemsetWithCount> {
    let items = frequent_items_in_tree(&tree, min_count);
    let initial = MasterTask {
        tree: Arc::new(tree),
        prefix: Vec::new(),
        items,
    };

    let (to_worker_tx, to_worker_rx) = bounded::<WorkerTask>(CHANNEL_CAP);
    let (from_worker_tx, from_worker_rx) = bounded::<MasterTask>(CHANNEL_CAP);
    let (output_tx, output_rx) = bounded::<ItemsetWithCount>(CHANNEL_CAP);

    thread::scope(|scope| {
        let collector = scope.spawn(move || output_rx.iter().collect::<Vec<_>>());
        for _ in 0..workers.max(1) {
            let from_master = to_worker_rx.clone();
            let to_master = from_worker_tx.clone();
            let output = output_tx.clone();
            scope.spawn(move || worker(from_master, to_master, output, min_count));
        }
        // The workers now hold the only long-lived clones; once the master
        // drops its sender the channels drain and close in sequence.
        drop(to_worker_rx);
        drop(from_worker_tx);
        drop(output_tx);

        master(initial, to_worker_tx, from_worker_rx);
        collector.join().expect("output collector panicked")
    })
}

/// Keeps a LIFO stack of open subproblems and races dispatching the top
/// task's next item against absorbing a completed subtree. The race is what
/// keeps the pipeline deadlock-free: when `to_worker` is full the master is
/// still able to drain `from_worker`.
fn master(initial: MasterTask, to_worker: Sender<WorkerTask>, from_worker: Receiver<MasterTask>) {
    let mut tasks: Vec<MasterTask> = Vec::new();
    if !initial.items.is_empty() {
        tasks.push(initial);
    }
    let mut outstanding: usize = 0;

    while !tasks.is_empty() || outstanding > 0 {
        let next = tasks.last().map(|top| WorkerTask {
            tree: Arc::clone(&top.tree),
            item: *top.items.last().expect("empty task on master stack"),
            prefix: top.prefix.clone(),
        });
        match next {
            Some(next) => {
                select! {
                    recv(from_worker) -> task => {
                        let task = task.expect("workers exited with jobs outstanding");
                        if !task.items.is_empty() {
                            tasks.push(task);
                        }
                        outstanding -= 1;
                    }
                    send(to_worker, next) -> sent => {
                        sent.expect("workers exited while master dispatching");
                        outstanding += 1;
                        let top = tasks.last_mut().unwrap();
                        top.items.pop();
                        if top.items.is_empty() {
                            tasks.pop();
                        }
                    }
                }
            }
            None => {
                let task = from_worker
                    .recv()
                    .expect("workers exited with jobs outstanding");
                if !task.items.is_empty() {
                    tasks.push(task);
                }
                outstanding -= 1;
            }
        }
    }
    // Dropping `to_worker` here closes the channel and drains the pool.
}

fn worker(
    from_master: Receiver<WorkerTask>,
    to_master: Sender<MasterTask>,
    output: Sender<ItemsetWithCount>,
    min_count: u64,
) {
    for task in from_master.iter() {
        let conditional = conditional_tree(&task.tree, task.item);
        let itemset = append_sorted(&task.prefix, task.item);
        output
            .send(ItemsetWithCount {
                itemset: itemset.clone(),
                count: conditional.root_count(),
            })
            .expect("output collector exited early");
        let items = frequent_items_in_tree(&conditional, min_count);
        to_master
            .send(MasterTask {
                tree: Arc::new(conditional),
                prefix: itemset,
                items,
            })
            .expect("master exited while workers running");
    }
}
