//! # Exploring the tree
//!
//! Nodes are evaluated either one by one in the calling thread, or by a pool of workers sharing the
//! frontier. In both cases, a node whose evaluation panics is logged and treated as pruned.
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::{Condvar, Mutex};
use rayon::ThreadPoolBuilder;

use crate::algorithm::branch_and_bound::frontier::Frontier;
use crate::algorithm::branch_and_bound::node::Node;
use crate::algorithm::branch_and_bound::search::{Search, SearchState};

/// Evaluate a node, catching a panic.
fn evaluate_isolated(search: &Search, node: Node, state: &SearchState) -> Vec<Node> {
    let name = node.to_string();
    match panic::catch_unwind(AssertUnwindSafe(|| search.evaluate(node, state))) {
        Ok(children) => children,
        Err(_) => {
            log::error!("Evaluating node {name} failed, treating it as pruned");
            Vec::new()
        },
    }
}

/// Explore the tree in the calling thread.
pub fn sequential<FR: Frontier>(search: &Search, root: Node) -> SearchState {
    let state = SearchState::default();

    let mut frontier = FR::default();
    frontier.push(root);
    while let Some(node) = frontier.pop() {
        if state.is_unbounded() {
            break;
        }
        for child in evaluate_isolated(search, node, &state) {
            frontier.push(child);
        }
    }

    state
}

/// Explore the tree with a pool of workers.
///
/// Falls back to `sequential` when the pool can't be created.
///
/// # Arguments
///
/// * `search`: Context for evaluating nodes.
/// * `root`: First node to evaluate.
/// * `threads`: Size of the pool, at least one.
pub fn parallel<FR: Frontier>(search: Search, root: Node, threads: usize) -> SearchState {
    debug_assert!(threads > 0);

    let pool = match ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|index| format!("bnb-solver-{index}"))
        .build() {
        Ok(pool) => pool,
        Err(error) => {
            log::warn!("Couldn't create a pool of {threads} workers ({error}), exploring sequentially");
            return sequential::<FR>(&search, root);
        },
    };

    let shared = Arc::new(Shared {
        search,
        state: SearchState::default(),
        frontier: Mutex::new(FR::default()),
        outstanding: AtomicUsize::new(0),
        finished: Mutex::new(()),
        all_done: Condvar::new(),
    });

    pool.install(|| submit(&shared, root));
    {
        let mut guard = shared.finished.lock();
        while shared.outstanding.load(Ordering::Acquire) > 0 {
            shared.all_done.wait(&mut guard);
        }
    }

    // Workers might still hold a handle to the shared state for a moment
    shared.state.take()
}

/// State shared by all workers.
struct Shared<FR> {
    search: Search,
    state: SearchState,
    frontier: Mutex<FR>,
    /// Number of nodes pushed onto the frontier of which the evaluation didn't finish yet.
    outstanding: AtomicUsize,
    finished: Mutex<()>,
    all_done: Condvar,
}

/// Push a node onto the frontier and schedule a task to evaluate a node.
///
/// Must be called from within the pool.
fn submit<FR: Frontier>(shared: &Arc<Shared<FR>>, node: Node) {
    shared.frontier.lock().push(node);
    shared.outstanding.fetch_add(1, Ordering::AcqRel);

    let shared = Arc::clone(shared);
    rayon::spawn(move || run_task(shared));
}

fn run_task<FR: Frontier>(shared: Arc<Shared<FR>>) {
    let node = shared.frontier.lock().pop();
    if let Some(node) = node {
        if !shared.state.is_unbounded() {
            for child in evaluate_isolated(&shared.search, node, &shared.state) {
                submit(&shared, child);
            }
        }
    }

    if shared.outstanding.fetch_sub(1, Ordering::AcqRel) == 1 {
        let _guard = shared.finished.lock();
        shared.all_done.notify_all();
    }
}
