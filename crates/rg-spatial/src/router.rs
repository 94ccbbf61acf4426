//! Routing trait and the default single-step A* implementation.
//!
//! # Pluggability
//!
//! The simulation calls routing via the [`Router`] trait, so applications can
//! swap in another planner (flow fields, cached distance maps) without
//! touching the arbiter or the shuffle scheduler.  [`AStarRouter`] is the
//! default.
//!
//! # Search model
//!
//! A best-effort local planner, recomputed from scratch on every call and
//! never cached: every active agent calls it every tick against that tick's
//! occupancy snapshot.
//!
//! - 4-connected moves, neighbours expanded in the order `+x, -x, +z, -z`.
//! - Manhattan heuristic (admissible and consistent on this topology).
//! - A cell is traversable iff it is inside the bounds and unoccupied, with
//!   one exception: an occupied goal is still traversable, so an agent can
//!   plan into a cell whose occupant is about to leave.
//! - Frontier ties on f-score are broken by first-encountered order, so the
//!   result depends only on the inputs.
//! - The search gives up after `max(min_iterations, iterations_per_step ×
//!   manhattan(start, goal))` expansions.

use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};

use rg_core::{Bounds, Cell};

use crate::GridState;

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable path planner over one occupancy snapshot.
///
/// `None` from either method is not an error: it means "no usable route this
/// tick" (blocked, out of budget, or already at the goal) and callers fall
/// back or retry later.
pub trait Router: Send + Sync {
    /// Full path from `start` to `goal` inclusive of both ends.
    fn path(&self, start: Cell, goal: Cell, grid: &GridState, bounds: &Bounds) -> Option<Vec<Cell>>;

    /// The first cell to step into on the way from `start` to `goal`.
    ///
    /// Returns `None` when no path is found or when `start == goal`.
    fn next_step(&self, start: Cell, goal: Cell, grid: &GridState, bounds: &Bounds) -> Option<Cell> {
        self.path(start, goal, grid, bounds)
            .and_then(|path| path.get(1).copied())
    }
}

// ── AStarRouter ───────────────────────────────────────────────────────────────

/// A* over the occupancy grid with a bounded expansion budget.
#[derive(Clone, Debug)]
pub struct AStarRouter {
    /// Expansion budget floor.
    pub min_iterations: u32,
    /// Extra budget per unit of Manhattan distance between start and goal.
    pub iterations_per_step: u32,
}

impl Default for AStarRouter {
    fn default() -> Self {
        Self {
            min_iterations:      1_000,
            iterations_per_step: 30,
        }
    }
}

impl AStarRouter {
    /// Expansion cap for a search from `start` to `goal`.
    #[inline]
    pub fn iteration_cap(&self, start: Cell, goal: Cell) -> u32 {
        self.min_iterations
            .max(self.iterations_per_step.saturating_mul(start.manhattan(goal)))
    }
}

impl Router for AStarRouter {
    fn path(&self, start: Cell, goal: Cell, grid: &GridState, bounds: &Bounds) -> Option<Vec<Cell>> {
        astar(start, goal, grid, bounds, self.iteration_cap(start, goal))
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// Per-cell search bookkeeping.  Every discovered cell has one entry.
struct Node {
    /// Best known cost from `start`.  `u32::MAX` for blocked cells.
    g: u32,
    /// Predecessor on the best known path.
    parent: Option<Cell>,
    /// Order in which the cell entered the open set (tie-break key).
    seq: u64,
    closed: bool,
}

impl Node {
    fn blocked() -> Self {
        Node { g: u32::MAX, parent: None, seq: u64::MAX, closed: true }
    }
}

fn astar(
    start: Cell,
    goal: Cell,
    grid: &GridState,
    bounds: &Bounds,
    max_iterations: u32,
) -> Option<Vec<Cell>> {
    let mut nodes: HashMap<Cell, Node> = HashMap::new();
    // Min-heap on (f, first-seen seq).  An improved g pushes a fresh entry
    // under the cell's original seq; outdated entries are skipped on pop.
    let mut open: BinaryHeap<Reverse<(u32, u64, Cell)>> = BinaryHeap::new();
    let mut next_seq: u64 = 0;

    nodes.insert(start, Node { g: 0, parent: None, seq: next_seq, closed: false });
    open.push(Reverse((start.manhattan(goal), next_seq, start)));
    next_seq += 1;

    let mut iterations = 0;

    while let Some(Reverse((f, _, current))) = open.pop() {
        let g = match nodes.get(&current) {
            Some(node) if !node.closed && node.g + current.manhattan(goal) == f => node.g,
            _ => continue, // stale heap entry
        };

        if iterations >= max_iterations {
            return None;
        }
        iterations += 1;

        if current == goal {
            return Some(reconstruct(&nodes, goal));
        }

        if let Some(node) = nodes.get_mut(&current) {
            node.closed = true;
        }

        for neighbor in current.neighbors() {
            if nodes.get(&neighbor).is_some_and(|n| n.closed) {
                continue;
            }

            let traversable = bounds.contains(neighbor)
                && (neighbor == goal || !grid.is_occupied(neighbor));
            if !traversable {
                nodes.insert(neighbor, Node::blocked());
                continue;
            }

            let tentative = g + 1;
            match nodes.entry(neighbor) {
                Entry::Vacant(slot) => {
                    slot.insert(Node { g: tentative, parent: Some(current), seq: next_seq, closed: false });
                    open.push(Reverse((tentative + neighbor.manhattan(goal), next_seq, neighbor)));
                    next_seq += 1;
                }
                Entry::Occupied(mut slot) => {
                    let node = slot.get_mut();
                    if tentative < node.g {
                        node.g = tentative;
                        node.parent = Some(current);
                        open.push(Reverse((tentative + neighbor.manhattan(goal), node.seq, neighbor)));
                    }
                }
            }
        }
    }

    None
}

fn reconstruct(nodes: &HashMap<Cell, Node>, goal: Cell) -> Vec<Cell> {
    let mut path = vec![goal];
    let mut cur = goal;
    while let Some(parent) = nodes.get(&cur).and_then(|n| n.parent) {
        path.push(parent);
        cur = parent;
    }
    path.reverse();
    path
}
