//! Dynamic-Weight Solver
//!
//! Per-group dynamic programme over `(accepted count, cumulative cost)`
//! states. A 1-D capacity sweep — the classic 0/1 knapsack shape — is only
//! sound while the rate is zero: once an item's cost depends on how many
//! items were accepted before it, the accepted count must be tracked as its
//! own state dimension. The table therefore holds, for every reachable
//! `(k, t)`, the best value attainable with exactly `k` accepted items at
//! exactly cumulative cost `t`, plus a back-reference for reconstructing
//! the winning selection.
//!
//! Fill cost is `O(m * T^2)` time per group with `O(T^2)` state, which is
//! inherent to the position-dependent cost model.

use std::time::Instant;

use crate::{
    config::Problem,
    items::groups::ItemGroup,
    solvers::{GroupResult, Selection, Solver, SolverError, SolverResult},
};

/// Solver for the position-dependent ("dynamic") weight model.
#[derive(Debug)]
pub struct DynamicWeightSolver;

impl Solver for DynamicWeightSolver {
    fn solve(problem: &Problem) -> Result<SolverResult, SolverError> {
        let started = Instant::now();

        let mut max_value = 0;
        let mut group_results = Vec::new();

        // Groups are independent instances; ascending iteration keeps the
        // collected results in ascending group-index order.
        for index in 0..problem.groups() {
            let group = ItemGroup::partition(problem.items(), index);

            if group.is_empty() {
                continue;
            }

            let result = solve_group(&group, problem.capacity(), problem.rate())?;

            max_value = max_value.max(result.max_value);
            group_results.push(result);
        }

        Ok(SolverResult {
            max_value,
            total_time: started.elapsed(),
            group_results,
        })
    }
}

/// A reachable state's record: the best value found for it so far and the
/// back-reference taken to reach that value.
#[derive(Debug, Clone, Copy)]
struct Cell {
    value: u64,
    step: Option<Step>,
}

/// Back-reference from a reachable state `(k, t)` to its predecessor
/// `(k - 1, prev_cost)` and the item whose acceptance made the transition.
#[derive(Debug, Clone, Copy)]
struct Step {
    prev_cost: u32,
    item: usize,
}

/// The best terminal state found by scanning the filled table.
#[derive(Debug, Clone, Copy)]
struct BestState {
    accepted: usize,
    cost: usize,
    value: u64,
}

const BAD_COORDINATE: SolverError = SolverError::InvariantViolation {
    message: "state coordinate outside the addressable table",
};

/// Table over `(accepted count, cumulative cost)` states.
///
/// Level `k` holds every state with exactly `k` accepted items; a `None`
/// entry is unreached, which is distinct from a reachable state of value 0.
/// The origin `(0, 0)` is reachable with value 0 and no back-reference.
#[derive(Debug)]
struct StateTable {
    levels: Vec<Vec<Option<Cell>>>,
}

impl StateTable {
    fn new(max_accepted: u32, capacity: u32) -> Result<Self, SolverError> {
        let depth = to_index(max_accepted)
            .and_then(|levels| levels.checked_add(1))
            .ok_or(BAD_COORDINATE)?;
        let width = to_index(capacity)
            .and_then(|cells| cells.checked_add(1))
            .ok_or(BAD_COORDINATE)?;

        let mut levels = vec![vec![None; width]; depth];

        if let Some(origin) = levels.first_mut().and_then(|row| row.first_mut()) {
            *origin = Some(Cell {
                value: 0,
                step: None,
            });
        }

        Ok(Self { levels })
    }

    fn get(&self, accepted: u32, cost: u32) -> Option<Cell> {
        self.get_at(to_index(accepted)?, to_index(cost)?)
    }

    fn get_at(&self, accepted: usize, cost: usize) -> Option<Cell> {
        self.levels.get(accepted)?.get(cost).copied().flatten()
    }

    /// Records `candidate` at `(accepted, cost)` if it is strictly better
    /// than the value already stored there.
    fn offer(&mut self, accepted: u32, cost: u32, candidate: Cell) -> Result<(), SolverError> {
        let slot = to_index(accepted)
            .and_then(|level| self.levels.get_mut(level))
            .and_then(|row| to_index(cost).and_then(|cell| row.get_mut(cell)))
            .ok_or(BAD_COORDINATE)?;

        if slot.is_none_or(|current| candidate.value > current.value) {
            *slot = Some(candidate);
        }

        Ok(())
    }

    /// Scans every reachable state for the optimum: strictly greatest value
    /// wins, and among value ties the smallest cumulative cost wins. The
    /// fixed scan order (ascending count, then cost) keeps the winner
    /// deterministic for a given input order.
    fn best(&self) -> BestState {
        let mut best = BestState {
            accepted: 0,
            cost: 0,
            value: 0,
        };

        for (accepted, row) in self.levels.iter().enumerate() {
            for (cost, cell) in row.iter().enumerate() {
                let Some(cell) = cell else { continue };

                if cell.value > best.value || (cell.value == best.value && cost < best.cost) {
                    best = BestState {
                        accepted,
                        cost,
                        value: cell.value,
                    };
                }
            }
        }

        best
    }
}

/// Solves a single non-empty group against the shared capacity and rate.
fn solve_group(group: &ItemGroup, capacity: u32, rate: u32) -> Result<GroupResult, SolverError> {
    // No selection can hold more items than the group has, and base weights
    // of at least 1 bound the count by the capacity as well.
    let max_accepted = u32::try_from(group.len())
        .unwrap_or(u32::MAX)
        .min(capacity);

    let mut table = StateTable::new(max_accepted, capacity)?;

    for (item_index, item) in group.iter().enumerate() {
        // Sweep the count dimension high-to-low: transitions write into
        // level `k + 1` while reads come from level `k`, so no state this
        // item produces can feed its own transitions. That is the 0/1
        // discipline the recurrence requires, without copying the table.
        for position in (0..max_accepted).rev() {
            let Some(weight) = admissible_weight(item.dynamic_weight(rate, position), capacity)
            else {
                continue;
            };

            for cost in 0..=(capacity - weight) {
                let Some(cell) = table.get(position, cost) else {
                    continue;
                };

                let value = cell
                    .value
                    .checked_add(u64::from(item.value()))
                    .ok_or(SolverError::ValueOverflow {
                        group: group.index(),
                    })?;

                table.offer(
                    position + 1,
                    cost + weight,
                    Cell {
                        value,
                        step: Some(Step {
                            prev_cost: cost,
                            item: item_index,
                        }),
                    },
                )?;
            }
        }
    }

    let best = table.best();
    let selected_items = reconstruct(&table, best, group, rate)?;

    Ok(GroupResult {
        group_index: group.index(),
        items_selected: selected_items.len(),
        dynamic_time_used: u32::try_from(best.cost).map_err(|_error| BAD_COORDINATE)?,
        max_value: best.value,
        selected_items,
    })
}

/// Narrows a dynamic weight to `u32` when it can still fit under `capacity`.
fn admissible_weight(weight: u64, capacity: u32) -> Option<u32> {
    u32::try_from(weight).ok().filter(|weight| *weight <= capacity)
}

/// Widens a `u32` table coordinate for indexing.
fn to_index(value: u32) -> Option<usize> {
    usize::try_from(value).ok()
}

/// Rebuilds the acceptance-ordered witness by walking back-references from
/// the optimal terminal state, then cross-checks that the witness reproduces
/// that state's cumulative cost exactly.
fn reconstruct(
    table: &StateTable,
    best: BestState,
    group: &ItemGroup,
    rate: u32,
) -> Result<Selection, SolverError> {
    let mut selection = Selection::new();

    let mut level = best.accepted;
    let mut at = best.cost;

    while level > 0 {
        let cell = table
            .get_at(level, at)
            .ok_or(SolverError::InvariantViolation {
                message: "back-walk entered an unreached state",
            })?;
        let step = cell.step.ok_or(SolverError::InvariantViolation {
            message: "reachable non-origin state has no back-reference",
        })?;
        let item = group
            .items()
            .get(step.item)
            .copied()
            .ok_or(SolverError::InvariantViolation {
                message: "back-reference names an item outside the group",
            })?;

        selection.push(item);
        at = to_index(step.prev_cost).ok_or(BAD_COORDINATE)?;
        level -= 1;
    }

    if at != 0 {
        return Err(SolverError::InvariantViolation {
            message: "back-walk did not terminate at the origin",
        });
    }

    selection.reverse();

    let mut replayed: u64 = 0;
    let mut position: u32 = 0;

    for item in &selection {
        replayed += item.dynamic_weight(rate, position);
        position += 1;
    }

    let terminal_cost = u64::try_from(best.cost).map_err(|_error| BAD_COORDINATE)?;

    if replayed != terminal_cost {
        return Err(SolverError::InvariantViolation {
            message: "witness does not reproduce its state's cumulative cost",
        });
    }

    Ok(selection)
}
