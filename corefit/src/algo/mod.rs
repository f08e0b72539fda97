pub mod fit;

use crate::helpe::*;

/// Runs one fitting strategy over one pair of input lists.
///
/// The function is deterministic, has no side effects, and is total:
/// an unsatisfiable request lands in `waiting`, it is never an error.
/// Inputs are only read; the working pool is a private copy.
///
/// All three strategies share the same skeleton and differ solely in
/// the selection rule (see [`fit::select`]):
///
/// 1. For each request, in list order, pick a fitting fragment from
///    the current pool--or park the request.
/// 2. On a hit, mint an exact-size allocated fragment. The candidate
///    is replaced in place by its leftover when one remains, so the
///    leftover keeps the candidate's pool position and may itself be
///    selected (and re-split) by a later request. An exact fit removes
///    the candidate outright.
/// 3. Regroup every fragment under its ancestral partition for the
///    result list.
///
/// Fragment ids are minted from the top of the `u32` space, descending
/// per run; the gatekeeper keeps input ids below [FRAGMENT_ID_FLOOR],
/// so no fresh id can collide with a pool id.
pub fn allocate(
    processes:  &[Process],
    partitions: &[Partition],
    strategy:   Strategy,
) -> AllocationResult {
    let mut pool: Vec<Partition> = partitions.to_vec();
    let mut allocations: Vec<Allocation> = vec![];
    let mut waiting: Vec<Process> = vec![];
    let mut next_id = u32::MAX;

    for process in processes {
        let Some(cand_idx) = fit::select(&pool, process.size, strategy) else {
            log::debug!(
                "[{}] no fragment fits '{}' ({} units); request parked",
                strategy, process.name, process.size
            );
            waiting.push(process.clone());
            continue;
        };
        let cand = pool[cand_idx].clone();

        // The allocated fragment is carved to the exact request size.
        // Leftovers never record an ancestral capacity, so a fragment
        // carved from one reports the leftover's own size.
        allocations.push(Allocation {
            process:    process.clone(),
            fragment:   Partition {
                id:             next_id,
                size:           process.size,
                original_index: cand.original_index,
                parent_id:      cand.parent_id,
                original_size:  Some(cand.ancestral_size()),
            },
            internal_fragmentation: 0,
        });
        next_id -= 1;

        let remaining = cand.size - process.size;
        if remaining > 0 {
            log::debug!(
                "[{}] split block {}: {} units to '{}', {} left over",
                strategy, cand.id, process.size, process.name, remaining
            );
            pool[cand_idx] = Partition {
                id:             next_id,
                size:           remaining,
                original_index: cand.original_index,
                parent_id:      Some(cand.id),
                original_size:  None,
            };
            next_id -= 1;
        } else {
            pool.remove(cand_idx);
        }
    }

    AllocationResult {
        strategy,
        result_partitions: regroup(partitions, &allocations, &pool),
        allocations,
        waiting,
    }
}

/// Runs every strategy against the same input lists. The runs share
/// no mutable state, so they fan out on the rayon pool.
pub fn run_all(processes: &[Process], partitions: &[Partition]) -> Vec<AllocationResult> {
    Strategy::ALL
        .par_iter()
        .map(|s| allocate(processes, partitions, *s))
        .collect()
}

/// Rebuilds the full fragment list for display: ancestors in input
/// order, each followed by its allocated fragments (allocation order)
/// and then its surviving free fragment, if any.
fn regroup(
    originals:      &[Partition],
    allocations:    &[Allocation],
    pool:           &[Partition],
) -> Vec<Partition> {
    let mut by_origin: IndexMap<usize, Vec<Partition>> = originals
        .iter()
        .map(|o| (o.original_index, vec![]))
        .collect();

    for a in allocations {
        // Every fragment traces to exactly one original, so the
        // entry is guaranteed to exist.
        by_origin[&a.fragment.original_index].push(a.fragment.clone());
    }
    for free in pool {
        by_origin[&free.original_index].push(free.clone());
    }

    by_origin.into_values().flatten().collect()
}
