//! Welcome to `corefit`!

mod process;
mod partition;

pub mod algo;
pub mod analyze;
pub mod helpe;
pub mod render;
pub mod scenario;
pub mod store;

pub use crate::helpe::*;

/// Our fundamental unit of demand. A [`Process`] is a single request
/// for a contiguous chunk of memory:
///
/// 1. [`size`](Process::size) units are wanted, all at once, in one block.
/// 2. The request either lands in some partition fragment or it does not.
///    There is no third outcome--no partial grants, no retries, no paging.
///    A request that cannot be satisfied simply *waits*.
///
/// > ***ATTENTION:*** requests are consumed strictly in list order. All
/// three fitting strategies walk the same request list; they differ only
/// in which fragment they pick for each request. Reordering the input
/// list is a *different* workload, not a different strategy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Process {
    pub id:     u32,
    pub name:   String,
    pub size:   MemUnits,
}

/// A block of contiguous memory--either one of the original partitions
/// handed to the simulator, or a fragment produced by splitting one.
///
/// Splitting is how an oversized block serves an undersized request:
/// the block is carved into an exact-size allocated fragment plus a
/// leftover free fragment. The leftover re-enters the pool and may
/// itself be selected (and re-split) by a later request in the same run.
///
/// Lineage is tracked with two optional fields:
/// - [`parent_id`](Partition::parent_id) is set on fragments born from a
///   split. A block with no parent is *original*.
/// - [`original_size`](Partition::original_size) is set on *allocated*
///   fragments only, and records the capacity of the block the fragment
///   was carved from, so a display layer can say "what this partition
///   used to hold". Leftovers record nothing: a fragment carved from a
///   leftover reports the leftover's size, not the whole ancestor's.
///
/// [`original_index`](Partition::original_index)--the position of the
/// ancestral partition in the input list--is invariant across splits.
/// It is what regroups a family of fragments back under their ancestor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partition {
    pub id:             u32,
    pub size:           MemUnits,
    pub original_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id:      Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_size:  Option<MemUnits>,
}

/// One satisfied request: the process, the exact-size fragment it
/// occupies, and the slack inside that fragment.
///
/// Because the engine splits blocks instead of handing out whole ones,
/// the fragment's size always equals the request and
/// [`internal_fragmentation`](Allocation::internal_fragmentation) is
/// always zero. The field stays because the display contract reports it;
/// wasted space shows up as *external* fragmentation of the leftovers
/// instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub process:                Process,
    pub fragment:               Partition,
    pub internal_fragmentation: MemUnits,
}

/// The complete outcome of running one strategy over one pair of input
/// lists.
///
/// - `allocations` is ordered by satisfaction, which (since requests are
///   consumed in list order) is also input order restricted to the
///   satisfied requests.
/// - `waiting` preserves input order.
/// - `result_partitions` holds *every* fragment, allocated and free,
///   grouped by ancestral original partition, ancestors in input order.
///   Within a group: allocated fragments first (allocation order), then
///   at most one surviving free fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationResult {
    pub strategy:           Strategy,
    pub allocations:        Vec<Allocation>,
    pub waiting:            Vec<Process>,
    pub result_partitions:  Vec<Partition>,
}
