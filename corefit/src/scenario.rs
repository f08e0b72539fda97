use crate::{algo, helpe::*};

/// The pair of input lists every strategy runs against. A successfully
/// built [Scenario] is guaranteed to be compliant with all of the
/// simulator's assumptions. These are:
/// - no request and no block has zero size
/// - no request has an empty name
/// - ids are unique within each list, and stay below the range
///   reserved for fragments minted during a run
/// - all blocks are original (no parent, no recorded ancestral size)
/// - no two blocks claim the same original index
///
/// [`init`] is the gatekeeper to the rest of the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub processes:  Vec<Process>,
    pub partitions: Vec<Partition>,
}

pub fn init(
    mut processes:  Vec<Process>,
    mut partitions: Vec<Partition>,
) -> Result<Scenario, ScenarioError> {
    let mut seen_ids: HashSet<u32> = HashSet::new();
    for idx in 0..processes.len() {
        if processes[idx].size == 0 {
            return Err(ScenarioError {
                message: String::from("Request with 0 size found!"),
                culprit: Culprit::Request(processes.remove(idx)),
            });
        } else if processes[idx].name.trim().is_empty() {
            return Err(ScenarioError {
                message: String::from("Request with empty name found!"),
                culprit: Culprit::Request(processes.remove(idx)),
            });
        } else if processes[idx].id >= FRAGMENT_ID_FLOOR {
            return Err(ScenarioError {
                message: String::from("Request id inside the reserved fragment range!"),
                culprit: Culprit::Request(processes.remove(idx)),
            });
        } else if !seen_ids.insert(processes[idx].id) {
            return Err(ScenarioError {
                message: String::from("Duplicate request id found!"),
                culprit: Culprit::Request(processes.remove(idx)),
            });
        }
    }

    seen_ids.clear();
    let mut seen_origins: HashSet<usize> = HashSet::new();
    for idx in 0..partitions.len() {
        if partitions[idx].size == 0 {
            return Err(ScenarioError {
                message: String::from("Block with 0 size found!"),
                culprit: Culprit::Block(partitions.remove(idx)),
            });
        } else if partitions[idx].id >= FRAGMENT_ID_FLOOR {
            return Err(ScenarioError {
                message: String::from("Block id inside the reserved fragment range!"),
                culprit: Culprit::Block(partitions.remove(idx)),
            });
        } else if !seen_ids.insert(partitions[idx].id) {
            return Err(ScenarioError {
                message: String::from("Duplicate block id found!"),
                culprit: Culprit::Block(partitions.remove(idx)),
            });
        } else if partitions[idx].is_derived() {
            return Err(ScenarioError {
                message: String::from("Unoriginal block found! (non-empty parent)"),
                culprit: Culprit::Block(partitions.remove(idx)),
            });
        } else if partitions[idx].original_size.is_some() {
            return Err(ScenarioError {
                message: String::from("Unoriginal block found! (recorded ancestral size)"),
                culprit: Culprit::Block(partitions.remove(idx)),
            });
        } else if !seen_origins.insert(partitions[idx].original_index) {
            return Err(ScenarioError {
                message: String::from("Duplicate original index found!"),
                culprit: Culprit::Block(partitions.remove(idx)),
            });
        }
    }

    Ok(Scenario {
        processes,
        partitions,
    })
}

impl Scenario {
    /// Builds a [Scenario] from bare sizes, assigning names, ids and
    /// original indices by position. Mostly a convenience for tests
    /// and quick experiments.
    pub fn from_sizes(requests: &[MemUnits], blocks: &[MemUnits]) -> Result<Self, ScenarioError> {
        let processes = requests.iter()
            .enumerate()
            .map(|(i, s)| Process::new(i as u32 + 1, &format!("p{}", i + 1), *s))
            .collect();
        let partitions = blocks.iter()
            .enumerate()
            .map(|(i, s)| Partition::original(i as u32 + 1, *s, i))
            .collect();

        init(processes, partitions)
    }

    #[inline(always)]
    pub fn total_requested(&self) -> MemUnits {
        self.processes.iter().map(|p| p.size).sum()
    }

    #[inline(always)]
    pub fn total_capacity(&self) -> MemUnits {
        self.partitions.iter().map(|b| b.size).sum()
    }

    /// Runs a single strategy against the scenario.
    pub fn run(&self, strategy: Strategy) -> AllocationResult {
        algo::allocate(&self.processes, &self.partitions, strategy)
    }

    /// Runs every strategy against the scenario.
    pub fn sweep(&self) -> Vec<AllocationResult> {
        algo::run_all(&self.processes, &self.partitions)
    }
}

impl Default for Scenario {
    /// The classroom workload the simulator ships with: six requests
    /// against six blocks, sized so that every strategy tells a
    /// different story.
    fn default() -> Self {
        Scenario::from_sizes(
            &[312, 198, 80, 486, 550, 266],
            &[100, 500, 200, 600, 600, 400],
        )
        .unwrap()
    }
}
