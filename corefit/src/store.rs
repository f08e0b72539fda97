use crate::{helpe::*, scenario};

/// On-disk counterpart of the hosting layer's saved state: the two
/// input lists, round-tripped verbatim as JSON between sessions.
///
/// Field names are camelCased and the optional lineage fields are
/// simply absent when unset, so a state written by one session is
/// byte-stable across load/save cycles. Loading always passes through
/// the [`scenario::init`] gatekeeper--a tampered or stale state never
/// reaches the engine.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StateFile {
    pub processes:  Vec<Process>,
    pub partitions: Vec<Partition>,
}

impl StateFile {
    pub fn load(path: &Path) -> Result<Scenario, Box<dyn std::error::Error>> {
        let raw = std::fs::read_to_string(path)?;
        let state: StateFile = serde_json::from_str(&raw)?;

        Ok(scenario::init(state.processes, state.partitions)?)
    }

    pub fn save(path: &Path, sc: &Scenario) -> Result<(), Box<dyn std::error::Error>> {
        let state = StateFile {
            processes:  sc.processes.clone(),
            partitions: sc.partitions.clone(),
        };
        std::fs::write(path, serde_json::to_string_pretty(&state)?)?;

        Ok(())
    }
}
