pub use std::{
    collections::{HashMap, HashSet},
    fmt,
    hash::{Hash, Hasher},
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};
pub use thiserror::Error;
pub use itertools::Itertools;
pub use rayon::prelude::*;
pub use indexmap::IndexMap;
pub use clap::{Parser, ValueEnum};

pub use crate::{Allocation, AllocationResult, Partition, Process,
    scenario::*,
};

/// The unit for measuring memory. The simulator does not care whether
/// a unit is a byte, a kilobyte or a megabyte--only that request sizes
/// and partition sizes are counted in the same one.
pub type MemUnits = usize;

/// Input ids live in the lower half of the `u32` space; everything at
/// or above this floor is reserved for fragments minted during a run,
/// so a fresh fragment id can never collide with a pool id.
pub const FRAGMENT_ID_FLOOR: u32 = u32::MAX / 2;

/// The partition-selection rule. This is the *only* thing the three
/// simulated strategies do differently; splitting, bookkeeping and
/// result assembly are shared.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Debug)]
pub enum Strategy {
    /// First fragment in pool order that fits
    First,
    /// Smallest fitting fragment (pool order breaks ties)
    Best,
    /// Largest fitting fragment (pool order breaks ties)
    Worst,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::First, Strategy::Best, Strategy::Worst];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strategy::First => "First-Fit",
            Strategy::Best  => "Best-Fit",
            Strategy::Worst => "Worst-Fit",
        };
        write!(f, "{}", label)
    }
}

#[derive(Error, Debug)]
#[error("{message}\n{:?}", culprit)]
/// Appears while gatekeeping the input lists, before any
/// strategy gets to run.
pub struct ScenarioError {
    pub message: String,
    pub culprit: Culprit,
}

/// The offending input entity, carried inside a [ScenarioError]
/// for diagnostics.
#[derive(Debug)]
pub enum Culprit {
    Request(Process),
    Block(Partition),
}

//---START EXTERNAL INTERFACES
// The types listed below implement interfaces to the simulator's
// data sources.
//
// To write your own interface, simply make sure that it
// satisfies the `ListGen` trait.

/// Defines the interface for reading one of the two input lists.
///
/// For example: we ship a type that implements [ListGen] and reads
/// requests from a `name,size` CSV, and another one that reads
/// partition sizes. The saved-state format lives elsewhere (see
/// [`crate::store`]), since it carries both lists at once.
pub trait ListGen<T, D> {
    fn new(path: PathBuf) -> Self;
    /// Either a complete list is successfully returned, or some
    /// arbitrary type that implements [std::error::Error].
    fn read_all(&self) -> Result<Vec<T>, Box<dyn std::error::Error>>;
    /// Uses some available data to spawn one entry. We do not put
    /// any limitations on what that data may look like.
    fn gen_single(&self, d: D, id: u32) -> T;
}

/// Reads processes from a CSV with a `name,size` header line.
pub struct RequestCsvParser {
    pub path: PathBuf,
}

impl ListGen<Process, (String, MemUnits)> for RequestCsvParser {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
        }
    }

    fn read_all(&self) -> Result<Vec<Process>, Box<dyn std::error::Error>> {
        let mut res = vec![];
        let mut next_id = 1;

        let fd = std::fs::File::open(self.path.as_path())?;
        let reader = BufReader::new(fd);
        for line in reader.lines()
            // First line is the header!
            .skip(1) {
            let line = line?;
            if line.trim().is_empty() { continue; }
            let (name, size) = line.split(',')
                .map(|x| x.trim())
                .collect_tuple()
                .ok_or("Malformed request row (want `name,size`).")?;
            res.push(self.gen_single((name.to_string(), size.parse::<MemUnits>()?), next_id));
            next_id += 1;
        }

        Ok(res)
    }

    fn gen_single(&self, (name, size): (String, MemUnits), id: u32) -> Process {
        Process {
            id,
            name,
            size,
        }
    }
}

/// Reads partitions from a CSV with a `size` header line. Block ids
/// and original indices are assigned by row order.
pub struct BlockCsvParser {
    pub path: PathBuf,
}

impl ListGen<Partition, MemUnits> for BlockCsvParser {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
        }
    }

    fn read_all(&self) -> Result<Vec<Partition>, Box<dyn std::error::Error>> {
        let mut res = vec![];
        let mut next_id = 1;

        let fd = std::fs::File::open(self.path.as_path())?;
        let reader = BufReader::new(fd);
        for line in reader.lines()
            // First line is the header!
            .skip(1) {
            let line = line?;
            if line.trim().is_empty() { continue; }
            res.push(self.gen_single(line.trim().parse::<MemUnits>()?, next_id));
            next_id += 1;
        }

        Ok(res)
    }

    fn gen_single(&self, size: MemUnits, id: u32) -> Partition {
        Partition::original(id, size, (id - 1) as usize)
    }
}
//---END EXTERNAL INTERFACES

pub fn read_list_from_path<T, P, D>(file_path: PathBuf) -> Result<Vec<P>, Box<dyn std::error::Error>>
where T: ListGen<P, D> {
    let parser = T::new(file_path);

    parser.read_all()
}
