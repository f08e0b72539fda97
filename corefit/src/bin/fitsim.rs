use anyhow::{anyhow, bail, Context, Result};
use corefit::*;
use corefit::{render, scenario, store::StateFile};

/// A contiguous memory allocation simulator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Strategy to report
    #[arg(value_enum, default_value_t = StrategyPick::All)]
    strategy:   StrategyPick,

    /// Path to a saved state (JSON carrying both input lists)
    #[arg(short, long, value_parser = clap::value_parser!(PathBuf))]
    state:      Option<PathBuf>,

    /// Path to a requests CSV (`name,size` rows, one header line)
    #[arg(short, long, value_parser = clap::value_parser!(PathBuf))]
    requests:   Option<PathBuf>,

    /// Path to a blocks CSV (`size` rows, one header line)
    #[arg(short, long, value_parser = clap::value_parser!(PathBuf))]
    blocks:     Option<PathBuf>,

    /// Where to persist the input lists after the run
    #[arg(long, value_parser = clap::value_parser!(PathBuf))]
    save:       Option<PathBuf>,

    /// Bar width of the memory map, in characters
    #[arg(short, long, default_value_t = 48)]
    width:      usize,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum StrategyPick {
    /// First-Fit only
    First,
    /// Best-Fit only
    Best,
    /// Worst-Fit only
    Worst,
    /// All three, side by side
    All,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Args::parse();
    let sc = load_scenario(&cli)?;

    let results = match cli.strategy {
        StrategyPick::First => vec![sc.run(Strategy::First)],
        StrategyPick::Best  => vec![sc.run(Strategy::Best)],
        StrategyPick::Worst => vec![sc.run(Strategy::Worst)],
        StrategyPick::All   => sc.sweep(),
    };
    for res in &results {
        println!("{}", render::report(res, cli.width));
    }

    if let Some(path) = cli.save {
        StateFile::save(&path, &sc)
            .map_err(|e| anyhow!("{e}"))
            .with_context(|| format!("persisting state to {}", path.display()))?;
    }

    Ok(())
}

/// Inputs come from a saved state, from a CSV pair, or--when nothing
/// is passed--from the built-in demo workload.
fn load_scenario(cli: &Args) -> Result<Scenario> {
    match (&cli.state, &cli.requests, &cli.blocks) {
        (Some(path), None, None) => {
            StateFile::load(path)
                .map_err(|e| anyhow!("{e}"))
                .with_context(|| format!("loading state from {}", path.display()))
        },
        (None, Some(req), Some(blk)) => {
            let processes = read_list_from_path::<RequestCsvParser, Process, (String, MemUnits)>(req.clone())
                .map_err(|e| anyhow!("{e}"))
                .with_context(|| format!("reading requests from {}", req.display()))?;
            let partitions = read_list_from_path::<BlockCsvParser, Partition, MemUnits>(blk.clone())
                .map_err(|e| anyhow!("{e}"))
                .with_context(|| format!("reading blocks from {}", blk.display()))?;

            Ok(scenario::init(processes, partitions)?)
        },
        (None, None, None) => Ok(Scenario::default()),
        _ => bail!("Pass either --state, or --requests together with --blocks, or nothing for the demo workload."),
    }
}
