use clap::{Parser, ValueEnum};

use logistic_types::{SweepConfig, Topology};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyArg {
    FullyConnected,
    RandomBinary,
    Ring,
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Sweep coupled logistic maps over a parameter grid")]
pub struct Args {
    /// Path to a sweep config JSON (defaults built in when omitted)
    #[arg(long)]
    pub config: Option<String>,

    /// Output TSV path
    #[arg(short, long, default_value = "data/logistic.tsv")]
    pub output: String,

    /// Worker pool size (overrides config)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Base random seed (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Interaction topology (overrides config)
    #[arg(long, value_enum)]
    pub topology: Option<TopologyArg>,

    /// Edge probability for random-binary topology (default 0.5). Also
    /// applies to a random-binary topology coming from the config file.
    #[arg(long)]
    pub edge_prob: Option<f64>,

    /// Step counts, comma-separated (overrides config)
    #[arg(long, value_delimiter = ',')]
    pub n_steps: Option<Vec<usize>>,

    /// Print the effective config as JSON and exit
    #[arg(long, default_value_t = false)]
    pub print_config: bool,
}

impl Args {
    /// Apply command-line overrides on top of a loaded config.
    pub fn apply(&self, mut config: SweepConfig) -> SweepConfig {
        if let Some(workers) = self.workers {
            config.workers = workers;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(topology) = self.topology {
            config.topology = match (topology, config.topology) {
                (TopologyArg::FullyConnected, _) => Topology::FullyConnected,
                (TopologyArg::RandomBinary, Topology::RandomBinary { p }) => {
                    Topology::RandomBinary { p }
                }
                (TopologyArg::RandomBinary, _) => Topology::RandomBinary { p: 0.5 },
                (TopologyArg::Ring, _) => Topology::Ring,
            };
        }
        if let Some(edge_prob) = self.edge_prob {
            match &mut config.topology {
                Topology::RandomBinary { p } => *p = edge_prob,
                other => log::warn!("--edge-prob ignored for topology {other:?}"),
            }
        }
        if let Some(n_steps) = &self.n_steps {
            config.grid.n_steps_values = n_steps.clone();
        }
        config
    }
}
