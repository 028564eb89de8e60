use std::path::PathBuf;

use geocrosswalk::{DEFAULT_ATTEMPT_FACTOR, DEFAULT_SAMPLES};

/// Crosswalk CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "geocrosswalk", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Map each source area to the target area covering most of it
    Build(BuildArgs),
}

#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    /// Source GeoJSON FeatureCollection, e.g. census tracts
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub sources: PathBuf,

    /// Target GeoJSON FeatureCollection, e.g. ZIP codes
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub targets: PathBuf,

    /// Property holding the source identifier, e.g. "census_t_1"
    #[arg(long)]
    pub source_id: String,

    /// Property holding the target identifier, e.g. "zip"
    #[arg(long)]
    pub target_id: String,

    /// Output CSV file, defaults to "./crosswalk.csv"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Output column names, defaults to the two identifier fields
    #[arg(long, value_delimiter = ',', value_name = "SOURCE,TARGET")]
    pub header: Option<Vec<String>>,

    /// Accepted sample points per source
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    pub samples: usize,

    /// Sampling draws allowed per requested sample
    #[arg(long, default_value_t = DEFAULT_ATTEMPT_FACTOR)]
    pub attempt_factor: usize,

    /// Process sources on a single thread
    #[arg(long)]
    pub sequential: bool,
}

impl BuildArgs {
    /// (source, target) column names for the output table.
    pub fn header(&self) -> anyhow::Result<(&str, &str)> {
        match self.header.as_deref() {
            None => Ok((self.source_id.as_str(), self.target_id.as_str())),
            Some([source, target]) => Ok((source.as_str(), target.as_str())),
            Some(other) => anyhow::bail!("--header expects SOURCE,TARGET, got {} column(s)", other.len()),
        }
    }
}
