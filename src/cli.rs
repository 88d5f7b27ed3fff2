use crate::bars::render::{DEFAULT_BLOCK, DEFAULT_WIDTH};
use crate::bars::{ChartConfig, VisualizeArgs};
use crate::model::Period;
use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitbars")]
#[command(about = "Collect git commit line stats and render weekly activity bars")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase log verbosity (-v, -vv, -vvv)")]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct ChartArgs {
    #[arg(long, help = "Maximum bar length in blocks", default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    #[arg(long, help = "Glyph used to draw bars", default_value_t = DEFAULT_BLOCK)]
    pub block: char,

    #[arg(long, help = "Bucket by day instead of ISO week (always gap-filled)")]
    pub daily: bool,

    #[arg(long, help = "Insert empty weeks between the first and last active week")]
    pub fill_gaps: bool,
}

impl From<ChartArgs> for ChartConfig {
    fn from(args: ChartArgs) -> Self {
        Self {
            width: args.width,
            block: args.block,
            period: if args.daily { Period::Day } else { Period::Week },
            fill_gaps: args.fill_gaps,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Collect commits and line stats from repositories into a CSV file
    Collect {
        #[arg(required = true, num_args = 1.., help = "One or more repository paths")]
        repositories: Vec<PathBuf>,

        #[arg(short, long, help = "Output CSV file", default_value = "commits.csv")]
        output: PathBuf,
    },
    /// Render a bar chart of weekly line changes from a commits CSV file
    Visualize {
        #[arg(short, long, help = "CSV file with the commits data")]
        input: PathBuf,

        #[arg(short = 'a', long = "author", num_args = 0.., help = "Only count commits by these authors (case-insensitive)")]
        authors: Vec<String>,

        #[arg(short, long, help = "Output file", default_value = "bars.txt")]
        output: PathBuf,

        #[arg(long, help = "Write the chart as JSON instead of bars")]
        json: bool,

        #[clap(flatten)]
        chart: ChartArgs,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::logging::init(self.verbose);

        match self.command {
            Commands::Collect { repositories, output } => crate::collect::exec(repositories, &output),
            Commands::Visualize {
                input,
                authors,
                output,
                json,
                chart,
            } => crate::bars::exec(VisualizeArgs {
                input,
                authors,
                output,
                json,
                config: chart.into(),
            }),
        }
    }
}
