use std::path::PathBuf;

use clap::{value_parser, Args, Parser, Subcommand, ValueEnum};

use genealign::aligner::scoring::MAX_COST_MAGNITUDE;


/// The output formats supported by genealign
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputType {
    /// Cost followed by the aligned sequences and a match line
    Text,

    /// JSON array with one object per aligned pair
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Set verbosity level. Use multiple times to increase the verbosity level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<CliSubcommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliSubcommand {
    /// Compute the edit distance and alignment between pairs of sequences
    Align(AlignArgs),
}

#[derive(Args, Debug)]
pub struct AlignArgs {
    /// Sequences to align in FASTA format.
    #[clap(help_heading = "Inputs")]
    pub sequences: PathBuf,

    /// Name of the first sequence to align. Defaults to the first record.
    #[arg(short = 'i', long, conflicts_with = "all_pairs")]
    #[clap(help_heading = "Inputs")]
    pub first: Option<String>,

    /// Name of the second sequence to align. Defaults to the second record.
    #[arg(short = 'j', long, conflicts_with = "all_pairs")]
    #[clap(help_heading = "Inputs")]
    pub second: Option<String>,

    /// Align every pair of input sequences, including each sequence with itself
    #[arg(short = 'a', long)]
    #[clap(help_heading = "Inputs")]
    pub all_pairs: bool,

    /// Output filename. If not given, defaults to stdout
    #[arg(short, long)]
    #[clap(help_heading = "Outputs")]
    pub output: Option<PathBuf>,

    /// Output file type.
    #[arg(value_enum, short = 'O', long, default_value = "text")]
    #[clap(help_heading = "Outputs")]
    pub output_type: OutputType,

    /// Only fill a diagonal band of the DP matrix. Sequences whose lengths differ by more
    /// than 3 can't be aligned in this mode.
    #[arg(short, long)]
    #[clap(help_heading = "Alignment configuration")]
    pub banded: bool,

    /// Maximum number of characters of each sequence to align
    #[arg(short = 'n', long, default_value = "1000")]
    #[clap(help_heading = "Alignment configuration")]
    pub align_length: usize,

    /// Cost of aligning identical characters
    #[arg(short = 'm', long, default_value = "-3", allow_hyphen_values = true,
        value_parser = value_parser!(i64).range(-MAX_COST_MAGNITUDE..=MAX_COST_MAGNITUDE))]
    #[clap(help_heading = "Alignment configuration")]
    pub cost_match: i64,

    /// Cost of substituting one character for another
    #[arg(short = 's', long, default_value = "1",
        value_parser = value_parser!(i64).range(-MAX_COST_MAGNITUDE..=MAX_COST_MAGNITUDE))]
    #[clap(help_heading = "Alignment configuration")]
    pub cost_mismatch: i64,

    /// Cost of a single inserted or deleted character
    #[arg(short = 'g', long, default_value = "5",
        value_parser = value_parser!(i64).range(-MAX_COST_MAGNITUDE..=MAX_COST_MAGNITUDE))]
    #[clap(help_heading = "Alignment configuration")]
    pub cost_gap: i64,
}
