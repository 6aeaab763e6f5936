use std::fs;
use std::fs::File;
use std::io::{self, stdout, BufWriter, IsTerminal, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use serde::Serialize;

use tracing::{info, info_span};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry};

use genealign::aligner::{AlignmentConfig, AlignmentMode, AlignmentResult, PairwiseAligner};
use genealign::aligner::scoring::GapLinear;
use genealign::errors::AlignError;
use genealign::io::{load_sequences, sequence_index, NamedSequence};

mod cli;

use cli::{AlignArgs, CliArgs, CliSubcommand, OutputType};

/// Alignment of one pair of input sequences, as reported to the user
#[derive(Debug, Serialize)]
struct PairReport {
    first: String,
    second: String,

    #[serde(flatten)]
    result: AlignmentResult,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_log = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_filter(filter_layer);

    Registry::default().with(stderr_log).init();
}

/// Pairs of sequence indices to align, depending on the command line options
fn select_pairs(sequences: &[NamedSequence], align_args: &AlignArgs) -> Result<Vec<(usize, usize)>, AlignError> {
    if align_args.all_pairs {
        return Ok((0..sequences.len())
            .combinations_with_replacement(2)
            .map(|pair| (pair[0], pair[1]))
            .collect());
    }

    let first = match &align_args.first {
        Some(name) => sequence_index(sequences, name)?,
        None => 0,
    };

    let second = match &align_args.second {
        Some(name) => sequence_index(sequences, name)?,
        None => 1,
    };

    for ix in [first, second] {
        if ix >= sequences.len() {
            return Err(AlignError::MissingSequence(format!("#{}", ix + 1)));
        }
    }

    Ok(vec![(first, second)])
}

fn write_reports<W: Write>(writer: &mut W, reports: &[PairReport], output_type: OutputType) -> Result<()> {
    match output_type {
        OutputType::Text => {
            for report in reports {
                writeln!(writer, "# {} vs {}", report.first, report.second)?;
                writeln!(writer, "{}", report.result)?;
                writeln!(writer)?;
            }
        },
        OutputType::Json => {
            serde_json::to_writer_pretty(&mut *writer, reports)?;
            writeln!(writer)?;
        },
    }

    Ok(())
}

fn align_subcommand(align_args: &AlignArgs) -> Result<()> {
    let sequences = load_sequences(&align_args.sequences)
        .with_context(|| format!("Could not load sequences from {:?}", align_args.sequences))?;

    let mode = if align_args.banded {
        AlignmentMode::Banded
    } else {
        AlignmentMode::Unrestricted
    };
    let config = AlignmentConfig::new(mode, align_args.align_length)?;

    let costs = GapLinear::new(align_args.cost_match, align_args.cost_mismatch, align_args.cost_gap);
    let aligner = PairwiseAligner::new(costs);

    let pairs = select_pairs(&sequences, align_args)?;
    let mut reports = Vec::with_capacity(pairs.len());
    for (i, j) in pairs {
        let (seq1, seq2) = (&sequences[i], &sequences[j]);

        let span = info_span!("align_pair", first = %seq1.name, second = %seq2.name);
        let _enter = span.enter();

        info!("Aligning {} ({} bp) vs {} ({} bp)...", seq1.name, seq1.len(), seq2.name, seq2.len());
        let start = Instant::now();
        let result = aligner.align(&seq1.sequence, &seq2.sequence, config)?;
        info!("Done in {:.3}s. Alignment cost: {}", start.elapsed().as_secs_f64(), result.cost);

        reports.push(PairReport {
            first: seq1.name.clone(),
            second: seq2.name.clone(),
            result,
        });
    }

    // Determine where to write the results to
    let mut writer: Box<dyn Write> = if let Some(path) = &align_args.output {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?
        }

        Box::new(BufWriter::new(File::create(path)?))
    } else {
        Box::new(stdout().lock())
    };

    write_reports(&mut writer, &reports, align_args.output_type)?;
    writer.flush()?;

    Ok(())
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    match &args.command {
        Some(CliSubcommand::Align(v)) => align_subcommand(v)?,
        None => anyhow::bail!("No subcommand given."),
    };

    Ok(())
}
