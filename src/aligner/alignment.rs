use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::aligner::scoring::Cost;

/// Gap marker used in rendered alignments
pub const GAP: char = '-';

/// Number of aligned characters reported for each sequence
pub const DISPLAY_LENGTH: usize = 100;

/// Reported in place of both aligned sequences when no banded alignment exists
pub const NO_ALIGNMENT: &str = "No Alignment Possible";

/// An aligned pair of positions. The first element is the position in the first sequence,
/// the second element the position in the second sequence.
///
/// In case of an insertion or deletion, one of the elements is `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlignedPair {
    pub pos1: Option<usize>,
    pub pos2: Option<usize>,
}

impl AlignedPair {
    pub fn new(pos1: Option<usize>, pos2: Option<usize>) -> Self {
        Self { pos1, pos2 }
    }

    pub fn is_aligned(&self) -> bool {
        matches!((self.pos1, self.pos2), (Some(_), Some(_)))
    }

    pub fn is_indel(&self) -> bool {
        !self.is_aligned()
    }
}

pub type Alignment = Vec<AlignedPair>;

/// Result of aligning two sequences: the cost and the first [`DISPLAY_LENGTH`] columns of
/// the alignment, one string per sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AlignmentResult {
    #[serde(rename = "align_cost")]
    pub cost: Cost,

    #[serde(rename = "seqi_first100")]
    pub aligned1: String,

    #[serde(rename = "seqj_first100")]
    pub aligned2: String,
}

impl AlignmentResult {
    pub fn new(cost: Cost, aligned1: String, aligned2: String) -> Self {
        Self { cost, aligned1, aligned2 }
    }

    /// The outcome when the banded aligner can't connect the ends of both sequences
    pub fn infeasible() -> Self {
        Self::new(Cost::Infinite, NO_ALIGNMENT.to_string(), NO_ALIGNMENT.to_string())
    }

    pub fn is_feasible(&self) -> bool {
        self.cost.is_finite()
    }
}

/// Render the first `max_len` columns of an alignment as two gapped strings, one character
/// per column.
pub fn aligned_strings(seq1: &[char], seq2: &[char], aln: &[AlignedPair], max_len: usize) -> (String, String) {
    aln.iter()
        .take(max_len)
        .map(|pair| (pair.pos1.map_or(GAP, |p| seq1[p]), pair.pos2.map_or(GAP, |p| seq2[p])))
        .unzip()
}

/// Match line between two rendered alignment rows: `|` for identical characters, `*` for
/// substitutions and a space where either row has a gap.
pub fn match_line(aligned1: &str, aligned2: &str) -> String {
    aligned1.chars()
        .zip(aligned2.chars())
        .map(|(a, b)| match (a, b) {
            (GAP, _) | (_, GAP) => ' ',
            (a, b) if a == b => '|',
            _ => '*',
        })
        .collect()
}

impl Display for AlignmentResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "cost: {}", self.cost)?;

        if self.is_feasible() {
            write!(f, "{}\n{}\n{}", self.aligned1, match_line(&self.aligned1, &self.aligned2), self.aligned2)
        } else {
            write!(f, "{}", NO_ALIGNMENT)
        }
    }
}
