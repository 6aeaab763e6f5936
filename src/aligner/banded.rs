//! Banded Needleman-Wunsch, restricted to a corridor of [`MAX_INDELS`] cells on either
//! side of the main diagonal.
//!
//! The matrix has one row per prefix of the first sequence and `2 * MAX_INDELS + 1`
//! columns. Band column `j` in row `i` corresponds to column `i + j - MAX_INDELS` of the
//! full matrix, so the main diagonal sits in the center column. In band coordinates the
//! three predecessors of `(i, j)` are:
//!
//! * diagonal: `(i - 1, j)`
//! * left: `(i, j - 1)`
//! * up: `(i - 1, j + 1)`

use tracing::debug;

use crate::aligner::alignment::{AlignedPair, Alignment};
use crate::aligner::matrix::{Backpointer, DpMatrix};
use crate::aligner::scoring::{AlignmentCosts, Cost, MAX_INDELS};
use crate::errors::AlignError;

/// Number of columns in the banded matrix
pub const BAND_WIDTH: usize = 2 * MAX_INDELS + 1;

/// Column of the full DP matrix for band cell `(row, band_col)`, if that column lies within
/// the second sequence.
#[inline]
pub fn real_column(row: usize, band_col: usize, seq2_len: usize) -> Option<usize> {
    (row + band_col)
        .checked_sub(MAX_INDELS)
        .filter(|col| *col <= seq2_len)
}

/// Compute the banded edit cost of `seq1` vs. `seq2`, and the banded back-pointer matrix.
///
/// Returns an infinite cost and no back-pointers when the sequence lengths differ by more
/// than [`MAX_INDELS`], as the band can't connect both ends.
///
/// Tie-breaking between moves is the same as for the unrestricted aligner.
pub fn edit_distance<C, T>(costs: &C, seq1: &[T], seq2: &[T]) -> (Cost, Option<DpMatrix<Backpointer>>)
where
    C: AlignmentCosts,
    T: Copy + Eq,
{
    let n = seq1.len();
    let m = seq2.len();

    if n.abs_diff(m) > MAX_INDELS {
        debug!(len1 = n, len2 = m, "Length difference exceeds band, no alignment possible");
        return (Cost::Infinite, None);
    }

    debug!(rows = n + 1, cols = BAND_WIDTH, "Building banded DP matrix");
    let mut e: DpMatrix<Cost> = DpMatrix::new(n + 1, BAND_WIDTH);
    let mut p: DpMatrix<Backpointer> = DpMatrix::new(n + 1, BAND_WIDTH);

    for j in MAX_INDELS..BAND_WIDTH {
        if real_column(0, j, m).is_some() {
            e[(0, j)] = Cost::Finite(costs.gap() * (j - MAX_INDELS) as i64);
            p[(0, j)] = Backpointer::Left;
        }
    }

    for i in 1..=n {
        for j in 0..BAND_WIDTH {
            let Some(col) = real_column(i, j, m) else {
                continue;
            };

            let diag = if col > 0 {
                e[(i - 1, j)] + costs.diff(seq1[i - 1], seq2[col - 1])
            } else {
                Cost::Infinite
            };

            let left = if j > 0 {
                e[(i, j - 1)] + costs.gap()
            } else {
                Cost::Infinite
            };

            let up = if j < BAND_WIDTH - 1 {
                e[(i - 1, j + 1)] + costs.gap()
            } else {
                Cost::Infinite
            };

            let best = diag.min(left).min(up);
            if !best.is_finite() {
                continue;
            }

            e[(i, j)] = best;
            p[(i, j)] = if best == left {
                Backpointer::Left
            } else if best == up {
                Backpointer::Up
            } else {
                Backpointer::Diagonal
            };
        }
    }

    // Rightmost reachable cell of the last row
    let last_row = e.row(n);
    match (0..BAND_WIDTH).rev().find(|j| last_row[*j].is_finite()) {
        Some(terminal) => {
            debug!(terminal, col = real_column(n, terminal, m), "Banded terminal cell");
            (last_row[terminal], Some(p))
        },
        None => (Cost::Infinite, None)
    }
}

/// Walk the banded back-pointers from the rightmost reachable cell of the last row back to
/// the origin, which sits in the center column of the first row.
pub fn traceback(p: &DpMatrix<Backpointer>) -> Result<Alignment, AlignError> {
    let mut i = p.rows() - 1;
    let last_row = p.row(i);
    let mut j = (0..p.cols()).rev()
        .find(|j| last_row[*j] != Backpointer::Unreachable)
        .ok_or(AlignError::CorruptTraceback { row: i, col: 0 })?;

    let mut rev_alignment = Vec::with_capacity(2 * i + MAX_INDELS);
    while !(i == 0 && j == MAX_INDELS) {
        match p[(i, j)] {
            Backpointer::Up if i > 0 && j + 1 < p.cols() => {
                rev_alignment.push(AlignedPair::new(Some(i - 1), None));
                i -= 1;
                j += 1;
            },
            Backpointer::Diagonal if i > 0 && i + j > MAX_INDELS => {
                rev_alignment.push(AlignedPair::new(Some(i - 1), Some(i + j - MAX_INDELS - 1)));
                i -= 1;
            },
            Backpointer::Left if j > 0 && i + j > MAX_INDELS => {
                rev_alignment.push(AlignedPair::new(None, Some(i + j - MAX_INDELS - 1)));
                j -= 1;
            },
            _ => return Err(AlignError::CorruptTraceback { row: i, col: j }),
        }
    }

    rev_alignment.reverse();
    Ok(rev_alignment)
}
