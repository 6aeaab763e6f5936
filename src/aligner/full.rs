//! Unrestricted Needleman-Wunsch over the complete (n + 1) x (m + 1) matrix.

use tracing::debug;

use crate::aligner::alignment::{AlignedPair, Alignment};
use crate::aligner::matrix::{Backpointer, DpMatrix};
use crate::aligner::scoring::{AlignmentCosts, Cost};
use crate::errors::AlignError;

/// Compute the minimal edit cost of `seq1` vs. `seq2`, and the back-pointer matrix to
/// reconstruct an optimal alignment. Sequences can be over any alphabet of comparable
/// symbols.
///
/// Rows correspond to prefixes of `seq1`, columns to prefixes of `seq2`. When several moves
/// reach the minimum, `Left` wins over `Up`, and `Up` wins over `Diagonal`.
pub fn edit_distance<C, T>(costs: &C, seq1: &[T], seq2: &[T]) -> (Cost, DpMatrix<Backpointer>)
where
    C: AlignmentCosts,
    T: Copy + Eq,
{
    let rows = seq1.len() + 1;
    let cols = seq2.len() + 1;
    debug!(rows, cols, "Building full DP matrix");

    let mut e: DpMatrix<i64> = DpMatrix::new(rows, cols);
    let mut p: DpMatrix<Backpointer> = DpMatrix::new(rows, cols);

    for i in 1..rows {
        e[(i, 0)] = costs.gap() * i as i64;
        p[(i, 0)] = Backpointer::Up;
    }

    for j in 1..cols {
        e[(0, j)] = costs.gap() * j as i64;
        p[(0, j)] = Backpointer::Left;
    }

    for i in 1..rows {
        for j in 1..cols {
            let diag = costs.diff(seq1[i - 1], seq2[j - 1]) + e[(i - 1, j - 1)];
            let left = costs.gap() + e[(i, j - 1)];
            let up = costs.gap() + e[(i - 1, j)];

            let best = diag.min(left).min(up);
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

    (Cost::Finite(e[(rows - 1, cols - 1)]), p)
}

/// Walk the back-pointers from the bottom-right cell to the origin.
pub fn traceback(p: &DpMatrix<Backpointer>) -> Result<Alignment, AlignError> {
    let mut i = p.rows() - 1;
    let mut j = p.cols() - 1;

    let mut rev_alignment = Vec::with_capacity(i + j);
    while i > 0 || j > 0 {
        match p[(i, j)] {
            Backpointer::Up if i > 0 => {
                rev_alignment.push(AlignedPair::new(Some(i - 1), None));
                i -= 1;
            },
            Backpointer::Diagonal if i > 0 && j > 0 => {
                rev_alignment.push(AlignedPair::new(Some(i - 1), Some(j - 1)));
                i -= 1;
                j -= 1;
            },
            Backpointer::Left if j > 0 => {
                rev_alignment.push(AlignedPair::new(None, Some(j - 1)));
                j -= 1;
            },
            _ => return Err(AlignError::CorruptTraceback { row: i, col: j }),
        }
    }

    rev_alignment.reverse();
    Ok(rev_alignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aligner::alignment::aligned_strings;
    use crate::aligner::scoring::GapLinear;

    use Backpointer::*;

    fn chars(seq: &str) -> Vec<char> {
        seq.chars().collect()
    }

    fn render(seq1: &str, seq2: &str, aln: &Alignment) -> (String, String) {
        aligned_strings(&chars(seq1), &chars(seq2), aln, 100)
    }

    #[test]
    fn test_backpointers_aatt_aa() {
        let (cost, p) = edit_distance(&GapLinear::default(), b"AATT", b"AA");
        assert_eq!(cost, Cost::Finite(4));

        assert_eq!(p.row(0), &[Unreachable, Left, Left]);
        // E[1][2]: diagonal (-3 + 5) ties with left (5 - 3), left wins
        assert_eq!(p.row(1), &[Up, Diagonal, Left]);
        assert_eq!(p.row(2), &[Up, Up, Diagonal]);
        assert_eq!(p.row(3), &[Up, Up, Up]);
        assert_eq!(p.row(4), &[Up, Up, Up]);

        let aln = traceback(&p).unwrap();
        let (first, second) = render("AATT", "AA", &aln);
        assert_eq!(first, "AATT");
        assert_eq!(second, "AA--");
    }

    #[test]
    fn test_identical() {
        let (cost, p) = edit_distance(&GapLinear::default(), b"AAAA", b"AAAA");
        assert_eq!(cost, Cost::Finite(-12));

        let aln = traceback(&p).unwrap();
        assert!(aln.iter().all(|pair| pair.is_aligned()));
        assert_eq!(render("AAAA", "AAAA", &aln), ("AAAA".into(), "AAAA".into()));
    }

    #[test]
    fn test_left_preferred_over_up() {
        // An expensive substitution makes both gap moves tie at the single interior cell
        let costs = GapLinear::new(-3, 20, 5);
        let (cost, p) = edit_distance(&costs, b"A", b"T");

        assert_eq!(cost, Cost::Finite(10));
        assert_eq!(p[(1, 1)], Left);

        let aln = traceback(&p).unwrap();
        assert_eq!(render("A", "T", &aln), ("A-".into(), "-T".into()));
    }

    #[test]
    fn test_leading_gaps_follow_first_column() {
        let (cost, p) = edit_distance(&GapLinear::default(), b"GGACGT", b"ACGT");
        assert_eq!(cost, Cost::Finite(-2));

        let aln = traceback(&p).unwrap();
        assert_eq!(render("GGACGT", "ACGT", &aln), ("GGACGT".into(), "--ACGT".into()));
    }

    #[test]
    fn test_empty_sequences() {
        let (cost, p) = edit_distance(&GapLinear::default(), b"", b"ACG");
        assert_eq!(cost, Cost::Finite(15));
        assert_eq!(render("", "ACG", &traceback(&p).unwrap()), ("---".into(), "ACG".into()));

        let (cost, p) = edit_distance::<_, u8>(&GapLinear::default(), b"", b"");
        assert_eq!(cost, Cost::Finite(0));
        assert!(traceback(&p).unwrap().is_empty());
    }

    #[test]
    fn test_multibyte_characters() {
        let (cost, p) = edit_distance(&GapLinear::default(), &chars("señor"), &chars("senor"));
        assert_eq!(cost, Cost::Finite(4 * -3 + 1));
        assert_eq!(render("señor", "senor", &traceback(&p).unwrap()), ("señor".into(), "senor".into()));
    }

    #[test]
    fn test_corrupt_traceback() {
        let p: DpMatrix<Backpointer> = DpMatrix::new(2, 2);
        assert!(matches!(traceback(&p), Err(AlignError::CorruptTraceback { row: 1, col: 1 })));
    }
}
