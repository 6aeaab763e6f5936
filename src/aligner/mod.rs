pub mod alignment;
pub mod banded;
pub mod full;
pub mod matrix;
pub mod scoring;

use tracing::{debug, debug_span};

use crate::errors::AlignError;
pub use alignment::{AlignedPair, Alignment, AlignmentResult};
use alignment::{aligned_strings, DISPLAY_LENGTH};
use scoring::{AlignmentCosts, Cost, GapLinear};

/// Enum representing which dynamic program to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlignmentMode {
    /// Fill the complete DP matrix, O(nm) time and space
    #[default]
    Unrestricted,

    /// Only fill a diagonal band of the DP matrix, O(n) time and space. Sequences whose
    /// lengths differ by more than [`scoring::MAX_INDELS`] can't be aligned.
    Banded,
}

/// Settings for a single alignment request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentConfig {
    mode: AlignmentMode,
    align_length: usize,
}

impl AlignmentConfig {
    /// `align_length` is the maximum number of characters of each sequence to align.
    pub fn new(mode: AlignmentMode, align_length: usize) -> Result<Self, AlignError> {
        if align_length == 0 {
            return Err(AlignError::InvalidAlignLength(align_length));
        }

        Ok(Self { mode, align_length })
    }

    pub fn unrestricted(align_length: usize) -> Result<Self, AlignError> {
        Self::new(AlignmentMode::Unrestricted, align_length)
    }

    pub fn banded(align_length: usize) -> Result<Self, AlignError> {
        Self::new(AlignmentMode::Banded, align_length)
    }

    pub fn mode(&self) -> AlignmentMode {
        self.mode
    }

    pub fn align_length(&self) -> usize {
        self.align_length
    }

    /// Decode a sequence and keep its first `align_length` characters.
    fn truncate(&self, seq: &[u8], which: usize) -> Result<Vec<char>, AlignError> {
        let text = std::str::from_utf8(seq)
            .map_err(|source| AlignError::InvalidSequence { which, source })?;

        Ok(text.chars().take(self.align_length).collect())
    }
}

pub struct PairwiseAligner<C> {
    costs: C,
}

impl Default for PairwiseAligner<GapLinear> {
    fn default() -> Self {
        Self::new(GapLinear::default())
    }
}

impl<C> PairwiseAligner<C>
where
    C: AlignmentCosts
{
    pub fn new(costs: C) -> Self {
        Self { costs }
    }

    pub fn costs(&self) -> &C {
        &self.costs
    }

    /// Align the first `config.align_length()` characters of both sequences, and report the
    /// cost together with the first 100 columns of the alignment.
    ///
    /// Sequences are UTF-8 text and are compared character by character, so a multi-byte
    /// character counts as a single symbol.
    ///
    /// A banded alignment that can't connect both sequence ends is not an error: its cost is
    /// infinite and both aligned sequences read "No Alignment Possible".
    pub fn align<S1, S2>(&self, seq1: S1, seq2: S2, config: AlignmentConfig) -> Result<AlignmentResult, AlignError>
    where
        S1: AsRef<[u8]>,
        S2: AsRef<[u8]>,
    {
        let seq1 = config.truncate(seq1.as_ref(), 1)?;
        let seq2 = config.truncate(seq2.as_ref(), 2)?;

        let result = match self.align_symbols(&seq1, &seq2, config.mode())? {
            (cost, Some(alignment)) => {
                let (aligned1, aligned2) = aligned_strings(&seq1, &seq2, &alignment, DISPLAY_LENGTH);
                AlignmentResult::new(cost, aligned1, aligned2)
            },
            (_, None) => AlignmentResult::infeasible(),
        };

        Ok(result)
    }

    /// Like [`Self::align`], but returns the complete alignment as position pairs into the
    /// truncated sequences. Positions count characters, not bytes. The alignment is `None` if
    /// no banded alignment exists.
    pub fn align_pairs<S1, S2>(&self, seq1: S1, seq2: S2, config: AlignmentConfig) -> Result<(Cost, Option<Alignment>), AlignError>
    where
        S1: AsRef<[u8]>,
        S2: AsRef<[u8]>,
    {
        let seq1 = config.truncate(seq1.as_ref(), 1)?;
        let seq2 = config.truncate(seq2.as_ref(), 2)?;

        self.align_symbols(&seq1, &seq2, config.mode())
    }

    fn align_symbols(&self, seq1: &[char], seq2: &[char], mode: AlignmentMode) -> Result<(Cost, Option<Alignment>), AlignError> {
        let span = debug_span!("align", ?mode, len1 = seq1.len(), len2 = seq2.len());
        let _enter = span.enter();

        let (cost, alignment) = match mode {
            AlignmentMode::Unrestricted => {
                let (cost, p) = full::edit_distance(&self.costs, seq1, seq2);
                (cost, Some(full::traceback(&p)?))
            },
            AlignmentMode::Banded => match banded::edit_distance(&self.costs, seq1, seq2) {
                (cost, Some(p)) => (cost, Some(banded::traceback(&p)?)),
                (cost, None) => (cost, None),
            },
        };

        debug!(%cost, "Alignment done");
        Ok((cost, alignment))
    }
}

/// Align two sequences with the default costs (match -3, substitution 1, indel 5).
pub fn align<S1, S2>(seq1: S1, seq2: S2, config: AlignmentConfig) -> Result<AlignmentResult, AlignError>
where
    S1: AsRef<[u8]>,
    S2: AsRef<[u8]>,
{
    PairwiseAligner::default().align(seq1, seq2, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aligner::alignment::NO_ALIGNMENT;

    #[test]
    fn test_invalid_align_length() {
        assert!(matches!(AlignmentConfig::unrestricted(0), Err(AlignError::InvalidAlignLength(0))));
        assert!(AlignmentConfig::banded(1).is_ok());
    }

    #[test]
    fn test_identical() {
        let config = AlignmentConfig::unrestricted(4).unwrap();
        let result = align("AAAA", "AAAA", config).unwrap();

        assert_eq!(result.cost, Cost::Finite(-12));
        assert_eq!(result.aligned1, "AAAA");
        assert_eq!(result.aligned2, "AAAA");
    }

    #[test]
    fn test_banded_agrees_with_unrestricted() {
        let full = align("AATT", "AA", AlignmentConfig::unrestricted(4).unwrap()).unwrap();
        let banded = align("AATT", "AA", AlignmentConfig::banded(4).unwrap()).unwrap();

        assert_eq!(full.cost, Cost::Finite(4));
        assert_eq!(banded, full);
    }

    #[test]
    fn test_banded_infeasible() {
        let result = align("AAAAAAAA", "AAAA", AlignmentConfig::banded(100).unwrap()).unwrap();

        assert_eq!(result.cost, Cost::Infinite);
        assert!(!result.is_feasible());
        assert_eq!(result.aligned1, NO_ALIGNMENT);
        assert_eq!(result.aligned2, NO_ALIGNMENT);
    }

    #[test]
    fn test_align_length_truncates_before_banding() {
        // Only the first three characters of each sequence take part, so the length
        // difference of the full sequences doesn't matter
        let result = align("ACGTTTTTTT", "ACG", AlignmentConfig::banded(3).unwrap()).unwrap();

        assert_eq!(result.cost, Cost::Finite(-9));
        assert_eq!(result.aligned1, "ACG");
        assert_eq!(result.aligned2, "ACG");
    }

    #[test]
    fn test_output_truncated_to_display_length() {
        let seq1 = "ACGT".repeat(40);
        let seq2 = "ACGA".repeat(40);

        for config in [AlignmentConfig::unrestricted(1000).unwrap(), AlignmentConfig::banded(1000).unwrap()] {
            let result = align(&seq1, &seq2, config).unwrap();
            assert_eq!(result.cost, Cost::Finite(40 * (3 * -3 + 1)));
            assert_eq!(result.aligned1, seq1[..DISPLAY_LENGTH]);
            assert_eq!(result.aligned2, seq2[..DISPLAY_LENGTH]);
        }
    }

    #[test]
    fn test_custom_costs() {
        let aligner = PairwiseAligner::new(GapLinear::new(0, 1, 1));
        let config = AlignmentConfig::unrestricted(100).unwrap();
        let result = aligner.align("kitten", "sitting", config).unwrap();

        assert_eq!(result.cost, Cost::Finite(3));
        assert_eq!(aligner.costs().gap(), 1);
    }

    #[test]
    fn test_multibyte_characters() {
        let config = AlignmentConfig::unrestricted(10).unwrap();
        let result = align("ñ", "n", config).unwrap();

        assert_eq!(result.cost, Cost::Finite(1));
        assert_eq!(result.aligned1, "ñ");
        assert_eq!(result.aligned2, "n");

        let banded = align("añob", "anob", AlignmentConfig::banded(10).unwrap()).unwrap();
        assert_eq!(banded.cost, Cost::Finite(3 * -3 + 1));
        assert_eq!(banded.aligned1, "añob");
        assert_eq!(banded.aligned2, "anob");
    }

    #[test]
    fn test_align_length_counts_characters() {
        let result = align("ééééé", "éééé", AlignmentConfig::unrestricted(3).unwrap()).unwrap();

        assert_eq!(result.cost, Cost::Finite(-9));
        assert_eq!(result.aligned1, "ééé");
    }

    #[test]
    fn test_multibyte_character_at_display_cut() {
        let seq = format!("{}é", "A".repeat(DISPLAY_LENGTH - 1));
        let longer = format!("{seq}ü");

        for config in [AlignmentConfig::unrestricted(1000).unwrap(), AlignmentConfig::banded(1000).unwrap()] {
            let result = align(&longer, &longer, config).unwrap();
            assert_eq!(result.aligned1, seq);
            assert_eq!(result.aligned2, seq);
            assert_eq!(result.aligned1.chars().count(), DISPLAY_LENGTH);
            assert!(!result.aligned1.contains(char::REPLACEMENT_CHARACTER));
        }
    }

    #[test]
    fn test_invalid_utf8() {
        let config = AlignmentConfig::unrestricted(10).unwrap();

        assert!(matches!(align(b"AC\xffGT", "ACGT", config), Err(AlignError::InvalidSequence { which: 1, .. })));
        assert!(matches!(align("ACGT", b"\xc3", config), Err(AlignError::InvalidSequence { which: 2, .. })));
    }

    #[test]
    fn test_align_pairs() {
        let aligner = PairwiseAligner::default();
        let (cost, aln) = aligner.align_pairs("GGACGT", "ACGT", AlignmentConfig::unrestricted(10).unwrap()).unwrap();

        assert_eq!(cost, Cost::Finite(-2));
        let aln = aln.unwrap();
        assert_eq!(aln.len(), 6);
        assert_eq!(aln[0], AlignedPair::new(Some(0), None));
        assert_eq!(aln[2], AlignedPair::new(Some(2), Some(0)));

        let (cost, aln) = aligner.align_pairs("GGGGGACGT", "ACGT", AlignmentConfig::banded(10).unwrap()).unwrap();
        assert_eq!(cost, Cost::Infinite);
        assert!(aln.is_none());
    }
}
