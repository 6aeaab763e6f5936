use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::ops::Add;

use serde::{Serialize, Serializer};

/// Reward for two identical characters
pub const MATCH: i64 = -3;

/// Cost of substituting one character for another
pub const SUB: i64 = 1;

/// Cost of a single inserted or deleted character
pub const INDEL: i64 = 5;

/// Largest magnitude accepted for a single match, substitution or indel cost on the
/// command line. Keeps every partial alignment cost well within `i64`.
pub const MAX_COST_MAGNITUDE: i64 = 1_000_000;

/// Half-width of the diagonal band used by banded alignment, i.e., the maximum number of
/// net insertions or deletions the banded aligner tolerates.
pub const MAX_INDELS: usize = 3;

/// Total alignment cost of a (partial) alignment.
///
/// `Infinite` marks cells that can't be reached, and is also the cost of a banded alignment
/// between sequences whose lengths differ by more than [`MAX_INDELS`].
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub enum Cost {
    Finite(i64),

    #[default]
    Infinite,
}

impl Cost {
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }
}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        match self {
            Self::Finite(cost) => match other {
                Self::Finite(other_cost) => cost.cmp(other_cost),
                Self::Infinite => Ordering::Less,
            },
            Self::Infinite => match other {
                Self::Finite(_) => Ordering::Greater,
                Self::Infinite => Ordering::Equal
            }
        }
    }
}

impl Add<i64> for Cost {
    type Output = Self;

    fn add(self, rhs: i64) -> Self::Output {
        match self {
            Self::Finite(cost) => Self::Finite(cost + rhs),
            Self::Infinite => Self::Infinite,
        }
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(cost) => Display::fmt(cost, f),
            Self::Infinite => Display::fmt("inf", f)
        }
    }
}

/// Finite costs serialize as plain numbers, infinity as `null`.
impl Serialize for Cost {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        match self {
            Self::Finite(cost) => serializer.serialize_i64(*cost),
            Self::Infinite => serializer.serialize_none(),
        }
    }
}

pub trait AlignmentCosts: Copy {
    /// Cost of aligning two identical characters (usually negative)
    fn match_cost(&self) -> i64;

    fn mismatch(&self) -> i64;

    fn gap(&self) -> i64;

    /// Cost of aligning character `a` against character `b`
    #[inline]
    fn diff<T: Eq>(&self, a: T, b: T) -> i64 {
        if a == b {
            self.match_cost()
        } else {
            self.mismatch()
        }
    }
}

/// Linear gap cost model: every inserted or deleted character costs the same.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GapLinear {
    cost_match: i64,
    cost_mismatch: i64,
    cost_gap: i64,
}

impl GapLinear {
    pub fn new(cost_match: i64, cost_mismatch: i64, cost_gap: i64) -> Self {
        Self { cost_match, cost_mismatch, cost_gap }
    }
}

impl Default for GapLinear {
    fn default() -> Self {
        Self::new(MATCH, SUB, INDEL)
    }
}

impl AlignmentCosts for GapLinear {
    #[inline]
    fn match_cost(&self) -> i64 {
        self.cost_match
    }

    #[inline]
    fn mismatch(&self) -> i64 {
        self.cost_mismatch
    }

    #[inline]
    fn gap(&self) -> i64 {
        self.cost_gap
    }
}
