pub mod errors;
pub mod io;
pub mod aligner;

pub use aligner::{align, AlignmentConfig, AlignmentMode, PairwiseAligner};
pub use aligner::alignment::AlignmentResult;
pub use aligner::scoring::{Cost, GapLinear};
