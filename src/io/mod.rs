pub mod fasta;

pub use fasta::{load_sequences, sequence_index, NamedSequence};
