//! Reading sequences to align from (optionally gzipped) FASTA files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use tracing::debug;

use crate::errors::AlignError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedSequence {
    pub name: String,
    pub sequence: Vec<u8>,
}

impl NamedSequence {
    pub fn new(name: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        Self { name: name.into(), sequence: sequence.into() }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Load all records of a FASTA file. Files ending in `.gz` are decompressed on the fly.
pub fn load_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<NamedSequence>, AlignError> {
    let path = path.as_ref();
    let is_gzipped = path.file_name()
        .map(|v| v.to_string_lossy().ends_with(".gz"))
        .unwrap_or(false);

    let file = File::open(path)
        .map_err(|source| AlignError::FileReadError { source })?;

    let reader_inner: Box<dyn BufRead> = if is_gzipped {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    let sequences = read_sequences(reader_inner)?;
    debug!(path = %path.display(), num_sequences = sequences.len(), "Loaded sequences");

    Ok(sequences)
}

pub fn read_sequences<R: BufRead>(reader: R) -> Result<Vec<NamedSequence>, AlignError> {
    let mut reader = fasta::io::Reader::new(reader);

    reader.records()
        .map(|result| -> Result<NamedSequence, AlignError> {
            let record = result?;
            let name = String::from_utf8_lossy(record.name()).into_owned();

            Ok(NamedSequence::new(name, record.sequence().as_ref()))
        })
        .collect()
}

/// Index of the first sequence with the given FASTA record name.
pub fn sequence_index(sequences: &[NamedSequence], name: &str) -> Result<usize, AlignError> {
    sequences.iter()
        .position(|seq| seq.name == name)
        .ok_or_else(|| AlignError::MissingSequence(name.to_string()))
}
