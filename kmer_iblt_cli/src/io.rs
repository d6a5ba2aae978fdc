//! Sequence and sketch I/O shared across verbs.

use std::fs;
use std::path::Path;

use kmer_iblt::{Iblt, IbltError, Result};

/// Read every record of a FASTA/FASTQ file (optionally gzipped, detected
/// by `needletail` from the stream's magic bytes) into owned byte buffers.
/// Each record is kept separate so k-mer streams never cross a record
/// boundary.
pub fn read_records(path: &Path) -> Result<Vec<Vec<u8>>> {
    let mut reader = needletail::parse_fastx_file(path).map_err(|e| IbltError::FileError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut records = Vec::new();
    while let Some(record) = reader.next() {
        let record = record.map_err(|e| IbltError::IOError(e.to_string()))?;
        records.push(record.seq().into_owned());
    }
    Ok(records)
}

/// Read a newline-delimited stream of decimal-encoded packed k-mers, as
/// produced by the `kmers`/`minimizers`/`syncmers` verbs.
pub fn read_kmer_stream(path: &Path) -> Result<Vec<u64>> {
    let text = fs::read_to_string(path).map_err(|e| IbltError::FileError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.trim().parse::<u64>().map_err(|e| IbltError::ValueError {
                param: "kmer-stream-line".to_string(),
                value: line.to_string(),
                constraint: format!("must be a decimal u64 ({e})"),
            })
        })
        .collect()
}

/// Load a sketch previously written by [`save_sketch`].
pub fn load_sketch(path: &Path) -> Result<Iblt> {
    let bytes = fs::read(path).map_err(|e| IbltError::FileError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    kmer_iblt::load(&bytes)
}

/// Write `iblt` to `path` in the crate's deterministic binary format.
pub fn save_sketch(iblt: &Iblt, path: &Path) -> Result<()> {
    let bytes = kmer_iblt::save(iblt);
    fs::write(path, bytes).map_err(|e| IbltError::FileError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Pack a `2k`-bit key into its right-aligned big-endian byte form.
#[must_use]
pub fn pack_key(key: u64, k: u8) -> Vec<u8> {
    let byte_len = (2 * usize::from(k)).div_ceil(8);
    key.to_be_bytes()[8 - byte_len..].to_vec()
}
