//! Verb implementations.

use std::path::Path;

use kmer_iblt::{
    decode_key, mix64, Iblt, IbltError, KeyView, MinimizerSampler, PeelOutcome, Reconcilable, Result,
    SyncmerSampler,
};
use tracing::{debug, info, warn};

use crate::cli::SamplerOpts;
use crate::io::{load_sketch, pack_key, read_kmer_stream, read_records, save_sketch};

fn validate_k(k: u8) -> Result<()> {
    if k == 0 {
        return Err(IbltError::ValueError {
            param: "k".to_string(),
            value: "0".to_string(),
            constraint: "must be greater than 0".to_string(),
        });
    }
    Ok(())
}

/// Apply the configured sampler (if any) to a raw k-mer stream.
fn sample_keys(keys: Vec<u64>, k: u8, opts: &SamplerOpts) -> Vec<u64> {
    match (opts.window, opts.syncmer_s) {
        (Some(w), None) => MinimizerSampler::new(keys.into_iter(), w, opts.sampler_seed).collect(),
        (None, Some(s)) => {
            SyncmerSampler::new(keys.into_iter(), k, s, opts.syncmer_o1, opts.syncmer_o2, opts.sampler_seed).collect()
        }
        (None, None) => keys,
        (Some(_), Some(_)) => {
            warn!("both --window and --syncmer-s given; ignoring sampler and using the raw key stream");
            keys
        }
    }
}

fn keys_from_records(records: &[Vec<u8>], k: u8, canonical: bool) -> Vec<u64> {
    records
        .iter()
        .flat_map(|seq| KeyView::new(seq, k, canonical).collect::<Vec<_>>())
        .collect()
}

pub fn build(
    input: &Path,
    output: &Path,
    k: u8,
    rows: u8,
    epsilon: f64,
    n: u64,
    seed: u64,
    canonical: bool,
    sampler: &SamplerOpts,
) -> Result<()> {
    validate_k(k)?;
    let records = read_records(input)?;
    info!(records = records.len(), "read input sequences");

    let keys = sample_keys(keys_from_records(&records, k, canonical), k, sampler);
    debug!(keys = keys.len(), "collected keys to insert");

    let mut iblt = Iblt::new(k, rows, epsilon, n, seed)?;
    for key in keys {
        iblt.insert(&pack_key(key, k))?;
    }

    info!(count = iblt.count(), num_buckets = iblt.num_buckets(), "built sketch");
    save_sketch(&iblt, output)
}

pub fn diff(left: &Path, right: &Path, output: Option<&Path>, list: bool) -> Result<()> {
    let mut a = load_sketch(left)?;
    let b = load_sketch(right)?;
    a.subtract(&b)?;
    info!("subtracted sketches");

    if let Some(path) = output {
        save_sketch(&a, path)?;
    }
    if list {
        print_list(&mut a)?;
    }
    Ok(())
}

pub fn list(input: &Path) -> Result<()> {
    let mut iblt = load_sketch(input)?;
    print_list(&mut iblt)
}

/// Peel `iblt`, print its recovered symmetric difference, and surface a
/// non-[`PeelOutcome::None`] outcome as the corresponding peeling-failure
/// error so the CLI's exit code reflects it.
fn print_list(iblt: &mut Iblt) -> Result<()> {
    let k = iblt.k();
    let (outcome, diff) = iblt.list()?;
    info!(?outcome, total = diff.total(), "peeling finished");
    for key in &diff.positives {
        println!("+{}", decode_packed(key, k));
    }
    for key in &diff.negatives {
        println!("-{}", decode_packed(key, k));
    }

    match outcome {
        PeelOutcome::None => Ok(()),
        PeelOutcome::Unpeelable => {
            warn!("peeling stalled with residual unpeelable buckets");
            Err(IbltError::UnpeelableFailure)
        }
        PeelOutcome::InfiniteLoop => {
            warn!("peeling exceeded its iteration budget");
            Err(IbltError::InfiniteLoopFailure)
        }
        PeelOutcome::Asymmetric => {
            warn!("peeling left ambiguous-orientation buckets");
            Err(IbltError::AsymmetricFailure)
        }
    }
}

fn decode_packed(key: &[u8], k: u8) -> String {
    let mut padded = [0u8; 8];
    padded[8 - key.len()..].copy_from_slice(key);
    decode_key(u64::from_be_bytes(padded), k)
}

pub fn jaccard(left: &Path, right: &Path) -> Result<()> {
    let a = load_sketch(left)?;
    let b = load_sketch(right)?;
    let l0i = a.count() as f64;
    let l0j = b.count() as f64;

    let mut diff = a.clone();
    diff.subtract(&b)?;
    let (_, d) = diff.list()?;
    let unique_i = d.positives.len() as f64;
    let unique_j = d.negatives.len() as f64;

    let jaccard = (l0i - unique_i) / (l0i + unique_j);
    let containment_i_j = (l0i - unique_i) / l0i;
    let containment_j_i = (l0j - unique_j) / l0j;
    println!("{jaccard},{containment_i_j},{containment_j_i}");
    Ok(())
}

pub fn count(input: &Path) -> Result<()> {
    let iblt = load_sketch(input)?;
    println!("{}", iblt.count());
    Ok(())
}

pub fn dump(input: &Path) -> Result<()> {
    let mut iblt = load_sketch(input)?;
    println!(
        "k={} r={} eps={} seed={} H={} B={} buckets={}",
        iblt.k(),
        iblt.r(),
        iblt.epsilon(),
        iblt.seed(),
        iblt.redundancy_bits(),
        iblt.bucket_size(),
        iblt.num_buckets()
    );
    for (idx, (count, hex, peelable)) in iblt.dump_contents().into_iter().enumerate() {
        let tag = if peelable { "peelable" } else { "unpeelable" };
        println!("{idx}\t{count}\t{hex}\t{tag}");
    }
    Ok(())
}

pub fn print_summary(input: &Path) -> Result<()> {
    let iblt = load_sketch(input)?;
    println!(
        "k={} r={} epsilon={} n={} seed={} H={} prefix_len={} M={:#04x} num_buckets={} B={}",
        iblt.k(),
        iblt.r(),
        iblt.epsilon(),
        iblt.n(),
        iblt.seed(),
        iblt.redundancy_bits(),
        iblt.prefix_len(),
        iblt.shared_byte_mask(),
        iblt.num_buckets(),
        iblt.bucket_size()
    );
    Ok(())
}

pub fn kmers(input: &Path, k: u8, canonical: bool) -> Result<()> {
    validate_k(k)?;
    let records = read_records(input)?;
    for key in keys_from_records(&records, k, canonical) {
        println!("{key}");
    }
    Ok(())
}

pub fn minimizers(input: &Path, k: u8, window: u16, canonical: bool, seed: u64) -> Result<()> {
    validate_k(k)?;
    let records = read_records(input)?;
    let keys = keys_from_records(&records, k, canonical);
    for key in MinimizerSampler::new(keys.into_iter(), window, seed) {
        println!("{key}");
    }
    Ok(())
}

pub fn syncmers(input: &Path, k: u8, s: u8, o1: u8, o2: u8, canonical: bool, seed: u64) -> Result<()> {
    validate_k(k)?;
    let records = read_records(input)?;
    let keys = keys_from_records(&records, k, canonical);
    for key in SyncmerSampler::new(keys.into_iter(), k, s, o1, o2, seed) {
        println!("{key}");
    }
    Ok(())
}

pub fn sample(input: &Path, rate: u64, seed: u64, separator: &str) -> Result<()> {
    let keys = read_kmer_stream(input)?;
    let kept: Vec<String> = keys
        .into_iter()
        .filter(|&key| mix64(seed, key, u64::MAX) % rate == 0)
        .map(|key| key.to_string())
        .collect();
    println!("{}", kept.join(separator));
    Ok(())
}
