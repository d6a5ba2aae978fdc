//! Command-line surface: one binary, one verb per subcommand.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kmer_iblt", about = "Set reconciliation over nucleotide k-mer sketches", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Shared syncmer/minimizer sampling flags, reused by every verb that
/// reads raw sequence and needs to thin its key stream before further
/// processing.
#[derive(clap::Args, Clone, Debug, Default)]
pub struct SamplerOpts {
    /// Minimizer window width; mutually exclusive with `--syncmer-s`.
    #[arg(long)]
    pub window: Option<u16>,
    /// Syncmer z-mer width; mutually exclusive with `--window`.
    #[arg(long)]
    pub syncmer_s: Option<u8>,
    /// First accepted syncmer offset.
    #[arg(long, default_value_t = 0)]
    pub syncmer_o1: u8,
    /// Second accepted syncmer offset (equal to `o1` for closed syncmers).
    #[arg(long, default_value_t = 0)]
    pub syncmer_o2: u8,
    /// Seed for the sampler's mixing hash.
    #[arg(long, default_value_t = 0)]
    pub sampler_seed: u64,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build an IBLT sketch from a FASTA/FASTQ (optionally gzipped) input.
    Build {
        /// Input sequence file.
        input: PathBuf,
        /// Where to write the resulting sketch.
        #[arg(short, long)]
        output: PathBuf,
        /// k-mer length.
        #[arg(short = 'k', long)]
        k: u8,
        /// Number of hash rows (3-7).
        #[arg(short = 'r', long, default_value_t = 4)]
        rows: u8,
        /// Slack factor applied to the bucket budget.
        #[arg(short = 'e', long = "epsilon", default_value_t = 0.1)]
        epsilon: f64,
        /// Expected symmetric-difference bound.
        #[arg(short = 'n', long, default_value_t = 1000)]
        n: u64,
        /// Base hash seed.
        #[arg(short = 's', long, default_value_t = 0)]
        seed: u64,
        /// Insert the canonical (strand-independent) k-mer.
        #[arg(long)]
        canonical: bool,
        #[command(flatten)]
        sampler: SamplerOpts,
    },

    /// Load two sketches, subtract, and optionally store or list the result.
    Diff {
        /// Minuend sketch.
        left: PathBuf,
        /// Subtrahend sketch.
        right: PathBuf,
        /// Store the subtracted (unpeeled) sketch here.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Peel and print the symmetric difference immediately.
        #[arg(long)]
        list: bool,
    },

    /// Peel a standalone sketch and print its symmetric difference.
    List {
        /// Sketch to peel (must already hold a subtracted difference).
        input: PathBuf,
    },

    /// Compute Jaccard similarity and containment from two sketches.
    Jaccard {
        /// First sketch.
        left: PathBuf,
        /// Second sketch.
        right: PathBuf,
    },

    /// Report the total multiplicity of keys inserted into a sketch.
    Count {
        /// Sketch to inspect.
        input: PathBuf,
    },

    /// Print a human-readable per-bucket dump of a sketch.
    Dump {
        /// Sketch to inspect.
        input: PathBuf,
    },

    /// Print a sketch's construction parameters.
    Print {
        /// Sketch to inspect.
        input: PathBuf,
    },

    /// Stream canonical or forward-strand k-mers from a sequence file.
    Kmers {
        /// Input sequence file.
        input: PathBuf,
        /// k-mer length.
        #[arg(short = 'k', long)]
        k: u8,
        /// Emit the canonical strand.
        #[arg(long)]
        canonical: bool,
    },

    /// Stream minimizer-sampled k-mers from a sequence file.
    Minimizers {
        /// Input sequence file.
        input: PathBuf,
        /// k-mer length.
        #[arg(short = 'k', long)]
        k: u8,
        /// Minimizer window width.
        #[arg(short = 'w', long)]
        window: u16,
        /// Emit the canonical strand.
        #[arg(long)]
        canonical: bool,
        /// Seed for the sampler's mixing hash.
        #[arg(long, default_value_t = 0)]
        sampler_seed: u64,
    },

    /// Stream syncmer-sampled k-mers from a sequence file.
    Syncmers {
        /// Input sequence file.
        input: PathBuf,
        /// k-mer length.
        #[arg(short = 'k', long)]
        k: u8,
        /// z-mer width.
        #[arg(short = 's', long)]
        s: u8,
        /// First accepted offset.
        #[arg(long, default_value_t = 0)]
        o1: u8,
        /// Second accepted offset (equal to `o1` for closed syncmers).
        #[arg(long, default_value_t = 0)]
        o2: u8,
        /// Emit the canonical strand.
        #[arg(long)]
        canonical: bool,
        /// Seed for the sampler's mixing hash.
        #[arg(long, default_value_t = 0)]
        sampler_seed: u64,
    },

    /// Downsample a newline-delimited k-mer stream by mixing-hash rate.
    Sample {
        /// Input file of one decimal-encoded packed k-mer per line.
        input: PathBuf,
        /// Keep roughly one in every `rate` keys.
        #[arg(long, default_value_t = 2)]
        rate: u64,
        /// Seed for the sampling hash.
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Separator character between printed keys.
        #[arg(long, default_value = "\n")]
        separator: String,
    },
}
