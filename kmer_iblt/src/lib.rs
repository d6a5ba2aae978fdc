//! kmer_iblt: set reconciliation for nucleotide k-mer sketches.
//!
//! A sketch built over one read set can be compared against a sketch built
//! independently over another, recovering the keys unique to each side
//! without either party ever transmitting their full k-mer set. The engine
//! is an Invertible Bloom Lookup Table (IBLT) keyed by 2-bit-packed
//! canonical k-mers, optionally thinned by a syncmer or minimizer sampler
//! before insertion.
//!
//! Four collaborating components, in increasing order of novelty:
//!
//! - [`keyview`]: a lazy canonical k-mer stream over raw sequence bytes.
//! - [`sampler`]: syncmer/minimizer subset selection over a key stream.
//! - [`iblt`]: the bit-packed IBLT engine itself (insert/subtract/list).
//! - [`persistence`]: deterministic big-endian (de)serialization.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod hash;
pub mod iblt;
pub mod keyview;
pub mod persistence;
pub mod sampler;
pub mod traits;
pub mod types;
pub mod validation;

pub use error::{IbltError, Result};
pub use hash::{h128, mix64};
pub use iblt::{Iblt, PeelOutcome};
pub use keyview::{decode_key, KeyView};
pub use persistence::{load, save};
pub use sampler::{MinimizerSampler, SyncmerSampler};
pub use traits::Reconcilable;
pub use types::SymmetricDifference;
