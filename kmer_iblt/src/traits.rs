//! Core trait for set-reconciliation structures.

use crate::error::Result;
use crate::types::SymmetricDifference;

/// Trait for data structures that support set reconciliation: computing
/// the difference between two independently built sketches of the same
/// kind without transmitting either full set.
///
/// # Example
/// ```ignore
/// use kmer_iblt::{Iblt, Reconcilable};
///
/// let mut diff = iblt_a.clone();
/// diff.subtract(&iblt_b)?;
/// let outcome = diff.list()?;
/// ```
pub trait Reconcilable: Sized {
    /// The peeling outcome returned by `list`.
    type Outcome;

    /// Subtract another sketch from this one in place: `self = self \ other`
    /// under whatever algebra the structure defines (XOR of buckets,
    /// modular difference of counts, for an IBLT).
    ///
    /// # Errors
    /// Returns [`crate::error::IbltError::IncompatibleError`] if the two
    /// sketches were not built with identical parameters.
    fn subtract(&mut self, other: &Self) -> Result<()>;

    /// Decode the set difference accumulated by `subtract`, consuming
    /// peelable structure as it goes.
    ///
    /// # Errors
    /// Returns a peeling-failure variant if the difference could not be
    /// fully recovered; see [`crate::error::IbltError`].
    fn list(&mut self) -> Result<(Self::Outcome, SymmetricDifference)>;
}
