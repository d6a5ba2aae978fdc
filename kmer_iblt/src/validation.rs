//! Parameter-bound validators for IBLT construction and deserialization.

use crate::error::{IbltError, Result};

/// Maximum number of buckets an IBLT may allocate (`2^63 - 1`).
pub const MAX_BUCKETS: u64 = (1u64 << 63) - 1;

/// Maximum serialized sketch size accepted on load, guarding against
/// corrupt length prefixes driving unbounded allocation.
pub const MAX_BYTE_SIZE: usize = 256 * 1024 * 1024;

/// Validate the k-mer length `k`. Zero-length keys carry no information;
/// keys wider than 32 bases would not fit a `u64` packed representation.
pub fn validate_k(k: u8) -> Result<()> {
    if k == 0 {
        return Err(IbltError::ValueError {
            param: "k".to_string(),
            value: k.to_string(),
            constraint: "must be greater than 0".to_string(),
        });
    }
    if k > 32 {
        return Err(IbltError::ValueError {
            param: "k".to_string(),
            value: k.to_string(),
            constraint: "must not exceed 32 (keys must fit a u64)".to_string(),
        });
    }
    Ok(())
}

/// Validate the row count `r`; peelability constants (`ck` table) are only
/// defined for `3 <= r <= 7`.
pub fn validate_rows(r: u8) -> Result<()> {
    if !(3..=7).contains(&r) {
        return Err(IbltError::ValueError {
            param: "r".to_string(),
            value: r.to_string(),
            constraint: "must be in range [3, 7]".to_string(),
        });
    }
    Ok(())
}

/// Validate the slack factor `epsilon`.
pub fn validate_epsilon(epsilon: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&epsilon) {
        return Err(IbltError::ValueError {
            param: "epsilon".to_string(),
            value: epsilon.to_string(),
            constraint: "must be in range [0.0, 1.0]".to_string(),
        });
    }
    Ok(())
}

/// Validate the expected symmetric-difference bound `n`.
pub fn validate_n(n: u64) -> Result<()> {
    if n == 0 {
        return Err(IbltError::ValueError {
            param: "n".to_string(),
            value: n.to_string(),
            constraint: "must be greater than 0".to_string(),
        });
    }
    Ok(())
}

/// Validate a computed bucket count against the engine's hard ceiling.
pub fn validate_bucket_count(num_buckets: u64) -> Result<()> {
    if num_buckets > MAX_BUCKETS {
        return Err(IbltError::ValueError {
            param: "num_buckets".to_string(),
            value: num_buckets.to_string(),
            constraint: format!("must not exceed {MAX_BUCKETS}"),
        });
    }
    Ok(())
}

/// Validate the redundancy-code width `h` against the hash function's
/// output width (64 bits for `h128`'s `h2` word).
pub fn validate_redundancy_width(h: u16) -> Result<()> {
    if h > 64 {
        return Err(IbltError::ValueError {
            param: "H".to_string(),
            value: h.to_string(),
            constraint: "must not exceed 64 (hash output width)".to_string(),
        });
    }
    Ok(())
}

/// Validate that a deserialized byte size doesn't exceed safety limits.
pub fn validate_byte_size(size: usize) -> Result<()> {
    if size > MAX_BYTE_SIZE {
        return Err(IbltError::RuntimeError(format!(
            "deserialized sketch size {size} exceeds maximum allowed size {MAX_BYTE_SIZE}"
        )));
    }
    Ok(())
}

/// Validate minimum required bytes remain for the next read.
pub fn validate_min_size(actual: usize, required: usize) -> Result<()> {
    if actual < required {
        return Err(IbltError::IOError(format!(
            "truncated input: need at least {required} bytes, got {actual}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_k_bounds() {
        assert!(validate_k(0).is_err());
        assert!(validate_k(4).is_ok());
        assert!(validate_k(32).is_ok());
        assert!(validate_k(33).is_err());
    }

    #[test]
    fn validate_rows_bounds() {
        for r in 3..=7u8 {
            assert!(validate_rows(r).is_ok());
        }
        assert!(validate_rows(2).is_err());
        assert!(validate_rows(8).is_err());
    }

    #[test]
    fn validate_epsilon_bounds() {
        assert!(validate_epsilon(0.0).is_ok());
        assert!(validate_epsilon(1.0).is_ok());
        assert!(validate_epsilon(-0.1).is_err());
        assert!(validate_epsilon(1.1).is_err());
    }

    #[test]
    fn validate_n_nonzero() {
        assert!(validate_n(0).is_err());
        assert!(validate_n(1).is_ok());
    }
}
