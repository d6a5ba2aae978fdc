//! Component B: syncmer and minimizer samplers.
//!
//! Both samplers are lazy, forward-only iterator adaptors over an upstream
//! key stream (typically a [`crate::keyview::KeyView`]) and are
//! deterministic given a seed. The mixing hash they share, [`crate::hash::mix64`],
//! is required to be bit-for-bit identical across implementations.

mod minimizer;
mod syncmer;

pub use minimizer::MinimizerSampler;
pub use syncmer::SyncmerSampler;
