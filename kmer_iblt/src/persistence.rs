//! Component D: deterministic, big-endian persistence for an [`Iblt`].
//!
//! A visitor pattern separates the wire layout (field order, widths) from
//! the I/O policy (where the bytes come from or go). `ByteWriter` and
//! `ByteReader` are the two policies this crate needs; both share the
//! `Visitor` trait so [`save`]/[`load`] only has to state the layout once.

use crate::error::{IbltError, Result};
use crate::iblt::Iblt;
use crate::validation::{validate_byte_size, validate_min_size};

/// Applies a fixed field layout to either a writer or a reader.
trait Visitor {
    fn u8(&mut self, v: u8) -> Result<u8>;
    fn u16(&mut self, v: u16) -> Result<u16>;
    fn u32(&mut self, v: u32) -> Result<u32>;
    fn u64(&mut self, v: u64) -> Result<u64>;
    fn f32_bits(&mut self, v: f32) -> Result<f32>;
    /// Length-prefixed (`u64`) byte string.
    fn bytes(&mut self, v: &[u8]) -> Result<Vec<u8>>;
}

struct ByteWriter {
    out: Vec<u8>,
}

impl Visitor for ByteWriter {
    fn u8(&mut self, v: u8) -> Result<u8> {
        self.out.push(v);
        Ok(v)
    }
    fn u16(&mut self, v: u16) -> Result<u16> {
        self.out.extend_from_slice(&v.to_be_bytes());
        Ok(v)
    }
    fn u32(&mut self, v: u32) -> Result<u32> {
        self.out.extend_from_slice(&v.to_be_bytes());
        Ok(v)
    }
    fn u64(&mut self, v: u64) -> Result<u64> {
        self.out.extend_from_slice(&v.to_be_bytes());
        Ok(v)
    }
    fn f32_bits(&mut self, v: f32) -> Result<f32> {
        self.out.extend_from_slice(&v.to_bits().to_be_bytes());
        Ok(v)
    }
    fn bytes(&mut self, v: &[u8]) -> Result<Vec<u8>> {
        self.out.extend_from_slice(&(v.len() as u64).to_be_bytes());
        self.out.extend_from_slice(v);
        Ok(v.to_vec())
    }
}

struct ByteReader<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        validate_min_size(self.input.len() - self.pos, n)?;
        let slice = &self.input[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }
}

impl Visitor for ByteReader<'_> {
    fn u8(&mut self, _v: u8) -> Result<u8> {
        Ok(self.take(1)?[0])
    }
    fn u16(&mut self, _v: u16) -> Result<u16> {
        Ok(u16::from_be_bytes(self.take(2)?.try_into().unwrap()))
    }
    fn u32(&mut self, _v: u32) -> Result<u32> {
        Ok(u32::from_be_bytes(self.take(4)?.try_into().unwrap()))
    }
    fn u64(&mut self, _v: u64) -> Result<u64> {
        Ok(u64::from_be_bytes(self.take(8)?.try_into().unwrap()))
    }
    fn f32_bits(&mut self, _v: f32) -> Result<f32> {
        let bits = u32::from_be_bytes(self.take(4)?.try_into().unwrap());
        Ok(f32::from_bits(bits))
    }
    fn bytes(&mut self, _v: &[u8]) -> Result<Vec<u8>> {
        let len = u64::from_be_bytes(self.take(8)?.try_into().unwrap()) as usize;
        validate_byte_size(len)?;
        Ok(self.take(len)?.to_vec())
    }
}

/// Serialize `iblt` to a deterministic, big-endian byte sequence.
///
/// Field order: `r`, `epsilon` (IEEE-754 `f32` bits), `k`, `n`, `seed`,
/// `chunk`, `num_buckets`, `inserted_count`, length-prefixed `counts`,
/// length-prefixed `buckets`, then `r` row seeds (`u32` each, derived as
/// `(seed ^ row) as u32`; redundant with `seed` but kept explicit so the
/// wire format self-describes each row's working seed without requiring a
/// reader to know the XOR convention).
#[must_use]
pub fn save(iblt: &Iblt) -> Vec<u8> {
    let mut w = ByteWriter { out: Vec::new() };
    visit(iblt.clone_for_save(), &mut w).expect("writing to an in-memory buffer cannot fail");
    w.out
}

/// Deserialize an [`Iblt`] previously produced by [`save`].
///
/// # Errors
/// Returns [`IbltError::IOError`] if `data` is truncated, or a
/// [`IbltError::ValueError`] if embedded parameters are inconsistent with
/// the recovered `counts`/`buckets` lengths.
pub fn load(data: &[u8]) -> Result<Iblt> {
    let mut r = ByteReader::new(data);
    let shape = visit(IbltShape::default(), &mut r)?;
    shape.into_iblt()
}

/// The subset of an [`Iblt`]'s state that round-trips through the wire
/// format; an intermediate so `visit` can run identically whether it is
/// reading into fresh fields or writing out existing ones.
#[derive(Default, Clone)]
struct IbltShape {
    r: u8,
    epsilon: f32,
    k: u8,
    n: u64,
    seed: u64,
    chunk: u64,
    num_buckets: u64,
    inserted_count: u64,
    counts: Vec<u8>,
    buckets: Vec<u8>,
    row_seeds: Vec<u32>,
}

impl Iblt {
    fn clone_for_save(&self) -> IbltShape {
        IbltShape {
            r: self.r(),
            epsilon: self.epsilon() as f32,
            k: self.k(),
            n: self.n(),
            seed: self.seed(),
            chunk: self.chunk(),
            num_buckets: self.num_buckets(),
            inserted_count: self.count(),
            counts: self.counts().to_vec(),
            buckets: self.buckets().to_vec(),
            row_seeds: (0..self.r())
                .map(|row| (self.seed() ^ u64::from(row)) as u32)
                .collect(),
        }
    }
}

impl IbltShape {
    fn into_iblt(self) -> Result<Iblt> {
        let mut iblt = Iblt::new(self.k, self.r, f64::from(self.epsilon), self.n, self.seed)?;
        if iblt.chunk() != self.chunk || iblt.num_buckets() != self.num_buckets {
            return Err(IbltError::ValueError {
                param: "chunk/num_buckets".to_string(),
                value: format!("{}/{}", self.chunk, self.num_buckets),
                constraint: "must match the value recomputed from k/r/epsilon/n".to_string(),
            });
        }
        iblt.restore_raw(self.counts, self.buckets, self.inserted_count)?;
        Ok(iblt)
    }
}

fn visit<V: Visitor>(mut shape: IbltShape, v: &mut V) -> Result<IbltShape> {
    shape.r = v.u8(shape.r)?;
    shape.epsilon = v.f32_bits(shape.epsilon)?;
    shape.k = v.u8(shape.k)?;
    shape.n = v.u64(shape.n)?;
    shape.seed = v.u64(shape.seed)?;
    shape.chunk = v.u64(shape.chunk)?;
    shape.num_buckets = v.u64(shape.num_buckets)?;
    shape.inserted_count = v.u64(shape.inserted_count)?;
    shape.counts = v.bytes(&shape.counts)?;
    shape.buckets = v.bytes(&shape.buckets)?;

    let mut row_seeds = Vec::with_capacity(shape.row_seeds.len().max(shape.r as usize));
    for i in 0..shape.r {
        let existing = shape.row_seeds.get(i as usize).copied().unwrap_or(0);
        row_seeds.push(v.u32(existing)?);
    }
    shape.row_seeds = row_seeds;

    Ok(shape)
}
