use crate::iter::SetBits;
use olap_base::{DenseBitSet, KeyError};
use std::cmp::Ordering;
use tracing::trace;

#[derive(Clone)]
enum Repr {
    Narrow(u64),
    Medium([u64; 2]),
    Wide(Box<[u64]>),
}

/// Which of the three word layouts a [`BitKey`] was built with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Representation {
    Narrow,
    Medium,
    Wide,
}

/// A fixed-capacity set of small non-negative integers.
///
/// Capacity is decided once, at construction, and never grows. Bit `i`
/// lives in word `i / 64` at position `i % 64`.
///
/// Equality, hashing and ordering depend only on which bits are set: a
/// narrow key holding `{5}` equals a wide key holding `{5}`, and they hash
/// the same. Ordering treats the words as one unsigned integer, most
/// significant word first, with the shorter key zero-extended.
#[derive(Clone)]
pub struct BitKey(Repr);

#[inline]
fn word_at(words: &[u64], i: usize) -> u64 {
    words.get(i).copied().unwrap_or(0)
}

#[inline]
fn bit(pos: usize) -> u64 {
    1 << (pos % 64)
}

impl BitKey {
    /// Capacities below this get the one-word layout.
    pub const NARROW_BITS: usize = 64;
    /// Capacities below this (and not narrow) get the two-word layout.
    pub const MEDIUM_BITS: usize = 128;

    /// The key with no bits set, for the common "no restrictions" case.
    pub const EMPTY: BitKey = BitKey(Repr::Narrow(0));

    /// Makes a key able to hold bits `0..capacity`, all clear.
    pub fn new(capacity: usize) -> Self {
        if capacity < Self::NARROW_BITS {
            BitKey(Repr::Narrow(0))
        } else if capacity < Self::MEDIUM_BITS {
            BitKey(Repr::Medium([0; 2]))
        } else {
            let words = capacity.div_ceil(64);
            trace!(target: "olap", capacity, words, "allocating wide bit key");
            BitKey(Repr::Wide(vec![0; words].into_boxed_slice()))
        }
    }

    /// Makes a key able to hold bits `0..capacity`, with exactly those
    /// bits set when `init` is true. Bits past `capacity` in the last
    /// allocated word stay clear.
    pub fn with_all(capacity: usize, init: bool) -> Self {
        let mut key = Self::new(capacity);
        if init {
            let full = capacity / 64;
            let words = key.words_mut();
            words[..full].fill(u64::MAX);
            if capacity % 64 != 0 {
                words[full] = (1 << (capacity % 64)) - 1;
            }
        }
        key
    }

    /// Copies every set bit of `bits` into a key just large enough to
    /// hold the highest of them.
    pub fn from_dense(bits: &DenseBitSet) -> Self {
        let mut key = Self::new(bits.len());
        let words = key.words_mut();
        for (dst, src) in words.iter_mut().zip(bits.words()) {
            *dst = *src;
        }
        key
    }

    /// Makes a key of the given capacity with the given bits set.
    pub fn from_positions(
        capacity: usize,
        positions: impl IntoIterator<Item = usize>,
    ) -> Result<Self, KeyError> {
        let mut key = Self::new(capacity);
        for pos in positions {
            key.set(pos)?;
        }
        Ok(key)
    }

    pub fn representation(&self) -> Representation {
        match &self.0 {
            Repr::Narrow(_) => Representation::Narrow,
            Repr::Medium(_) => Representation::Medium,
            Repr::Wide(_) => Representation::Wide,
        }
    }

    /// Number of addressable bits, always a multiple of 64 and at least
    /// the capacity the key was created with.
    pub fn capacity(&self) -> usize {
        self.words().len() * 64
    }

    /// The backing words, least significant first.
    pub fn words(&self) -> &[u64] {
        match &self.0 {
            Repr::Narrow(w) => std::slice::from_ref(w),
            Repr::Medium(ws) => ws,
            Repr::Wide(ws) => ws,
        }
    }

    fn words_mut(&mut self) -> &mut [u64] {
        match &mut self.0 {
            Repr::Narrow(w) => std::slice::from_mut(w),
            Repr::Medium(ws) => ws,
            Repr::Wide(ws) => ws,
        }
    }

    pub fn set(&mut self, pos: usize) -> Result<(), KeyError> {
        let capacity = self.capacity();
        match self.words_mut().get_mut(pos / 64) {
            Some(w) => {
                *w |= bit(pos);
                Ok(())
            }
            None => Err(KeyError::CapacityExceeded { pos, capacity }),
        }
    }

    pub fn set_to(&mut self, pos: usize, value: bool) -> Result<(), KeyError> {
        if value {
            self.set(pos)
        } else {
            self.clear(pos);
            Ok(())
        }
    }

    /// Clears a bit. Clearing past capacity does nothing: the bit was
    /// never set.
    pub fn clear(&mut self, pos: usize) {
        if let Some(w) = self.words_mut().get_mut(pos / 64) {
            *w &= !bit(pos);
        }
    }

    pub fn clear_all(&mut self) {
        self.words_mut().fill(0);
    }

    pub fn get(&self, pos: usize) -> bool {
        word_at(self.words(), pos / 64) & bit(pos) != 0
    }

    // The result takes the layout of the wider operand so nothing is
    // truncated. `op(0, 0)` must be 0 for the zero-extension to hold.
    fn combine(&self, other: &BitKey, op: impl Fn(u64, u64) -> u64) -> BitKey {
        match (&self.0, &other.0) {
            (Repr::Narrow(a), Repr::Narrow(b)) => BitKey(Repr::Narrow(op(*a, *b))),
            (Repr::Medium(a), Repr::Medium(b)) => {
                BitKey(Repr::Medium([op(a[0], b[0]), op(a[1], b[1])]))
            }
            _ => {
                let mut out = if self.layout_rank() >= other.layout_rank() {
                    self.empty_copy()
                } else {
                    other.empty_copy()
                };
                let (a, b) = (self.words(), other.words());
                for (i, w) in out.words_mut().iter_mut().enumerate() {
                    *w = op(word_at(a, i), word_at(b, i));
                }
                out
            }
        }
    }

    fn layout_rank(&self) -> (Representation, usize) {
        (self.representation(), self.words().len())
    }

    pub fn union(&self, other: &BitKey) -> BitKey {
        self.combine(other, |a, b| a | b)
    }

    /// Bits set in exactly one of the two keys.
    pub fn symmetric_difference(&self, other: &BitKey) -> BitKey {
        self.combine(other, |a, b| a ^ b)
    }

    pub fn intersect(&self, other: &BitKey) -> BitKey {
        self.combine(other, |a, b| a & b)
    }

    /// Bits set in `self` but not in `other`.
    pub fn difference(&self, other: &BitKey) -> BitKey {
        self.combine(other, |a, b| a & !b)
    }

    /// True when every bit of `other` is also set in `self`. Zero high
    /// words on either side never affect the answer.
    pub fn is_superset_of(&self, other: &BitKey) -> bool {
        match (&self.0, &other.0) {
            (Repr::Narrow(a), Repr::Narrow(b)) => b & !a == 0,
            _ => {
                let (a, b) = (self.words(), other.words());
                b.iter()
                    .enumerate()
                    .all(|(i, w)| w & !word_at(a, i) == 0)
            }
        }
    }

    pub fn intersects(&self, other: &BitKey) -> bool {
        self.words()
            .iter()
            .zip(other.words())
            .any(|(a, b)| a & b != 0)
    }

    pub fn copy(&self) -> BitKey {
        self.clone()
    }

    /// A key of the same layout and capacity with nothing set.
    pub fn empty_copy(&self) -> BitKey {
        match &self.0 {
            Repr::Narrow(_) => BitKey(Repr::Narrow(0)),
            Repr::Medium(_) => BitKey(Repr::Medium([0; 2])),
            Repr::Wide(ws) => BitKey(Repr::Wide(vec![0; ws.len()].into_boxed_slice())),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.words().iter().all(|w| *w == 0)
    }

    pub fn cardinality(&self) -> usize {
        self.words().iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn to_dense_bitset(&self) -> DenseBitSet {
        DenseBitSet::from_words(self.words().to_vec())
    }

    pub fn iter(&self) -> SetBits<'_> {
        SetBits::new(self.words())
    }

    /// The smallest set bit at or after `from`.
    pub fn next_set_bit(&self, from: usize) -> Option<usize> {
        let words = self.words();
        let mut w = from / 64;
        let mut cur = *words.get(w)? & (u64::MAX << (from % 64));
        loop {
            if cur != 0 {
                return Some(w * 64 + cur.trailing_zeros() as usize);
            }
            w += 1;
            cur = *words.get(w)?;
        }
    }

    pub fn compare(&self, other: &BitKey) -> Ordering {
        if let (Repr::Narrow(a), Repr::Narrow(b)) = (&self.0, &other.0) {
            return a.cmp(b);
        }
        let (a, b) = (self.words(), other.words());
        for i in (0..a.len().max(b.len())).rev() {
            match word_at(a, i).cmp(&word_at(b, i)) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }

    /// A 32-bit hash of the set bits. Zero words contribute nothing, so
    /// the value does not depend on the layout.
    pub fn hash_code(&self) -> i32 {
        let mut h: u64 = 1234;
        for (i, w) in self.words().iter().enumerate() {
            h ^= w.wrapping_mul(i as u64 + 1);
        }
        ((h >> 32) ^ h) as i32
    }
}

impl PartialEq for BitKey {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Repr::Narrow(a), Repr::Narrow(b)) => a == b,
            (Repr::Medium(a), Repr::Medium(b)) => a == b,
            _ => self.compare(other) == Ordering::Equal,
        }
    }
}

impl Eq for BitKey {}

impl PartialOrd for BitKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BitKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl std::hash::Hash for BitKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code())
    }
}

impl Default for BitKey {
    fn default() -> Self {
        BitKey::EMPTY
    }
}

impl From<&DenseBitSet> for BitKey {
    fn from(bits: &DenseBitSet) -> Self {
        BitKey::from_dense(bits)
    }
}

impl From<&BitKey> for DenseBitSet {
    fn from(key: &BitKey) -> Self {
        key.to_dense_bitset()
    }
}

impl FromIterator<usize> for BitKey {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        BitKey::from_dense(&iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a BitKey {
    type Item = usize;
    type IntoIter = SetBits<'a>;

    fn into_iter(self) -> SetBits<'a> {
        self.iter()
    }
}
