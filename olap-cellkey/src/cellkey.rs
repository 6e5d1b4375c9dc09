use olap_base::KeyError;
use std::fmt;
use tracing::trace;

#[derive(Clone, PartialEq, Eq)]
enum Repr {
    Zero,
    One([i32; 1]),
    Two([i32; 2]),
    Three([i32; 3]),
    Four([i32; 4]),
    Many(Box<[i32]>),
}

/// Which layout a [`CellKey`] was built with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Arity {
    Zero,
    One,
    Two,
    Three,
    Four,
    Many,
}

/// A fixed-arity tuple of axis ordinals.
///
/// Keys are equal only when they have the same layout and the same
/// ordinals. A key built with [`CellKey::many`] never equals one built
/// with [`CellKey::from_ordinals`], even over the same four values: code
/// that mixes the two kinds in one map must pick one constructor.
#[derive(Clone, PartialEq, Eq)]
pub struct CellKey(Repr);

#[inline]
fn mix(h: i32, ordinal: i32) -> i32 {
    h.wrapping_mul(31).wrapping_add(ordinal)
}

const SEED: i32 = 17;

impl CellKey {
    /// Arities up to this get an inline layout.
    pub const MAX_SPECIALIZED_ARITY: usize = 4;

    /// The only key of arity zero.
    pub const ZERO: CellKey = CellKey(Repr::Zero);

    /// A key of the given arity with every ordinal zero.
    pub fn new(size: usize) -> Self {
        match size {
            0 => CellKey(Repr::Zero),
            1 => CellKey(Repr::One([0; 1])),
            2 => CellKey(Repr::Two([0; 2])),
            3 => CellKey(Repr::Three([0; 3])),
            4 => CellKey(Repr::Four([0; 4])),
            _ => Self::many(&vec![0; size]),
        }
    }

    /// A key holding a copy of `ordinals`, whose length is the arity.
    pub fn from_ordinals(ordinals: &[i32]) -> Self {
        match *ordinals {
            [] => CellKey(Repr::Zero),
            [a] => CellKey(Repr::One([a])),
            [a, b] => CellKey(Repr::Two([a, b])),
            [a, b, c] => CellKey(Repr::Three([a, b, c])),
            [a, b, c, d] => CellKey(Repr::Four([a, b, c, d])),
            _ => Self::many(ordinals),
        }
    }

    /// A key with the heap layout regardless of arity. Only for callers
    /// that need every key in a collection to share one layout.
    pub fn many(ordinals: &[i32]) -> Self {
        trace!(target: "olap", arity = ordinals.len(), "allocating many-arity cell key");
        CellKey(Repr::Many(ordinals.into()))
    }

    pub fn arity(&self) -> Arity {
        match &self.0 {
            Repr::Zero => Arity::Zero,
            Repr::One(_) => Arity::One,
            Repr::Two(_) => Arity::Two,
            Repr::Three(_) => Arity::Three,
            Repr::Four(_) => Arity::Four,
            Repr::Many(_) => Arity::Many,
        }
    }

    pub fn size(&self) -> usize {
        self.ordinals().len()
    }

    pub fn ordinals(&self) -> &[i32] {
        match &self.0 {
            Repr::Zero => &[],
            Repr::One(os) => os,
            Repr::Two(os) => os,
            Repr::Three(os) => os,
            Repr::Four(os) => os,
            Repr::Many(os) => os,
        }
    }

    fn ordinals_mut(&mut self) -> &mut [i32] {
        match &mut self.0 {
            Repr::Zero => Default::default(),
            Repr::One(os) => os,
            Repr::Two(os) => os,
            Repr::Three(os) => os,
            Repr::Four(os) => os,
            Repr::Many(os) => os,
        }
    }

    /// Overwrites every ordinal, for keys reused as a cursor.
    pub fn set_ordinals(&mut self, ordinals: &[i32]) -> Result<(), KeyError> {
        let dst = self.ordinals_mut();
        if dst.len() != ordinals.len() {
            return Err(KeyError::LengthMismatch {
                expected: dst.len(),
                actual: ordinals.len(),
            });
        }
        dst.copy_from_slice(ordinals);
        Ok(())
    }

    pub fn axis(&self, index: usize) -> Result<i32, KeyError> {
        let os = self.ordinals();
        os.get(index).copied().ok_or(KeyError::IndexOutOfBounds {
            index,
            len: os.len(),
        })
    }

    pub fn set_axis(&mut self, index: usize, value: i32) -> Result<(), KeyError> {
        let os = self.ordinals_mut();
        let len = os.len();
        match os.get_mut(index) {
            Some(o) => {
                *o = value;
                Ok(())
            }
            None => Err(KeyError::IndexOutOfBounds { index, len }),
        }
    }

    pub fn copy(&self) -> CellKey {
        self.clone()
    }

    /// Position of this cell in a flat array laid out with the last axis
    /// varying fastest: `sum(ordinal[i] * multipliers[i])` over every axis
    /// but the last, plus the last ordinal. `multipliers[n-1]`, if given,
    /// is ignored. Arithmetic wraps like the 32-bit ordinals it sums.
    ///
    /// # Panics
    ///
    /// If `multipliers` has fewer than `size() - 1` entries.
    pub fn offset(&self, multipliers: &[i32]) -> i32 {
        match &self.0 {
            Repr::Zero => 0,
            Repr::One([a]) => *a,
            Repr::Two([a, b]) => a.wrapping_mul(multipliers[0]).wrapping_add(*b),
            Repr::Three([a, b, c]) => a
                .wrapping_mul(multipliers[0])
                .wrapping_add(b.wrapping_mul(multipliers[1]))
                .wrapping_add(*c),
            Repr::Four([a, b, c, d]) => a
                .wrapping_mul(multipliers[0])
                .wrapping_add(b.wrapping_mul(multipliers[1]))
                .wrapping_add(c.wrapping_mul(multipliers[2]))
                .wrapping_add(*d),
            Repr::Many(os) => match os.split_last() {
                None => 0,
                Some((last, rest)) => rest
                    .iter()
                    .zip(&multipliers[..rest.len()])
                    .fold(*last, |acc, (o, m)| acc.wrapping_add(o.wrapping_mul(*m))),
            },
        }
    }

    /// A 32-bit hash of the ordinals, the same for every layout holding
    /// the same sequence.
    pub fn hash_code(&self) -> i32 {
        match &self.0 {
            Repr::Zero => SEED,
            Repr::One([a]) => mix(SEED, *a),
            Repr::Two([a, b]) => mix(mix(SEED, *a), *b),
            Repr::Three([a, b, c]) => mix(mix(mix(SEED, *a), *b), *c),
            Repr::Four([a, b, c, d]) => mix(mix(mix(mix(SEED, *a), *b), *c), *d),
            Repr::Many(os) => os.iter().fold(SEED, |h, o| mix(h, *o)),
        }
    }
}

impl std::hash::Hash for CellKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code())
    }
}

impl Default for CellKey {
    fn default() -> Self {
        CellKey::ZERO
    }
}

impl From<[i32; 1]> for CellKey {
    fn from(os: [i32; 1]) -> Self {
        CellKey(Repr::One(os))
    }
}

impl From<[i32; 2]> for CellKey {
    fn from(os: [i32; 2]) -> Self {
        CellKey(Repr::Two(os))
    }
}

impl From<[i32; 3]> for CellKey {
    fn from(os: [i32; 3]) -> Self {
        CellKey(Repr::Three(os))
    }
}

impl From<[i32; 4]> for CellKey {
    fn from(os: [i32; 4]) -> Self {
        CellKey(Repr::Four(os))
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, o) in self.ordinals().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", o)?;
        }
        f.write_str(")")
    }
}

impl fmt::Debug for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{}", self.arity(), self)
    }
}
