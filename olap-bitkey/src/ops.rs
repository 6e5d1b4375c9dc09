use crate::BitKey;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

impl BitOr for &BitKey {
    type Output = BitKey;
    fn bitor(self, rhs: &BitKey) -> BitKey {
        self.union(rhs)
    }
}

impl BitAnd for &BitKey {
    type Output = BitKey;
    fn bitand(self, rhs: &BitKey) -> BitKey {
        self.intersect(rhs)
    }
}

impl BitXor for &BitKey {
    type Output = BitKey;
    fn bitxor(self, rhs: &BitKey) -> BitKey {
        self.symmetric_difference(rhs)
    }
}

impl Sub for &BitKey {
    type Output = BitKey;
    fn sub(self, rhs: &BitKey) -> BitKey {
        self.difference(rhs)
    }
}

// Every allocated bit as a binary digit, most significant word first.
impl fmt::Display for BitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        for w in self.words().iter().rev() {
            write!(f, "{:064b}", w)?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
