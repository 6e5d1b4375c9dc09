// The addressing substrate of the engine. Aggregate navigation builds a
// `BitKey` per candidate aggregate and tests it against the columns a
// query needs; cell storage builds a `CellKey` per cell it touches, either
// hashing it or flattening it with `CellKey::offset`.
//
// Neither key type synchronizes anything. Once a key is shared between
// threads it must be treated as immutable; copy it before mutating.

pub use olap_base::{err, DenseBitSet, Error, KeyError, Result};
pub use olap_bitkey::{BitKey, Representation, SetBits};
pub use olap_cellkey::{Arity, CellKey};
