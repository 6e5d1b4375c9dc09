// A bit key is a set of small ordinals (dimensions, columns, levels) packed
// into machine words. Aggregate selection asks "does this aggregate cover
// every column the query needs" with `is_superset_of`, and expression
// caches key on the set of hierarchies an expression depends on, so
// construction, comparison and hashing all sit on hot paths.
//
// Three representations, fixed at construction by requested capacity:
//
//   - Narrow: capacity < 64, one word
//   - Medium: capacity < 128, two words
//   - Wide:   ceil(capacity/64) words on the heap
//
// Every operation behaves as if all keys were wide with leading zero
// words, so mixing representations is never observable except through
// `capacity()` and `representation()`.

mod bitkey;
mod iter;
mod ops;


pub use bitkey::{BitKey, Representation};
pub use iter::SetBits;
