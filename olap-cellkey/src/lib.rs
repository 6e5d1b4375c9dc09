// A cell key is the address of one cell in a multidimensional grid: one
// signed ordinal per axis. Segment caches use them as hash keys, and dense
// grids turn them into a flat offset, once per cell touched by a query.
//
// Arities 0 through 4 cover nearly every query, so each gets an inline
// fixed-size layout; anything wider goes to the heap. A key's arity never
// changes after construction.

mod cellkey;


pub use cellkey::{Arity, CellKey};
