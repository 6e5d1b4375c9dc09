use crate::DenseBitSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use test_log::test;

fn hash_of<T: Hash>(t: &T) -> u64 {
    let mut h = DefaultHasher::new();
    t.hash(&mut h);
    h.finish()
}

#[test]
fn test_set_grows_and_get() {
    let mut bs = DenseBitSet::new();
    bs.set(3, true);
    bs.set(130, true);
    assert!(bs.get(3));
    assert!(bs.get(130));
    assert!(!bs.get(4));
    assert!(!bs.get(10_000));
    assert_eq!(bs.words().len(), 3);
    assert_eq!(bs.len(), 131);
    assert_eq!(bs.count(), 2);
    bs.set(130, false);
    assert_eq!(bs.len(), 4);
    // Clearing far past the end must not allocate.
    bs.set(5000, false);
    assert_eq!(bs.words().len(), 3);
}

#[test]
fn test_trailing_zero_words_ignored() {
    let a: DenseBitSet = [1, 63].into_iter().collect();
    let mut b = DenseBitSet::with_capacity(512);
    b.set(1, true);
    b.set(63, true);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_eq!(DenseBitSet::new(), DenseBitSet::with_capacity(256));
}

#[test]
fn test_iter_ascending() {
    let bs: DenseBitSet = [200, 0, 64, 65, 127].into_iter().collect();
    assert_eq!(bs.iter().collect::<Vec<_>>(), vec![0, 64, 65, 127, 200]);
    assert_eq!(format!("{:?}", bs), "{0, 64, 65, 127, 200}");
}

#[test]
fn test_in_place_algebra() {
    let a: DenseBitSet = [1, 3, 5, 100].into_iter().collect();
    let b: DenseBitSet = [3, 5, 7].into_iter().collect();

    let mut u = a.clone();
    u.union(&b);
    assert_eq!(u.iter().collect::<Vec<_>>(), vec![1, 3, 5, 7, 100]);

    let mut i = a.clone();
    i.intersect(&b);
    assert_eq!(i.iter().collect::<Vec<_>>(), vec![3, 5]);

    let mut d = a.clone();
    d.subtract(&b);
    assert_eq!(d.iter().collect::<Vec<_>>(), vec![1, 100]);

    let mut short = b.clone();
    short.union(&a);
    assert_eq!(short, u);
}
