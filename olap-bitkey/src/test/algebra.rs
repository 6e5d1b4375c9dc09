use super::{hash_of, lcg_rand_step, random_key};
use crate::{BitKey, Representation};
use olap_base::DenseBitSet;
use test_log::test;

#[test]
fn test_representation_transparency() {
    for p in 0..63 {
        let mut narrow = BitKey::new(63);
        let mut medium = BitKey::new(100);
        let mut wide = BitKey::new(300);
        narrow.set(p).unwrap();
        medium.set(p).unwrap();
        wide.set(p).unwrap();
        assert_eq!(narrow, medium);
        assert_eq!(medium, wide);
        assert_eq!(narrow, wide);
        assert_eq!(hash_of(&narrow), hash_of(&medium));
        assert_eq!(hash_of(&medium), hash_of(&wide));
        assert_eq!(narrow.hash_code(), wide.hash_code());
    }
}

#[test]
fn test_result_takes_wider_layout() {
    let narrow = BitKey::from_positions(8, [1]).unwrap();
    let medium = BitKey::from_positions(100, [1, 90]).unwrap();
    let wide = BitKey::from_positions(300, [1, 290]).unwrap();
    let wide128 = BitKey::new(128);

    let ops: [fn(&BitKey, &BitKey) -> BitKey; 4] = [
        BitKey::union,
        BitKey::intersect,
        BitKey::difference,
        BitKey::symmetric_difference,
    ];
    for op in ops {
        assert_eq!(op(&narrow, &wide).representation(), Representation::Wide);
        assert_eq!(op(&wide, &narrow).representation(), Representation::Wide);
        assert_eq!(op(&narrow, &medium).representation(), Representation::Medium);
        assert_eq!(op(&medium, &narrow).representation(), Representation::Medium);
        assert_eq!(op(&medium, &wide128).representation(), Representation::Wide);
        assert_eq!(op(&narrow, &narrow).representation(), Representation::Narrow);
        assert_eq!(op(&narrow, &wide).capacity(), 320);
    }

    // Nothing above the narrow word is lost.
    assert_eq!(narrow.union(&wide).iter().collect::<Vec<_>>(), vec![1, 290]);
    assert_eq!(narrow.symmetric_difference(&medium).iter().collect::<Vec<_>>(), vec![90]);
    assert!(narrow.difference(&wide).is_empty());
    assert_eq!(wide.difference(&narrow).iter().collect::<Vec<_>>(), vec![290]);
}

#[test]
fn test_superset_across_layouts() {
    let narrow = BitKey::from_positions(8, [1, 3]).unwrap();
    let wide_low = BitKey::from_positions(300, [1]).unwrap();
    let wide_high = BitKey::from_positions(300, [1, 200]).unwrap();

    // High zero words on the wide side must not get in the way.
    assert!(narrow.is_superset_of(&wide_low));
    assert!(!narrow.is_superset_of(&wide_high));
    assert!(wide_high.is_superset_of(&wide_low));
    assert!(!wide_low.is_superset_of(&narrow));
    assert!(narrow.is_superset_of(&BitKey::EMPTY));
    assert!(BitKey::EMPTY.is_superset_of(&BitKey::new(500)));

    assert!(narrow.intersects(&wide_high));
    assert!(!BitKey::from_positions(8, [2]).unwrap().intersects(&wide_high));
    assert!(!BitKey::EMPTY.intersects(&BitKey::EMPTY));
}

#[test]
fn test_operators() {
    let a = BitKey::from_positions(100, [1, 3, 70]).unwrap();
    let b = BitKey::from_positions(8, [3, 5]).unwrap();
    assert_eq!(&a | &b, a.union(&b));
    assert_eq!(&a & &b, a.intersect(&b));
    assert_eq!(&a ^ &b, a.symmetric_difference(&b));
    assert_eq!(&a - &b, a.difference(&b));
}

fn dense_op(a: &BitKey, b: &BitKey, f: impl Fn(&mut DenseBitSet, &DenseBitSet)) -> DenseBitSet {
    let mut d = a.to_dense_bitset();
    f(&mut d, &b.to_dense_bitset());
    d
}

#[test]
fn test_algebra_laws() {
    let mut state = 1234;
    for _ in 0..500 {
        let a = random_key(&mut state);
        let b = random_key(&mut state);
        let union = a.union(&b);
        let inter = a.intersect(&b);

        assert!(union.is_superset_of(&a));
        assert!(union.is_superset_of(&b));
        assert_eq!(inter.is_superset_of(&a), b.is_superset_of(&a));
        assert!(a.difference(&a).is_empty());
        assert_eq!(
            union.cardinality() + inter.cardinality(),
            a.cardinality() + b.cardinality()
        );
        assert_eq!(a.is_superset_of(&b), a.union(&b) == a);
        assert_eq!(a.intersects(&b), !inter.is_empty());

        assert_eq!(union.to_dense_bitset(), dense_op(&a, &b, DenseBitSet::union));
        assert_eq!(inter.to_dense_bitset(), dense_op(&a, &b, DenseBitSet::intersect));
        assert_eq!(
            a.difference(&b).to_dense_bitset(),
            dense_op(&a, &b, DenseBitSet::subtract)
        );
        assert_eq!(
            a.symmetric_difference(&b),
            a.union(&b).difference(&a.intersect(&b))
        );

        // Receivers are untouched.
        let before = a.copy();
        let _ = a.union(&b);
        assert_eq!(a, before);
    }
}

#[test]
fn test_random_set_then_clear() {
    let mut state = 99;
    let mut key = BitKey::new(300);
    let mut model = DenseBitSet::new();
    for _ in 0..2000 {
        let pos = (lcg_rand_step(&mut state) % 300) as usize;
        let val = lcg_rand_step(&mut state) & 1 == 1;
        key.set_to(pos, val).unwrap();
        model.set(pos, val);
        assert_eq!(key.get(pos), val);
    }
    assert_eq!(key.to_dense_bitset(), model);
    assert_eq!(key.cardinality(), model.count());
}
