use pretty_assertions::assert_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};
use unionfind::{OutOfBounds, UnionFind};

#[test]
fn starts_as_singletons() {
    let mut uf = UnionFind::new(5);
    assert_eq!(uf.len(), 5);
    assert_eq!(uf.count(), 5);
    for x in 0..5 {
        assert_eq!(uf.find(x), Ok(x));
        assert_eq!(uf.size_of(x), Ok(1));
    }
    assert_eq!(uf.connected(0, 1), Ok(false));
}

#[test]
fn empty() {
    let mut uf = UnionFind::new(0);
    assert!(uf.is_empty());
    assert_eq!(uf.count(), 0);
    assert_eq!(uf.find(0), Err(OutOfBounds { index: 0, len: 0 }));
}

#[test]
fn union_links_smaller_under_larger() {
    let mut uf = UnionFind::new(4);
    let root = uf.union(0, 1).unwrap();
    assert_eq!(root, 1);
    let root = uf.union(2, 1).unwrap();
    assert_eq!(root, 1);
    let root = uf.union(1, 3).unwrap();
    assert_eq!(root, 1);
    assert_eq!(uf.size_of(3), Ok(4));
    assert_eq!(uf.count(), 1);
}

#[test]
fn tie_goes_to_second_argument() {
    let mut uf = UnionFind::new(4);
    assert_eq!(uf.union(0, 1), Ok(1));
    assert_eq!(uf.union(2, 3), Ok(3));
    assert_eq!(uf.union(0, 2), Ok(3));
}

#[test]
fn union_of_connected_is_noop() {
    let mut uf = UnionFind::new(3);
    uf.union(0, 1).unwrap();
    let root = uf.find(0).unwrap();
    assert_eq!(uf.union(1, 0), Ok(root));
    assert_eq!(uf.count(), 2);
    assert_eq!(uf.size_of(0), Ok(2));
}

#[test]
fn out_of_bounds() {
    let mut uf = UnionFind::new(3);
    let err = OutOfBounds { index: 3, len: 3 };
    assert_eq!(uf.find(3), Err(err));
    assert_eq!(uf.union(0, 3), Err(err));
    assert_eq!(uf.union(3, 0), Err(err));
    assert_eq!(uf.connected(3, 1), Err(err));
    assert_eq!(uf.size_of(3), Err(err));
    assert_eq!(err.to_string(), "element 3 is out of bounds for a universe of 3 elements");
}

#[test]
fn long_chain_is_compressed() {
    let n = 1 << 12;
    let mut uf = UnionFind::new(n);
    for x in 1..n {
        uf.union(x - 1, x).unwrap();
    }
    let root = uf.find(0).unwrap();
    for x in 0..n {
        assert_eq!(uf.find(x), Ok(root));
    }
    assert_eq!(uf.size_of(17), Ok(n));
    assert_eq!(uf.count(), 1);
}

#[test]
fn agrees_with_naive_labels() {
    let mut rng = StdRng::seed_from_u64(0xdead_beef);
    for _ in 0..50 {
        let n = rng.gen_range(1..64);
        let mut uf = UnionFind::new(n);
        let mut labels = (0..n).collect::<Vec<_>>();

        for _ in 0..200 {
            let x = rng.gen_range(0..n);
            let y = rng.gen_range(0..n);
            if rng.gen_bool(0.5) {
                uf.union(x, y).unwrap();
                let (from, to) = (labels[x], labels[y]);
                labels.iter_mut().filter(|l| **l == from).for_each(|l| *l = to);
            } else {
                let expected = labels[x] == labels[y];
                assert_eq!(uf.connected(x, y), Ok(expected));
                assert_eq!(uf.find(x).unwrap() == uf.find(y).unwrap(), expected);
            }
        }

        let mut distinct = labels.clone();
        distinct.sort_unstable();
        distinct.dedup();
        assert_eq!(uf.count(), distinct.len());
        for x in 0..n {
            let expected = labels.iter().filter(|l| **l == labels[x]).count();
            assert_eq!(uf.size_of(x), Ok(expected));
        }
    }
}
