#![forbid(unsafe_code)]

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("element {index} is out of bounds for a universe of {len} elements")]
pub struct OutOfBounds {
    pub index: usize,
    pub len: usize,
}

pub type Result<T> = std::result::Result<T, OutOfBounds>;

////////////////////////////////////////////////////////////////////////////////

/// Weighted quick-union with path halving over the elements `0..n`.
///
/// Every root keeps the size of its component, and `union` always hangs the
/// smaller tree under the larger one, so trees stay logarithmically shallow
/// even before compression kicks in.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Creates a partition of `0..n` into singletons.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    /// Returns the number of elements in the universe.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the root of the component containing `x`.
    ///
    /// Every visited node is relinked to its grandparent on the way up.
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.check(x)?;
        let mut x = x;
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        Ok(x)
    }

    /// Merges the components of `x` and `y` and returns the surviving root.
    ///
    /// The smaller component is linked under the larger one; on a tie the
    /// root of `y` survives. Does nothing if both are already connected.
    pub fn union(&mut self, x: usize, y: usize) -> Result<usize> {
        let rx = self.find(x)?;
        let ry = self.find(y)?;
        if rx == ry {
            return Ok(rx);
        }

        let (child, root) = if self.size[rx] > self.size[ry] {
            (ry, rx)
        } else {
            (rx, ry)
        };
        self.parent[child] = root;
        self.size[root] += self.size[child];
        self.count -= 1;
        Ok(root)
    }

    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Returns the size of the component containing `x`.
    pub fn size_of(&mut self, x: usize) -> Result<usize> {
        let root = self.find(x)?;
        Ok(self.size[root])
    }

    fn check(&self, x: usize) -> Result<()> {
        if x < self.parent.len() {
            Ok(())
        } else {
            Err(OutOfBounds {
                index: x,
                len: self.parent.len(),
            })
        }
    }
}
