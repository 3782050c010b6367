use crate::{neighbours, site_index, universe_len, Percolation, Result};

use std::ops::BitOr;

use unionfind::UnionFind;

////////////////////////////////////////////////////////////////////////////////

/// Which boundary rows a component touches. Only meaningful at roots.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
struct Touches {
    top: bool,
    bottom: bool,
}

impl BitOr for Touches {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            top: self.top || rhs.top,
            bottom: self.bottom || rhs.bottom,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Percolation lattice backed by a single union-find with no terminals.
///
/// Every root carries flags telling whether its component reaches the first
/// or the last row. The flags are merged on each union, so fullness is the
/// top flag of a site's root and the lattice percolates as soon as some root
/// has both.
pub struct FlagLattice {
    size: usize,
    open: Vec<bool>,
    open_sites: usize,
    sites: UnionFind,
    touches: Vec<Touches>,
    percolates: bool,
}

impl Percolation for FlagLattice {
    fn new(size: usize) -> Result<Self> {
        universe_len(size)?;
        Ok(Self {
            size,
            open: vec![false; size * size],
            open_sites: 0,
            sites: UnionFind::new(size * size),
            touches: vec![Touches::default(); size * size],
            percolates: false,
        })
    }

    fn size(&self) -> usize {
        self.size
    }

    fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let site = site_index(self.size, row, col)?;
        if self.open[site] {
            return Ok(());
        }
        self.open[site] = true;
        self.open_sites += 1;

        let mut touches = Touches {
            top: row == 1,
            bottom: row == self.size,
        };
        for (nrow, ncol) in neighbours(self.size, row, col) {
            let other = site_index(self.size, nrow, ncol)?;
            if !self.open[other] {
                continue;
            }
            let root = self.sites.find(other)?;
            touches = touches | self.touches[root];
            self.sites.union(site, other)?;
        }

        let root = self.sites.find(site)?;
        self.touches[root] = touches;
        if touches.top && touches.bottom {
            self.percolates = true;
        }

        Ok(())
    }

    fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        Ok(self.open[site_index(self.size, row, col)?])
    }

    fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        let site = site_index(self.size, row, col)?;
        if !self.open[site] {
            return Ok(false);
        }
        let root = self.sites.find(site)?;
        Ok(self.touches[root].top)
    }

    fn percolates(&mut self) -> bool {
        self.percolates
    }

    fn open_sites(&self) -> usize {
        self.open_sites
    }
}
