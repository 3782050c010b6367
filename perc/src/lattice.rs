use crate::{neighbours, site_index, universe_len, Percolation, Result};

use unionfind::UnionFind;

////////////////////////////////////////////////////////////////////////////////

/// Percolation lattice backed by two union-find structures.
///
/// Both structures see the same site-to-site unions. Only `percolation`
/// links the bottom row to the bottom terminal, so a bottom-row site never
/// becomes full just because the lattice percolates through some other
/// column.
pub struct Lattice {
    size: usize,
    open: Vec<bool>,
    open_sites: usize,
    fullness: UnionFind,
    percolation: UnionFind,
}

impl Lattice {
    fn top(&self) -> usize {
        self.size * self.size
    }

    fn bottom(&self) -> usize {
        self.size * self.size + 1
    }

    fn connect(&mut self, a: usize, b: usize) -> Result<()> {
        self.fullness.union(a, b)?;
        self.percolation.union(a, b)?;
        Ok(())
    }
}

impl Percolation for Lattice {
    fn new(size: usize) -> Result<Self> {
        let len = universe_len(size)?;
        Ok(Self {
            size,
            open: vec![false; size * size],
            open_sites: 0,
            fullness: UnionFind::new(len),
            percolation: UnionFind::new(len),
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

        let (top, bottom) = (self.top(), self.bottom());
        if row == 1 {
            self.connect(site, top)?;
        }
        if row == self.size {
            self.percolation.union(site, bottom)?;
        }

        for (nrow, ncol) in neighbours(self.size, row, col) {
            let other = site_index(self.size, nrow, ncol)?;
            if self.open[other] {
                self.connect(site, other)?;
            }
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
        let top = self.top();
        Ok(self.fullness.connected(site, top)?)
    }

    fn percolates(&mut self) -> bool {
        let (top, bottom) = (self.top(), self.bottom());
        self.percolation.connected(top, bottom) == Ok(true)
    }

    fn open_sites(&self) -> usize {
        self.open_sites
    }
}
