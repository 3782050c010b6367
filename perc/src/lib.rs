#![forbid(unsafe_code)]

mod error;
mod flag_lattice;
pub mod flood;
mod lattice;
pub mod stats;
mod stopwatch;

pub use error::{Error, Result};
pub use flag_lattice::FlagLattice;
pub use lattice::Lattice;
pub use stats::{PercolationStats, StatsConfig, UniformSource};
pub use stopwatch::Stopwatch;

////////////////////////////////////////////////////////////////////////////////

/// A `(row, col)` pair, both 1-indexed.
pub type Site = (usize, usize);

/// An N-by-N site-percolation system.
///
/// Sites start blocked and can only ever be opened. A site is full when an
/// open path of orthogonally adjacent sites connects it to the top row, and
/// the system percolates when such a path reaches the bottom row.
///
/// Rows and columns are 1-indexed; every site operation fails with
/// [`Error::OutOfBounds`] outside of `1..=size()`.
pub trait Percolation: Sized {
    /// Creates a lattice with every site blocked.
    fn new(size: usize) -> Result<Self>;

    fn size(&self) -> usize;

    /// Opens a site. Opening an already open site changes nothing.
    fn open(&mut self, row: usize, col: usize) -> Result<()>;

    fn is_open(&self, row: usize, col: usize) -> Result<bool>;

    /// Takes `&mut self` since lookups compress union-find paths.
    fn is_full(&mut self, row: usize, col: usize) -> Result<bool>;

    fn percolates(&mut self) -> bool;

    /// Returns the number of open sites.
    fn open_sites(&self) -> usize;
}

////////////////////////////////////////////////////////////////////////////////

/// Number of sites plus the two terminals.
pub(crate) fn universe_len(size: usize) -> Result<usize> {
    if size == 0 {
        return Err(Error::InvalidSize);
    }
    size.checked_mul(size)
        .and_then(|sites| sites.checked_add(2))
        .ok_or(Error::TooLarge(size))
}

/// Row-major index of an in-range site, or [`Error::OutOfBounds`].
pub(crate) fn site_index(size: usize, row: usize, col: usize) -> Result<usize> {
    if row == 0 || row > size || col == 0 || col > size {
        return Err(Error::OutOfBounds { row, col, size });
    }
    Ok((row - 1) * size + (col - 1))
}

pub(crate) fn neighbours(size: usize, row: usize, col: usize) -> impl Iterator<Item = Site> {
    const OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

    OFFSETS.into_iter().filter_map(move |(dr, dc)| {
        let row = row as isize + dr;
        let col = col as isize + dc;

        if row >= 1 && row <= size as isize && col >= 1 && col <= size as isize {
            return Some((row as usize, col as usize));
        }
        None
    })
}
