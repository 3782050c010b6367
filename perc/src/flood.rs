//! Breadth-first reference for fullness and percolation.
//!
//! Looks only at which sites are open, never at union-find state, which makes
//! it a convenient oracle for checking the lattices against each other.

use crate::{neighbours, Percolation, Result, Site};

use std::collections::{HashSet, VecDeque};

////////////////////////////////////////////////////////////////////////////////

/// Returns every open site reachable from an open site of the first row.
pub fn full_sites<P: Percolation>(lattice: &P) -> Result<HashSet<Site>> {
    let size = lattice.size();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::with_capacity(size);

    for col in 1..=size {
        if lattice.is_open(1, col)? {
            visited.insert((1, col));
            queue.push_back((1, col));
        }
    }

    while let Some((row, col)) = queue.pop_front() {
        for (nrow, ncol) in neighbours(size, row, col) {
            if lattice.is_open(nrow, ncol)? && visited.insert((nrow, ncol)) {
                queue.push_back((nrow, ncol));
            }
        }
    }

    Ok(visited)
}

/// Returns `true` if some full site lies in the last row.
pub fn percolates<P: Percolation>(lattice: &P) -> Result<bool> {
    let size = lattice.size();
    Ok(full_sites(lattice)?.iter().any(|&(row, _)| row == size))
}
