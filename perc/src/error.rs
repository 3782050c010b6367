use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("lattice size must be positive")]
    InvalidSize,
    #[error("lattice of size {0} does not fit into the index space")]
    TooLarge(usize),
    #[error("number of trials must be positive")]
    InvalidTrials,
    #[error("site ({row}, {col}) is outside of the {size}x{size} lattice")]
    OutOfBounds { row: usize, col: usize, size: usize },
    #[error(transparent)]
    UnionFind(#[from] unionfind::OutOfBounds),
}

impl Error {
    /// Whether the error comes from a bad lattice size or trial count.
    pub fn is_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidSize | Self::TooLarge(_) | Self::InvalidTrials
        )
    }

    /// Whether the error comes from a site or element outside of the lattice.
    pub fn is_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. } | Self::UnionFind(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
