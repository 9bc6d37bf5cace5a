use thiserror::Error;

/// A structural defect found while validating a [`crate::CsrView`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphDefect {
    #[error("vertex {0:?} has a self-loop")]
    SelfLoop(usize),
    #[error("neighbour list of vertex {0:?} is not strictly increasing")]
    UnsortedNeighbors(usize),
    #[error("edge ({0:?}, {1:?}) is not mirrored by a reverse edge")]
    Asymmetric(usize, usize),
    #[error("offset array is not monotonically non-decreasing at index {0}")]
    OffsetNotMonotonic(usize),
    #[error("offset array length does not match node count plus one")]
    OffsetLengthMismatch,
}
