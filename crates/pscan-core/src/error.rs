use thiserror::Error;

pub use pscan_graph::GraphDefect;

/// Errors raised by [`crate::Engine::new`].
///
/// The engine treats precondition violations as programming errors: it
/// fails fast before running any phase rather than producing a partial
/// result. There are no retries.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid graph: {0}")]
    InvalidGraph(#[from] GraphDefect),
    #[error("invalid parameters: {0}")]
    InvalidParameters(&'static str),
    #[error("resource exhausted: {0}")]
    ResourceExhausted(&'static str),
}
