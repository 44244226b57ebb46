use thiserror::Error;

/// Everything that can go wrong while producing or driving a problem.
///
/// None of these are reachable through normal UI use: they flag drift between
/// a caller's family tags and the dispatch table, or a broken config string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProblemError {
    #[error("unknown problem family tag '{0}'")]
    UnknownFamily(String),

    #[error("cannot pick from a pool of {pool} with {excluded} excluded")]
    ExhaustedPool { pool: usize, excluded: usize },

    #[error("invalid session config: {0}")]
    InvalidConfig(String),
}
