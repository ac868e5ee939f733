//! Candidate set errors

/// Errors raised while building or querying a [`CandidateSet`](super::CandidateSet)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CandidateSetError {
    #[error("Candidate set is empty")]
    Empty,

    #[error("Words in candidate set have inconsistent length: expected {expected}, '{word}' has {found}")]
    InconsistentWordLength {
        expected: usize,
        found: usize,
        word: String,
    },
}
