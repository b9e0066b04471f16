/// Contract violations of a streaming hash state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DigestError {
    /// More data was offered to a hash state whose digest has already been computed. A new state
    /// must be constructed to hash another message.
    #[error("sha-1: already finalized")]
    AlreadyFinalized,

    /// The digest was requested through a shared reference, but the state was never finalized
    /// through a mutable one.
    #[error("sha-1: cannot finalize an immutable hash state")]
    NotFinalized,
}
