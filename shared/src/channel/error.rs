use thiserror::Error;

use crate::PartyId;

/// Failures reported by a [`ReplicationChannel`](crate::ReplicationChannel)
/// when it cannot grant write-authority.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    /// The current holder refused to hand authority over
    #[error("Authority request rejected by holder {holder}")]
    Rejected { holder: PartyId },

    /// No acknowledgement arrived before the channel's deadline
    #[error("Authority request timed out after {waited_ms}ms")]
    Timeout { waited_ms: u64 },

    /// The channel could not reach the party holding authority
    #[error("Authority holder is unreachable")]
    Unreachable,
}
