use thiserror::Error;

use crate::ChannelError;

/// Errors that can occur while acquiring or exercising write-authority
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorityError {
    /// The replication channel could not hand write-authority to this party
    #[error("Authority transfer for entity {entity_id} failed: {source}")]
    TransferFailed {
        entity_id: String,
        source: ChannelError,
    },

    /// The channel acknowledged the request but another party still holds authority
    #[error("Authority over entity {entity_id} was not granted to the local party")]
    NotGranted { entity_id: String },

    /// Authority moved to another party between acquisition and commit
    #[error("Authority over entity {entity_id} was lost before commit")]
    AuthorityLost { entity_id: String },
}
