//! # Tilebound Shared
//! Replication plumbing shared between the tilebound crates: the
//! replication channel seam, exclusive write-authority tokens and the
//! field sets that get published when a mutation is committed.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod channel;
mod types;
mod world;

pub use channel::{
    error::ChannelError,
    local_channel::{AuthorityTransfer, LocalChannel, Publication},
    ReplicationChannel,
};
pub use types::{ActorId, PartyId};
pub use world::{
    delegation::{
        authority_manager::AuthorityManager,
        authority_token::{AuthorityGrant, AuthorityToken},
        error::AuthorityError,
    },
    replicate::{FieldSet, FieldValue, Replicate},
};
