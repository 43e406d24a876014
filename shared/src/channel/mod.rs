pub mod error;
pub mod local_channel;

use std::{fmt::Debug, hash::Hash};

use crate::{world::replicate::FieldSet, ChannelError, PartyId};

/// The seam to whatever actually carries authority requests and field
/// updates between parties.
///
/// Every call is synchronous from the caller's point of view. An
/// implementation backed by a network round-trip blocks until the transfer
/// is acknowledged, rejected, or its own timeout elapses.
pub trait ReplicationChannel<E: Copy + Eq + Hash + Debug> {
    /// The party this end of the channel acts for.
    fn local_party(&self) -> PartyId;

    /// Request exclusive write-authority over `entity` for the local party.
    ///
    /// A successful transfer is itself observable by the other parties.
    fn request_authority(&mut self, entity: &E) -> Result<(), ChannelError>;

    /// Broadcast the current field values of `entity` to every other party.
    /// Eventually consistent, no acknowledgement.
    fn publish(&mut self, entity: &E, fields: FieldSet);

    /// The party currently holding write-authority over `entity`, if any.
    fn current_authority_holder(&self, entity: &E) -> Option<PartyId>;
}
