use std::{collections::HashMap, fmt::Debug, hash::Hash, mem};

use log::debug;

use crate::{world::replicate::FieldSet, ChannelError, PartyId, ReplicationChannel};

/// An authority hand-over observed on the channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorityTransfer<E> {
    pub entity: E,
    pub from: Option<PartyId>,
    pub to: PartyId,
}

/// A field set broadcast for one entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Publication<E> {
    pub entity: E,
    pub fields: FieldSet,
}

/// In-process replication channel.
///
/// Grants every authority request immediately unless a failure has been
/// scripted for the entity, and keeps a log of every transfer and every
/// publication so a single-machine session (or a test) can observe what
/// remote parties would have received.
pub struct LocalChannel<E: Copy + Eq + Hash> {
    local_party: PartyId,
    holders: HashMap<E, PartyId>,
    failures: HashMap<E, ChannelError>,
    transfers: Vec<AuthorityTransfer<E>>,
    publications: Vec<Publication<E>>,
}

impl<E: Copy + Eq + Hash + Debug> LocalChannel<E> {
    pub fn new(local_party: PartyId) -> Self {
        Self {
            local_party,
            holders: HashMap::new(),
            failures: HashMap::new(),
            transfers: Vec::new(),
            publications: Vec::new(),
        }
    }

    // Scripting

    /// Hand authority over `entity` to `party` as if a remote party had
    /// taken it.
    pub fn assign_holder(&mut self, entity: E, party: PartyId) {
        let previous = self.holders.insert(entity, party);
        if previous != Some(party) {
            self.transfers.push(AuthorityTransfer {
                entity,
                from: previous,
                to: party,
            });
        }
    }

    /// Make every following authority request for `entity` fail with `error`.
    pub fn fail_requests(&mut self, entity: E, error: ChannelError) {
        self.failures.insert(entity, error);
    }

    pub fn clear_failure(&mut self, entity: &E) {
        self.failures.remove(entity);
    }

    pub fn clear_failures(&mut self) {
        self.failures.clear();
    }

    // Observation

    pub fn transfers(&self) -> &[AuthorityTransfer<E>] {
        &self.transfers
    }

    pub fn take_transfers(&mut self) -> Vec<AuthorityTransfer<E>> {
        mem::take(&mut self.transfers)
    }

    pub fn publications(&self) -> &[Publication<E>] {
        &self.publications
    }

    pub fn take_publications(&mut self) -> Vec<Publication<E>> {
        mem::take(&mut self.publications)
    }

    /// The most recent field set published for `entity`.
    pub fn last_published(&self, entity: &E) -> Option<&FieldSet> {
        self.publications
            .iter()
            .rev()
            .find(|publication| publication.entity == *entity)
            .map(|publication| &publication.fields)
    }

    pub fn publication_count(&self, entity: &E) -> usize {
        self.publications
            .iter()
            .filter(|publication| publication.entity == *entity)
            .count()
    }
}

impl<E: Copy + Eq + Hash + Debug> ReplicationChannel<E> for LocalChannel<E> {
    fn local_party(&self) -> PartyId {
        self.local_party
    }

    fn request_authority(&mut self, entity: &E) -> Result<(), ChannelError> {
        if let Some(error) = self.failures.get(entity) {
            debug!("authority request for {:?} failed: {}", entity, error);
            return Err(error.clone());
        }

        let previous = self.holders.insert(*entity, self.local_party);
        if previous != Some(self.local_party) {
            self.transfers.push(AuthorityTransfer {
                entity: *entity,
                from: previous,
                to: self.local_party,
            });
        }

        Ok(())
    }

    fn publish(&mut self, entity: &E, fields: FieldSet) {
        self.publications.push(Publication {
            entity: *entity,
            fields,
        });
    }

    fn current_authority_holder(&self, entity: &E) -> Option<PartyId> {
        self.holders.get(entity).copied()
    }
}
