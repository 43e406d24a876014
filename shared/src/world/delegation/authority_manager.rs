use std::{collections::HashMap, fmt::Debug, hash::Hash};

use log::{debug, warn};

use crate::{
    world::{
        delegation::{
            authority_token::{AuthorityGrant, AuthorityToken},
            error::AuthorityError,
        },
        replicate::FieldSet,
    },
    PartyId, ReplicationChannel,
};

/// Gatekeeper for every mutation of a replicated entity.
///
/// Callers acquire a token with [`ensure_authority`](Self::ensure_authority)
/// before touching an entity's local copy, then hand the token back to
/// [`commit`](Self::commit) together with the entity's fields once the
/// logically atomic group of mutations is done.
pub struct AuthorityManager<E: Copy + Eq + Hash + Debug, C: ReplicationChannel<E>> {
    channel: C,
    grants: HashMap<E, u64>,
    next_epoch: u64,
}

impl<E: Copy + Eq + Hash + Debug, C: ReplicationChannel<E>> AuthorityManager<E, C> {
    pub fn new(channel: C) -> Self {
        Self {
            channel,
            grants: HashMap::new(),
            next_epoch: 0,
        }
    }

    pub fn local_party(&self) -> PartyId {
        self.channel.local_party()
    }

    pub fn holds_authority(&self, entity: &E) -> bool {
        self.channel.current_authority_holder(entity) == Some(self.local_party())
    }

    /// Acquire write-authority over `entity`, requesting a transfer from the
    /// channel only when the local party does not already hold it.
    ///
    /// Blocks for as long as the channel's request does.
    pub fn ensure_authority(&mut self, entity: &E) -> Result<AuthorityToken<E>, AuthorityError> {
        let party = self.local_party();

        if !self.holds_authority(entity) {
            // whatever was granted before has lapsed
            self.grants.remove(entity);

            self.channel.request_authority(entity).map_err(|source| {
                warn!("authority transfer for {:?} failed: {}", entity, source);
                AuthorityError::TransferFailed {
                    entity_id: format!("{:?}", entity),
                    source,
                }
            })?;

            if !self.holds_authority(entity) {
                return Err(AuthorityError::NotGranted {
                    entity_id: format!("{:?}", entity),
                });
            }

            debug!("authority over {:?} transferred to {}", entity, party);
        }

        let epoch = match self.grants.get(entity) {
            Some(epoch) => *epoch,
            None => {
                let epoch = self.next_epoch;
                self.next_epoch += 1;
                self.grants.insert(*entity, epoch);
                epoch
            }
        };

        Ok(AuthorityToken::new(*entity, party, epoch))
    }

    /// Acquire write-authority over every entity in `entities`, or over none
    /// of them.
    ///
    /// Duplicates are acquired once. If any acquisition fails the tokens
    /// already obtained are abandoned and the first error is returned.
    pub fn ensure_authority_all(&mut self, entities: &[E]) -> Result<AuthorityGrant<E>, AuthorityError> {
        let mut tokens: Vec<AuthorityToken<E>> = Vec::with_capacity(entities.len());

        for entity in entities {
            if tokens.iter().any(|token| token.entity() == entity) {
                continue;
            }
            match self.ensure_authority(entity) {
                Ok(token) => tokens.push(token),
                Err(error) => {
                    for token in tokens {
                        token.abandon();
                    }
                    return Err(error);
                }
            }
        }

        Ok(AuthorityGrant::new(tokens))
    }

    /// Check that `token` still represents authority held by the local party.
    pub fn verify(&self, token: &AuthorityToken<E>) -> Result<(), AuthorityError> {
        let entity = token.entity();
        if self.holds_authority(entity) && self.grants.get(entity) == Some(&token.epoch()) {
            return Ok(());
        }

        Err(AuthorityError::AuthorityLost {
            entity_id: format!("{:?}", entity),
        })
    }

    /// Publish `fields` for the token's entity, consuming the token.
    ///
    /// Fails without publishing when authority was lost since the token was
    /// issued.
    pub fn commit(&mut self, token: AuthorityToken<E>, fields: FieldSet) -> Result<(), AuthorityError> {
        if let Err(error) = self.verify(&token) {
            warn!("commit aborted: {}", error);
            token.settle();
            return Err(error);
        }

        let entity = *token.entity();
        self.channel.publish(&entity, fields);
        token.settle();

        Ok(())
    }

    /// Commit every token of `grant`, asking `fields` for each entity's
    /// current field set.
    ///
    /// All tokens are verified before the first publication, so either every
    /// entity is published or none is.
    pub fn commit_all<F: FnMut(&E) -> FieldSet>(
        &mut self,
        grant: AuthorityGrant<E>,
        mut fields: F,
    ) -> Result<(), AuthorityError> {
        let tokens = grant.into_tokens();

        let failure = tokens.iter().find_map(|token| self.verify(token).err());
        if let Some(error) = failure {
            warn!("commit of {} entities aborted: {}", tokens.len(), error);
            for token in tokens {
                token.settle();
            }
            return Err(error);
        }

        for token in tokens {
            let entity = *token.entity();
            let entity_fields = fields(&entity);
            self.channel.publish(&entity, entity_fields);
            token.settle();
        }

        Ok(())
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn channel_mut(&mut self) -> &mut C {
        &mut self.channel
    }
}
