use std::{fmt::Debug, hash::Hash};

use log::{debug, warn};

use crate::PartyId;

// AuthorityToken
/// Proof that the local party held write-authority over an entity when the
/// token was issued.
///
/// A token ends in exactly one of two ways: it is consumed by
/// [`AuthorityManager::commit`](crate::AuthorityManager::commit), or it is
/// explicitly abandoned. Dropping it any other way is reported, since
/// whatever was mutated under it never reached the other parties.
#[must_use = "an authority token must be committed or abandoned"]
pub struct AuthorityToken<E: Copy + Eq + Hash + Debug> {
    entity: E,
    party: PartyId,
    epoch: u64,
    settled: bool,
}

impl<E: Copy + Eq + Hash + Debug> AuthorityToken<E> {
    pub(crate) fn new(entity: E, party: PartyId, epoch: u64) -> Self {
        Self {
            entity,
            party,
            epoch,
            settled: false,
        }
    }

    pub fn entity(&self) -> &E {
        &self.entity
    }

    pub fn party(&self) -> PartyId {
        self.party
    }

    pub(crate) fn epoch(&self) -> u64 {
        self.epoch
    }

    pub(crate) fn settle(mut self) {
        self.settled = true;
    }

    /// Give the token up without publishing anything.
    pub fn abandon(mut self) {
        debug!("authority token for {:?} abandoned", self.entity);
        self.settled = true;
    }
}

impl<E: Copy + Eq + Hash + Debug> Drop for AuthorityToken<E> {
    fn drop(&mut self) {
        if !self.settled {
            warn!(
                "Dropped authority token for {:?} without commit! Local mutations made under it were never published.",
                self.entity
            );
        }
    }
}

// AuthorityGrant
/// Tokens for a group of entities acquired together, to be committed as
/// one unit.
#[must_use = "an authority grant must be committed or abandoned"]
pub struct AuthorityGrant<E: Copy + Eq + Hash + Debug> {
    tokens: Vec<AuthorityToken<E>>,
}

impl<E: Copy + Eq + Hash + Debug> AuthorityGrant<E> {
    pub(crate) fn new(tokens: Vec<AuthorityToken<E>>) -> Self {
        Self { tokens }
    }

    pub fn entities(&self) -> impl Iterator<Item = &E> {
        self.tokens.iter().map(|token| token.entity())
    }

    pub fn contains(&self, entity: &E) -> bool {
        self.tokens.iter().any(|token| token.entity() == entity)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub(crate) fn into_tokens(self) -> Vec<AuthorityToken<E>> {
        self.tokens
    }

    pub fn abandon(self) {
        for token in self.tokens {
            token.abandon();
        }
    }
}
