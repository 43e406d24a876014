use tilebound_shared::{ActorId, FieldSet, FieldValue, Replicate};

use crate::world::{Holdings, Money, SlotIndex};

// Occupant
/// Everything a seated actor carries; kept whole while disconnected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Occupant {
    actor: ActorId,
    display_name: String,
    position: usize,
    balance: Money,
    holdings: Holdings,
}

impl Occupant {
    pub(crate) fn new(
        actor: ActorId,
        display_name: String,
        starting_balance: Money,
        holdings_capacity: usize,
    ) -> Self {
        Self {
            actor,
            display_name,
            position: 0,
            balance: starting_balance,
            holdings: Holdings::new(holdings_capacity),
        }
    }

    pub fn actor(&self) -> ActorId {
        self.actor
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn holdings(&self) -> &Holdings {
        &self.holdings
    }

    pub(crate) fn holdings_mut(&mut self) -> &mut Holdings {
        &mut self.holdings
    }

    pub(crate) fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    pub(crate) fn credit(&mut self, amount: Money) {
        self.balance += amount;
    }

    /// No insolvency check: the balance may go negative.
    pub(crate) fn debit(&mut self, amount: Money) {
        self.balance -= amount;
    }

    /// Back to the start-of-game values, keeping identity.
    pub(crate) fn restart(&mut self, starting_balance: Money) {
        self.position = 0;
        self.balance = starting_balance;
        self.holdings.clear();
    }
}

// SlotState
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlotState {
    Vacant,
    Occupied(Occupant),
    /// The actor left mid-game; its data is retained for settlement and
    /// reconnection
    Disconnected(Occupant),
}

// Participant
/// One participant slot. Slots are never created or destroyed after
/// bootstrap, only reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    slot: SlotIndex,
    state: SlotState,
}

impl Participant {
    pub(crate) fn vacant(slot: SlotIndex) -> Self {
        Self {
            slot,
            state: SlotState::Vacant,
        }
    }

    pub fn slot(&self) -> SlotIndex {
        self.slot
    }

    pub fn state(&self) -> &SlotState {
        &self.state
    }

    pub fn is_vacant(&self) -> bool {
        matches!(self.state, SlotState::Vacant)
    }

    /// Occupied by a connected actor, and so able to take turns.
    pub fn is_occupied(&self) -> bool {
        matches!(self.state, SlotState::Occupied(_))
    }

    pub fn is_disconnected(&self) -> bool {
        matches!(self.state, SlotState::Disconnected(_))
    }

    /// Occupied or disconnected: the slot carries participant data.
    pub fn occupant(&self) -> Option<&Occupant> {
        match &self.state {
            SlotState::Vacant => None,
            SlotState::Occupied(occupant) | SlotState::Disconnected(occupant) => Some(occupant),
        }
    }

    pub(crate) fn occupant_mut(&mut self) -> Option<&mut Occupant> {
        match &mut self.state {
            SlotState::Vacant => None,
            SlotState::Occupied(occupant) | SlotState::Disconnected(occupant) => Some(occupant),
        }
    }

    /// The actor currently seated here. Disconnected slots have none.
    pub fn connected_actor(&self) -> Option<ActorId> {
        match &self.state {
            SlotState::Occupied(occupant) => Some(occupant.actor()),
            _ => None,
        }
    }

    /// Empty when vacant.
    pub fn display_name(&self) -> &str {
        self.occupant().map_or("", Occupant::display_name)
    }

    pub fn position(&self) -> usize {
        self.occupant().map_or(0, Occupant::position)
    }

    pub fn balance(&self) -> Money {
        self.occupant().map_or(0, Occupant::balance)
    }

    pub(crate) fn occupy(&mut self, occupant: Occupant) {
        self.state = SlotState::Occupied(occupant);
    }

    /// Returns false if the slot was not occupied.
    pub(crate) fn disconnect(&mut self) -> bool {
        match std::mem::replace(&mut self.state, SlotState::Vacant) {
            SlotState::Occupied(occupant) => {
                self.state = SlotState::Disconnected(occupant);
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    /// Returns false if the slot was not disconnected.
    pub(crate) fn reconnect(&mut self) -> bool {
        match std::mem::replace(&mut self.state, SlotState::Vacant) {
            SlotState::Disconnected(occupant) => {
                self.state = SlotState::Occupied(occupant);
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    pub(crate) fn reset(&mut self) {
        self.state = SlotState::Vacant;
    }
}

impl Replicate for Participant {
    fn fields(&self) -> FieldSet {
        let (status, actor) = match &self.state {
            SlotState::Vacant => ("vacant", FieldValue::Absent),
            SlotState::Occupied(occupant) => {
                ("occupied", FieldValue::Int(occupant.actor().to_u64() as i64))
            }
            SlotState::Disconnected(_) => ("disconnected", FieldValue::Absent),
        };
        let holdings: Vec<Option<u64>> = self
            .occupant()
            .map(|occupant| {
                occupant
                    .holdings()
                    .slots()
                    .iter()
                    .map(|slot| slot.map(|tile| tile as u64))
                    .collect()
            })
            .unwrap_or_default();

        FieldSet::new()
            .with("slot", FieldValue::Int(self.slot as i64))
            .with("status", FieldValue::Text(status.to_string()))
            .with("actor", actor)
            .with("display_name", FieldValue::Text(self.display_name().to_string()))
            .with("position", FieldValue::Int(self.position() as i64))
            .with("balance", FieldValue::Int(self.balance()))
            .with("holdings", FieldValue::Slots(holdings))
    }
}
