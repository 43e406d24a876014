/// A single replicated field value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Int(i64),
    Text(String),
    /// A fixed-capacity slot array, `None` marking an empty slot
    Slots(Vec<Option<u64>>),
    Absent,
}

/// The named field values of one entity, in declaration order, as handed to
/// [`ReplicationChannel::publish`](crate::ReplicationChannel::publish).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldSet {
    fields: Vec<(&'static str, FieldValue)>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn with(mut self, name: &'static str, value: FieldValue) -> Self {
        self.push(name, value);
        self
    }

    /// Sets `name`, replacing an earlier value of the same name.
    pub fn push(&mut self, name: &'static str, value: FieldValue) {
        if let Some(slot) = self.fields.iter_mut().find(|(field, _)| *field == name) {
            slot.1 = value;
            return;
        }
        self.fields.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    pub fn int(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(FieldValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(FieldValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn slots(&self, name: &str) -> Option<&[Option<u64>]> {
        match self.get(name) {
            Some(FieldValue::Slots(value)) => Some(value.as_slice()),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (*name, value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Anything whose state is replicated field-by-field.
pub trait Replicate {
    fn fields(&self) -> FieldSet;
}
