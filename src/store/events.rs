//! Change notifications emitted by the record store after each successful write.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Residents,
    Visitors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Updated,
    Deleted,
    CheckedOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub collection: Collection,
    pub kind: ChangeKind,
    /// Id of the affected record.
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

pub type Listener = Box<dyn FnMut(&ChangeEvent)>;

impl Collection {
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Residents => "residents",
            Collection::Visitors => "visitors",
        }
    }
}

impl ChangeKind {
    /// Operation name as written to the audit log.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Created => "add",
            ChangeKind::Updated => "edit",
            ChangeKind::Deleted => "del",
            ChangeKind::CheckedOut => "checkout",
        }
    }
}

impl fmt::Display for ChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = match self.collection {
            Collection::Residents => "resident",
            Collection::Visitors => "visitor",
        };
        let verb = match self.kind {
            ChangeKind::Created if self.collection == Collection::Visitors => "checked in",
            ChangeKind::Created => "added",
            ChangeKind::Updated => "updated",
            ChangeKind::Deleted => "deleted",
            ChangeKind::CheckedOut => "checked out",
        };
        write!(f, "{noun} {verb}")
    }
}
