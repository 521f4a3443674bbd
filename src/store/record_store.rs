//! Resident and visitor collections persisted as JSON arrays in a key-value backend.
//!
//! Every mutation is one full read-modify-write of the affected collection:
//! the array is loaded, changed in memory, serialized and written back as a
//! whole. Nothing is written when an operation fails, so a failed call leaves
//! the persisted state exactly as it was.
//!
//! Reads are corruption tolerant. A missing key, a backend read error or a
//! blob that does not parse all read as an empty collection.

use crate::errors::{AppError, AppResult};
use crate::models::{
    FamilyMember, LogbookStats, Resident, ResidentInput, Visitor, VisitorInput,
};
use crate::store::clock::{Clock, SystemClock};
use crate::store::events::{ChangeEvent, ChangeKind, Collection, Listener, SubscriptionId};
use crate::store::kv::KeyValueStore;
use chrono::Local;
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

pub struct RecordStore<S: KeyValueStore, C: Clock = SystemClock> {
    backend: S,
    clock: C,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn require_non_empty(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

impl<S: KeyValueStore> RecordStore<S, SystemClock> {
    /// Open the store on top of `backend`, stamping records with the system clock.
    pub fn open(backend: S) -> Self {
        Self::with_clock(backend, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> RecordStore<S, C> {
    pub fn with_clock(backend: S, clock: C) -> Self {
        Self {
            backend,
            clock,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    // ---------------------------
    // Change notification
    // ---------------------------

    /// Register a listener called after every successful write.
    pub fn on_change<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ChangeEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, collection: Collection, kind: ChangeKind, id: &str) {
        let event = ChangeEvent {
            collection,
            kind,
            id: id.to_string(),
        };
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }

    // ---------------------------
    // Raw collection access
    // ---------------------------

    fn load<T: DeserializeOwned>(&self, collection: Collection) -> Vec<T> {
        match self.backend.read(collection.key()) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            Ok(None) | Err(_) => Vec::new(),
        }
    }

    fn save<T: Serialize>(&mut self, collection: Collection, records: &[T]) -> AppResult<()> {
        let raw = serde_json::to_string(records)?;
        self.backend.write(collection.key(), &raw)
    }

    // ---------------------------
    // Residents
    // ---------------------------

    /// All residents in storage order.
    pub fn list_residents(&self) -> Vec<Resident> {
        self.load(Collection::Residents)
    }

    pub fn get_resident(&self, id: &str) -> AppResult<Resident> {
        self.list_residents()
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::resident_not_found(id))
    }

    /// Insert a new resident or replace an existing one in place.
    ///
    /// An `input.id` matching a stored resident keeps that record's position
    /// and `created_at`. Any other input, including one whose id is unknown,
    /// is appended under a fresh id.
    pub fn upsert_resident(&mut self, input: ResidentInput) -> AppResult<Resident> {
        require_non_empty("flatNo", &input.flat_no)?;
        require_non_empty("ownerName", &input.owner_name)?;

        let mut residents: Vec<Resident> = self.load(Collection::Residents);
        let now = self.clock.now();

        let members: Vec<FamilyMember> = input
            .members
            .into_iter()
            .map(|m| FamilyMember {
                id: m
                    .id
                    .filter(|id| !id.trim().is_empty())
                    .unwrap_or_else(new_id),
                name: m.name,
                age: m.age,
                relation: m.relation,
            })
            .collect();

        let existing = input
            .id
            .as_deref()
            .and_then(|id| residents.iter().position(|r| r.id == id));

        let (stored, kind) = match existing {
            Some(idx) => {
                let slot = &mut residents[idx];
                slot.flat_no = input.flat_no;
                slot.owner_name = input.owner_name;
                slot.age = input.age;
                slot.total_members = input.total_members;
                slot.members = members;
                slot.updated_at = now;
                (slot.clone(), ChangeKind::Updated)
            }
            None => {
                let resident = Resident {
                    id: new_id(),
                    flat_no: input.flat_no,
                    owner_name: input.owner_name,
                    age: input.age,
                    total_members: input.total_members,
                    members,
                    created_at: now,
                    updated_at: now,
                };
                residents.push(resident.clone());
                (resident, ChangeKind::Created)
            }
        };

        self.save(Collection::Residents, &residents)?;
        self.notify(Collection::Residents, kind, &stored.id);
        Ok(stored)
    }

    /// Remove a resident. Unknown ids are a no-op and nothing is written.
    pub fn delete_resident(&mut self, id: &str) -> AppResult<()> {
        let mut residents: Vec<Resident> = self.load(Collection::Residents);
        let before = residents.len();
        residents.retain(|r| r.id != id);

        if residents.len() == before {
            return Ok(());
        }

        self.save(Collection::Residents, &residents)?;
        self.notify(Collection::Residents, ChangeKind::Deleted, id);
        Ok(())
    }

    // ---------------------------
    // Visitors
    // ---------------------------

    /// All visitors, most recent check-in first.
    pub fn list_visitors(&self) -> Vec<Visitor> {
        self.load(Collection::Visitors)
    }

    pub fn get_visitor(&self, id: &str) -> AppResult<Visitor> {
        self.list_visitors()
            .into_iter()
            .find(|v| v.id == id)
            .ok_or_else(|| AppError::visitor_not_found(id))
    }

    /// Record a visitor arriving; the new entry goes to the front.
    pub fn check_in_visitor(&mut self, input: VisitorInput) -> AppResult<Visitor> {
        require_non_empty("name", &input.name)?;
        require_non_empty("flatNo", &input.flat_no)?;

        let mut visitors: Vec<Visitor> = self.load(Collection::Visitors);
        let now = self.clock.now();

        let visitor = Visitor {
            id: new_id(),
            name: input.name,
            mobile_number: input.mobile_number,
            kind: input.kind,
            flat_no: input.flat_no,
            purpose: input.purpose,
            in_time: now,
            out_time: None,
            created_at: now,
        };
        visitors.insert(0, visitor.clone());

        self.save(Collection::Visitors, &visitors)?;
        self.notify(Collection::Visitors, ChangeKind::Created, &visitor.id);
        Ok(visitor)
    }

    /// Replace the editable fields of a visitor, keeping its position and timestamps.
    pub fn update_visitor(&mut self, id: &str, patch: VisitorInput) -> AppResult<Visitor> {
        require_non_empty("name", &patch.name)?;
        require_non_empty("flatNo", &patch.flat_no)?;

        let mut visitors: Vec<Visitor> = self.load(Collection::Visitors);
        let updated = {
            let visitor = visitors
                .iter_mut()
                .find(|v| v.id == id)
                .ok_or_else(|| AppError::visitor_not_found(id))?;
            visitor.apply(patch);
            visitor.clone()
        };

        self.save(Collection::Visitors, &visitors)?;
        self.notify(Collection::Visitors, ChangeKind::Updated, id);
        Ok(updated)
    }

    /// One-way transition to checked out.
    pub fn check_out_visitor(&mut self, id: &str) -> AppResult<Visitor> {
        let mut visitors: Vec<Visitor> = self.load(Collection::Visitors);
        let now = self.clock.now();

        let checked_out = {
            let visitor = visitors
                .iter_mut()
                .find(|v| v.id == id)
                .ok_or_else(|| AppError::visitor_not_found(id))?;
            if visitor.out_time.is_some() {
                return Err(AppError::AlreadyCheckedOut(id.to_string()));
            }
            // never earlier than the check-in, even if the clock stepped back
            visitor.out_time = Some(now.max(visitor.in_time));
            visitor.clone()
        };

        self.save(Collection::Visitors, &visitors)?;
        self.notify(Collection::Visitors, ChangeKind::CheckedOut, id);
        Ok(checked_out)
    }

    /// Visitors currently on the premises, in storage order.
    pub fn active_visitors(&self) -> Vec<Visitor> {
        self.list_visitors()
            .into_iter()
            .filter(Visitor::is_active)
            .collect()
    }

    pub fn count_active_visitors(&self) -> usize {
        self.list_visitors().iter().filter(|v| v.is_active()).count()
    }

    // ---------------------------
    // Dashboard
    // ---------------------------

    pub fn stats(&self) -> LogbookStats {
        let visitors = self.list_visitors();
        let today = self.clock.now().with_timezone(&Local).date_naive();

        LogbookStats {
            total_residents: self.list_residents().len(),
            total_visitors: visitors.len(),
            active_visitors: visitors.iter().filter(|v| v.is_active()).count(),
            visitors_today: visitors
                .iter()
                .filter(|v| v.in_time.with_timezone(&Local).date_naive() == today)
                .count(),
        }
    }
}
