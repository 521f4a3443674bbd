//! Audit trail: mirrors store change events into the SQLite `log` table.

use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::store::{ChangeEvent, Clock, KeyValueStore, RecordStore};
use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

pub struct AuditTrail {
    pending: Rc<RefCell<Vec<ChangeEvent>>>,
}

impl AuditTrail {
    /// Subscribe to `store`; events queue up until `flush`.
    pub fn attach<S: KeyValueStore, C: Clock>(store: &mut RecordStore<S, C>) -> Self {
        let pending = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&pending);
        store.on_change(move |event| sink.borrow_mut().push(event.clone()));
        Self { pending }
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Write queued events as log rows. Returns how many were written.
    pub fn flush(&self, conn: &Connection) -> AppResult<usize> {
        let events: Vec<ChangeEvent> = self.pending.borrow_mut().drain(..).collect();
        for event in &events {
            ttlog(
                conn,
                event.kind.as_str(),
                event.collection.key(),
                &format!("{event} ({})", event.id),
            )?;
        }
        Ok(events.len())
    }
}
