pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod resident;
pub mod stats;
pub mod visitor;
pub mod watch;

use crate::config::Config;
use crate::core::audit::AuditTrail;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::warning;

/// Open the configured database, run `op` against the record store and
/// record every change it made in the audit log.
pub(crate) fn with_store<T, F>(cfg: &Config, op: F) -> AppResult<T>
where
    F: FnOnce(&mut RecordStore<DbPool>) -> AppResult<T>,
{
    let mut store = RecordStore::open(DbPool::new(&cfg.database)?);
    let audit = AuditTrail::attach(&mut store);

    let result = op(&mut store);

    // audit log is best effort
    if let Err(e) = audit.flush(&store.backend().conn) {
        warning(format!("Failed to write internal log: {e}"));
    }

    result
}
