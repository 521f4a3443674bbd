use crate::cli::commands::visitor::print_visitors;
use crate::config::Config;
use crate::core::watch::WatchLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::info;
use chrono::Local;
use std::time::Duration;

pub fn handle(interval: Option<u64>, iterations: Option<u64>, cfg: &Config) -> AppResult<()> {
    let store = RecordStore::open(DbPool::new(&cfg.database)?);
    let interval_ms = interval.unwrap_or(cfg.poll_interval_ms).max(1);

    info(format!(
        "Watching active visitors every {interval_ms} ms (Ctrl+C to stop)"
    ));

    WatchLogic::run(
        &store,
        Duration::from_millis(interval_ms),
        iterations,
        |active| {
            println!("\n🕒 {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
            print_visitors("🚶 Active visitors", active, &cfg.separator_char);
        },
    );

    Ok(())
}
