use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = RecordStore::open(DbPool::new(&cfg.database)?);
    let stats = store.stats();

    header("🏢 Secure Gate dashboard", &cfg.separator_char);
    println!("{CYAN}• Total residents:{RESET} {}", stats.total_residents);
    println!("{CYAN}• Total visitors:{RESET}  {}", stats.total_visitors);
    println!("{CYAN}• Visitors today:{RESET}  {YELLOW}{}{RESET}", stats.visitors_today);
    println!("{CYAN}• Active visitors:{RESET} {GREEN}{}{RESET}", stats.active_visitors);

    Ok(())
}
