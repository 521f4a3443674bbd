use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::RecordStore;
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        what,
        format,
        file,
        force,
    } = cmd
    {
        let store = RecordStore::open(DbPool::new(&cfg.database)?);
        let path = expand_tilde(file);
        let count = ExportLogic::export(&store, *what, *format, &path, *force)?;
        info(format!(
            "{count} {} written as {}",
            what.as_str(),
            format.as_str()
        ));
    }
    Ok(())
}
