use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::visible_width;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 40;

/// ANSI colour for each audit operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "checkout" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn op_target(entry: &LogEntry) -> String {
    let color = color_for_operation(&entry.operation);
    let op = color.paint(entry.operation.as_str()).to_string();
    if entry.target.is_empty() {
        op
    } else {
        format!("{op} ({})", entry.target)
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| visible_width(&op_target(e)))
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        println!("📜 Internal log:\n");

        for entry in &entries {
            let date = chrono::DateTime::parse_from_rfc3339(&entry.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| entry.date.clone());

            let label = op_target(entry);
            let padding = " ".repeat(op_w.saturating_sub(visible_width(&label)));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id, date, label, padding, entry.message,
            );
        }

        Ok(())
    }
}
