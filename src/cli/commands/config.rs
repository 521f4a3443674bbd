use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};
use std::process::Command;

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn open_in(editor: &str) -> bool {
    Command::new(editor)
        .arg(Config::config_file())
        .status()
        .is_ok_and(|s| s.success())
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        if *edit_config {
            let fallback = default_editor();
            let requested = editor.clone().unwrap_or_else(|| fallback.clone());

            if open_in(&requested) {
                success(format!("Configuration file edited using '{requested}'"));
            } else if requested != fallback {
                warning(format!(
                    "Editor '{requested}' not available, falling back to '{fallback}'"
                ));
                if open_in(&fallback) {
                    success(format!("Configuration file edited using '{fallback}'"));
                } else {
                    error(format!("Failed to edit configuration file using '{fallback}'"));
                }
            } else {
                error(format!("Failed to edit configuration file using '{requested}'"));
            }
        }
    }

    Ok(())
}
