use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::process::Command;

/// Editor preference order: --editor flag, then $EDITOR/$VISUAL, then a
/// platform default.
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

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Active configuration:\n");
            let yaml = serde_yaml::to_string(&cfg)
                .map_err(|e| AppError::Config(format!("Failed to render config: {e}")))?;
            println!("{}", yaml);
        }

        if *edit_config {
            let fallback = default_editor();
            let chosen = editor.clone().unwrap_or_else(|| fallback.clone());

            let status = Command::new(&chosen).arg(&path).status();

            match status {
                Ok(s) if s.success() => {
                    println!("✅ Saved changes made with '{}'", chosen);
                }
                Ok(_) | Err(_) => {
                    eprintln!("⚠️  Could not launch '{}', trying '{}'", chosen, fallback);

                    match Command::new(&fallback).arg(&path).status() {
                        Ok(s) if s.success() => {
                            println!("✅ Saved changes made with '{}'", fallback);
                        }
                        Ok(_) | Err(_) => {
                            eprintln!("❌ No usable editor found ('{}')", fallback);
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
