//! Generate config command

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use crate::config::AppConfig;
use crate::interfaces::cli::CliError;

/// Default output of `config generate`
pub const DEFAULT_SAMPLE_PATH: &str = "config.example.toml";

/// Generate example configuration file
pub async fn config_generate(output_path: Option<String>, force: bool) -> Result<(), CliError> {
    let path = output_path.unwrap_or_else(|| DEFAULT_SAMPLE_PATH.to_string());

    // 检查文件是否存在，非 --force 模式下交互确认
    if !force && Path::new(&path).exists() && !confirm_overwrite(&path)? {
        println!("{}", "Aborted.".red());
        return Ok(());
    }

    println!(
        "{} {}",
        "Generating configuration file...".yellow(),
        path.blue()
    );

    match AppConfig::default().save_to_file(&path) {
        Ok(()) => {
            println!(
                "  {} {}",
                "Configuration file generated successfully".green(),
                path.blue()
            );
            println!(
                "  {}",
                "Rename it to config.toml (or pass -c) and restart the service".yellow()
            );
            Ok(())
        }
        Err(e) => {
            println!(
                "  {} {}",
                "Failed to generate configuration file".red(),
                e.to_string().red()
            );
            Err(CliError::CommandError(format!(
                "Unable to write configuration file: {}",
                e
            )))
        }
    }
}

fn confirm_overwrite(path: &str) -> Result<bool, CliError> {
    print!(
        "{} {} {}",
        "File already exists:".yellow(),
        path.blue(),
        "Overwrite? [y/N] ".yellow()
    );
    io::stdout()
        .flush()
        .map_err(|e| CliError::CommandError(e.to_string()))?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(|e| CliError::CommandError(e.to_string()))?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_generate_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("sample.toml");
        let path_str = path.to_string_lossy().to_string();

        config_generate(Some(path_str.clone()), true).await.unwrap();

        let loaded = AppConfig::load(Some(&path_str)).unwrap();
        assert_eq!(loaded.export.filename, "bookmarks.pdf");
        assert_eq!(loaded.upload.allowed_extensions, vec!["mp4", "m4a"]);
    }
}
