use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about = "Interactive to-do list session over stdin", long_about = None)]
pub struct Args {
    /// Absolute directory for rolling log files; logging stays off when omitted
    #[arg(value_name = "LOG_DIR", value_parser = parse_log_dir)]
    pub log_dir: Option<PathBuf>,
}

fn parse_log_dir(raw: &str) -> Result<PathBuf, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("log directory cannot be empty".to_string());
    }
    let path = PathBuf::from(trimmed);
    if !path.is_absolute() {
        return Err(format!("log directory must be an absolute path, got `{trimmed}`"));
    }
    Ok(path)
}
