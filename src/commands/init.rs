use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"# BIM audit configuration

# Sections included in generated reports
[report]
summary = true
scores = true
criteria = true
anomalies = true
recommendations = true

[output]
# markdown, html, json or terminal
default_format = "markdown"
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force).map(|_| ())
}

/// Write the default configuration into `dir`; returns the file path.
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");

    Ok(config_path)
}
