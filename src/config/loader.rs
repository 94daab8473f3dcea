use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::BimAuditConfig;

pub const CONFIG_FILE_NAME: &str = ".bimaudit.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str) -> Result<BimAuditConfig, String> {
    toml::from_str::<BimAuditConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
}

/// Try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<BimAuditConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Only log actual errors, not "file not found"
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for the first readable config.
pub fn load_config_from(start: PathBuf) -> BimAuditConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            BimAuditConfig::default()
        })
}

pub fn load_config() -> BimAuditConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            BimAuditConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::output::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_parse_config_partial_report_table() {
        let config = parse_config(
            r#"
[report]
anomalies = false

[output]
default_format = "html"
"#,
        )
        .unwrap();

        let toggles = config.section_toggles();
        assert!(!toggles.anomalies);
        assert!(toggles.summary);
        assert!(toggles.recommendations);
        assert_eq!(config.default_format(), OutputFormat::Html);
    }

    #[test]
    fn test_parse_config_rejects_bad_toml() {
        assert!(parse_config("[report\nsummary = ").is_err());
    }

    #[test]
    fn test_directory_ancestors_depth_limit() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn test_load_config_from_parent_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[report]\ncriteria = false\n",
        )
        .unwrap();
        let nested = temp.path().join("models").join("lot-2");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config_from(nested);
        assert!(!config.section_toggles().criteria);
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "report = 12").unwrap();

        let config = try_load_config_from_path(&temp.path().join(CONFIG_FILE_NAME));
        assert!(config.is_none());
    }
}
