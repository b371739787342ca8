//! User defaults for the colorize binary
//!
//! Read from `.colorize.conf` in the home directory. Each line is
//! `key = value`; `#` starts a comment line. Recognized keys:
//!
//! ```text
//! rules = /home/me/.config/colorize/python.rules
//! colors = /home/me/.config/colorize/dark.colors
//! scheme = /home/me/.config/colorize/python.toml
//! wrap = false
//! ```
//!
//! Command line flags take precedence over everything here.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = ".colorize.conf";

/// Default sources and output settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Rules file used when none is given on the command line
    pub rules: Option<PathBuf>,
    /// Colors file used when none is given on the command line
    pub colors: Option<PathBuf>,
    /// Scheme file used when neither rules nor colors are given
    pub scheme: Option<PathBuf>,
    /// Whether to wrap output in `<pre><code>`
    pub wrap: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules: None,
            colors: None,
            scheme: None,
            wrap: true,
        }
    }
}

impl Config {
    /// Location of the config file in the user's home directory
    pub fn config_path() -> Option<PathBuf> {
        let home = if cfg!(windows) { "USERPROFILE" } else { "HOME" };
        env::var_os(home).map(|dir| PathBuf::from(dir).join(CONFIG_FILE))
    }

    /// Load the user's config, or defaults when there is none
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load a config file, falling back to defaults if it cannot be read
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Self::from_contents(&contents)
            }
            Err(e) => {
                tracing::trace!(path = %path.display(), error = %e, "no config file");
                Self::default()
            }
        }
    }

    /// Build a config from file contents
    ///
    /// Unknown keys and unparsable values are skipped with a warning.
    fn from_contents(contents: &str) -> Self {
        let mut config = Self::default();

        let entries = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='));

        for (key, value) in entries {
            let value = value.trim();
            match key.trim() {
                "rules" => config.rules = non_empty_path(value),
                "colors" => config.colors = non_empty_path(value),
                "scheme" => config.scheme = non_empty_path(value),
                "wrap" => match value.parse() {
                    Ok(wrap) => config.wrap = wrap,
                    Err(_) => tracing::warn!(value, "wrap expects true or false"),
                },
                other => tracing::warn!(key = other, "unknown config key"),
            }
        }

        config
    }
}

fn non_empty_path(value: &str) -> Option<PathBuf> {
    (!value.is_empty()).then(|| PathBuf::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_contents() {
        let config = Config::from_contents(
            "# sources\nrules = /tmp/x.rules\n  colors=/tmp/x.colors  \nwrap = false\n",
        );
        assert_eq!(config.rules, Some(PathBuf::from("/tmp/x.rules")));
        assert_eq!(config.colors, Some(PathBuf::from("/tmp/x.colors")));
        assert_eq!(config.scheme, None);
        assert!(!config.wrap);
    }

    #[test]
    fn test_bad_entries_ignored() {
        let config = Config::from_contents("Rules = a.rules\nwrap = yes\nscheme =\nnot a setting\n");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_later_entry_wins() {
        let config = Config::from_contents("scheme = a.toml\nscheme = b.toml\n");
        assert_eq!(config.scheme, Some(PathBuf::from("b.toml")));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "colors = c.txt\nwrap = false\n").unwrap();

        let config = Config::load_from(&path);
        assert_eq!(config.colors, Some(PathBuf::from("c.txt")));
        assert!(!config.wrap);

        let missing = Config::load_from(&dir.path().join("nope.conf"));
        assert_eq!(missing, Config::default());
    }

    #[test]
    fn test_config_path_file_name() {
        if let Some(path) = Config::config_path() {
            assert!(path.ends_with(CONFIG_FILE));
        }
    }
}
