//! TOML color schemes
//!
//! A scheme holds both rules and colors in one file:
//!
//! ```toml
//! [colors]
//! keyword = "#0000ff"
//! number = "teal"
//!
//! [[rule]]
//! name = "keyword"
//! pattern = '\b(if|else|while)\b'
//!
//! [[rule]]
//! name = "number"
//! pattern = '\d+'
//! ```
//!
//! Rule order in the file is match priority. Values are used verbatim.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::colors::ColorTable;
use super::rules::{Rule, RuleSet};
use crate::error::{ColorizeError, Result};

/// One `[[rule]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SchemeRule {
    pub name: String,
    pub pattern: String,
}

/// Rules and colors loaded from a TOML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scheme {
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
    #[serde(default, rename = "rule")]
    pub rules: Vec<SchemeRule>,
}

impl Scheme {
    /// Parse a scheme from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load a scheme file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ColorizeError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let scheme = Self::from_toml(&contents)?;
        tracing::debug!(
            path = %path.display(),
            rules = scheme.rules.len(),
            colors = scheme.colors.len(),
            "loaded scheme"
        );
        Ok(scheme)
    }

    /// Compile the rules and build the color table
    pub fn into_parts(self) -> Result<(RuleSet, ColorTable)> {
        let mut rules = RuleSet::new();
        for rule in &self.rules {
            rules.push(Rule::new(&rule.name, &rule.pattern)?);
        }
        let colors = self.colors.into_iter().collect();
        Ok((rules, colors))
    }
}
