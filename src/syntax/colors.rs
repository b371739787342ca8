//! Token name to color mapping

use std::collections::HashMap;

use crate::error::{ColorizeError, Result};

/// Maps token names to color values
///
/// Colors are opaque strings (`#ff0000`, `red`, ...) and are inserted into
/// the output without validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorTable {
    colors: HashMap<String, String>,
}

impl ColorTable {
    /// Create an empty color table
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `name: color` lines
    ///
    /// All whitespace is removed from a line before it is split on `:`,
    /// which must yield exactly two parts. A later line for the same name
    /// replaces the earlier one.
    pub fn parse<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for (idx, line) in lines.into_iter().enumerate() {
            let line: String = line.as_ref().chars().filter(|c| !c.is_whitespace()).collect();
            let parts: Vec<&str> = line.split(':').collect();
            match parts.as_slice() {
                [name, color] => table.insert(name, color),
                _ => {
                    return Err(ColorizeError::MalformedColor {
                        line: idx + 1,
                        text: line.clone(),
                        parts: parts.len(),
                    })
                }
            }
        }
        Ok(table)
    }

    /// Set the color for a token name
    pub fn insert(&mut self, name: &str, color: &str) {
        self.colors.insert(name.to_string(), color.to_string());
    }

    /// Get the color for a token name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(|s| s.as_str())
    }

    /// Get the color for a token name, failing if it has none
    pub fn resolve(&self, name: &str) -> Result<&str> {
        self.get(name)
            .ok_or_else(|| ColorizeError::MissingColor(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for ColorTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (name, color) in iter {
            table.insert(name.as_ref(), color.as_ref());
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_whitespace() {
        let table = ColorTable::parse(["a : 1", "b: 2 "]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("a"), Some("1"));
        assert_eq!(table.get("b"), Some("2"));
    }

    #[test]
    fn test_parse_strips_interior_whitespace() {
        let table = ColorTable::parse(["key word: dark blue\n", "\tx:\t#ff 00 00"]).unwrap();
        assert_eq!(table.get("keyword"), Some("darkblue"));
        assert_eq!(table.get("x"), Some("#ff0000"));
    }

    #[test]
    fn test_parse_last_wins() {
        let table = ColorTable::parse(["kw: red", "kw: blue"]).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("kw"), Some("blue"));
    }

    #[test]
    fn test_parse_wrong_part_count() {
        let err = ColorTable::parse(["kw: red", "kw"]).unwrap_err();
        assert!(matches!(err, ColorizeError::MalformedColor { line: 2, parts: 1, .. }));

        let err = ColorTable::parse(["url: http://x"]).unwrap_err();
        assert!(matches!(err, ColorizeError::MalformedColor { line: 1, parts: 3, .. }));

        let err = ColorTable::parse([""]).unwrap_err();
        assert!(matches!(err, ColorizeError::MalformedColor { parts: 1, .. }));
    }

    #[test]
    fn test_resolve_missing() {
        let table: ColorTable = [("kw", "blue")].into_iter().collect();
        assert_eq!(table.resolve("kw").unwrap(), "blue");
        assert!(matches!(
            table.resolve("id"),
            Err(ColorizeError::MissingColor(name)) if name == "id"
        ));
    }
}
