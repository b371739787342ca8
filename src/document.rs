//! Reading rule, color and input files
//!
//! Thin file handling around the syntax module: turns files into the
//! line sequences the parsers expect and renders a whole document.

use std::fs;
use std::path::Path;

use crate::error::{ColorizeError, Result};
use crate::syntax::{escape, wrap_block, ColorTable, Highlighter, RuleSet};

/// Read a file to a string, keeping the path in the error
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ColorizeError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Split rules file contents into rule lines
///
/// The contents are trimmed as a whole first, so an empty or blank file
/// has no rules. Blank lines between rules are kept and rejected by the
/// parser.
pub fn rule_lines(contents: &str) -> Vec<&str> {
    let contents = contents.trim();
    if contents.is_empty() {
        Vec::new()
    } else {
        contents.split('\n').collect()
    }
}

/// Split colors file contents into color lines
pub fn color_lines(contents: &str) -> Vec<&str> {
    contents.lines().collect()
}

/// Load and compile a rules file
pub fn load_rules(path: &Path) -> Result<RuleSet> {
    let contents = read_file(path)?;
    let rules = RuleSet::parse(rule_lines(&contents))?;
    tracing::debug!(path = %path.display(), count = rules.len(), "loaded rules");
    Ok(rules)
}

/// Load a colors file
pub fn load_colors(path: &Path) -> Result<ColorTable> {
    let contents = read_file(path)?;
    let colors = ColorTable::parse(color_lines(&contents))?;
    tracing::debug!(path = %path.display(), count = colors.len(), "loaded colors");
    Ok(colors)
}

/// Escape, colorize and optionally wrap raw text
pub fn render(text: &str, rules: &RuleSet, colors: &ColorTable, wrap: bool) -> Result<String> {
    let html = Highlighter::new(rules, colors).colorize(&escape(text))?;
    Ok(if wrap { wrap_block(&html) } else { html })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_lines() {
        assert!(rule_lines("").is_empty());
        assert!(rule_lines(" \n\n ").is_empty());
        assert_eq!(rule_lines("\nkw: if\nid: x\n\n"), ["kw: if", "id: x"]);
        assert_eq!(rule_lines("kw: if\n\nid: x"), ["kw: if", "", "id: x"]);
    }

    #[test]
    fn test_blank_rule_line_rejected() {
        let err = RuleSet::parse(rule_lines("kw: if\n\nid: x")).unwrap_err();
        assert!(matches!(err, ColorizeError::MalformedRule { line: 2, .. }));
    }

    #[test]
    fn test_color_lines() {
        assert_eq!(color_lines("a: 1\nb: 2\n"), ["a: 1", "b: 2"]);
        assert!(color_lines("").is_empty());
    }

    #[test]
    fn test_render() {
        let rules = RuleSet::parse(["tag: &lt;\\w+&gt;"]).unwrap();
        let colors = ColorTable::parse(["tag: #800000"]).unwrap();
        assert_eq!(
            render("<b> & \\", &rules, &colors, true).unwrap(),
            r##"<pre><code><span style="color:#800000">&lt;b&gt;</span> &amp; &#39</code></pre>"##
        );
        assert_eq!(render("x", &rules, &colors, false).unwrap(), "x");
    }

    #[test]
    fn test_load_files() {
        let dir = tempfile::tempdir().unwrap();
        let rules_path = dir.path().join("py.rules");
        let colors_path = dir.path().join("py.colors");
        fs::write(&rules_path, "keyword: \\b(def|return)\\b\nnumber: \\d+\n").unwrap();
        fs::write(&colors_path, "keyword : #0000ff\nnumber: #008000\n").unwrap();

        let rules = load_rules(&rules_path).unwrap();
        let colors = load_colors(&colors_path).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(colors.get("keyword"), Some("#0000ff"));
        assert_eq!(
            render("return 1", &rules, &colors, false).unwrap(),
            r##"<span style="color:#0000ff">return</span> <span style="color:#008000">1</span>"##
        );

        assert!(matches!(
            load_rules(&dir.path().join("missing")),
            Err(ColorizeError::ReadFile { .. })
        ));
    }
}
