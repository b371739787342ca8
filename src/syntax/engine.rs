//! Coloring engine
//!
//! Scans text left to right. At each position the rules are tried in
//! priority order, anchored at that position; the first match becomes a
//! colored span and the scan moves past it. Where nothing matches a single
//! character is copied through and the scan moves on by one.

use super::colors::ColorTable;
use super::rules::RuleSet;
use crate::error::Result;

/// A piece of scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A single character no rule matched
    Plain(&'a str),
    /// Text matched by a rule
    Token {
        /// The matching rule's token name
        name: &'a str,
        /// Matched text in front of a narrowed capture, left uncolored
        lead: &'a str,
        /// Text to color
        text: &'a str,
    },
}

impl<'a> Segment<'a> {
    /// Source text covered by this segment, in order
    pub fn source(&self) -> [&'a str; 2] {
        match *self {
            Segment::Plain(ch) => ["", ch],
            Segment::Token { lead, text, .. } => [lead, text],
        }
    }
}

/// Iterator splitting text into [`Segment`]s
///
/// The cursor advances by at least one character per segment, so the
/// scan always terminates and the segments cover the input exactly once.
pub struct Scanner<'a> {
    text: &'a str,
    rules: &'a RuleSet,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str, rules: &'a RuleSet) -> Self {
        Self { text, rules, pos: 0 }
    }

    /// Current byte offset into the text
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.text.get(self.pos..).filter(|r| !r.is_empty())?;

        let found = self
            .rules
            .iter()
            .find_map(|rule| rule.match_at(self.text, self.pos).map(|m| (rule, m)));

        if let Some((rule, m)) = found {
            self.pos += m.len();
            return Some(Segment::Token {
                name: &rule.name,
                lead: m.lead,
                text: m.token,
            });
        }

        // No match - copy one character through
        let width = rest.chars().next().map_or(1, char::len_utf8);
        self.pos += width;
        Some(Segment::Plain(&rest[..width]))
    }
}

/// Colors text with a rule set and a color table
#[derive(Debug, Clone, Copy)]
pub struct Highlighter<'a> {
    rules: &'a RuleSet,
    colors: &'a ColorTable,
}

impl<'a> Highlighter<'a> {
    pub fn new(rules: &'a RuleSet, colors: &'a ColorTable) -> Self {
        Self { rules, colors }
    }

    /// Produce HTML for already escaped text
    ///
    /// Each token becomes `<span style="color:{color}">{text}</span>`.
    /// Colors are looked up as tokens are emitted, so a token name without
    /// a color fails on its first match and not before.
    pub fn colorize(&self, text: &str) -> Result<String> {
        let mut out = String::with_capacity(text.len() * 2);
        for segment in Scanner::new(text, self.rules) {
            match segment {
                Segment::Plain(ch) => out.push_str(ch),
                Segment::Token { name, lead, text } => {
                    let color = self.colors.resolve(name)?;
                    out.push_str(lead);
                    out.push_str("<span style=\"color:");
                    out.push_str(color);
                    out.push_str("\">");
                    out.push_str(text);
                    out.push_str("</span>");
                }
            }
        }
        Ok(out)
    }
}

/// Produce HTML for already escaped text
///
/// See [`Highlighter::colorize`].
pub fn colorize(text: &str, colors: &ColorTable, rules: &RuleSet) -> Result<String> {
    Highlighter::new(rules, colors).colorize(text)
}

/// Wrap colorized HTML in a preformatted code block
pub fn wrap_block(html: &str) -> String {
    format!("<pre><code>{html}</code></pre>")
}
