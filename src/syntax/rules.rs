//! Pattern rules for colorizing
//!
//! A rule pairs a token name with a regular expression. Rules live in an
//! ordered [`RuleSet`] where list position is match priority: at each
//! position the first rule that matches wins.

use regex::{Captures, Regex};
use regex_syntax::hir::{Hir, HirKind};

use crate::error::{ColorizeError, Result};

/// A single named pattern rule
#[derive(Debug, Clone)]
pub struct Rule {
    /// Token name, used to look up the color
    pub name: String,
    /// Pattern as written by the rule author
    pub pattern: String,
    /// Compiled pattern, anchored at the start of the searched text
    regex: Regex,
    /// Enclosing capture group of each group, indexed by group number
    parents: Vec<Option<usize>>,
}

/// Text consumed by a successful rule match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<'t> {
    /// Matched text in front of a narrowed capture, emitted uncolored
    pub lead: &'t str,
    /// Text to wrap in the token's color
    pub token: &'t str,
}

impl RuleMatch<'_> {
    /// Number of bytes the scan cursor advances past this match
    pub fn len(&self) -> usize {
        self.lead.len() + self.token.len()
    }

    /// Check if the match consumed nothing
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Rule {
    /// Create a new rule, compiling its pattern
    pub fn new(name: &str, pattern: &str) -> Result<Self> {
        let anchored = format!("^(?:{pattern})");
        let regex = Regex::new(&anchored).map_err(|source| ColorizeError::InvalidPattern {
            name: name.to_string(),
            pattern: pattern.to_string(),
            source,
        })?;

        // The pattern already compiled, so it also parses here
        let mut parents = vec![None; regex.captures_len()];
        if let Ok(hir) = regex_syntax::parse(&anchored) {
            collect_parents(&hir, None, &mut parents);
        }

        Ok(Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
            regex,
            parents,
        })
    }

    /// Match this rule starting exactly at `cursor`
    ///
    /// When the last group to close is numbered above 1, only capture
    /// group 1 is the token and anything matched before it becomes the
    /// lead. Otherwise the whole match is the token. Matches that would
    /// color nothing are reported as no match so the scan always moves.
    pub fn match_at<'t>(&self, text: &'t str, cursor: usize) -> Option<RuleMatch<'t>> {
        let rest = text.get(cursor..)?;
        if rest.is_empty() {
            return None;
        }
        let caps = self.regex.captures(rest)?;

        let found = if self.last_group(&caps) > 1 {
            let group = caps.get(1)?;
            RuleMatch {
                lead: &rest[..group.start()],
                token: group.as_str(),
            }
        } else {
            RuleMatch {
                lead: "",
                token: caps.get(0)?.as_str(),
            }
        };

        if found.token.is_empty() {
            None
        } else {
            Some(found)
        }
    }

    /// Index of the capture group that closed last, 0 if none participated
    ///
    /// Only groups ending furthest right can have closed last. Among those,
    /// a group closes after every group it encloses, and of two sibling
    /// groups the later one closes last.
    fn last_group(&self, caps: &Captures<'_>) -> usize {
        let Some(end) = caps.iter().skip(1).flatten().map(|m| m.end()).max() else {
            return 0;
        };
        let tied: Vec<usize> = caps
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, m)| m.is_some_and(|m| m.end() == end))
            .map(|(idx, _)| idx)
            .collect();

        tied.iter()
            .copied()
            .filter(|&idx| !self.ancestors(idx).any(|up| tied.contains(&up)))
            .max()
            .unwrap_or(0)
    }

    /// Enclosing capture groups of `index`, innermost first
    fn ancestors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.parents.get(index).copied().flatten(), move |&up| {
            self.parents.get(up).copied().flatten()
        })
    }
}

/// Record the innermost enclosing capture group of every group in `hir`
fn collect_parents(hir: &Hir, parent: Option<usize>, parents: &mut [Option<usize>]) {
    match hir.kind() {
        HirKind::Capture(cap) => {
            let index = cap.index as usize;
            if let Some(slot) = parents.get_mut(index) {
                *slot = parent;
            }
            collect_parents(&cap.sub, Some(index), parents);
        }
        HirKind::Repetition(rep) => collect_parents(&rep.sub, parent, parents),
        HirKind::Concat(subs) | HirKind::Alternation(subs) => {
            for sub in subs {
                collect_parents(sub, parent, parents);
            }
        }
        _ => {}
    }
}

/// Ordered collection of rules, first rule = highest priority
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create an empty rule set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `name: pattern` lines
    ///
    /// Lines are trimmed and split on the first `:`. The name is kept as
    /// written; the pattern is trimmed but keeps interior whitespace.
    pub fn parse<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref().trim();
            let (name, pattern) = line
                .split_once(':')
                .ok_or_else(|| ColorizeError::MalformedRule {
                    line: idx + 1,
                    text: line.to_string(),
                })?;
            set.push(Rule::new(name, pattern.trim())?);
        }
        Ok(set)
    }

    /// Append a rule at the lowest priority
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Iterate rules in priority order
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
