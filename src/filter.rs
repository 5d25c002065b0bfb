//! Shell-style wildcard matching for segment labels.
//!
//! Patterns use the familiar glob metacharacters: `*` matches any sequence
//! (including empty), `?` matches any single character, and `[...]` matches a
//! character class (`[!...]` negates it). A pattern without metacharacters
//! matches by exact equality. An unterminated `[` is treated as a literal
//! bracket.

use log::warn;
use regex::Regex;

/// A compiled wildcard pattern for filtering labels.
///
/// Compile once, match many times. Matching follows the conventions detection
/// pipelines expect: the pattern `"*"` matches every label, and an empty
/// label matches only the patterns `""` and `"*"`.
#[derive(Clone, Debug)]
pub struct LabelFilter {
    matcher: Matcher,
}

#[derive(Clone, Debug)]
enum Matcher {
    MatchAll,
    Literal(String),
    Pattern(Regex),
    MatchNone,
}

impl LabelFilter {
    /// Compiles a wildcard pattern.
    ///
    /// Compilation cannot fail for well-formed translations; if the regex
    /// engine rejects the translated pattern anyway, the filter matches
    /// nothing rather than panicking.
    pub fn new(pattern: &str) -> Self {
        if pattern == "*" {
            return Self {
                matcher: Matcher::MatchAll,
            };
        }
        if !pattern.chars().any(|c| matches!(c, '*' | '?' | '[')) {
            return Self {
                matcher: Matcher::Literal(pattern.to_string()),
            };
        }
        match Regex::new(&translate(pattern)) {
            Ok(re) => Self {
                matcher: Matcher::Pattern(re),
            },
            Err(err) => {
                warn!("label filter pattern {pattern:?} failed to compile: {err}");
                Self {
                    matcher: Matcher::MatchNone,
                }
            }
        }
    }

    /// Returns true if `label` matches the pattern.
    pub fn matches(&self, label: &str) -> bool {
        if matches!(self.matcher, Matcher::MatchAll) {
            return true;
        }
        // Empty labels only ever match the empty pattern (or "*", above).
        if label.is_empty() {
            return matches!(&self.matcher, Matcher::Literal(p) if p.is_empty());
        }
        match &self.matcher {
            Matcher::MatchAll => true,
            Matcher::Literal(pattern) => label == pattern,
            Matcher::Pattern(re) => re.is_match(label),
            Matcher::MatchNone => false,
        }
    }
}

/// Translates a wildcard pattern into an anchored regex.
fn translate(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    // (?s) so that `*` and `?` also match newlines, like fnmatch
    let mut re = String::with_capacity(pattern.len() + 8);
    re.push_str("(?s)^");

    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' => re.push_str(".*"),
            '?' => re.push('.'),
            '[' => {
                // Scan for the closing bracket. A leading `!` negates, and a
                // `]` right after `[` (or `[!`) is a literal class member.
                let mut j = i + 1;
                if j < chars.len() && chars[j] == '!' {
                    j += 1;
                }
                if j < chars.len() && chars[j] == ']' {
                    j += 1;
                }
                while j < chars.len() && chars[j] != ']' {
                    j += 1;
                }
                if j >= chars.len() {
                    // Unterminated class: literal bracket
                    re.push_str("\\[");
                } else {
                    re.push('[');
                    let mut k = i + 1;
                    if chars[k] == '!' {
                        re.push('^');
                        k += 1;
                    }
                    for &c in &chars[k..j] {
                        match c {
                            '\\' => re.push_str("\\\\"),
                            ']' => re.push_str("\\]"),
                            '^' => re.push_str("\\^"),
                            other => re.push(other),
                        }
                    }
                    re.push(']');
                    i = j;
                }
            }
            other => re.push_str(&regex::escape(&other.to_string())),
        }
        i += 1;
    }

    re.push('$');
    re
}
