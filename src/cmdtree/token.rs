//! # Tokenizer
//!
//! Turns a raw command line into the normalized token sequence the resolver
//! walks. Normalization is purely lexical:
//!
//! - the line is split on single-space boundaries;
//! - a merged short-option cluster (`-abc`) is expanded in place into one
//!   short token per character (`-a -b -c`), left to right;
//! - long options (`--name`) and plain parts pass through untouched.
//!
//! Expansion is stable: `"-abc x"` tokenizes to the same sequence as
//! `"-a -b -c x"`. A part of exactly `-` has nothing to expand and falls
//! through unchanged; the resolver rejects it later as an unknown alias.

/// Prefix marking a long option token (`--name`).
pub const LONG_OPTION_PREFIX: &str = "--";

/// Prefix marking a short option token (`-x`).
pub const SHORT_OPTION_PREFIX: &str = "-";

const PART_SEPARATOR: char = ' ';

/// Split a raw command line into normalized tokens.
pub fn tokenize(line: &str) -> Vec<String> {
    // Trailing separators produce empty parts that no name can ever match;
    // interior empty parts are kept and fail resolution instead.
    let mut parts: Vec<&str> = line.split(PART_SEPARATOR).collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }

    let mut tokens = Vec::new();

    for part in parts {
        if !part.starts_with(LONG_OPTION_PREFIX) && part.starts_with(SHORT_OPTION_PREFIX) {
            let rest = &part[SHORT_OPTION_PREFIX.len()..];
            if rest.chars().count() > 1 {
                // Merged cluster: one short token per character.
                for c in rest.chars() {
                    tokens.push(format!("{SHORT_OPTION_PREFIX}{c}"));
                }
            } else {
                tokens.push(part.to_string());
            }
        } else {
            tokens.push(part.to_string());
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_parts_pass_through() {
        assert_eq!(tokenize("add item"), vec!["add", "item"]);
    }

    #[test]
    fn long_options_are_kept_as_is() {
        assert_eq!(tokenize("add --value 10"), vec!["add", "--value", "10"]);
    }

    #[test]
    fn single_short_option_is_kept_as_is() {
        assert_eq!(tokenize("add -v 10"), vec!["add", "-v", "10"]);
    }

    #[test]
    fn merged_cluster_expands_left_to_right() {
        assert_eq!(tokenize("-abc x"), vec!["-a", "-b", "-c", "x"]);
    }

    #[test]
    fn cluster_expansion_matches_separate_shorts() {
        assert_eq!(tokenize("-abc x"), tokenize("-a -b -c x"));
    }

    #[test]
    fn lone_dash_falls_through() {
        assert_eq!(tokenize("do -"), vec!["do", "-"]);
    }

    #[test]
    fn long_prefix_wins_over_short_expansion() {
        // "--abc" must not be treated as a mergeable cluster.
        assert_eq!(tokenize("--abc"), vec!["--abc"]);
    }

    #[test]
    fn double_space_yields_empty_token() {
        // Single-space splitting keeps interior empty parts; the resolver
        // rejects them as unknown names.
        assert_eq!(tokenize("a  b"), vec!["a", "", "b"]);
    }

    #[test]
    fn trailing_spaces_are_dropped() {
        assert_eq!(tokenize("greet "), vec!["greet"]);
        assert_eq!(tokenize("add --value 10  "), vec!["add", "--value", "10"]);
    }

    #[test]
    fn blank_line_tokenizes_to_nothing() {
        assert_eq!(tokenize(""), Vec::<String>::new());
        assert_eq!(tokenize("   "), Vec::<String>::new());
    }
}
