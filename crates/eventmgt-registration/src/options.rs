//! Options of radio, checkbox and select fields.
//!
//! Editors configure options as one option per line, either `label` or
//! `label|value`. Single-line editors may type the literal marker `[\n]`
//! instead of a line break.

use serde::{Deserialize, Serialize};

/// Literal marker accepted in place of a real line break.
pub const LINE_BREAK_MARKER: &str = "[\\n]";

/// One selectable option of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Text shown to the registrant.
    pub label: String,
    /// Submitted value.
    pub value: String,
    /// `1` if the option is pre-selected, `0` otherwise.
    pub selected: u8,
}

impl SelectOption {
    /// Returns `true` if the option is pre-selected.
    pub const fn is_selected(&self) -> bool {
        self.selected == 1
    }
}

/// Parses option settings into an ordered list of options.
///
/// Empty lines are skipped. A line without `|` uses its label as value.
/// An option is pre-selected when its value equals `default_value` exactly.
///
/// # Examples
///
/// ```
/// use eventmgt_registration::options::parse_options;
///
/// let options = parse_options("Yes|1\nNo|0", "1");
/// assert_eq!(options.len(), 2);
/// assert_eq!(options[0].label, "Yes");
/// assert!(options[0].is_selected());
/// assert!(!options[1].is_selected());
/// ```
pub fn parse_options(settings: &str, default_value: &str) -> Vec<SelectOption> {
    settings
        .replace(LINE_BREAK_MARKER, "\n")
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let mut segments = line.split('|').map(str::trim);
            // `split` always yields at least one segment.
            let label = segments.next().unwrap_or_default();
            let value = segments.next().unwrap_or(label);
            SelectOption {
                label: label.to_string(),
                value: value.to_string(),
                selected: u8::from(value == default_value),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(label: &str, value: &str, selected: u8) -> SelectOption {
        SelectOption {
            label: label.into(),
            value: value.into(),
            selected,
        }
    }

    #[test]
    fn test_label_value_pairs_with_default() {
        let options = parse_options("Yes|1\nNo|0", "1");
        assert_eq!(options, vec![option("Yes", "1", 1), option("No", "0", 0)]);
    }

    #[test]
    fn test_label_only_uses_label_as_value() {
        let options = parse_options("Red\nBlue", "");
        assert_eq!(options, vec![option("Red", "Red", 0), option("Blue", "Blue", 0)]);
    }

    #[test]
    fn test_empty_settings() {
        assert!(parse_options("", "x").is_empty());
        assert!(parse_options(" \n\n  \r\n", "").is_empty());
    }

    #[test]
    fn test_line_break_marker() {
        let options = parse_options("Small[\\n]Medium|m[\\n]Large", "m");
        assert_eq!(
            options,
            vec![
                option("Small", "Small", 0),
                option("Medium", "m", 1),
                option("Large", "Large", 0),
            ]
        );
    }

    #[test]
    fn test_whitespace_and_crlf_trimmed() {
        let options = parse_options("  Yes  |  y \r\n\r\n No | n\r\n", "y");
        assert_eq!(options, vec![option("Yes", "y", 1), option("No", "n", 0)]);
    }

    #[test]
    fn test_empty_value_segment_is_kept() {
        let options = parse_options("None|", "");
        assert_eq!(options, vec![option("None", "", 1)]);
    }

    #[test]
    fn test_extra_segments_ignored() {
        let options = parse_options("A|a|ignored", "a");
        assert_eq!(options, vec![option("A", "a", 1)]);
    }

    #[test]
    fn test_default_matches_value_not_label() {
        let options = parse_options("Yes|1", "Yes");
        assert!(!options[0].is_selected());
    }

    #[test]
    fn test_multiple_options_share_default() {
        let options = parse_options("A|x\nB|x", "x");
        assert!(options.iter().all(SelectOption::is_selected));
    }
}
