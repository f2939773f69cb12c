//! Snippet data model: triggers, resolved replacements and the four snippet shapes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SnipexError;

/// The trigger a user types to invoke an expansion. No normalization happens at this layer.
pub type Lhs = String;

/// Metadata produced alongside resolved replacement text.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RhsInfo {
    pub has_newline: bool,
    /// Characters between the caret and the end of the inserted text.
    pub cursor_end: usize,
}

/// A resolved replacement: literal text with every control symbol applied.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Rhs {
    pub data: String,
    pub info: RhsInfo,
}

impl Rhs {
    /// Wrap text that needs no resolution.
    pub fn plain(data: impl Into<String>) -> Self {
        let data = data.into();
        let has_newline = data.contains('\n');
        Self {
            data,
            info: RhsInfo {
                has_newline,
                cursor_end: 0,
            },
        }
    }

    /// Length of `data` in characters.
    pub fn char_len(&self) -> usize {
        self.data.chars().count()
    }

    /// Caret position counted from the start of `data`.
    pub fn cursor_offset(&self) -> usize {
        self.char_len().saturating_sub(self.info.cursor_end)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub lhs: Lhs,
    pub rhs: Rhs,
}

impl Snippet {
    pub fn new(lhs: impl Into<Lhs>, rhs: Rhs) -> Self {
        Self {
            lhs: lhs.into(),
            rhs,
        }
    }
}

/// Structural shape of a snippet definition.
///
/// The discriminants are persisted by ordinal, so they must never be renumbered.
/// Adding a variant requires a migration note for stored definitions.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
#[allow(clippy::upper_case_acronyms)]
pub enum SnippetType {
    /// Single-line trigger, single replacement.
    SLSR = 0,
    /// Single-line trigger, multiple replacement candidates.
    SLMR = 1,
    /// Multi-line trigger, single replacement.
    MLSR = 2,
    /// Multi-line trigger, multiple replacement candidates.
    MLMR = 3,
}

impl SnippetType {
    pub const ALL: [SnippetType; 4] = [
        SnippetType::SLSR,
        SnippetType::SLMR,
        SnippetType::MLSR,
        SnippetType::MLMR,
    ];

    pub fn from_shape(multi_line: bool, multiple_replacements: bool) -> Self {
        match (multi_line, multiple_replacements) {
            (false, false) => SnippetType::SLSR,
            (false, true) => SnippetType::SLMR,
            (true, false) => SnippetType::MLSR,
            (true, true) => SnippetType::MLMR,
        }
    }

    /// Classify a definition from its raw trigger source and the number of
    /// replacement candidates attached to it.
    pub fn classify(trigger_source: &str, candidates: usize) -> Self {
        Self::from_shape(trigger_source.contains('\n'), candidates > 1)
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            SnippetType::SLSR => "SLSR",
            SnippetType::SLMR => "SLMR",
            SnippetType::MLSR => "MLSR",
            SnippetType::MLMR => "MLMR",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SnippetType::SLSR => "Single Line Single Replacement",
            SnippetType::SLMR => "Single Line Multiple Replacement",
            SnippetType::MLSR => "Multi Line Single Replacement",
            SnippetType::MLMR => "Multi Line Multiple Replacement",
        }
    }

    pub fn is_multi_line(self) -> bool {
        matches!(self, SnippetType::MLSR | SnippetType::MLMR)
    }

    pub fn has_multiple_replacements(self) -> bool {
        matches!(self, SnippetType::SLMR | SnippetType::MLMR)
    }
}

impl From<SnippetType> for u8 {
    fn from(kind: SnippetType) -> Self {
        kind.ordinal()
    }
}

impl TryFrom<u8> for SnippetType {
    type Error = SnipexError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        SnippetType::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(SnipexError::InvalidSnippetType(value))
    }
}

impl fmt::Display for SnippetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SnippetType {
    type Err = SnipexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SnippetType::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SnipexError::Other(format!("Unknown snippet type '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn ordinals_are_stable() {
        assert_eq!(SnippetType::SLSR.ordinal(), 0);
        assert_eq!(SnippetType::SLMR.ordinal(), 1);
        assert_eq!(SnippetType::MLSR.ordinal(), 2);
        assert_eq!(SnippetType::MLMR.ordinal(), 3);
    }

    #[test]
    fn ordinals_are_distinct() {
        let values: HashSet<u8> = SnippetType::ALL.iter().map(|k| k.ordinal()).collect();
        assert_eq!(values.len(), 4);
    }

    #[rstest]
    #[case(0, "SLSR", "Single Line Single Replacement")]
    #[case(1, "SLMR", "Single Line Multiple Replacement")]
    #[case(2, "MLSR", "Multi Line Single Replacement")]
    #[case(3, "MLMR", "Multi Line Multiple Replacement")]
    fn ordinal_maps_to_name(#[case] ordinal: u8, #[case] name: &str, #[case] description: &str) {
        let kind = SnippetType::try_from(ordinal).unwrap();
        assert_eq!(kind.name(), name);
        assert_eq!(kind.to_string(), name);
        assert_eq!(kind.description(), description);
        assert_eq!(name.parse::<SnippetType>().unwrap(), kind);
    }

    #[test]
    fn unknown_ordinal_is_rejected() {
        assert!(matches!(
            SnippetType::try_from(4),
            Err(SnipexError::InvalidSnippetType(4))
        ));
    }

    #[rstest]
    #[case("sig", 1, SnippetType::SLSR)]
    #[case("sig", 3, SnippetType::SLMR)]
    #[case("first\nsecond", 1, SnippetType::MLSR)]
    #[case("first\nsecond", 2, SnippetType::MLMR)]
    #[case("", 0, SnippetType::SLSR)]
    fn classify_by_shape(#[case] trigger: &str, #[case] candidates: usize, #[case] expected: SnippetType) {
        let kind = SnippetType::classify(trigger, candidates);
        assert_eq!(kind, expected);
        assert_eq!(kind.is_multi_line(), trigger.contains('\n'));
        assert_eq!(kind.has_multiple_replacements(), candidates > 1);
    }

    #[test]
    fn serializes_by_ordinal() {
        let json = serde_json::to_string(&SnippetType::MLSR).unwrap();
        assert_eq!(json, "2");

        let kind: SnippetType = serde_json::from_str("1").unwrap();
        assert_eq!(kind, SnippetType::SLMR);
        assert!(serde_json::from_str::<SnippetType>("9").is_err());
    }

    #[test]
    fn rhs_cursor_offset_counts_from_start() {
        let rhs = Rhs {
            data: "content with cursor".to_string(),
            info: RhsInfo {
                has_newline: false,
                cursor_end: 6,
            },
        };
        assert_eq!(rhs.char_len(), 19);
        assert_eq!(rhs.cursor_offset(), 13);
    }

    #[test]
    fn plain_rhs_detects_newlines() {
        let rhs = Rhs::plain("line1\nline2\nline3");
        assert!(rhs.info.has_newline);
        assert_eq!(rhs.info.cursor_end, 0);
        assert_eq!(rhs.data.split('\n').count(), 3);

        assert_eq!(Rhs::plain(""), Rhs::default());
    }

    #[test]
    fn snippet_pairs_trigger_and_replacement() {
        let snippet = Snippet::new(
            "complex",
            Rhs {
                data: "function test() {\n  return \"hello\";\n}".to_string(),
                info: RhsInfo {
                    has_newline: true,
                    cursor_end: 8,
                },
            },
        );

        assert_eq!(snippet.lhs, "complex");
        assert!(snippet.rhs.data.contains("function"));
        assert!(snippet.rhs.info.has_newline);
        assert_eq!(snippet.rhs.info.cursor_end, 8);
    }
}
