//! Control-symbol markers and the resolver that applies them to raw replacement text.
//!
//! A marker is a percent sign, a backslash and a one-letter code. The spellings are
//! stored verbatim in snippet definition files, so they must stay byte-compatible.

use tracing::trace;

use crate::snippet::{Rhs, RhsInfo};

const MARKER_PREFIX: &str = "%\\";
const TOKEN_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Newline,
    Tab,
    Space,
    CursorEnd,
}

impl Symbol {
    pub const ALL: [Symbol; 4] = [
        Symbol::Newline,
        Symbol::Tab,
        Symbol::Space,
        Symbol::CursorEnd,
    ];

    /// The literal marker as it appears in snippet source.
    pub fn token(self) -> &'static str {
        match self {
            Symbol::Newline => "%\\n",
            Symbol::Tab => "%\\t",
            Symbol::Space => "%\\s",
            Symbol::CursorEnd => "%\\e",
        }
    }

    /// The character a marker expands to, or `None` for markers that only carry metadata.
    pub fn replacement(self) -> Option<char> {
        match self {
            Symbol::Newline => Some('\n'),
            Symbol::Tab => Some('\t'),
            Symbol::Space => Some(' '),
            Symbol::CursorEnd => None,
        }
    }

    fn from_code(code: u8) -> Option<Self> {
        match code {
            b'n' => Some(Symbol::Newline),
            b't' => Some(Symbol::Tab),
            b's' => Some(Symbol::Space),
            b'e' => Some(Symbol::CursorEnd),
            _ => None,
        }
    }

    /// Recognize a marker at the very start of `text`.
    pub fn parse_prefix(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        if bytes.len() < TOKEN_LEN || !text.starts_with(MARKER_PREFIX) {
            return None;
        }
        Self::from_code(bytes[2])
    }

    /// Resolve every marker in `source`.
    ///
    /// Text is scanned once, left to right, and markers are substituted in place.
    /// When several cursor markers are present the one nearest the end of the text
    /// decides the caret; the others are dropped without effect. Text that contains
    /// no recognizable marker passes through unchanged, so this never fails.
    pub fn replace_symbols_on_parse(source: &str) -> Rhs {
        let mut data = String::with_capacity(source.len());
        let mut out_chars = 0usize;
        let mut cursor_at: Option<usize> = None;
        let mut rest = source;

        while let Some(at) = rest.find(MARKER_PREFIX) {
            let literal = &rest[..at];
            data.push_str(literal);
            out_chars += literal.chars().count();

            let tail = &rest[at..];
            match Self::parse_prefix(tail) {
                Some(symbol) => {
                    match symbol.replacement() {
                        Some(ch) => {
                            data.push(ch);
                            out_chars += 1;
                        }
                        None => cursor_at = Some(out_chars),
                    }
                    rest = &tail[TOKEN_LEN..];
                }
                None => {
                    // Not a marker: keep the percent sign and rescan after it.
                    data.push('%');
                    out_chars += 1;
                    rest = &tail[1..];
                }
            }
        }

        data.push_str(rest);
        out_chars += rest.chars().count();

        let info = RhsInfo {
            has_newline: data.contains('\n'),
            cursor_end: cursor_at.map_or(0, |at| out_chars - at),
        };
        trace!(
            source_len = source.len(),
            has_newline = info.has_newline,
            cursor_end = info.cursor_end,
            "resolved snippet symbols"
        );

        Rhs { data, info }
    }

    /// Turn literal newlines and tabs back into their markers.
    pub fn escape_symbols(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                '\n' => escaped.push_str(Symbol::Newline.token()),
                '\t' => escaped.push_str(Symbol::Tab.token()),
                _ => escaped.push(ch),
            }
        }
        escaped
    }
}
