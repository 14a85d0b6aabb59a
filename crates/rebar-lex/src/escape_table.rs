//! Static mapping from an escape sequence's lead byte to a handler
//! producing `(replacement, bytes_consumed)` (§4.3).

use std::borrow::Cow;

use rustc_hash::FxHashMap;

/// A handler for one escape sequence.
///
/// `trailing` is the string starting at the escape sequence, beginning
/// after the leading backslash. The return value is the replacement text
/// and the number of bytes of `trailing` the escape consumed.
///
/// The replacement is a string rather than a single byte so the same
/// handler shape can support multi-byte or Unicode escapes later without
/// an API change (preserved from the original escape-sequence design).
pub type EscapeHandler = fn(trailing: &str) -> (Cow<'static, str>, usize);

/// A data-defined escape-sequence table.
pub struct EscapeTable {
    handlers: FxHashMap<u8, EscapeHandler>,
}

impl EscapeTable {
    pub fn new(handlers: Vec<(u8, EscapeHandler)>) -> Self {
        Self { handlers: handlers.into_iter().collect() }
    }

    /// Looks up the handler for a given lead byte (the byte immediately
    /// after `\`).
    pub fn lookup(&self, lead: u8) -> Option<EscapeHandler> {
        self.handlers.get(&lead).copied()
    }
}

fn quote(_trailing: &str) -> (Cow<'static, str>, usize) {
    (Cow::Borrowed("\""), 1)
}

fn backslash(_trailing: &str) -> (Cow<'static, str>, usize) {
    (Cow::Borrowed("\\"), 1)
}

fn newline(_trailing: &str) -> (Cow<'static, str>, usize) {
    (Cow::Borrowed("\n"), 1)
}

fn tab(_trailing: &str) -> (Cow<'static, str>, usize) {
    (Cow::Borrowed("\t"), 1)
}

/// The default escape table: `\"`, `\\`, `\n`, `\t` (§4.3).
pub fn default_escape_table() -> EscapeTable {
    EscapeTable::new(vec![
        (b'"', quote as EscapeHandler),
        (b'\\', backslash as EscapeHandler),
        (b'n', newline as EscapeHandler),
        (b't', tab as EscapeHandler),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_escapes_consume_one_byte() {
        let table = default_escape_table();
        let (replacement, consumed) = (table.lookup(b'n').unwrap())("");
        assert_eq!(replacement.as_ref(), "\n");
        assert_eq!(consumed, 1);
    }

    #[test]
    fn unknown_lead_has_no_handler() {
        let table = default_escape_table();
        assert!(table.lookup(b'x').is_none());
    }
}
