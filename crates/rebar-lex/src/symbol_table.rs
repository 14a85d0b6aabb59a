//! Static mapping of plaintext lexemes to [`Symbol`] values, with an
//! identifier-safe flag for keyword-like symbols (§4.3).

use rustc_hash::FxHashMap;

use crate::symbol::Symbol;

/// One entry in a [`SymbolTable`].
#[derive(Debug, Clone, Copy)]
pub struct SymbolEntry {
    pub lexeme: &'static str,
    pub symbol: Symbol,
    /// True for lexemes composed entirely of identifier-legal characters
    /// (`true`, `false`). Such a lexeme must not be recognized as a symbol
    /// when it is a prefix of a longer identifier (§4.4 step 4).
    pub identifier_safe: bool,
}

/// A data-defined lexeme → symbol table, with longest-match lookup.
pub struct SymbolTable {
    by_lexeme: FxHashMap<&'static str, SymbolEntry>,
    max_len: usize,
}

impl SymbolTable {
    /// Builds a table from an explicit entry list, deriving `max_len`.
    pub fn new(entries: Vec<SymbolEntry>) -> Self {
        let max_len = entries.iter().map(|e| e.lexeme.len()).max().unwrap_or(0);
        let by_lexeme = entries.into_iter().map(|e| (e.lexeme, e)).collect();
        Self { by_lexeme, max_len }
    }

    /// The length, in bytes, of the table's longest lexeme.
    pub fn max_symbol_length(&self) -> usize {
        self.max_len
    }

    /// Exact lookup of a candidate lexeme.
    pub fn lookup(&self, candidate: &str) -> Option<&SymbolEntry> {
        self.by_lexeme.get(candidate)
    }
}

/// The default Rebar symbol table (§4.3, §6).
pub fn default_symbol_table() -> SymbolTable {
    use Symbol::*;

    fn e(lexeme: &'static str, symbol: Symbol) -> SymbolEntry {
        SymbolEntry { lexeme, symbol, identifier_safe: false }
    }

    fn identifier_safe(lexeme: &'static str, symbol: Symbol) -> SymbolEntry {
        SymbolEntry { lexeme, symbol, identifier_safe: true }
    }

    SymbolTable::new(vec![
        e("~", Tilda),
        e("!", Exclamation),
        e("!=", ExclamationEquals),
        e("@", At),
        e("#", Pound),
        e("$", Dollar),
        e("%", Percent),
        e("^", Carrot),
        e("^=", CarrotEquals),
        e("&", Ampersand),
        e("&=", AmpersandEquals),
        e("&&", DoubleAmpersand),
        e("&&=", DoubleAmpersandEquals),
        e("*", Star),
        e("*=", StarEquals),
        e("(", ParenthesisLeft),
        e(")", ParenthesisRight),
        e("[", BracketLeft),
        e("]", BracketRight),
        e("{", BraceLeft),
        e("}", BraceRight),
        e("-", Minus),
        e("-=", MinusEquals),
        e("--", DoubleMinus),
        e("+", Plus),
        e("+=", PlusEquals),
        e("++", DoublePlus),
        e("=", Equals),
        e("==", DoubleEqual),
        e("/", Slash),
        e("/=", SlashEquals),
        e(":", Colon),
        e(";", Semicolon),
        e(",", Comma),
        e("<", CarrotLeft),
        e(">", CarrotRight),
        e("|", Pipe),
        e("|=", PipeEquals),
        e("||", DoublePipe),
        e("||=", DoublePipeEquals),
        identifier_safe("true", BooleanTrue),
        identifier_safe("false", BooleanFalse),
        e("?", Question),
        e(".", Period),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_match_beats_shortest() {
        let table = default_symbol_table();
        assert!(table.lookup("&&=").is_some());
        assert!(table.lookup("&&").is_some());
        assert!(table.lookup("&").is_some());
        assert_eq!(table.max_symbol_length(), 3);
    }

    #[test]
    fn identifier_safe_flag_set_only_for_keywords() {
        let table = default_symbol_table();
        assert!(table.lookup("true").unwrap().identifier_safe);
        assert!(table.lookup("false").unwrap().identifier_safe);
        assert!(!table.lookup("+").unwrap().identifier_safe);
    }
}
