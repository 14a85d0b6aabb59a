//! The lexical analyzer: scans source bytes into tokens (§4.4).
//!
//! Grounded on `original_source/source/lexical_analysis/lexical_analyzer.cpp`'s
//! scanning loop (whitespace skip, string-with-escape-flag, digit-separator-
//! aware numeric, longest-match symbol with the identifier-safe guard,
//! identifier, tolerant fallback) — rewritten as a data-driven scan over a
//! [`SymbolTable`]/[`EscapeTable`] pair rather than the original's hardcoded
//! per-character-class dispatch, since this crate's symbol table is itself
//! data (§4.3) rather than a fixed `std::unordered_map` built once at
//! startup. The module split mirrors `faxc-lex`'s `cursor.rs` +
//! `lexer/*.rs` file layout, even though the dispatch logic had to change.

use rebar_util::Engine;

use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::escape_table::EscapeTable;
use crate::lexical_unit::LexicalUnit;
use crate::numeric::{parse_integer, parse_number};
use crate::symbol::Symbol;
use crate::symbol_table::SymbolTable;
use crate::token::Token;

fn is_identifier_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_identifier_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Scans source text into tokens, using a symbol table, an escape table, and
/// a string engine to intern identifiers and string literals.
pub struct LexicalAnalyzer<'a> {
    symbol_table: &'a SymbolTable,
    escape_table: &'a EscapeTable,
    string_engine: &'a Engine,
}

impl<'a> LexicalAnalyzer<'a> {
    pub fn new(
        symbol_table: &'a SymbolTable,
        escape_table: &'a EscapeTable,
        string_engine: &'a Engine,
    ) -> Self {
        Self { symbol_table, escape_table, string_engine }
    }

    /// Scans `unit`'s plaintext, pushing every produced token (§4.4).
    pub fn perform_analysis(&self, unit: &mut LexicalUnit) -> LexResult<()> {
        let source = unit.plaintext().to_string();
        let mut cursor = Cursor::new(&source);

        while !cursor.is_at_end() {
            let current = cursor.current_byte().expect("checked is_at_end above");

            // 1. Whitespace.
            if current == b' ' || current == b'\t' || current == b'\n' || current == b'\r' {
                cursor.advance();
                continue;
            }

            // 2. String literal.
            if current == b'"' {
                let start = cursor.position();
                cursor.advance();
                let inner_start = cursor.position();
                let mut has_escape = false;

                loop {
                    match cursor.current_byte() {
                        None => {
                            return Err(LexError::UnterminatedStringLiteral { offset: start });
                        }
                        Some(b'"') => break,
                        Some(b'\\') => {
                            has_escape = true;
                            cursor.advance();
                            if cursor.is_at_end() {
                                return Err(LexError::InvalidEscapeSequence { offset: cursor.position() });
                            }
                            cursor.advance();
                        }
                        Some(_) => cursor.advance(),
                    }
                }

                let raw = cursor.slice_from(inner_start);
                cursor.advance(); // past closing quote

                let processed = if has_escape {
                    self.process_string(raw.as_ref())?
                } else {
                    raw.into_owned()
                };
                let handle = self.string_engine.intern(&processed);
                unit.push_token(Token::String(handle), start);
                continue;
            }

            // 3. Numeric literal.
            if current.is_ascii_digit() {
                let start = cursor.position();
                let mut floating_point = false;
                let mut has_separators = false;

                loop {
                    match cursor.current_byte() {
                        Some(b) if b.is_ascii_digit() => cursor.advance(),
                        Some(b'.') => {
                            floating_point = true;
                            cursor.advance();
                        }
                        Some(b'\'') => {
                            has_separators = true;
                            cursor.advance();
                        }
                        _ => break,
                    }
                }

                let text = cursor.slice_from(start);
                if floating_point {
                    let value = parse_number(text.as_ref(), has_separators, start)?;
                    unit.push_token(Token::Number(value), start);
                } else {
                    let value = parse_integer(text.as_ref(), has_separators, start)?;
                    unit.push_token(Token::Integer(value), start);
                }
                continue;
            }

            // 4. Longest-match symbol.
            if let Some((symbol, identifier_safe, matched_len)) = self.longest_symbol_match(&cursor) {
                let following = cursor.peek_byte(matched_len);
                let blocked = identifier_safe
                    && following.map(is_identifier_continue).unwrap_or(false);

                if !blocked {
                    let start = cursor.position();
                    cursor.advance_n(matched_len);
                    unit.push_token(Token::Symbol(symbol), start);
                    continue;
                }
            }

            // 5. Identifier.
            if is_identifier_start(current) {
                let start = cursor.position();
                cursor.advance();
                while cursor.current_byte().map(is_identifier_continue).unwrap_or(false) {
                    cursor.advance();
                }
                let text = cursor.slice_from(start);
                let handle = self.string_engine.intern(text.as_ref());
                unit.push_token(Token::Identifier(handle), start);
                continue;
            }

            // 6. Tolerant fallback: advance past an unrecognized byte.
            cursor.advance();
        }

        Ok(())
    }

    /// Finds the longest symbol-table match at the cursor's current position,
    /// per §4.4 step 4: probe lengths `1..=max_symbol_length` and remember
    /// the longest that matches.
    fn longest_symbol_match(&self, cursor: &Cursor<'_>) -> Option<(Symbol, bool, usize)> {
        let mut best = None;
        for len in 1..=self.symbol_table.max_symbol_length() {
            let Some(candidate) = cursor.peek_str(len) else { continue };
            if let Some(entry) = self.symbol_table.lookup(candidate.as_ref()) {
                best = Some((entry.symbol, entry.identifier_safe, len));
            }
        }
        best
    }

    /// Processes a raw string literal's escape sequences (§4.4 `process_string`).
    ///
    /// Walks the raw literal copying spans between escapes; for each `\X`,
    /// invokes the escape table's handler for `X` on the remainder, emits the
    /// replacement, and advances by `consumed_count + 1` (the `+1` for `\`).
    pub fn process_string(&self, raw: &str) -> LexResult<String> {
        let mut result = String::with_capacity(raw.len());
        let mut cursor = Cursor::new(raw);
        let mut part_start = 0usize;

        while let Some(current) = cursor.current_byte() {
            if current == b'\\' {
                result.push_str(cursor.slice_from(part_start).as_ref());
                cursor.advance();
                let lead = match cursor.current_byte() {
                    Some(b) => b,
                    None => {
                        return Err(LexError::InvalidEscapeSequence { offset: cursor.position() })
                    }
                };
                let handler = self
                    .escape_table
                    .lookup(lead)
                    .ok_or(LexError::InvalidEscapeSequence { offset: cursor.position() })?;
                let trailing = cursor.remaining();
                let (replacement, consumed) = handler(trailing.as_ref());
                result.push_str(replacement.as_ref());
                cursor.advance_n(consumed);
                part_start = cursor.position();
                continue;
            }
            cursor.advance();
        }

        result.push_str(cursor.slice_from(part_start).as_ref());
        Ok(result)
    }
}
