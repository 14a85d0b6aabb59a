//! The embedding façade (§6): composes the string engine, lexical analyzer,
//! and semantic analyzer into one `Environment` type, the way
//! `faxc-drv`'s driver composes `faxc-lex`/`faxc-par`/… into one pipeline —
//! adapted to a library-only façade, since §6 rules out a CLI, config
//! files, environment variables, and persisted state for this repository.

mod error;

pub use error::{EnvironmentError, EnvironmentResult};
pub use rebar_lex::{LexError, LexicalUnit, Symbol, Token};
pub use rebar_par::{Operation, OperandSlot, OperationTree, ParseError, SemanticUnit};
pub use rebar_util::{Engine, EngineError, StringHandle};

use rebar_lex::{default_escape_table, default_symbol_table, EscapeTable, LexicalAnalyzer, SymbolTable};
use rebar_par::{default_operator_registry, OperatorRegistry, SemanticAnalyzer};

/// Aggregates every collaborator an embedder needs: a string engine, a
/// symbol table, an escape table, and an operator registry, each built with
/// the defaults described in §4.3/§4.6.
pub struct Environment {
    engine: Engine,
    symbol_table: SymbolTable,
    escape_table: EscapeTable,
    operator_registry: OperatorRegistry,
}

impl Environment {
    /// A new environment with the default symbol table, escape table, and
    /// operator registry, and a fresh string engine.
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
            symbol_table: default_symbol_table(),
            escape_table: default_escape_table(),
            operator_registry: default_operator_registry(),
        }
    }

    /// Interns `bytes`, returning a reference-counted handle (§4.1).
    pub fn str(&self, bytes: &str) -> StringHandle {
        self.engine.intern(bytes)
    }

    /// Scans `unit`'s plaintext into tokens (§4.4).
    pub fn perform_lexical_analysis(&self, unit: &mut LexicalUnit) -> EnvironmentResult<()> {
        let analyzer = LexicalAnalyzer::new(&self.symbol_table, &self.escape_table, &self.engine);
        analyzer.perform_analysis(unit).map_err(EnvironmentError::from)
    }

    /// Processes a raw string literal's escape sequences (§4.4).
    pub fn process_string(&self, raw: &str) -> EnvironmentResult<String> {
        let analyzer = LexicalAnalyzer::new(&self.symbol_table, &self.escape_table, &self.engine);
        analyzer.process_string(raw).map_err(EnvironmentError::from)
    }

    /// Parses `lexical_unit`'s tokens into `unit`'s root operation tree (§4.7).
    pub fn perform_semantic_analysis(
        &self,
        unit: &mut SemanticUnit,
        lexical_unit: &LexicalUnit,
    ) -> EnvironmentResult<()> {
        let analyzer = SemanticAnalyzer::new(&self.operator_registry);
        analyzer
            .perform_analysis(unit, lexical_unit.tokens())
            .map_err(EnvironmentError::from)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_then_parse_seed_scenario_one() {
        let env = Environment::new();
        let mut lexical_unit = LexicalUnit::new("3 + 4");
        env.perform_lexical_analysis(&mut lexical_unit).unwrap();

        let mut semantic_unit = SemanticUnit::new();
        env.perform_semantic_analysis(&mut semantic_unit, &lexical_unit).unwrap();

        assert_eq!(
            semantic_unit.root().to_string_compact(),
            "scope { addition { INTEGER (3), INTEGER (4), }, }"
        );
    }

    #[test]
    fn str_interns_through_the_shared_engine() {
        let env = Environment::new();
        let a = env.str("hello");
        let b = env.str("hello");
        assert_eq!(a, b);
    }
}
