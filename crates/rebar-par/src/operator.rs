//! The operator registry (§4.6).
//!
//! Grounded verbatim in shape on `original_source/include/rebar/
//! semantic_analysis/operators.hpp`'s `operator_info`/`operator_type`/
//! `operator_association`/`operator_registry`. `default_operator_registry`
//! wires every row spec.md §4.6 pins, plus the reserved operators §4.6 says
//! "real implementations may extend it" with — see `DESIGN.md` for the full
//! table and the reasoning behind each filled gap.

use rebar_lex::Symbol;

use crate::operation::Operation;

/// An operator's associativity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Association {
    Left,
    Right,
}

/// How many operands an operator takes, and in what shape (§4.8).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// 1 operand.
    Unary,
    /// 2 operands.
    Binary,
    /// 2 operands (outer + enclosed), delimited by `secondary`.
    BinaryEnclose,
    /// 3 operands, with `secondary` marking the third's start.
    Trinary,
    /// ≥1 operands, split at every top-level occurrence of `identifier`.
    Variadic,
}

/// One entry in the operator registry.
#[derive(Debug, Clone, Copy)]
pub struct OperatorDescriptor {
    pub identifier: Symbol,
    pub secondary: Option<Symbol>,
    pub mapped_operation: Operation,
    pub shape: Shape,
    pub association: Association,
    pub precedence: u32,
}

/// An ordered list of operator descriptors. Multiple descriptors may share
/// an identifier (e.g. prefix vs. postfix `++`).
pub struct OperatorRegistry {
    descriptors: Vec<OperatorDescriptor>,
}

impl OperatorRegistry {
    pub fn new(descriptors: Vec<OperatorDescriptor>) -> Self {
        Self { descriptors }
    }

    /// All descriptors whose `identifier` matches `symbol`.
    pub fn matching(&self, symbol: Symbol) -> impl Iterator<Item = &OperatorDescriptor> {
        self.descriptors.iter().filter(move |d| d.identifier == symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OperatorDescriptor> {
        self.descriptors.iter()
    }
}

/// The default Rebar operator registry (§4.6 plus the Part B supplement
/// resolving its reserved-operator gaps). See `DESIGN.md` for the full
/// symbol/operation/precedence table and per-row grounding.
pub fn default_operator_registry() -> OperatorRegistry {
    use Association::*;
    use Operation::*;
    use Shape::*;
    use Symbol::*;

    fn d(
        identifier: Symbol,
        mapped_operation: Operation,
        shape: Shape,
        association: Association,
        precedence: u32,
    ) -> OperatorDescriptor {
        OperatorDescriptor { identifier, secondary: None, mapped_operation, shape, association, precedence }
    }

    fn enclosed(
        identifier: Symbol,
        secondary: Symbol,
        mapped_operation: Operation,
        shape: Shape,
        association: Association,
        precedence: u32,
    ) -> OperatorDescriptor {
        OperatorDescriptor { identifier, secondary: Some(secondary), mapped_operation, shape, association, precedence }
    }

    OperatorRegistry::new(vec![
        d(Equals, Assignment, Binary, Right, 1),
        d(PlusEquals, AdditionAssignment, Binary, Right, 1),
        d(MinusEquals, SubtractionAssignment, Binary, Right, 1),
        d(StarEquals, MultiplicationAssignment, Binary, Right, 1),
        d(SlashEquals, DivisionAssignment, Binary, Right, 1),
        d(CarrotEquals, ExponentiationAssignment, Binary, Right, 1),
        d(AmpersandEquals, BitwiseAndAssignment, Binary, Right, 1),
        d(PipeEquals, BitwiseOrAssignment, Binary, Right, 1),
        d(DoubleAmpersandEquals, LogicalAndAssignment, Binary, Right, 1),
        d(DoublePipeEquals, LogicalOrAssignment, Binary, Right, 1),
        d(Comma, Sequence, Variadic, Left, 2),
        enclosed(Question, Colon, Ternary, Trinary, Right, 3),
        d(DoublePipe, LogicalOr, Binary, Left, 4),
        d(DoubleAmpersand, LogicalAnd, Binary, Left, 5),
        d(Plus, Addition, Binary, Left, 6),
        d(Minus, Subtraction, Binary, Left, 6),
        d(Star, Multiplication, Binary, Left, 7),
        d(Slash, Division, Binary, Left, 7),
        d(Percent, Modulo, Binary, Left, 7),
        d(Pipe, BitwiseOr, Binary, Left, 8),
        d(Ampersand, BitwiseAnd, Binary, Left, 8),
        d(Carrot, Exponentiation, Binary, Right, 8),
        d(DoubleEqual, Equality, Binary, Left, 9),
        // `CarrotLeft`/`CarrotRight` (`<`/`>`) are deliberately not wired to
        // `Lesser`/`Greater` here: `bracket::bracket_delta` already treats
        // both as bracket-nesting delimiters per §4.9's "level rises on
        // `{ [ ( <` and falls on `} ] ) >`", and a registry entry that reads
        // them as comparison operators would desync the level counter for
        // the rest of the span the moment either is actually used (the
        // level scan would never return to zero, so `parse_block_scope`
        // and `select_pivot` would stop finding top-level tokens). Neither
        // is in §4.6's pinned table nor required by any seed scenario.
        d(Exclamation, LogicalNot, Unary, Right, 10),
        d(Tilda, BitwiseNot, Unary, Right, 10),
        d(Pound, Length, Unary, Right, 10),
        d(DoublePlus, PrefixIncrement, Unary, Right, 11),
        d(DoublePlus, PostfixIncrement, Unary, Left, 11),
        d(DoubleMinus, PrefixDecrement, Unary, Right, 11),
        d(DoubleMinus, PostfixDecrement, Unary, Left, 11),
        enclosed(BracketLeft, BracketRight, Index, BinaryEnclose, Left, 12),
        enclosed(ParenthesisLeft, ParenthesisRight, Call, BinaryEnclose, Left, 13),
        d(Period, DotIndex, Binary, Left, 14),
    ])
}
