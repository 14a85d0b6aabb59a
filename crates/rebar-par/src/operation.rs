//! The closed enumeration of parsed constructs (§3).
//!
//! Grounded verbatim on `original_source/include/rebar/semantic_analysis/
//! operators.hpp`'s `enum class operation` and `operation_as_string`: every
//! member the original declares is present here, in the same grouping. One
//! member is added beyond the original — `Sequence` — since §3 names
//! `sequence` explicitly in its closed enumeration (variadic comma lists)
//! and the original source predates that construct.

/// A parsed construct: the tag of an [`crate::operation_tree::OperationTree`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Null,

    Function,
    Scope,
    Conditional,
    PreconditionalLoop,
    PostconditionalLoop,
    ConditionalInitializationLoop,

    Assignment,

    Addition,
    AdditionAssignment,
    Subtraction,
    SubtractionAssignment,
    Multiplication,
    MultiplicationAssignment,
    Division,
    DivisionAssignment,
    Exponentiation,
    ExponentiationAssignment,
    Modulo,
    ModuloAssignment,

    BitwiseNot,
    BitwiseAnd,
    BitwiseAndAssignment,
    BitwiseOr,
    BitwiseOrAssignment,
    BitwiseXor,
    BitwiseXorAssignment,

    LogicalNot,
    LogicalAnd,
    LogicalAndAssignment,
    LogicalOr,
    LogicalOrAssignment,
    LogicalXor,
    LogicalXorAssignment,

    Equality,
    EqualityAssignment,

    Lesser,
    LesserAssignment,

    LesserEquality,
    LesserEqualityAssignment,

    Greater,
    GreaterAssignment,

    GreaterEquality,
    GreaterEqualityAssignment,

    PrefixIncrement,
    PostfixIncrement,

    PrefixDecrement,
    PostfixDecrement,

    Ternary,

    Call,
    Index,
    DotIndex,
    Length,

    /// Variadic comma sequence. Not present in the original `operation` enum;
    /// added per §3's closed enumeration naming `sequence` explicitly.
    Sequence,
}

impl Operation {
    /// The fixed external spelling for this operation (§3, §6).
    pub fn as_str(self) -> &'static str {
        use Operation::*;
        match self {
            Null => "null",

            Function => "function",
            Scope => "scope",
            Conditional => "conditional",
            PreconditionalLoop => "preconditional_loop",
            PostconditionalLoop => "postconditional_loop",
            ConditionalInitializationLoop => "conditional_initialization_loop",

            Assignment => "assignment",

            Addition => "addition",
            AdditionAssignment => "addition_assignment",
            Subtraction => "subtraction",
            SubtractionAssignment => "subtraction_assignment",
            Multiplication => "multiplication",
            MultiplicationAssignment => "multiplication_assignment",
            Division => "division",
            DivisionAssignment => "division_assignment",
            Exponentiation => "exponentiation",
            ExponentiationAssignment => "exponentiation_assignment",
            Modulo => "modulo",
            ModuloAssignment => "modulo_assignment",

            BitwiseNot => "bitwise_not",
            BitwiseAnd => "bitwise_and",
            BitwiseAndAssignment => "bitwise_and_assignment",
            BitwiseOr => "bitwise_or",
            BitwiseOrAssignment => "bitwise_or_assignment",
            BitwiseXor => "bitwise_xor",
            BitwiseXorAssignment => "bitwise_xor_assignment",

            LogicalNot => "logical_not",
            LogicalAnd => "logical_and",
            LogicalAndAssignment => "logical_and_assignment",
            LogicalOr => "logical_or",
            LogicalOrAssignment => "logical_or_assignment",
            LogicalXor => "logical_xor",
            LogicalXorAssignment => "logical_xor_assignment",

            Equality => "equality",
            EqualityAssignment => "equality_assignment",

            Lesser => "lesser",
            LesserAssignment => "lesser_assignment",

            LesserEquality => "lesser_equality",
            LesserEqualityAssignment => "lesser_equality_assignment",

            Greater => "greater",
            GreaterAssignment => "greater_assignment",

            GreaterEquality => "greater_equality",
            GreaterEqualityAssignment => "greater_equality_assignment",

            PrefixIncrement => "prefix_increment",
            PostfixIncrement => "postfix_increment",

            PrefixDecrement => "prefix_decrement",
            PostfixDecrement => "postfix_decrement",

            Ternary => "ternary",

            Call => "call",
            Index => "index",
            DotIndex => "dot_index",
            Length => "length",

            Sequence => "sequence",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printed_forms_match_seed_scenarios() {
        assert_eq!(Operation::Addition.as_str(), "addition");
        assert_eq!(Operation::PostfixIncrement.as_str(), "postfix_increment");
        assert_eq!(Operation::PrefixIncrement.as_str(), "prefix_increment");
        assert_eq!(Operation::Index.as_str(), "index");
        assert_eq!(Operation::Call.as_str(), "call");
        assert_eq!(Operation::DotIndex.as_str(), "dot_index");
        assert_eq!(Operation::Sequence.as_str(), "sequence");
        assert_eq!(Operation::Scope.as_str(), "scope");
        assert_eq!(Operation::Assignment.as_str(), "assignment");
    }
}
