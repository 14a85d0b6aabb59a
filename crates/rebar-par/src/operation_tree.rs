//! The operation tree (§3, §4.5).
//!
//! Grounded verbatim on `original_source/include/rebar/semantic_analysis/
//! operation_tree.hpp` and `operation_tree.cpp`: a tagged operation plus an
//! ordered list of operand slots, each either empty, a token, or a nested
//! tree; `set_operand` grows the operand vector with empty slots before
//! writing rather than only ever appending.

use rebar_lex::Token;

use crate::operation::Operation;

/// One operand slot: empty (the default, before `set_operand` writes it),
/// a leaf token, or a nested subtree.
///
/// The original's `operation_tree_node` is a `std::variant<nullptr_t, token,
/// unique_ptr<operation_tree>>`; `Empty` is the concrete representation of
/// its default-constructed `nullptr_t` state (§3: operand slots are
/// "default-initialized as null nodes").
#[derive(Debug, Clone, PartialEq)]
pub enum OperandSlot {
    Empty,
    Token(Token),
    Tree(Box<OperationTree>),
}

/// The type tag of an operand slot, mirroring the original's
/// `operation_tree_node_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandSlotType {
    Empty,
    Token,
    Tree,
}

/// A node with one [`Operation`] tag and an ordered list of operand slots.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationTree {
    operation: Operation,
    operands: Vec<OperandSlot>,
}

impl OperationTree {
    /// Constructs a node with the given operation and no operands.
    pub fn new(operation: Operation) -> Self {
        Self { operation, operands: Vec::new() }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn set_operation(&mut self, operation: Operation) {
        self.operation = operation;
    }

    /// Ensures the operand list has at least `index + 1` slots (padding with
    /// [`OperandSlot::Empty`]), then places `slot` at `index`.
    pub fn set_operand(&mut self, index: usize, slot: OperandSlot) {
        if index >= self.operands.len() {
            self.operands.resize(index + 1, OperandSlot::Empty);
        }
        self.operands[index] = slot;
    }

    /// Appends `slot` as the next operand.
    pub fn push_operand(&mut self, slot: OperandSlot) {
        self.operands.push(slot);
    }

    pub fn operand_type(&self, index: usize) -> OperandSlotType {
        match self.operands.get(index) {
            None | Some(OperandSlot::Empty) => OperandSlotType::Empty,
            Some(OperandSlot::Token(_)) => OperandSlotType::Token,
            Some(OperandSlot::Tree(_)) => OperandSlotType::Tree,
        }
    }

    pub fn token_operand(&self, index: usize) -> &Token {
        match &self.operands[index] {
            OperandSlot::Token(t) => t,
            other => panic!("operand {index} is not a token: {other:?}"),
        }
    }

    pub fn tree_operand(&self, index: usize) -> &OperationTree {
        match &self.operands[index] {
            OperandSlot::Tree(t) => t,
            other => panic!("operand {index} is not a tree: {other:?}"),
        }
    }

    pub fn operands(&self) -> &[OperandSlot] {
        &self.operands
    }

    /// The compact printed form (§4.5, §6): `<op> { <operand>, ... , }`.
    /// The trailing comma-space before `}` is part of the test contract.
    pub fn to_string_compact(&self) -> String {
        let mut out = String::new();
        self.write_compact(&mut out);
        out
    }

    fn write_compact(&self, out: &mut String) {
        out.push_str(self.operation.as_str());
        out.push_str(" { ");
        for operand in &self.operands {
            match operand {
                OperandSlot::Empty => out.push_str("NULL, "),
                OperandSlot::Token(t) => {
                    out.push_str(&t.to_string());
                    out.push_str(", ");
                }
                OperandSlot::Tree(t) => {
                    t.write_compact(out);
                    out.push_str(", ");
                }
            }
        }
        out.push('}');
    }

    /// An indented, multi-line printed form.
    pub fn to_string_pretty(&self, indent: usize) -> String {
        let mut out = String::new();
        self.write_pretty(&mut out, indent);
        out
    }

    fn write_pretty(&self, out: &mut String, indent: usize) {
        let pad = "    ".repeat(indent);
        let inner_pad = "    ".repeat(indent + 1);
        out.push_str(self.operation.as_str());
        out.push_str(" {\n");
        for operand in &self.operands {
            out.push_str(&inner_pad);
            match operand {
                OperandSlot::Empty => out.push_str("NULL"),
                OperandSlot::Token(t) => out.push_str(&t.to_string()),
                OperandSlot::Tree(t) => t.write_pretty(out, indent + 1),
            }
            out.push_str(",\n");
        }
        out.push_str(&pad);
        out.push('}');
    }
}

impl std::fmt::Display for OperationTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_string_compact())
    }
}
