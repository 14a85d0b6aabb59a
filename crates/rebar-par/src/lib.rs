mod bracket;
mod error;
mod operation;
mod operation_tree;
mod operator;
mod semantic_analyzer;
mod semantic_unit;

pub use error::{ParseError, ParseResult};
pub use operation::Operation;
pub use operation_tree::{OperandSlot, OperandSlotType, OperationTree};
pub use operator::{
    default_operator_registry, Association, OperatorDescriptor, OperatorRegistry, Shape,
};
pub use semantic_analyzer::SemanticAnalyzer;
pub use semantic_unit::SemanticUnit;
