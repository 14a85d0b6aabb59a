//! The container of semantic-analysis output (§3, §6).

use crate::operation::Operation;
use crate::operation_tree::OperationTree;

/// Owns the root operation tree produced by a semantic analysis pass.
pub struct SemanticUnit {
    root: OperationTree,
}

impl SemanticUnit {
    /// A semantic unit with an empty placeholder root, before analysis runs.
    pub fn new() -> Self {
        Self { root: OperationTree::new(Operation::Null) }
    }

    pub fn root(&self) -> &OperationTree {
        &self.root
    }

    pub fn set_root(&mut self, root: OperationTree) {
        self.root = root;
    }
}

impl Default for SemanticUnit {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SemanticUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.root, f)
    }
}
