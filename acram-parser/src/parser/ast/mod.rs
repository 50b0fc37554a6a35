pub mod function;
pub mod node;
pub mod tree;

pub use function::Function;
pub use node::{Node, NodeId, NodeKind, Op};
pub use tree::Ast;
