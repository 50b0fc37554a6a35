use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A handle to a node stored in an [`Ast`].
///
/// Handles are only meaningful for the tree that created them.
///
/// [`Ast`]: super::tree::Ast
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(pub(crate) usize);

/// An operator or named function.
///
/// Binary operators always have both children. Named functions are unary-prefix and only have a
/// right child. [`Op::Sub`] with no left child is unary negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Pwr,
    Sqrt,
    Exp,
    Log,
    Sin,
    Cos,
    Tan,
    Cot,
    Asin,
    Acos,
    Atan,
    Acot,
}

impl Op {
    /// Resolves a function name, including its aliases, to the corresponding operator. Names are
    /// case-sensitive.
    pub fn from_function_name(name: &str) -> Option<Self> {
        Some(match name {
            "cos" => Self::Cos,
            "sin" => Self::Sin,
            "tan" | "tg" => Self::Tan,
            "cot" | "ctg" => Self::Cot,
            "exp" => Self::Exp,
            "log" | "ln" => Self::Log,
            "sqrt" => Self::Sqrt,
            "arcsin" => Self::Asin,
            "arccos" => Self::Acos,
            "arctan" | "arctg" => Self::Atan,
            "arccot" | "arcctg" => Self::Acot,
            _ => return None,
        })
    }

    /// Every name accepted by [`Op::from_function_name`].
    pub const FUNCTION_NAMES: &'static [&'static str] = &[
        "cos", "sin", "tan", "tg", "cot", "ctg", "exp", "log", "ln", "sqrt",
        "arcsin", "arccos", "arctan", "arctg", "arccot", "arcctg",
    ];

    /// Returns true if the operator is a named unary-prefix function.
    pub fn is_function(self) -> bool {
        !matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Pwr)
    }

    /// Returns true if the operator is one of `+`, `-`, `*`, `/`.
    pub fn is_arith(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div)
    }

    /// Returns true if swapping the operands does not change the result. Only `-`, `/` and `^`
    /// are non-commutative.
    pub fn is_commutative(self) -> bool {
        !matches!(self, Self::Sub | Self::Div | Self::Pwr)
    }

    /// Returns the priority class of the operator. A smaller number binds tighter; the numbers
    /// are only meaningful when compared to each other.
    pub fn priority(self) -> u8 {
        match self {
            Self::Pwr => 2,
            Self::Mul | Self::Div => 4,
            Self::Add | Self::Sub => 5,
            _ => 3,
        }
    }

    /// Returns the symbol or name used when rendering the operator in linear notation.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pwr => "^",
            Self::Sqrt => "sqrt",
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Cot => "cot",
            Self::Asin => "arcsin",
            Self::Acos => "arccos",
            Self::Atan => "arctan",
            Self::Acot => "arccot",
        }
    }

    /// Returns the LaTeX code used when rendering the operator in typeset notation.
    pub fn latex(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => " \\cdot ",
            Self::Div => "\\frac",
            Self::Pwr => "^",
            Self::Sqrt => "\\sqrt",
            Self::Exp => "\\exp",
            Self::Log => "\\ln",
            Self::Sin => "\\sin",
            Self::Cos => "\\cos",
            Self::Tan => "\\tan",
            Self::Cot => "\\cot",
            Self::Asin => "\\arcsin",
            Self::Acos => "\\arccos",
            Self::Atan => "\\arctan",
            Self::Acot => "\\operatorname{arccot}",
        }
    }
}

/// The payload of a node: its type tag together with the value that tag selects.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeKind {
    /// An integer literal.
    Integer(i64),

    /// A literal with a fractional part, such as `2.5`.
    Fraction(f64),

    /// The bound variable of the function.
    Variable,

    /// A free parameter, stored as an index into the function's symbol table.
    Parameter(usize),

    /// An operator or named function.
    Operator(Op),
}

impl NodeKind {
    /// Returns the operator, if this is an operator node.
    pub fn as_op(&self) -> Option<Op> {
        match self {
            Self::Operator(op) => Some(*op),
            _ => None,
        }
    }

    /// Returns the integer value, if this is an integer literal.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

/// A single node of an expression tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    /// The type and value of the node.
    pub kind: NodeKind,

    /// The node that owns this node, or [`None`] for the root.
    pub parent: Option<NodeId>,

    /// The left operand. Always [`None`] for leaves, named functions and unary negation.
    pub left: Option<NodeId>,

    /// The right operand, or the argument of a named function / unary negation.
    pub right: Option<NodeId>,

    /// The region of the source code that this node was parsed from. Nodes built by
    /// transformations point at `0..0`.
    pub span: Range<usize>,
}

impl Node {
    /// Creates a detached node without children.
    pub fn new(kind: NodeKind, span: Range<usize>) -> Self {
        Self { kind, parent: None, left: None, right: None, span }
    }
}
