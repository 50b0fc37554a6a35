use crate::parser::{
    fmt::{ExprView, Latex},
    sym_table::SymbolTable,
};
use std::fmt::{self, Display, Formatter};
use super::{node::NodeKind, tree::Ast};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single-variable function definition, such as `f(x) = a*x^2 + b`.
///
/// The function owns its expression tree and the table of free parameters the tree refers to.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Function {
    /// The name of the function, such as `f`.
    pub name: String,

    /// The name of the bound variable, such as `x`.
    pub variable: String,

    /// The free parameters of the function, in order of first occurrence.
    pub params: SymbolTable,

    /// The expression tree of the function body.
    pub ast: Ast,
}

impl Function {
    /// Creates a function from its parts.
    pub fn new(name: impl Into<String>, variable: impl Into<String>, params: SymbolTable, ast: Ast) -> Self {
        Self {
            name: name.into(),
            variable: variable.into(),
            params,
            ast,
        }
    }

    /// Returns a renderable view of the function body.
    pub fn expr(&self) -> ExprView<'_> {
        ExprView::new(self, self.ast.root())
    }

    /// Renders the function body in linear notation, such as `a*x^2+b`.
    pub fn to_str(&self) -> String {
        self.expr().to_string()
    }

    /// Renders the function body as LaTeX math-mode source.
    pub fn to_tex(&self) -> String {
        self.expr().as_display().to_string()
    }

    /// Returns the name of the derivative of this function, which is the name with a prime
    /// appended: `f` becomes `f'`, and `f'` becomes `f''`.
    pub fn derivative_name(&self) -> String {
        format!("{}'", self.name)
    }

    /// Returns the display name of the given leaf.
    pub(crate) fn leaf_name(&self, kind: NodeKind) -> Option<&str> {
        match kind {
            NodeKind::Variable => Some(&self.variable),
            NodeKind::Parameter(index) => self.params.get(index),
            _ => None,
        }
    }
}

/// Formats the full definition in linear notation, such as `f(x)=a*x^2+b`.
impl Display for Function {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}({})={}", self.name, self.variable, self.expr())
    }
}

/// Formats the full definition as LaTeX, such as `f(x)={{a \cdot x^{2}}+b}`.
impl Latex for Function {
    fn fmt_latex(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        crate::parser::fmt::fmt_identifier(f, &self.variable)?;
        write!(f, ")=")?;
        self.expr().fmt_latex(f)
    }
}
