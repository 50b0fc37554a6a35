//! Rendering of expression trees in linear notation and as LaTeX.
//!
//! Both renderers decide where parentheses go with [`Ast::need_parentheses`]. The arguments of
//! named functions are always written inside the call's own parentheses.

use std::fmt::{Display, Formatter, Result};
use super::ast::{function::Function, node::{NodeId, NodeKind, Op}, tree::Ast};

/// A trait for types that can be formatted as LaTeX.
pub trait Latex {
    /// Format the value as LaTeX.
    fn fmt_latex(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`LatexFormatter`], which implements [`Display`].
    fn as_display(&self) -> LatexFormatter<'_, Self> {
        LatexFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Latex`].
pub struct LatexFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for LatexFormatter<'_, T>
where
    T: Latex,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_latex(f)
    }
}

/// Formats a fractional literal. Whole values keep one decimal digit, so that `2.0` is not
/// mistaken for an integer.
pub fn fmt_fraction(f: &mut Formatter, value: f64) -> Result {
    if value.is_finite() && value.fract() == 0.0 {
        write!(f, "{:.1}", value)
    } else {
        write!(f, "{}", value)
    }
}

/// Formats an identifier as LaTeX. Multi-character names have their tail written as a
/// subscript, so `x1` becomes `x_{1}`.
pub fn fmt_identifier(f: &mut Formatter, name: &str) -> Result {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if !chars.as_str().is_empty() => write!(f, "{}_{{{}}}", first, chars.as_str()),
        _ => write!(f, "{}", name),
    }
}

/// A view of one node of a function's expression tree. The node is rendered together with its
/// subtree; leaves are resolved to names through the function's symbol table.
///
/// [`Display`] renders linear notation, and [`Latex`] renders LaTeX math-mode source.
#[derive(Debug, Clone, Copy)]
pub struct ExprView<'a> {
    function: &'a Function,
    id: NodeId,
}

impl<'a> ExprView<'a> {
    /// Creates a view of the given node of the function's tree.
    pub fn new(function: &'a Function, id: NodeId) -> Self {
        Self { function, id }
    }

    fn ast(&self) -> &'a Ast {
        &self.function.ast
    }

    fn child(&self, id: NodeId) -> Self {
        Self::new(self.function, id)
    }

    /// Writes a leaf in the given notation.
    fn fmt_leaf(&self, f: &mut Formatter, kind: NodeKind, latex: bool) -> Result {
        match kind {
            NodeKind::Integer(n) => write!(f, "{}", n),
            NodeKind::Fraction(value) => fmt_fraction(f, value),
            NodeKind::Variable | NodeKind::Parameter(_) => {
                let name = self.function.leaf_name(kind).unwrap_or("?");
                if latex {
                    fmt_identifier(f, name)
                } else {
                    write!(f, "{}", name)
                }
            },
            NodeKind::Operator(_) => Ok(()),
        }
    }

    /// Writes the node in linear notation, wrapped in parentheses if `wrap` is set.
    fn fmt_linear(&self, f: &mut Formatter, wrap: bool) -> Result {
        let ast = self.ast();
        if wrap {
            write!(f, "(")?;
        }

        match ast.kind(self.id) {
            // the argument already sits in the call's own parentheses
            NodeKind::Operator(op) if op.is_function() => {
                write!(f, "{}(", op.symbol())?;
                if let Some(arg) = ast.right(self.id) {
                    self.child(arg).fmt_linear(f, false)?;
                }
                write!(f, ")")?;
            },
            NodeKind::Operator(op) => {
                if let Some(left) = ast.left(self.id) {
                    self.child(left).fmt_linear(f, ast.need_parentheses(left))?;
                }
                write!(f, "{}", op.symbol())?;
                if let Some(right) = ast.right(self.id) {
                    self.child(right).fmt_linear(f, ast.need_parentheses(right))?;
                }
            },
            leaf => self.fmt_leaf(f, leaf, false)?,
        }

        if wrap {
            write!(f, ")")?;
        }
        Ok(())
    }

    /// Writes the node as LaTeX, wrapped in parentheses if `wrap` is set.
    fn fmt_tex(&self, f: &mut Formatter, wrap: bool) -> Result {
        let ast = self.ast();
        if wrap {
            write!(f, "\\left(")?;
        }

        let (left, right) = (ast.left(self.id), ast.right(self.id));
        match ast.kind(self.id) {
            NodeKind::Operator(Op::Div) => {
                write!(f, "\\frac{{")?;
                if let Some(left) = left {
                    self.child(left).fmt_tex(f, false)?;
                }
                write!(f, "}}{{")?;
                if let Some(right) = right {
                    self.child(right).fmt_tex(f, false)?;
                }
                write!(f, "}}")?;
            },
            NodeKind::Operator(Op::Sqrt) => {
                write!(f, "\\sqrt{{")?;
                if let Some(right) = right {
                    self.child(right).fmt_tex(f, false)?;
                }
                write!(f, "}}")?;
            },
            NodeKind::Operator(Op::Pwr) => {
                if let Some(left) = left {
                    self.child(left).fmt_tex(f, ast.need_parentheses(left))?;
                }
                write!(f, "^{{")?;
                if let Some(right) = right {
                    self.child(right).fmt_tex(f, false)?;
                }
                write!(f, "}}")?;
            },
            NodeKind::Operator(op) => {
                write!(f, "{{")?;
                if let Some(left) = left {
                    self.child(left).fmt_tex(f, ast.need_parentheses(left))?;
                }
                write!(f, "{}", op.latex())?;
                if let Some(right) = right {
                    if op.is_function() {
                        write!(f, "{{")?;
                        self.child(right).fmt_tex(f, ast.need_parentheses(right))?;
                        write!(f, "}}")?;
                    } else {
                        self.child(right).fmt_tex(f, ast.need_parentheses(right))?;
                    }
                }
                write!(f, "}}")?;
            },
            leaf => self.fmt_leaf(f, leaf, true)?,
        }

        if wrap {
            write!(f, "\\right)")?;
        }
        Ok(())
    }
}

impl Display for ExprView<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.fmt_linear(f, false)
    }
}

impl Latex for ExprView<'_> {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        self.fmt_tex(f, false)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use crate::parser::parse_function;

    /// Parses the definition and renders its body in linear notation.
    fn linear(source: &str) -> String {
        parse_function(source).unwrap().to_str()
    }

    /// Parses the definition and renders its body as LaTeX.
    fn tex(source: &str) -> String {
        parse_function(source).unwrap().to_tex()
    }

    #[test]
    fn linear_drops_redundant_parentheses() {
        assert_eq!(linear("f(x) = (a*x)^2 + (b)"), "(a*x)^2+b");
        assert_eq!(linear("f(x) = ((x))"), "x");
        assert_eq!(linear("f(x) = a + (b + c)"), "a+b+c");
    }

    #[test]
    fn linear_keeps_needed_parentheses() {
        assert_eq!(linear("f(x) = a - (b + c)"), "a-(b+c)");
        assert_eq!(linear("f(x) = a / (b * c)"), "a/(b*c)");
        assert_eq!(linear("f(x) = (x^2)^3"), "(x^2)^3");
    }

    #[test]
    fn linear_exponent_is_never_wrapped() {
        assert_eq!(linear("f(x) = x^(a+1)"), "x^a+1");
        assert_eq!(tex("f(x) = x^(a+1)"), "x^{{a+1}}");
    }

    #[test]
    fn linear_function_calls() {
        assert_eq!(linear("f(x) = sin(x) + tg(2*x)"), "sin(x)+tan(2*x)");
        assert_eq!(linear("f(x) = ln(x + 1)"), "log(x+1)");
        assert_eq!(linear("f(x) = sin(x)^2"), "(sin(x))^2");
    }

    #[test]
    fn linear_unary_minus() {
        assert_eq!(linear("f(x) = -x + 1"), "-x+1");
        assert_eq!(linear("f(x) = -(x + 1)"), "-(x+1)");
    }

    #[test]
    fn linear_fractions() {
        assert_eq!(linear("f(x) = 2.5*x"), "2.5*x");
        assert_eq!(linear("f(x) = 2.0*x"), "2.0*x");
        assert_eq!(linear("f(x) = 0.125"), "0.125");
    }

    #[test]
    fn tex_arithmetic() {
        assert_eq!(tex("f(x) = 3*x^2"), "{3 \\cdot x^{2}}");
        assert_eq!(tex("f(x) = a + b"), "{a+b}");
        assert_eq!(tex("f(x) = -x"), "{-x}");
    }

    #[test]
    fn tex_fraction_and_root() {
        assert_eq!(tex("f(x) = (x + 1) / (x - 1)"), "\\frac{{x+1}}{{x-1}}");
        assert_eq!(tex("f(x) = sqrt(x + 1)"), "\\sqrt{{x+1}}");
    }

    #[test]
    fn tex_parentheses() {
        assert_eq!(tex("f(x) = (x + 1)^2"), "\\left({x+1}\\right)^{2}");
        assert_eq!(tex("f(x) = 2*(x + 1)"), "{2 \\cdot \\left({x+1}\\right)}");
    }

    #[test]
    fn tex_functions_and_names() {
        assert_eq!(tex("f(x) = sin(x)"), "{\\sin{x}}");
        assert_eq!(tex("f(x1) = x1 + alpha"), "{x_{1}+a_{lpha}}");
    }

    #[test]
    fn full_definition() {
        let function = parse_function("g(t) = t^2").unwrap();
        assert_eq!(function.to_string(), "g(t)=t^2");
        assert_eq!(function.as_display().to_string(), "g(t)=t^{2}");
    }
}
