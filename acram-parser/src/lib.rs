//! Parser for single-variable function definitions of the form `name(variable) = expression`.
//!
//! Parsing produces a [`Function`], which owns the expression tree, the ordered table of free
//! parameters found in the expression, and the name of the bound variable.
//!
//! ```
//! use acram_parser::parser::parse_function;
//!
//! let function = parse_function("f(x) = a*x^2 + b").unwrap();
//! assert_eq!(function.name, "f");
//! assert_eq!(function.variable, "x");
//! assert_eq!(function.params.as_slice(), ["a", "b"]);
//! assert_eq!(function.to_str(), "a*x^2+b");
//! ```
//!
//! [`Function`]: parser::ast::function::Function

pub mod parser;
pub mod tokenizer;
