//! Semantic checking, symbolic differentiation and simplification of parsed functions.
//!
//! All operations work on the [`Function`] produced by [`acram_parser`]:
//!
//! ```
//! use acram_compute::{semantic::check_semantics, symbolic::{derivative, simplify}};
//! use acram_parser::parser::parse_function;
//!
//! let function = parse_function("f(x) = x^3").unwrap();
//! check_semantics(&function).unwrap();
//!
//! let mut derived = derivative(&function);
//! simplify(&mut derived);
//! assert_eq!(derived.to_string(), "f'(x)=3*x^2");
//! ```
//!
//! [`Function`]: acram_parser::parser::ast::Function

pub mod semantic;
pub mod symbolic;
