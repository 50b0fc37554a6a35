//! Symbolic differentiation and simplification of expression trees.
//!
//! [`derivative()`] builds a new, independent tree for the derivative of a function with respect
//! to its bound variable. The derivative is not simplified, and usually contains many trivial
//! subexpressions such as `0*x` and `x^(2-1)`; [`simplify()`] removes them by rewriting the tree
//! in place.
//!
//! ```
//! use acram_compute::symbolic::{derivative, simplify};
//! use acram_parser::parser::parse_function;
//!
//! let function = parse_function("f(x) = sin(x)").unwrap();
//! let mut derived = derivative(&function);
//! assert_eq!(derived.to_str(), "cos(x)*1");
//!
//! simplify(&mut derived);
//! assert_eq!(derived.to_str(), "cos(x)");
//! ```

pub mod derivative;
pub mod simplify;
pub mod step_collector;

pub use derivative::derivative;
pub use simplify::{simplify, simplify_with_steps};
pub use step_collector::StepCollector;
