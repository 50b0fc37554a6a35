use acram_attrs::ErrorKind;
use acram_error::ErrorKind;
use ariadne::Fmt;

/// Zero was raised to the power of zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "zero raised to the power of zero",
    labels = [format!("this {} is undefined", "power".fg(acram_error::EXPR))],
    help = "`0^0` has no agreed-upon value; rewrite the expression to avoid it",
    note = "a function with an undefined subexpression has no derivative",
)]
pub struct ZeroToZero;

/// A literal zero was used as a divisor.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this division has a zero denominator"],
    note = "a function with an undefined subexpression has no derivative",
)]
pub struct DivisionByZero;

/// The logarithm of a literal zero was taken.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "logarithm of zero",
    labels = ["this logarithm is undefined"],
    help = format!("the argument of {} must be positive", "`log`".fg(acram_error::EXPR)),
)]
pub struct LogOfZero;

/// The logarithm of a negative literal was taken.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "logarithm of a negative number",
    labels = ["this logarithm is undefined"],
    help = format!("the argument of {} must be positive", "`log`".fg(acram_error::EXPR)),
)]
pub struct LogOfNegative;
