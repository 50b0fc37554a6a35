use acram_attrs::ErrorKind;
use acram_error::{offset, ErrorKind};
use ariadne::Fmt;

/// The form every definition must have, highlighted for use in help messages.
fn definition_form() -> String {
    format!("definitions have the form {}", "`name(variable) = expression`".fg(acram_error::EXPR))
}

/// The source did not start with a definition header.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("no function definition found at position {}", offset(spans)),
    labels = ["I expected to see the start of a definition here"],
    help = definition_form(),
)]
pub struct NoExpression;

/// The header was not followed by an equals sign.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing `=` at position {}", offset(spans)),
    labels = ["I expected to see `=` here"],
    help = definition_form(),
)]
pub struct MissingEqualsSign;

/// A parenthesis was opened but never closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unclosed parenthesis at position {}", offset(spans)),
    labels = ["I expected to see a closing parenthesis `)` here", "this parenthesis is not closed"],
    help = "add a closing parenthesis `)` after the enclosed expression",
)]
pub struct UnclosedParenthesis;

/// An operand was expected but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing operand at position {}", offset(spans)),
    labels = ["I expected to see a number, a name, or a parenthesized expression here"],
    help = match function {
        Some(name) => format!("the argument of `{}` must be enclosed in parentheses, as in `{}(x)`", name, name),
        None => String::from("operators need an operand on each side; exponents must be a single number, name, or parenthesized expression"),
    },
)]
pub struct MissingOperand {
    /// The name of the function that was not followed by its parenthesized argument, if the
    /// operand is missing for that reason.
    pub function: Option<String>,
}

/// A numeric literal could not be read.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid number at position {}", offset(spans)),
    labels = [if *overflow {
        "this number is too large"
    } else {
        "I expected to see digits here"
    }],
    help = if *overflow {
        format!("integers must fit in {}", "64 bits".fg(acram_error::EXPR))
    } else {
        String::from("a decimal separator must be followed immediately by at least one digit")
    },
    note = "numbers are written as digits, optionally followed by `.` or `,` and more digits",
)]
pub struct InvalidOperand {
    /// The integer part of the number does not fit in a 64-bit integer. (Otherwise, the decimal
    /// separator was not followed by digits.)
    pub overflow: bool,
}

/// The expression was complete, but there is more input after it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("garbage symbols found at position {}", offset(spans)),
    labels = ["I could not understand the remaining input here"],
    help = if suggestions.is_empty() {
        String::from("remove the remaining input, or add an operator to join it to the expression")
    } else {
        format!(
            "did you mean {}?",
            suggestions.iter()
                .map(|name| format!("`{}`", name).fg(acram_error::EXPR).to_string())
                .collect::<Vec<_>>()
                .join(" or "),
        )
    },
)]
pub struct TrailingGarbage {
    /// Known function names close to a misspelled one that preceded the garbage.
    pub suggestions: Vec<&'static str>,
}
