use crate::tokenizer::TokenKind;
use super::{
    ast::node::{NodeId, NodeKind, Op},
    error::{kind, Error},
    Parser,
};

impl<'source> Parser<'source> {
    /// Parses a number. The cursor must be at its integer part.
    ///
    /// A number is an integer, optionally followed by a decimal separator (`.` or `,`) and more
    /// digits, with no whitespace in between. Numbers with a fractional part become
    /// [`NodeKind::Fraction`] leaves.
    pub(crate) fn parse_number(&mut self) -> Result<NodeId, Error> {
        let Some(int) = self.next_token() else {
            return Err(self.error(kind::MissingOperand { function: None }));
        };

        let integer = int.lexeme.bytes().try_fold(0i64, |acc, digit| {
            acc.checked_mul(10)?.checked_add(i64::from(digit - b'0'))
        });
        let Some(integer) = integer else {
            return Err(Error::new(vec![int.span], kind::InvalidOperand { overflow: true }));
        };

        // the separator must directly follow the digits, so whitespace is not skipped here
        if !self.current_token().is_some_and(|token| token.kind.is_decimal_separator()) {
            return Ok(self.ast.leaf(NodeKind::Integer(integer), int.span));
        }
        self.cursor += 1;

        let digits = match self.current_token() {
            Some(token) if token.kind == TokenKind::Int => token.clone(),
            _ => return Err(Error::new(vec![self.span()], kind::InvalidOperand { overflow: false })),
        };
        self.cursor += 1;

        let value = format!("{}.{}", int.lexeme, digits.lexeme)
            .parse::<f64>()
            .map_err(|_| Error::new(vec![int.span.start..digits.span.end], kind::InvalidOperand { overflow: false }))?;
        Ok(self.ast.leaf(NodeKind::Fraction(value), int.span.start..digits.span.end))
    }

    /// Parses a name: a call to a known function, the bound variable, or a parameter. Parameters
    /// are added to the symbol table the first time they are seen.
    pub(crate) fn parse_word(&mut self) -> Result<NodeId, Error> {
        let Some(word) = self.next_token() else {
            return Err(self.error(kind::MissingOperand { function: None }));
        };

        if let Some(op) = Op::from_function_name(word.lexeme) {
            return self.parse_call(op, word);
        }

        let kind = if word.lexeme == self.variable {
            NodeKind::Variable
        } else {
            NodeKind::Parameter(self.params.intern(word.lexeme))
        };
        Ok(self.ast.leaf(kind, word.span))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::parser::{ast::node::NodeKind, parse_function};

    #[test]
    fn integer_limits() {
        let function = parse_function("f(x) = 9223372036854775807").unwrap();
        assert_eq!(function.ast.kind(function.ast.root()), NodeKind::Integer(i64::MAX));
        assert!(parse_function("f(x) = 9223372036854775808").is_err());
    }

    #[test]
    fn fraction_digits_keep_their_order() {
        let function = parse_function("f(x) = 1.25").unwrap();
        assert_eq!(function.ast.kind(function.ast.root()), NodeKind::Fraction(1.25));
        assert_eq!(function.ast[function.ast.root()].span, 7..11);
    }

    #[test]
    fn separator_after_space_is_garbage() {
        assert!(parse_function("f(x) = 3 .5").is_err());
        assert!(parse_function("f(x) = 3. 5").is_err());
    }

    #[test]
    fn variable_is_not_a_parameter() {
        let function = parse_function("f(y) = y * x").unwrap();
        let ast = &function.ast;
        assert_eq!(ast.kind(ast.left(ast.root()).unwrap()), NodeKind::Variable);
        assert_eq!(ast.kind(ast.right(ast.root()).unwrap()), NodeKind::Parameter(0));
        assert_eq!(function.params.as_slice(), ["x"]);
    }
}
