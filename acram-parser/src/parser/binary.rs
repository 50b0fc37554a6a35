use crate::tokenizer::TokenKind;
use super::{
    ast::node::{NodeId, Op},
    error::{kind, Error},
    Parser,
};

impl<'source> Parser<'source> {
    /// Consumes the next token if it is one of the given binary operators.
    fn eat_operator(&mut self, ops: &[(TokenKind, Op)]) -> Option<Op> {
        let next = self.peek_kind()?;
        let (_, op) = ops.iter().find(|(kind, _)| *kind == next)?;
        self.cursor += 1;
        Some(*op)
    }

    /// Creates a binary node spanning both of its operands.
    fn join(&mut self, op: Op, left: NodeId, right: NodeId) -> NodeId {
        let span = self.ast[left].span.start..self.ast[right].span.end;
        self.ast.binary(op, left, right, span)
    }

    /// Parses a sum or difference of products, with an optional leading sign. A leading `-`
    /// negates only the first product.
    pub(crate) fn parse_sum(&mut self) -> Result<NodeId, Error> {
        let mut lhs = match self.peek_kind() {
            Some(TokenKind::Sub) => {
                let minus = self.cursor;
                self.cursor += 1;
                let operand = self.parse_product()?;
                let span = self.tokens[minus].span.start..self.ast[operand].span.end;
                self.ast.unary(Op::Sub, operand, span)
            },
            Some(TokenKind::Add) => {
                self.cursor += 1;
                self.parse_product()?
            },
            _ => self.parse_product()?,
        };

        while let Some(op) = self.eat_operator(&[(TokenKind::Add, Op::Add), (TokenKind::Sub, Op::Sub)]) {
            let rhs = self.parse_product()?;
            lhs = self.join(op, lhs, rhs);
        }

        Ok(lhs)
    }

    /// Parses a product or quotient of powers.
    pub(crate) fn parse_product(&mut self) -> Result<NodeId, Error> {
        let mut lhs = self.parse_power()?;

        while let Some(op) = self.eat_operator(&[(TokenKind::Mul, Op::Mul), (TokenKind::Div, Op::Div)]) {
            let rhs = self.parse_power()?;
            lhs = self.join(op, lhs, rhs);
        }

        Ok(lhs)
    }

    /// Parses a primary, optionally raised to a single primary exponent.
    pub(crate) fn parse_power(&mut self) -> Result<NodeId, Error> {
        let base = self.parse_primary()?;
        if self.eat(TokenKind::Pwr).is_none() {
            return Ok(base);
        }

        let exponent = self.parse_primary()?;
        Ok(self.join(Op::Pwr, base, exponent))
    }

    /// Parses a parenthesized expression, a number, a function call, or a name.
    pub(crate) fn parse_primary(&mut self) -> Result<NodeId, Error> {
        match self.peek_kind() {
            Some(TokenKind::OpenParen) => self.parse_paren(),
            Some(TokenKind::Int) => self.parse_number(),
            Some(TokenKind::Name) => self.parse_word(),
            _ => Err(self.error(kind::MissingOperand { function: None })),
        }
    }
}
