use crate::tokenizer::{Token, TokenKind};
use levenshtein::levenshtein;
use super::{
    ast::node::{NodeId, Op},
    error::{kind, Error},
    Parser,
};

/// Returns the known function names that are a small number of edits away from the given name,
/// closest first.
pub fn suggest_functions(name: &str) -> Vec<&'static str> {
    let mut candidates = Op::FUNCTION_NAMES
        .iter()
        .map(|candidate| (levenshtein(name, candidate), *candidate))
        .filter(|(distance, _)| *distance <= 2 && *distance < name.len())
        .collect::<Vec<_>>();
    candidates.sort_by_key(|(distance, _)| *distance);
    candidates.into_iter().map(|(_, candidate)| candidate).collect()
}

impl<'source> Parser<'source> {
    /// Parses the parenthesized argument of a named function. `name` is the already consumed
    /// function name.
    pub(crate) fn parse_call(&mut self, op: Op, name: Token<'source>) -> Result<NodeId, Error> {
        let Some(open) = self.eat(TokenKind::OpenParen) else {
            return Err(self.error(kind::MissingOperand { function: Some(name.lexeme.to_owned()) }));
        };

        let arg = self.parse_sum()?;
        let Some(close) = self.eat(TokenKind::CloseParen) else {
            return Err(self.unclosed(open.span));
        };

        Ok(self.ast.unary(op, arg, name.span.start..close.span.end))
    }
}
