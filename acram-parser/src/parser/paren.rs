use crate::tokenizer::TokenKind;
use super::{ast::node::NodeId, error::Error, Parser};

impl<'source> Parser<'source> {
    /// Parses an expression enclosed in parentheses. The cursor must be at the opening
    /// parenthesis.
    ///
    /// The parentheses are not kept in the tree; the enclosed expression keeps its own span.
    pub(crate) fn parse_paren(&mut self) -> Result<NodeId, Error> {
        self.skip_whitespace();
        let open = self.span();
        self.cursor += 1;

        let inner = self.parse_sum()?;
        if self.eat(TokenKind::CloseParen).is_none() {
            return Err(self.unclosed(open));
        }

        Ok(inner)
    }
}
