use crate::tokenizer::TokenKind;
use super::{error::{kind, Error}, Parser};

impl<'source> Parser<'source> {
    /// Parses the definition header `name(variable) =`, returning the name of the function. The
    /// name of the bound variable is remembered so that the body can tell it apart from the
    /// parameters.
    pub(crate) fn parse_header(&mut self) -> Result<String, Error> {
        let Some(name) = self.eat(TokenKind::Name) else {
            return Err(self.error(kind::NoExpression));
        };
        let Some(open) = self.eat(TokenKind::OpenParen) else {
            return Err(self.error(kind::NoExpression));
        };
        let Some(variable) = self.eat(TokenKind::Name) else {
            return Err(self.error(kind::NoExpression));
        };
        if self.eat(TokenKind::CloseParen).is_none() {
            return Err(self.unclosed(open.span));
        }
        if self.eat(TokenKind::Assign).is_none() {
            return Err(self.error(kind::MissingEqualsSign));
        }

        self.variable = variable.lexeme.to_owned();
        Ok(name.lexeme.to_owned())
    }
}
