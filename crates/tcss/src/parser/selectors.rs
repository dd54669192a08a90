//! Selector grammar.
//!
//! ```text
//! selector-list := selector (',' selector)*
//! selector      := compound ( '>' compound | <whitespace> compound )*
//! compound      := '&'? simple simple*      (no whitespace between parts)
//! simple        := Type | '#'id | '.'class | '*' | ':'pseudo('(' args ')')? | '[' attr ']'
//! ```
//!
//! Selectors are first collected as a [`SelectorChain`] (a list of compound
//! selectors joined by combinators) so nested rules can be merged into their
//! parent before the final [`Selector`] tree is built.

use crate::error::ParseError;
use crate::parser::stylesheet::{AttributeOperator, Combinator, Selector};
use crate::parser::token::{Token, TokenKind};
use crate::parser::{Parser, join_tokens};

/// One compound selector and the combinator linking it to the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorPart {
    pub compound: Vec<Selector>,
    /// `None` for the last part of a chain.
    pub combinator: Option<Combinator>,
}

impl SelectorPart {
    pub fn new(compound: Vec<Selector>, combinator: Option<Combinator>) -> Self {
        Self {
            compound,
            combinator,
        }
    }
}

/// A complex selector as written, before it becomes a [`Selector`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorChain {
    /// Starts with `&`. The first part then holds only what follows the `&`
    /// and may be empty.
    pub parent_ref: bool,
    pub parts: Vec<SelectorPart>,
}

impl SelectorChain {
    /// Builds the left-associative selector tree for this chain.
    pub fn to_selector(&self) -> Selector {
        let mut parts = self.parts.iter();
        let Some(first) = parts.next() else {
            return Selector::Universal;
        };

        let mut selector = compound_to_selector(&first.compound);
        let mut combinator = first.combinator;
        for part in parts {
            selector = Selector::join(
                combinator.unwrap_or(Combinator::Descendant),
                selector,
                compound_to_selector(&part.compound),
            );
            combinator = part.combinator;
        }
        selector
    }
}

fn compound_to_selector(compound: &[Selector]) -> Selector {
    match compound {
        [] => Selector::Universal,
        [single] => single.clone(),
        many => Selector::Compound(many.to_vec()),
    }
}

/// Can this token begin a simple selector?
fn starts_simple(token: &Token) -> bool {
    matches!(
        token.kind,
        TokenKind::Identifier(_)
            | TokenKind::Hash(_)
            | TokenKind::Colon
            | TokenKind::OpenBracket
            | TokenKind::Delimiter('.')
            | TokenKind::Delimiter('*')
    )
}

impl Parser {
    /// Parses a comma-separated selector list. `&` is only accepted when
    /// `nested` is set.
    pub(crate) fn parse_selector_list(
        &mut self,
        nested: bool,
    ) -> Result<Vec<SelectorChain>, ParseError> {
        let mut selectors = vec![self.parse_complex_selector(nested)?];
        while self.peek().kind == TokenKind::Comma {
            self.advance();
            selectors.push(self.parse_complex_selector(nested)?);
        }
        Ok(selectors)
    }

    /// Parses a complex selector with combinators (e.g., `Container > Button`).
    fn parse_complex_selector(&mut self, nested: bool) -> Result<SelectorChain, ParseError> {
        let (compound, parent_ref) = self.parse_compound_selector(nested)?;
        let mut parts = vec![SelectorPart::new(compound, None)];

        loop {
            let token = self.peek();
            let combinator = if token.is_delim('>') {
                self.advance();
                Combinator::Child
            } else if starts_simple(token) && token.preceded_by_whitespace {
                Combinator::Descendant
            } else {
                break;
            };

            let (next, _) = self.parse_compound_selector(false)?;
            if let Some(last) = parts.last_mut() {
                last.combinator = Some(combinator);
            }
            parts.push(SelectorPart::new(next, None));
        }

        Ok(SelectorChain { parent_ref, parts })
    }

    /// Parses a compound selector (e.g., `Button.primary#submit`).
    ///
    /// Returns the simple selectors and whether the compound started with `&`.
    fn parse_compound_selector(
        &mut self,
        allow_parent: bool,
    ) -> Result<(Vec<Selector>, bool), ParseError> {
        let mut selectors = Vec::new();
        let mut parent_ref = false;

        let first = self.peek();
        if first.is_delim('&') {
            if !allow_parent {
                return Err(ParseError::new(
                    "'&' is only allowed at the start of a selector inside a rule block",
                    first.position.line,
                    first.position.column,
                ));
            }
            self.advance();
            parent_ref = true;
        } else if starts_simple(first) {
            selectors.push(self.parse_simple_selector()?);
        } else {
            return Err(self.unexpected(first, "a selector"));
        }

        loop {
            let token = self.peek();
            if !starts_simple(token) || token.preceded_by_whitespace {
                break;
            }
            if matches!(token.kind, TokenKind::Identifier(_)) || token.is_delim('*') {
                return Err(self.unexpected(token, "a class, id, pseudo-class or attribute"));
            }
            selectors.push(self.parse_simple_selector()?);
        }

        Ok((selectors, parent_ref))
    }

    /// Parses a simple selector: Type, `#id`, `.class`, `*`, `:pseudo` or `[attr]`.
    fn parse_simple_selector(&mut self) -> Result<Selector, ParseError> {
        let token = self.advance();
        match &token.kind {
            TokenKind::Identifier(name) => Ok(Selector::Type(name.clone())),
            TokenKind::Hash(name) => Ok(Selector::Id(name.clone())),
            TokenKind::Delimiter('*') => Ok(Selector::Universal),
            TokenKind::Delimiter('.') => {
                let name = self.expect_adjacent_ident("a class name after '.'")?;
                Ok(Selector::Class(name))
            }
            TokenKind::Colon => self.parse_pseudo_class(),
            TokenKind::OpenBracket => self.parse_attribute_selector(),
            _ => Err(self.unexpected(&token, "a selector")),
        }
    }

    /// An identifier glued to the previous token.
    fn expect_adjacent_ident(&mut self, expected: &str) -> Result<String, ParseError> {
        let token = self.peek();
        match &token.kind {
            TokenKind::Identifier(name) if !token.preceded_by_whitespace => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected(token, expected)),
        }
    }

    /// `:name` or `:name(raw args)`; the colon is already consumed.
    fn parse_pseudo_class(&mut self) -> Result<Selector, ParseError> {
        let name = self.expect_adjacent_ident("a pseudo-class name after ':'")?;

        let open = self.peek();
        if open.kind != TokenKind::OpenParen || open.preceded_by_whitespace {
            return Ok(Selector::Pseudo(name, None));
        }
        self.advance();

        let start = self.pos;
        let mut depth = 0usize;
        loop {
            let token = self.peek();
            match token.kind {
                TokenKind::OpenParen => depth += 1,
                TokenKind::CloseParen if depth == 0 => break,
                TokenKind::CloseParen => depth -= 1,
                TokenKind::EndOfFile | TokenKind::OpenBrace | TokenKind::CloseBrace => {
                    return Err(self.unexpected(token, "')' to close the pseudo-class argument"));
                }
                _ => {}
            }
            self.advance();
        }

        let args = &self.tokens[start..self.pos];
        if args.is_empty() {
            return Err(self.unexpected(self.peek(), &format!("an argument for ':{name}'")));
        }
        let args = join_tokens(args);
        self.advance(); // ')'
        Ok(Selector::Pseudo(name, Some(args)))
    }

    /// `[name]`, `[name=value]`, `[name^=value]`, `[name$=value]`, `[name*=value]`;
    /// the `[` is already consumed.
    fn parse_attribute_selector(&mut self) -> Result<Selector, ParseError> {
        let token = self.advance();
        let name = match &token.kind {
            TokenKind::Identifier(name) => name.clone(),
            _ => return Err(self.unexpected(&token, "an attribute name")),
        };

        let token = self.peek();
        let operator = match token.kind {
            TokenKind::CloseBracket => {
                self.advance();
                return Ok(Selector::Attribute(name, None));
            }
            TokenKind::Delimiter('=') => Some(AttributeOperator::Equals),
            TokenKind::Delimiter('^') => Some(AttributeOperator::StartsWith),
            TokenKind::Delimiter('$') => Some(AttributeOperator::EndsWith),
            TokenKind::Delimiter('*') => Some(AttributeOperator::Contains),
            _ => None,
        };
        let Some(operator) = operator else {
            return Err(self.unexpected(token, "']' or an attribute operator"));
        };
        self.advance();
        if operator != AttributeOperator::Equals {
            let eq = self.peek();
            if !eq.is_delim('=') || eq.preceded_by_whitespace {
                return Err(self.unexpected(eq, "'=' to complete the attribute operator"));
            }
            self.advance();
        }

        let token = self.advance();
        let value = match &token.kind {
            TokenKind::String { value, .. } => value.clone(),
            TokenKind::Identifier(_) | TokenKind::Number { .. } => token.to_css(),
            _ => return Err(self.unexpected(&token, "an attribute value")),
        };
        self.expect_close_bracket()?;
        Ok(Selector::Attribute(name, Some((operator, value))))
    }

    fn expect_close_bracket(&mut self) -> Result<(), ParseError> {
        if self.peek().kind == TokenKind::CloseBracket {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(self.peek(), "']'"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(source: &str) -> SelectorChain {
        let mut parser = Parser::new(source).unwrap();
        parser.parse_complex_selector(true).unwrap()
    }

    #[test]
    fn chain_records_combinators() {
        let c = chain("A B > C");
        assert_eq!(c.parts.len(), 3);
        assert_eq!(c.parts[0].combinator, Some(Combinator::Descendant));
        assert_eq!(c.parts[1].combinator, Some(Combinator::Child));
        assert_eq!(c.parts[2].combinator, None);
    }

    #[test]
    fn ampersand_alone_leaves_an_empty_first_part() {
        let c = chain("& > Label");
        assert!(c.parent_ref);
        assert!(c.parts[0].compound.is_empty());
        assert_eq!(c.parts[0].combinator, Some(Combinator::Child));
    }

    #[test]
    fn chain_builds_left_associative_tree() {
        let selector = chain("A B > C").to_selector();
        assert_eq!(
            selector,
            Selector::child(
                Selector::descendant(Selector::type_name("A"), Selector::type_name("B")),
                Selector::type_name("C"),
            )
        );
    }
}
