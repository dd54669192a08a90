//! TCSS parsing and stylesheet data structures.
//!
//! This module provides the core parsing functionality for TCSS stylesheets,
//! including:
//!
//! - [`parse_stylesheet`]: Main entry point for parsing TCSS source
//! - [`StyleSheet`]: A parsed stylesheet (variables + flattened rules)
//! - [`Rule`]: One selector with its declarations and source order
//! - [`Selector`]: Simple, compound and combinator selectors
//!
//! ## Submodules
//!
//! - [`token`] / [`lexer`]: Source text to tokens
//! - [`selectors`]: Selector grammar
//! - [`flatten`]: Combining nested (`&`) selectors with their parents
//! - [`stylesheet`]: Core data structures for rules and declarations
//! - [`variables`]: Variable storage and `$name` substitution
//! - [`units`] / [`values`]: Typed conversion of declaration values
//! - [`cascade`]: Selector matching and the cascade
//!
//! ## Example
//!
//! ```rust
//! use tcss::parser::{parse_stylesheet, Selector};
//!
//! let stylesheet = parse_stylesheet("Button { color: red; }").unwrap();
//! let rule = &stylesheet.rules[0];
//!
//! assert_eq!(rule.selector, Selector::Type("Button".to_string()));
//! assert_eq!(rule.get("color").unwrap().raw, "red");
//! ```

pub mod cascade;
pub mod flatten;
pub mod lexer;
pub mod selectors;
pub mod stylesheet;
pub mod token;
pub mod units;
pub mod values;
pub mod variables;

pub use crate::parser::stylesheet::{
    AttributeOperator, Combinator, Declaration, PropertyValue, Rule, Selector, Specificity,
    StyleSheet,
};
pub use crate::parser::token::{Position, Token, TokenKind};
pub use crate::parser::variables::{StylesheetVariables, resolve_variables};

use crate::TcssError;
use crate::error::ParseError;
use crate::parser::lexer::tokenize_filtered;
use crate::parser::selectors::SelectorChain;

/// Parses a full TCSS stylesheet.
///
/// Nested rules are flattened and every rule receives its source order.
/// Declaration values are stored raw; variables are substituted later,
/// when a value is converted for its property.
pub fn parse_stylesheet(source: &str) -> Result<StyleSheet, TcssError> {
    let sheet = Parser::new(source)?.parse()?;
    log::debug!(
        "parsed stylesheet: {} rules, {} variables",
        sheet.rules.len(),
        sheet.variables.len()
    );
    Ok(sheet)
}

/// Parses a comma-separated selector list on its own (e.g. `"Button, .primary"`).
pub fn parse_selector_list(source: &str) -> Result<Vec<Selector>, TcssError> {
    let mut parser = Parser::new(source)?;
    let chains = parser.parse_selector_list(false)?;
    parser.expect_eof()?;
    Ok(chains.iter().map(SelectorChain::to_selector).collect())
}

/// Recursive-descent parser over a whitespace-filtered token buffer.
///
/// The buffer always ends with [`TokenKind::EndOfFile`] and the cursor never
/// moves past it.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    next_order: usize,
}

impl Parser {
    pub fn new(source: &str) -> Result<Self, ParseError> {
        Ok(Self {
            tokens: tokenize_filtered(source)?,
            pos: 0,
            next_order: 0,
        })
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub(crate) fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if !token.is_eof() {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn unexpected(&self, token: &Token, expected: &str) -> ParseError {
        ParseError::new(
            format!("expected {expected}, found {}", token.kind.describe()),
            token.position.line,
            token.position.column,
        )
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token, ParseError> {
        if self.peek().kind == kind {
            Ok(self.advance())
        } else {
            Err(self.unexpected(self.peek(), expected))
        }
    }

    fn expect_eof(&self) -> Result<(), ParseError> {
        if self.peek().is_eof() {
            Ok(())
        } else {
            Err(self.unexpected(self.peek(), "end of input"))
        }
    }

    /// Parses the whole token buffer into a stylesheet.
    pub fn parse(mut self) -> Result<StyleSheet, ParseError> {
        let mut sheet = StyleSheet::default();
        while !self.peek().is_eof() {
            if matches!(self.peek().kind, TokenKind::Variable(_)) {
                self.parse_variable(&mut sheet)?;
            } else {
                let rules = self.parse_ruleset(None)?;
                sheet.rules.extend(rules);
            }
        }
        Ok(sheet)
    }

    /// `$name: value;`
    fn parse_variable(&mut self, sheet: &mut StyleSheet) -> Result<(), ParseError> {
        let token = self.advance();
        let name = match &token.kind {
            TokenKind::Variable(name) => name.clone(),
            _ => return Err(self.unexpected(&token, "variable")),
        };
        self.expect(TokenKind::Colon, "':' after variable name")?;

        let (value, important) = self.parse_value(&format!("${name}"))?;
        if important {
            return Err(ParseError::new(
                format!("'!important' is not allowed on variable '${name}'"),
                token.position.line,
                token.position.column,
            ));
        }
        self.expect(TokenKind::Semicolon, "';' after variable value")?;
        sheet.variables.define(name, value);
        Ok(())
    }

    /// Parses `selectors { body }` and returns the flattened rules it produces:
    /// the block's own rules first, then those of its nested blocks.
    fn parse_ruleset(
        &mut self,
        parents: Option<&[SelectorChain]>,
    ) -> Result<Vec<Rule>, ParseError> {
        let selectors = self.parse_selector_list(parents.is_some())?;
        let selectors = match parents {
            Some(parents) => flatten::nest_all(parents, &selectors),
            None => selectors,
        };
        self.expect(TokenKind::OpenBrace, "'{' or a selector")?;

        // Reserved before the body so nested rules always come later.
        let order = self.next_order;
        self.next_order += 1;

        let mut declarations: Vec<Declaration> = Vec::new();
        let mut nested_rules = Vec::new();

        loop {
            let token = self.peek();
            if token.kind == TokenKind::CloseBrace {
                self.advance();
                break;
            } else if token.is_eof() {
                return Err(self.unexpected(token, "'}' to close the block"));
            } else if token.kind == TokenKind::Semicolon {
                self.advance();
            } else if self.at_nested_rule() {
                nested_rules.extend(self.parse_ruleset(Some(&selectors))?);
            } else {
                let declaration = self.parse_declaration()?;
                match declarations
                    .iter_mut()
                    .find(|d| d.property == declaration.property)
                {
                    Some(existing) => existing.value = declaration.value,
                    None => declarations.push(declaration),
                }
            }
        }

        let mut rules = Vec::with_capacity(selectors.len() + nested_rules.len());
        if !declarations.is_empty() {
            for chain in &selectors {
                rules.push(Rule::new(chain.to_selector(), declarations.clone(), order));
            }
        }
        rules.extend(nested_rules);
        Ok(rules)
    }

    /// Decides whether the block item at the cursor is a nested rule.
    ///
    /// Scans ahead without consuming anything: the item is a rule if a `{`
    /// shows up before the `;` or `}` that would end a declaration. Brackets
    /// and parentheses are skipped as balanced groups so `[a=";"]` and
    /// `:nth-child(...)` do not confuse the scan.
    fn at_nested_rule(&self) -> bool {
        if self.peek().is_delim('&') {
            return true;
        }

        let mut depth = 0usize;
        for token in &self.tokens[self.pos..] {
            match token.kind {
                TokenKind::OpenBracket | TokenKind::OpenParen => depth += 1,
                TokenKind::CloseBracket | TokenKind::CloseParen => depth = depth.saturating_sub(1),
                TokenKind::OpenBrace if depth == 0 => return true,
                TokenKind::Semicolon | TokenKind::CloseBrace if depth == 0 => return false,
                TokenKind::EndOfFile => return false,
                _ => {}
            }
        }
        false
    }

    /// `property: value [!important];`
    fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        let token = self.advance();
        let property = match &token.kind {
            TokenKind::Identifier(name) => name.clone(),
            _ => return Err(self.unexpected(&token, "a property name")),
        };
        self.expect(TokenKind::Colon, "':' after property name")?;

        let (raw, important) = self.parse_value(&property)?;
        if self.peek().kind == TokenKind::Semicolon {
            self.advance();
        }

        Ok(Declaration {
            property,
            value: PropertyValue { raw, important },
        })
    }

    /// Captures a value up to (not including) `;`, `}` or end of input.
    ///
    /// Tokens are re-joined with a single space wherever the source had
    /// whitespace. A trailing `!important` is removed and reported separately.
    /// An empty value is an error positioned at the terminating token.
    fn parse_value(&mut self, owner: &str) -> Result<(String, bool), ParseError> {
        let start = self.pos;
        loop {
            let token = self.peek();
            match token.kind {
                TokenKind::Semicolon | TokenKind::CloseBrace | TokenKind::EndOfFile => break,
                TokenKind::OpenBrace => {
                    return Err(self.unexpected(token, &format!("a value for '{owner}'")));
                }
                _ => {}
            }
            self.advance();
        }

        let mut tokens = &self.tokens[start..self.pos];
        let mut important = false;
        if let [rest @ .., bang, Token { kind: TokenKind::Identifier(word), .. }] = tokens {
            if bang.is_delim('!') && word.eq_ignore_ascii_case("important") {
                important = true;
                tokens = rest;
            }
        }

        if tokens.is_empty() {
            return Err(self.unexpected(self.peek(), &format!("a value for '{owner}'")));
        }
        Ok((join_tokens(tokens), important))
    }
}

/// Renders tokens back to text, inserting one space wherever a token was
/// preceded by whitespace in the source.
pub(crate) fn join_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 && token.preceded_by_whitespace {
            out.push(' ');
        }
        out.push_str(&token.to_css());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_tokens_are_rejoined_with_single_spaces() {
        let sheet = parse_stylesheet("Box { border-chars: \"─\"   \"─\" \"│\"\n\"│\"; }").unwrap();
        assert_eq!(
            sheet.rules[0].get("border-chars").unwrap().raw,
            "\"─\" \"─\" \"│\" \"│\""
        );
    }

    #[test]
    fn functional_values_keep_their_shape() {
        let sheet = parse_stylesheet("Box { width: fill(2); color: rgb(1, 2, 3); }").unwrap();
        assert_eq!(sheet.rules[0].get("width").unwrap().raw, "fill(2)");
        assert_eq!(sheet.rules[0].get("color").unwrap().raw, "rgb(1, 2, 3)");
    }

    #[test]
    fn lookahead_skips_brackets() {
        let sheet = parse_stylesheet("Box { [title=\";\"] { color: red; } }").unwrap();
        assert_eq!(sheet.rules.len(), 1);
        assert_eq!(sheet.rules[0].selector.to_string(), "Box [title=\";\"]");
    }

    #[test]
    fn duplicate_property_keeps_last_value() {
        let sheet = parse_stylesheet("Box { color: red; width: 1; color: blue; }").unwrap();
        let decls = &sheet.rules[0].declarations;
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].property, "color");
        assert_eq!(decls[0].value.raw, "blue");
    }

    #[test]
    fn important_on_variable_is_rejected() {
        assert!(parse_stylesheet("$a: red !important;").is_err());
    }
}
