// Copyright The Glide Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A small text format for describing models.
//!
//! ```text
//! (COLUMN (ROW weight=1.0 left (COLUMN middle.top middle middle.bottom) right) bottom)
//! ```
//!
//! `(ROW ...)` and `(COLUMN ...)` are splits, `(LEAF name=x weight=y)` is a
//! leaf, and a bare word is shorthand for `(LEAF name=word)`. Dividers are
//! never written; one is inserted between each pair of siblings.

use std::iter::Peekable;
use std::ops::Range;
use std::str::CharIndices;

use tracing::error;

use super::tree::{Model, NodeId};
use crate::geometry::Orientation;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    /// Byte range of the offending input.
    pub span: Range<usize>,
}

impl ParseError {
    fn new(message: impl Into<String>, span: Range<usize>) -> Self {
        ParseError { message: message.into(), span }
    }

    /// Renders the error as an annotated snippet of `input`.
    pub fn render(&self, input: &str) -> String {
        use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

        let span = self.span.start.min(input.len())..self.span.end.min(input.len());
        let snippet = Snippet::source(input)
            .annotation(AnnotationKind::Primary.span(span).label(self.message.as_str()));
        let report = Level::ERROR.primary_title("could not parse model").element(snippet);
        format!("{}", Renderer::plain().render(&[report]))
    }
}

/// Parses a model, logging and discarding any error.
pub fn parse_model(text: &str) -> Option<Model> {
    match Model::parse(text) {
        Ok(model) => Some(model),
        Err(e) => {
            error!(span = ?e.span, "could not parse model: {e}");
            None
        }
    }
}

impl Model {
    /// Parses a model. Only the first top-level node is kept.
    pub fn parse(text: &str) -> Result<Model, ParseError> {
        let mut parser = Parser {
            tokens: Lexer::new(text).peekable(),
            model: Model::new(),
            end: text.len(),
        };
        let holder = parser.model.split(Orientation::Horizontal, []);
        parser.parse_split(holder)?;

        let mut model = parser.model;
        let children = model.children(holder).to_vec();
        let Some(&first) = children.first() else {
            return Err(ParseError::new("model is empty", 0..text.len()));
        };
        model
            .set_children(holder, vec![])
            .map_err(|e| ParseError::new(e.to_string(), 0..text.len()))?;
        for &extra in &children[1..] {
            model.free(extra);
        }
        model.free(holder);
        model
            .set_root(first)
            .map_err(|e| ParseError::new(e.to_string(), 0..text.len()))?;
        Ok(model)
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Token<'a> {
    Open,
    Close,
    Equals,
    Word(&'a str),
    Number(f64),
}

struct Lexer<'a> {
    src: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Lexer { src, chars: src.char_indices().peekable() }
    }

    fn take_while(&mut self, start: usize, pred: impl Fn(char) -> bool) -> Range<usize> {
        let mut end = start;
        while let Some(&(i, c)) = self.chars.peek() {
            if !pred(c) {
                break;
            }
            end = i + c.len_utf8();
            self.chars.next();
        }
        start..end
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.')
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<(Token<'a>, Range<usize>), ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, c) = loop {
            let (i, c) = self.chars.next()?;
            if !c.is_whitespace() {
                break (i, c);
            }
        };
        let single = start..start + c.len_utf8();
        let token = match c {
            '(' => Ok((Token::Open, single)),
            ')' => Ok((Token::Close, single)),
            '=' => Ok((Token::Equals, single)),
            c if c.is_alphabetic() || c == '_' => {
                let span = self.take_while(single.end, is_word_char);
                let span = start..span.end;
                let src = self.src;
                Ok((Token::Word(&src[span.clone()]), span))
            }
            c if c.is_ascii_digit() || c == '-' || c == '.' => {
                let rest = self.take_while(single.end, |c| c.is_ascii_digit() || c == '.');
                let span = start..rest.end;
                match self.src[span.clone()].parse() {
                    Ok(n) => Ok((Token::Number(n), span)),
                    Err(_) => Err(ParseError::new("invalid number", span)),
                }
            }
            c => Err(ParseError::new(format!("unexpected character '{c}'"), single)),
        };
        Some(token)
    }
}

struct Parser<'a> {
    tokens: Peekable<Lexer<'a>>,
    model: Model,
    end: usize,
}

impl<'a> Parser<'a> {
    fn next_token(&mut self) -> Result<Option<(Token<'a>, Range<usize>)>, ParseError> {
        self.tokens.next().transpose()
    }

    fn expect_token(&mut self, what: &str) -> Result<(Token<'a>, Range<usize>), ParseError> {
        self.next_token()?
            .ok_or_else(|| ParseError::new(format!("expected {what}"), self.end..self.end))
    }

    fn parse_split(&mut self, split: NodeId) -> Result<(), ParseError> {
        while let Some((token, span)) = self.next_token()? {
            match token {
                Token::Close => break,
                Token::Word(word)
                    if word.eq_ignore_ascii_case("weight") || word.eq_ignore_ascii_case("name") =>
                {
                    self.parse_attribute(word, span, split)?
                }
                Token::Word(word) => {
                    let leaf = self.model.leaf(word);
                    self.model.push_child(split, leaf);
                }
                Token::Open => {
                    let (token, span) = self.expect_token("a node type")?;
                    let Token::Word(node_type) = token else {
                        return Err(ParseError::new("invalid node type", span));
                    };
                    if node_type.eq_ignore_ascii_case("leaf") {
                        self.parse_leaf(split)?;
                    } else if node_type.eq_ignore_ascii_case("row") {
                        self.parse_child_split(split, Orientation::Horizontal)?;
                    } else if node_type.eq_ignore_ascii_case("column") {
                        self.parse_child_split(split, Orientation::Vertical)?;
                    } else {
                        return Err(ParseError::new(
                            format!("unrecognized node type '{node_type}'"),
                            span,
                        ));
                    }
                }
                Token::Equals | Token::Number(_) => {
                    return Err(ParseError::new("unexpected token", span));
                }
            }
        }
        Ok(())
    }

    fn parse_child_split(&mut self, parent: NodeId, orientation: Orientation) -> Result<(), ParseError> {
        let split = self.model.split(orientation, []);
        self.model.push_child(parent, split);
        self.parse_split(split)
    }

    fn parse_leaf(&mut self, parent: NodeId) -> Result<(), ParseError> {
        let leaf = self.model.leaf("");
        while let Some((token, span)) = self.next_token()? {
            match token {
                Token::Close => break,
                Token::Word(word) => self.parse_attribute(word, span, leaf)?,
                _ => return Err(ParseError::new("bad leaf", span)),
            }
        }
        self.model.push_child(parent, leaf);
        Ok(())
    }

    fn parse_attribute(
        &mut self,
        name: &str,
        name_span: Range<usize>,
        node: NodeId,
    ) -> Result<(), ParseError> {
        let (token, span) = self.expect_token("'='")?;
        if token != Token::Equals {
            return Err(ParseError::new(format!("expected '=' after {name}"), span));
        }
        if name.eq_ignore_ascii_case("weight") {
            let (token, span) = self.expect_token("a weight")?;
            let Token::Number(weight) = token else {
                return Err(ParseError::new("invalid weight", span));
            };
            self.model
                .set_weight(node, weight)
                .map_err(|e| ParseError::new(e.to_string(), span))
        } else if name.eq_ignore_ascii_case("name") {
            let (token, span) = self.expect_token("a name")?;
            let Token::Word(value) = token else {
                return Err(ParseError::new("invalid name", span));
            };
            self.model.set_name(node, value).map_err(|e| ParseError::new(e.to_string(), span))
        } else {
            Err(ParseError::new(format!("unrecognized attribute \"{name}\""), name_span))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_log::test;

    use super::*;
    use crate::model::NodeKind;

    #[test]
    fn parses_row_of_leaves() {
        let model = Model::parse("(ROW (LEAF name=a) (LEAF name=b weight=1.0))").unwrap();
        let root = model.root().unwrap();
        assert!(model.is_row_layout(root));
        let children = model.children(root);
        assert_eq!(children.len(), 3);
        assert_eq!(model.name(children[0]), Some("a"));
        assert_eq!(model.weight(children[0]), 0.0);
        assert!(model.is_divider(children[1]));
        assert_eq!(model.name(children[2]), Some("b"));
        assert_eq!(model.weight(children[2]), 1.0);
    }

    #[test]
    fn bare_words_are_leaves() {
        let model = Model::parse("(column top (row left right) bottom)").unwrap();
        let root = model.root().unwrap();
        assert!(!model.is_row_layout(root));
        let names: Vec<_> = model.leaves().map(|n| model.name(n).unwrap().to_owned()).collect();
        assert_eq!(names, ["top", "left", "right", "bottom"]);
        let nested = model.children(root)[2];
        assert_eq!(
            model.kind(nested),
            &NodeKind::Split {
                children: model.children(nested).to_vec(),
                orientation: Orientation::Horizontal,
                name: None,
            }
        );
    }

    #[test]
    fn split_attributes() {
        let model = Model::parse("(ROW name=outer (COLUMN weight=0.5 a b) c)").unwrap();
        let root = model.root().unwrap();
        assert_eq!(model.name(root), Some("outer"));
        let column = model.children(root)[0];
        assert_eq!(model.weight(column), 0.5);
        assert_eq!(model.children(column).len(), 3);
    }

    #[test]
    fn single_leaf_model() {
        let model = Model::parse("(LEAF name=only weight=0.25)").unwrap();
        let root = model.root().unwrap();
        assert!(model.is_leaf(root));
        assert_eq!(model.parent(root), None);
        assert_eq!(model.weight(root), 0.25);
    }

    #[test]
    fn only_the_first_top_level_node_is_kept() {
        let model = Model::parse("(ROW a b) (ROW c d)").unwrap();
        let names: Vec<_> = model.leaves().map(|n| model.name(n).unwrap().to_owned()).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(model.node_for_name("c"), None);
    }

    #[test]
    fn reports_errors_with_spans() {
        let err = Model::parse("(ROW (GRID a b))").unwrap_err();
        assert_eq!(err.message, "unrecognized node type 'GRID'");
        assert_eq!(err.span, 6..10);

        let err = Model::parse("(ROW (LEAF name=a weight=2) b)").unwrap_err();
        assert_eq!(err.message, "invalid weight 2; weights must be between 0.0 and 1.0");
        assert_eq!(err.span, 25..26);

        let err = Model::parse("(ROW (LEAF name a))").unwrap_err();
        assert_eq!(err.message, "expected '=' after name");

        let err = Model::parse("(ROW (LEAF size=3) a)").unwrap_err();
        assert_eq!(err.message, "unrecognized attribute \"size\"");

        let err = Model::parse("   ").unwrap_err();
        assert_eq!(err.message, "model is empty");
    }

    #[test]
    fn renders_errors_against_the_input() {
        let input = "(ROW (GRID a b))";
        let rendered = Model::parse(input).unwrap_err().render(input);
        assert!(rendered.contains("could not parse model"), "{rendered}");
        assert!(rendered.contains("unrecognized node type 'GRID'"), "{rendered}");
    }

    #[test]
    fn lossy_parse_returns_none() {
        assert!(parse_model("(ROW (LEAF weight=x))").is_none());
        assert!(parse_model("(ROW a b)").is_some());
    }
}
