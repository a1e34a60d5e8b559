//! Purpose: Hand-written recursive-descent JSON parser over a byte cursor.
//! Exports: `parse`.
//! Role: Sole ingestion boundary turning source text into a `Node` tree.
//! Invariants: The cursor only moves forward; lookahead is one byte plus fixed keyword windows.
//! Invariants: Malformed input surfaces as a typed `Error`; the parser never panics or exits.
//! Invariants: Input after the first complete value is ignored.
//! Notes: Escape sequences, leading minus signs, and uppercase exponent markers sit
//! outside the accepted dialect; tests pin those limitations down.
use std::collections::BTreeMap;

use crate::core::error::{Error, ErrorKind};
use crate::core::node::Node;

pub fn parse(src: &str) -> Result<Node, Error> {
    let mut parser = Parser { src, pos: 0 };
    parser.parse_value()
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(byte) if byte.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    // Structural characters are ASCII, so byte dispatch keeps `pos` on a
    // char boundary at every production entry.
    fn parse_value(&mut self) -> Result<Node, Error> {
        self.skip_whitespace();
        match self.peek() {
            Some(b'n') => self.parse_keyword("null", Node::Null),
            Some(b't') => self.parse_keyword("true", Node::Bool(true)),
            Some(b'f') => self.parse_keyword("false", Node::Bool(false)),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(b'"') => self.parse_string().map(Node::Str),
            Some(byte) if byte.is_ascii_digit() => self.parse_number(),
            Some(b']') | Some(b'}') => Err(Error::new(ErrorKind::UnexpectedCharacter)
                .with_message(format!(
                    "unexpected closing delimiter `{}`",
                    self.current_char()
                ))
                .with_offset(self.pos)),
            Some(_) => Err(Error::new(ErrorKind::UnexpectedCharacter)
                .with_message(format!("unparseable character `{}`", self.current_char()))
                .with_offset(self.pos)),
            None => Err(Error::new(ErrorKind::UnexpectedEnd)
                .with_message("expected a value before end of input")
                .with_offset(self.pos)),
        }
    }

    fn parse_keyword(&mut self, keyword: &str, node: Node) -> Result<Node, Error> {
        let rest = &self.src[self.pos..];
        if rest.starts_with(keyword) {
            self.pos += keyword.len();
            return Ok(node);
        }
        let found: String = rest.chars().take(keyword.len()).collect();
        Err(Error::new(ErrorKind::LexicalMismatch)
            .with_message(format!("expected `{keyword}`, found `{found}`"))
            .with_offset(self.pos))
    }

    // Scans digits, `.`, and lowercase `e` only. A leading `-` or uppercase
    // `E` never reaches this production (see the dispatch table) and is not
    // consumed here.
    fn parse_number(&mut self) -> Result<Node, Error> {
        let start = self.pos;
        while matches!(self.peek(), Some(byte) if byte.is_ascii_digit() || byte == b'.' || byte == b'e')
        {
            self.pos += 1;
        }
        let text = &self.src[start..self.pos];
        if text.contains('.') || text.contains('e') {
            match text.parse::<f64>() {
                Ok(value) => Ok(Node::Float(value)),
                Err(_) => Err(Error::new(ErrorKind::NumberConversion)
                    .with_message(format!("cannot convert `{text}` to a float"))
                    .with_offset(start)),
            }
        } else {
            match text.parse::<i64>() {
                Ok(value) => Ok(Node::Int(value)),
                Err(_) => Err(Error::new(ErrorKind::NumberConversion)
                    .with_message(format!("cannot convert `{text}` to an integer"))
                    .with_offset(start)),
            }
        }
    }

    // Literal byte scan to the next `"`. No escape handling: a backslash is
    // content and an embedded quote terminates the string.
    fn parse_string(&mut self) -> Result<String, Error> {
        if self.peek() == Some(b'"') {
            self.pos += 1;
        }
        let bytes = self.src.as_bytes();
        let start = self.pos;
        let mut end = start;
        while end < bytes.len() && bytes[end] != b'"' {
            end += 1;
        }
        if end == bytes.len() {
            return Err(Error::new(ErrorKind::UnterminatedString)
                .with_message("missing closing quote")
                .with_offset(start));
        }
        let text = self.src[start..end].to_string();
        self.pos = end + 1;
        Ok(text)
    }

    fn parse_array(&mut self) -> Result<Node, Error> {
        let open = self.pos;
        self.pos += 1;
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => {
                    return Err(Error::new(ErrorKind::UnterminatedArray)
                        .with_message("missing closing bracket")
                        .with_offset(open));
                }
                Some(b']') => break,
                Some(_) => {}
            }
            items.push(self.parse_value()?);
            self.skip_whitespace();
            while self.peek() == Some(b',') {
                self.pos += 1;
            }
        }
        self.pos += 1;
        Ok(Node::Array(items))
    }

    fn parse_object(&mut self) -> Result<Node, Error> {
        let open = self.pos;
        self.pos += 1;
        let mut map = BTreeMap::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => {
                    return Err(Error::new(ErrorKind::UnterminatedObject)
                        .with_message("missing closing brace")
                        .with_offset(open));
                }
                Some(b'}') => break,
                Some(b'"') => {}
                Some(_) => {
                    return Err(Error::new(ErrorKind::MalformedKey)
                        .with_message("object key must be a string")
                        .with_offset(self.pos));
                }
            }
            let key = self.parse_string()?;
            self.skip_whitespace();
            if self.peek() == Some(b':') {
                self.pos += 1;
            }
            let value = self.parse_value()?;
            map.insert(key, value);
            self.skip_whitespace();
            while self.peek() == Some(b',') {
                self.pos += 1;
            }
        }
        self.pos += 1;
        Ok(Node::Object(map))
    }

    fn current_char(&self) -> char {
        self.src[self.pos..].chars().next().unwrap_or('\u{fffd}')
    }
}
