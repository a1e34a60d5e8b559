use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    LexicalMismatch,
    NumberConversion,
    UnterminatedString,
    UnterminatedArray,
    UnterminatedObject,
    MalformedKey,
    UnexpectedCharacter,
    UnexpectedEnd,
    TypeMismatch,
    IndexOutOfRange,
    KeyNotFound,
    Usage,
    Io,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    offset: Option<usize>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            offset: None,
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(offset) = self.offset {
            write!(f, " (offset: {offset})")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

pub fn to_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::LexicalMismatch
        | ErrorKind::NumberConversion
        | ErrorKind::UnterminatedString
        | ErrorKind::UnterminatedArray
        | ErrorKind::UnterminatedObject
        | ErrorKind::MalformedKey
        | ErrorKind::UnexpectedCharacter
        | ErrorKind::UnexpectedEnd => 1,
        ErrorKind::Usage => 2,
        ErrorKind::TypeMismatch | ErrorKind::IndexOutOfRange | ErrorKind::KeyNotFound => 3,
        ErrorKind::Io => 8,
    }
}
