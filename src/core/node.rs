//! Purpose: Tree value model for parsed JSON documents.
//! Exports: `Node`.
//! Role: Owned recursive sum type shared by the parser, serializer, and CLI mutation paths.
//! Invariants: Object keys are unique; inserting an existing key overwrites its value.
//! Invariants: Array order is insertion order and survives mutation.
//! Invariants: Object iteration order is ascending by key (BTreeMap).
use std::collections::BTreeMap;

use crate::core::error::{Error, ErrorKind};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Node {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<Node>),
    Object(BTreeMap<String, Node>),
}

impl Node {
    /// Mutable handle to array element `index`.
    pub fn entry(&mut self, index: usize) -> Result<&mut Node, Error> {
        match self {
            Node::Array(items) => {
                let len = items.len();
                items.get_mut(index).ok_or_else(|| {
                    Error::new(ErrorKind::IndexOutOfRange)
                        .with_message(format!("index {index} out of range for array of {len}"))
                })
            }
            _ => Err(Error::new(ErrorKind::TypeMismatch)
                .with_message(format!("index {index} into a non-array node"))),
        }
    }

    /// Mutable handle to the object value stored under `key`.
    pub fn field(&mut self, key: &str) -> Result<&mut Node, Error> {
        match self {
            Node::Object(map) => map.get_mut(key).ok_or_else(|| {
                Error::new(ErrorKind::KeyNotFound).with_message(format!("no key `{key}`"))
            }),
            _ => Err(Error::new(ErrorKind::TypeMismatch)
                .with_message(format!("key `{key}` lookup on a non-object node"))),
        }
    }

    /// Appends `node` to an array, preserving prior element order.
    pub fn push(&mut self, node: Node) -> Result<(), Error> {
        match self {
            Node::Array(items) => {
                items.push(node);
                Ok(())
            }
            _ => Err(Error::new(ErrorKind::TypeMismatch).with_message("append to a non-array node")),
        }
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        match self {
            Node::Array(items) => items.get(index),
            _ => None,
        }
    }

    pub fn get_field(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Object(map) => map.get(key),
            _ => None,
        }
    }
}
