//! Typed projections out of one decoded policy map.
//!
//! Every accessor fails with a descriptive error naming the policy index and
//! the field, instead of casting the untyped value blindly.

use serde_json::{Map, Number, Value};

use crate::error::{Error, Result};

#[derive(Clone, Copy)]
pub(crate) struct Fields<'a> {
    index: usize,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(index: usize, map: &'a Map<String, Value>) -> Self {
        Self { index, map }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &'a String> + 'a {
        self.map.keys()
    }

    /// Absent keys and explicit `null` both read as missing.
    pub(crate) fn get(&self, field: &str) -> Option<&'a Value> {
        match self.map.get(field) {
            None | Some(Value::Null) => None,
            Some(v) => Some(v),
        }
    }

    fn require(&self, field: &str) -> Result<&'a Value> {
        self.get(field).ok_or_else(|| Error::MissingField {
            index: self.index,
            field: field.to_string(),
        })
    }

    pub(crate) fn invalid(&self, field: &str, expected: &'static str) -> Error {
        Error::InvalidField {
            index: self.index,
            field: field.to_string(),
            expected,
        }
    }

    pub(crate) fn string(&self, field: &str) -> Result<&'a str> {
        self.require(field)?
            .as_str()
            .ok_or_else(|| self.invalid(field, "a string"))
    }

    pub(crate) fn number(&self, field: &str) -> Result<&'a Number> {
        match self.require(field)? {
            Value::Number(n) => Ok(n),
            _ => Err(self.invalid(field, "a number")),
        }
    }

    pub(crate) fn opt_array(&self, field: &str) -> Result<&'a [Value]> {
        match self.get(field) {
            None => Ok(&[]),
            Some(Value::Array(items)) => Ok(items),
            Some(_) => Err(self.invalid(field, "a list")),
        }
    }

    pub(crate) fn opt_object(&self, field: &str) -> Result<Option<&'a Map<String, Value>>> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(_) => Err(self.invalid(field, "a mapping")),
        }
    }
}
