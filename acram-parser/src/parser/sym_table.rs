#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The table of free parameters that appear in a function definition.
///
/// Parameters are stored in the order they first occur in the definition. Expression trees refer
/// to a parameter by its index in this table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SymbolTable {
    names: Vec<String>,
}

impl SymbolTable {
    /// Creates an empty symbol table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of parameters in the table.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the table has no parameters.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Appends a parameter to the table, returning its index. No check for duplicates is done.
    pub fn push(&mut self, name: impl Into<String>) -> usize {
        self.names.push(name.into());
        self.names.len() - 1
    }

    /// Returns the index of the first parameter with the given name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|existing| existing == name)
    }

    /// Returns the index of the parameter with the given name, appending it if it is not in the
    /// table yet.
    pub fn intern(&mut self, name: &str) -> usize {
        match self.position(name) {
            Some(index) => index,
            None => self.push(name),
        }
    }

    /// Returns the name of the parameter at the given index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Returns the parameter names in order of first occurrence.
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }
}
