use crate::Value;
use crate::wire;
use crate::wire::WireFormat;
use crate::wire::WireFormatter;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, ArgumentSetBuildError>;

/// An insertion-ordered set of named argument literals attached to an
/// operation.
///
/// Each entry renders as `name:literal`; entries are joined by `,` in
/// insertion order with no trailing separator. The surrounding parentheses
/// belong to the operation envelope, so an empty set renders as the empty
/// string.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ArgumentSet {
    arguments: IndexMap<String, Value>,
}
impl ArgumentSet {
    pub fn new() -> Self {
        Self {
            arguments: IndexMap::new(),
        }
    }

    /// Add an argument after any previously added arguments.
    pub fn add(
        mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ArgumentSetBuildError::EmptyArgumentName);
        }
        if self.arguments.contains_key(name.as_str()) {
            return Err(ArgumentSetBuildError::DuplicateArgumentName {
                argument_name: name,
            });
        }
        self.arguments.insert(name, value.into());
        Ok(self)
    }

    /// Produce an [`ArgumentSet`] from a sequence of name/value entries,
    /// preserving the sequence order.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (String, Value)>,
    ) -> Result<Self> {
        let mut set = Self::new();
        for (name, value) in entries {
            set = set.add(name, value)?;
        }
        Ok(set)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.arguments.get(name)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.arguments.iter()
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }
}
impl WireFormat for ArgumentSet {
    fn write_wire(&self, f: &mut WireFormatter) {
        wire::write_comma_joined(f, self.arguments.iter());
    }
}
impl WireFormat for (&String, &Value) {
    fn write_wire(&self, f: &mut WireFormatter) {
        let (name, value) = self;
        f.write_str(name.as_str());
        f.write_char(':');
        value.write_wire(f);
    }
}
impl std::fmt::Display for ArgumentSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        wire::fmt_wire(self, f)
    }
}

#[derive(Clone, Debug, Error)]
pub enum ArgumentSetBuildError {
    #[error("Found multiple arguments with the same name: `{argument_name}`")]
    DuplicateArgumentName {
        argument_name: String,
    },

    #[error("Arguments must be given a non-empty argument name.")]
    EmptyArgumentName,
}
