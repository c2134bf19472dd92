use crate::operation::ArgumentSet;
use crate::operation::ArgumentSetBuildError;
use crate::operation::Operation;
use crate::operation::OperationKind;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::Value;
use thiserror::Error;

type Result<T> = std::result::Result<T, OperationBuildError>;

/// Assembles an [`Operation`] one piece at a time.
///
/// All fallibility lives here and in the selection constructors: once
/// [`OperationBuilder::build()`] succeeds, serialization of the produced
/// [`Operation`] is total.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationBuilder {
    arguments: Option<ArgumentSet>,
    include_query_key: bool,
    kind: OperationKind,
    name: String,
    selections: Vec<Selection>,
}
impl OperationBuilder {
    pub fn new(kind: OperationKind, name: impl Into<String>) -> Self {
        Self {
            arguments: None,
            include_query_key: false,
            kind,
            name: name.into(),
            selections: vec![],
        }
    }

    /// Convenience wrapper around [`OperationBuilder::new()`] for a query
    /// operation.
    pub fn query(name: impl Into<String>) -> Self {
        Self::new(OperationKind::Query, name)
    }

    /// Convenience wrapper around [`OperationBuilder::new()`] for a mutation
    /// operation.
    pub fn mutation(name: impl Into<String>) -> Self {
        Self::new(OperationKind::Mutation, name)
    }

    /// Add an argument after any previously added arguments.
    ///
    /// The first added argument materializes the operation's
    /// [`ArgumentSet`].
    pub fn add_argument(
        mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self> {
        let arguments = self.arguments.take().unwrap_or_default();
        self.arguments = Some(arguments.add(name, value)?);
        Ok(self)
    }

    /// Add a [`Selection`] after any previously added `Selection`s.
    pub fn add_selection(mut self, selection: Selection) -> Result<Self> {
        self.selections.push(selection);
        Ok(self)
    }

    /// Set whether the serialized output is prefixed with the `query=` form
    /// key.
    pub fn include_query_key(mut self, include: bool) -> Result<Self> {
        self.include_query_key = include;
        Ok(self)
    }

    /// Set the full [`ArgumentSet`].
    ///
    /// NOTE: If any previous arguments were added (either using this
    /// function or [`OperationBuilder::add_argument()`]), they will be fully
    /// replaced by the `ArgumentSet` passed here. Passing an empty set is
    /// meaningful: the operation then serializes with a literal `()`.
    pub fn set_arguments(mut self, arguments: ArgumentSet) -> Result<Self> {
        self.arguments = Some(arguments);
        Ok(self)
    }

    /// Set the list of [`Selection`]s.
    ///
    /// NOTE: If any previous selections were added (either using this
    /// function or [`OperationBuilder::add_selection()`]), they will be
    /// fully replaced by the `Selection`s passed here.
    pub fn set_selections(mut self, selections: Vec<Selection>) -> Result<Self> {
        self.selections = selections;
        Ok(self)
    }

    /// Consume this [`OperationBuilder`] to produce an [`Operation`].
    pub fn build(self) -> Result<Operation> {
        if self.name.is_empty() {
            return Err(OperationBuildError::EmptyOperationName);
        }
        Ok(Operation {
            arguments: self.arguments,
            include_query_key: self.include_query_key,
            kind: self.kind,
            name: self.name,
            selection_set: SelectionSet::new(self.selections),
        })
    }
}

#[derive(Clone, Debug, Error)]
pub enum OperationBuildError {
    #[error("Failure to build the argument set for this operation: {0}")]
    ArgumentSetBuildError(ArgumentSetBuildError),

    #[error("Operations must be given a non-empty operation name.")]
    EmptyOperationName,
}
impl std::convert::From<ArgumentSetBuildError> for OperationBuildError {
    fn from(value: ArgumentSetBuildError) -> Self {
        Self::ArgumentSetBuildError(value)
    }
}
