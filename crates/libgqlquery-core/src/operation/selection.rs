use crate::operation::CompositeSelection;
use crate::operation::LeafSelection;
use crate::operation::SelectionSet;
use crate::wire;
use crate::wire::WireFormat;
use crate::wire::WireFormatter;
use thiserror::Error;

type Result<T> = std::result::Result<T, SelectionBuildError>;

/// A single requested field within an operation's field set.
///
/// A [`Selection::Leaf`] is a name-only field and renders as exactly its
/// name. A [`Selection::Composite`] carries an ordered set of nested
/// sub-selections and renders as `name{...}`; sub-selections may themselves
/// be leaves or composites, to arbitrary depth.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Selection {
    Composite(CompositeSelection),
    Leaf(LeafSelection),
}
impl Selection {
    /// Convenience wrapper around [`LeafSelection::new()`].
    pub fn leaf(name: impl Into<String>) -> Result<Self> {
        Ok(Self::Leaf(LeafSelection::new(name)?))
    }

    /// Convenience wrapper around [`CompositeSelection::new()`].
    ///
    /// `selections` becomes the composite's sub-selection set in the order
    /// supplied. An empty `selections` is permitted and renders as an
    /// explicit `name{}`.
    pub fn composite(
        name: impl Into<String>,
        selections: Vec<Selection>,
    ) -> Result<Self> {
        Ok(Self::Composite(CompositeSelection::new(
            name,
            SelectionSet::new(selections),
        )?))
    }

    /// The name of the field this selection requests.
    pub fn name(&self) -> &str {
        match self {
            Self::Composite(selection) => selection.name(),
            Self::Leaf(selection) => selection.name(),
        }
    }
}
impl WireFormat for Selection {
    fn write_wire(&self, f: &mut WireFormatter) {
        match self {
            Self::Composite(selection) => selection.write_wire(f),
            Self::Leaf(selection) => selection.write_wire(f),
        }
    }
}
impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        wire::fmt_wire(self, f)
    }
}
impl std::convert::TryFrom<&str> for Selection {
    type Error = SelectionBuildError;

    fn try_from(name: &str) -> Result<Self> {
        Self::leaf(name)
    }
}
impl std::convert::TryFrom<String> for Selection {
    type Error = SelectionBuildError;

    fn try_from(name: String) -> Result<Self> {
        Self::leaf(name)
    }
}

#[derive(Clone, Debug, Error)]
pub enum SelectionBuildError {
    #[error("Field selections must be given a non-empty field name.")]
    EmptyFieldName,
}
