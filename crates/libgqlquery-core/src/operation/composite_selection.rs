use crate::operation::SelectionBuildError;
use crate::operation::SelectionSet;
use crate::wire::WireFormat;
use crate::wire::WireFormatter;

type Result<T> = std::result::Result<T, SelectionBuildError>;

/// A field selection carrying a nested set of sub-selections.
///
/// The sub-selection set may be empty; an empty set still renders an
/// explicit `{}` after the field name, which is distinct from a
/// [`LeafSelection`](crate::operation::LeafSelection).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CompositeSelection {
    pub(super) name: String,
    pub(super) selection_set: SelectionSet,
}
impl CompositeSelection {
    pub fn new(
        name: impl Into<String>,
        selection_set: SelectionSet,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(SelectionBuildError::EmptyFieldName);
        }
        Ok(Self {
            name,
            selection_set,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Access the [`SelectionSet`] nested under this field.
    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }
}
impl WireFormat for CompositeSelection {
    fn write_wire(&self, f: &mut WireFormatter) {
        f.write_str(self.name.as_str());
        self.selection_set.write_wire(f);
    }
}
