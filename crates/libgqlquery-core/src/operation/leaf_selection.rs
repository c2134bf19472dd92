use crate::operation::SelectionBuildError;
use crate::wire::WireFormat;
use crate::wire::WireFormatter;

type Result<T> = std::result::Result<T, SelectionBuildError>;

/// A name-only field selection: renders as exactly its field name.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct LeafSelection {
    pub(super) name: String,
}
impl LeafSelection {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(SelectionBuildError::EmptyFieldName);
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
impl WireFormat for LeafSelection {
    fn write_wire(&self, f: &mut WireFormatter) {
        f.write_str(self.name.as_str());
    }
}
