use crate::operation::Selection;
use crate::wire;
use crate::wire::WireFormat;
use crate::wire::WireFormatter;

/// An ordered sequence of [`Selection`]s.
///
/// Construction order is semantically meaningful: items render in exactly
/// the order supplied, joined by `,` inside braces.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SelectionSet {
    pub(super) selections: Vec<Selection>,
}
impl SelectionSet {
    pub fn new(selections: Vec<Selection>) -> Self {
        Self { selections }
    }

    pub fn empty() -> Self {
        Self { selections: vec![] }
    }

    pub fn items(&self) -> &Vec<Selection> {
        &self.selections
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}
impl WireFormat for SelectionSet {
    fn write_wire(&self, f: &mut WireFormatter) {
        f.write_char('{');
        wire::write_comma_joined(f, &self.selections);
        f.write_char('}');
    }
}
impl std::fmt::Display for SelectionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        wire::fmt_wire(self, f)
    }
}
impl std::convert::From<Vec<Selection>> for SelectionSet {
    fn from(selections: Vec<Selection>) -> Self {
        Self::new(selections)
    }
}
