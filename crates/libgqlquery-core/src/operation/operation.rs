use crate::operation::ArgumentSet;
use crate::operation::OperationKind;
use crate::operation::SelectionSet;
use crate::wire;
use crate::wire::WireFormat;
use crate::wire::WireFormatter;

/// An immutable top-level GraphQL request: an operation kind, an operation
/// name, an optional [`ArgumentSet`], and the [`SelectionSet`] of requested
/// fields.
///
/// Built once via an [`OperationBuilder`](crate::operation::OperationBuilder)
/// and then queried for its serialized string any number of times;
/// serialization is a pure read.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Operation {
    pub(super) arguments: Option<ArgumentSet>,
    pub(super) include_query_key: bool,
    pub(super) kind: OperationKind,
    pub(super) name: String,
    pub(super) selection_set: SelectionSet,
}
impl Operation {
    /// Access the [`ArgumentSet`] for this operation, if one was supplied.
    ///
    /// `None` serializes with no parentheses at all; an explicitly-supplied
    /// empty set serializes as `()`.
    pub fn arguments(&self) -> Option<&ArgumentSet> {
        self.arguments.as_ref()
    }

    /// Whether the serialized output is prefixed with the `query=` form key.
    pub fn include_query_key(&self) -> bool {
        self.include_query_key
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Access the top-level [`SelectionSet`] of this operation.
    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    /// Serialize this operation into the exact wire-format request string.
    ///
    /// Deterministic and idempotent: repeated calls on the same operation
    /// yield identical strings.
    pub fn query_string(&self) -> String {
        let mut f = WireFormatter::default();
        self.write_wire(&mut f);
        f.finish()
    }
}
impl WireFormat for Operation {
    fn write_wire(&self, f: &mut WireFormatter) {
        if self.include_query_key {
            f.write_str("query=");
        }
        if self.kind == OperationKind::Mutation {
            f.write_str(self.kind.as_str());
        }
        f.write_char('{');
        f.write_str(self.name.as_str());
        if let Some(arguments) = &self.arguments {
            f.write_char('(');
            arguments.write_wire(f);
            f.write_char(')');
        }
        self.selection_set.write_wire(f);
        f.write_char('}');
    }
}
impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        wire::fmt_wire(self, f)
    }
}
