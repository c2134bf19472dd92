/// The category of a top-level GraphQL request: a read (`query`) or a
/// write (`mutation`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum OperationKind {
    Mutation,
    Query,
}
impl OperationKind {
    /// Returns the GraphQL-syntax keyword for this operation kind.
    ///
    /// Note that the wire format only ever emits the `mutation` keyword:
    /// a query operation serializes with no leading keyword at all.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
        }
    }
}
