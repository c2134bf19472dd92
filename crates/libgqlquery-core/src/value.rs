use crate::wire;
use crate::wire::WireFormat;
use crate::wire::WireFormatter;

/// An argument value in one of the literal-representable scalar kinds.
///
/// Each kind formats as its canonical GraphQL literal text: [`Value::String`]
/// renders between double quotes, every other kind renders bare (`true`, `1`,
/// `3.14`).
///
/// NOTE: String values are written into the wire format verbatim. No escaping
/// is applied, so a value containing a raw `"` produces a request string the
/// endpoint may reject.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Value {
    Bool(bool),
    Float(f64),
    Int(i64),
    String(String),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }
}
impl WireFormat for Value {
    fn write_wire(&self, f: &mut WireFormatter) {
        match self {
            Value::Bool(value) => f.write_str(&value.to_string()),
            Value::Float(value) => f.write_str(&value.to_string()),
            Value::Int(value) => f.write_str(&value.to_string()),
            Value::String(value) => {
                f.write_char('"');
                f.write_str(value.as_str());
                f.write_char('"');
            },
        }
    }
}
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        wire::fmt_wire(self, f)
    }
}
impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}
impl std::convert::From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
