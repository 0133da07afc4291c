use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// HTTP verb used against the remote editor server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an operation's arguments travel on the outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// JSON object in the request body.
    JsonBody,
    /// URL query parameters.
    Query,
    /// Nothing besides the path.
    None,
}

/// JSON type an argument binds from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    Text,
    Flag,
    /// Flat object of string keys to string values.
    TextMap,
}

impl ArgKind {
    /// JSON Schema type name for this kind.
    #[must_use]
    pub fn schema_type(self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Flag => "boolean",
            Self::TextMap => "object",
        }
    }
}

/// When a bound argument is written into the outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inclusion {
    Always,
    /// Only when the text is non-empty.
    WhenNonEmpty,
    /// Only when the flag is true.
    WhenTrue,
    /// Only when the named sibling flag is true and this value is non-empty.
    WhenFlagSet(&'static str),
}

/// One parameter of an operation and its remote field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgSpec {
    pub name: &'static str,
    pub remote: &'static str,
    pub kind: ArgKind,
    pub required: bool,
    pub inclusion: Inclusion,
    pub description: &'static str,
}

impl ArgSpec {
    /// Required text argument, always sent.
    #[must_use]
    pub const fn text(name: &'static str, remote: &'static str, description: &'static str) -> Self {
        Self {
            name,
            remote,
            kind: ArgKind::Text,
            required: true,
            inclusion: Inclusion::Always,
            description,
        }
    }

    /// Optional text argument, sent only when non-empty.
    #[must_use]
    pub const fn optional_text(
        name: &'static str,
        remote: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            remote,
            kind: ArgKind::Text,
            required: false,
            inclusion: Inclusion::WhenNonEmpty,
            description,
        }
    }

    /// Required boolean argument, always sent.
    #[must_use]
    pub const fn flag(name: &'static str, remote: &'static str, description: &'static str) -> Self {
        Self {
            name,
            remote,
            kind: ArgKind::Flag,
            required: true,
            inclusion: Inclusion::Always,
            description,
        }
    }

    /// Boolean argument defaulting to `false`, always sent.
    #[must_use]
    pub const fn optional_flag(
        name: &'static str,
        remote: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            remote,
            kind: ArgKind::Flag,
            required: false,
            inclusion: Inclusion::Always,
            description,
        }
    }

    /// Required string-to-string mapping, always sent.
    #[must_use]
    pub const fn text_map(
        name: &'static str,
        remote: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            remote,
            kind: ArgKind::TextMap,
            required: true,
            inclusion: Inclusion::Always,
            description,
        }
    }

    #[must_use]
    pub const fn included(mut self, inclusion: Inclusion) -> Self {
        self.inclusion = inclusion;
        self
    }
}

/// Descriptor of one tool: name, endpoint, and field mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub path: &'static str,
    pub method: HttpMethod,
    pub encoding: Encoding,
    pub description: &'static str,
    pub args: &'static [ArgSpec],
}

impl Operation {
    /// Look up a parameter by its local name.
    #[must_use]
    pub fn arg(&self, name: &str) -> Option<&'static ArgSpec> {
        self.args.iter().find(|a| a.name == name)
    }
}

/// An argument after binding from the inbound JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Text(String),
    Flag(bool),
    TextMap(IndexMap<String, String>),
}

impl ArgValue {
    /// Non-empty text, a true flag, or a non-empty map.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty(),
            Self::Flag(b) => *b,
            Self::TextMap(m) => !m.is_empty(),
        }
    }

    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Text(s) => Value::String(s.clone()),
            Self::Flag(b) => Value::Bool(*b),
            Self::TextMap(m) => Value::Object(
                m.iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect(),
            ),
        }
    }

    /// Rendering used for a query parameter value.
    #[must_use]
    pub fn to_query_value(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Flag(b) => b.to_string(),
            Self::TextMap(_) => self.to_json().to_string(),
        }
    }
}

/// Arguments of the outbound request, already mapped to remote field names.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Empty,
    Json(Map<String, Value>),
    Query(Vec<(String, String)>),
}

/// A fully constructed request against the remote editor server.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    pub method: HttpMethod,
    pub path: &'static str,
    pub payload: Payload,
}

/// Raw answer from the remote editor server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteResponse {
    pub status: u16,
    pub body: String,
}

impl RemoteResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness() {
        assert!(!ArgValue::Text(String::new()).is_truthy());
        assert!(ArgValue::Text("x".to_string()).is_truthy());
        assert!(!ArgValue::Flag(false).is_truthy());
        assert!(ArgValue::Flag(true).is_truthy());
        assert!(!ArgValue::TextMap(IndexMap::new()).is_truthy());
    }

    #[test]
    fn text_map_keeps_insertion_order() {
        let mut props = IndexMap::new();
        props.insert("StaticMesh".to_string(), "/Engine/BasicShapes/Cube.Cube".to_string());
        props.insert("Mobility".to_string(), "Movable".to_string());
        props.insert("OverrideMaterials.0".to_string(), "/Game/M_Red.M_Red".to_string());

        let json = ArgValue::TextMap(props).to_json().to_string();
        assert_eq!(
            json,
            r#"{"StaticMesh":"/Engine/BasicShapes/Cube.Cube","Mobility":"Movable","OverrideMaterials.0":"/Game/M_Red.M_Red"}"#
        );
    }

    #[test]
    fn flag_query_rendering() {
        assert_eq!(ArgValue::Flag(true).to_query_value(), "true");
        assert_eq!(ArgValue::Text("/Game/BP".to_string()).to_query_value(), "/Game/BP");
    }

    #[test]
    fn response_success_range() {
        let ok = RemoteResponse { status: 200, body: String::new() };
        let err = RemoteResponse { status: 500, body: "Error: boom".to_string() };
        assert!(ok.is_success());
        assert!(!err.is_success());
    }

    #[test]
    fn method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
    }
}
