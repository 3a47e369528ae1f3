use std::fmt;

use serde::{Deserialize, Serialize};

/// HTTP methods that can be materialized into an example request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }

    /// Case-insensitive lookup; `None` for anything but GET, POST and PUT.
    pub fn parse(method: &str) -> Option<Self> {
        match method.trim().to_ascii_uppercase().as_str() {
            "GET" => Some(HttpMethod::Get),
            "POST" => Some(HttpMethod::Post),
            "PUT" => Some(HttpMethod::Put),
            _ => None,
        }
    }

    /// Whether the example request carries a JSON body.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-resource API declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceSpecification {
    pub apis: Vec<MethodGroup>,
}

/// All operations sharing one path template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MethodGroup {
    pub path: String,
    pub operations: Vec<Operation>,
}

/// A documented API operation. Swagger 1.2 spellings are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Operation {
    #[serde(rename = "httpMethod", alias = "method")]
    pub http_method: Option<String>,

    pub summary: Option<String>,

    pub notes: Option<String>,

    pub parameters: Option<Vec<Argument>>,

    #[serde(rename = "errorResponses", alias = "responseMessages")]
    pub error_responses: Option<Vec<ErrorSpec>>,
}

impl Operation {
    pub fn arguments(&self) -> &[Argument] {
        self.parameters.as_deref().unwrap_or_default()
    }

    pub fn errors(&self) -> &[ErrorSpec] {
        self.error_responses.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Argument {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorSpec {
    pub code: Option<serde_json::Value>,

    #[serde(alias = "message")]
    pub reason: Option<String>,
}

impl ErrorSpec {
    /// The code as display text; strings are shown without quotes.
    pub fn code_text(&self) -> Option<String> {
        match self.code.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
