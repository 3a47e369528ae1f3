use std::path::Path;

use indexmap::IndexMap;

use crate::error::LoadError;
use crate::parse;
use crate::parse::HttpMethod;

/// Literal example values used to materialize example requests.
///
/// Keys are argument names for path substitution, or `<RESOURCE>.POST` for
/// request bodies. Non-string values are kept as compact JSON text so bodies
/// may be written as JSON objects; `null` entries count as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterDictionary {
    values: IndexMap<String, String>,
}

impl ParameterDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let value = parse::load_json(path)?;
        Self::from_value(value).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        let map: IndexMap<String, serde_json::Value> = serde_json::from_value(value)?;
        let values = map
            .into_iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    serde_json::Value::Null => return None,
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                Some((key, text))
            })
            .collect();
        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Request body for a resource. PUT shares the `.POST` key.
    pub fn body_for(&self, resource: &str, method: HttpMethod) -> Option<&str> {
        if !method.has_body() {
            return None;
        }
        self.get(&body_key(resource))
    }
}

/// `pets` → `PETS.POST`
pub fn body_key(resource: &str) -> String {
    format!("{}.POST", resource.to_uppercase())
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterDictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
