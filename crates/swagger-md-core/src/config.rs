use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::assemble::SpecificationSource;
use crate::error::ConfigError;

/// Project configuration loaded from `.swagger-md.yaml`. Command-line flags win.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub name: Option<String>,
    pub resources: Option<PathBuf>,
    pub parameters: Option<PathBuf>,
    pub markdown: Option<PathBuf>,
    /// Either an ordered list (positional) or a resource name → file map.
    pub specifications: Option<SpecificationSource>,
    pub client: ClientConfig,
}

/// How example requests are executed.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// curl-compatible program used for example requests.
    pub curl: String,
    /// Skip example requests entirely.
    pub offline: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            curl: "curl".to_string(),
            offline: false,
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".swagger-md.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<ProjectConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# swagger-md configuration
name: My API
resources: resources.json
parameters: parameters.json
markdown: api.md

# Either a list matched to the resource listing by position...
specifications:
  - pets.json
  - users.json
# ...or an explicit map from resource name to file:
# specifications:
#   pets: pets.json
#   users: users.json

client:
  curl: curl        # curl-compatible program used for example requests
  offline: false    # true skips example requests
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProjectConfig::default();
        assert!(config.name.is_none());
        assert!(config.specifications.is_none());
        assert_eq!(config.client.curl, "curl");
        assert!(!config.client.offline);
    }

    #[test]
    fn test_parse_default_content() {
        let config: ProjectConfig = serde_yaml_ng::from_str(default_config_content()).unwrap();
        assert_eq!(config.name.as_deref(), Some("My API"));
        assert_eq!(config.markdown, Some(PathBuf::from("api.md")));
        assert_eq!(
            config.specifications,
            Some(SpecificationSource::Ordered(vec![
                PathBuf::from("pets.json"),
                PathBuf::from("users.json"),
            ]))
        );
    }

    #[test]
    fn test_parse_keyed_specifications() {
        let yaml = r#"
specifications:
  users: specs/users.json
  pets: specs/pets.json
client:
  offline: true
"#;
        let config: ProjectConfig = serde_yaml_ng::from_str(yaml).unwrap();
        match config.specifications {
            Some(SpecificationSource::Keyed(map)) => {
                let keys: Vec<&String> = map.keys().collect();
                assert_eq!(keys, ["users", "pets"]);
                assert_eq!(map["pets"], PathBuf::from("specs/pets.json"));
            }
            other => panic!("expected keyed specifications, got {other:?}"),
        }
        assert!(config.client.offline);
        assert_eq!(config.client.curl, "curl");
    }

    #[test]
    fn test_missing_config_is_none() {
        let loaded = load_config(Path::new("/no/such/.swagger-md.yaml")).unwrap();
        assert!(loaded.is_none());
    }
}
