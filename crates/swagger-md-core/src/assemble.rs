//! Document assembly: load and validate every input, then render the whole
//! document in resource order before touching the output file.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{AssembleError, ConfigError};
use crate::params::ParameterDictionary;
use crate::parse::{self, HttpMethod, Operation, ResourceEntry, ResourceIndex, ResourceSpecification};
use crate::render::markdown::{header, titleize};
use crate::render::operation::{OperationContext, render_operation};
use crate::render::{DESCRIPTION_PLACEHOLDER, INPUT_HERE};
use crate::request::RequestExecutor;

/// Where each resource's specification file comes from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SpecificationSource {
    /// The i-th file documents the i-th resource of the listing.
    Ordered(Vec<PathBuf>),
    /// Resource name → file.
    Keyed(IndexMap<String, PathBuf>),
}

impl SpecificationSource {
    /// Parse command-line entries: either all `path` or all `name=path`.
    pub fn from_entries(entries: &[String]) -> Result<Self, ConfigError> {
        let keyed = entries.iter().filter(|e| e.contains('=')).count();
        if keyed == 0 {
            return Ok(Self::Ordered(entries.iter().map(PathBuf::from).collect()));
        }
        if keyed != entries.len() {
            return Err(ConfigError::MixedSpecifications);
        }
        Ok(Self::Keyed(
            entries
                .iter()
                .filter_map(|e| e.split_once('='))
                .map(|(name, path)| (name.trim().to_string(), PathBuf::from(path.trim())))
                .collect(),
        ))
    }

    fn resolve(&self, index: usize, resource: &str) -> Result<&Path, AssembleError> {
        let found = match self {
            Self::Ordered(files) => files.get(index),
            Self::Keyed(files) => files.get(resource),
        };
        found
            .map(PathBuf::as_path)
            .ok_or_else(|| AssembleError::MissingSpecification {
                resource: resource.to_string(),
                index,
            })
    }

    fn warn_unused(&self, resources: &[DocumentedResource]) {
        match self {
            Self::Ordered(files) => {
                for extra in files.iter().skip(resources.len()) {
                    log::warn!("ignoring {}: no matching resource in the listing", extra.display());
                }
            }
            Self::Keyed(files) => {
                for (name, path) in files {
                    if !resources.iter().any(|r| &r.name == name) {
                        log::warn!("ignoring {} for unknown resource `{name}`", path.display());
                    }
                }
            }
        }
    }
}

/// Everything needed to produce one document.
#[derive(Debug, Clone)]
pub struct DocumentInputs {
    pub name: String,
    pub resources: PathBuf,
    pub parameters: Option<PathBuf>,
    pub markdown: PathBuf,
    pub specifications: SpecificationSource,
}

/// A fully loaded and validated API description.
#[derive(Debug, Clone)]
pub struct ApiDocument {
    pub name: String,
    pub version: Option<String>,
    pub base_path: String,
    pub resources: Vec<DocumentedResource>,
}

#[derive(Debug, Clone)]
pub struct DocumentedResource {
    pub name: String,
    pub description: Option<String>,
    pub specification: PathBuf,
    pub operations: Vec<DocumentedOperation>,
}

/// An operation whose HTTP method has been checked.
#[derive(Debug, Clone)]
pub struct DocumentedOperation {
    pub method: HttpMethod,
    pub path: String,
    pub operation: Operation,
}

/// Counts from a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub resources: usize,
    pub operations: usize,
}

impl ApiDocument {
    /// Load the resource listing and every specification file it refers to.
    pub fn load(inputs: &DocumentInputs) -> Result<Self, AssembleError> {
        let index: ResourceIndex = parse::load(&inputs.resources)?;
        if index.base_path.is_none() {
            log::warn!("{} has no basePath", inputs.resources.display());
        }

        let mut resources = Vec::with_capacity(index.apis.len());
        for (i, entry) in index.apis.iter().enumerate() {
            let name = resource_name(i, entry)?;
            let file = inputs.specifications.resolve(i, &name)?.to_path_buf();
            let specification: ResourceSpecification = parse::load(&file)?;
            let operations = check_operations(i, &file, specification)?;
            resources.push(DocumentedResource {
                name,
                description: entry.description.clone(),
                specification: file,
                operations,
            });
        }
        inputs.specifications.warn_unused(&resources);

        Ok(Self {
            name: inputs.name.clone(),
            version: index.api_version,
            base_path: index.base_path.unwrap_or_default(),
            resources,
        })
    }

    pub fn operation_count(&self) -> usize {
        self.resources.iter().map(|r| r.operations.len()).sum()
    }
}

/// `/pets.{format}` → `pets`: the text strictly between the first `/` and the first `.`.
pub fn extract_resource_name(path: &str) -> Option<&str> {
    let start = path.find('/')? + 1;
    let end = path.find('.')?;
    if end <= start {
        return None;
    }
    Some(&path[start..end])
}

/// `pets` → `Pets Resource`, `user_accounts` → `User Accounts Resource`, `APIKeys` → `APIKeys Resource`
pub fn resource_heading(resource: &str) -> String {
    titleize(&format!("{} resource", resource.replace(['_', '-'], " ")))
}

fn resource_name(index: usize, entry: &ResourceEntry) -> Result<String, AssembleError> {
    extract_resource_name(&entry.path)
        .map(str::to_string)
        .ok_or_else(|| AssembleError::MalformedInput {
            index,
            field: "path",
            reason: format!("expected `/<name>.<suffix>`, got `{}`", entry.path),
        })
}

fn check_operations(
    index: usize,
    file: &Path,
    specification: ResourceSpecification,
) -> Result<Vec<DocumentedOperation>, AssembleError> {
    let mut operations = Vec::new();
    for group in specification.apis {
        for operation in group.operations {
            let Some(raw) = operation.http_method.as_deref() else {
                return Err(AssembleError::MalformedInput {
                    index,
                    field: "httpMethod",
                    reason: format!("operation on {} in {} has no method", group.path, file.display()),
                });
            };
            let method = HttpMethod::parse(raw).ok_or_else(|| AssembleError::UnsupportedMethod {
                method: raw.to_string(),
                path: group.path.clone(),
                file: file.to_path_buf(),
            })?;
            operations.push(DocumentedOperation {
                method,
                path: group.path.clone(),
                operation,
            });
        }
    }
    Ok(operations)
}

/// Render the full Markdown document. Every operation's example request runs
/// through `executor`, in document order.
pub fn render_document(
    document: &ApiDocument,
    params: &ParameterDictionary,
    executor: &dyn RequestExecutor,
) -> String {
    let mut out = String::new();

    let title = match document.version.as_deref() {
        Some(version) => format!("{} {version} REST API", document.name),
        None => format!("{} REST API", document.name),
    };
    out.push_str(&header(&title, 1));
    out.push('\n');
    out.push_str(&format!("Base Path: {}\n\n", document.base_path));
    out.push_str(INPUT_HERE);
    out.push_str("\n\n");
    out.push_str(&header("General Considerations", 2));
    out.push('\n');
    out.push_str(INPUT_HERE);
    out.push_str("\n\n");

    for resource in &document.resources {
        log::info!(
            "documenting {} from {} ({} operations)",
            resource.name,
            resource.specification.display(),
            resource.operations.len()
        );
        out.push_str(&header(&resource_heading(&resource.name), 2));
        out.push('\n');
        out.push_str(resource.description.as_deref().unwrap_or(DESCRIPTION_PLACEHOLDER));
        out.push_str("\n\n");

        let ctx = OperationContext {
            base_path: &document.base_path,
            resource: &resource.name,
            params,
            executor,
        };
        for op in &resource.operations {
            out.push_str(&render_operation(&ctx, op.method, &op.path, &op.operation));
        }
    }

    out
}

/// Load every input, render the document, then write it in a single step.
///
/// Input errors abort before the output file is touched.
pub fn generate(inputs: &DocumentInputs, executor: &dyn RequestExecutor) -> Result<Report, AssembleError> {
    let document = ApiDocument::load(inputs)?;
    let params = match inputs.parameters {
        Some(ref path) => ParameterDictionary::load(path)?,
        None => ParameterDictionary::new(),
    };

    let markdown = render_document(&document, &params, executor);
    fs::write(&inputs.markdown, markdown).map_err(|source| AssembleError::Write {
        path: inputs.markdown.clone(),
        source,
    })?;

    Ok(Report {
        resources: document.resources.len(),
        operations: document.operation_count(),
    })
}
