//! Example request construction and execution.
//!
//! Requests are live: the default executor spawns a curl-compatible program
//! against the documented API, so output depends on the running service.

use std::process::Command;

use crate::params::{ParameterDictionary, body_key};
use crate::parse::{Argument, HttpMethod};
use crate::render::indent_continuation;

const JSON_CONTENT_TYPE: &str = "Content-Type:application/json";

/// A materialized example request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<String>,
}

impl ExampleRequest {
    /// The shell command shown in the document.
    pub fn command_line(&self) -> String {
        match (self.method, &self.body) {
            (HttpMethod::Get, _) => format!("curl {}", self.url),
            (method, Some(body)) => format!(
                "curl -X {method} -H \"{JSON_CONTENT_TYPE}\" -d '{body}' {}",
                self.url
            ),
            (method, None) => format!("curl -X {method} -H \"{JSON_CONTENT_TYPE}\" {}", self.url),
        }
    }

    /// Arguments for spawning curl directly, without a shell.
    pub fn curl_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.method != HttpMethod::Get {
            args.extend([
                "-X".to_string(),
                self.method.as_str().to_string(),
                "-H".to_string(),
                JSON_CONTENT_TYPE.to_string(),
            ]);
            if let Some(ref body) = self.body {
                args.extend(["-d".to_string(), body.clone()]);
            }
        }
        args.push(self.url.clone());
        args
    }
}

/// Capability to run an example request and capture the response text.
///
/// Failures are never errors: an implementation returns whatever output it
/// captured, or `None` when nothing could be run.
pub trait RequestExecutor {
    fn execute(&self, request: &ExampleRequest) -> Option<String>;
}

/// Runs requests with a curl-compatible program found on `PATH`.
#[derive(Debug, Clone)]
pub struct CurlExecutor {
    pub program: String,
}

impl Default for CurlExecutor {
    fn default() -> Self {
        Self {
            program: "curl".to_string(),
        }
    }
}

impl CurlExecutor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl RequestExecutor for CurlExecutor {
    fn execute(&self, request: &ExampleRequest) -> Option<String> {
        log::debug!("running {} {}", self.program, request.url);
        match Command::new(&self.program).args(request.curl_args()).output() {
            Ok(output) => {
                if !output.status.success() {
                    log::warn!(
                        "{} exited with {} for {}; using captured output",
                        self.program,
                        output.status,
                        request.url
                    );
                }
                Some(String::from_utf8_lossy(&output.stdout).into_owned())
            }
            Err(e) => {
                log::warn!("failed to run {}: {e}", self.program);
                None
            }
        }
    }
}

/// Never performs a request; every example response is omitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineExecutor;

impl RequestExecutor for OfflineExecutor {
    fn execute(&self, _request: &ExampleRequest) -> Option<String> {
        None
    }
}

/// Substitute `{format}` and every mapped `{name}` placeholder in a path template.
///
/// Only the first occurrence of each placeholder is replaced. Unnamed or
/// unmapped arguments leave their placeholder in the path.
pub fn populate_arguments(path: &str, arguments: &[Argument], params: &ParameterDictionary) -> String {
    let mut path = path.replacen("{format}", "json", 1);
    for name in arguments.iter().filter_map(|a| a.name.as_deref()) {
        match params.get(name) {
            Some(value) => path = path.replacen(&format!("{{{name}}}"), value, 1),
            None => log::debug!("no example value for `{name}`; leaving placeholder"),
        }
    }
    path
}

/// Build the example request for one operation.
pub fn build_request(
    method: HttpMethod,
    base_path: &str,
    path_template: &str,
    arguments: &[Argument],
    resource: &str,
    params: &ParameterDictionary,
) -> ExampleRequest {
    let url = format!("{base_path}{}", populate_arguments(path_template, arguments, params));
    let body = params.body_for(resource, method).map(str::to_string);
    if method.has_body() && body.is_none() {
        log::warn!(
            "no `{}` entry in parameters; {method} {url} is sent without a body",
            body_key(resource)
        );
    }
    ExampleRequest { method, url, body }
}

/// Prepare raw response text for a code block.
///
/// JSON is pretty-printed with continuation lines indented; anything else is
/// kept as-is. Blank output yields `None`.
pub fn format_response(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(pretty) => Some(indent_continuation(&pretty)),
            Err(_) => Some(raw.to_string()),
        },
        Err(_) => Some(raw.to_string()),
    }
}
