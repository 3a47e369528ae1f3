use crate::params::ParameterDictionary;
use crate::parse::{Argument, ErrorSpec, HttpMethod, Operation};
use crate::request::{self, RequestExecutor};

use super::markdown::{bulleted_list, code_block, header, titleize};
use super::{ARGUMENT_NAME_PLACEHOLDER, ERROR_CODE_PLACEHOLDER, NOTES_PLACEHOLDER, SUMMARY_PLACEHOLDER};

/// Read-only context shared by every operation of one resource.
pub struct OperationContext<'a> {
    pub base_path: &'a str,
    pub resource: &'a str,
    pub params: &'a ParameterDictionary,
    pub executor: &'a dyn RequestExecutor,
}

/// Render one operation section. Runs the example request as a side effect.
pub fn render_operation(
    ctx: &OperationContext<'_>,
    method: HttpMethod,
    path: &str,
    operation: &Operation,
) -> String {
    log::debug!("rendering {method} {path}");
    let mut out = String::new();

    let summary = operation
        .summary
        .as_deref()
        .map(titleize)
        .unwrap_or_else(|| SUMMARY_PLACEHOLDER.to_string());
    out.push_str(&header(&summary, 3));
    out.push('\n');

    out.push_str(operation.notes.as_deref().unwrap_or(NOTES_PLACEHOLDER));
    out.push_str("\n\n");

    out.push_str(&header("Definition", 4));
    out.push('\n');
    let definition = format!("{method} {}", path.replacen("{format}", "json", 1));
    out.push_str(&code_block(&definition));
    out.push_str("\n\n");

    out.push_str(&header("Arguments", 4));
    out.push('\n');
    out.push_str(&render_arguments(operation.arguments()));
    out.push('\n');

    let example = request::build_request(
        method,
        ctx.base_path,
        path,
        operation.arguments(),
        ctx.resource,
        ctx.params,
    );
    out.push_str(&header("Example Request", 4));
    out.push('\n');
    out.push_str(&code_block(&example.command_line()));
    out.push_str("\n\n");

    let response = ctx
        .executor
        .execute(&example)
        .and_then(|raw| request::format_response(&raw));
    out.push_str(&header("Example Response", 4));
    out.push('\n');
    if let Some(response) = response {
        out.push_str(&code_block(&response));
        out.push_str("\n\n");
    }

    out.push_str(&header("Potential Errors", 4));
    out.push('\n');
    out.push_str(&render_errors(operation.errors()));
    out.push('\n');

    out
}

pub fn render_arguments(arguments: &[Argument]) -> String {
    bulleted_list(arguments, ARGUMENT_NAME_PLACEHOLDER, |a| {
        (a.name.clone(), a.description.clone())
    })
}

pub fn render_errors(errors: &[ErrorSpec]) -> String {
    bulleted_list(errors, ERROR_CODE_PLACEHOLDER, |e| (e.code_text(), e.reason.clone()))
}
