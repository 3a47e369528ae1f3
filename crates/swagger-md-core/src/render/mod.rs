pub mod markdown;
pub mod operation;

pub use markdown::{bulleted_list, code_block, header, indent_continuation, titleize};
pub use operation::render_operation;

pub const NONE_ITEM: &str = "* None\n";
pub const INPUT_HERE: &str = "[Please add API specific content here]";
pub const ARGUMENT_NAME_PLACEHOLDER: &str = "[Please add a name for argument]";
pub const ERROR_CODE_PLACEHOLDER: &str = "[Please add a code for error]";
pub const SUMMARY_PLACEHOLDER: &str =
    "[Please add operation summary information to the summary section]";
pub const NOTES_PLACEHOLDER: &str = "[Please add operation information to the notes section]";
pub const DESCRIPTION_PLACEHOLDER: &str = "[Please add resource description here]";
