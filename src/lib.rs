/*!
 * CtxCat - Concatenate a project's text files into a single context document
 *
 * This library walks a directory tree, filters out ignored/binary/oversized
 * files, and aggregates the remaining text files (plus a directory tree
 * listing) into one document suitable as context for Large Language Models.
 */

pub mod clipboard;
pub mod config;
pub mod document;
pub mod error;
pub mod filter;
pub mod report;
pub mod scanner;
pub mod tree;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::{Config, RuleSet, Sinks};
pub use document::{ContextBuilder, ContextDocument, MAX_INCLUDED_FILES};
pub use error::{CtxError, Result};
pub use filter::{FilterChain, Verdict};
pub use report::{ReportFormat, Reporter, RunReport};
pub use scanner::discover;
pub use tree::render_tree;
pub use utils::{command_exists, format_file_size};
pub use writer::write_output;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
