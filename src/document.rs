/*!
 * Aggregate document construction for CtxCat
 *
 * Builds the final output: a header block, the fenced tree listing, then
 * one fenced section per included file in sorted relative-path order.
 */

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Local;
use indicatif::ProgressBar;

use crate::config::Config;
use crate::scanner::relative_path;

/// Hard cap on the number of file sections in one document
pub const MAX_INCLUDED_FILES: usize = 10_000;

/// The finished aggregate document
#[derive(Debug, Clone)]
pub struct ContextDocument {
    /// Full document text
    pub content: String,
    /// Number of file sections rendered
    pub files_rendered: usize,
    /// Number of included files dropped by the section cap
    pub files_omitted: usize,
    /// Number of files whose content was replaced by an error marker
    pub read_errors: usize,
}

/// Builder for the aggregate document
pub struct ContextBuilder {
    config: Config,
    progress: Arc<ProgressBar>,
    max_files: usize,
}

impl ContextBuilder {
    /// Create a builder with the production section cap
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self::with_limit(config, progress, MAX_INCLUDED_FILES)
    }

    /// Create a builder with an explicit section cap
    pub fn with_limit(config: Config, progress: Arc<ProgressBar>, max_files: usize) -> Self {
        Self {
            config,
            progress,
            max_files,
        }
    }

    /// Assemble the document from the included paths and the tree listing.
    ///
    /// Paths are sorted lexicographically by relative path, so two runs over
    /// an unchanged directory produce identical section ordering.
    pub fn build(&self, included: &[PathBuf], tree: &str) -> ContextDocument {
        let mut sections: Vec<(String, &PathBuf)> = included
            .iter()
            .map(|path| (relative_path(&self.config.root, path), path))
            .collect();
        sections.sort_by(|a, b| a.0.cmp(&b.0));

        let mut content = String::new();
        self.write_header(&mut content, tree);

        let mut files_rendered = 0;
        let mut read_errors = 0;

        for (rel, path) in sections.iter().take(self.max_files) {
            self.progress.inc(1);
            self.progress.set_message(format!("Adding {}", rel));

            content.push_str(&format!("### {}\n\n```\n", rel));
            match read_content(path) {
                Ok(text) => {
                    content.push_str(&text);
                    if !text.ends_with('\n') {
                        content.push('\n');
                    }
                }
                Err(e) => {
                    // Local failure: the path stays listed, the content does not
                    content.push_str(&format!("[Error reading file: {}]\n", e));
                    read_errors += 1;
                }
            }
            content.push_str("```\n\n");
            files_rendered += 1;
        }

        let files_omitted = sections.len().saturating_sub(self.max_files);
        if files_omitted > 0 {
            content.push_str(&format!(
                "[WARNING: file limit of {} reached; {} additional files omitted]\n",
                self.max_files, files_omitted
            ));
        }

        ContextDocument {
            content,
            files_rendered,
            files_omitted,
            read_errors,
        }
    }

    fn write_header(&self, content: &mut String, tree: &str) {
        content.push_str(&format!(
            "# Project Context: {}\n",
            self.config.project_name()
        ));
        content.push_str(&format!(
            "Generated on: {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        ));
        content.push_str(&format!("Directory: {}\n\n", self.config.root.display()));

        content.push_str("## Project Structure\n```\n");
        content.push_str(tree);
        if !tree.ends_with('\n') {
            content.push('\n');
        }
        content.push_str("```\n\n## File Contents\n\n");
    }
}

fn read_content(path: &Path) -> std::io::Result<String> {
    fs::read_to_string(path)
}
