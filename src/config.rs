/*!
 * Configuration handling for CtxCat
 */

use std::env;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::{CtxError, Result};
use crate::utils::{IGNORED_EXTENSIONS, IGNORED_PATTERNS, TEXT_EXTENSIONS};

/// Suffix appended to the root directory's base name to form the output file
pub const OUTPUT_FILE_SUFFIX: &str = "-project_context.txt";

/// Maximum size of a file whose content is included, in bytes
pub const MAX_FILE_SIZE: u64 = 1_048_576;

/// Candidate-file count above which a scale warning and pause are issued
pub const CANDIDATE_WARN_THRESHOLD: usize = 500;

/// Duration of the interruptible pause before scanning a very large tree
pub const SCAN_PAUSE_SECS: u64 = 5;

/// Output size above which an advisory warning is printed, in bytes
pub const OUTPUT_SIZE_WARN: u64 = 10 * 1024 * 1024;

/// Advisory warning for very large candidate sets.
///
/// `None` at or below [`CANDIDATE_WARN_THRESHOLD`]; otherwise the message
/// printed before the interruptible pre-scan pause.
pub fn scale_warning(candidates: usize) -> Option<String> {
    (candidates > CANDIDATE_WARN_THRESHOLD).then(|| {
        format!(
            "Warning: {} candidate files found; output may be very large.",
            candidates
        )
    })
}

/// Command-line arguments for CtxCat
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "ctxcat",
    about = "Concatenate a project's text files into a single context document",
    long_about = "Walks the current directory, filters out ignored/binary/oversized files, \
                  and concatenates the remaining text files plus a directory tree listing \
                  into one document for LLM context.",
    disable_version_flag = true
)]
pub struct Args {
    /// Write the context document to a file (default when no flags are given)
    #[clap(short = 'f')]
    pub file: bool,

    /// Copy the context document to the system clipboard
    #[clap(short = 'c')]
    pub clip: bool,
}

/// Which sinks receive the aggregate document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sinks {
    /// Write to the output file
    pub file: bool,
    /// Copy to the system clipboard
    pub clipboard: bool,
}

impl Sinks {
    /// Derive sinks from the parsed flags; no flags means file output only
    pub fn from_flags(file: bool, clip: bool) -> Self {
        if !file && !clip {
            Self {
                file: true,
                clipboard: false,
            }
        } else {
            Self {
                file,
                clipboard: clip,
            }
        }
    }
}

/// Process-wide exclusion rules, immutable once constructed
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Extensions of binary/generated files to exclude
    pub ignored_extensions: Vec<&'static str>,
    /// Path substrings of generated/vendored content to exclude
    pub ignored_patterns: Vec<&'static str>,
    /// Extensions accepted as text when no MIME sniffer is available
    pub text_extensions: Vec<&'static str>,
    /// Maximum included file size in bytes
    pub max_file_size: u64,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            ignored_extensions: IGNORED_EXTENSIONS.clone(),
            ignored_patterns: IGNORED_PATTERNS.clone(),
            text_extensions: TEXT_EXTENSIONS.clone(),
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

impl RuleSet {
    /// The lowercased substring after the final `.` in the file name, if any
    fn extension_of(path: &Path) -> Option<String> {
        let name = path.file_name()?.to_string_lossy().to_string();
        let (_, ext) = name.rsplit_once('.')?;
        Some(ext.to_lowercase())
    }

    /// Check whether the file name carries a known binary/generated extension
    pub fn has_ignored_extension(&self, path: &Path) -> bool {
        match Self::extension_of(path) {
            Some(ext) => self.ignored_extensions.iter().any(|&e| e == ext),
            // Files with no extension are never excluded by this rule
            None => false,
        }
    }

    /// Check whether the file name carries a known text extension
    pub fn has_text_extension(&self, path: &Path) -> bool {
        match Self::extension_of(path) {
            Some(ext) => self.text_extensions.iter().any(|&e| e == ext),
            None => false,
        }
    }

    /// Check whether a path string contains any ignored pattern as a substring.
    ///
    /// Directory patterns carry a trailing slash; callers testing a directory
    /// should append `/` to the path before calling.
    pub fn is_ignored_path(&self, path: &str) -> bool {
        self.ignored_patterns.iter().any(|p| path.contains(p))
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Root directory to process
    pub root: PathBuf,

    /// Output file path
    pub output_file: PathBuf,

    /// Destinations for the aggregate document
    pub sinks: Sinks,

    /// Exclusion rules
    pub rules: RuleSet,
}

impl Config {
    /// Create configuration from command-line arguments, rooted at the
    /// current working directory
    pub fn from_args(args: Args) -> Result<Self> {
        let root = env::current_dir()?.canonicalize()?;
        let dir_name = root
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let output_file = root.join(format!("{}{}", dir_name, OUTPUT_FILE_SUFFIX));

        Ok(Self {
            root,
            output_file,
            sinks: Sinks::from_flags(args.file, args.clip),
            rules: RuleSet::default(),
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.root.exists() || !self.root.is_dir() {
            return Err(CtxError::Config(format!(
                "Root directory not found: {}",
                self.root.display()
            )));
        }

        // Check if output file directory exists and is writable
        if self.sinks.file {
            if let Some(parent) = self.output_file.parent() {
                if !parent.exists() && parent != Path::new("") {
                    return Err(CtxError::Config(format!(
                        "Output directory not found: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// The project name used in the document header
    pub fn project_name(&self) -> String {
        self.root
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }
}
