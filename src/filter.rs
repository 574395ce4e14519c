/*!
 * Filter chain for CtxCat
 *
 * A file is included iff it survives every check, evaluated in fixed order:
 * gitignore rules, ignored extension, ignored path pattern, size threshold,
 * text detection. Each exclusion carries a reason tag for diagnostics.
 */

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::config::{Config, RuleSet};
use crate::scanner::relative_path;
use crate::utils::command_exists;

/// Outcome of evaluating a single candidate path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// File passed every check
    Included,
    /// Excluded by version-control ignore rules
    Gitignored,
    /// Excluded by the binary/generated extension list
    IgnoredExtension,
    /// Excluded by the ignored path pattern list
    IgnoredPattern,
    /// Excluded because the file exceeds the size threshold
    TooLarge,
    /// Excluded because the file was not recognized as text
    NonText,
}

impl Verdict {
    /// Whether the file survives the filter chain
    pub fn is_included(self) -> bool {
        self == Verdict::Included
    }

    /// Short label for diagnostic output
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Included => "included",
            Verdict::Gitignored => "gitignored",
            Verdict::IgnoredExtension => "ignored-extension",
            Verdict::IgnoredPattern => "ignored-pattern",
            Verdict::TooLarge => "too-large",
            Verdict::NonText => "non-text",
        }
    }
}

/// How gitignore rules are evaluated for this run
enum GitignoreRules {
    /// The root is under version control; use the authoritative matcher
    Authoritative(Gitignore),
    /// No version control present; naive matching against .gitignore lines.
    /// A line matches a path that equals it or contains it as a substring.
    /// This is intentionally approximate, not full gitignore-glob semantics.
    Naive(Vec<String>),
    /// No .gitignore file at all
    Disabled,
}

/// How text files are recognized for this run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDetector {
    /// Sniff the MIME type with the `file` utility; require a `text/` prefix
    Mime,
    /// Match the file name against the text extension allow-list
    Extensions,
}

/// Pure inclusion predicate over candidate paths
pub struct FilterChain {
    root: PathBuf,
    output_file: PathBuf,
    rules: RuleSet,
    gitignore: GitignoreRules,
    detector: TextDetector,
}

impl FilterChain {
    /// Build the filter chain for a run, detecting available tooling
    pub fn new(config: &Config) -> Self {
        let detector = if command_exists("file") {
            TextDetector::Mime
        } else {
            TextDetector::Extensions
        };
        Self::with_detector(config, detector)
    }

    /// Build the filter chain with an explicit text detector
    pub fn with_detector(config: &Config, detector: TextDetector) -> Self {
        Self {
            root: config.root.clone(),
            output_file: config.output_file.clone(),
            rules: config.rules.clone(),
            gitignore: load_gitignore(&config.root),
            detector,
        }
    }

    /// Evaluate a candidate path against every check, in order
    pub fn evaluate(&self, path: &Path) -> Verdict {
        // The tool's own output file is never part of its input set
        if path == self.output_file {
            return Verdict::IgnoredPattern;
        }

        let rel = relative_path(&self.root, path);

        if self.is_gitignored(&rel) {
            return Verdict::Gitignored;
        }

        if self.rules.has_ignored_extension(path) {
            return Verdict::IgnoredExtension;
        }

        if self.rules.is_ignored_path(&rel) {
            return Verdict::IgnoredPattern;
        }

        // Unknown size is treated as 0, so a stat failure includes the file
        let size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        if size > self.rules.max_file_size {
            return Verdict::TooLarge;
        }

        if !self.is_text(path) {
            return Verdict::NonText;
        }

        Verdict::Included
    }

    fn is_gitignored(&self, rel: &str) -> bool {
        match &self.gitignore {
            GitignoreRules::Authoritative(matcher) => {
                // A file inside an ignored directory is ignored too
                matcher.matched_path_or_any_parents(rel, false).is_ignore()
            }
            GitignoreRules::Naive(lines) => {
                lines.iter().any(|line| rel == line || rel.contains(line.as_str()))
            }
            GitignoreRules::Disabled => false,
        }
    }

    fn is_text(&self, path: &Path) -> bool {
        match self.detector {
            TextDetector::Mime => match sniff_mime(path) {
                Some(mime) => mime.starts_with("text/"),
                // Sniff failure degrades to the extension allow-list
                None => self.rules.has_text_extension(path),
            },
            TextDetector::Extensions => self.rules.has_text_extension(path),
        }
    }
}

/// Load gitignore rules for the root directory.
///
/// When the root is a git repository the `ignore` crate's matcher provides
/// authoritative semantics; otherwise .gitignore lines are matched naively.
fn load_gitignore(root: &Path) -> GitignoreRules {
    let gitignore_path = root.join(".gitignore");
    if !gitignore_path.is_file() {
        return GitignoreRules::Disabled;
    }

    if root.join(".git").exists() {
        let mut builder = GitignoreBuilder::new(root);
        if builder.add(&gitignore_path).is_none() {
            if let Ok(matcher) = builder.build() {
                return GitignoreRules::Authoritative(matcher);
            }
        }
        // An unparseable .gitignore degrades to naive matching
    }

    GitignoreRules::Naive(read_ignore_lines(&gitignore_path))
}

/// Non-comment, non-blank lines of an ignore file
fn read_ignore_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .map(|content| {
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Ask the `file` utility for a MIME type; `None` when the tool fails
fn sniff_mime(path: &Path) -> Option<String> {
    let output = Command::new("file")
        .args(["--brief", "--mime-type"])
        .arg(path)
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let mime = String::from_utf8(output.stdout).ok()?;
    Some(mime.trim().to_string())
}
