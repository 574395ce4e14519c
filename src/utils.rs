/*!
 * Utility functions and static rule lists for CtxCat
 */

use std::env;
use std::path::Path;
use std::process::{Command, Stdio};

use once_cell::sync::Lazy;

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

/// Check if a command exists on the system
///
/// # Arguments
/// * `command` - The command to check
///
/// # Returns
/// * `true` - If the command exists and can be executed
/// * `false` - Otherwise
pub fn command_exists(command: &str) -> bool {
    // First check if the command exists in the PATH
    if let Ok(paths) = env::var("PATH") {
        for path in paths.split(':') {
            let p = Path::new(path).join(command);
            if p.exists() {
                return true;
            }
        }
    }

    // Try to run the command with '--version' flag as fallback
    Command::new(command)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

/// Extensions of known binary or generated files, matched case-insensitively
/// against the substring after the final `.` in a file name. Files with no
/// extension are never excluded by this list.
pub static IGNORED_EXTENSIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Archives
        "zip", "tar", "gz", "tgz", "bz2", "xz", "7z", "rar", "jar", "war", "ear",
        // Images
        "png", "jpg", "jpeg", "gif", "bmp", "tiff", "ico", "webp", "svg", "psd", "icns",
        // Audio
        "mp3", "wav", "ogg", "flac", "aac", "m4a",
        // Video
        "mp4", "avi", "mkv", "mov", "wmv", "flv", "webm",
        // Fonts
        "ttf", "otf", "woff", "woff2", "eot",
        // Compiled objects
        "exe", "dll", "so", "dylib", "o", "a", "obj", "class", "pyc", "pyo", "wasm", "bin",
        // Office documents
        "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx",
        // Databases
        "sqlite", "sqlite3", "db",
    ]
});

/// Path substrings of generated or vendored content. A path is excluded if
/// it contains any of these as a substring. Directory names carry a trailing
/// slash so that `dist/` never matches a file called `distance.py`.
pub static IGNORED_PATTERNS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Version control metadata
        ".git/", ".svn/", ".hg/",
        // Dependencies
        "node_modules/", "bower_components/", "vendor/",
        // Build output
        "target/", "build/", "dist/", "out/", "__pycache__/",
        // Virtual environments
        ".venv/", "venv/",
        // Editor configuration
        ".idea/", ".vscode/",
        // Caches and framework output
        ".cache/", ".pytest_cache/", ".mypy_cache/", ".next/", ".nuxt/",
        // Lockfiles
        "package-lock.json", "yarn.lock", "pnpm-lock.yaml", "Cargo.lock",
        "composer.lock", "Gemfile.lock", "poetry.lock",
        // OS files and minified assets
        ".DS_Store", ".min.js", ".min.css",
    ]
});

/// Extensions of known text files, used as the fallback allow-list when no
/// MIME sniffing tool is available. Matched case-insensitively.
pub static TEXT_EXTENSIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Documentation
        "txt", "md", "markdown", "rst", "adoc", "tex",
        // Source code
        "rs", "py", "js", "ts", "jsx", "tsx", "c", "h", "cpp", "hpp", "cc", "java", "kt",
        "swift", "go", "rb", "php", "pl", "lua", "r", "scala", "clj", "ex", "exs", "erl",
        "hs", "sh", "bash", "zsh", "fish", "vue", "svelte",
        // Markup and styles
        "html", "htm", "css", "scss", "sass", "less", "xml",
        // Configuration
        "json", "yaml", "yml", "toml", "ini", "cfg", "conf", "env", "properties",
        // Data and queries
        "sql", "csv", "tsv", "graphql", "proto",
    ]
});
