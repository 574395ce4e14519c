/*!
 * Directory tree rendering for CtxCat
 *
 * Prefers the external `tree` utility when present, passing it the same
 * ignore list the filter chain uses; otherwise falls back to a built-in
 * recursive renderer with equivalent nesting and ordering semantics.
 */

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::RuleSet;
use crate::scanner::relative_path;
use crate::utils::command_exists;

/// Render the directory hierarchy rooted at `root` as a multi-line listing.
///
/// Directories matching the ignored pattern list are pruned together with
/// all of their descendants.
pub fn render_tree(root: &Path, rules: &RuleSet) -> String {
    if command_exists("tree") {
        if let Some(output) = render_external(root, rules) {
            return output;
        }
    }
    render_tree_builtin(root, rules)
}

/// Delegate rendering to the external `tree` binary; `None` when it fails
fn render_external(root: &Path, rules: &RuleSet) -> Option<String> {
    // tree's -I takes a |-separated pattern list; directory patterns lose
    // their trailing slash here
    let ignore_arg = rules
        .ignored_patterns
        .iter()
        .map(|p| p.trim_end_matches('/'))
        .collect::<Vec<_>>()
        .join("|");

    let output = Command::new("tree")
        .arg("-I")
        .arg(&ignore_arg)
        .arg("--noreport")
        .current_dir(root)
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    Some(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Built-in recursive renderer.
///
/// One entry per line with branch connectors; directories sort before files
/// at each level, entries sort lexicographically by name within each group.
pub fn render_tree_builtin(root: &Path, rules: &RuleSet) -> String {
    let name = root
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string());

    let mut out = String::new();
    out.push_str(&name);
    out.push('\n');
    render_level(root, root, "", rules, &mut out);
    out
}

fn render_level(root: &Path, dir: &Path, prefix: &str, rules: &RuleSet, out: &mut String) {
    let mut dirs: Vec<(String, PathBuf)> = Vec::new();
    let mut files: Vec<String> = Vec::new();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        // Unreadable directories are skipped, not reported
        Err(_) => return,
    };

    for entry in entries.filter_map(std::result::Result::ok) {
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);

        // Pruned directories take all their descendants with them
        let rel = relative_path(root, &path);
        let probe = if is_dir { format!("{}/", rel) } else { rel };
        if rules.is_ignored_path(&probe) {
            continue;
        }

        if is_dir {
            dirs.push((name, path));
        } else {
            files.push(name);
        }
    }

    dirs.sort_by(|a, b| a.0.cmp(&b.0));
    files.sort();

    let total = dirs.len() + files.len();
    let mut index = 0;

    for (name, path) in &dirs {
        index += 1;
        let last = index == total;
        let connector = if last { "└── " } else { "├── " };
        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(name);
        out.push('\n');

        let child_prefix = format!("{}{}", prefix, if last { "    " } else { "│   " });
        render_level(root, path, &child_prefix, rules, out);
    }

    for name in &files {
        index += 1;
        let last = index == total;
        let connector = if last { "└── " } else { "├── " };
        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(name);
        out.push('\n');
    }
}
