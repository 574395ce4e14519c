/*!
 * Clipboard sink for CtxCat
 *
 * Copies the aggregate document to the system clipboard using the first
 * available utility from an ordered, OS-appropriate preference list.
 */

use std::env;
use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::sync::OnceLock;

use thiserror::Error;

use crate::utils::command_exists;

/// Error type for clipboard operations
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// Failed to execute the clipboard command
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// No suitable clipboard mechanism was found
    #[error("No suitable clipboard mechanism found")]
    NoClipboardFound,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for clipboard operations
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// A clipboard utility and the arguments that make it read stdin
#[derive(Debug, Clone, Copy)]
struct Provider {
    command: &'static str,
    args: &'static [&'static str],
}

const TMUX: Provider = Provider {
    command: "tmux",
    args: &["load-buffer", "-w", "-"],
};
const WAYLAND: Provider = Provider {
    command: "wl-copy",
    args: &[],
};
const XSEL: Provider = Provider {
    command: "xsel",
    args: &["-b", "-i"],
};
const XCLIP: Provider = Provider {
    command: "xclip",
    args: &["-selection", "clipboard", "-in"],
};
const MACOS: Provider = Provider {
    command: "pbcopy",
    args: &[],
};
const WSL: Provider = Provider {
    command: "clip.exe",
    args: &[],
};
const TERMUX: Provider = Provider {
    command: "termux-clipboard-set",
    args: &[],
};

/// Copy text to the system clipboard.
///
/// Detects the first usable clipboard utility for the host OS and pipes the
/// text through it. When no mechanism is available, returns
/// [`ClipboardError::NoClipboardFound`].
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let provider = detect_provider().ok_or(ClipboardError::NoClipboardFound)?;
    pipe_through(provider, text)
}

/// First available provider in preference order, `None` when there is none
fn detect_provider() -> Option<Provider> {
    candidate_providers()
        .into_iter()
        .find(|p| command_exists(p.command))
}

/// Ordered provider preference list for the host platform
fn candidate_providers() -> Vec<Provider> {
    let mut candidates = Vec::with_capacity(4);

    // Inside a tmux session, its paste buffer is preferred
    if is_tmux_session() {
        candidates.push(TMUX);
    }

    match platform() {
        "macos" => candidates.push(MACOS),
        "windows" | "wsl" => candidates.push(WSL),
        "linux" => {
            candidates.push(WAYLAND);
            candidates.push(XSEL);
            candidates.push(XCLIP);
        }
        "android" => candidates.push(TERMUX),
        _ => {}
    }

    candidates
}

fn pipe_through(provider: Provider, text: &str) -> Result<()> {
    let mut child = Command::new(provider.command)
        .args(provider.args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|_| {
            ClipboardError::CommandFailed(format!("Failed to spawn {}", provider.command))
        })?;

    let stdin = child.stdin.as_mut().ok_or_else(|| {
        ClipboardError::CommandFailed(format!("Failed to open stdin for {}", provider.command))
    })?;

    stdin.write_all(text.as_bytes()).map_err(|_| {
        ClipboardError::CommandFailed(format!("Failed to write to {}", provider.command))
    })?;

    let status = child.wait().map_err(|_| {
        ClipboardError::CommandFailed(format!("Failed to wait for {}", provider.command))
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed(format!(
            "{} exited with status: {}",
            provider.command, status
        )))
    }
}

/// Platform detection cache
static PLATFORM: OnceLock<&'static str> = OnceLock::new();

fn platform() -> &'static str {
    PLATFORM.get_or_init(|| {
        if cfg!(target_os = "macos") {
            "macos"
        } else if cfg!(target_os = "windows") {
            "windows"
        } else if cfg!(target_os = "linux") {
            if env::var("WSL_DISTRO_NAME").is_ok() {
                "wsl"
            } else {
                "linux"
            }
        } else if cfg!(target_os = "android") {
            "android"
        } else {
            "unknown"
        }
    })
}

/// Check if we are inside a usable tmux session
fn is_tmux_session() -> bool {
    if !command_exists("tmux") {
        return false;
    }

    if env::var("TMUX").is_ok() {
        return true;
    }

    Command::new("tmux")
        .args(["list-buffers"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
