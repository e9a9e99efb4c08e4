//! Path conventions and PATH lookups.

use std::path::{Path, PathBuf};

/// Separator conventions for joining path segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    /// `/`-separated, absolute when starting with `/`.
    Posix,
    /// `\`-separated; `/` is also accepted when reading.
    Windows,
}

impl PathStyle {
    /// Style of the host this binary was built for.
    pub fn host() -> Self {
        if cfg!(windows) {
            PathStyle::Windows
        } else {
            PathStyle::Posix
        }
    }

    /// The separator written between segments.
    pub fn separator(&self) -> char {
        match self {
            PathStyle::Posix => '/',
            PathStyle::Windows => '\\',
        }
    }

    fn is_separator(&self, c: char) -> bool {
        match self {
            PathStyle::Posix => c == '/',
            PathStyle::Windows => c == '\\' || c == '/',
        }
    }

    fn is_absolute(&self, segment: &str) -> bool {
        match self {
            PathStyle::Posix => segment.starts_with('/'),
            PathStyle::Windows => {
                let bytes = segment.as_bytes();
                segment.starts_with('\\')
                    || segment.starts_with('/')
                    || (bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':')
            }
        }
    }

    /// Join two segments.
    ///
    /// An absolute `tail` replaces `base`. Separators at the seam are
    /// collapsed to one, and an empty side yields the other unchanged.
    pub fn join(&self, base: &str, tail: &str) -> String {
        if tail.is_empty() {
            return base.to_string();
        }
        if base.is_empty() || self.is_absolute(tail) {
            return tail.to_string();
        }

        let head = base.trim_end_matches(|c| self.is_separator(c));
        let tail = tail.trim_start_matches(|c| self.is_separator(c));
        if head.is_empty() {
            // base was only separators, i.e. the root
            return format!("{}{}", self.separator(), tail);
        }
        format!("{}{}{}", head, self.separator(), tail)
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn posix_join_workspace_file() {
        assert_eq!(
            PathStyle::Posix.join("/workspace", "hello.js"),
            "/workspace/hello.js"
        );
    }

    #[test]
    fn posix_join_collapses_seam_separators() {
        assert_eq!(PathStyle::Posix.join("/workspace/", "hello.js"), "/workspace/hello.js");
        assert_eq!(PathStyle::Posix.join("a//", "/b"), "/b");
        assert_eq!(PathStyle::Posix.join("/", "etc"), "/etc");
    }

    #[test]
    fn posix_absolute_tail_replaces_base() {
        assert_eq!(PathStyle::Posix.join("/workspace", "/tmp/x"), "/tmp/x");
    }

    #[test]
    fn join_with_empty_segments() {
        assert_eq!(PathStyle::Posix.join("", "hello.js"), "hello.js");
        assert_eq!(PathStyle::Posix.join("/workspace", ""), "/workspace");
        assert_eq!(PathStyle::Posix.join("", ""), "");
    }

    #[test]
    fn windows_join_uses_backslash() {
        assert_eq!(
            PathStyle::Windows.join("C:\\workspace", "hello.js"),
            "C:\\workspace\\hello.js"
        );
        assert_eq!(
            PathStyle::Windows.join("C:\\workspace/", "hello.js"),
            "C:\\workspace\\hello.js"
        );
        assert_eq!(PathStyle::Windows.join("C:\\workspace", "D:\\x"), "D:\\x");
    }

    #[test]
    fn host_style_matches_target() {
        if cfg!(windows) {
            assert_eq!(PathStyle::host(), PathStyle::Windows);
        } else {
            assert_eq!(PathStyle::host(), PathStyle::Posix);
        }
    }

    #[test]
    fn resolve_tool_path_finds_first_match() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let tool = second.path().join("bwrap");
        fs::write(&tool, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();
        }

        let entries = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        assert_eq!(resolve_tool_path("bwrap", &entries), Some(tool));
        assert_eq!(resolve_tool_path("nix-shell", &entries), None);
    }

    #[cfg(unix)]
    #[test]
    fn resolve_tool_path_skips_non_executable() {
        use std::os::unix::fs::PermissionsExt;
        let dir = TempDir::new().unwrap();
        let tool = dir.path().join("bwrap");
        fs::write(&tool, "not a program").unwrap();
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o644)).unwrap();

        assert_eq!(resolve_tool_path("bwrap", &[dir.path().to_path_buf()]), None);
    }
}
