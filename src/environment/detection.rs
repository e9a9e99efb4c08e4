//! Runtime and kernel detection.

use std::path::Path;
use std::process::Command;

use crate::probe::Version;

use super::RuntimeInfo;

/// Kernel flag controlling unprivileged user namespaces on Debian-family kernels.
pub const USERNS_FLAG_PATH: &str = "/proc/sys/kernel/unprivileged_userns_clone";

/// Determine a runtime's version.
///
/// A pinned version wins. Otherwise `command` is run and the first
/// version-looking token of its output is taken.
pub fn detect_runtime(name: &str, command: &str, pinned: Option<&str>) -> RuntimeInfo {
    if let Some(version) = pinned {
        tracing::debug!("Using pinned {} version {}", name, version);
        return RuntimeInfo::with_version(name, version);
    }

    let parts: Vec<&str> = command.split_whitespace().collect();
    let Some((program, args)) = parts.split_first() else {
        return RuntimeInfo::undetected(name, "empty version command");
    };

    tracing::debug!("Detecting {} version with `{}`", name, command);
    match Command::new(program).args(args).output() {
        Ok(output) if output.status.success() => {
            // python 2 printed its version to stderr
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            let text = if stdout.trim().is_empty() {
                stderr
            } else {
                stdout
            };
            match extract_version(&text) {
                Some(version) => RuntimeInfo::with_version(name, &version),
                None => RuntimeInfo::undetected(
                    name,
                    format!("no version in output of `{}`: {}", command, text.trim()),
                ),
            }
        }
        Ok(output) => RuntimeInfo::undetected(
            name,
            format!("`{}` exited with {}", command, output.status),
        ),
        Err(e) => RuntimeInfo::undetected(name, format!("{} not found: {}", program, e)),
    }
}

/// Extract version from command output.
pub fn extract_version(output: &str) -> Option<String> {
    Version::find(output).map(str::to_string)
}

/// Read the user namespace flag; `None` when the file does not exist.
pub fn read_userns_flag(path: &Path) -> Option<String> {
    std::fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn pinned_version_skips_command() {
        let info = detect_runtime("node", "definitely-not-a-binary --version", Some("22.1.0"));
        assert_eq!(info.version.as_deref(), Some("22.1.0"));
        assert!(info.detection_error.is_none());
    }

    #[test]
    fn missing_binary_is_undetected() {
        let info = detect_runtime("zzz", "envprobe-missing-binary-xyz --version", None);
        assert!(info.version.is_none());
        let reason = info.detection_error.unwrap();
        assert!(reason.contains("envprobe-missing-binary-xyz not found"));
    }

    #[test]
    fn empty_command_is_undetected() {
        let info = detect_runtime("node", "   ", None);
        assert_eq!(info.detection_error.as_deref(), Some("empty version command"));
    }

    #[cfg(unix)]
    #[test]
    fn detects_version_from_command_output() {
        let info = detect_runtime("shell", "echo v20.11.1", None);
        assert_eq!(info.version.as_deref(), Some("20.11.1"));
    }

    #[test]
    fn extract_version_formats() {
        assert_eq!(extract_version("v22.1.0\n"), Some("22.1.0".to_string()));
        assert_eq!(extract_version("Python 3.11.4"), Some("3.11.4".to_string()));
        assert_eq!(
            extract_version("ruby 3.2.2p53 (2023-03-30 revision e51014f9c0) [x86_64-linux]"),
            Some("3.2.2".to_string())
        );
        assert_eq!(extract_version("go version 1.22"), Some("1.22".to_string()));
        assert_eq!(extract_version("v20"), Some("20".to_string()));
        assert_eq!(extract_version("no digits here"), None);
    }

    #[test]
    fn userns_flag_absent_is_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(read_userns_flag(&dir.path().join("missing")), None);
    }

    #[test]
    fn userns_flag_is_trimmed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("flag");
        fs::write(&path, "0\n").unwrap();
        assert_eq!(read_userns_flag(&path).as_deref(), Some("0"));
    }
}
