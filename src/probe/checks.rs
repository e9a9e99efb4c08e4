//! The built-in check catalogue.
//!
//! Each `check_*` function is the pure body of one check; the matching
//! constructor wraps it in a [`Check`] that owns the data it needs.
//! [`build_checks`] assembles the full list in declaration order.

use anyhow::{anyhow, bail, ensure, Context};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::PathBuf;

use super::capability;
use super::check::{Check, CheckList, CheckOutcome};
use super::path::{resolve_tool_path, PathStyle};
use super::version::Version;
use crate::config::{ProbeConfig, ToolRequirement};
use crate::environment::{HostEnvironment, RuntimeInfo, USERNS_FLAG_PATH};
use crate::error::Result;

/// Fixed input for the digest check.
pub const HASH_INPUT: &str = "lagoon";

/// Record used by the structured-encode round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmokeRecord {
    pub status: String,
    pub sandbox: bool,
}

impl Default for SmokeRecord {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            sandbox: true,
        }
    }
}

/// Pass when the runtime version meets `minimum`.
pub fn check_runtime_version(runtime: &RuntimeInfo, minimum: &Version) -> CheckOutcome {
    let Some(raw) = &runtime.version else {
        let reason = runtime
            .detection_error
            .as_deref()
            .unwrap_or("no version reported");
        bail!("could not determine {} version: {}", runtime.name, reason);
    };

    let version = Version::parse(raw).with_context(|| format!("{} version", runtime.name))?;
    ensure!(
        version.meets(minimum),
        "need {} {}+, got {}",
        runtime.name,
        minimum,
        raw
    );
    Ok(Some(format!("{} {}", runtime.name, raw)))
}

/// Pass when joining the two segments yields a non-empty path.
pub fn check_path_join(style: PathStyle, base: &str, tail: &str) -> CheckOutcome {
    let joined = style.join(base, tail);
    ensure!(
        !joined.is_empty(),
        "joining '{}' and '{}' produced an empty path",
        base,
        tail
    );
    Ok(Some(joined))
}

/// Pass when the OS name is non-empty.
pub fn check_platform(os: &str, family: &str) -> CheckOutcome {
    ensure!(!os.trim().is_empty(), "operating system name is empty");
    if family.trim().is_empty() {
        return Ok(Some(os.to_string()));
    }
    Ok(Some(format!("{} ({})", os, family)))
}

/// Hex-encoded SHA-256 of `input`.
pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

/// Pass when the hex digest of [`HASH_INPUT`] has 64 characters.
pub fn check_hash() -> CheckOutcome {
    let digest = sha256_hex(HASH_INPUT);
    ensure!(
        digest.len() == 64,
        "sha256 length wrong: expected 64 hex chars, got {}",
        digest.len()
    );
    Ok(Some(format!("{}…", &digest[..16])))
}

/// Pass when a [`SmokeRecord`] survives a JSON encode/decode round trip.
pub fn check_json_roundtrip() -> CheckOutcome {
    let original = SmokeRecord::default();
    let encoded = serde_json::to_string(&original).context("encoding record")?;
    let decoded: SmokeRecord = serde_json::from_str(&encoded).context("decoding record")?;

    ensure!(
        decoded.status == original.status,
        "json round-trip failed: status is '{}', expected '{}'",
        decoded.status,
        original.status
    );
    ensure!(decoded == original, "json round-trip failed: {}", encoded);
    Ok(Some(encoded))
}

/// Pass when the named capability loads.
pub fn check_module(name: &str) -> CheckOutcome {
    capability::load(name).map(Some)
}

/// Pass when `tool` resolves to an executable on the given PATH entries.
pub fn check_tool(tool: &ToolRequirement, path_entries: &[PathBuf]) -> CheckOutcome {
    match resolve_tool_path(&tool.name, path_entries) {
        Some(path) => Ok(Some(path.display().to_string())),
        None => match &tool.hint {
            Some(hint) => Err(anyhow!("{} not found on PATH; install: {}", tool.name, hint)),
            None => Err(anyhow!("{} not found on PATH", tool.name)),
        },
    }
}

/// Pass unless the user namespace flag is explicitly `0`.
///
/// A missing flag file means the kernel allows unprivileged namespaces.
pub fn check_userns(flag: Option<&str>) -> CheckOutcome {
    match flag {
        None => Ok(Some("enabled (no kernel flag)".to_string())),
        Some("0") => bail!(
            "user namespaces are disabled on this system; enable with \
             `sudo sysctl -w kernel.unprivileged_userns_clone=1` and persist it in \
             /etc/sysctl.d/99-userns.conf"
        ),
        Some(value) => Ok(Some(format!("enabled ({} = {})", USERNS_FLAG_PATH, value))),
    }
}

/// The `runtime-version` check.
pub fn runtime_version(runtime: RuntimeInfo, minimum: Version) -> Check {
    Check::new(
        "runtime-version",
        format!("{} version is at least {}", runtime.name, minimum),
        move || check_runtime_version(&runtime, &minimum),
    )
}

/// The `path-join` check.
pub fn path_join(style: PathStyle, base: String, tail: String) -> Check {
    Check::new(
        "path-join",
        format!("joining '{}' and '{}' yields a path", base, tail),
        move || check_path_join(style, &base, &tail),
    )
}

/// The `platform` check.
pub fn platform(os: String, family: String) -> Check {
    Check::new(
        "platform",
        "operating system name is reported",
        move || check_platform(&os, &family),
    )
}

/// The `sha256` check.
pub fn hash() -> Check {
    Check::new(
        "sha256",
        format!("sha256 of '{}' is a 64-char hex digest", HASH_INPUT),
        check_hash,
    )
}

/// The `json-roundtrip` check.
pub fn json_roundtrip() -> Check {
    Check::new(
        "json-roundtrip",
        "a record survives JSON encode and decode",
        check_json_roundtrip,
    )
}

/// A `module:<name>` check.
pub fn module(name: String) -> Check {
    Check::new(
        format!("module:{}", name),
        format!("capability '{}' loads without network I/O", name),
        move || check_module(&name),
    )
}

/// A `tool:<name>` check.
pub fn tool(requirement: ToolRequirement, path_entries: Vec<PathBuf>) -> Check {
    Check::new(
        format!("tool:{}", requirement.name),
        format!("{} is on PATH", requirement.name),
        move || check_tool(&requirement, &path_entries),
    )
}

/// The `userns` check.
pub fn userns(flag: Option<String>) -> Check {
    Check::new(
        "userns",
        "unprivileged user namespaces are enabled",
        move || check_userns(flag.as_deref()),
    )
}

/// Assemble the full check list for an environment and configuration.
///
/// The six capability checks come first in fixed order, followed by one
/// check per configured module, then tools, then the optional userns check.
pub fn build_checks(
    env: &HostEnvironment,
    config: &ProbeConfig,
    minimum: Version,
) -> Result<CheckList> {
    let (base, tail) = match config.path_join.as_slice() {
        [base, tail] => (base.clone(), tail.clone()),
        _ => (String::new(), String::new()),
    };

    let mut list = CheckList::new();
    list.push(runtime_version(env.runtime.clone(), minimum))?;
    list.push(path_join(env.path_style, base, tail))?;
    list.push(platform(env.os.clone(), env.family.clone()))?;
    list.push(hash())?;
    list.push(json_roundtrip())?;

    for name in &config.modules {
        list.push(module(name.clone()))?;
    }
    for requirement in &config.tools {
        list.push(tool(requirement.clone(), env.path_entries.clone()))?;
    }
    if config.require_userns {
        list.push(userns(env.userns_clone.clone()))?;
    }

    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProbeError;
    use std::fs;
    use tempfile::TempDir;

    fn node(version: &str) -> RuntimeInfo {
        RuntimeInfo::with_version("node", version)
    }

    fn min(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn version_at_or_above_minimum_passes() {
        for version in ["v20.0.0", "20.11.1", "22.1.0", "23"] {
            let detail = check_runtime_version(&node(version), &min("20")).unwrap();
            assert_eq!(detail, Some(format!("node {}", version)));
        }
    }

    #[test]
    fn version_below_minimum_fails_with_detail() {
        for version in ["18.19.0", "v19.9.0", "0.10.48"] {
            let err = check_runtime_version(&node(version), &min("20")).unwrap_err();
            let msg = err.to_string();
            assert!(!msg.is_empty());
            assert_eq!(msg, format!("need node 20+, got {}", version));
        }
    }

    #[test]
    fn undetected_runtime_fails_with_reason() {
        let runtime = RuntimeInfo::undetected("ruby", "ruby not found: No such file");
        let err = check_runtime_version(&runtime, &min("3")).unwrap_err();
        assert!(err.to_string().contains("could not determine ruby version"));
        assert!(err.to_string().contains("ruby not found"));
    }

    #[test]
    fn garbage_version_fails_with_context() {
        let err = check_runtime_version(&node("unknown"), &min("20")).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("node version"));
        assert!(chain.contains("cannot parse a version"));
    }

    #[test]
    fn path_join_posix() {
        let detail = check_path_join(PathStyle::Posix, "/workspace", "hello.js").unwrap();
        assert_eq!(detail.as_deref(), Some("/workspace/hello.js"));
    }

    #[test]
    fn path_join_of_empty_segments_fails() {
        assert!(check_path_join(PathStyle::Posix, "", "").is_err());
    }

    #[test]
    fn platform_requires_os_name() {
        assert_eq!(
            check_platform("linux", "unix").unwrap().as_deref(),
            Some("linux (unix)")
        );
        assert_eq!(check_platform("linux", "").unwrap().as_deref(), Some("linux"));
        assert!(check_platform("", "unix").is_err());
    }

    #[test]
    fn hash_is_64_hex_chars_and_stable() {
        let first = sha256_hex(HASH_INPUT);
        let second = sha256_hex(HASH_INPUT);
        assert_eq!(first.len(), 64);
        assert_eq!(first, second);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
        // Known-answer check for the empty input.
        assert_eq!(
            sha256_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );

        let detail = check_hash().unwrap().unwrap();
        assert!(detail.starts_with(&first[..16]));
    }

    #[test]
    fn json_roundtrip_preserves_status() {
        let encoded = check_json_roundtrip().unwrap().unwrap();
        let decoded: SmokeRecord = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.status, "ok");
        assert!(decoded.sandbox);
    }

    #[test]
    fn module_check_uses_registry() {
        assert!(check_module("net").is_ok());
        let err = check_module("tensorflow").unwrap_err();
        assert!(err.to_string().contains("not available"));
    }

    #[test]
    fn tool_check_reports_hint_when_missing() {
        let tool = ToolRequirement {
            name: "bwrap".to_string(),
            hint: Some("sudo apt install bubblewrap".to_string()),
        };
        let err = check_tool(&tool, &[]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("bwrap not found on PATH"));
        assert!(msg.contains("sudo apt install bubblewrap"));
        assert!(!msg.contains('\n'));
    }

    #[test]
    fn tool_check_finds_executable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nix-shell");
        fs::write(&path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }
        let tool = ToolRequirement {
            name: "nix-shell".to_string(),
            hint: None,
        };
        let detail = check_tool(&tool, &[dir.path().to_path_buf()]).unwrap();
        assert_eq!(detail, Some(path.display().to_string()));
    }

    #[test]
    fn userns_flag_semantics() {
        assert!(check_userns(None).is_ok());
        assert!(check_userns(Some("1")).is_ok());
        let err = check_userns(Some("0")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("user namespaces are disabled"));
        assert!(msg.contains("sudo sysctl -w kernel.unprivileged_userns_clone=1"));
        assert!(!msg.contains('\n'));
    }

    #[test]
    fn build_checks_declaration_order() {
        let env = HostEnvironment::fixed(node("22.1.0"));
        let mut config = ProbeConfig::default();
        config.modules = vec!["net".to_string(), "json".to_string()];
        config.tools = vec![ToolRequirement {
            name: "bwrap".to_string(),
            hint: None,
        }];
        config.require_userns = true;

        let list = build_checks(&env, &config, min("20")).unwrap();
        assert_eq!(
            list.names(),
            vec![
                "runtime-version",
                "path-join",
                "platform",
                "sha256",
                "json-roundtrip",
                "module:net",
                "module:json",
                "tool:bwrap",
                "userns",
            ]
        );
    }

    #[test]
    fn build_checks_rejects_duplicate_modules() {
        let env = HostEnvironment::fixed(node("22.1.0"));
        let mut config = ProbeConfig::default();
        config.modules = vec!["net".to_string(), "net".to_string()];
        let err = build_checks(&env, &config, min("20")).unwrap_err();
        assert!(matches!(err, ProbeError::DuplicateCheck { ref name } if name == "module:net"));
    }
}
