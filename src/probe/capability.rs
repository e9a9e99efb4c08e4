//! Compiled-in capability registry for module-availability checks.
//!
//! A capability is "loadable" when its loader exercises the underlying
//! library without touching the network or the filesystem. Names from other
//! runtimes (`http.server`, `net/http`) are accepted as aliases.

use anyhow::{bail, ensure, Context};
use sha2::{Digest, Sha256};

type Loader = fn() -> anyhow::Result<String>;

struct CapabilityDef {
    name: &'static str,
    aliases: &'static [&'static str],
    loader: Loader,
}

const CAPABILITIES: &[CapabilityDef] = &[
    CapabilityDef {
        name: "net",
        aliases: &["http", "http.server", "net/http"],
        loader: load_net,
    },
    CapabilityDef {
        name: "json",
        aliases: &[],
        loader: load_json,
    },
    CapabilityDef {
        name: "yaml",
        aliases: &[],
        loader: load_yaml,
    },
    CapabilityDef {
        name: "crypto",
        aliases: &["sha256"],
        loader: load_crypto,
    },
    CapabilityDef {
        name: "regex",
        aliases: &[],
        loader: load_regex,
    },
    CapabilityDef {
        name: "process",
        aliases: &[],
        loader: load_process,
    },
];

fn find(name: &str) -> Option<&'static CapabilityDef> {
    CAPABILITIES
        .iter()
        .find(|c| c.name == name || c.aliases.iter().any(|a| *a == name))
}

/// Canonical names of every registered capability.
pub fn known_capabilities() -> Vec<&'static str> {
    CAPABILITIES.iter().map(|c| c.name).collect()
}

/// Load a capability by name and return a short detail for the report.
pub fn load(name: &str) -> anyhow::Result<String> {
    let Some(def) = find(name) else {
        bail!(
            "capability '{}' is not available (known: {})",
            name,
            known_capabilities().join(", ")
        );
    };
    let detail = (def.loader)().with_context(|| format!("failed to load '{}'", def.name))?;
    if def.name == name {
        Ok(detail)
    } else {
        Ok(format!("{} (as {})", detail, def.name))
    }
}

fn load_net() -> anyhow::Result<String> {
    // Address parsing only; nothing is bound or connected.
    let addr: std::net::SocketAddr = "127.0.0.1:0".parse()?;
    ensure!(addr.ip().is_loopback(), "loopback address did not parse as loopback");
    Ok("std::net ok".to_string())
}

fn load_json() -> anyhow::Result<String> {
    let value = serde_json::json!({ "probe": true });
    let text = serde_json::to_string(&value)?;
    ensure!(text == r#"{"probe":true}"#, "unexpected encoding: {}", text);
    Ok("serde_json ok".to_string())
}

fn load_yaml() -> anyhow::Result<String> {
    let value: serde_yaml::Value = serde_yaml::from_str("probe: true")?;
    ensure!(
        value.get("probe").and_then(serde_yaml::Value::as_bool) == Some(true),
        "unexpected decoding"
    );
    Ok("serde_yaml ok".to_string())
}

fn load_crypto() -> anyhow::Result<String> {
    let digest = Sha256::digest(b"");
    ensure!(digest.len() == 32, "unexpected digest length {}", digest.len());
    Ok("sha2 ok".to_string())
}

fn load_regex() -> anyhow::Result<String> {
    let re = regex::Regex::new(r"^\d+$")?;
    ensure!(re.is_match("42"), "pattern did not match");
    Ok("regex ok".to_string())
}

fn load_process() -> anyhow::Result<String> {
    let pid = std::process::id();
    ensure!(pid > 0, "process id unavailable");
    Ok(format!("pid {}", pid))
}
