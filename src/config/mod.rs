//! Configuration loading and validation.
//!
//! # Modules
//!
//! - [`schema`] - Types mapping to the `.envprobe.yml` format
//! - [`loader`] - File discovery and parsing
//! - [`validator`] - Structural validation rules
//! - [`profile`] - Built-in runtime profiles

pub mod loader;
pub mod profile;
pub mod schema;
pub mod validator;

pub use loader::{load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use profile::{find_profile, resolve_runtime, ResolvedRuntime, RuntimeProfile};
pub use schema::{ProbeConfig, RuntimeConfig, ToolRequirement};
pub use validator::{ensure_valid, validate_config, ValidationError};
