use crate::render::render;
use crate::unit::Service;
use crate::validate::validate;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Whether a unit belongs to the system manager or a user's manager.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Level {
    User,
    #[default]
    System,
}

impl Level {
    /// Flags passed to `systemctl` for this level.
    pub fn systemctl_flags(&self) -> &'static [&'static str] {
        match self {
            Level::User => &["--user"],
            Level::System => &[],
        }
    }
}

/// Directory unit files of the given level are installed into.
pub fn unit_directory(level: Level) -> Result<PathBuf> {
    match level {
        Level::System => Ok(PathBuf::from("/etc/systemd/system")),
        Level::User => dirs::config_dir()
            .map(|dir| dir.join("systemd/user"))
            .ok_or_else(|| anyhow!("Could not determine the user config directory")),
    }
}

/// Write the rendered unit into `dir`, returning the path of the new file.
pub fn write_unit(service: &Service, dir: &Path) -> Result<PathBuf> {
    validate(service)?;

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create unit directory: {}", dir.display()))?;

    let path = dir.join(service.file_name());
    fs::write(&path, render(service))
        .with_context(|| format!("Failed to write unit file: {}", path.display()))?;
    log::debug!("Wrote {}", path.display());

    Ok(path)
}

/// Load a service from a TOML definition file.
///
/// ```toml
/// name = "app"
///
/// [unit]
/// description = "My App"
/// after = "network.target"
///
/// [service]
/// type = "simple"
/// exec_start = "/usr/bin/app"
/// ```
pub fn read_definition(path: &Path) -> Result<Service> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read definition file: {}", path.display()))?;
    parse_definition(&contents)
        .with_context(|| format!("Invalid definition file: {}", path.display()))
}

pub fn parse_definition(contents: &str) -> Result<Service> {
    let service: Service = toml::from_str(contents)?;
    validate(&service)?;
    Ok(service)
}
