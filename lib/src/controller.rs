use crate::files::Level;
use crate::render::render;
use crate::unit::Service;
use anyhow::Result;
use std::fmt;
use std::path::{Path, PathBuf};

/// Lifecycle operations of an init system's control plane.
///
/// The serializer does not depend on this trait. Implementations decide how
/// unit files reach disk and how the service manager is driven.
pub trait ServiceController {
    /// Place the rendered unit at `path` and make the manager pick it up.
    fn install(&mut self, path: &Path, contents: &str) -> Result<()>;
    /// Make the manager re-read unit files.
    fn reload(&mut self) -> Result<()>;
    fn start(&mut self, unit: &str) -> Result<()>;
    fn stop(&mut self, unit: &str) -> Result<()>;
    fn enable(&mut self, unit: &str) -> Result<()>;
}

impl Service {
    /// Render the unit into `dir` through the controller.
    pub fn install_into<C: ServiceController>(&self, controller: &mut C, dir: &Path) -> Result<()> {
        crate::validate::validate(self)?;
        controller.install(&dir.join(self.file_name()), &render(self))
    }

    pub fn start<C: ServiceController>(&self, controller: &mut C) -> Result<()> {
        controller.start(&self.file_name())
    }

    pub fn stop<C: ServiceController>(&self, controller: &mut C) -> Result<()> {
        controller.stop(&self.file_name())
    }

    pub fn enable<C: ServiceController>(&self, controller: &mut C) -> Result<()> {
        controller.enable(&self.file_name())
    }
}

/// A step a control plane would take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    WriteUnit { path: PathBuf, contents: String },
    Systemctl(Vec<String>),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::WriteUnit { path, contents } => {
                write!(f, "write {} ({} bytes)", path.display(), contents.len())
            }
            Action::Systemctl(args) => write!(f, "systemctl {}", args.join(" ")),
        }
    }
}

/// Records the actions a `systemctl`-driven control plane would take,
/// without touching the filesystem or running anything.
#[derive(Debug, Default)]
pub struct DryRun {
    level: Level,
    actions: Vec<Action>,
}

impl DryRun {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            actions: Vec::new(),
        }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn into_actions(self) -> Vec<Action> {
        self.actions
    }

    fn push(&mut self, action: Action) {
        log::info!("{action}");
        self.actions.push(action);
    }

    fn systemctl(&mut self, verb: &str, unit: Option<&str>) {
        let mut args: Vec<String> = self
            .level
            .systemctl_flags()
            .iter()
            .map(|s| s.to_string())
            .collect();
        args.push(verb.to_string());
        args.extend(unit.map(str::to_string));
        self.push(Action::Systemctl(args));
    }
}

impl ServiceController for DryRun {
    fn install(&mut self, path: &Path, contents: &str) -> Result<()> {
        self.push(Action::WriteUnit {
            path: path.to_path_buf(),
            contents: contents.to_string(),
        });
        self.reload()
    }

    fn reload(&mut self) -> Result<()> {
        self.systemctl("daemon-reload", None);
        Ok(())
    }

    fn start(&mut self, unit: &str) -> Result<()> {
        self.systemctl("start", Some(unit));
        Ok(())
    }

    fn stop(&mut self, unit: &str) -> Result<()> {
        self.systemctl("stop", Some(unit));
        Ok(())
    }

    fn enable(&mut self, unit: &str) -> Result<()> {
        self.systemctl("enable", Some(unit));
        Ok(())
    }
}
