use crate::section::section;
use crate::types::{Restart, ServiceType, SystemdBool, Target};
use serde::{Deserialize, Serialize};

section! {
    /// The `[Unit]` section: description, ordering and dependencies.
    pub struct Unit => "Unit" {
        description: Option<String> => "Description",
        documentation: Option<String> => "Documentation",
        before: Option<Target> => "Before",
        after: Option<Target> => "After",
        wants: Option<Target> => "Wants",
        condition_path_exists: Option<String> => "ConditionPathExists",
        conflicts: Option<String> => "Conflicts",
    }
}

section! {
    /// The `[Service]` section: how the process is started, stopped and restarted.
    pub struct ServiceSection => "Service" {
        #[serde(rename = "type")]
        service_type: Option<ServiceType> => "Type",
        exec_start_pre: Option<String> => "ExecStartPre",
        exec_start: Option<String> => "ExecStart",
        exec_reload: Option<String> => "ExecReload",
        exec_stop: Option<String> => "ExecStop",
        restart_sec: Option<String> => "RestartSec",
        user: Option<String> => "User",
        group: Option<String> => "Group",
        restart: Option<Restart> => "Restart",
        timeout_start_sec: Option<u32> => "TimeoutStartSec",
        timeout_stop_sec: Option<u32> => "TimeoutStopSec",
        success_exit_status: Option<String> => "SuccessExitStatus",
        restart_prevent_exit_status: Option<String> => "RestartPreventExitStatus",
        pid_file: Option<String> => "PIDFile",
        working_directory: Option<String> => "WorkingDirectory",
        root_directory: Option<String> => "RootDirectory",
        logs_directory: Option<String> => "LogsDirectory",
        kill_mode: Option<String> => "KillMode",
        condition_path_exists: Option<String> => "ConditionPathExists",
        remain_after_exit: Option<SystemdBool> => "RemainAfterExit",
    }
}

section! {
    /// The `[Install]` section, used when the unit is enabled.
    pub struct Install => "Install" {
        wanted_by: Option<Target> => "WantedBy",
        alias: Option<String> => "Alias",
    }
}

/// A named service unit. Always carries exactly one of each section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Service {
    pub name: String,
    #[serde(default)]
    pub unit: Unit,
    #[serde(default)]
    pub service: ServiceSection,
    #[serde(default)]
    pub install: Install,
}

impl Service {
    /// A simple service started after the network and wanted by
    /// `multi-user.target`.
    pub fn new_default(
        name: impl Into<String>,
        description: impl Into<String>,
        exec_start: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            unit: Unit {
                description: Some(description.into()),
                after: Some(Target::Network),
                ..Default::default()
            },
            service: ServiceSection {
                service_type: Some(ServiceType::Simple),
                exec_start: Some(exec_start.into()),
                ..Default::default()
            },
            install: Install {
                wanted_by: Some(Target::MultiUser),
                ..Default::default()
            },
        }
    }

    pub fn new(
        name: impl Into<String>,
        unit: Unit,
        service: ServiceSection,
        install: Install,
    ) -> Self {
        Self {
            name: name.into(),
            unit,
            service,
            install,
        }
    }

    /// File name of the unit, e.g. `app.service`.
    pub fn file_name(&self) -> String {
        if self.name.ends_with(".service") {
            self.name.clone()
        } else {
            format!("{}.service", self.name)
        }
    }
}
