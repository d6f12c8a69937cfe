use anyhow::{bail, Result};
use clap::Args;
use std::path::PathBuf;
use svcfilelib::{exec, Restart, Service, ServiceType, Target};

#[derive(Debug, Args)]
pub struct Generate {
    #[arg(help = "Name of the service")]
    name: String,
    #[arg(long, help = "Description (defaults to the service name)")]
    description: Option<String>,
    #[arg(long, help = "Target to start after")]
    after: Option<Target>,
    #[arg(long = "type", help = "Service type")]
    service_type: Option<ServiceType>,
    #[arg(long, help = "Restart policy")]
    restart: Option<Restart>,
    #[arg(long, help = "User to run as")]
    user: Option<String>,
    #[arg(long, help = "Group to run as")]
    group: Option<String>,
    #[arg(long, help = "Working directory of the process")]
    working_directory: Option<String>,
    #[arg(long, help = "Target that wants this service")]
    wanted_by: Option<Target>,
    #[arg(short, long, help = "Write into this directory instead of stdout")]
    output: Option<PathBuf>,
    #[arg(last = true, help = "Command to execute")]
    command: Vec<String>,
}

impl Generate {
    pub fn run(&self) -> Result<()> {
        if self.command.is_empty() {
            bail!("No command given. Pass it after `--`, e.g. `svcfile generate app -- /usr/bin/app`");
        }
        let description = self.description.clone().unwrap_or_else(|| self.name.clone());
        let exec_start = exec::command_line(&self.command);
        let mut service = Service::new_default(&self.name, description, exec_start);

        if self.after.is_some() {
            service.unit.after = self.after;
        }
        if self.service_type.is_some() {
            service.service.service_type = self.service_type;
        }
        if self.wanted_by.is_some() {
            service.install.wanted_by = self.wanted_by;
        }
        service.service.restart = self.restart;
        service.service.user = self.user.clone();
        service.service.group = self.group.clone();
        service.service.working_directory = self.working_directory.clone();

        super::emit(&service, self.output.as_deref())
    }
}
