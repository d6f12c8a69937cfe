use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use svcfilelib::{files, DryRun, Level};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Step {
    /// Write the unit file and reload the manager
    Install,
    Start,
    Stop,
    Enable,
}

#[derive(Debug, Args)]
pub struct Plan {
    #[arg(help = "Path to a TOML service definition")]
    definition: PathBuf,
    #[arg(value_enum, default_values_t = [Step::Install, Step::Enable, Step::Start])]
    steps: Vec<Step>,
    #[arg(long, help = "Plan for the user's service manager")]
    user_level: bool,
}

impl Plan {
    pub fn run(&self) -> Result<()> {
        let service = files::read_definition(&self.definition)?;
        let level = if self.user_level {
            Level::User
        } else {
            Level::System
        };
        let dir = files::unit_directory(level)?;

        let mut controller = DryRun::new(level);
        for step in &self.steps {
            match step {
                Step::Install => service.install_into(&mut controller, &dir)?,
                Step::Start => service.start(&mut controller)?,
                Step::Stop => service.stop(&mut controller)?,
                Step::Enable => service.enable(&mut controller)?,
            }
        }

        for action in controller.actions() {
            println!("{action}");
        }
        Ok(())
    }
}
