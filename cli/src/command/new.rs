use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use svcfilelib::{files, DryRun, Level, ServiceController};

#[derive(Debug, Args)]
pub struct New {
    #[arg(long, help = "Create a unit for the user's service manager")]
    user_level: bool,
    command: Vec<String>,
}

impl New {
    pub fn run(&self) -> Result<()> {
        let theme = ColorfulTheme::default();
        let service = crate::interactive::collect_service(&theme, self.command.clone())?;

        let level = if self.user_level {
            Level::User
        } else {
            Level::System
        };
        let dir = files::unit_directory(level)?;

        println!("\n{service}");
        let write_now = Confirm::with_theme(&theme)
            .with_prompt(format!("Write {}?", dir.join(service.file_name()).display()))
            .default(true)
            .interact()?;
        if !write_now {
            return Ok(());
        }

        let path = files::write_unit(&service, &dir)?;
        println!("Service '{}' written to {}.", service.name, path.display());

        let mut controller = DryRun::new(level);
        controller.reload()?;
        service.enable(&mut controller)?;
        service.start(&mut controller)?;
        println!("\nTo activate it, run:");
        for action in controller.actions() {
            println!("  {action}");
        }

        Ok(())
    }
}
