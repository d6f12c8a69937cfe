use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use svcfilelib::types::UnitValue;
use svcfilelib::{Restart, Service, ServiceType, Target};

fn optional_input(theme: &ColorfulTheme, prompt: &str) -> anyhow::Result<Option<String>> {
    let input: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    if input.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(input.trim().to_string()))
    }
}

fn select_value<T: UnitValue>(theme: &ColorfulTheme, prompt: &str, default: T) -> anyhow::Result<T> {
    let items: Vec<&str> = T::ALL.iter().map(|v| v.as_str()).collect();
    let default_index = items
        .iter()
        .position(|item| *item == default.as_str())
        .unwrap_or(0);
    let index = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&items)
        .default(default_index)
        .interact()?;
    Ok(T::ALL[index])
}

pub fn collect_service(theme: &ColorfulTheme, command: Vec<String>) -> anyhow::Result<Service> {
    println!("Creating service configuration...\n");

    let exec_start = if command.is_empty() {
        Input::with_theme(theme)
            .with_prompt("Command to execute")
            .validate_with(|input: &String| -> Result<(), &str> {
                if input.trim().is_empty() {
                    Err("Command cannot be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()?
    } else {
        svcfilelib::exec::command_line(&command)
    };

    let program = exec_start.split_whitespace().next().unwrap_or_default();
    let default_basename = program.rsplit('/').next().unwrap_or(program).to_string();
    let name: String = Input::with_theme(theme)
        .with_prompt("Service name")
        .default(default_basename)
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("Service name cannot be empty")
            } else if input.contains(' ') || input.contains('/') {
                Err("Service name cannot contain spaces or '/'")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let description: String = Input::with_theme(theme)
        .with_prompt("Description")
        .default(name.clone())
        .interact_text()?;

    let mut service = Service::new_default(name, description, exec_start);

    service.service.service_type = Some(select_value(theme, "Service type", ServiceType::Simple)?);
    service.service.working_directory = optional_input(theme, "Working directory path")?;
    service.service.user = optional_input(theme, "Run as user")?;

    let keep_alive = Confirm::with_theme(theme)
        .with_prompt("Restart automatically if it exits?")
        .default(true)
        .interact()?;
    if keep_alive {
        service.service.restart = Some(select_value(theme, "Restart policy", Restart::OnFailure)?);
        service.service.restart_sec = optional_input(theme, "Delay before restarting (e.g. 5s)")?;
    }

    let networked = Confirm::with_theme(theme)
        .with_prompt("Networked service?")
        .default(true)
        .interact()?;
    if !networked {
        service.unit.after = None;
    }

    let run_at_boot = Confirm::with_theme(theme)
        .with_prompt("Start automatically when system boots?")
        .default(true)
        .interact()?;
    service.install.wanted_by = run_at_boot.then_some(Target::MultiUser);

    Ok(service)
}
