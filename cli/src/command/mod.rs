mod fields;
mod generate;
mod new;
mod plan;
mod render;

pub use fields::Fields;
pub use generate::Generate;
pub use new::New;
pub use plan::Plan;
pub use render::Render;

use anyhow::Result;
use std::path::Path;
use svcfilelib::{files, Service};

/// Print the unit, or write it into `output` when a directory is given.
pub(crate) fn emit(service: &Service, output: Option<&Path>) -> Result<()> {
    match output {
        Some(dir) => {
            let path = files::write_unit(service, dir)?;
            eprintln!("Wrote {}", path.display());
        }
        None => {
            svcfilelib::validate::validate(service)?;
            print!("{service}");
            let base_path = files::unit_directory(files::Level::System)?;
            eprintln!(
                "{} is the suggested file path.",
                base_path.join(service.file_name()).display()
            );
        }
    }
    Ok(())
}
