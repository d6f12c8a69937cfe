use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use svcfilelib::files;

#[derive(Debug, Args)]
pub struct Render {
    #[arg(help = "Path to a TOML service definition")]
    definition: PathBuf,
    #[arg(short, long, help = "Write into this directory instead of stdout")]
    output: Option<PathBuf>,
}

impl Render {
    pub fn run(&self) -> Result<()> {
        let service = files::read_definition(&self.definition)?;
        super::emit(&service, self.output.as_deref())
    }
}
