use anyhow::Result;
use clap::Args;
use svcfilelib::section::Section;
use svcfilelib::{Install, ServiceSection, Unit};
use tabled::{
    settings::{Padding, Style},
    Table, Tabled,
};

#[derive(Debug, Args)]
pub struct Fields {
    #[arg(short, long, help = "Only list keys of this section (Unit, Service or Install)")]
    pub section: Option<String>,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Section")]
    section: &'static str,
    #[tabled(rename = "Key")]
    key: &'static str,
}

fn catalog_rows<S: Section>() -> impl Iterator<Item = FieldRow> {
    S::keys().map(|key| FieldRow {
        section: S::HEADER,
        key,
    })
}

impl Fields {
    pub fn run(&self) -> Result<()> {
        let mut rows: Vec<FieldRow> = catalog_rows::<Unit>()
            .chain(catalog_rows::<ServiceSection>())
            .chain(catalog_rows::<Install>())
            .collect();
        if let Some(section) = &self.section {
            rows.retain(|row| row.section.eq_ignore_ascii_case(section));
            if rows.is_empty() {
                eprintln!("No section named '{section}'.");
                return Ok(());
            }
        }

        // Check if output is piped (not a terminal)
        if atty::isnt(atty::Stream::Stdout) {
            for row in &rows {
                println!("{}\t{}", row.section, row.key);
            }
        } else {
            let mut table = Table::new(rows);
            table.with(Style::blank()).with(Padding::zero());
            println!("{table}");
        }
        Ok(())
    }
}
