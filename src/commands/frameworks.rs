use crate::compliance::default_frameworks;
use crate::core::CiaComponent;
use crate::report::OutputFormat;
use anyhow::Result;
use comfy_table::{presets, Table};

pub fn run(format: OutputFormat) -> Result<()> {
    let frameworks = default_frameworks();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&frameworks)?);
        }
        OutputFormat::Markdown => {
            println!("| Framework | Availability | Integrity | Confidentiality |");
            println!("|-----------|--------------|-----------|-----------------|");
            for framework in &frameworks {
                println!(
                    "| {} | {} | {} | {} |",
                    framework.name,
                    framework.required_level(CiaComponent::Availability),
                    framework.required_level(CiaComponent::Integrity),
                    framework.required_level(CiaComponent::Confidentiality)
                );
            }
        }
        OutputFormat::Terminal => {
            let mut table = Table::new();
            table.load_preset(presets::UTF8_FULL_CONDENSED);
            table.set_header(vec![
                "Framework",
                "Availability",
                "Integrity",
                "Confidentiality",
                "Description",
            ]);
            for framework in &frameworks {
                table.add_row(vec![
                    framework.name.clone(),
                    framework
                        .required_level(CiaComponent::Availability)
                        .to_string(),
                    framework.required_level(CiaComponent::Integrity).to_string(),
                    framework
                        .required_level(CiaComponent::Confidentiality)
                        .to_string(),
                    framework.description.clone(),
                ]);
            }
            println!("{table}");
        }
    }
    Ok(())
}
