//! Subcommand handlers
//!
//! Thin glue between the parsed CLI arguments and the core pipeline: read
//! input, materialize rules, run the transformation, write output.

use crate::cli::TransformArgs;
use anyhow::{Context, Result};
use recast_core::{transform, DataFormat, FieldMapping, TransformRequest};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Handle the transform command
pub fn handle_transform(args: TransformArgs) -> Result<()> {
    let input_data = read_input(&args.input)?;
    let source_format = resolve_source_format(&args)?;
    let mapping_rules = args
        .rules
        .as_deref()
        .map(read_rules)
        .transpose()?;

    let request = TransformRequest {
        input_data,
        source_format,
        target_format: args.to.clone(),
        mapping_configuration_id: None,
        mapping_rules,
    };

    let outcome = transform(&request, None)?;
    tracing::info!(duration_ms = outcome.duration_ms, "transformation complete");

    match &args.output {
        Some(path) => fs::write(path, &outcome.output_data)
            .with_context(|| format!("failed to write output to {}", path.display()))?,
        None => println!("{}", outcome.output_data),
    }
    Ok(())
}

/// Handle the formats command
pub fn handle_formats() -> Result<()> {
    println!("{:<8} {:<20} {}", "NAME", "MIME TYPE", "EXTENSIONS");
    for format in DataFormat::ALL {
        println!(
            "{:<8} {:<20} {}",
            format.name(),
            format.mime_type(),
            format.extensions().join(", ")
        );
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read from stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display()))
    }
}

fn resolve_source_format(args: &TransformArgs) -> Result<String> {
    if let Some(name) = &args.from {
        return Ok(name.clone());
    }
    args.input
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(DataFormat::from_extension)
        .map(|format| format.name().to_string())
        .context("cannot infer source format from input path; pass --from")
}

fn read_rules(path: &Path) -> Result<Vec<FieldMapping>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read rules file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("rules file {} is not a valid rule array", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::TransformArgs;
    use std::path::PathBuf;

    fn args(input: &str, from: Option<&str>) -> TransformArgs {
        TransformArgs {
            input: PathBuf::from(input),
            from: from.map(String::from),
            to: "json".to_string(),
            rules: None,
            output: None,
        }
    }

    #[test]
    fn test_source_format_explicit_wins() {
        let resolved = resolve_source_format(&args("data.json", Some("csv"))).unwrap();
        assert_eq!(resolved, "csv");
    }

    #[test]
    fn test_source_format_inferred_from_extension() {
        let resolved = resolve_source_format(&args("data.csv", None)).unwrap();
        assert_eq!(resolved, "csv");
    }

    #[test]
    fn test_source_format_unresolvable() {
        assert!(resolve_source_format(&args("-", None)).is_err());
        assert!(resolve_source_format(&args("data.bin", None)).is_err());
    }
}
