use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::cli::args::{CliArgs, OutputFormat};
use crate::cli::manifest::Manifest;
use crate::pipeline::{SynthesizedType, synthesize_all};
use enumtab_common::Diagnostic;
use enumtab_emitter::transforms::ir::screaming_snake;
use enumtab_emitter::{EnumTableIR, SourcePrinter};

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output: PathBuf,
    /// Types written, in the order requested.
    pub generated: Vec<String>,
    /// Types that failed and were skipped under `--keep-going`.
    pub skipped: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Load the manifest, synthesize every requested type and write the output.
///
/// `invocation` is echoed in the generated file header.
pub fn run(args: &CliArgs, invocation: &str) -> Result<RunSummary> {
    let manifest = Manifest::load(&args.input)?;
    let options = args.synthesis_options(manifest.limits.unwrap_or_default());

    let mut decls = Vec::with_capacity(args.types.len());
    let mut requested: Vec<&str> = Vec::with_capacity(args.types.len());
    for type_name in &args.types {
        if requested.contains(&type_name.as_str()) {
            warn!(type_name = %type_name, "type requested more than once");
            continue;
        }
        requested.push(type_name);
        let decl = manifest.find(type_name).with_context(|| {
            format!("type {type_name} not found in {}", args.input.display())
        })?;
        decls.push(decl);
    }

    let mut generated: Vec<SynthesizedType> = Vec::with_capacity(decls.len());
    let mut skipped = Vec::new();
    let mut diagnostics = Vec::new();

    for (decl, result) in decls.iter().zip(synthesize_all(decls.iter().copied(), &options)) {
        let outcome = result.map_err(anyhow::Error::from).and_then(|synthesized| {
            if args.check {
                check_round_trip(&synthesized)?;
            }
            Ok(synthesized)
        });
        match outcome {
            Ok(synthesized) => {
                diagnostics.extend(synthesized.diagnostics.iter().cloned());
                generated.push(synthesized);
            }
            Err(err) if args.keep_going => {
                warn!(type_name = %decl.name, error = %err, "skipping type");
                diagnostics.push(Diagnostic::warning(
                    &decl.name,
                    format!("skipped: {err:#}"),
                ));
                skipped.push(decl.name.clone());
            }
            Err(err) => return Err(err.context(format!("failed to generate {}", decl.name))),
        }
    }

    if generated.is_empty() {
        bail!("no types were generated");
    }

    let tables: Vec<EnumTableIR> = generated.iter().map(|t| t.ir.clone()).collect();
    let rendered = render(&tables, args.format, invocation)?;
    let output = output_path(args);
    std::fs::write(&output, rendered)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(output = %output.display(), types = generated.len(), "wrote tables");

    Ok(RunSummary {
        output,
        generated: generated.iter().map(|t| t.type_name().to_string()).collect(),
        skipped,
        diagnostics,
    })
}

pub fn render(tables: &[EnumTableIR], format: OutputFormat, invocation: &str) -> Result<String> {
    match format {
        OutputFormat::Rust => {
            check_ident_prefixes(tables)?;
            Ok(SourcePrinter::emit_file(tables, invocation))
        }
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(tables).context("failed to serialize tables")?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Types sharing one file must not emit constants with the same prefix.
fn check_ident_prefixes(tables: &[EnumTableIR]) -> Result<()> {
    let mut seen: Vec<(String, &str)> = Vec::with_capacity(tables.len());
    for table in tables {
        let prefix = screaming_snake(&table.type_name);
        if let Some((_, other)) = seen.iter().find(|(p, _)| *p == prefix) {
            bail!(
                "{other} and {} both emit constants named {prefix}_*; generate them into separate files",
                table.type_name
            );
        }
        seen.push((prefix, &table.type_name));
    }
    Ok(())
}

/// `--output`, or `<first type, lowercased>_string.<ext>` beside the manifest.
pub fn output_path(args: &CliArgs) -> PathBuf {
    if let Some(output) = &args.output {
        return output.clone();
    }
    let first = args.types.first().map(String::as_str).unwrap_or("enum");
    let file_name = format!(
        "{}_string.{}",
        first.to_lowercase(),
        args.format.extension()
    );
    match args.input.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(file_name),
        _ => PathBuf::from(file_name),
    }
}

fn check_round_trip(synthesized: &SynthesizedType) -> Result<()> {
    let mismatches = synthesized
        .verify()
        .with_context(|| format!("inconsistent tables for {}", synthesized.type_name()))?;
    if !mismatches.is_empty() {
        bail!(
            "round-trip check failed for {}: {}",
            synthesized.type_name(),
            mismatches.join("; ")
        );
    }
    Ok(())
}
