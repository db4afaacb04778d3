//! Developer tasks (schema generation, fixture conformance, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use biogate_test_util::normalize_nondeterministic;
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or(manifest_dir)
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(biogate_types::AuthReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(biogate_settings::BiogateConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "biogate.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "biogate.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Run the biogate binary over tests/fixtures and validate reports");
    eprintln!("  explain-coverage  Validate all policies and reasons have explanations");
}

/// Token pattern for verdict reasons.
fn is_valid_token(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Report-level rules the schema cannot express.
fn report_hygiene(name: &str, report: &serde_json::Value) -> Vec<String> {
    let mut errors = Vec::new();

    if let Some(reasons) = report
        .get("verdict")
        .and_then(|v| v.get("reasons"))
        .and_then(|v| v.as_array())
    {
        for (i, reason) in reasons.iter().enumerate() {
            if let Some(s) = reason.as_str()
                && !is_valid_token(s)
            {
                errors.push(format!(
                    "{}: verdict.reasons[{}] '{}' is not a valid token",
                    name, i, s
                ));
            }
        }
    }

    let status = report
        .get("verdict")
        .and_then(|v| v.get("status"))
        .and_then(|v| v.as_str());
    let has_session = report.get("session").is_some_and(|s| !s.is_null());
    if has_session && status != Some("authenticated") {
        errors.push(format!("{}: session granted without authentication", name));
    }

    if let Some(scores) = report
        .get("result")
        .and_then(|r| r.get("scores"))
        .and_then(|s| s.as_object())
    {
        for (key, value) in scores {
            match value.as_f64() {
                Some(v) if (0.0..=1.0).contains(&v) => {}
                _ => errors.push(format!("{}: score '{}' is outside 0..=1", name, key)),
            }
        }
    }

    errors
}

fn biogate_binary() -> PathBuf {
    let bin = project_root().join("target").join("debug").join("biogate");
    if cfg!(target_os = "windows") {
        bin.with_extension("exe")
    } else {
        bin
    }
}

/// Conformance: run the built binary on every fixture, validate against the
/// generated report schema, and compare with the golden report.
fn conform() -> anyhow::Result<()> {
    let schema_value = serde_json::to_value(generate_report_schema())
        .context("Failed to convert report schema to JSON")?;
    let compiled = jsonschema::draft202012::new(&schema_value)
        .map_err(|e| anyhow::anyhow!("Failed to compile report schema: {}", e))?;
    println!("✓ biogate.report.v1 schema compiles");

    let biogate_bin = biogate_binary();
    if !biogate_bin.exists() {
        bail!(
            "biogate binary not found at {}.\n\
            Run `cargo build -p biogate-cli` first.",
            biogate_bin.display()
        );
    }

    let mut fixture_count = 0;
    let mut errors = Vec::new();

    for entry in fs::read_dir(fixtures_dir()).context("Failed to read tests/fixtures/")? {
        let fixture_dir = entry?.path();
        let attempt = fixture_dir.join("attempt.json");
        if !fixture_dir.is_dir() || !attempt.exists() {
            continue;
        }

        let name = fixture_dir
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let temp_dir = tempfile::tempdir().context("Failed to create temp dir")?;
        let report_out = temp_dir.path().join("report.json");

        let output = std::process::Command::new(&biogate_bin)
            .arg("--config")
            .arg(fixture_dir.join("biogate.toml"))
            .arg("decide")
            .arg("--attempt")
            .arg(&attempt)
            .arg("--report-out")
            .arg(&report_out)
            .output()
            .with_context(|| format!("Failed to run biogate on fixture '{}'", name))?;

        // 0/2/3 are verdicts; 1 is a tool failure.
        if output.status.code() == Some(1) || output.status.code().is_none() {
            errors.push(format!(
                "fixture '{}': biogate failed with {:?}: {}",
                name,
                output.status.code(),
                String::from_utf8_lossy(&output.stderr)
            ));
            continue;
        }

        let report_text = match fs::read_to_string(&report_out) {
            Ok(text) => text,
            Err(_) => {
                errors.push(format!("fixture '{}': no report output generated", name));
                continue;
            }
        };
        let report: serde_json::Value = serde_json::from_str(&report_text)
            .with_context(|| format!("Failed to parse report for fixture '{}'", name))?;

        for err in compiled.iter_errors(&report) {
            errors.push(format!("fixture '{}': schema validation: {}", name, err));
        }
        errors.extend(report_hygiene(&name, &report));

        let golden_path = fixture_dir.join("expected.report.json");
        if golden_path.exists() {
            let golden: serde_json::Value = serde_json::from_str(
                &fs::read_to_string(&golden_path)
                    .with_context(|| format!("Failed to read {}", golden_path.display()))?,
            )
            .with_context(|| format!("Failed to parse {}", golden_path.display()))?;

            if normalize_nondeterministic(report) != normalize_nondeterministic(golden) {
                errors.push(format!(
                    "fixture '{}': output differs from expected.report.json",
                    name
                ));
            } else {
                println!("  ✓ fixture '{}' matches golden report", name);
            }
        } else {
            println!("  ✓ fixture '{}' produces a valid report (no golden file)", name);
        }

        fixture_count += 1;
    }

    if fixture_count == 0 {
        bail!("No fixtures with attempt.json found in tests/fixtures/");
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("\n✓ All {} fixtures pass conformance checks!", fixture_count);
    Ok(())
}

/// Validate that all policies and reasons have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let policies = biogate_types::explain::all_policy_ids();
    let reasons = biogate_types::explain::all_reasons();

    let mut errors = Vec::new();
    for (kind, ids) in [("Policy", policies), ("Reason", reasons)] {
        for id in ids {
            match biogate_types::lookup_explanation(id) {
                Some(exp) => {
                    if exp.title.is_empty() {
                        errors.push(format!("{} '{}' has empty title", kind, id));
                    }
                    if exp.description.is_empty() {
                        errors.push(format!("{} '{}' has empty description", kind, id));
                    }
                    if exp.guidance.is_empty() {
                        errors.push(format!("{} '{}' has empty guidance", kind, id));
                    }
                }
                None => errors.push(format!("{} '{}' has no explanation", kind, id)),
            }
        }
    }

    if errors.is_empty() {
        println!("✓ {} policies have explanations", policies.len());
        println!("✓ {} reasons have explanations", reasons.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
