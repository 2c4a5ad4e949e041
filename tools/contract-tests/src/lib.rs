use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Schema compilation failed: {0}")]
    SchemaError(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load a JSON schema from file
pub fn load_schema(path: &Path) -> Result<JSONSchema, ContractError> {
    let contents = fs::read_to_string(path)?;
    let schema: Value = serde_json::from_str(&contents)?;

    JSONSchema::compile(&schema)
        .map_err(|e| ContractError::SchemaError(e.to_string()))
}

/// Load a JSON example from file
pub fn load_example(path: &Path) -> Result<Value, ContractError> {
    let contents = fs::read_to_string(path)?;
    let example: Value = serde_json::from_str(&contents)?;
    Ok(example)
}

/// Validate an example against a schema
pub fn validate_example(
    schema: &JSONSchema,
    example: &Value,
    example_name: &str,
) -> Result<(), ContractError> {
    match schema.validate(example) {
        Ok(_) => Ok(()),
        Err(errors) => {
            let error_messages: Vec<String> = errors
                .map(|e| format!("  - {}", e))
                .collect();
            Err(ContractError::ValidationError(format!(
                "Example '{}' failed validation:\n{}",
                example_name,
                error_messages.join("\n")
            )))
        }
    }
}

/// The envelope schema an example file validates against, from its name.
///
/// Example fixtures are named `legacy-*.example.json` or
/// `cloud-*.example.json`; the prefix picks the envelope shape.
pub fn schema_for_example(example_filename: &str) -> Option<&'static str> {
    if example_filename.starts_with("legacy-") {
        Some("legacy-event.v1.json")
    } else if example_filename.starts_with("cloud-") {
        Some("cloud-event.v1.json")
    } else {
        None
    }
}

/// Validate every example under `contracts/events/examples/` against the
/// envelope schema its filename prefix selects.
///
/// Returns the (schema, example) pairs that were checked.
pub fn validate_event_contracts(
    contracts_dir: &Path,
) -> Result<Vec<(String, String)>, ContractError> {
    let schemas_dir = contracts_dir.join("events");
    let examples_dir = schemas_dir.join("examples");

    let mut validated = Vec::new();

    for entry in fs::read_dir(&examples_dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }

        let filename = path.file_name().unwrap().to_str().unwrap();

        let schema_filename = schema_for_example(filename).ok_or_else(|| {
            ContractError::ValidationError(format!(
                "Example '{}' matches no envelope schema (expected a legacy- or cloud- prefix)",
                filename
            ))
        })?;

        let schema = load_schema(&schemas_dir.join(schema_filename))?;
        let example = load_example(&path)?;
        validate_example(&schema, &example, filename)?;

        validated.push((schema_filename.to_string(), filename.to_string()));
    }

    Ok(validated)
}
