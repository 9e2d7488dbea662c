use std::io::Write;

use anyhow::{Context, Result, bail};
use kennel_validator::foundation::{Validatable, ValidationError};
use kennel_validator::model::PetRecord;
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

/// A document holds a single record or an array of them.
///
/// Records and owners must be JSON objects; serde would otherwise read a
/// positional array such as `["id", "name", 3]` as a record.
#[derive(Debug)]
pub enum Document {
    Many(Vec<PetRecord>),
    One(PetRecord),
}

impl Document {
    pub fn parse(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input).context("input is not valid JSON")?;
        let document = match value {
            Value::Array(items) => Self::Many(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| {
                        record_from_value(item).with_context(|| format!("record {index}"))
                    })
                    .collect::<Result<_>>()?,
            ),
            value => Self::One(record_from_value(value)?),
        };
        Ok(document)
    }

    pub fn into_records(self) -> Vec<PetRecord> {
        match self {
            Document::Many(records) => records,
            Document::One(record) => vec![record],
        }
    }
}

fn record_from_value(value: Value) -> Result<PetRecord> {
    let Value::Object(fields) = &value else {
        bail!("expected a pet record object, found {}", json_type(&value));
    };
    match fields.get("owner") {
        None | Some(Value::Null | Value::Object(_)) => {}
        Some(other) => bail!("expected an owner object, found {}", json_type(other)),
    }
    serde_json::from_value(value).context("input is not a pet record or an array of pet records")
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Outcome of validating one record.
#[derive(Debug, Serialize)]
pub struct RecordReport {
    pub index: usize,
    pub id: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_code: Option<&'static str>,
}

impl RecordReport {
    pub fn new(index: usize, record: &PetRecord) -> Self {
        let result = record.validate();
        if let Err(err) = &result {
            tracing::info!(index, pet.id = %record.id, code = err.code(), "record is invalid");
        }
        Self::from_result(index, record, result)
    }

    fn from_result(index: usize, record: &PetRecord, result: Result<(), ValidationError>) -> Self {
        let id = record.id.to_string();
        match result {
            Ok(()) => Self {
                index,
                id,
                valid: true,
                code: None,
                error: None,
                root_code: None,
            },
            Err(err) => Self {
                index,
                id,
                valid: false,
                code: Some(err.code()),
                root_code: Some(err.root_cause().code()),
                error: Some(err.to_string()),
            },
        }
    }
}

/// Writes reports in the requested format.
pub fn write_reports(
    out: &mut impl Write,
    reports: &[RecordReport],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for report in reports {
                match &report.error {
                    None => writeln!(out, "record {} ({}): valid", report.index, report.id)?,
                    Some(error) => writeln!(
                        out,
                        "record {} ({}): invalid: {error}",
                        report.index, report.id
                    )?,
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, reports)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
