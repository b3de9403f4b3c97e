//! Run juery searches against JSON input

use log::debug;

use super::CliError;
use crate::{
    LocationRecord, Pattern, Value, juery, juery_one, keys_with,
    output::{JsonPrinter, record_to_json},
    traverse, values_with,
};

/// Which search to run
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Command {
    /// Pattern query; `first` stops at the first match
    Query { tokens: Vec<String>, first: bool },
    /// Keys containing any keyword
    Keys(Vec<String>),
    /// String/number values containing any keyword
    Values(Vec<String>),
    /// Every location
    #[default]
    Paths,
}

/// Options for a CLI run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// The search to perform
    pub command: Command,
    /// JSON input string
    pub input: Option<String>,
    /// Pretty-print the output
    pub pretty: bool,
    /// Print only matched values instead of full records
    pub values_only: bool,
}

/// Rendered result of a run, one entry per output line
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutput {
    /// One rendered match per entry, in traversal order
    Records(Vec<String>),
    /// `--first`: the first match, or `None` when nothing matched
    First(Option<String>),
}

/// Parse a JSON document for searching
pub fn parse_document(json: &str) -> Result<Value, CliError> {
    let parsed: serde_json::Value = serde_json::from_str(json)?;
    Ok(Value::from(parsed))
}

fn render_record(record: &LocationRecord<'_>, options: &RunOptions) -> String {
    if options.values_only {
        JsonPrinter::new(options.pretty).print(record.value)
    } else {
        record_to_json(record, options.pretty)
    }
}

/// Execute a juery CLI run
pub fn execute(options: &RunOptions) -> Result<RunOutput, CliError> {
    if let Command::Query { tokens, .. } = &options.command
        && tokens.is_empty()
    {
        return Err(CliError::EmptyPattern);
    }

    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;
    let document = parse_document(json_str)?;
    debug!("parsed {} document ({} bytes)", document.type_name(), json_str.len());

    let render = |record| render_record(&record, options);

    let output = match &options.command {
        Command::Query { tokens, first: true } => {
            let pattern = Pattern::new(tokens);
            RunOutput::First(juery_one(Some(&document), &pattern).map(render))
        }
        Command::Query { tokens, first: false } => {
            let pattern = Pattern::new(tokens);
            RunOutput::Records(juery(Some(&document), &pattern).map(render).collect())
        }
        Command::Keys(keywords) => {
            RunOutput::Records(keys_with(Some(&document), keywords).map(render).collect())
        }
        Command::Values(keywords) => {
            RunOutput::Records(values_with(Some(&document), keywords).map(render).collect())
        }
        Command::Paths => RunOutput::Records(traverse(Some(&document)).map(render).collect()),
    };

    Ok(output)
}
