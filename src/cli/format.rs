//! Output formatting utilities for CLI operations

use crate::error::FerroError;
use crate::mapping::{MappingIssue, MappingSet};
use crate::translate::{AuthorResidue, Direction, TranslatedPosition};
use serde_json::json;
use std::io::{self, Write};
use std::str::FromStr;

/// Output format for CLI results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text format (default)
    #[default]
    Text,
    /// One JSON object per line
    Json,
    /// Tab-separated, one row per translated position
    Tsv,
}

impl OutputFormat {
    /// Resolve a known format name, or None if the name is not recognised.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferro_sifts::cli::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::parse_name("JSON"), Some(OutputFormat::Json));
    /// assert_eq!(OutputFormat::parse_name("yaml"), None);
    /// ```
    pub fn parse_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "text" | "txt" | "" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "tsv" | "tab" => Some(OutputFormat::Tsv),
            _ => None,
        }
    }

    /// Resolve a format name; unknown names fall back to text.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferro_sifts::cli::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_name("JSON"), OutputFormat::Json);
    /// assert_eq!(OutputFormat::from_name("tsv"), OutputFormat::Tsv);
    /// assert_eq!(OutputFormat::from_name("whatever"), OutputFormat::Text);
    /// ```
    pub fn from_name(name: &str) -> Self {
        Self::parse_name(name).unwrap_or_default()
    }
}

impl FromStr for OutputFormat {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

/// Column names written before TSV translation rows
pub const TSV_HEADER: &str = "input\tdirection\tentity\tchain\tstart\tend\tstart_author\tend_author";

/// Write the TSV header line. Other formats write nothing.
pub fn output_header<W: Write>(writer: &mut W, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Tsv => writeln!(writer, "{}", TSV_HEADER),
        OutputFormat::Text | OutputFormat::Json => Ok(()),
    }
}

/// Write the results of one translation request
///
/// # Arguments
///
/// * `writer` - The output writer (can be stdout, file, or buffer for testing)
/// * `input` - The request as the user wrote it
/// * `direction` - Direction of the translation
/// * `results` - Translated positions, possibly empty
/// * `format` - The output format
///
/// # Examples
///
/// ```
/// use ferro_sifts::cli::{output_translation, OutputFormat};
/// use ferro_sifts::{Direction, TranslatedPosition};
/// use std::io::Cursor;
///
/// let mut buffer = Cursor::new(Vec::new());
/// let results = vec![TranslatedPosition::new(7, 9, 1, "A")];
/// let format = OutputFormat::Text;
/// output_translation(&mut buffer, "12-14", Direction::UnpToStruct, &results, format).unwrap();
/// let result = String::from_utf8(buffer.into_inner()).unwrap();
/// assert!(result.contains("12-14 -> entity 1 chain A: 7-9"));
/// ```
pub fn output_translation<W: Write>(
    writer: &mut W,
    input: &str,
    direction: Direction,
    results: &[TranslatedPosition],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let value = json!({
                "input": input,
                "direction": direction,
                "results": results,
                "status": "ok",
            });
            writeln!(writer, "{}", value)
        }
        OutputFormat::Tsv => {
            for r in results {
                writeln!(
                    writer,
                    "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                    input,
                    direction,
                    r.entity,
                    r.chain,
                    r.start,
                    r.end,
                    author_cell(r.start_author.as_ref()),
                    author_cell(r.end_author.as_ref()),
                )?;
            }
            Ok(())
        }
        OutputFormat::Text => {
            if results.is_empty() {
                return writeln!(writer, "{} -> no coverage", input);
            }
            for r in results {
                write!(writer, "{} -> {}", input, r)?;
                if let (Some(s), Some(e)) = (&r.start_author, &r.end_author) {
                    write!(writer, " (author {}-{})", s, e)?;
                }
                writeln!(writer)?;
            }
            Ok(())
        }
    }
}

fn author_cell(author: Option<&AuthorResidue>) -> String {
    author.map(|a| a.to_string()).unwrap_or_default()
}

/// Write an error to the output
///
/// # Examples
///
/// ```
/// use ferro_sifts::cli::{output_error, OutputFormat};
/// use ferro_sifts::{FerroError, PositionMappingError};
/// use std::io::Cursor;
///
/// let mut buffer = Cursor::new(Vec::new());
/// let error = FerroError::from(PositionMappingError::EmptyMappingSet);
/// output_error(&mut buffer, "12-14", &error, OutputFormat::Text).unwrap();
/// let result = String::from_utf8(buffer.into_inner()).unwrap();
/// assert!(result.contains("ERROR: 12-14"));
/// ```
pub fn output_error<W: Write>(
    writer: &mut W,
    input: &str,
    error: &FerroError,
    format: OutputFormat,
) -> io::Result<()> {
    output_error_with_context(writer, input, error, format, None)
}

/// Write an error to the output with optional line number context
///
/// # Arguments
///
/// * `writer` - The output writer (can be stderr, file, or buffer for testing)
/// * `input` - The original input string that caused the error
/// * `error` - The error that occurred
/// * `format` - The output format
/// * `line_number` - Optional line number in the input file
///
/// # Examples
///
/// ```
/// use ferro_sifts::cli::{output_error_with_context, OutputFormat};
/// use ferro_sifts::FerroError;
/// use std::io::Cursor;
///
/// let mut buffer = Cursor::new(Vec::new());
/// let error = FerroError::InvalidInput { msg: "bad line".to_string() };
/// output_error_with_context(&mut buffer, "x", &error, OutputFormat::Text, Some(42)).unwrap();
/// let result = String::from_utf8(buffer.into_inner()).unwrap();
/// assert!(result.contains("line 42"));
/// ```
pub fn output_error_with_context<W: Write>(
    writer: &mut W,
    input: &str,
    error: &FerroError,
    format: OutputFormat,
    line_number: Option<usize>,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let mut value = json!({
                "input": input,
                "error": error.to_string(),
                "code": error.code().as_str(),
                "status": "error",
            });
            if let Some(line) = line_number {
                value["line"] = json!(line);
            }
            writeln!(writer, "{}", value)
        }
        OutputFormat::Text | OutputFormat::Tsv => {
            if let Some(line) = line_number {
                writeln!(
                    writer,
                    "ERROR (line {}): {} - {}",
                    line,
                    input,
                    error.detailed_message()
                )
            } else {
                writeln!(writer, "ERROR: {} - {}", input, error.detailed_message())
            }
        }
    }
}

/// List the segments of a mapping set
pub fn output_segments<W: Write>(
    writer: &mut W,
    set: &MappingSet,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let value = json!({
                "label": set.label(),
                "segments": set.segments(),
            });
            writeln!(writer, "{}", value)
        }
        OutputFormat::Tsv => {
            writeln!(
                writer,
                "entity\tchain\tstruct_asym_id\tunp_start\tunp_end\tstart\tend\tstart_author\tend_author"
            )?;
            for seg in set {
                writeln!(
                    writer,
                    "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                    seg.entity_id(),
                    seg.chain_id(),
                    seg.struct_asym_id(),
                    seg.unp_start(),
                    seg.unp_end(),
                    seg.start().residue_number(),
                    seg.end().residue_number(),
                    seg.start().author_label(),
                    seg.end().author_label(),
                )?;
            }
            Ok(())
        }
        OutputFormat::Text => {
            if let Some(label) = set.label() {
                writeln!(writer, "# {}", label)?;
            }
            for seg in set {
                writeln!(writer, "{}", seg)?;
            }
            Ok(())
        }
    }
}

/// Report consistency issues found in a mapping set
pub fn output_issues<W: Write>(
    writer: &mut W,
    issues: &[MappingIssue],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let messages: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
            let value = json!({
                "valid": issues.is_empty(),
                "issues": messages,
            });
            writeln!(writer, "{}", value)
        }
        OutputFormat::Text | OutputFormat::Tsv => {
            if issues.is_empty() {
                return writeln!(writer, "OK");
            }
            for issue in issues {
                writeln!(writer, "WARNING: {}", issue)?;
            }
            Ok(())
        }
    }
}
