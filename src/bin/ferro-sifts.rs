// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-sifts CLI
//!
//! Command-line interface for translating residue ranges between UniProt and
//! structure numbering using SIFTS alignment documents.

use clap::{Parser, Subcommand};
use ferro_sifts::cache::TranslationCache;
use ferro_sifts::cli::{
    output_error_with_context, output_header, output_issues, output_segments, output_translation,
    parse_direction, parse_range, process_input_line, OutputFormat,
};
use ferro_sifts::config::{EffectiveSettings, FerroSiftsConfig};
use ferro_sifts::{Direction, FerroError, MappingSet, SiftsDocument};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(name = "ferro-sifts")]
#[command(author, version, about = "UniProt to structure residue translation")]
#[command(
    long_about = "Translate residue ranges between UniProt and structure numbering.

Examples:
  ferro-sifts translate -m 1abc.json 12-14
  ferro-sifts translate -m 1abc.json --direction struct-to-unp 7 9
  ferro-sifts translate -m mappings.json.gz --entry 1abc --accession P12345 -i ranges.txt
  ferro-sifts segments -m 1abc.json --format tsv
  ferro-sifts validate -m 1abc.json"
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Configuration file (default: .ferro-sifts.toml, then ~/.config/ferro/sifts.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate residue ranges through a mapping set
    Translate {
        /// Range to translate (e.g. 12-14, "12 14" or 12); reads input file or stdin if omitted
        #[arg(conflicts_with = "input")]
        range: Vec<String>,

        #[command(flatten)]
        source: MappingSource,

        /// Input file (one range per line)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Translation direction (unp-to-struct or struct-to-unp)
        #[arg(short, long, default_value = "unp-to-struct")]
        direction: String,

        /// Report uncovered ranges as empty results instead of errors
        #[arg(long)]
        allow_empty: bool,

        /// Output format
        #[arg(short = 'f', long, value_parser = ["text", "json", "tsv"])]
        format: Option<String>,
    },

    /// List the segments of a mapping set
    Segments {
        #[command(flatten)]
        source: MappingSource,

        /// Output format
        #[arg(short = 'f', long, value_parser = ["text", "json", "tsv"])]
        format: Option<String>,
    },

    /// Check a mapping set for inconsistent segments
    Validate {
        #[command(flatten)]
        source: MappingSource,

        /// Output format
        #[arg(short = 'f', long, value_parser = ["text", "json"])]
        format: Option<String>,
    },

    /// Print the effective configuration as TOML
    Config,
}

/// Where the mapping set comes from.
#[derive(clap::Args)]
struct MappingSource {
    /// SIFTS JSON document (.json or .json.gz)
    #[arg(short, long)]
    mappings: PathBuf,

    /// PDB entry id (required when the document holds several entries)
    #[arg(short, long)]
    entry: Option<String>,

    /// UniProt accession (default: all accessions of the entry)
    #[arg(short, long)]
    accession: Option<String>,
}

fn init_tracing(level: &str) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter =
        EnvFilter::try_new(level).map_err(|e| format!("Invalid log level '{}': {}", level, e))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    debug!("Tracing initialized with level: {}", level);

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Translate {
            range,
            source,
            input,
            direction,
            allow_empty,
            format,
        } => {
            let settings = config.merge_with_cli(allow_empty, format.as_deref());
            run_translate(&range, &source, input.as_ref(), &direction, &settings)
        }
        Commands::Segments { source, format } => {
            let settings = config.merge_with_cli(false, format.as_deref());
            let set = load_mapping_set(&source)?;
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            output_segments(&mut handle, &set, settings.format)?;
            Ok(())
        }
        Commands::Validate { source, format } => {
            let settings = config.merge_with_cli(false, format.as_deref());
            run_validate(&source, settings.format)
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<FerroSiftsConfig, FerroError> {
    match path {
        Some(path) => {
            let config = FerroSiftsConfig::load_from_path(path)?;
            info!("Loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(FerroSiftsConfig::load().unwrap_or_default()),
    }
}

fn load_mapping_set(source: &MappingSource) -> Result<MappingSet, FerroError> {
    let doc = SiftsDocument::from_file(&source.mappings)?;
    info!(
        "Loaded {} entries from {}",
        doc.len(),
        source.mappings.display()
    );

    let entry = match source.entry.as_deref() {
        Some(entry) => entry.to_string(),
        None => doc
            .single_entry_id()
            .map(str::to_string)
            .ok_or_else(|| FerroError::InvalidInput {
                msg: format!(
                    "Document holds {} entries; choose one with --entry",
                    doc.len()
                ),
            })?,
    };

    let set = match source.accession.as_deref() {
        Some(accession) => doc.mapping_set(&entry, accession)?,
        None => doc.entry_mapping_set(&entry)?,
    };

    if set.is_empty() {
        warn!("Mapping set for {} has no segments", entry);
    }
    Ok(set)
}

fn run_translate(
    range: &[String],
    source: &MappingSource,
    input: Option<&PathBuf>,
    direction: &str,
    settings: &EffectiveSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    let direction = parse_direction(direction)?;
    let set = load_mapping_set(source)?;
    let cache = TranslationCache::new(settings.cache_capacity);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    output_header(&mut handle, settings.format)?;

    let mut failures = 0usize;

    if !range.is_empty() {
        let request = range.join(" ");
        if !translate_line(&mut handle, &request, None, direction, &set, &cache, settings)? {
            failures += 1;
        }
    } else {
        let reader: Box<dyn BufRead> = match input {
            Some(path) => Box::new(BufReader::new(std::fs::File::open(path)?)),
            None => Box::new(BufReader::new(io::stdin())),
        };

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let Some(request) = process_input_line(&line, idx == 0) else {
                continue;
            };
            if !translate_line(
                &mut handle,
                request,
                Some(idx + 1),
                direction,
                &set,
                &cache,
                settings,
            )? {
                failures += 1;
            }
        }
    }

    handle.flush()?;
    let stats = cache.stats();
    debug!(
        "Cache: {} hits, {} misses ({:.1}% hit rate)",
        stats.hits,
        stats.misses,
        stats.hit_rate()
    );

    if failures > 0 {
        return Err(format!("{} range(s) failed to translate", failures).into());
    }
    Ok(())
}

/// Translate one request and write the result; returns false on failure.
fn translate_line<W: Write>(
    writer: &mut W,
    request: &str,
    line_number: Option<usize>,
    direction: Direction,
    set: &MappingSet,
    cache: &TranslationCache,
    settings: &EffectiveSettings,
) -> io::Result<bool> {
    let outcome = parse_range(request).and_then(|(start, end)| {
        cache
            .get_or_translate_with_options(start, end, direction, set, &settings.options)
            .map_err(FerroError::from)
    });

    match outcome {
        Ok(results) => {
            output_translation(writer, request, direction, &results, settings.format)?;
            Ok(true)
        }
        Err(e) => {
            let stderr = io::stderr();
            let mut err_handle = stderr.lock();
            output_error_with_context(&mut err_handle, request, &e, settings.format, line_number)?;
            Ok(false)
        }
    }
}

fn run_validate(
    source: &MappingSource,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let set = load_mapping_set(source)?;
    let issues = set.validate();

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    output_issues(&mut handle, &issues, format)?;

    if !issues.is_empty() {
        return Err(format!("{} issue(s) found in {} segments", issues.len(), set.len()).into());
    }
    Ok(())
}
