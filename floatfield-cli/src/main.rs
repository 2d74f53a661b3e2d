use std::fmt::Write as FmtWrite;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Report, Result, WrapErr, eyre};
use serde_json::Value;
use tracing::Level;

use floatfield::{
    DocumentFormat, EditorOptions, FieldDefinition, FieldEditor, FieldReport,
    FloatFieldValidator, OutputDestination, OutputOptions, editor_options_from_value, emit,
    field_definition_from_value, parse_document_str,
};

#[derive(Debug, Parser)]
#[command(
    name = "floatfield",
    version,
    about = "Validate float inputs against a field definition"
)]
struct Cli {
    /// Field definition spec: file path, inline payload, or "-" for stdin
    #[arg(short = 'd', long = "definition", value_name = "SPEC")]
    definition: String,

    /// Editor options spec: file path, inline payload, or "-" for stdin
    #[arg(long = "options", value_name = "SPEC")]
    options: Option<String>,

    /// Only validate when the field loses focus, not on every change
    #[arg(long = "blur-only")]
    blur_only: bool,

    /// Output destination ("-" writes to stdout); repeat for several. Defaults to stdout.
    #[arg(short = 'o', long = "output", value_name = "DEST", action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Report format; inferred from output files otherwise
    #[arg(long = "format", value_name = "FORMAT")]
    format: Option<DocumentFormat>,

    /// Emit compact JSON/TOML rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Overwrite output files even if they already exist
    #[arg(short = 'f', long = "force", short_alias = 'y', alias = "yes")]
    force: bool,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Raw inputs to replay, typed then blurred one at a time
    #[arg(
        value_name = "VALUE",
        required = true,
        allow_hyphen_values = true,
        allow_negative_numbers = true
    )]
    values: Vec<String>,
}

#[derive(Debug)]
enum InputSource {
    File(PathBuf),
    Stdin,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut diagnostics = DiagnosticCollector::default();

    if cli.definition == "-" && cli.options.as_deref() == Some("-") {
        diagnostics.push_input(
            "definition/options",
            "cannot read definition and options from stdin simultaneously",
        );
    }

    let definition_hint = format_hint(Some(&cli.definition));
    let definition = load_definition(&cli.definition, definition_hint, &mut diagnostics);
    let options = load_options(&cli, &mut diagnostics);
    let (output_options, output_paths) =
        build_output_options(&cli, definition_hint, &mut diagnostics);
    ensure_output_paths_available(&output_paths, cli.force, &mut diagnostics);

    diagnostics.into_result()?;

    let (Some(definition), Some(options), Some(output_options)) =
        (definition, options, output_options)
    else {
        unreachable!("diagnostics reported every missing input");
    };

    let validator = FloatFieldValidator::new();
    if !validator.handles(&definition) {
        return Err(eyre!(
            "field '{}' has type '{}', expected '{}'",
            definition.display_label(),
            definition.field_type_identifier,
            validator.field_type_identifier()
        ));
    }

    let values = cli.values.iter().map(String::as_str);
    let report = FieldReport::build(&definition, &options, values);
    emit(&report, &output_options).map_err(Report::msg)?;

    let invalid = report.invalid_count();
    if invalid > 0 {
        return Err(eyre!(
            "{invalid} of {} value(s) failed validation",
            report.results.len()
        ));
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();
}

fn format_hint(spec: Option<&str>) -> Option<DocumentFormat> {
    spec.filter(|path| *path != "-")
        .and_then(|path| DocumentFormat::from_path(Path::new(path)))
}

fn load_definition(
    spec: &str,
    hint: Option<DocumentFormat>,
    diagnostics: &mut DiagnosticCollector,
) -> Option<FieldDefinition> {
    let loaded = load_value(spec, hint.unwrap_or_default(), "definition").and_then(|value| {
        field_definition_from_value(&value).map_err(|err| eyre!("{err:#}"))
    });
    match loaded {
        Ok(definition) => Some(definition),
        Err(err) => {
            diagnostics.push_input("definition", err.to_string());
            None
        }
    }
}

fn load_options(cli: &Cli, diagnostics: &mut DiagnosticCollector) -> Option<EditorOptions> {
    let base = match cli.options.as_deref() {
        None => EditorOptions::default(),
        Some(spec) => {
            let hint = format_hint(Some(spec)).unwrap_or_default();
            let loaded = load_value(spec, hint, "options").and_then(|value| {
                editor_options_from_value(value).map_err(|err| eyre!("{err:#}"))
            });
            match loaded {
                Ok(options) => options,
                Err(err) => {
                    diagnostics.push_input("options", err.to_string());
                    return None;
                }
            }
        }
    };
    if cli.blur_only {
        Some(base.with_validate_on_change(false).with_validate_on_blur(true))
    } else {
        Some(base)
    }
}

fn load_value(spec: &str, format: DocumentFormat, label: &str) -> Result<Value> {
    if spec == "-" {
        let contents = read_from_source(&InputSource::Stdin)?;
        return parse_contents(&contents, format, label);
    }

    let path = PathBuf::from(spec);
    match read_from_source(&InputSource::File(path.clone())) {
        Ok(contents) => parse_contents(&contents, format, label),
        Err(err) => {
            if is_not_found(&err) {
                let inline_label = format!("inline {label}");
                return parse_contents(spec, format, &inline_label);
            }
            Err(err.wrap_err(format!("failed to load {label} from {}", path.display())))
        }
    }
}

fn read_from_source(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Stdin => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .wrap_err("failed to read from stdin")?;
            Ok(buffer)
        }
        InputSource::File(path) => fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read file {}", path.display())),
    }
}

fn is_not_found(err: &Report) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|io_err| io_err.kind() == io::ErrorKind::NotFound)
}

fn parse_contents(contents: &str, format: DocumentFormat, label: &str) -> Result<Value> {
    match parse_document_str(contents, format) {
        Ok(value) => Ok(value),
        Err(primary) => {
            for candidate in DocumentFormat::available_formats() {
                if candidate == format {
                    continue;
                }
                if let Ok(value) = parse_document_str(contents, candidate) {
                    return Ok(value);
                }
            }
            Err(Report::msg(format!(
                "failed to parse {label}: tried {} (first error: {primary})",
                format_list()
            )))
        }
    }
}

fn format_list() -> String {
    let items: Vec<String> = DocumentFormat::available_formats()
        .into_iter()
        .map(|fmt| fmt.to_string())
        .collect();
    items.join(", ")
}

#[derive(Default)]
struct DiagnosticCollector {
    messages: Vec<String>,
}

impl DiagnosticCollector {
    fn push_input(&mut self, label: &str, message: impl Into<String>) {
        self.messages
            .push(format!("input ({label}): {}", message.into()));
    }

    fn push_output(&mut self, message: impl Into<String>) {
        self.messages.push(format!("output: {}", message.into()));
    }

    fn len(&self) -> usize {
        self.messages.len()
    }

    fn into_result(self) -> Result<()> {
        if self.messages.is_empty() {
            return Ok(());
        }
        let mut body = String::from("encountered input/output issues:\n");
        for (idx, msg) in self.messages.iter().enumerate() {
            let _ = writeln!(body, "  {}. {}", idx + 1, msg);
        }
        Err(eyre!(body))
    }
}

fn build_output_options(
    cli: &Cli,
    definition_hint: Option<DocumentFormat>,
    diagnostics: &mut DiagnosticCollector,
) -> (Option<OutputOptions>, Vec<PathBuf>) {
    let mut destinations = Vec::new();

    for raw in &cli.outputs {
        if raw.trim().is_empty() {
            diagnostics.push_output("output destination cannot be empty");
            continue;
        }
        if raw == "-" {
            destinations.push(OutputDestination::Stdout);
        } else {
            destinations.push(OutputDestination::file(raw));
        }
    }
    if destinations.is_empty() && cli.outputs.is_empty() {
        destinations.push(OutputDestination::Stdout);
    }

    let file_paths: Vec<PathBuf> = destinations
        .iter()
        .filter_map(|dest| match dest {
            OutputDestination::File(path) => Some(path.clone()),
            OutputDestination::Stdout => None,
        })
        .collect();

    let start = diagnostics.len();
    let format = match cli.format {
        Some(format) => format,
        None if file_paths.is_empty() => definition_hint.unwrap_or_default(),
        None => infer_format_from_files(&file_paths, diagnostics).unwrap_or_default(),
    };

    if diagnostics.len() > start || destinations.is_empty() {
        return (None, file_paths);
    }

    (
        Some(
            OutputOptions::new(format)
                .with_pretty(!cli.no_pretty)
                .with_destinations(destinations),
        ),
        file_paths,
    )
}

fn infer_format_from_files(
    file_paths: &[PathBuf],
    diagnostics: &mut DiagnosticCollector,
) -> Option<DocumentFormat> {
    let mut detected: Option<DocumentFormat> = None;
    for path in file_paths {
        match DocumentFormat::from_path(path) {
            Some(format) => {
                if let Some(existing) = detected {
                    if existing != format {
                        diagnostics.push_output(format!(
                            "output file {} uses {format} but other destinations use {existing}; align extensions",
                            path.display()
                        ));
                    }
                } else {
                    detected = Some(format);
                }
            }
            None => diagnostics.push_output(format!(
                "cannot infer format from output file {}; use one of {} or pass --format",
                path.display(),
                format_list()
            )),
        }
    }
    detected
}

fn ensure_output_paths_available(
    paths: &[PathBuf],
    force: bool,
    diagnostics: &mut DiagnosticCollector,
) {
    if force {
        return;
    }
    for path in paths {
        if path.exists() {
            diagnostics.push_output(format!(
                "file {} already exists (pass --force to overwrite)",
                path.display()
            ));
        }
    }
}
