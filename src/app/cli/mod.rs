//! CLI Adapter.

mod logging;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::adapters::ConfigFormat;
use crate::app::api::ConfigArgParser;
use crate::app::commands::declare::DeclaredArgument;
use crate::domain::{
    AppError, DEFAULT_POSITIONAL_MARKER, DEFAULT_SECTION, DEFAULT_SEPARATOR, Diagnostic,
};

#[derive(Parser)]
#[command(name = "configargs")]
#[command(version)]
#[command(
    about = "Inspect command-line arguments declared in a configuration file",
    long_about = None
)]
struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,
    /// Hide warnings
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// Configuration file holding the declarations
    config: PathBuf,
    /// Section holding one entry per argument
    #[arg(long, default_value = DEFAULT_SECTION)]
    section: String,
    /// Key prefix marking positional arguments
    #[arg(long, default_value = DEFAULT_POSITIONAL_MARKER, allow_hyphen_values = true)]
    marker: String,
    /// Separator between options on one line
    #[arg(long, default_value_t = DEFAULT_SEPARATOR)]
    separator: char,
    /// Configuration syntax (detected from the file extension when omitted)
    #[arg(long, value_enum)]
    format: Option<ConfigFormat>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the arguments declared by a configuration file
    #[clap(visible_alias = "i")]
    Inspect {
        #[command(flatten)]
        source: SourceArgs,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        output: OutputFormat,
    },
    /// Parse a command line with the declared arguments and print the values
    #[clap(visible_alias = "p")]
    Parse {
        #[command(flatten)]
        source: SourceArgs,
        /// Program name shown in usage and error messages
        #[arg(long)]
        prog: Option<String>,
        /// Command line to parse, given after `--`
        #[arg(last = true)]
        args: Vec<String>,
    },
    /// Print the help text of the declared parser
    #[clap(visible_alias = "u")]
    Usage {
        #[command(flatten)]
        source: SourceArgs,
        /// Program name shown in the help text
        #[arg(long)]
        prog: Option<String>,
    },
}

#[derive(Serialize)]
struct Inspection<'a> {
    section: &'a str,
    arguments: &'a [DeclaredArgument],
    warnings: &'a [Diagnostic],
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let result: Result<(), AppError> = match cli.command {
        Commands::Inspect { source, output } => run_inspect(source, output),
        Commands::Parse { source, prog, args } => run_parse(source, prog, args),
        Commands::Usage { source, prog } => run_usage(source, prog),
    };

    match result {
        Ok(()) => {}
        Err(AppError::ArgumentParse(err)) => {
            let _ = err.print();
            std::process::exit(err.exit_code());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn build_parser(source: &SourceArgs, prog: Option<String>) -> Result<ConfigArgParser, AppError> {
    let prog = prog.unwrap_or_else(|| {
        source
            .config
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("configargs")
            .to_string()
    });

    let mut builder = ConfigArgParser::builder(&source.config)
        .section(source.section.clone())
        .positional_marker(source.marker.clone())
        .separator(source.separator)
        .command(clap::Command::new(prog));
    if let Some(format) = source.format {
        builder = builder.format(format);
    }
    builder.build()
}

fn run_inspect(source: SourceArgs, output: OutputFormat) -> Result<(), AppError> {
    let parser = build_parser(&source, None)?;
    let inspection = Inspection {
        section: &source.section,
        arguments: parser.arguments(),
        warnings: parser.warnings(),
    };

    let rendered = match output {
        OutputFormat::Json => serde_json::to_string_pretty(&inspection).map_err(|e| {
            AppError::Serialization { what: "declarations as JSON".into(), details: e.to_string() }
        })?,
        OutputFormat::Yaml => serde_yaml::to_string(&inspection).map_err(|e| {
            AppError::Serialization { what: "declarations as YAML".into(), details: e.to_string() }
        })?,
    };
    println!("{}", rendered.trim_end());
    Ok(())
}

fn run_parse(source: SourceArgs, prog: Option<String>, args: Vec<String>) -> Result<(), AppError> {
    let parser = build_parser(&source, prog)?;
    let program = parser.command().get_name().to_string();

    let parsed = parser.try_parse_from(std::iter::once(program).chain(args))?;
    let rendered = serde_json::to_string_pretty(&parsed).map_err(|e| AppError::Serialization {
        what: "parsed arguments".into(),
        details: e.to_string(),
    })?;
    println!("{}", rendered);
    Ok(())
}

fn run_usage(source: SourceArgs, prog: Option<String>) -> Result<(), AppError> {
    let parser = build_parser(&source, prog)?;
    let mut command = parser.into_command();
    print!("{}", command.render_help());
    Ok(())
}
