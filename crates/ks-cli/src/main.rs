//! Console entry point for keystone.
//!
//! This binary wires the core library and the modules together and prints
//! human-readable results.
//!
//! # Usage
//!
//! ```bash
//! keystone [OPTIONS] [COMMAND]
//!
//! # Run the walkthrough (default)
//! keystone demo
//!
//! # Transform items with a given mode
//! keystone process --mode advanced hello world
//!
//! # Process items as one batch using settings from a file
//! keystone --config app.conf process --batch a b c
//!
//! # Inspect configuration
//! keystone config show --format json
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use ks_core::utils::validation;
use ks_core::{Context, Version, project_info};
use ks_modules::{ConfigManager, DataProcessor, ExampleModule, ProcessingMode, ProcessingResult};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Demonstrates the keystone core library and its modules.
#[derive(Parser)]
#[command(name = "keystone", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Command to execute (defaults to `demo`).
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file in `key=value` format.
    #[arg(short, long, global = true, env = "KEYSTONE_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output in logs and error reports (also set by `NO_COLOR`).
    #[arg(long, global = true)]
    no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Walk through core initialization, every processing mode, and statistics.
    Demo {
        /// Name given to the core entity.
        #[arg(short, long, default_value = ks_core::PROJECT_NAME)]
        name: String,
    },

    /// Transform one or more items.
    Process {
        /// Items to transform.
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Processing mode (defaults to `processing.mode` from the configuration).
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,

        /// Process all items as a single batch.
        #[arg(short, long)]
        batch: bool,

        /// Print results as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Inspect or export configuration.
    Config {
        /// Configuration action.
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Run the validation checks against each value.
    Validate {
        /// Values to check.
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Print project name and version.
    Info,
}

/// Configuration subcommands.
#[derive(Subcommand)]
enum ConfigAction {
    /// Print all configuration entries.
    Show {
        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Write the effective configuration to a file.
    Save {
        /// Destination file.
        output: Utf8PathBuf,
    },
}

/// Output format for `config show`.
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// `key = value` lines.
    Text,
    /// JSON object.
    Json,
}

/// Processing mode as accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Uppercase with `[SIMPLE]` prefix.
    Simple,
    /// Reverse and lowercase with `[ADVANCED]` prefix.
    Advanced,
    /// Trim with `[BATCH]` prefix.
    Batch,
}

impl From<ModeArg> for ProcessingMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Simple => Self::Simple,
            ModeArg::Advanced => Self::Advanced,
            ModeArg::Batch => Self::Batch,
        }
    }
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `warn` level by default so log
/// lines do not interleave with normal output.
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "warn" };
        EnvFilter::new(level)
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(!no_color)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Returns `true` if colors are off, either by `--no-color` or by a
/// `NO_COLOR` environment variable.
fn color_disabled(flag: bool) -> bool {
    flag || std::env::var_os("NO_COLOR").is_some()
}

/// Installs the `color-eyre` report and panic hooks.
///
/// With colors disabled the hooks use a blank theme, so error reports carry
/// no ANSI escapes.
fn install_error_hooks(no_color: bool) -> color_eyre::Result<()> {
    if no_color {
        color_eyre::config::HookBuilder::default()
            .theme(color_eyre::config::Theme::new())
            .install()
    } else {
        color_eyre::install()
    }
}

/// Builds a [`ConfigManager`] from defaults, overlaid by `--config` if given.
///
/// # Errors
///
/// Returns an error if the configuration file cannot be read.
fn load_config(path: Option<&Utf8PathBuf>) -> color_eyre::Result<ConfigManager> {
    let mut config = ConfigManager::new();
    if let Some(path) = path {
        config.load_from_file(path)?;
    } else {
        debug!("No configuration file given, using defaults");
    }
    Ok(config)
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Runs the end-to-end walkthrough.
fn run_demo(out: &mut impl Write, config: ConfigManager, name: &str) -> color_eyre::Result<()> {
    writeln!(out, "Welcome to {}", project_info())?;

    let mut context = Context::initialize(name)?;
    writeln!(out, "Application started successfully!")?;
    writeln!(out)?;

    writeln!(out, "Core")?;
    writeln!(out, "----")?;
    writeln!(out, "  {}", context.core().process("hello from the core")?)?;
    writeln!(out)?;

    let mut processor = DataProcessor::new(config.into_shared());
    writeln!(out, "Data Processor")?;
    writeln!(out, "--------------")?;
    for mode in ProcessingMode::ALL {
        let result = processor.process_item("  Hello World  ", mode);
        write_result(out, &format!("{mode:<8}"), &result)?;
    }
    let result = processor.process_item("", ProcessingMode::Simple);
    write_result(out, "empty", &result)?;

    let batch = ["alpha", "", "beta", "gamma"];
    let result = processor.process_batch(&batch, processor.default_mode());
    write_result(out, "batch", &result)?;
    writeln!(out)?;
    writeln!(out, "{}", processor.statistics_report())?;
    writeln!(out)?;

    let mut module = ExampleModule::new("Example");
    writeln!(out, "Example Module")?;
    writeln!(out, "--------------")?;
    writeln!(out, "  {}", module.process_data("keystone"))?;
    for line in module.statistics() {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)?;

    context.cleanup();
    writeln!(out, "Application finished successfully!")?;
    Ok(())
}

/// Transforms inputs individually or as a single batch.
fn run_process(
    out: &mut impl Write,
    config: ConfigManager,
    inputs: &[String],
    mode: Option<ModeArg>,
    batch: bool,
    json: bool,
) -> color_eyre::Result<()> {
    let mut processor = DataProcessor::new(config.into_shared());
    let mode = mode.map_or_else(|| processor.default_mode(), ProcessingMode::from);
    info!(%mode, count = inputs.len(), batch, "Processing inputs");

    let results: Vec<ProcessingResult> = if batch {
        vec![processor.process_batch(inputs, mode)]
    } else {
        inputs
            .iter()
            .map(|input| processor.process_item(input, mode))
            .collect()
    };

    if json {
        #[derive(serde::Serialize)]
        struct Report<'a> {
            mode: ProcessingMode,
            results: &'a [ProcessingResult],
            statistics: ks_modules::ProcessingStats,
        }

        let report = Report {
            mode,
            results: &results,
            statistics: processor.statistics(),
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    for result in &results {
        write_result(out, mode.as_str(), result)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", processor.statistics_report())?;
    Ok(())
}

/// Prints or exports the effective configuration.
fn run_config(
    out: &mut impl Write,
    config: &ConfigManager,
    action: &ConfigAction,
) -> color_eyre::Result<()> {
    match action {
        ConfigAction::Show {
            format: OutputFormat::Text,
        } => {
            for (key, value) in config.sorted_entries() {
                writeln!(out, "{key} = {value}")?;
            }
        }
        ConfigAction::Show {
            format: OutputFormat::Json,
        } => {
            let entries: serde_json::Map<String, serde_json::Value> = config
                .sorted_entries()
                .into_iter()
                .map(|(k, v)| (k.to_owned(), serde_json::Value::from(v)))
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
        }
        ConfigAction::Save { output } => {
            config.save_to_file(output)?;
            info!(path = %output, "Configuration written");
            writeln!(out, "Wrote {} entries to {output}", config.len())?;
        }
    }
    Ok(())
}

/// Prints a validation table for each value.
fn run_validate(out: &mut impl Write, values: &[String]) -> color_eyre::Result<()> {
    writeln!(
        out,
        "{:<32} {:<8} {:<14} {:<12}",
        "Value", "Empty?", "Alphanumeric?", "Valid Email?"
    )?;
    for value in values {
        writeln!(
            out,
            "{:<32} {:<8} {:<14} {:<12}",
            format!("{value:?}"),
            yes_no(validation::is_empty(value)),
            yes_no(validation::is_alphanumeric(value)),
            yes_no(validation::is_valid_email(value)),
        )?;
    }
    Ok(())
}

/// Prints project name and version.
fn run_info(out: &mut impl Write) -> color_eyre::Result<()> {
    writeln!(out, "{}", project_info())?;
    writeln!(out, "Core version: {}", Version::current())?;
    Ok(())
}

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

fn write_result(
    out: &mut impl Write,
    label: &str,
    result: &ProcessingResult,
) -> std::io::Result<()> {
    if result.success {
        writeln!(out, "  {label}  ok     {}", result.result)
    } else {
        writeln!(out, "  {label}  failed {}", result.error_message)
    }
}

const fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Dispatches the parsed command.
///
/// The configuration file is only read by commands that use it, so `info`
/// and `validate` keep working when `--config` points at a missing file.
fn run(out: &mut impl Write, cli: &Cli) -> color_eyre::Result<()> {
    let path = cli.config.as_ref();

    match &cli.command {
        None => run_demo(out, load_config(path)?, ks_core::PROJECT_NAME),
        Some(Commands::Demo { name }) => run_demo(out, load_config(path)?, name),
        Some(Commands::Process {
            inputs,
            mode,
            batch,
            json,
        }) => run_process(out, load_config(path)?, inputs, *mode, *batch, *json),
        Some(Commands::Config { action }) => run_config(out, &load_config(path)?, action),
        Some(Commands::Validate { values }) => run_validate(out, values),
        Some(Commands::Info) => run_info(out),
    }
}

/// Application entry point.
fn main() -> color_eyre::Result<()> {
    let cli = Cli::parse();
    let no_color = color_disabled(cli.no_color);

    install_error_hooks(no_color)?;
    init_tracing(cli.verbose, no_color);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&mut out, &cli)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> color_eyre::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_color_disabled_by_flag() {
        assert!(color_disabled(true));
    }

    #[test]
    fn test_missing_config_only_fails_commands_that_read_it() {
        let missing = "/nonexistent/keystone.conf";
        let parse = |args: &[&str]| {
            let mut argv = vec!["keystone", "--config", missing];
            argv.extend_from_slice(args);
            Cli::try_parse_from(argv).unwrap()
        };

        let output = render(|out| run(out, &parse(&["info"])));
        assert!(output.contains("keystone"));

        let output = render(|out| run(out, &parse(&["validate", "abc"])));
        assert!(!output.is_empty());

        let mut buf = Vec::new();
        assert!(run(&mut buf, &parse(&["demo"])).is_err());
        assert!(run(&mut buf, &parse(&["config", "show"])).is_err());
        assert!(run(&mut buf, &parse(&[])).is_err());
    }

    #[test]
    fn test_run_reads_config_for_process() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keystone.conf");
        std::fs::write(&path, "processing.batch_size = 1\n").unwrap();
        let path = path.to_str().unwrap();

        let cli = Cli::try_parse_from(["keystone", "--config", path, "process", "--batch", "a", "b"])
            .unwrap();
        let output = render(|out| run(out, &cli));
        assert!(output.contains("exceeds configured limit of 1"));
    }

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::try_parse_from(["keystone"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_process_args() {
        let cli = Cli::try_parse_from(["keystone", "process", "--mode", "advanced", "--batch", "a", "b"])
            .unwrap();
        let Some(Commands::Process {
            inputs,
            mode,
            batch,
            json,
        }) = cli.command
        else {
            unreachable!("expected process command");
        };
        assert_eq!(inputs, vec!["a", "b"]);
        assert!(matches!(mode, Some(ModeArg::Advanced)));
        assert!(batch);
        assert!(!json);
    }

    #[test]
    fn test_demo_output() {
        let output = render(|out| run_demo(out, ConfigManager::new(), "Demo"));
        assert!(output.starts_with("Welcome to keystone v"));
        assert!(output.contains("[Demo] HELLO FROM THE CORE"));
        assert!(output.contains("[SIMPLE]   HELLO WORLD  "));
        assert!(output.contains("[ADVANCED]   dlrow olleh  "));
        assert!(output.contains("[BATCH] Hello World"));
        assert!(output.contains("failed Input cannot be empty"));
        assert!(output.contains("[SIMPLE] ALPHA, [SIMPLE] BETA, [SIMPLE] GAMMA"));
        assert!(output.contains("Success Rate: 80%"));
        assert!(output.contains("[Example] Processed: enotsyek"));
        assert!(output.trim_end().ends_with("Application finished successfully!"));
    }

    #[test]
    fn test_demo_rejects_blank_name() {
        let mut buf = Vec::new();
        assert!(run_demo(&mut buf, ConfigManager::new(), " ").is_err());
    }

    #[test]
    fn test_process_batch_over_limit() {
        let mut config = ConfigManager::new();
        config.set_value("processing.batch_size", "1");
        let inputs = vec!["a".to_owned(), "b".to_owned()];

        let output = render(|out| run_process(out, config, &inputs, None, true, false));
        assert!(output.contains("failed Batch size exceeds configured limit of 1"));
    }

    #[test]
    fn test_process_json_output() {
        let inputs = vec!["abc".to_owned()];
        let output = render(|out| {
            run_process(out, ConfigManager::new(), &inputs, Some(ModeArg::Advanced), false, true)
        });

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["mode"], "advanced");
        assert_eq!(value["results"][0]["result"], "[ADVANCED] cba");
        assert_eq!(value["statistics"]["successful_operations"], 1);
    }

    #[test]
    fn test_process_uses_configured_mode() {
        let mut config = ConfigManager::new();
        config.set_value("processing.mode", "batch");
        let inputs = vec![" x ".to_owned()];

        let output = render(|out| run_process(out, config, &inputs, None, false, false));
        assert!(output.contains("[BATCH] x"));
    }

    #[test]
    fn test_config_show_text() {
        let mut config = ConfigManager::new();
        config.clear();
        config.set_value("b", "2");
        config.set_value("a", "1");

        let action = ConfigAction::Show {
            format: OutputFormat::Text,
        };
        let output = render(|out| run_config(out, &config, &action));
        assert_eq!(output, "a = 1\nb = 2\n");
    }

    #[test]
    fn test_config_show_json() {
        let action = ConfigAction::Show {
            format: OutputFormat::Json,
        };
        let output = render(|out| run_config(out, &ConfigManager::new(), &action));

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["processing.batch_size"], "10");
        assert_eq!(value["app.name"], "keystone");
    }

    #[test]
    fn test_validate_output() {
        let values = vec!["test@example.com".to_owned(), "abc123".to_owned()];
        let output = render(|out| run_validate(out, &values));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("\"test@example.com\""));
        assert!(lines[1].trim_end().ends_with("yes"));
        assert!(lines[2].trim_end().ends_with("no"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let path = Utf8PathBuf::from("/nonexistent/keystone.conf");
        assert!(load_config(Some(&path)).is_err());
        assert_eq!(load_config(None).unwrap().len(), 5);
    }
}
