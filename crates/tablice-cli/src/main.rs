mod logging;
mod settings;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_json::json;
use tablice_core::RegionRegistry;
use tablice_generate::checks::is_valid_plate;
use tablice_generate::generators::vehicle::LICENSE_PLATE_ID;
use tablice_generate::{GenerationError, GeneratorRegistry};
use thiserror::Error;

use logging::init_logging;
use settings::{LogFormat, Settings, load_settings};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(name = "tablice", version, about = "Polish license plate generator")]
struct Cli {
    /// Settings file (defaults to ./tablice.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log format on stderr.
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,
    /// Append JSON logs to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    /// Enable debug logging.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate plates.
    Generate(GenerateArgs),
    /// List voivodeships, or the regions of one voivodeship.
    List(ListArgs),
    /// Check plates against the national grammar.
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Voivodeship or designation group (repeatable).
    #[arg(long = "voivodeship", value_name = "NAME")]
    voivodeships: Vec<String>,
    /// County or designation (repeatable).
    #[arg(long = "county", value_name = "NAME")]
    counties: Vec<String>,
    /// Number of plates.
    #[arg(long)]
    count: Option<usize>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Print a JSON array instead of one plate per line.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Show regions and codes of this voivodeship.
    #[arg(long, value_name = "NAME")]
    voivodeship: Option<String>,
}

#[derive(Args, Debug)]
struct CheckArgs {
    #[arg(value_name = "PLATE", required = true)]
    plates: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(event = "command_failed", error = %err);
            let _ = writeln!(io::stderr(), "error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let settings = load_settings(cli.config.as_deref())?;
    let log_format = cli.log_format.unwrap_or(settings.log_format);
    init_logging(log_format, cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Command::Generate(args) => run_generate(args, settings),
        Command::List(args) => run_list(args),
        Command::Check(args) => run_check(args),
    }
}

fn run_generate(args: GenerateArgs, settings: Settings) -> Result<ExitCode, CliError> {
    let count = args.count.unwrap_or(settings.count);
    if count == 0 {
        return Err(CliError::InvalidConfig("count must be at least 1".to_string()));
    }
    let voivodeships = if args.voivodeships.is_empty() {
        settings.voivodeships
    } else {
        args.voivodeships
    };
    let counties = if args.counties.is_empty() {
        settings.counties
    } else {
        args.counties
    };
    let seed = args.seed.or(settings.seed);

    let params = json!({
        "voivodeships": voivodeships,
        "counties": counties,
    });
    tracing::info!(event = "generate_started", count, seed = ?seed, params = %params);

    let mut rng: Box<dyn RngCore> = match seed {
        Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    };

    let registry = GeneratorRegistry::new();
    let plates = (0..count)
        .map(|_| registry.generate(LICENSE_PLATE_ID, Some(&params), rng.as_mut()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut stdout = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &plates)?;
        writeln!(stdout)?;
    } else {
        for plate in &plates {
            writeln!(stdout, "{plate}")?;
        }
    }

    tracing::info!(event = "generate_finished", count = plates.len());
    Ok(ExitCode::SUCCESS)
}

fn run_list(args: ListArgs) -> Result<ExitCode, CliError> {
    let registry = RegionRegistry::polish();
    let mut stdout = io::stdout().lock();

    match args.voivodeship {
        None => {
            for voivodeship in registry.voivodeships() {
                writeln!(stdout, "{}\t{}", voivodeship.letter, voivodeship.name)?;
            }
        }
        Some(name) => match registry.voivodeship(&name) {
            Some(voivodeship) => {
                for region in voivodeship.regions {
                    writeln!(
                        stdout,
                        "{}\t{}\t{}",
                        region.name,
                        region.codes.join(","),
                        region.suffix
                    )?;
                }
            }
            None => tracing::warn!(event = "voivodeship_not_found", name = %name),
        },
    }

    Ok(ExitCode::SUCCESS)
}

fn run_check(args: CheckArgs) -> Result<ExitCode, CliError> {
    let mut stdout = io::stdout().lock();
    let mut all_valid = true;
    for plate in &args.plates {
        let valid = is_valid_plate(plate);
        all_valid &= valid;
        writeln!(stdout, "{plate}\t{}", if valid { "valid" } else { "invalid" })?;
    }
    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
