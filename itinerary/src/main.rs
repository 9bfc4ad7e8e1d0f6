use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use itinerary::Error;
use itinerary::input::{LoadError, ParseError};
use itinerary::planner::{MAX_GAP_HOURS, PlannerConfig};
use itinerary::render::{render_json, render_text};

#[derive(Parser)]
#[command(
    name = "itinerary",
    about = "Reconstruct the trips in a travel itinerary",
    version,
    after_help = "\
Input format:
  BASED: SVQ
  RESERVATION
  SEGMENT: Flight SVQ 2023-03-02 06:40 -> BCN 09:10
  SEGMENT: Hotel BCN 2023-01-05 -> 2023-01-10
  SEGMENT: Train SVQ 2023-02-15 09:30 -> MAD 11:00

Examples:
  itinerary input.txt
  itinerary input.txt --format json --pretty
  cat input.txt | itinerary -"
)]
struct Cli {
    #[arg(value_name = "FILE", help = "Itinerary file, or - to read stdin")]
    file: PathBuf,

    #[arg(
        long,
        value_enum,
        default_value_t = Format::Text,
        value_name = "FORMAT",
        help = "Output format"
    )]
    format: Format,

    #[arg(long, help = "Pretty-print JSON output")]
    pretty: bool,

    #[arg(
        long,
        default_value_t = 24,
        value_name = "HOURS",
        value_parser = clap::value_parser!(i64).range(0..=MAX_GAP_HOURS),
        help = "Gap below which consecutive segments stay in one trip",
        long_help = "Segments that start less than this many hours after the previous \
            segment of a trip ends are kept in that trip even when their locations \
            do not connect."
    )]
    continuity_hours: i64,

    #[arg(
        long,
        default_value_t = 24,
        value_name = "HOURS",
        value_parser = clap::value_parser!(i64).range(0..=MAX_GAP_HOURS),
        help = "Gap above which a leg's origin is reported as a stop"
    )]
    stop_gap_hours: i64,

    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Log progress to stderr (-v debug, -vv trace; RUST_LOG overrides)"
    )]
    verbose: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Format {
    Text,
    Json,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}={level}", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn error_code(err: &Error) -> i32 {
    match err {
        Error::Parse(_) => 2,
        Error::Load(_) => 3,
        Error::Render(_) => 1,
    }
}

fn error_kind(err: &Error) -> &'static str {
    match err {
        Error::Load(LoadError::Read { .. }) => "io_error",
        Error::Parse(ParseError::MissingBase | ParseError::DuplicateBase { .. }) => "base_error",
        Error::Parse(_) => "parse_error",
        Error::Render(_) => "render_error",
    }
}

fn die(err: &Error, json_mode: bool) -> ! {
    if json_mode {
        let json = serde_json::json!({
            "error": {
                "kind": error_kind(err),
                "message": err.to_string(),
            }
        });
        println!("{json}");
    } else {
        eprintln!("error: {err}");
    }
    process::exit(error_code(err));
}

fn run(cli: &Cli) -> Result<String, Error> {
    let config = PlannerConfig::new(cli.continuity_hours, cli.stop_gap_hours);
    let plan = itinerary::plan_file(&cli.file, &config)?;
    info!(trips = plan.trips.len(), "rendering");

    match cli.format {
        Format::Text => Ok(render_text(&plan)),
        Format::Json => {
            let mut out = render_json(&plan, cli.pretty)?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(output) => print!("{output}"),
        Err(err) => die(&err, cli.format == Format::Json),
    }
}
