//! LPO CLI
//!
//! Usage:
//!   lpo --passphrase P --snatch 110 --clean-jerk 140 --back-squat 160   # Single score
//!   lpo --interactive                                                 # Prompt loop
//!   lpo --serve                                                       # HTTP API server
//!   lpo --seal --min-factor 1.2 --max-factor 1.4 --passphrase P       # New payload

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

use lpo::core::{run_server, EngineConfig, ScoringEngine, SealedPayload};
use lpo::types::{ConstantSet, RawInputs, ScoreReport};
use lpo::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "lpo",
    version = VERSION,
    about = "LPO - weightlifting efficiency scoring",
    long_about = "Scores snatch and clean-and-jerk efficiency against the back squat\n\
                  and projects an expected back-squat range from the clean-and-jerk.\n\n\
                  The projection factors are sealed; a passphrase unlocks them.\n\n\
                  Labels:\n  \
                  Low     - below the expected band, room to grow\n  \
                  Rising  - lower part of the band\n  \
                  Ideal   - middle of the band\n  \
                  Strong  - upper part of the band\n  \
                  Limit   - at or past the top"
)]
struct Args {
    /// Snatch 1RM
    #[arg(long)]
    snatch: Option<String>,

    /// Clean-and-jerk 1RM
    #[arg(long)]
    clean_jerk: Option<String>,

    /// Back-squat 1RM
    #[arg(long)]
    back_squat: Option<String>,

    /// Bodyweight (for relative strength)
    #[arg(long)]
    bodyweight: Option<String>,

    /// Passphrase unlocking the calibration set
    #[arg(short, long)]
    passphrase: Option<String>,

    /// Interactive mode - read lifts from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (default: 127.0.0.1:3000)
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Seal a new calibration payload and print it
    #[arg(long, requires_all = ["min_factor", "max_factor", "passphrase"])]
    seal: bool,

    /// Lower projection factor (with --seal)
    #[arg(long)]
    min_factor: Option<f64>,

    /// Upper projection factor (with --seal)
    #[arg(long)]
    max_factor: Option<f64>,

    /// Read the sealed payload from a file instead of the built-in one
    #[arg(long)]
    payload_file: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(if args.serve { "info" } else { "warn" });

    if args.no_color {
        colored::control::set_override(false);
    }

    if args.seal {
        run_seal(&args);
        return;
    }

    let engine = match build_engine(&args) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Failed to load payload: {}", e);
            std::process::exit(1);
        }
    };

    if args.serve {
        run_serve(&args, engine).await;
    } else if args.interactive || args.back_squat.is_none() {
        run_interactive(&args, &engine);
    } else {
        run_single(&args, &engine);
    }
}

/// Logging to stderr, RUST_LOG overrides the default level
fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Build the engine, honouring --payload-file
fn build_engine(args: &Args) -> io::Result<ScoringEngine> {
    let mut config = EngineConfig::default();
    if let Some(ref path) = args.payload_file {
        config = config.with_payload(std::fs::read_to_string(path)?.trim());
    }
    Ok(ScoringEngine::new(config))
}

/// Print a freshly sealed payload
fn run_seal(args: &Args) {
    let (Some(min), Some(max), Some(pass)) = (args.min_factor, args.max_factor, args.passphrase.as_deref()) else {
        eprintln!("--seal needs --min-factor, --max-factor and --passphrase");
        std::process::exit(2);
    };
    let Some(constants) = ConstantSet::new(min, max) else {
        eprintln!("Factors must satisfy 0 < min < max");
        std::process::exit(2);
    };
    println!("{}", SealedPayload::new().seal(&constants.to_json(), pass));
}

/// Unlock and score once from flags
fn run_single(args: &Args, engine: &ScoringEngine) {
    let pass = args.passphrase.as_deref().unwrap_or_default();
    if !engine.unlock(pass) {
        eprintln!("{}", paint_red("Access denied", args.no_color));
        std::process::exit(1);
    }

    let raw = RawInputs {
        snatch: args.snatch.clone().unwrap_or_default().into(),
        clean_jerk: args.clean_jerk.clone().unwrap_or_default().into(),
        back_squat: args.back_squat.clone().unwrap_or_default().into(),
        bodyweight: args.bodyweight.clone().unwrap_or_default().into(),
    };

    match engine.compute(&raw) {
        Some(report) => print_report(&report, args),
        None => eprintln!("Gate locked"),
    }
}

/// Prompt for a passphrase, then score lines of lifts
fn run_interactive(args: &Args, engine: &ScoringEngine) {
    print_header(args.no_color);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if let Some(ref pass) = args.passphrase {
        engine.unlock(pass);
    }

    while !engine.is_unlocked() {
        print!("{} passphrase > ", engine.status().emoji());
        let _ = stdout.flush();

        let Some(line) = read_line(&stdin) else { return };
        if is_quit(&line) {
            return;
        }
        if !engine.unlock(&line) {
            println!("{}", paint_red("Access denied", args.no_color));
        }
    }

    println!("Unlocked. Enter: snatch clean_jerk back_squat [bodyweight]. Type 'quit' to exit.");
    println!();

    loop {
        print!("{} [{}] > ", engine.status().emoji(), engine.status());
        let _ = stdout.flush();

        let Some(line) = read_line(&stdin) else { break };
        if is_quit(&line) {
            break;
        }
        if line.is_empty() {
            continue;
        }

        match engine.compute(&parse_lift_line(&line)) {
            Some(report) => print_report(&report, args),
            None => println!("Gate locked"),
        }
    }
}

/// Run HTTP API server
async fn run_serve(args: &Args, engine: ScoringEngine) {
    if let Some(ref pass) = args.passphrase {
        engine.unlock(pass);
    }
    if let Err(e) = run_server(&args.addr, engine).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Whitespace-separated lifts; missing fields stay empty
fn parse_lift_line(line: &str) -> RawInputs {
    let mut fields = line.split_whitespace().map(String::from);
    let mut next = || fields.next().unwrap_or_default();
    let (snatch, clean_jerk, back_squat, bodyweight) = (next(), next(), next(), next());
    RawInputs::new(snatch, clean_jerk, back_squat).with_bodyweight(bodyweight)
}

fn read_line(stdin: &io::Stdin) -> Option<String> {
    let mut line = String::new();
    match stdin.lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn is_quit(line: &str) -> bool {
    line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit")
}

fn print_report(report: &ScoreReport, args: &Args) {
    if args.json {
        match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Serialization failed: {}", e),
        }
        return;
    }

    if args.no_color {
        println!("{}", report.to_parseable_string());
    } else {
        println!("{}", report.to_terminal_string());
    }
    if let Some(line) = report.relative_strength_line() {
        println!("  {}", line);
    }
    if !report.metrics.valid {
        println!("  (all three lifts must be above zero for a full reading)");
    }
}

fn print_header(no_color: bool) {
    let title = format!("LPO v{} - efficiency scoring", VERSION);
    if no_color {
        println!("========================================");
        println!("  {}", title);
        println!("========================================");
    } else {
        println!("{}", title.bold());
    }
    println!();
}

fn paint_red(text: &str, no_color: bool) -> String {
    if no_color {
        text.to_string()
    } else {
        text.red().to_string()
    }
}
