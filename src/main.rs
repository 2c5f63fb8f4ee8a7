//! hourcalc - Entry Point

use clap::Parser;
use hourcalc::batch;
use hourcalc::config::KeyBindings;
use hourcalc::model::AppError;
use hourcalc::view::{ColorConfig, TuiOptions};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// hourcalc - add, subtract, multiply and divide hours and minutes
#[derive(Parser, Debug)]
#[command(name = "hourcalc")]
#[command(version)]
#[command(about = "Terminal calculator for H:MM durations")]
pub struct Args {
    /// Evaluate a key script instead of starting the UI (e.g. "1:30+2:15=")
    ///
    /// Digits, `:`, `+ - * x /`, `=`, `C` (clear) and `<` (backspace).
    /// Whitespace is ignored.
    #[arg(short, long, value_name = "SCRIPT")]
    pub keys: Option<String>,

    /// Print the final state as JSON (with --keys)
    #[arg(long, requires = "keys")]
    pub json: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Hide the on-screen keypad
    #[arg(long)]
    pub no_keypad: bool,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = hourcalc::config::load_config_with_precedence(args.config.clone())
            .map_err(AppError::from)?;
        let merged = hourcalc::config::merge_config(config_file);
        let with_env = hourcalc::config::apply_env_overrides(merged);

        // Flags only override when actually passed
        let color_override = args.no_color.then_some(false);
        let keypad_override = args.no_keypad.then_some(false);

        hourcalc::config::apply_cli_overrides(
            with_env,
            color_override,
            keypad_override,
            args.log_file.clone(),
        )
    };

    hourcalc::logging::init(&config.log_file_path).map_err(AppError::from)?;

    info!(config = ?config, "Configuration loaded and resolved");

    if let Some(script) = &args.keys {
        run_batch(script, args.json)?;
        return Ok(());
    }

    let options = TuiOptions {
        key_bindings: KeyBindings::with_overrides(&config.keybindings).map_err(AppError::from)?,
        color: ColorConfig::new(config.color),
        show_keypad: config.show_keypad,
    };

    hourcalc::view::run_with_options(options).map_err(AppError::from)?;

    info!("Exited");
    Ok(())
}

/// Evaluate a key script and print the result to stdout.
///
/// Reported engine errors go to stderr; evaluation carries on past them.
fn run_batch(script: &str, json: bool) -> Result<(), AppError> {
    let outcome = batch::run_script(script)?;

    for failure in outcome.reported_errors() {
        warn!(
            index = failure.index,
            token = %failure.token,
            error = %failure.error,
            "Batch token rejected"
        );
        eprintln!(
            "hourcalc: token {} ({}): {}",
            failure.index + 1,
            failure.token,
            failure.error
        );
    }

    let output = if json {
        let mut json = batch::render_json(&outcome.calculator).map_err(std::io::Error::other)?;
        json.push('\n');
        json
    } else {
        batch::render_text(&outcome.calculator)
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
