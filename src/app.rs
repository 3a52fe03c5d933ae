//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves configuration (defaults, environment, flags)
//! - loads the model once
//! - runs single or batch estimates and prints reports
//! - writes templates, samples and exports

use std::io::Write;
use std::path::Path;

use clap::Parser;

use crate::cli::{BatchArgs, CategoriesArgs, Command, ModelArgs, PredictArgs, STDOUT_PATH, SampleArgs, TemplateArgs};
use crate::config::AppConfig;
use crate::domain::Category;
use crate::error::AppError;
use crate::io::ingest::load_batch;

pub mod pipeline;

/// Entry point for the `salary` binary.
pub fn run() -> Result<(), AppError> {
    // `salary` and `salary --model m.json` behave like `salary tui ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Tui(args) => crate::tui::run(resolve_config(&args)),
        Command::Predict(args) => handle_predict(args),
        Command::Batch(args) => handle_batch(args),
        Command::Template(args) => handle_template(args),
        Command::Categories(args) => handle_categories(args),
        Command::Sample(args) => handle_sample(args),
    }
}

/// Environment (and `.env`) first, then flags on top.
pub fn resolve_config(args: &ModelArgs) -> AppConfig {
    AppConfig::from_env().with_overrides(args.model.clone(), args.model_url.clone(), args.currency.clone())
}

fn handle_predict(args: PredictArgs) -> Result<(), AppError> {
    let config = resolve_config(&args.model);
    let model = crate::models::load_predictor(&config)?;

    let estimate = pipeline::estimate_one(&args.record(), model.as_ref())?;

    if args.json {
        let json = serde_json::to_string_pretty(&estimate)
            .map_err(|e| AppError::new(4, format!("Failed to serialize estimate: {e}")))?;
        println!("{json}");
    } else {
        print!("{}", crate::report::format_estimate(&estimate, &config.currency));
    }
    Ok(())
}

fn handle_batch(args: BatchArgs) -> Result<(), AppError> {
    let config = resolve_config(&args.model);
    let policy = args.effective_policy();

    // Schema problems surface before the model is loaded or called.
    let input = load_batch(&args.input, policy)?;
    let model = crate::models::load_predictor(&config)?;
    let out = pipeline::estimate_batch(input, policy, model.as_ref())?;

    if is_stdout(&args.output) {
        crate::io::write_batch_csv(std::io::stdout().lock(), &out.input.headers, &out.rows, &out.predictions)
            .map_err(|e| AppError::new(4, format!("Failed to write CSV to stdout: {e}")))?;
        // Keep stdout clean for piping; the summary goes to stderr.
        eprint!(
            "{}",
            crate::report::format_batch_summary(&out.input, &out.rows, &out.predictions, &out.row_errors, 0, &config.currency)
        );
        return Ok(());
    }

    crate::io::write_batch_file(&args.output, &out.input.headers, &out.rows, &out.predictions)?;
    print!(
        "{}",
        crate::report::format_batch_summary(
            &out.input,
            &out.rows,
            &out.predictions,
            &out.row_errors,
            args.preview,
            &config.currency,
        )
    );
    println!("\nWrote {} predictions to {}", out.predictions.len(), args.output.display());
    Ok(())
}

fn handle_template(args: TemplateArgs) -> Result<(), AppError> {
    if is_stdout(&args.output) {
        return crate::io::write_template(std::io::stdout().lock())
            .map_err(|e| AppError::new(4, format!("Failed to write CSV to stdout: {e}")));
    }
    crate::io::write_records_file(&args.output, &[crate::domain::RawRecord::example()])?;
    println!("Wrote template to {}", args.output.display());
    Ok(())
}

fn handle_categories(args: CategoriesArgs) -> Result<(), AppError> {
    let categories: Vec<Category> = match args.feature {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };
    let text = crate::report::format_categories(&categories);
    std::io::stdout()
        .lock()
        .write_all(text.as_bytes())
        .map_err(|e| AppError::new(4, format!("Failed to write to stdout: {e}")))
}

fn handle_sample(args: SampleArgs) -> Result<(), AppError> {
    let records = crate::data::generate_sample(args.count, args.seed)?;
    if is_stdout(&args.output) {
        return crate::io::write_records(std::io::stdout().lock(), &records)
            .map_err(|e| AppError::new(4, format!("Failed to write CSV to stdout: {e}")));
    }
    crate::io::write_records_file(&args.output, &records)?;
    println!("Wrote {} sample employees to {}", records.len(), args.output.display());
    Ok(())
}

fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == STDOUT_PATH
}

/// Rewrite argv so `salary` defaults to `salary tui`.
///
/// Rules:
/// - `salary`                      -> `salary tui`
/// - `salary --model m.json ...`   -> `salary tui --model m.json ...`
/// - `salary --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
    }

    argv
}
