mod age;
mod ascii;
mod config;
mod error;
mod facts;
mod logging;
mod presenter;
mod svg;
mod zodiac;

use age::{AgeEngine, AgeReport};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use config::{Cli, OutputFormat, Settings};
use error::{AgeError, parse_birth_date};
use presenter::{Event, Presenter, PresenterOptions};
use serde::Serialize;
use std::fs;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Exit status when the birth date was missing, malformed or in the future.
const REJECTED_INPUT: u8 = 2;

#[derive(Serialize)]
struct JsonOutput<'a> {
    age: String,
    report: &'a AgeReport,
    facts: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let settings = Settings::resolve(cli)?;
    tracing::debug!("settings: {:?}", settings);

    let engine = AgeEngine::new(settings.leap_day);

    if settings.interactive {
        run_interactive(engine, &settings).await?;
        return Ok(ExitCode::SUCCESS);
    }

    let reference = reference_date(&settings);
    let outcome = settings
        .birth_date()
        .and_then(|birth| engine.compute(birth, reference));

    match &outcome {
        Ok(report) => tracing::debug!(
            birth = %report.birth_date,
            %reference,
            "computed age: {}",
            report.age_string()
        ),
        Err(e) => tracing::debug!("input rejected: {e}"),
    }

    let rejected = outcome.is_err();
    match settings.format {
        OutputFormat::Text => present(outcome, &settings).await?,
        OutputFormat::Json => write_json(outcome)?,
        OutputFormat::Svg => write_svgs(outcome, &settings)?,
    }

    Ok(if rejected {
        ExitCode::from(REJECTED_INPUT)
    } else {
        ExitCode::SUCCESS
    })
}

fn reference_date(settings: &Settings) -> NaiveDate {
    settings
        .reference
        .unwrap_or_else(|| Local::now().date_naive())
}

fn options(settings: &Settings) -> PresenterOptions {
    if settings.animate {
        PresenterOptions::animated()
    } else {
        PresenterOptions::instant()
    }
}

async fn present(outcome: Result<AgeReport, AgeError>, settings: &Settings) -> Result<()> {
    let (tx, handle) = Presenter::new(std::io::stdout(), options(settings)).spawn();

    let event = match outcome {
        Ok(report) => Event::Report(report),
        Err(e) => Event::Rejected(e),
    };
    tx.send(event).await.context("Presenter stopped early")?;
    drop(tx);

    handle.await.context("Presenter task panicked")??;
    Ok(())
}

fn write_json(outcome: Result<AgeReport, AgeError>) -> Result<()> {
    match outcome {
        Ok(report) => {
            let out = JsonOutput {
                age: report.age_string(),
                report: &report,
                facts: facts::fun_facts(&report),
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Err(e) => eprintln!("error: {e}"),
    }
    Ok(())
}

fn write_svgs(outcome: Result<AgeReport, AgeError>, settings: &Settings) -> Result<()> {
    let report = match outcome {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            return Ok(());
        }
    };
    let facts = facts::fun_facts(&report);

    fs::create_dir_all(&settings.out_dir).with_context(|| {
        format!("Failed to create output directory {}", settings.out_dir.display())
    })?;

    for theme in settings.theme.themes() {
        let path = settings.out_dir.join(theme.file_name());
        let svg = svg::generate_svg(&report, &facts, *theme);
        fs::write(&path, svg).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!("wrote {}", path.display());
        println!("Generated {}", path.display());
    }

    Ok(())
}

/// One computation per line read from stdin, each against a fresh "today"
/// unless a fixed reference date was given.
async fn run_interactive(engine: AgeEngine, settings: &Settings) -> Result<()> {
    let (tx, handle) = Presenter::new(std::io::stdout(), options(settings)).spawn();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    eprintln!("Enter a birth date (YYYY-MM-DD) per line, Ctrl-D to quit.");
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let event = match parse_birth_date(&line)
            .and_then(|birth| engine.compute(birth, reference_date(settings)))
        {
            Ok(report) => Event::Report(report),
            Err(e) => Event::Rejected(e),
        };

        if tx.send(event).await.is_err() {
            tracing::warn!("presenter stopped; ending interactive session");
            break;
        }
    }
    drop(tx);

    handle.await.context("Presenter task panicked")??;
    Ok(())
}
