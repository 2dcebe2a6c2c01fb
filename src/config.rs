use crate::age::LeapDayPolicy;
use crate::error::parse_birth_date;
use crate::svg::ThemeChoice;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Animated terminal view
    #[default]
    Text,
    /// Pretty-printed JSON report
    Json,
    /// SVG age card(s)
    Svg,
}

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "agecalc")]
#[command(about = "Work out an exact age, a few totals and some fun facts from a birth date")]
#[command(version)]
pub struct Cli {
    /// Birth date (YYYY-MM-DD)
    pub birth: Option<String>,

    /// Reference date to measure against instead of today (YYYY-MM-DD)
    #[arg(long, value_parser = parse_reference_date)]
    pub today: Option<NaiveDate>,

    /// TOML file with default settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// SVG theme(s) to write
    #[arg(long, value_enum)]
    pub theme: Option<ThemeChoice>,

    /// Directory the SVG cards are written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// How a Feb 29 birthday is placed in non-leap years
    #[arg(long, value_enum)]
    pub leap_day: Option<LeapDayPolicy>,

    /// Print results without counter animation
    #[arg(long)]
    pub no_animate: bool,

    /// Read one birth date per line from stdin
    #[arg(short, long)]
    pub interactive: bool,

    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_reference_date(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got '{s}': {e}"))
}

/// Optional settings file. Every key may be omitted.
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub birth_date: Option<String>,
    pub leap_day: Option<LeapDayPolicy>,
    pub theme: Option<ThemeChoice>,
    pub format: Option<OutputFormat>,
    pub animate: Option<bool>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

/// Fully resolved run settings: CLI flags win over the config file, which
/// wins over built-in defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Kept raw so that a missing or malformed value is reported as a
    /// rejected input, not a startup failure.
    pub birth_input: Option<String>,
    pub reference: Option<NaiveDate>,
    pub format: OutputFormat,
    pub theme: ThemeChoice,
    pub out_dir: PathBuf,
    pub leap_day: LeapDayPolicy,
    pub animate: bool,
    pub interactive: bool,
}

impl Settings {
    pub fn resolve(cli: Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::merge(cli, file))
    }

    pub fn merge(cli: Cli, file: FileConfig) -> Self {
        Self {
            birth_input: cli.birth.or(file.birth_date),
            reference: cli.today,
            format: cli.format.or(file.format).unwrap_or_default(),
            theme: cli.theme.or(file.theme).unwrap_or_default(),
            out_dir: cli.out_dir,
            leap_day: cli.leap_day.or(file.leap_day).unwrap_or_default(),
            animate: !cli.no_animate && file.animate.unwrap_or(true),
            interactive: cli.interactive,
        }
    }

    /// Validate the birth date without computing anything.
    pub fn birth_date(&self) -> Result<NaiveDate, crate::error::AgeError> {
        parse_birth_date(self.birth_input.as_deref().unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AgeError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_cli_flags() {
        let cli = Cli::try_parse_from([
            "agecalc",
            "1990-06-20",
            "--today",
            "2024-06-15",
            "--format",
            "json",
            "--leap-day",
            "mar1",
            "--no-animate",
        ])
        .unwrap();

        assert_eq!(cli.birth.as_deref(), Some("1990-06-20"));
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2024, 6, 15));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.leap_day, Some(LeapDayPolicy::Mar1));
        assert!(cli.no_animate);
    }

    #[test]
    fn rejects_bad_reference_date() {
        assert!(Cli::try_parse_from(["agecalc", "--today", "tomorrow"]).is_err());
    }

    #[test]
    fn cli_overrides_file() {
        let file = FileConfig::parse(
            r#"
birth_date = "1985-02-03"
leap_day = "mar1"
theme = "light"
format = "svg"
animate = false
"#,
        )
        .unwrap();
        let cli = Cli {
            birth: Some("1990-06-20".to_string()),
            format: Some(OutputFormat::Json),
            ..Cli::default()
        };

        let settings = Settings::merge(cli, file);
        assert_eq!(settings.birth_input.as_deref(), Some("1990-06-20"));
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.theme, ThemeChoice::Light);
        assert_eq!(settings.leap_day, LeapDayPolicy::Mar1);
        assert!(!settings.animate);
    }

    #[test]
    fn defaults_without_file() {
        let settings = Settings::merge(Cli::default(), FileConfig::default());
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.theme, ThemeChoice::Both);
        assert_eq!(settings.leap_day, LeapDayPolicy::Feb28);
        assert!(settings.animate);
        assert_eq!(settings.birth_date(), Err(AgeError::missing_birth_date()));
    }

    #[test]
    fn loads_birth_date_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "birth_date = \"2000-02-29\"").unwrap();

        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            ..Cli::default()
        };
        let settings = Settings::resolve(cli).unwrap();
        assert_eq!(
            settings.birth_date().unwrap(),
            NaiveDate::from_ymd_opt(2000, 2, 29).unwrap()
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(FileConfig::parse("birthday = \"2000-01-01\"").is_err());
    }
}
