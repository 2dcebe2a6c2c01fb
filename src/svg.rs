use crate::age::AgeReport;
use crate::ascii::ASCII;
use crate::facts::group_thousands;
use clap::ValueEnum;
use serde::Deserialize;

const START_Y: i32 = 30;
const LINE_HEIGHT: i32 = 20;
const LEFT_PADDING: f32 = 15.0;
const GAP_BETWEEN_COLUMNS: f32 = 10.0;
const RIGHT_PADDING: f32 = 30.0;
const CHAR_WIDTH: f32 = 9.6;
const MIN_RIGHT_COL_CHARS: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Which card variants to write out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    Dark,
    Light,
    #[default]
    Both,
}

impl ThemeChoice {
    pub fn themes(self) -> &'static [Theme] {
        match self {
            ThemeChoice::Dark => &[Theme::Dark],
            ThemeChoice::Light => &[Theme::Light],
            ThemeChoice::Both => &[Theme::Dark, Theme::Light],
        }
    }
}

pub struct ThemeColors {
    pub bg: &'static str,
    pub text: &'static str,
    pub key: &'static str,
    pub value: &'static str,
    pub cc: &'static str,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors {
                bg: "#161b22",
                text: "#c9d1d9",
                key: "#ffa657",
                value: "#a5d6ff",
                cc: "#616e7f",
            },
            Theme::Light => ThemeColors {
                bg: "#ffffff",
                text: "#24292f",
                key: "#d73a49",
                value: "#0366d6",
                cc: "#6a737d",
            },
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Theme::Dark => "age_dark.svg",
            Theme::Light => "age_light.svg",
        }
    }
}

// Utilities for building SVG content

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn build_stat_row(key: &str, value: &str, align_width: usize) -> (String, String, String) {
    let key_part = format!("{key}: ");
    let base_len = key_part.chars().count() + value.chars().count();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => ".".repeat(n),
    };

    (key_part, dots, value.to_string())
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(base.chars().count()) + 2;
    format!("{base}{}", "-".repeat(dash_count))
}

fn build_ascii_tspans() -> (String, usize) {
    let mut out = String::new();
    let mut max_width = 0;

    for (i, line) in ASCII.lines().enumerate() {
        let y = START_Y + (i as i32) * LINE_HEIGHT;
        max_width = max_width.max(line.chars().count());
        out.push_str(&format!(
            "<tspan x=\"{LEFT_PADDING}\" y=\"{y}\">{}</tspan>\n",
            escape_xml(line)
        ));
    }

    (out, max_width)
}

enum Line {
    Header(String),
    Blank,
    Stat { k: String, d: String, v: String },
    Fact(String),
}

// Builds the right column content and returns (tspans, width, height)

fn build_right_column(
    report: &AgeReport,
    facts: &[String],
    ascii_width_px: f32,
    ascii_height_px: f32,
) -> (String, f32, f32) {
    let rows: Vec<(&str, String)> = vec![
        ("Age", report.age_string()),
        ("Born", report.birth_date.format("%Y-%m-%d").to_string()),
        ("Zodiac", report.zodiac_sign.to_string()),
        ("Total days", group_thousands(report.total_days)),
        ("Total hours", group_thousands(report.total_hours)),
        ("Total minutes", group_thousands(report.total_minutes)),
        (
            "Next birthday",
            report.next_anniversary.format("%Y-%m-%d").to_string(),
        ),
        (
            "Days until birthday",
            report.days_until_anniversary.to_string(),
        ),
    ];

    let align_width = rows
        .iter()
        .map(|(k, v)| k.chars().count() + 2 + v.chars().count())
        .chain(facts.iter().map(|f| f.chars().count() + 2))
        .max()
        .unwrap_or(0)
        .max(MIN_RIGHT_COL_CHARS);

    let mut lines = vec![Line::Header(build_header_line("age@today", align_width))];
    for (key, value) in &rows {
        let (k, d, v) = build_stat_row(key, value, align_width);
        lines.push(Line::Stat { k, d, v });
    }

    if !facts.is_empty() {
        lines.push(Line::Blank);
        lines.push(Line::Header(build_header_line("- Fun Facts", align_width)));
        lines.extend(facts.iter().cloned().map(Line::Fact));
    }

    // Render
    let right_height_px = lines.len() as f32 * LINE_HEIGHT as f32 + START_Y as f32;
    let right_x = ascii_width_px + GAP_BETWEEN_COLUMNS;

    let mut right_tspans = String::new();
    for (i, line) in lines.iter().enumerate() {
        let y = START_Y + (i as i32) * LINE_HEIGHT;

        match line {
            Line::Blank => {}
            Line::Header(text) => {
                right_tspans.push_str(&format!(
                    r#"<tspan x="{right_x}" y="{y}">{}</tspan>
"#,
                    escape_xml(text)
                ));
            }
            Line::Stat { k, d, v } => {
                right_tspans.push_str(&format!(
                    r#"<tspan x="{right_x}" y="{y}" class="cc">. </tspan>
<tspan class="key">{}</tspan><tspan class="cc">{}</tspan><tspan class="value">{}</tspan>
"#,
                    escape_xml(k),
                    escape_xml(d),
                    escape_xml(v)
                ));
            }
            Line::Fact(text) => {
                right_tspans.push_str(&format!(
                    r#"<tspan x="{right_x}" y="{y}" class="cc">* </tspan>
<tspan class="value">{}</tspan>
"#,
                    escape_xml(text)
                ));
            }
        }
    }

    let content_width = right_x + (align_width as f32) * CHAR_WIDTH + RIGHT_PADDING;
    let content_height = ascii_height_px.max(right_height_px) + 30.0;

    (right_tspans, content_width, content_height)
}

/// Main SVG generation function
pub fn generate_svg(report: &AgeReport, facts: &[String], theme: Theme) -> String {
    let colors = theme.colors();

    let (ascii_tspans, ascii_chars_wide) = build_ascii_tspans();
    let ascii_lines = ASCII.lines().count();
    let ascii_width_px = ascii_chars_wide as f32 * CHAR_WIDTH + LEFT_PADDING;
    let ascii_height_px = ascii_lines as f32 * LINE_HEIGHT as f32 + START_Y as f32;

    let (right_tspans, w, h) =
        build_right_column(report, facts, ascii_width_px, ascii_height_px);

    format!(
        r#"<?xml version='1.0' encoding='UTF-8'?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{w}px" height="{h}px"
     font-family="ConsolasFallback,Consolas,monospace"
     font-size="16px">

<style>
.key      {{ fill: {key}; }}
.value    {{ fill: {value}; }}
.cc       {{ fill: {cc}; }}
</style>

<rect width="{w}px" height="{h}px" fill="{bg}" rx="15"/>

<!-- LEFT ASCII -->
<text fill="{text}" xml:space="preserve">
{ascii}
</text>

<!-- RIGHT COLUMN -->
<text fill="{text}">
{right}
</text>

</svg>
"#,
        w = w,
        h = h,
        bg = colors.bg,
        text = colors.text,
        key = colors.key,
        value = colors.value,
        cc = colors.cc,
        ascii = ascii_tspans,
        right = right_tspans
    )
}
