use std::path::Path;

use anyhow::{Context, Result};
use caldesk_core::report::{Report, ReportRange};
use chrono::Utc;
use chrono_tz::Tz;
use owo_colors::OwoColorize;

use super::BookContext;
use crate::config::Settings;
use crate::parse;
use crate::render::{Render, format_datetime, pluralize};

pub fn run(settings: &Settings, from: &str, to: &str, output: Option<&Path>) -> Result<()> {
    let ctx = BookContext::load(settings)?;
    let tz = &settings.timezone;

    let from = parse::start_of_day(parse::parse_date(from)?, tz)?;
    let to = parse::end_of_day(parse::parse_date(to)?, tz)?;
    let range = ReportRange::new(from, to)?;

    let report = Report::build(ctx.book.events(), range, Utc::now());

    match output {
        Some(path) => {
            std::fs::write(path, to_csv(&report, tz))
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!(
                "{} {} {} to {}",
                "Wrote".green(),
                report.len(),
                pluralize("event", report.len()),
                path.display()
            );
        }
        None => println!("{}", report.render(tz)),
    }

    Ok(())
}

fn to_csv(report: &Report, tz: &Tz) -> String {
    let mut out = String::from("title,description,start,end\n");
    for row in &report.rows {
        let fields = [
            csv_field(&row.title),
            csv_field(&row.description),
            csv_field(&format_datetime(row.start, tz)),
            csv_field(&format_datetime(row.end, tz)),
        ];
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}

/// Quote a field when it holds a separator, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
