use anyhow::Result;
use caldesk_core::scope::week_bounds;
use caldesk_core::{Scope, filter_by_scope};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use super::BookContext;
use crate::config::Settings;
use crate::render::pluralize;

pub fn run(settings: &Settings, scope: Scope, date: Option<String>, yes: bool) -> Result<()> {
    let mut ctx = BookContext::load(settings)?;
    let reference = ctx.reference_date(date.as_deref())?;
    let tz = &settings.timezone;

    let affected =
        ctx.book.len() - filter_by_scope(ctx.book.events(), scope, reference, tz).len();

    if affected == 0 {
        println!("{}", "No events to delete".dimmed());
        return Ok(());
    }

    if !yes {
        println!(
            "Would delete {} {} ({})",
            affected,
            pluralize("event", affected),
            describe(scope, reference)
        );
        println!("{}", "Re-run with --yes to confirm.".dimmed());
        return Ok(());
    }

    let removed = ctx.book.delete_scope(scope, reference, tz);
    ctx.save()?;

    println!(
        "{} {} {}",
        "Deleted".red(),
        removed,
        pluralize("event", removed)
    );
    Ok(())
}

fn describe(scope: Scope, reference: NaiveDate) -> String {
    match scope {
        Scope::Day => format!("on {}", reference.format("%Y-%m-%d")),
        Scope::Week => {
            let (first, last) = week_bounds(reference);
            format!("week of {} to {}", first, last)
        }
        Scope::Month => format!("in {}", reference.format("%B %Y")),
        Scope::Year => format!("in {}", reference.format("%Y")),
        Scope::All => "all events".to_string(),
    }
}
