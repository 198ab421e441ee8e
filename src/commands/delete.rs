use anyhow::Result;
use owo_colors::OwoColorize;

use super::BookContext;
use crate::config::Settings;
use crate::render::Render;

pub fn run(settings: &Settings, id: &str) -> Result<()> {
    let mut ctx = BookContext::load(settings)?;

    let removed = ctx.book.delete(id)?;
    ctx.save()?;

    println!("{} {}", "Deleted".red(), removed.render(&settings.timezone));
    Ok(())
}
