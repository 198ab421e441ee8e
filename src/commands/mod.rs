pub mod clear;
pub mod config;
pub mod delete;
pub mod edit;
pub mod list;
pub mod new;
pub mod report;

use anyhow::Result;
use caldesk_core::EventBook;
use chrono::NaiveDate;

use crate::config::Settings;
use crate::{parse, store};

/// Common context for commands that read or change the saved events.
pub struct BookContext<'a> {
    pub settings: &'a Settings,
    pub book: EventBook,
}

impl<'a> BookContext<'a> {
    pub fn load(settings: &'a Settings) -> Result<Self> {
        let book = store::load(&settings.store_path)?;
        Ok(Self { settings, book })
    }

    pub fn save(&self) -> Result<()> {
        store::save(&self.settings.store_path, &self.book)
    }

    /// `--date` if given, otherwise today in the configured zone.
    pub fn reference_date(&self, date: Option<&str>) -> Result<NaiveDate> {
        match date {
            Some(input) => parse::parse_date(input),
            None => Ok(parse::today(&self.settings.timezone)),
        }
    }
}
