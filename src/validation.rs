//! Field rules for user and film payloads.

use crate::error::{Error, Result};
use crate::model::{FilmData, UserData};
use chrono::{Local, NaiveDate};

pub const MAX_DESCRIPTION_LEN: usize = 200;

/// The date of the first public film screening; nothing may be released earlier.
pub fn earliest_release_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1895, 12, 28).unwrap_or(NaiveDate::MIN)
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl UserData {
    /// Checks every field and fills a blank name with the login.
    pub fn validate(mut self, today: NaiveDate) -> Result<Self> {
        if self.email.trim().is_empty() {
            return Err(Error::invalid("email", "must not be blank"));
        }
        if !self.email.contains('@') {
            return Err(Error::invalid("email", "must be an email address"));
        }
        if self.login.trim().is_empty() {
            return Err(Error::invalid("login", "must not be blank"));
        }
        if self.login.chars().any(char::is_whitespace) {
            return Err(Error::invalid("login", "must not contain whitespace"));
        }
        if self.birthday > today {
            return Err(Error::invalid("birthday", "must not be in the future"));
        }
        if self.name.as_deref().map_or(true, |name| name.trim().is_empty()) {
            self.name = Some(self.login.clone());
        }
        Ok(self)
    }
}

impl FilmData {
    pub fn validate(self) -> Result<Self> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid("name", "must not be blank"));
        }
        if let Some(description) = &self.description {
            if description.chars().count() > MAX_DESCRIPTION_LEN {
                return Err(Error::invalid(
                    "description",
                    format!("must be at most {} characters", MAX_DESCRIPTION_LEN),
                ));
            }
        }
        if self.release_date < earliest_release_date() {
            return Err(Error::invalid(
                "releaseDate",
                format!("must not be before {}", earliest_release_date()),
            ));
        }
        if self.duration <= 0 {
            return Err(Error::invalid("duration", "must be positive"));
        }
        Ok(self)
    }
}
