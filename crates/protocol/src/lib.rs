pub mod codec;

use std::fmt;

use thiserror::Error;

/// Number of columns every data row carries.
pub const FIELD_COUNT: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("expected 6 fields per record, found {found}")]
    Arity { found: usize },
}

/// One data row of the feed.
///
/// Every field is kept as the text it was read as; `code`, `cases` and
/// `deaths` look numeric but are never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub date: String,
    pub region: String,
    pub subregion: String,
    pub code: String,
    pub cases: String,
    pub deaths: String,
}

impl Record {
    /// Build a record from the fields of one row, in column order.
    ///
    /// Rows that are short or long are rejected rather than padded or cut.
    pub fn from_fields<I, S>(fields: I) -> Result<Self, FormatError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        let [date, region, subregion, code, cases, deaths]: [String; FIELD_COUNT] = fields
            .try_into()
            .map_err(|rest: Vec<String>| FormatError::Arity { found: rest.len() })?;

        Ok(Self {
            date,
            region,
            subregion,
            code,
            cases,
            deaths,
        })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}, {}, {}]",
            self.date, self.region, self.subregion, self.code, self.cases, self.deaths
        )
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
