// SPDX-License-Identifier: MIT

//!
//! Month-granularity date formats (moment-style patterns such as `MMM YYYY`)
//!

use crate::{Month, Year, YearMonth};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// The pattern used when none is given
pub const DEFAULT_DATE_FORMAT: &str = "MMM YYYY";

/// Errors that can arise when using a [`DateFormat`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A `[` literal section was never closed
    #[error("Unclosed `[` in date format `{0}`")]
    UnclosedLiteral(String),

    /// The format can't be used to read dates back (needs a month and a four
    /// digit year token)
    #[error("Date format `{0}` can't be parsed (needs a month and a YYYY token)")]
    NotParseable(String),

    /// The input didn't match the format
    #[error("`{input}` does not match the date format `{pattern}`")]
    Mismatch { input: String, pattern: String },
}

/// One piece of a compiled pattern
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    /// `YYYY`
    Year,
    /// `YY`
    ShortYear,
    /// `MMMM`
    MonthName,
    /// `MMM`
    MonthAbbreviation,
    /// `MM`
    MonthPadded,
    /// `M`
    MonthNumber,
    Literal(String),
}

/// A compiled date format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pattern: String,
    tokens: Vec<Token>,
}

impl DateFormat {
    /// Compile a pattern
    pub fn new(pattern: &str) -> Result<Self, FormatError> {
        let mut tokens = Vec::new();
        let chars: Vec<char> = pattern.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            let run = chars[i..].iter().take_while(|&&other| other == c).count();
            match c {
                'Y' if run >= 4 => {
                    tokens.push(Token::Year);
                    i += 4;
                }
                'Y' if run >= 2 => {
                    tokens.push(Token::ShortYear);
                    i += 2;
                }
                'M' => {
                    let (token, width) = match run {
                        1 => (Token::MonthNumber, 1),
                        2 => (Token::MonthPadded, 2),
                        3 => (Token::MonthAbbreviation, 3),
                        _ => (Token::MonthName, 4),
                    };
                    tokens.push(token);
                    i += width;
                }
                '[' => {
                    let Some(close) = chars[i..].iter().position(|&c| c == ']') else {
                        return Err(FormatError::UnclosedLiteral(pattern.to_string()));
                    };
                    let literal: String = chars[i + 1..i + close].iter().collect();
                    push_literal(&mut tokens, &literal);
                    i += close + 1;
                }
                _ => {
                    push_literal(&mut tokens, &c.to_string());
                    i += 1;
                }
            }
        }
        Ok(Self {
            pattern: pattern.to_string(),
            tokens,
        })
    }

    /// The pattern this format was compiled from
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Format a month
    pub fn format(&self, date: &YearMonth) -> String {
        let year = date.year().value();
        let month = date.month();
        self.tokens
            .iter()
            .map(|token| match token {
                Token::Year => format!("{year:04}"),
                Token::ShortYear => format!("{:02}", year % 100),
                Token::MonthName => month.name().to_string(),
                Token::MonthAbbreviation => month.abbreviation().to_string(),
                Token::MonthPadded => format!("{:02}", month.value()),
                Token::MonthNumber => month.value().to_string(),
                Token::Literal(literal) => literal.clone(),
            })
            .collect()
    }

    /// Whether [`DateFormat::parse`] can be used with this format
    pub fn is_parseable(&self) -> bool {
        let has_year = self.tokens.contains(&Token::Year);
        let has_month = self.tokens.iter().any(|token| {
            matches!(
                token,
                Token::MonthName
                    | Token::MonthAbbreviation
                    | Token::MonthPadded
                    | Token::MonthNumber
            )
        });
        has_year && has_month
    }

    /// Read a month back from text written in this format.  Month names are
    /// matched case-insensitively and surrounding whitespace is ignored.
    pub fn parse(&self, input: &str) -> Result<YearMonth, FormatError> {
        if !self.is_parseable() {
            return Err(FormatError::NotParseable(self.pattern.clone()));
        }
        let mismatch = || FormatError::Mismatch {
            input: input.to_string(),
            pattern: self.pattern.clone(),
        };

        let mut rest = input.trim();
        let mut year: Option<Year> = None;
        let mut month: Option<Month> = None;
        for token in &self.tokens {
            match token {
                Token::Year => {
                    let (digits, tail) = split_digits(rest, 4, 4).ok_or_else(mismatch)?;
                    year = Some(Year::try_from(digits).map_err(|_| mismatch())?);
                    rest = tail;
                }
                Token::ShortYear => {
                    // Ambiguous century, only checked for shape
                    let (_, tail) = split_digits(rest, 2, 2).ok_or_else(mismatch)?;
                    rest = tail;
                }
                Token::MonthPadded | Token::MonthNumber => {
                    let min = if *token == Token::MonthPadded { 2 } else { 1 };
                    let (digits, tail) = split_digits(rest, min, 2).ok_or_else(mismatch)?;
                    month = Some(Month::try_from(digits).map_err(|_| mismatch())?);
                    rest = tail;
                }
                Token::MonthName | Token::MonthAbbreviation => {
                    let len = rest
                        .find(|c: char| !c.is_ascii_alphabetic())
                        .unwrap_or(rest.len());
                    let (word, tail) = rest.split_at(len);
                    month = Some(Month::from_name(word).ok_or_else(mismatch)?);
                    rest = tail;
                }
                Token::Literal(literal) => {
                    rest = rest.strip_prefix(literal.as_str()).ok_or_else(mismatch)?;
                }
            }
        }
        if !rest.is_empty() {
            return Err(mismatch());
        }
        match (year, month) {
            (Some(year), Some(month)) => Ok(YearMonth::new(year, month)),
            _ => Err(mismatch()),
        }
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DATE_FORMAT.to_string(),
            tokens: vec![
                Token::MonthAbbreviation,
                Token::Literal(String::from(" ")),
                Token::Year,
            ],
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl Serialize for DateFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.pattern)
    }
}

impl<'de> Deserialize<'de> for DateFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let pattern = String::deserialize(deserializer)?;
        DateFormat::new(&pattern).map_err(serde::de::Error::custom)
    }
}

/// Append literal text, merging with a preceding literal
fn push_literal(tokens: &mut Vec<Token>, text: &str) {
    if let Some(Token::Literal(previous)) = tokens.last_mut() {
        previous.push_str(text);
    } else {
        tokens.push(Token::Literal(text.to_string()));
    }
}

/// Split between `min` and `max` leading ASCII digits off `input`
fn split_digits(input: &str, min: usize, max: usize) -> Option<(i64, &str)> {
    let len = input
        .char_indices()
        .take(max)
        .take_while(|(_, c)| c.is_ascii_digit())
        .count();
    if len < min {
        return None;
    }
    let (digits, tail) = input.split_at(len);
    digits.parse().ok().map(|value| (value, tail))
}
