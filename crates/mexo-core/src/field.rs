//! Field descriptor tables and the interactive collection pass.
//!
//! Configuration types stay plain serde structs. Each one publishes a static
//! table of `FieldDescriptor`s; `collect_fields` walks a table, asks a
//! `Prompter` for every field marked `prompt_on_new`, and hands the raw
//! answers back so the config type can parse and validate them.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use tracing::debug;

use crate::error::{CoreError, Result};

/// Static description of one configurable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Config key (matches the serde field name).
    pub key: &'static str,
    /// Text shown to the operator.
    pub prompt: &'static str,
    /// Value must not be echoed or logged.
    pub is_secure: bool,
    /// Value is part of the connector credentials.
    pub is_connect_key: bool,
    /// Ask for this field when creating a new config.
    pub prompt_on_new: bool,
}

impl FieldDescriptor {
    /// Plain field asked for on new configs.
    pub const fn prompted(key: &'static str, prompt: &'static str) -> Self {
        Self {
            key,
            prompt,
            is_secure: false,
            is_connect_key: false,
            prompt_on_new: true,
        }
    }

    /// Secret connector credential asked for on new configs.
    pub const fn connect_secret(key: &'static str, prompt: &'static str) -> Self {
        Self {
            key,
            prompt,
            is_secure: true,
            is_connect_key: true,
            prompt_on_new: true,
        }
    }
}

/// Source of operator answers.
pub trait Prompter {
    /// Ask for one field. `Ok(None)` means the input is exhausted.
    fn ask(&mut self, field: &FieldDescriptor) -> io::Result<Option<String>>;
}

/// Prompter over any reader/writer pair (stdin/stdout in the binary).
pub struct StdioPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdioPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl StdioPrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter bound to the process terminal.
    pub fn terminal() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for StdioPrompter<R, W> {
    fn ask(&mut self, field: &FieldDescriptor) -> io::Result<Option<String>> {
        write!(self.output, "{} ", field.prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Raw answers keyed by field key. Empty answers are not recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers(BTreeMap<&'static str, String>);

impl Answers {
    pub fn insert(&mut self, key: &'static str, value: impl Into<String>) {
        self.0.insert(key, value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse the answer for `key`, if one was given.
    pub fn parse<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.get(key)
            .map(|raw| {
                raw.parse::<T>().map_err(|e| CoreError::InvalidField {
                    field: key.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()
    }
}

/// Walk `fields` and collect answers for every `prompt_on_new` entry.
///
/// Stops early when the prompter runs out of input.
pub fn collect_fields(fields: &[FieldDescriptor], prompter: &mut dyn Prompter) -> Result<Answers> {
    let mut answers = Answers::default();

    for field in fields.iter().filter(|f| f.prompt_on_new) {
        let Some(value) = prompter.ask(field)? else {
            debug!(key = field.key, "Prompt input exhausted");
            break;
        };
        if value.is_empty() {
            debug!(key = field.key, "No answer, keeping default");
            continue;
        }
        debug!(key = field.key, secure = field.is_secure, "Field collected");
        answers.insert(field.key, value);
    }

    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const FIELDS: &[FieldDescriptor] = &[
        FieldDescriptor::prompted("trading_pair", "Enter the trading_pair:"),
        FieldDescriptor {
            key: "hidden",
            prompt: "never asked",
            is_secure: false,
            is_connect_key: false,
            prompt_on_new: false,
        },
        FieldDescriptor::connect_secret("api_key", "Enter your API key"),
        FieldDescriptor::prompted("leverage", "Enter the leverage:"),
    ];

    #[test]
    fn test_collect_skips_fields_not_prompted_on_new() {
        let mut out = Vec::new();
        let mut prompter = StdioPrompter::new(Cursor::new("CFX-USDT\nkey123\n20\n"), &mut out);
        let answers = collect_fields(FIELDS, &mut prompter).unwrap();

        assert_eq!(answers.get("trading_pair"), Some("CFX-USDT"));
        assert_eq!(answers.get("api_key"), Some("key123"));
        assert_eq!(answers.get("leverage"), Some("20"));
        assert_eq!(answers.get("hidden"), None);

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("Enter the trading_pair:"));
        assert!(!shown.contains("never asked"));
    }

    #[test]
    fn test_empty_answer_keeps_default() {
        let mut prompter = StdioPrompter::new(Cursor::new("\n\n5\n"), Vec::new());
        let answers = collect_fields(FIELDS, &mut prompter).unwrap();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.parse::<u32>("leverage").unwrap(), Some(5));
    }

    #[test]
    fn test_exhausted_input_stops_collection() {
        let mut prompter = StdioPrompter::new(Cursor::new("ETH-USDT\n"), Vec::new());
        let answers = collect_fields(FIELDS, &mut prompter).unwrap();
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn test_parse_error_names_field() {
        let mut answers = Answers::default();
        answers.insert("leverage", "twenty");
        let err = answers.parse::<u32>("leverage").unwrap_err();
        assert!(matches!(&err, CoreError::InvalidField { field, .. } if field == "leverage"));
        assert!(err.to_string().contains("leverage"));
    }
}
