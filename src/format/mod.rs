//! Message formatting module
//!
//! Renders a resolved template with caller-supplied arguments. The engine
//! treats formatting as a collaborator: a formatter that fails never blocks a
//! lookup, the unformatted value is returned instead.

pub mod plural;

pub use plural::{plural_form, primary_subtag};

use std::collections::HashMap;

use regex::Regex;

use crate::utils::errors::Result;

/// Named arguments substituted into a message template
pub type TranslationParams = HashMap<String, String>;

/// Renders a final display string from a resolved template plus arguments
pub trait Formatter: Send + Sync {
    fn format(
        &self,
        locale: &str,
        template: &str,
        params: Option<&TranslationParams>,
    ) -> Result<String>;
}

/// Default formatter: `{name}` placeholder interpolation.
///
/// Placeholders without a matching argument are left untouched so that a
/// partially-filled message still shows where a value was expected.
#[derive(Debug, Clone)]
pub struct MessageFormatter {
    placeholder: Regex,
}

impl MessageFormatter {
    pub fn new() -> Self {
        Self {
            placeholder: Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("placeholder pattern is valid"),
        }
    }
}

impl Default for MessageFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for MessageFormatter {
    fn format(
        &self,
        _locale: &str,
        template: &str,
        params: Option<&TranslationParams>,
    ) -> Result<String> {
        let Some(params) = params else {
            return Ok(template.to_string());
        };

        let rendered = self
            .placeholder
            .replace_all(template, |captures: &regex::Captures<'_>| {
                let name = &captures[1];
                match params.get(name) {
                    Some(value) => value.clone(),
                    None => captures[0].to_string(),
                }
            });

        Ok(rendered.into_owned())
    }
}
