//! Locale catalog: the closed set of supported languages and their UI strings.
//!
//! Lookup is pure. Templates carry `{name}`, `{location}`, `{qualification}` and
//! `{college_name}` placeholders filled by [`TemplateVars::fill`]; headings also
//! carry `{skill}` or `{position}`.

mod catalog;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported interface languages. `En` is the default and the only locale whose
/// prompts carry no language instruction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Hi,
    Es,
    Fr,
    De,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown locale '{0}' (expected one of: en, hi, es, fr, de)")]
pub struct UnknownLocale(pub String);

impl Locale {
    pub const ALL: [Locale; 5] = [Locale::En, Locale::Hi, Locale::Es, Locale::Fr, Locale::De];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hi => "hi",
            Locale::Es => "es",
            Locale::Fr => "fr",
            Locale::De => "de",
        }
    }

    pub fn is_default(self) -> bool {
        self == Locale::En
    }

    /// Typed lookup; cannot fail because the enum is closed.
    pub fn bundle(self) -> &'static TemplateBundle {
        match self {
            Locale::En => &catalog::EN,
            Locale::Hi => &catalog::HI,
            Locale::Es => &catalog::ES,
            Locale::Fr => &catalog::FR,
            Locale::De => &catalog::DE,
        }
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "hi" => Ok(Locale::Hi),
            "es" => Ok(Locale::Es),
            "fr" => Ok(Locale::Fr),
            "de" => Ok(Locale::De),
            _ => Err(UnknownLocale(code.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Resolves a raw locale code to its bundle.
pub fn resolve(code: &str) -> Result<&'static TemplateBundle, UnknownLocale> {
    code.parse::<Locale>().map(Locale::bundle)
}

/// Labels for the candidate details form.
#[derive(Debug, Serialize)]
pub struct FormLabels {
    pub full_name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub experience: &'static str,
    pub position: &'static str,
    pub location: &'static str,
    pub qualification: &'static str,
    pub college_name: &'static str,
    pub tech_stack: &'static str,
    pub resume_upload: &'static str,
    pub submit: &'static str,
}

/// Every translated string and template for one locale.
#[derive(Debug, Serialize)]
pub struct TemplateBundle {
    pub locale: Locale,
    /// English name of the language, used in the model's language instruction.
    pub language_name: &'static str,
    pub title: &'static str,
    pub sidebar_title: &'static str,
    pub form: FormLabels,
    pub chat_heading: &'static str,
    pub chat_input_label: &'static str,
    pub greeting: &'static str,
    pub resume_extracted: &'static str,
    pub no_resume: &'static str,
    pub no_tech_stack: &'static str,
    pub no_position: &'static str,
    /// Uses `{skill}`.
    pub tech_heading: &'static str,
    pub resume_heading: &'static str,
    /// Uses `{position}`.
    pub role_heading: &'static str,
    pub deflection: &'static str,
    pub farewell: &'static str,
    pub exit_hint: &'static str,
}

/// Values substituted into the candidate placeholders.
#[derive(Debug, Clone, Copy)]
pub struct TemplateVars<'a> {
    pub name: &'a str,
    pub location: &'a str,
    pub qualification: &'a str,
    pub college_name: &'a str,
}

impl TemplateVars<'_> {
    pub fn fill(&self, template: &str) -> String {
        render(
            template,
            &[
                ("name", self.name),
                ("location", self.location),
                ("qualification", self.qualification),
                ("college_name", self.college_name),
            ],
        )
    }
}

/// Single-pass `{key}` substitution. Substituted values are never rescanned, so
/// braces typed by the candidate come through literally. Unknown keys are left
/// in place.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replacement = after.find('}').and_then(|close| {
            let key = &after[..close];
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });
        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
