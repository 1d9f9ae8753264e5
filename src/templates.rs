//! Localized text templates and positional placeholder rendering.
//!
//! The formatter only picks a template and supplies arguments. Wording,
//! word order and date/time presentation belong to the template strings,
//! which the host application injects per locale.
//!
//! # Placeholder syntax
//!
//! - `{0}`, `{1}`: the argument at that position
//! - `{1,time}`, `{1,date}`, `{1,datetime}`: an instant argument rendered as
//!   `HH:MM`, `YYYY-MM-DD` or both
//! - `{{` and `}}`: literal braces
//!
//! Anything that does not parse as a placeholder is copied through verbatim.

use std::fmt;

use chrono::NaiveDateTime;

use crate::error::{ConfigError, ConfigErrorKind};
use crate::{Error, EventType};

/// Identifies one template in a [`TemplateSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKey {
    /// Surface title; argument 0 is the secret description
    Title,
    /// Less than a minute ago; argument 0 is the verb
    Seconds,
    /// Less than an hour ago; arguments are the verb and whole minutes
    Minutes,
    /// Earlier today; arguments are the verb and the event instant
    Today,
    /// Yesterday; arguments are the verb and the event instant
    Yesterday,
    /// Before yesterday; arguments are the verb and the event instant
    Dated,
}

impl TemplateKey {
    /// All template keys.
    pub const ALL: [TemplateKey; 6] = [
        TemplateKey::Title,
        TemplateKey::Seconds,
        TemplateKey::Minutes,
        TemplateKey::Today,
        TemplateKey::Yesterday,
        TemplateKey::Dated,
    ];

    /// Returns how many positional arguments the formatter supplies.
    pub fn arity(self) -> usize {
        match self {
            TemplateKey::Title | TemplateKey::Seconds => 1,
            TemplateKey::Minutes
            | TemplateKey::Today
            | TemplateKey::Yesterday
            | TemplateKey::Dated => 2,
        }
    }

    fn slot(self) -> usize {
        match self {
            TemplateKey::Title => 0,
            TemplateKey::Seconds => 1,
            TemplateKey::Minutes => 2,
            TemplateKey::Today => 3,
            TemplateKey::Yesterday => 4,
            TemplateKey::Dated => 5,
        }
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateKey::Title => write!(f, "title"),
            TemplateKey::Seconds => write!(f, "seconds"),
            TemplateKey::Minutes => write!(f, "minutes"),
            TemplateKey::Today => write!(f, "today"),
            TemplateKey::Yesterday => write!(f, "yesterday"),
            TemplateKey::Dated => write!(f, "dated"),
        }
    }
}

/// Lookup table for verbs and templates, supplied by the host's resource layer.
pub trait TemplateSource {
    /// Returns the localized verb for an event type.
    fn verb(&self, event_type: EventType) -> &str;

    /// Returns the format string for a template key.
    fn template(&self, key: TemplateKey) -> &str;
}

/// Owned template table.
///
/// [`Templates::english`] provides the built-in English wording. Use
/// [`Templates::builder`] to override entries; the builder validates that
/// every placeholder refers to an argument its template actually receives.
///
/// # Example
///
/// ```
/// use secret_access_log::{EventType, TemplateKey, TemplateSource, Templates};
///
/// let templates = Templates::builder()
///     .verb(EventType::Viewed, "Angesehen")
///     .template(TemplateKey::Seconds, "{0} vor wenigen Sekunden")
///     .build()
///     .expect("valid templates");
///
/// assert_eq!(templates.verb(EventType::Viewed), "Angesehen");
/// assert_eq!(templates.template(TemplateKey::Seconds), "{0} vor wenigen Sekunden");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    verbs: [String; 5],
    templates: [String; 6],
}

impl Templates {
    /// Returns the built-in English table.
    pub fn english() -> Self {
        Self {
            verbs: [
                "Created".to_string(),
                "Changed".to_string(),
                "Viewed".to_string(),
                "Exported".to_string(),
                "Synced".to_string(),
            ],
            templates: [
                "Access log for {0}".to_string(),
                "{0} under a minute ago".to_string(),
                "{0} {1} min ago".to_string(),
                "{0} today at {1,time}".to_string(),
                "{0} yesterday at {1,time}".to_string(),
                "{0} on {1,date} at {1,time}".to_string(),
            ],
        }
    }

    /// Starts a builder seeded with the English table.
    pub fn builder() -> TemplatesBuilder {
        TemplatesBuilder {
            templates: Self::english(),
        }
    }
}

impl Default for Templates {
    fn default() -> Self {
        Self::english()
    }
}

impl TemplateSource for Templates {
    fn verb(&self, event_type: EventType) -> &str {
        &self.verbs[verb_slot(event_type)]
    }

    fn template(&self, key: TemplateKey) -> &str {
        &self.templates[key.slot()]
    }
}

fn verb_slot(event_type: EventType) -> usize {
    match event_type {
        EventType::Created => 0,
        EventType::Changed => 1,
        EventType::Viewed => 2,
        EventType::Exported => 3,
        EventType::Synced => 4,
    }
}

/// Builder for a validated [`Templates`] table.
#[derive(Debug, Clone)]
pub struct TemplatesBuilder {
    templates: Templates,
}

impl TemplatesBuilder {
    /// Overrides the verb for an event type.
    pub fn verb(mut self, event_type: EventType, verb: impl Into<String>) -> Self {
        self.templates.verbs[verb_slot(event_type)] = verb.into();
        self
    }

    /// Overrides the format string for a template key.
    pub fn template(mut self, key: TemplateKey, template: impl Into<String>) -> Self {
        self.templates.templates[key.slot()] = template.into();
        self
    }

    /// Validates and returns the table.
    ///
    /// # Errors
    ///
    /// - `EmptyVerb` if a verb is blank
    /// - `UnexpectedArgument` if a template references an argument position
    ///   its key never supplies (for example `{1}` in the seconds template)
    pub fn build(self) -> Result<Templates, Error> {
        for event_type in EventType::ALL {
            if self.templates.verb(event_type).trim().is_empty() {
                return Err(ConfigError::new(
                    ConfigErrorKind::EmptyVerb(event_type),
                    "verbs must contain visible text",
                )
                .into());
            }
        }

        for key in TemplateKey::ALL {
            let arity = key.arity();
            let out_of_range = parse(self.templates.template(key))
                .into_iter()
                .find_map(|segment| match segment {
                    Segment::Placeholder { index, .. } if index >= arity => Some(index),
                    _ => None,
                });

            if let Some(index) = out_of_range {
                return Err(ConfigError::new(
                    ConfigErrorKind::UnexpectedArgument { key, index },
                    format!("this template receives {} argument(s)", arity),
                )
                .into());
            }
        }

        Ok(self.templates)
    }
}

/// A positional argument for [`render`].
#[derive(Debug, Clone, Copy)]
pub(crate) enum Arg<'a> {
    Text(&'a str),
    Count(i64),
    /// An instant with its wall-clock reading, if representable.
    Instant {
        millis: i64,
        local: Option<NaiveDateTime>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Plain,
    Time,
    Date,
    DateTime,
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'t> {
    Literal(String),
    Placeholder {
        index: usize,
        style: Style,
        raw: &'t str,
    },
}

fn parse(template: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = template;

    while let Some(c) = rest.chars().next() {
        match c {
            '{' if rest.starts_with("{{") => {
                literal.push('{');
                rest = &rest[2..];
            }
            '}' if rest.starts_with("}}") => {
                literal.push('}');
                rest = &rest[2..];
            }
            '{' => match rest.find('}') {
                Some(end) => {
                    let raw = &rest[..=end];
                    match parse_placeholder(&rest[1..end]) {
                        Some((index, style)) => {
                            if !literal.is_empty() {
                                segments.push(Segment::Literal(std::mem::take(&mut literal)));
                            }
                            segments.push(Segment::Placeholder { index, style, raw });
                        }
                        None => literal.push_str(raw),
                    }
                    rest = &rest[end + 1..];
                }
                None => {
                    literal.push_str(rest);
                    rest = "";
                }
            },
            _ => {
                literal.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}

fn parse_placeholder(inner: &str) -> Option<(usize, Style)> {
    let (index, style) = match inner.split_once(',') {
        Some((index, style)) => (index, style.trim()),
        None => (inner, ""),
    };

    let index = index.trim();
    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index = index.parse().ok()?;

    let style = match style {
        "" => Style::Plain,
        "time" => Style::Time,
        "date" => Style::Date,
        "datetime" => Style::DateTime,
        _ => return None,
    };
    Some((index, style))
}

/// Substitutes `args` into `template`. Never fails: placeholders without a
/// matching argument are copied through verbatim.
pub(crate) fn render(template: &str, args: &[Arg<'_>]) -> String {
    let mut out = String::with_capacity(template.len() + 16);

    for segment in parse(template) {
        match segment {
            Segment::Literal(text) => out.push_str(&text),
            Segment::Placeholder { index, style, raw } => match args.get(index) {
                Some(arg) => write_arg(&mut out, *arg, style),
                None => out.push_str(raw),
            },
        }
    }
    out
}

fn write_arg(out: &mut String, arg: Arg<'_>, style: Style) {
    use std::fmt::Write;

    // Writing to a String cannot fail.
    let _ = match arg {
        Arg::Text(text) => write!(out, "{}", text),
        Arg::Count(count) => write!(out, "{}", count),
        Arg::Instant { millis, local: None } => write!(out, "{}", millis),
        Arg::Instant {
            local: Some(local), ..
        } => match style {
            Style::Time => write!(out, "{}", local.format("%H:%M")),
            Style::Date => write!(out, "{}", local.format("%Y-%m-%d")),
            Style::Plain | Style::DateTime => write!(out, "{}", local.format("%Y-%m-%d %H:%M")),
        },
    };
}
