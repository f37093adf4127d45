//! Placeholder substitution templates.
//!
//! A template is HTML text with `{{ field }}` placeholders. Field names are
//! lowercase ASCII identifiers. Rendering looks every placeholder up in a
//! [`Context`]; a field the context lacks is an error, so a typo in a
//! template never ships as an empty spot on the page.

use crate::utils::html;
use std::collections::BTreeMap;
use thiserror::Error;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Template parse and render errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("`{template}`: unclosed `{{{{` at byte {offset}")]
    Unclosed { template: String, offset: usize },

    #[error("`{template}`: invalid field name `{field}`")]
    InvalidField { template: String, field: String },

    #[error("`{template}`: missing field `{field}`")]
    MissingField { template: String, field: String },
}

/// Parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(String),
}

/// A parsed template, ready to render any number of times.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    segments: Vec<Segment>,
}

/// Value bound to a field.
#[derive(Debug, Clone)]
pub enum Value {
    /// Plain text, escaped on output
    Text(String),
    /// Markup produced by the renderer itself, inserted verbatim
    Html(String),
}

/// Field bindings for one render.
#[derive(Debug, Clone, Default)]
pub struct Context {
    fields: BTreeMap<&'static str, Value>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a text value (escaped when rendered).
    pub fn text(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.fields.insert(field, Value::Text(value.into()));
        self
    }

    /// Bind a markup fragment (inserted as is).
    pub fn html(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.fields.insert(field, Value::Html(value.into()));
        self
    }

    fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

impl Template {
    /// Parse `source`; `name` identifies the template in errors.
    pub fn parse(name: &str, source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut consumed = 0;

        while let Some(start) = rest.find(OPEN) {
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_owned()));
            }
            let after_open = &rest[start + OPEN.len()..];
            let Some(end) = after_open.find(CLOSE) else {
                return Err(TemplateError::Unclosed {
                    template: name.to_owned(),
                    offset: consumed + start,
                });
            };

            let field = after_open[..end].trim();
            if !is_field_name(field) {
                return Err(TemplateError::InvalidField {
                    template: name.to_owned(),
                    field: field.to_owned(),
                });
            }
            segments.push(Segment::Field(field.to_owned()));

            let advance = start + OPEN.len() + end + CLOSE.len();
            consumed += advance;
            rest = &rest[advance..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_owned()));
        }

        Ok(Self {
            name: name.to_owned(),
            segments,
        })
    }

    /// Field names in order of appearance (repeats included).
    #[cfg(test)]
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field(field) => Some(field.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Substitute every placeholder from `context`.
    pub fn render(&self, context: &Context) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(self.len_hint());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(field) => match context.get(field) {
                    Some(Value::Text(text)) => out.push_str(&html::escape(text)),
                    Some(Value::Html(markup)) => out.push_str(markup),
                    None => {
                        return Err(TemplateError::MissingField {
                            template: self.name.clone(),
                            field: field.clone(),
                        });
                    }
                },
            }
        }
        Ok(out)
    }

    fn len_hint(&self) -> usize {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.len(),
                Segment::Field(_) => 16,
            })
            .sum()
    }
}

fn is_field_name(field: &str) -> bool {
    let mut chars = field.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase() || c == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
