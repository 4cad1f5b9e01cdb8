//! Layout template engine.
//!
//! Layouts use the action syntax of Go's `text/template`, restricted to what a
//! single-layout site needs:
//!
//! - `{{.Content}}` - Inserts the page content verbatim (no escaping)
//! - `{{/* note */}}` - Comment, renders nothing
//! - `{{- ` / ` -}}` - Trim all whitespace before / after the action
//!
//! Text outside actions is copied byte for byte.
//!
//! # Error Handling
//!
//! Parsing and execution fail separately. Malformed actions are parse
//! errors; a reference to a field the render context does not carry is an
//! execution error. Both are reported, never silently rendered as empty.

use crate::error::{GogError, Result};
use std::fmt;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

const LEFT_DELIM: &str = "{{";
const RIGHT_DELIM: &str = "}}";
const LEFT_COMMENT: &str = "/*";
const RIGHT_COMMENT: &str = "*/";

/// Name of the single field exposed to layouts.
pub const CONTENT_FIELD: &str = "Content";

/// Error type for template parsing and execution failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A `{{` was found without a matching `}}`.
    UnclosedAction {
        /// The position of the unmatched `{{`.
        position: usize,
    },
    /// A `/*` inside an action was not closed by `*/` followed by `}}`.
    UnclosedComment {
        /// The position of the enclosing `{{`.
        position: usize,
    },
    /// An action with nothing inside it (e.g., `{{ }}`).
    EmptyAction {
        /// The position of the empty action.
        position: usize,
    },
    /// An action that is neither a field reference nor a comment.
    UnsupportedAction {
        /// The trimmed text of the action.
        action: String,
        /// The position of the action.
        position: usize,
    },
    /// A field was referenced that the render context does not provide.
    UnknownField {
        /// The referenced field name, without the leading dot.
        name: String,
        /// The position of the action.
        position: usize,
    },
    /// Writing rendered output to the sink failed.
    Write {
        /// The underlying I/O error message.
        reason: String,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UnclosedAction { position } => {
                write!(f, "unclosed action at position {} in template", position)
            }
            TemplateError::UnclosedComment { position } => {
                write!(f, "unclosed comment at position {} in template", position)
            }
            TemplateError::EmptyAction { position } => {
                write!(f, "empty action at position {} in template", position)
            }
            TemplateError::UnsupportedAction { action, position } => {
                write!(
                    f,
                    "unsupported action '{}' at position {} in template",
                    action, position
                )
            }
            TemplateError::UnknownField { name, position } => {
                write!(
                    f,
                    "can't evaluate field '{}' at position {} in template",
                    name, position
                )
            }
            TemplateError::Write { reason } => {
                write!(f, "failed to write rendered output: {}", reason)
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// The value a layout is evaluated against: the raw bytes of one page.
///
/// Pages are not required to be UTF-8; they are inserted as read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub content: Vec<u8>,
}

impl RenderContext {
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Look up a field by the name used in `{{.Name}}`.
    pub fn field(&self, name: &str) -> Option<&[u8]> {
        match name {
            CONTENT_FIELD => Some(self.content.as_slice()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Text(String),
    Field { name: String, position: usize },
}

/// A parsed layout template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    nodes: Vec<Node>,
}

impl Template {
    /// Parse template source into text and field nodes.
    pub fn parse(source: &str) -> std::result::Result<Self, TemplateError> {
        let mut nodes = Vec::new();
        let mut text = String::new();
        let mut trim_next = false;
        let mut cursor = 0;

        while let Some(found) = source[cursor..].find(LEFT_DELIM) {
            let position = cursor + found;
            push_text(&mut text, &source[cursor..position], trim_next);

            let mut body_start = position + LEFT_DELIM.len();
            if has_left_trim_marker(&source[body_start..]) {
                text.truncate(text.trim_end_matches(is_space).len());
                body_start += 1;
            }

            let action = parse_action(source, body_start, position)?;
            // Every action ends the pending text, so a later `{{- ` only
            // trims what follows this one.
            if !text.is_empty() {
                nodes.push(Node::Text(std::mem::take(&mut text)));
            }
            if let Some(name) = action.field {
                nodes.push(Node::Field { name, position });
            }
            trim_next = action.trim_right;
            cursor = action.end;
        }

        push_text(&mut text, &source[cursor..], trim_next);
        if !text.is_empty() {
            nodes.push(Node::Text(text));
        }

        Ok(Self { nodes })
    }

    /// Evaluate the template against `context`, writing into `out`.
    ///
    /// Output produced before an execution error has already been written.
    pub fn execute<W: Write>(
        &self,
        context: &RenderContext,
        out: &mut W,
    ) -> std::result::Result<(), TemplateError> {
        for node in &self.nodes {
            let chunk = match node {
                Node::Text(text) => text.as_bytes(),
                Node::Field { name, position } => {
                    context
                        .field(name)
                        .ok_or_else(|| TemplateError::UnknownField {
                            name: name.clone(),
                            position: *position,
                        })?
                }
            };
            out.write_all(chunk)
                .map_err(|e| TemplateError::Write {
                    reason: e.to_string(),
                })?;
        }
        Ok(())
    }
}

struct Action {
    field: Option<String>,
    trim_right: bool,
    end: usize,
}

fn parse_action(
    source: &str,
    body_start: usize,
    position: usize,
) -> std::result::Result<Action, TemplateError> {
    let after = &source[body_start..];
    let inner = after.trim_start_matches(is_space);

    if let Some(comment) = inner.strip_prefix(LEFT_COMMENT) {
        let close = comment
            .find(RIGHT_COMMENT)
            .ok_or(TemplateError::UnclosedComment { position })?;
        let tail = &comment[close + RIGHT_COMMENT.len()..];
        let (trim_right, rest) = if let Some(rest) = tail.strip_prefix(RIGHT_DELIM) {
            (false, rest)
        } else if has_right_trim_marker_prefix(tail) {
            (true, &tail[2 + RIGHT_DELIM.len()..])
        } else {
            return Err(TemplateError::UnclosedComment { position });
        };
        return Ok(Action {
            field: None,
            trim_right,
            end: source.len() - rest.len(),
        });
    }

    let close = after
        .find(RIGHT_DELIM)
        .ok_or(TemplateError::UnclosedAction { position })?;
    let mut body = &after[..close];
    let trim_right = has_right_trim_marker_suffix(body);
    if trim_right {
        body = &body[..body.len() - 1];
    }
    let body = body.trim_matches(is_space);
    let end = body_start + close + RIGHT_DELIM.len();

    if body.is_empty() {
        return Err(TemplateError::EmptyAction { position });
    }

    match body.strip_prefix('.') {
        Some(name) if is_identifier(name) => Ok(Action {
            field: Some(name.to_string()),
            trim_right,
            end,
        }),
        _ => Err(TemplateError::UnsupportedAction {
            action: body.to_string(),
            position,
        }),
    }
}

fn push_text(text: &mut String, chunk: &str, trim_leading: bool) {
    if trim_leading {
        text.push_str(chunk.trim_start_matches(is_space));
    } else {
        text.push_str(chunk);
    }
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

// `{{- ` needs whitespace after the dash, otherwise `{{-3}}` would be a marker.
fn has_left_trim_marker(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next() == Some('-') && chars.next().is_some_and(is_space)
}

fn has_right_trim_marker_suffix(body: &str) -> bool {
    let mut chars = body.chars().rev();
    chars.next() == Some('-') && chars.next().is_some_and(is_space)
}

fn has_right_trim_marker_prefix(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(is_space)
        && chars.next() == Some('-')
        && chars.as_str().starts_with(RIGHT_DELIM)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Render `content` through the layout at `layout_path` into `sink`.
///
/// The layout is read and parsed on every call. Output goes through a
/// buffered writer that is flushed before returning.
pub fn render_to<W: Write>(layout_path: &Path, content: &[u8], sink: W) -> Result<()> {
    let source = fs::read_to_string(layout_path).map_err(|e| {
        GogError::io(
            format!("failed to read layout '{}'", layout_path.display()),
            e,
        )
    })?;

    let template = Template::parse(&source).map_err(|source| GogError::TemplateParseFailed {
        path: layout_path.to_path_buf(),
        source,
    })?;

    let context = RenderContext::new(content);
    let mut writer = BufWriter::new(sink);
    template
        .execute(&context, &mut writer)
        .map_err(|source| GogError::TemplateRenderFailed {
            path: layout_path.to_path_buf(),
            source,
        })?;

    writer
        .flush()
        .map_err(|e| GogError::io("failed to flush rendered output", e))
}

/// Render `content` through the layout at `layout_path` into a byte buffer.
#[cfg(test)]
pub fn render(layout_path: &Path, content: &[u8]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    render_to(layout_path, content, &mut buf)?;
    Ok(buf)
}
