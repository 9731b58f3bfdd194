//! Separator-delimited `field=value` redaction.
//!
//! Redaction is a pure string transformation. For each sensitive field name,
//! every `name=<value><separator>` run is rewritten to
//! `name=<redaction><separator>`, where `<value>` is the shortest run of
//! characters (not crossing a line break) that reaches the next separator.
//!
//! Two consequences of that rule are kept on purpose for compatibility with
//! existing log consumers:
//! - names match as substrings, so `name` also rewrites `username=...;`;
//! - values are not unescaped, so a value containing the separator is cut at
//!   its first separator and only the part before it is masked.

use std::borrow::Cow;

use regex::{NoExpand, Regex};

use crate::error::Result;

/// Token substituted for every sensitive value.
pub const REDACTION: &str = "***";

/// Delimiter between `field=value` pairs.
pub const SEPARATOR: char = ';';

/// Redacts `message` in one call.
///
/// Patterns are compiled on every call; use [`Redactor`] when the same field
/// list is applied repeatedly. An empty `fields` slice returns `message`
/// unchanged.
///
/// Field names are matched literally. If a pattern cannot be compiled (only
/// possible for names large enough to exceed the regex size limit) the
/// function returns `redaction` alone instead of the unfiltered message.
///
/// ```
/// use filtered_log::redact;
///
/// let line = "name=Alice; email=alice@example.com; password=hunter2; role=admin;";
/// assert_eq!(
///     redact(&["password", "email"], "***", line, ';'),
///     "name=Alice; email=***; password=***; role=admin;"
/// );
/// ```
pub fn redact<S: AsRef<str>>(
    fields: &[S],
    redaction: &str,
    message: &str,
    separator: char,
) -> String {
    match Redactor::new(fields, redaction, separator) {
        Ok(redactor) => redactor.redact(message).into_owned(),
        Err(_) => redaction.to_string(),
    }
}

/// A field list compiled into substitution rules.
///
/// Rules run in the order the fields were given, each one on the output of
/// the previous. A `Redactor` holds no mutable state and can be shared across
/// threads.
#[derive(Clone, Debug)]
pub struct Redactor {
    rules: Vec<FieldRule>,
    redaction: String,
    separator: char,
}

#[derive(Clone, Debug)]
struct FieldRule {
    pattern: Regex,
    replacement: String,
}

impl FieldRule {
    fn new(field: &str, redaction: &str, separator: char) -> Result<Self> {
        let pattern = Regex::new(&format!(
            "{}=(.*?){}",
            regex::escape(field),
            regex::escape(separator.encode_utf8(&mut [0; 4]))
        ))?;
        Ok(Self {
            pattern,
            replacement: format!("{field}={redaction}{separator}"),
        })
    }
}

impl Redactor {
    /// Compiles one rule per field name.
    pub fn new<I, S>(fields: I, redaction: &str, separator: char) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules = fields
            .into_iter()
            .map(|field| FieldRule::new(field.as_ref(), redaction, separator))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            rules,
            redaction: redaction.to_string(),
            separator,
        })
    }

    /// Applies every rule to `message`.
    ///
    /// Borrows `message` when no rule matched.
    pub fn redact<'a>(&self, message: &'a str) -> Cow<'a, str> {
        let mut output = Cow::Borrowed(message);
        for rule in &self.rules {
            let replaced = match rule
                .pattern
                .replace_all(&output, NoExpand(rule.replacement.as_str()))
            {
                Cow::Borrowed(_) => continue,
                Cow::Owned(replaced) => replaced,
            };
            output = Cow::Owned(replaced);
        }
        output
    }

    /// The token written in place of sensitive values.
    pub fn redaction(&self) -> &str {
        &self.redaction
    }

    /// The pair delimiter the rules were compiled for.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Returns `true` if there are no rules, so every message passes through.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
