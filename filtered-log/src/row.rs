//! Rendering rows as `field=value; ` lines.
//!
//! This is the line format the redactor expects: every pair, including the
//! last, is followed by `"; "`. Values are written with `Display` and are not
//! escaped.

use std::fmt::Display;

/// Text written for a missing (`None`) column.
pub const NULL_COLUMN: &str = "None";

/// A value that can be logged as one `field=value; ` line.
///
/// Usually derived:
///
/// ```
/// use filtered_log::LogRow;
///
/// #[derive(LogRow)]
/// struct User {
///     #[log_row(pii)]
///     email: String,
///     role: String,
/// }
///
/// let user = User { email: "bob@dylan.com".into(), role: "admin".into() };
/// assert_eq!(user.to_log_line(), "email=bob@dylan.com; role=admin; ");
/// assert_eq!(User::PII_FIELDS, ["email"]);
/// ```
pub trait LogRow {
    /// Column names whose values are PII.
    const PII_FIELDS: &'static [&'static str];

    /// Column names paired with their rendered values, in declaration order.
    fn columns(&self) -> Vec<(&'static str, String)>;

    /// Renders the row in the `field=value; ` line format.
    fn to_log_line(&self) -> String {
        format_row(self.columns())
    }
}

/// Joins `(header, value)` pairs into `h1=v1; h2=v2; `.
pub fn format_row<I, K, V>(columns: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    columns
        .into_iter()
        .map(|(header, value)| format!("{header}={value}; "))
        .collect()
}

#[doc(hidden)]
pub fn render_optional<T: Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| NULL_COLUMN.to_string(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pair_is_terminated() {
        let line = format_row([("name", "Alice"), ("role", "admin")]);
        assert_eq!(line, "name=Alice; role=admin; ");
    }

    #[test]
    fn no_columns_is_an_empty_line() {
        let none: Vec<(&str, &str)> = Vec::new();
        assert_eq!(format_row(none), "");
    }

    #[test]
    fn headers_and_values_can_differ_in_type() {
        let line = format_row([("id", 7), ("age", 42)]);
        assert_eq!(line, "id=7; age=42; ");
    }

    #[test]
    fn missing_values_render_as_null_column() {
        assert_eq!(render_optional::<u32>(&None), NULL_COLUMN);
        assert_eq!(render_optional(&Some("x")), "x");
    }
}
