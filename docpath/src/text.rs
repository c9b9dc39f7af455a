//! String convention helpers.
//!
//! Conversions between naming conventions (pascal, camel, snake, spinal)
//! and length-budgeted truncation. All counting is per `char`, so multibyte
//! text truncates on character boundaries.

/// Where [`truncate`] removes characters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruncateSide {
    /// Keep the tail of the string, dropping the head.
    Left,
    /// Keep the head and tail, dropping the middle.
    Middle,
    /// Keep the head of the string, dropping the tail.
    Right,
}

/// Convert a string to `PascalCase`.
///
/// Underscore-separated parts are capitalized and joined; anything already
/// capitalized stays as it is.
///
/// # Examples
///
/// ```
/// use docpath::text::pascal_case;
///
/// assert_eq!(pascal_case("foo_bar"), "FooBar");
/// assert_eq!(pascal_case("fooBar"), "FooBar");
/// ```
#[must_use]
pub fn pascal_case(text: &str) -> String {
    text.split('_').map(capitalize_first).collect()
}

/// Convert a string to `camelCase`.
///
/// # Examples
///
/// ```
/// use docpath::text::camel_case;
///
/// assert_eq!(camel_case("foo_bar"), "fooBar");
/// assert_eq!(camel_case("FooBar"), "fooBar");
/// ```
#[must_use]
pub fn camel_case(text: &str) -> String {
    lowercase_first(&pascal_case(text))
}

/// Convert a string to `snake_case`.
///
/// A separator is inserted at each lower-or-digit to upper boundary, then
/// the whole string is lowercased. Existing hyphens are left alone.
///
/// # Examples
///
/// ```
/// use docpath::text::snake_case;
///
/// assert_eq!(snake_case("FooBar"), "foo_bar");
/// assert_eq!(snake_case("fooBAR"), "foo_bar");
/// assert_eq!(snake_case("base64Value"), "base64_value");
/// ```
#[must_use]
pub fn snake_case(text: &str) -> String {
    split_boundaries(text, '_')
}

/// Convert a string to `spinal-case`.
///
/// Like [`snake_case`] with hyphens, and existing underscores become
/// hyphens too.
///
/// # Examples
///
/// ```
/// use docpath::text::spinal_case;
///
/// assert_eq!(spinal_case("FooBar"), "foo-bar");
/// assert_eq!(spinal_case("foo_bar"), "foo-bar");
/// ```
#[must_use]
pub fn spinal_case(text: &str) -> String {
    split_boundaries(text, '-').replace('_', "-")
}

/// Truncate a string to at most `max_chars` visible characters.
///
/// Strings whose trimmed length fits the budget pass through unchanged.
/// Otherwise characters are removed from the chosen side and the separator
/// is spliced in with surrounding spaces, mirroring ellipsis conventions:
///
/// - `Right`: `"beginning of the te ..."`
/// - `Left`: `"... end of the text"`
/// - `Middle`: `"beginning ... end"` (head gets the extra character for odd
///   budgets)
///
/// # Examples
///
/// ```
/// use docpath::text::{truncate, TruncateSide};
///
/// assert_eq!(truncate("short", 10, TruncateSide::Right, "..."), "short");
/// assert_eq!(
///     truncate("hello wonderful world", 5, TruncateSide::Right, "..."),
///     "hello ..."
/// );
/// assert_eq!(
///     truncate("hello wonderful world", 5, TruncateSide::Left, "..."),
///     "... world"
/// );
/// assert_eq!(
///     truncate("hello wonderful world", 6, TruncateSide::Middle, "..."),
///     "hel ... rld"
/// );
/// ```
#[must_use]
pub fn truncate(text: &str, max_chars: usize, side: TruncateSide, separator: &str) -> String {
    let trimmed_len = text.trim().chars().count();
    if trimmed_len == 0 || trimmed_len <= max_chars {
        return text.to_string();
    }

    let total = text.chars().count();
    match side {
        TruncateSide::Left => {
            let tail: String = text.chars().skip(total - max_chars).collect();
            format!("{separator} {tail}")
        }
        TruncateSide::Right => {
            let head: String = text.chars().take(max_chars).collect();
            format!("{head} {separator}")
        }
        TruncateSide::Middle => {
            let head_len = max_chars.div_ceil(2);
            let tail_len = max_chars / 2;
            let head: String = text.chars().take(head_len).collect();
            let tail: String = text.chars().skip(total - tail_len).collect();
            format!("{head} {separator} {tail}")
        }
    }
}

fn capitalize_first(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lowercase_first(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn split_boundaries(text: &str, separator: char) -> String {
    let mut result = String::with_capacity(text.len() + 4);
    let mut previous: Option<char> = None;

    for c in text.chars() {
        if c.is_ascii_uppercase()
            && previous.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            result.push(separator);
        }
        previous = Some(c);
        result.extend(c.to_lowercase());
    }

    result
}
