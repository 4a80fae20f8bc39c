//! Plain-text rendering primitives.
//!
//! Shared by the Student rendering and the call-trace lines, so both
//! print courses, grades and GPA values the same way.

/// Quote a piece of text the way course names appear in listings.
///
/// Single quotes are preferred. Text holding a single quote but no double
/// quote is wrapped in double quotes instead. Either way the backslash,
/// the chosen quote character and control characters are escaped, so the
/// result always stays on one line.
#[must_use]
pub fn quote_text(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Shortest plain form of a grade: `90`, `87.5`.
#[must_use]
pub fn format_grade(grade: f64) -> String {
    grade.to_string()
}

/// GPA form: `0` when nothing is graded, otherwise always fractional (`85.0`).
///
/// Very large or very small values use a signed, two-digit exponent
/// (`1e+16`, `1.5e-05`).
#[must_use]
pub fn format_gpa(gpa: f64, graded: bool) -> String {
    if !graded {
        return String::from("0");
    }

    let repr = format!("{gpa:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

/// Render `items` as a bracketed, comma-separated list.
pub fn format_list<T, F>(items: &[T], mut render: F) -> String
where
    F: FnMut(&T) -> String,
{
    let mut out = String::from("[");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&render(item));
    }
    out.push(']');
    out
}

// =============================================================================
// TESTS
// =============================================================================
