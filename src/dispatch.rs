//! Splits an input line into the SQL to execute and the output format.
//!
//! A line may end in a directive such as `\json` or `\table`. The directive is
//! an exact trailing token; it may be followed by `;` separators and
//! whitespace, and it need not be separated from the SQL by a space.

use crate::output::OutputFormat;

/// The result of dispatching one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub sql: String,
    pub format: OutputFormat,
}

/// Extract the trailing directive, if any, and the SQL text to run.
///
/// Without a directive the whole trimmed line is the SQL and `default`
/// is the format. Unknown backslash words stay in the SQL text.
pub fn dispatch(line: &str, default: OutputFormat) -> Dispatch {
    let trimmed = line.trim();
    let tail = trimmed.trim_end_matches(|c: char| c == ';' || c.is_whitespace());

    for format in OutputFormat::ALL {
        if let Some(sql) = tail.strip_suffix(format.directive()) {
            return Dispatch {
                sql: sql.trim().to_string(),
                format,
            };
        }
    }

    Dispatch {
        sql: trimmed.to_string(),
        format: default,
    }
}
