use std::fmt::Display;

use crate::position::Position;

/// Fully rendered diagnostic, ready to be shown to the user.
#[derive(Debug, PartialEq)]
pub struct CodeErr(String);

impl Display for CodeErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shared rendering for every error that points into the source. The
/// `Display` impl of the implementor gives the details of the error.
pub trait ReportCodeErr: Display {
    fn error_name(&self) -> &'static str;

    // Half open range of the source the error points at
    fn span(&self) -> (&Position, &Position);

    fn describe(&self) -> String {
        let (start, end) = self.span();

        format!(
            "{}: {} \nFile {}, line {}\n\n{}",
            self.error_name(),
            self,
            start.file_name,
            start.line + 1,
            string_with_arrows(start, end)
        )
    }

    fn to_glob_err(&self) -> CodeErr {
        CodeErr(self.describe())
    }
}

/// Source lines covered by `[start, end)`, each followed by a line of `^`
/// under the columns the range covers on it. The first line always gets at
/// least one `^`, so empty spans and spans over a new line stay visible.
pub fn string_with_arrows(start: &Position, end: &Position) -> String {
    let lines: Vec<&str> = start.full_text.split('\n').collect();

    // A span ending at column 0 covers nothing on its last line
    let last_line = if end.line > start.line && end.column == 0 {
        end.line - 1
    } else {
        end.line.max(start.line)
    };

    let mut excerpt: Vec<String> = vec![];

    for line_nb in start.line..=last_line {
        let line = lines.get(line_nb).copied().unwrap_or_default();
        let line_len = line.chars().count();

        let col_start = if line_nb == start.line {
            start.column.min(line_len)
        } else {
            0
        };
        let col_end = if line_nb == end.line {
            end.column.min(line_len)
        } else {
            line_len
        };

        let mut width = col_end.saturating_sub(col_start);
        if line_nb == start.line {
            width = width.max(1);
        }

        // Tabs are kept in the padding so the arrows stay aligned
        let padding: String = line
            .chars()
            .chain(std::iter::repeat(' '))
            .take(col_start)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();

        excerpt.push(format!("{}\n{}{}", line, padding, "^".repeat(width)));
    }

    excerpt.join("\n")
}
