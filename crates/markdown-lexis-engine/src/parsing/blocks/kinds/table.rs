//! Pipe tables: a header row, a separator row of dashes, then body rows.

use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{
    blocks::closing,
    context::ParsingContext,
    span::Span,
    token::{Token, TokenKind},
};

/// Column alignment taken from the separator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
    Center,
}

impl Alignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Right => "right",
            Alignment::Center => "center",
        }
    }

    /// Value of the `style` attribute carried by cells in this column.
    pub fn style(self) -> String {
        format!("text-align: {}", self.as_str())
    }

    fn from_separator_cell(cell: &str) -> Self {
        match (cell.starts_with(':'), cell.ends_with(':')) {
            (true, true) => Alignment::Center,
            (false, true) => Alignment::Right,
            _ => Alignment::Left,
        }
    }
}

pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    fn row_regex() -> &'static Regex {
        static ROW_REGEX: OnceLock<Regex> = OnceLock::new();
        ROW_REGEX.get_or_init(|| Regex::new(r"^\s*\|(.+)\|\s*$").expect("Invalid table row regex"))
    }

    fn separator_cell_regex() -> &'static Regex {
        static SEP_REGEX: OnceLock<Regex> = OnceLock::new();
        SEP_REGEX.get_or_init(|| Regex::new(r"^:?-{3,}:?$").expect("Invalid table separator regex"))
    }

    /// Whether the line is shaped like a table row: `| ... |` with at least
    /// one cell, where the final pipe is not escaped.
    pub fn is_row(line: &str) -> bool {
        Self::row_regex().is_match(line) && !Self::split_row(line).is_empty()
    }

    /// Whether the line is a separator row such as `|:---|---:|`.
    pub fn is_separator(line: &str) -> bool {
        let cells = Self::split_row(line);
        !cells.is_empty()
            && cells
                .iter()
                .all(|cell| Self::separator_cell_regex().is_match(cell))
    }

    /// Splits a row into trimmed cells. `\|` is a literal pipe, and the empty
    /// segments outside the first and last pipe are discarded. Text before
    /// the first or after the last unescaped pipe means the line is not a
    /// row, and no cells are returned.
    pub fn split_row(line: &str) -> Vec<String> {
        let mut segments = vec![];
        let mut current = String::new();
        let mut chars = line.trim().chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\\' if chars.peek() == Some(&Self::PIPE) => {
                    current.push(Self::PIPE);
                    chars.next();
                }
                Self::PIPE => segments.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
        segments.push(current);

        if segments.len() < 2 {
            return vec![];
        }
        let outer_text = segments.first().is_some_and(|s| !s.trim().is_empty())
            || segments.last().is_some_and(|s| !s.trim().is_empty());
        if outer_text {
            return vec![];
        }
        segments.pop();
        segments
            .into_iter()
            .skip(1)
            .map(|cell| cell.trim().to_string())
            .collect()
    }

    pub fn parse_alignments(separator: &str) -> Vec<Alignment> {
        Self::split_row(separator)
            .iter()
            .map(|cell| Alignment::from_separator_cell(cell))
            .collect()
    }

    /// A table starts at `line` when it is a row, `next` is a separator and
    /// both have the same number of cells.
    pub fn matches(line: &str, next: Option<&str>) -> bool {
        let Some(next) = next else {
            return false;
        };
        Self::is_row(line)
            && Self::is_separator(next)
            && Self::split_row(line).len() == Self::split_row(next).len()
    }

    pub fn execute(line: &str, ctx: &mut ParsingContext<'_>) -> Vec<Token> {
        let start = ctx.current_line_index();
        let Some(separator) = ctx.peek_next_line() else {
            return vec![];
        };
        let header = Self::split_row(line);
        let columns = header.len();

        let mut out = vec![];
        closing::close_all(ctx, &mut out);
        ctx.begin_table(start, Self::parse_alignments(separator));

        let lines = ctx.lines();
        let mut last = start + 1;
        let mut body = vec![];
        while let Some(row) = lines.get(last + 1).copied() {
            if !Self::is_row(row) {
                break;
            }
            let cells = Self::split_row(row);
            if cells.len() != columns {
                break;
            }
            last += 1;
            body.push((last, cells));
        }

        out.push(
            Token::open(TokenKind::Table)
                .with_markup(Self::PIPE.to_string())
                .with_span(Span::new(start, last + 1)),
        );
        out.push(Token::open(TokenKind::TableHead).with_level(1));
        Self::push_row(ctx, &mut out, start, &header, true);
        out.push(Token::close(TokenKind::TableHead).with_level(1));

        out.push(Token::open(TokenKind::TableBody).with_level(1));
        for (index, cells) in &body {
            Self::push_row(ctx, &mut out, *index, cells, false);
        }
        out.push(Token::close(TokenKind::TableBody).with_level(1));
        out.push(Token::close(TokenKind::Table));

        ctx.end_table();
        ctx.advance_to(last);
        out
    }

    fn push_row(
        ctx: &ParsingContext<'_>,
        out: &mut Vec<Token>,
        index: usize,
        cells: &[String],
        header: bool,
    ) {
        let span = Span::line(index);
        out.push(Token::open(TokenKind::TableRow).with_level(2).with_span(span));
        for (column, cell) in cells.iter().enumerate() {
            let kind = TokenKind::TableCell { header };
            out.push(
                Token::open(kind)
                    .with_attr("style", ctx.column_alignment(column).style())
                    .with_level(3)
                    .with_span(span),
            );
            out.push(Token::inline(cell.as_str()).with_level(4).with_span(span));
            out.push(Token::close(kind).with_level(3));
        }
        out.push(Token::close(TokenKind::TableRow).with_level(2));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("|a|b|", vec!["a", "b"])]
    #[case("  | a | b |  ", vec!["a", "b"])]
    #[case(r"|a\|b|c|", vec!["a|b", "c"])]
    #[case("|||", vec!["", ""])]
    #[case(r"|a|b\|", vec![])]
    #[case(r"|\|", vec![])]
    #[case("x|a|", vec![])]
    fn split_row_cases(#[case] line: &str, #[case] expected: Vec<&str>) {
        assert_eq!(Table::split_row(line), expected);
    }

    #[rstest]
    #[case("|---|---|", true)]
    #[case("| :--- | ---: | :---: |", true)]
    #[case("|--|---|", false)]
    #[case("---|---", false)]
    #[case("||", false)]
    #[case(r"|\|", false)]
    fn separator_cases(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(Table::is_separator(line), expected);
    }

    #[rstest]
    #[case("|a|", true)]
    #[case(r"|a|b\|", false)]
    #[case(r"|\|", false)]
    fn row_needs_unescaped_closing_pipe(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(Table::is_row(line), expected);
    }

    #[test]
    fn alignments_from_separator() {
        assert_eq!(
            Table::parse_alignments("|:---|---:|:---:|---|"),
            vec![
                Alignment::Left,
                Alignment::Right,
                Alignment::Center,
                Alignment::Left
            ]
        );
        assert_eq!(Alignment::Center.style(), "text-align: center");
    }

    #[test]
    fn matches_needs_separator_with_same_width() {
        assert!(Table::matches("|a|b|", Some("|---|---|")));
        assert!(!Table::matches("|a|b|", Some("|---|")));
        assert!(!Table::matches("|a|b|", Some("|a|b|")));
        assert!(!Table::matches("|a|b|", None));
        assert!(!Table::matches(r"|\|", Some(r"|\|")));
    }

    fn shape(tokens: &[Token]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| match t.nesting.delta() {
                1 => format!("+{}", t.tag),
                -1 => format!("-{}", t.tag),
                _ => t.content.clone(),
            })
            .collect()
    }

    #[test]
    fn consumes_body_until_shape_changes() {
        let lines = ["|h1|h2|", "|---|--:|", "|a|b|", "|c|d|", "|only|", "after"];
        let mut ctx = ParsingContext::new(&lines);
        let out = Table::execute(lines[0], &mut ctx);

        assert_eq!(
            shape(&out),
            vec![
                "+table", "+thead", "+tr", "+th", "h1", "-th", "+th", "h2", "-th", "-tr",
                "-thead", "+tbody", "+tr", "+td", "a", "-td", "+td", "b", "-td", "-tr", "+tr",
                "+td", "c", "-td", "+td", "d", "-td", "-tr", "-tbody", "-table",
            ]
        );
        assert_eq!(ctx.current_line_index(), 3);
        assert!(!ctx.in_table());
        assert_eq!(out[0].source_span, Some(Span::new(0, 4)));

        let right = out
            .iter()
            .filter(|t| t.tag == "td" && t.is_open())
            .nth(1)
            .and_then(|t| t.attr("style"));
        assert_eq!(right, Some("text-align: right"));
    }

    #[test]
    fn header_only_table_has_empty_body() {
        let lines = ["|x|", "|---|"];
        let mut ctx = ParsingContext::new(&lines);
        let out = Table::execute(lines[0], &mut ctx);
        assert!(shape(&out).ends_with(&["+tbody".to_string(), "-tbody".into(), "-table".into()]));
        assert_eq!(ctx.current_line_index(), 1);
    }
}
