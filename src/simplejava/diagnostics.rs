//! Source-context excerpts for error reports
//!
//! The parser reports positions as token indices. With the spans from
//! [tokenize_with_spans](crate::simplejava::lexer::tokenize_with_spans) those map back to
//! byte ranges, and from there to the lines around the failure.

use crate::simplejava::lexer::{LexError, Span};
use crate::simplejava::parser::SyntaxError;

/// 0-based (line, column) of a byte offset. Offsets past the end land on the last line.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let before = &source[..floor_char_boundary(source, offset)];
    let line = before.matches('\n').count();
    let column = before.rsplit('\n').next().map_or(0, |tail| tail.chars().count());
    (line, column)
}

fn floor_char_boundary(source: &str, mut offset: usize) -> usize {
    while offset > 0 && !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Two lines before the failing line, the failing line marked with `>>`, two lines after
pub fn format_source_context(source: &str, span: &Span) -> String {
    let lines: Vec<&str> = source.lines().collect();
    if lines.is_empty() {
        return String::new();
    }
    let (error_line, _) = line_col(source, span.start);
    let error_line = error_line.min(lines.len() - 1);

    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();
    for (line_num, line) in lines.iter().enumerate().take(end_line).skip(start_line) {
        let marker = if line_num == error_line { ">>" } else { "  " };
        context.push_str(&format!("{} {:3} | {}\n", marker, line_num + 1, line));
    }
    context
}

/// The source span a syntax error points at. Errors past the last token point at the end
/// of the source.
pub fn syntax_error_span(error: &SyntaxError, spans: &[Span], source_len: usize) -> Span {
    spans
        .get(error.position())
        .cloned()
        .unwrap_or(source_len..source_len)
}

/// A full report: the message, a `line:column` location and the source excerpt
pub fn render_syntax_error(source: &str, error: &SyntaxError, spans: &[Span]) -> String {
    let span = syntax_error_span(error, spans, source.len());
    render(source, &error.to_string(), &span)
}

pub fn render_lex_error(source: &str, error: &LexError) -> String {
    render(source, &error.to_string(), error.span())
}

fn render(source: &str, message: &str, span: &Span) -> String {
    let (line, column) = line_col(source, span.start);
    format!(
        "error: {}\n --> {}:{}\n{}",
        message,
        line + 1,
        column + 1,
        format_source_context(source, span)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplejava::token::{Token, TokenKind};

    #[test]
    fn test_line_col() {
        let source = "ab\ncd\n";
        assert_eq!(line_col(source, 0), (0, 0));
        assert_eq!(line_col(source, 4), (1, 1));
        assert_eq!(line_col(source, 100), (2, 0));
    }

    #[test]
    fn test_format_source_context() {
        let source = "line 1\nline 2\nline 3\nerror line\nline 5\nline 6\nline 7";
        let context = format_source_context(source, &(21..26));
        assert_eq!(
            context,
            "     2 | line 2\n     3 | line 3\n>>   4 | error line\n     5 | line 5\n     6 | line 6\n"
        );
    }

    #[test]
    fn test_context_at_end_of_source() {
        let source = "a\nb\n";
        let context = format_source_context(source, &(4..4));
        assert_eq!(context, "     1 | a\n>>   2 | b\n");
        assert_eq!(format_source_context("", &(0..0)), "");
    }

    #[test]
    fn test_render_syntax_error() {
        let source = "x\ny z";
        let spans = vec![0..1, 2..3, 4..5];
        let error = SyntaxError::NoApplicableRule {
            nonterminal: crate::simplejava::grammar::NonTerminal::Program,
            found: Token::with_value(TokenKind::Id, "z"),
            position: 2,
        };
        let report = render_syntax_error(source, &error, &spans);
        assert!(report.starts_with("error: no production for <<prog>> on <id> \"z\" (token 2)\n --> 2:3\n"));
        assert!(report.contains(">>   2 | y z"));
    }
}
