//! Spanned error rendering for operator-facing output.

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use crate::parser::ParseError;

/// Render a parse error as an annotated snippet of the offending source.
pub fn render_parse_error(
    source: &str,
    path: Option<&str>,
    error: &ParseError,
    colored: bool,
) -> String {
    let renderer = if colored {
        Renderer::styled()
    } else {
        Renderer::plain()
    };

    let range = adjust_range(&error.span, source.len());

    let mut snippet = Snippet::source(source)
        .line_start(1)
        .annotation(AnnotationKind::Primary.span(range).label(&error.message));
    if let Some(path) = path {
        snippet = snippet.path(path);
    }

    let report: Vec<Group> = vec![Level::ERROR.primary_title(&error.message).element(snippet)];
    format!("{}", renderer.render(&report))
}

/// Zero-width spans (end-of-input errors) widen to one character so the
/// caret has something to point at.
fn adjust_range(span: &std::ops::Range<usize>, limit: usize) -> std::ops::Range<usize> {
    if span.start == span.end {
        span.start..(span.start + 1).min(limit)
    } else {
        span.clone()
    }
}
