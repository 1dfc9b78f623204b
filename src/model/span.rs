//! Sub-line fragments for inline highlighting
//!
//! A modified line is displayed as a sequence of spans, each tagged with
//! how it relates to the paired line on the other side. The spans of a
//! line always concatenate back to that line's full text.

use derive_new::new;

/// How a span relates to the paired line on the other side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Equal,
    Addition,
    Deletion,
}

/// One highlighted sub-line fragment
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Span {
    #[new(into)]
    text: String,
    kind: SpanKind,
}

impl Span {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }
}

/// One line of content with its highlighting spans
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    value: String,
    spans: Vec<Span>,
}

impl Line {
    /// Line kept as-is on both sides
    pub fn context(value: impl Into<String>) -> Self {
        Self::single_span(value.into(), SpanKind::Equal)
    }

    /// Line present only on the modified side
    pub fn added(value: impl Into<String>) -> Self {
        Self::single_span(value.into(), SpanKind::Addition)
    }

    /// Line present only on the original side
    pub fn removed(value: impl Into<String>) -> Self {
        Self::single_span(value.into(), SpanKind::Deletion)
    }

    /// Line assembled from inline spans; its value is their concatenation
    pub fn from_spans(spans: Vec<Span>) -> Self {
        // Every line carries at least one span, even when the side is
        // empty against its pair.
        let spans = if spans.is_empty() {
            vec![Span::new("", SpanKind::Equal)]
        } else {
            spans
        };
        let value = spans.iter().map(Span::text).collect();
        Self { value, spans }
    }

    fn single_span(value: String, kind: SpanKind) -> Self {
        let spans = vec![Span::new(value.clone(), kind)];
        Self { value, spans }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }
}
