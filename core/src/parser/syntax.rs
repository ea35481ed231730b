use core::ops::Range;

/// A byte range into the text handed to the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span(start..end)
    }

    pub fn start(&self) -> usize {
        self.0.start
    }

    pub fn end(&self) -> usize {
        self.0.end
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shifts the span right by `offset` bytes.
    pub fn shifted(&self, offset: usize) -> Span {
        Span(self.0.start + offset..self.0.end + offset)
    }
}

impl From<pest::Span<'_>> for Span {
    fn from(span: pest::Span<'_>) -> Self {
        Span(span.start()..span.end())
    }
}
