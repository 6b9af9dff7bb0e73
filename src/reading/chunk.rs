/// One unit of text shown to the reader at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub text: String,
    /// Whitespace word count of `text`; "One.Two" is one word.
    pub word_count: usize,
}

impl Chunk {
    pub fn new(text: impl Into<String>, word_count: usize) -> Self {
        Self {
            text: text.into(),
            word_count,
        }
    }

    /// Builds a chunk whose word count is the whitespace word count of `text`.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let word_count = count_words(&text);
        Self { text, word_count }
    }
}

/// Whitespace-delimited word count.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
