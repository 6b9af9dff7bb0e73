use super::chunk::{count_words, Chunk};
use crate::engine::error::ChunkError;

/// Splits `text` into display chunks.
///
/// Without a separator, words are grouped in runs of exactly
/// `words_per_chunk` (the last run may be shorter) and joined by one space.
///
/// With a non-empty separator, the text is cut on every occurrence, each unit
/// is trimmed and empty units are dropped. Units are then accumulated greedily
/// while the running word total stays within `words_per_chunk`, and each group
/// is rejoined with the separator. A unit that alone exceeds the limit is
/// emitted as its own oversized chunk. Unit word counts only bound the
/// grouping; each emitted chunk carries the whitespace word count of its
/// rejoined text.
pub fn chunk_text(
    text: &str,
    words_per_chunk: usize,
    separator: Option<&str>,
) -> Result<Vec<Chunk>, ChunkError> {
    if words_per_chunk == 0 {
        return Err(ChunkError::ZeroChunkSize);
    }

    let chunks = match separator.filter(|sep| !sep.is_empty()) {
        Some(sep) => chunk_by_separator(text, words_per_chunk, sep),
        None => chunk_by_words(text, words_per_chunk),
    };

    tracing::debug!(
        chunks = chunks.len(),
        words_per_chunk,
        separator = ?separator,
        "chunked source text"
    );
    Ok(chunks)
}

fn chunk_by_words(text: &str, words_per_chunk: usize) -> Vec<Chunk> {
    let words: Vec<&str> = text.split_whitespace().collect();
    words
        .chunks(words_per_chunk)
        .map(|group| Chunk::new(group.join(" "), group.len()))
        .collect()
}

fn chunk_by_separator(text: &str, words_per_chunk: usize, separator: &str) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut group: Vec<&str> = Vec::new();
    let mut group_words = 0;

    for unit in text.split(separator).map(str::trim).filter(|u| !u.is_empty()) {
        let unit_words = count_words(unit);
        if group_words + unit_words <= words_per_chunk {
            group.push(unit);
            group_words += unit_words;
        } else {
            if !group.is_empty() {
                chunks.push(Chunk::from_text(group.join(separator)));
            }
            group = vec![unit];
            group_words = unit_words;
        }
    }

    if !group.is_empty() {
        chunks.push(Chunk::from_text(group.join(separator)));
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(chunks: &[Chunk]) -> Vec<&str> {
        chunks.iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn test_word_mode_groups_by_size() {
        let chunks = chunk_text("the quick brown fox jumps", 2, None).unwrap();
        assert_eq!(texts(&chunks), vec!["the quick", "brown fox", "jumps"]);
        assert_eq!(chunks[2].word_count, 1);
    }

    #[test]
    fn test_word_mode_normalizes_whitespace() {
        let chunks = chunk_text("  alpha\n\nbeta\tgamma  ", 2, None).unwrap();
        assert_eq!(texts(&chunks), vec!["alpha beta", "gamma"]);
    }

    #[test]
    fn test_word_mode_preserves_word_sequence() {
        let text = "It was the best of times, it was the worst of times, it was the age of wisdom";
        for size in 1..=5 {
            let chunks = chunk_text(text, size, None).unwrap();
            let rejoined: Vec<&str> = chunks
                .iter()
                .flat_map(|c| c.text.split_whitespace())
                .collect();
            let original: Vec<&str> = text.split_whitespace().collect();
            assert_eq!(rejoined, original, "size {}", size);

            let (last, rest) = chunks.split_last().unwrap();
            assert!(rest.iter().all(|c| c.word_count == size));
            assert!(last.word_count >= 1 && last.word_count <= size);
        }
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        assert!(chunk_text("", 3, None).unwrap().is_empty());
        assert!(chunk_text("", 3, Some(".")).unwrap().is_empty());
        assert!(chunk_text(" \n\t ", 3, None).unwrap().is_empty());
        assert!(chunk_text(" \n\t ", 3, Some("\n")).unwrap().is_empty());
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        assert!(matches!(
            chunk_text("hello", 0, None),
            Err(ChunkError::ZeroChunkSize)
        ));
        assert!(matches!(
            chunk_text("hello", 0, Some(".")),
            Err(ChunkError::ZeroChunkSize)
        ));
    }

    #[test]
    fn test_sentence_mode_groups_units() {
        let chunks = chunk_text("One. Two. Three. Four.", 2, Some(".")).unwrap();
        assert_eq!(texts(&chunks), vec!["One.Two", "Three.Four"]);
        assert_eq!(chunks[0].word_count, 1);
        assert_eq!(chunks[1].word_count, 1);
    }

    #[test]
    fn test_separator_mode_drops_empty_units() {
        let chunks = chunk_text("..A b.. .C.", 5, Some(".")).unwrap();
        assert_eq!(texts(&chunks), vec!["A b.C"]);
        assert_eq!(chunks[0].word_count, 2);
    }

    #[test]
    fn test_separator_mode_oversized_unit_alone() {
        let text = "Short one. This sentence is far too long to fit. End";
        let chunks = chunk_text(text, 3, Some(".")).unwrap();
        assert_eq!(
            texts(&chunks),
            vec!["Short one", "This sentence is far too long to fit", "End"]
        );
        assert_eq!(chunks[1].word_count, 8);
    }

    #[test]
    fn test_separator_mode_respects_bound() {
        let text = "a b. c. d e f. g. h i. j k l m. n";
        let limit = 3;
        let chunks = chunk_text(text, limit, Some(".")).unwrap();
        for chunk in &chunks {
            let single_unit = !chunk.text.contains('.');
            assert!(
                chunk.word_count <= limit || single_unit,
                "chunk {:?} exceeds bound",
                chunk.text
            );
        }
    }

    #[test]
    fn test_separator_absent_from_text_gives_single_chunk() {
        let chunks = chunk_text("  no separators here  ", 5, Some(".")).unwrap();
        assert_eq!(texts(&chunks), vec!["no separators here"]);

        let oversized = chunk_text("one two three four", 2, Some(".")).unwrap();
        assert_eq!(texts(&oversized), vec!["one two three four"]);
    }

    #[test]
    fn test_separator_chunk_counts_words_in_joined_text() {
        let chunks = chunk_text("Hello world. Bye now. Last one", 4, Some(".")).unwrap();
        assert_eq!(texts(&chunks), vec!["Hello world.Bye now", "Last one"]);
        assert_eq!(chunks[0].word_count, 3);
        assert_eq!(chunks[1].word_count, 2);

        let paragraphs = chunk_text("one\ntwo three", 5, Some("\n")).unwrap();
        assert_eq!(texts(&paragraphs), vec!["one\ntwo three"]);
        assert_eq!(paragraphs[0].word_count, 3);
    }

    #[test]
    fn test_paragraph_mode_splits_on_newline() {
        let text = "First para here.\n\nSecond one.\nThird para is long enough";
        let chunks = chunk_text(text, 4, Some("\n")).unwrap();
        assert_eq!(
            texts(&chunks),
            vec!["First para here.", "Second one.", "Third para is long enough"]
        );
    }

    #[test]
    fn test_multi_char_separator() {
        let chunks = chunk_text("a || b || c d", 2, Some("||")).unwrap();
        assert_eq!(texts(&chunks), vec!["a||b", "c d"]);
    }

    #[test]
    fn test_empty_separator_falls_back_to_words() {
        let chunks = chunk_text("one two three", 2, Some("")).unwrap();
        assert_eq!(texts(&chunks), vec!["one two", "three"]);
    }

    #[test]
    fn test_chunking_is_deterministic() {
        let text = "Repeatable. Output. Every. Time.";
        let first = chunk_text(text, 2, Some(".")).unwrap();
        let second = chunk_text(text, 2, Some(".")).unwrap();
        assert_eq!(first, second);
    }
}
