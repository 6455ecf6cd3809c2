//! Text shaping and truncation policies for compact UI surfaces.

use core::fmt::Write;

use heapless::String as HeaplessString;

pub const COMPACT_MAX_WORDS: usize = 12;
pub const COMPACT_MAX_CHARS: usize = 72;
pub const POSITION_LABEL_BYTES: usize = 12;
const ELLIPSIS: &str = "...";

/// Whitespace-collapsed one-liner capped at [`COMPACT_MAX_WORDS`] words and
/// [`COMPACT_MAX_CHARS`] characters.
pub fn summary_line<const N: usize>(source: &str) -> HeaplessString<N> {
    clip_words(source, COMPACT_MAX_WORDS, COMPACT_MAX_CHARS)
}

/// Collapses runs of whitespace to single spaces and clips at whichever of
/// `max_words`, `max_chars` or the buffer capacity comes first. Clipped text
/// ends in `...` with no dangling space before it.
pub fn clip_words<const N: usize>(
    source: &str,
    max_words: usize,
    max_chars: usize,
) -> HeaplessString<N> {
    let mut out = HeaplessString::new();
    let mut clipped = source.split_whitespace().nth(max_words).is_some();

    let collapsed = source
        .split_whitespace()
        .take(max_words)
        .enumerate()
        .flat_map(|(index, word)| (index > 0).then_some(' ').into_iter().chain(word.chars()));
    for (count, ch) in collapsed.enumerate() {
        if count >= max_chars || out.push(ch).is_err() {
            clipped = true;
            break;
        }
    }

    if clipped {
        while out.len() + ELLIPSIS.len() > out.capacity() && out.pop().is_some() {}
        let kept = out.trim_end().len();
        out.truncate(kept);
        // Only fails for buffers smaller than the ellipsis itself.
        let _ = out.push_str(ELLIPSIS);
    }

    out
}

/// One-based `"current/total"` label.
pub fn position_label(active: usize, total: usize) -> HeaplessString<POSITION_LABEL_BYTES> {
    let mut label = HeaplessString::new();
    // Navigators hold at most a handful of steps; an oversized pair is cut short.
    let _ = write!(label, "{}/{}", active.saturating_add(1), total);
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_collapsed_but_kept() {
        let out: HeaplessString<96> = summary_line("Reads  the\nproject rules");
        assert_eq!(out.as_str(), "Reads the project rules");
    }

    #[test]
    fn word_cap_appends_ellipsis() {
        let out: HeaplessString<96> = clip_words("one two three four", 2, 80);
        assert_eq!(out.as_str(), "one two...");
    }

    #[test]
    fn char_cap_cuts_mid_word() {
        let out: HeaplessString<32> = clip_words("abcdef ghi", 10, 4);
        assert_eq!(out.as_str(), "abcd...");
    }

    #[test]
    fn char_cap_on_separator_drops_the_space() {
        let out: HeaplessString<32> = clip_words("abcd efgh", 10, 5);
        assert_eq!(out.as_str(), "abcd...");
    }

    #[test]
    fn capacity_leaves_room_for_ellipsis() {
        let out: HeaplessString<8> = clip_words("abcdefghij", 20, 80);
        assert_eq!(out.as_str(), "abcde...");
    }

    #[test]
    fn blank_source_stays_empty() {
        let out: HeaplessString<16> = summary_line(" \n\t ");
        assert!(out.is_empty());
    }

    #[test]
    fn position_label_is_one_based() {
        assert_eq!(position_label(0, 5).as_str(), "1/5");
        assert_eq!(position_label(4, 5).as_str(), "5/5");
    }
}
