//! Scanner: single-pass segmentation of lightly-marked-up job text.
//!
//! Two independent passes over the same input: `Sentences` feeds language
//! identification, `Words` feeds tag lookup and salary extraction. Both walk
//! the text left to right exactly once with one span-start index and one
//! "inside markup" flag, so a pass is O(n) with O(1) auxiliary state.
//! Iterators are lazy and not restartable; build a new one to rescan.

use std::str::CharIndices;

/// Characters that terminate a sentence span.
pub const SENTENCE_STOPPERS: &[char] = &['.', '!', '。', '<', '>'];

/// Characters that terminate a word span. Note the absence of `.`, `,` and
/// `!`: those must survive inside a word so tokens like `$60,000` and `401k`
/// are not split early.
pub const WORD_STOPPERS: &[char] = &[
    ' ', '(', ')', '{', '}', '[', ']', '-', '/', ':', ';', '&', '+', '<', '>',
];

/// Punctuation stripped from both ends of a span after boundary detection.
pub const UNNECESSARY_ENDS: &[char] = &[
    '.', ',', '(', ')', '{', '}', '[', ']', '-', '!', '/', ':', ';', '&', '+', '<', '>',
];

/// Sentences shorter than this after trimming carry too little signal for
/// language identification and are dropped.
const MIN_SENTENCE_CHARS: usize = 10;

/// Strips whitespace, then unnecessary-end punctuation, off both ends.
/// Idempotent: trimming an already-trimmed span is a no-op.
pub fn trim_ends(span: &str) -> &str {
    span.trim()
        .trim_end_matches(|c| UNNECESSARY_ENDS.contains(&c))
        .trim_start_matches(|c| UNNECESSARY_ENDS.contains(&c))
}

/// Raw span walker shared by both passes. Emits untrimmed spans between
/// stopper characters, skipping markup.
///
/// Markup handling, in branch order: `>` always clears the markup flag and
/// restarts the span after it (a tag contributes nothing); while the flag is
/// set every character is ignored; `<` outside markup always raises the flag;
/// a stopper closes the span only when the span is non-empty. A stray `<`
/// that never sees its `>` leaves the flag set, suppressing all further
/// spans. That is tolerated, not an error.
struct Spans<'a> {
    text: &'a str,
    chars: CharIndices<'a>,
    stoppers: &'static [char],
    start: usize,
    in_markup: bool,
    finished: bool,
}

impl<'a> Spans<'a> {
    fn new(text: &'a str, stoppers: &'static [char]) -> Self {
        Self {
            text,
            chars: text.char_indices(),
            stoppers,
            start: 0,
            in_markup: false,
            finished: false,
        }
    }
}

impl<'a> Iterator for Spans<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        for (index, ch) in self.chars.by_ref() {
            if ch == '>' {
                self.in_markup = false;
                self.start = index + ch.len_utf8();
            } else if self.in_markup {
                continue;
            } else if self.stoppers.contains(&ch) {
                if ch == '<' {
                    self.in_markup = true;
                }
                if self.start < index {
                    let span = &self.text[self.start..index];
                    self.start = index + ch.len_utf8();
                    return Some(span);
                }
            }
        }

        // Force-close the trailing span at end of input, unless an unclosed
        // tag swallowed the remainder.
        if !self.finished {
            self.finished = true;
            if !self.in_markup && self.start < self.text.len() {
                return Some(&self.text[self.start..]);
            }
        }
        None
    }
}

/// Sentence pass: trimmed spans between sentence stoppers, at least
/// `MIN_SENTENCE_CHARS` characters long.
pub struct Sentences<'a>(Spans<'a>);

impl<'a> Sentences<'a> {
    pub fn new(text: &'a str) -> Self {
        Self(Spans::new(text, SENTENCE_STOPPERS))
    }
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        for span in self.0.by_ref() {
            let sentence = trim_ends(span);
            if sentence.chars().count() >= MIN_SENTENCE_CHARS {
                return Some(sentence);
            }
        }
        None
    }
}

/// Word pass: trimmed, lowercased spans between word stoppers. Spans that
/// trim down to nothing are dropped.
pub struct Words<'a>(Spans<'a>);

impl<'a> Words<'a> {
    pub fn new(text: &'a str) -> Self {
        Self(Spans::new(text, WORD_STOPPERS))
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        for span in self.0.by_ref() {
            let word = trim_ends(span);
            if !word.is_empty() {
                return Some(word.to_lowercase());
            }
        }
        None
    }
}
