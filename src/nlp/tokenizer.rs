//! Sentence segmentation and word tokenization
//!
//! Segmentation is rule based: a run of terminal punctuation, optionally
//! followed by closing quotes or brackets, ends a sentence when whitespace or
//! the end of input follows. Periods after known abbreviations and single
//! capital initials do not, unless the next word is a common sentence opener.
//! A blank line always ends a sentence.

/// Words that end in a period without ending the sentence (lowercase, final
/// period removed)
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "e.g", "i.e", "cf",
    "al", "approx", "inc", "ltd", "co", "corp", "dept", "fig", "gov", "vol",
    "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "u.s",
    "u.k", "a.m", "p.m",
];

/// Capitalized words that after an abbreviation or initial mark a new
/// sentence (`... the U.S. It is ...`, `... an A. Then ...`)
///
/// The pronoun `I` and the article `A` are left out: they are also initials
/// (`Dr. A. I. Smith`), so `... got an A. I was ...` stays one sentence.
const SENTENCE_OPENERS: &[&str] = &[
    "After", "All", "And", "As", "At", "Before", "But", "During", "For", "He", "Her", "His",
    "How", "However", "If", "In", "It", "Its", "Many", "Most", "My", "Now", "On", "Our", "She",
    "So", "Some", "That", "The", "Their", "Then", "There", "These", "They", "This", "Those",
    "Today", "We", "What", "When", "Where", "While", "Who", "Why", "You", "Your",
];

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '”' | '’' | '»')
}

/// Byte span of one sentence within a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceSpan {
    pub start: usize,
    pub end: usize,
}

/// Split a document into trimmed, non-empty sentence spans
///
/// A document without any boundary comes back as one span covering the
/// trimmed input; whitespace-only input yields no spans.
pub fn split_sentences(text: &str) -> Vec<SentenceSpan> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut spans = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];

        if is_terminal(c) {
            let mut j = i + 1;
            while j < chars.len() && is_terminal(chars[j].1) {
                j += 1;
            }
            let single_period = c == '.' && j == i + 1;
            while j < chars.len() && is_closing(chars[j].1) {
                j += 1;
            }

            let end = chars.get(j).map_or(text.len(), |&(p, _)| p);
            let boundary = chars.get(j).map_or(true, |&(_, next)| next.is_whitespace());
            let abbreviated = single_period
                && is_abbreviation(&text[start..pos])
                && !SENTENCE_OPENERS.contains(&next_word(&text[end..]));
            if boundary && !abbreviated {
                push_span(text, start, end, &mut spans);
                start = end;
            }
            i = j;
            continue;
        }

        if c == '\n' {
            let mut j = i + 1;
            while j < chars.len() && chars[j].1 != '\n' && chars[j].1.is_whitespace() {
                j += 1;
            }
            if j < chars.len() && chars[j].1 == '\n' {
                push_span(text, start, pos, &mut spans);
                start = pos;
                i = j + 1;
                continue;
            }
        }

        i += 1;
    }

    push_span(text, start, text.len(), &mut spans);
    spans
}

fn push_span(text: &str, start: usize, end: usize, spans: &mut Vec<SentenceSpan>) {
    let slice = &text[start..end];
    let trimmed = slice.trim();
    if trimmed.is_empty() {
        return;
    }
    let offset = start + (slice.len() - slice.trim_start().len());
    spans.push(SentenceSpan {
        start: offset,
        end: offset + trimmed.len(),
    });
}

/// First word of `rest`, skipping leading whitespace and punctuation
fn next_word(rest: &str) -> &str {
    rest.trim_start_matches(|c: char| !c.is_alphanumeric())
        .split(|c: char| !c.is_alphanumeric())
        .next()
        .unwrap_or("")
}

/// Whether the word right before a period is an abbreviation or an initial
fn is_abbreviation(preceding: &str) -> bool {
    let word = preceding
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric());
    if word.is_empty() {
        return false;
    }

    let mut letters = word.chars();
    if let (Some(first), None) = (letters.next(), letters.next()) {
        return first.is_uppercase();
    }
    ABBREVIATIONS.contains(&word.to_lowercase().as_str())
}

/// Split text into lowercase words
///
/// Words are runs of alphanumeric characters; an apostrophe between two
/// such characters stays inside the word (`don't`, `dog's`). Typographic
/// apostrophes are folded to `'`. Everything else separates words and is
/// dropped.
pub fn words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for c in text.chars().flat_map(char::to_lowercase) {
        let c = if c == '\u{2019}' { '\'' } else { c };
        if c.is_alphanumeric() {
            current.push(c);
        } else if c == '\'' && !current.is_empty() && !current.ends_with('\'') {
            current.push(c);
        } else {
            flush_word(&mut current, &mut words);
        }
    }
    flush_word(&mut current, &mut words);

    words
}

fn flush_word(current: &mut String, words: &mut Vec<String>) {
    let word = current.trim_end_matches('\'');
    if !word.is_empty() {
        words.push(word.to_string());
    }
    current.clear();
}
