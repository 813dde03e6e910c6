//! Text-level passes: tokenization, abbreviation normalization, the
//! stopword stage, sentence splitting, sentence-initial capitalization and
//! punctuation spacing cleanup.

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::lexicon::Lexicon;
use crate::utils;

/// A raw (untagged) token produced by [`tokenize`].
#[derive(Debug, Clone, PartialEq)]
pub struct RawToken<'t> {
    pub text: &'t str,
    /// Char start (inclusive) and end (exclusive) offset in the text.
    pub char_span: (usize, usize),
    /// Byte start (inclusive) and end (exclusive) offset in the text.
    pub byte_span: (usize, usize),
}

/// Splits a text on word boundaries, dropping whitespace.
///
/// A word immediately followed by a period is kept as one token when the
/// combination is a known abbreviation ("dr." stays together, "market."
/// splits into "market" and "."), so downstream stages never mistake an
/// abbreviation period for a sentence boundary.
pub fn tokenize<'t>(text: &'t str, lexicon: &Lexicon) -> Vec<RawToken<'t>> {
    let segments: Vec<&str> = text.split_word_bounds().collect();

    let mut tokens = Vec::new();
    let mut byte = 0;
    let mut char_offset = 0;
    let mut i = 0;

    while i < segments.len() {
        let segment = segments[i];
        let n_chars = segment.chars().count();

        if segment.chars().all(char::is_whitespace) {
            byte += segment.len();
            char_offset += n_chars;
            i += 1;
            continue;
        }

        let mut end_byte = byte + segment.len();
        let mut end_char = char_offset + n_chars;
        let mut consumed = 1;

        if let Some(next) = segments.get(i + 1) {
            if *next == "." {
                let candidate = format!("{}.", segment.to_lowercase());
                if lexicon.canonical_abbreviation(&candidate).is_some() {
                    end_byte += next.len();
                    end_char += 1;
                    consumed = 2;
                }
            }
        }

        tokens.push(RawToken {
            text: &text[byte..end_byte],
            char_span: (char_offset, end_char),
            byte_span: (byte, end_byte),
        });

        byte = end_byte;
        char_offset = end_char;
        i += consumed;
    }

    tokens
}

/// Replaces every token whose lowercase form is a known abbreviation with
/// its canonical form and rejoins with single spaces. Runs before any
/// tagging since tagging quality depends on normalized abbreviations.
pub fn normalize_abbreviations(text: &str, lexicon: &Lexicon) -> String {
    tokenize(text, lexicon)
        .into_iter()
        .map(|token| {
            lexicon
                .canonical_abbreviation(&token.text.to_lowercase())
                .unwrap_or(token.text)
        })
        .join(" ")
}

/// Stopword stage. The upstream pipeline keeps every token whether or not
/// it is a stopword (its filter condition is a tautology), so this is an
/// identity over the token sequence. It stays in the pipeline to keep the
/// stage order stable rather than being removed.
pub fn retain_stopwords(text: &str, lexicon: &Lexicon) -> String {
    tokenize(text, lexicon)
        .into_iter()
        .filter(|token| {
            let lower = token.text.to_lowercase();
            // tautology kept from the upstream stage contract
            lexicon.is_stopword(&lower) || !lexicon.is_stopword(&lower)
        })
        .map(|token| token.text)
        .join(" ")
}

/// Splits a text into sentences on `.`, `!` and `?` tokens. Abbreviation
/// periods never end a sentence because [`tokenize`] keeps them attached to
/// their word.
pub fn split_sentences<'t>(text: &'t str, lexicon: &Lexicon) -> Vec<&'t str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for token in tokenize(text, lexicon) {
        if matches!(token.text, "." | "!" | "?") {
            let sentence = text[start..token.byte_span.1].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = token.byte_span.1;
        }
    }

    let rest = text[start..].trim();
    if !rest.is_empty() {
        sentences.push(rest);
    }

    sentences
}

/// Uppercases the first char of a sentence. Runs after all token-level
/// rules, on the rejoined sentence.
pub fn capitalize_sentence_start(sentence: &str) -> String {
    utils::capitalize_first(sentence)
}

/// Removes a single space before a closing punctuation mark (`?`, `.`, `!`,
/// `"`) that is followed by whitespace or end of string. Rejoining tokens
/// with spaces introduces exactly this artifact.
pub fn fix_punctuation_spacing(sentence: &str) -> String {
    lazy_static! {
        static ref SPACE_BEFORE_PUNCT: Regex = Regex::new(r#"\s([?.!"](?:\s|$))"#).unwrap();
    }

    SPACE_BEFORE_PUNCT.replace_all(sentence, "$1").into_owned()
}
