//! The correction pipeline orchestrator.

use itertools::Itertools;
use log::debug;

use crate::annotate::Annotate;
use crate::apply::apply_corrections;
use crate::lexicon::Lexicon;
use crate::text;
use crate::transform::{self, Stage, Transform};
use crate::types::AppliedCorrection;
use crate::Error;

/// Runs the fixed sequence of correction stages over input text.
///
/// Two pipelines are exposed:
/// * [`correct`][Corrector::correct] rewrites the token stream per sentence
///   and reassembles the text from the corrected tokens.
/// * [`correct_with_trace`][Corrector::correct_with_trace] patches the
///   original sentence at the recorded token offsets and returns the list
///   of corrections that were actually applied.
pub struct Corrector<A> {
    annotator: A,
    lexicon: &'static Lexicon,
    rewrite_stages: Vec<Stage>,
    trace_stages: Vec<Stage>,
}

impl<A: Annotate> Corrector<A> {
    pub fn new(annotator: A) -> Self {
        Corrector {
            annotator,
            lexicon: Lexicon::shared(),
            rewrite_stages: transform::rewrite_stages(),
            trace_stages: transform::trace_stages(),
        }
    }

    /// Corrects a whole text.
    ///
    /// Abbreviations are normalized before annotation since tagging quality
    /// depends on them; the stopword stage is an identity pass kept for the
    /// stage contract; sentence-initial capitalization and punctuation
    /// cleanup run on the reassembled sentences after all token rules.
    pub fn correct(&self, input: &str) -> Result<String, Error> {
        if input.trim().is_empty() {
            return Ok(String::new());
        }

        let normalized = text::normalize_abbreviations(input, self.lexicon);
        let normalized = text::retain_stopwords(&normalized, self.lexicon);

        let mut corrected = Vec::new();

        for sentence in text::split_sentences(&normalized, self.lexicon) {
            let mut tokens = self.annotator.annotate(sentence)?;
            let mut corrected_by = vec![None; tokens.len()];

            for stage in &self.rewrite_stages {
                let corrections = stage.corrections(&tokens, self.lexicon);
                debug!(
                    "{}: {} correction(s) for {:?}",
                    stage.name(),
                    corrections.len(),
                    sentence
                );
                transform::merge(&mut tokens, stage.name(), corrections, &mut corrected_by);
            }

            let rejoined = tokens.iter().map(|t| t.text.as_str()).join(" ");
            let capitalized = text::capitalize_sentence_start(&rejoined);
            corrected.push(text::fix_punctuation_spacing(&capitalized));
        }

        Ok(corrected.join(" "))
    }

    /// Corrects a single sentence by patching it at the annotated token
    /// offsets, returning the corrected sentence together with the
    /// corrections that were applied.
    ///
    /// Corrections that fail offset validation or overlap an earlier one
    /// are dropped (and logged), never fatal.
    pub fn correct_with_trace(
        &self,
        sentence: &str,
    ) -> Result<(String, Vec<AppliedCorrection>), Error> {
        let tokens = self.annotator.annotate(sentence)?;

        let mut proposed = Vec::new();
        for stage in &self.trace_stages {
            for correction in stage.corrections(&tokens, self.lexicon) {
                // retag-only corrections don't change the surface text
                let replacement = match correction.replacement {
                    Some(replacement) => replacement,
                    None => continue,
                };
                let token = &tokens[correction.index];
                proposed.push(AppliedCorrection {
                    source: stage.name().to_string(),
                    original: token.text.clone(),
                    replacement,
                    start: token.char_span.0,
                    end: token.char_span.1,
                });
            }
        }

        let outcome = apply_corrections(sentence, proposed);
        Ok((outcome.text, outcome.applied))
    }
}
