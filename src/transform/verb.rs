//! Irregular verb normalization.

use super::Transform;
use crate::lexicon::Lexicon;
use crate::types::{Correction, Token};

/// Rewrites verb-tagged tokens whose surface form is the base form of a
/// known irregular verb to the paradigm's canonical past tense.
///
/// This runs after the agreement stage and may overwrite its result; the
/// ordering is deliberate and the overwrite is reported by the stage
/// runner's merge hook.
#[derive(Debug, Clone, Copy, Default)]
pub struct IrregularVerbs;

impl Transform for IrregularVerbs {
    fn name(&self) -> &'static str {
        "irregular-verbs"
    }

    fn corrections(&self, tokens: &[Token], lexicon: &Lexicon) -> Vec<Correction> {
        let mut corrections = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            if !token.tag.is_verb() || !lexicon.is_irregular(&token.text) {
                continue;
            }

            // the surface form is itself a paradigm key; the lemma must
            // still resolve before a form is proposed
            if let Some((past, _)) = lexicon.irregular_forms(token.lemma_or_text()) {
                if past != token.text {
                    corrections.push(Correction::replace(i, past));
                }
            }
        }

        corrections
    }
}
