//! Singular/plural noun form correction.

use super::Transform;
use crate::lexicon::Lexicon;
use crate::types::{Correction, Tag, Token};

/// Fixes noun surface forms that disagree with their tag.
///
/// This is a one-directional heuristic: a singular noun ending in "s" is
/// only shortened when the stem matches the annotator's lemma, which still
/// misfires on legitimate s-final singulars with a shorter dictionary stem.
/// Such false positives are accepted by design.
#[derive(Debug, Clone, Copy, Default)]
pub struct NounForms;

impl Transform for NounForms {
    fn name(&self) -> &'static str {
        "noun-forms"
    }

    fn corrections(&self, tokens: &[Token], _lexicon: &Lexicon) -> Vec<Correction> {
        let mut corrections = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            match &token.tag {
                // plural-tagged noun without a plural suffix
                Tag::PluralNoun if !token.text.ends_with('s') => {
                    if let Some(lemma) = token.lemma.as_deref() {
                        if lemma != token.text {
                            corrections.push(Correction::replace(i, format!("{}s", lemma)));
                        }
                    }
                }
                // singular-tagged noun with a plural suffix
                Tag::SingularNoun if token.text.ends_with('s') => {
                    let stem = &token.text[..token.text.len() - 1];
                    if token.lemma.as_deref() == Some(stem) {
                        corrections.push(Correction::replace(i, stem));
                    }
                }
                _ => {}
            }
        }

        corrections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noun(text: &str, tag: Tag, lemma: Option<&str>) -> Token {
        let mut token = Token::new(text, tag, (0, text.chars().count()));
        if let Some(lemma) = lemma {
            token = token.with_lemma(lemma);
        }
        token
    }

    fn apply(tokens: &[Token]) -> Vec<Correction> {
        NounForms.corrections(tokens, Lexicon::shared())
    }

    #[test]
    fn plural_tag_without_suffix_gets_regularized() {
        let corrections = apply(&[noun("men", Tag::PluralNoun, Some("man"))]);
        assert_eq!(corrections[0].replacement.as_deref(), Some("mans"));
    }

    #[test]
    fn plural_without_lemma_passes_through() {
        assert!(apply(&[noun("men", Tag::PluralNoun, None)]).is_empty());
    }

    #[test]
    fn singular_with_suffix_is_stripped_when_the_stem_is_the_lemma() {
        let corrections = apply(&[noun("cars", Tag::SingularNoun, Some("car"))]);
        assert_eq!(corrections[0].replacement.as_deref(), Some("car"));
    }

    #[test]
    fn s_final_singular_is_not_corrupted() {
        // "bus" is singular; the stem "bu" is not its lemma
        assert!(apply(&[noun("bus", Tag::SingularNoun, Some("bus"))]).is_empty());
    }

    #[test]
    fn well_formed_plural_is_left_alone() {
        assert!(apply(&[noun("cats", Tag::PluralNoun, Some("cat"))]).is_empty());
    }
}
