//! Subject-verb agreement, in two variants: one driven by tag adjacency for
//! annotators without a dependency parse, one driven by subject edges.

use super::Transform;
use crate::lexicon::Lexicon;
use crate::types::{Correction, Relation, Tag, Token};

/// Verbs ending in these take "es" in the 3rd person singular.
const ES_STEMS: &[&str] = &["o", "ch", "s", "sh", "x", "z"];

fn takes_es(stem: &str) -> bool {
    ES_STEMS.iter().any(|suffix| stem.ends_with(suffix))
}

/// 3rd-person-singular present form of a base verb.
fn third_singular(base: &str) -> String {
    if takes_es(base) {
        format!("{}es", base)
    } else {
        format!("{}s", base)
    }
}

/// Reverses [`third_singular`]: strips "es" or "s" from a 3rd-person form.
///
/// Both candidate stems are checked against the lemma; naive
/// suffix-stripping would produce wrong stems for words ending in "ses",
/// "xes" and the like. Without a lemma there is nothing to validate
/// against, so no stem is proposed.
fn strip_third_singular(word: &str, lemma: Option<&str>) -> Option<String> {
    let lemma = lemma?;
    let stem = word
        .strip_suffix("es")
        .into_iter()
        .chain(word.strip_suffix('s'))
        .find(|stem| *stem == lemma)?;

    if stem.is_empty() {
        None
    } else {
        Some(stem.to_string())
    }
}

fn is_singular_pronoun(word: &str) -> bool {
    matches!(word.to_lowercase().as_str(), "he" | "she" | "it")
}

/// Auxiliary contraction corrections for 3rd-person-singular subjects,
/// looked up directly instead of going through the general rule.
fn contraction(form: &str) -> Option<&'static str> {
    match form {
        "do" => Some("doesn't"),
        "don't" => Some("doesn't"),
        "doesn't" => Some("do"),
        "have" => Some("hasn't"),
        "hasn't" => Some("have"),
        _ => None,
    }
}

/// Agreement by tag adjacency: each present-tense verb is checked against
/// the tag of the token immediately before it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubjectVerbAgreement;

impl Transform for SubjectVerbAgreement {
    fn name(&self) -> &'static str {
        "subject-verb-agreement"
    }

    fn corrections(&self, tokens: &[Token], lexicon: &Lexicon) -> Vec<Correction> {
        let mut corrections = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let previous = i.checked_sub(1).map(|p| &tokens[p]);

            match &token.tag {
                // singular subject with a non-3rd-person verb
                Tag::PresentVerb
                    if previous.map_or(false, |p| {
                        matches!(p.tag, Tag::SingularNoun | Tag::Pronoun)
                    }) =>
                {
                    corrections.push(Correction::replace_and_retag(
                        i,
                        third_singular(&token.text),
                        Tag::PresentThirdVerb,
                    ));
                }
                // plural subject with a 3rd-person-singular verb
                Tag::PresentThirdVerb
                    if previous.map_or(false, |p| p.tag == Tag::PluralNoun) =>
                {
                    if let Some(stem) = strip_third_singular(&token.text, token.lemma.as_deref())
                    {
                        if stem != token.text {
                            corrections.push(Correction::replace_and_retag(
                                i,
                                stem,
                                Tag::PresentVerb,
                            ));
                        }
                    }
                }
                // a past-tense irregular verb keeps its surface form but is
                // retagged toward the participle
                Tag::PastVerb if lexicon.is_irregular(token.lemma_or_text()) => {
                    corrections.push(Correction::retag(i, Tag::PastParticiple));
                }
                _ => {}
            }
        }

        corrections
    }
}

/// Agreement via the dependency parse: each subject edge is checked against
/// its head verb.
#[derive(Debug, Clone, Copy, Default)]
pub struct DependencyAgreement;

impl Transform for DependencyAgreement {
    fn name(&self) -> &'static str {
        "dependency-agreement"
    }

    fn corrections(&self, tokens: &[Token], _lexicon: &Lexicon) -> Vec<Correction> {
        let mut corrections = Vec::new();

        for subject in tokens {
            let head = match &subject.dependency {
                Some(dep) if dep.relation == Relation::Subject => dep.head,
                _ => continue,
            };
            let verb = match tokens.get(head) {
                Some(verb) => verb,
                None => continue,
            };

            let singular_subject = matches!(
                subject.tag,
                Tag::SingularNoun | Tag::ProperNoun | Tag::Pronoun
            ) && (subject.tag != Tag::Pronoun || is_singular_pronoun(&subject.text));
            let plural_subject = matches!(subject.tag, Tag::PluralNoun | Tag::ProperNounPlural);

            let correct_form =
                if singular_subject && matches!(verb.tag, Tag::BaseVerb | Tag::PresentVerb) {
                    if is_singular_pronoun(&subject.text) && verb.text == "do" {
                        Some("does".to_string())
                    } else {
                        Some(third_singular(verb.lemma_or_text()))
                    }
                } else if plural_subject && verb.tag == Tag::PresentThirdVerb {
                    Some(verb.lemma_or_text().to_string())
                } else if is_singular_pronoun(&subject.text) {
                    contraction(&verb.text).map(str::to_string)
                } else {
                    None
                };

            if let Some(form) = correct_form {
                if form != verb.text {
                    corrections.push(Correction::replace(head, form));
                }
            }
        }

        corrections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::{Annotate, HeuristicAnnotator};

    fn corrections_for(transform: &dyn Fn(&[Token]) -> Vec<Correction>, text: &str) -> Vec<Correction> {
        let tokens = HeuristicAnnotator::new().annotate(text).unwrap();
        transform(&tokens)
    }

    fn adjacency(text: &str) -> Vec<Correction> {
        corrections_for(
            &|tokens| SubjectVerbAgreement.corrections(tokens, Lexicon::shared()),
            text,
        )
    }

    fn dependency(text: &str) -> Vec<Correction> {
        corrections_for(
            &|tokens| DependencyAgreement.corrections(tokens, Lexicon::shared()),
            text,
        )
    }

    #[test]
    fn third_singular_suffix_selection() {
        assert_eq!(third_singular("go"), "goes");
        assert_eq!(third_singular("watch"), "watches");
        assert_eq!(third_singular("fix"), "fixes");
        assert_eq!(third_singular("walk"), "walks");
    }

    #[test]
    fn stripping_prefers_the_lemma() {
        assert_eq!(strip_third_singular("goes", Some("go")), Some("go".into()));
        assert_eq!(
            strip_third_singular("chases", Some("chase")),
            Some("chase".into())
        );
        // no lemma to validate against: no stem rather than a guess
        assert_eq!(strip_third_singular("watches", None), None);
        assert_eq!(strip_third_singular("chases", None), None);
        // mismatching lemma: no correction rather than a wrong stem
        assert_eq!(strip_third_singular("lenses", Some("lens")), Some("lens".into()));
        assert_eq!(strip_third_singular("bus", Some("bus")), None);
    }

    #[test]
    fn singular_noun_with_plural_verb() {
        let corrections = adjacency("the man go to school");
        assert_eq!(corrections.len(), 1);
        assert_eq!(corrections[0].replacement.as_deref(), Some("goes"));
        assert_eq!(corrections[0].retag, Some(Tag::PresentThirdVerb));
    }

    #[test]
    fn plural_noun_with_singular_verb() {
        let corrections = adjacency("the cats chases the mouse");
        assert_eq!(corrections.len(), 1);
        assert_eq!(corrections[0].replacement.as_deref(), Some("chase"));
        assert_eq!(corrections[0].retag, Some(Tag::PresentVerb));
    }

    #[test]
    fn lemma_less_singular_verb_is_left_alone() {
        // an annotator that tags but does not lemmatize must not trigger a
        // guessed stem like "chas"
        let tokens = vec![
            Token::new("the", Tag::Determiner, (0, 3)),
            Token::new("cats", Tag::PluralNoun, (4, 8)),
            Token::new("chases", Tag::PresentThirdVerb, (9, 15)),
        ];
        assert!(SubjectVerbAgreement
            .corrections(&tokens, Lexicon::shared())
            .is_empty());
    }

    #[test]
    fn agreeing_sentence_is_left_alone() {
        assert!(adjacency("the cats chase the mouse").is_empty());
        assert!(adjacency("the man goes to school").is_empty());
    }

    #[test]
    fn irregular_past_is_retagged_only() {
        let corrections = adjacency("the man went home");
        assert_eq!(corrections.len(), 1);
        assert_eq!(corrections[0].replacement, None);
        assert_eq!(corrections[0].retag, Some(Tag::PastParticiple));
    }

    #[test]
    fn dependency_variant_corrects_pronoun_subject() {
        let corrections = dependency("he go to school");
        assert_eq!(corrections.len(), 1);
        assert_eq!(corrections[0].replacement.as_deref(), Some("goes"));
    }

    #[test]
    fn dependency_variant_special_cases_do() {
        let corrections = dependency("she do the work");
        assert_eq!(corrections[0].replacement.as_deref(), Some("does"));
    }

    #[test]
    fn dependency_variant_reduces_to_lemma_for_plural_subject() {
        let corrections = dependency("the dogs barks in a park");
        assert_eq!(corrections.len(), 1);
        assert_eq!(corrections[0].replacement.as_deref(), Some("bark"));
    }

    #[test]
    fn contraction_is_a_direct_lookup() {
        let corrections = dependency("he don't care");
        assert_eq!(corrections.len(), 1);
        assert_eq!(corrections[0].replacement.as_deref(), Some("doesn't"));
    }

    #[test]
    fn plural_pronoun_subject_is_not_singularized() {
        assert!(dependency("they go to school").is_empty());
    }
}
