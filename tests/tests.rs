use lazy_static::lazy_static;
use quickcheck_macros::quickcheck;

use gramit::annotate::{Annotate, HeuristicAnnotator};
use gramit::types::Token;
use gramit::{Corrector, Error};

lazy_static! {
    static ref CORRECTOR: Corrector<HeuristicAnnotator> =
        Corrector::new(HeuristicAnnotator::new());
}

#[test]
fn can_correct_empty_text() {
    assert_eq!(CORRECTOR.correct("").unwrap(), "");
    assert_eq!(CORRECTOR.correct("   ").unwrap(), "");
}

#[quickcheck]
fn can_correct_anything(text: String) -> bool {
    CORRECTOR.correct(&text).is_ok()
}

#[test]
fn corrects_abbreviation_agreement_and_spacing() {
    assert_eq!(
        CORRECTOR.correct("The man go to the dr. yesterday.").unwrap(),
        "The man goes to the Dr. yesterday."
    );
}

#[test]
fn plural_subject_reduces_verb_to_base_form() {
    assert_eq!(
        CORRECTOR.correct("the cats chases the mouse.").unwrap(),
        "The cats chase the mouse."
    );
}

#[test]
fn article_agrees_with_vowel_initial_word() {
    assert_eq!(
        CORRECTOR.correct("a apple is on the tables.").unwrap(),
        "An apple is on the tables."
    );
}

#[test]
fn singular_pronoun_subject_gets_third_person_verb() {
    assert_eq!(
        CORRECTOR.correct("he go to school yesterday.").unwrap(),
        "He goes to school yesterday."
    );
}

#[test]
fn irregular_normalization_wins_over_agreement() {
    // agreement reduces "goes" to "go"; the irregular-verb stage runs later
    // and rewrites that to the canonical past, overwriting the agreement
    // result
    assert_eq!(
        CORRECTOR.correct("the dogs goes home.").unwrap(),
        "The dogs went home."
    );
}

#[test]
fn corrects_multi_sentence_text() {
    let input = "dr. smith and mr. jones are going to the market. \
                 the cats chases the mouse. a apple is on the tables. \
                 he go to school yesterday.";
    assert_eq!(
        CORRECTOR.correct(input).unwrap(),
        "Dr. Smith and Mr. Jones are going to the market. \
         The cats chase the mouse. An apple is on the tables. \
         He goes to school yesterday."
    );
}

#[test]
fn pipeline_is_idempotent_on_corrected_text() {
    for input in &[
        "The man go to the dr. yesterday.",
        "the cats chases the mouse.",
        "a apple is on the tables.",
        "he go to school yesterday.",
        "the dogs goes home.",
        "dr. smith and mr. jones are going to the market.",
    ] {
        let once = CORRECTOR.correct(input).unwrap();
        assert_eq!(CORRECTOR.correct(&once).unwrap(), once, "input: {}", input);
    }
}

#[test]
fn output_starts_uppercase_and_has_no_space_before_final_punctuation() {
    for input in &[
        "the bird sings.",
        "a old man walked home !",
        "he go to school yesterday.",
    ] {
        let corrected = CORRECTOR.correct(input).unwrap();
        assert!(
            corrected.chars().next().unwrap().is_uppercase(),
            "not capitalized: {}",
            corrected
        );
        assert!(
            !corrected.contains(" .") && !corrected.contains(" !") && !corrected.contains(" ?"),
            "stray space before punctuation: {}",
            corrected
        );
    }
}

#[test]
fn abbreviation_canonicalization_is_stable() {
    assert_eq!(
        CORRECTOR.correct("Dr. Smith is here.").unwrap(),
        "Dr. Smith is here."
    );
}

#[test]
fn trace_pipeline_patches_at_offsets() {
    let (corrected, applied) = CORRECTOR
        .correct_with_trace("The dogs barks in a park.")
        .unwrap();

    assert_eq!(corrected, "The dogs bark in a park.");
    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].source, "dependency-agreement");
    assert_eq!(applied[0].original, "barks");
    assert_eq!(applied[0].replacement, "bark");
    assert_eq!(applied[0].start, 9);
    assert_eq!(applied[0].end, 14);
}

#[test]
fn trace_pipeline_applies_several_corrections_in_one_pass() {
    let (corrected, applied) = CORRECTOR
        .correct_with_trace("he go to a apple market")
        .unwrap();

    assert_eq!(corrected, "he goes to an apple market");
    assert_eq!(applied.len(), 2);
}

#[test]
fn trace_pipeline_reports_no_corrections_for_clean_input() {
    let (corrected, applied) = CORRECTOR
        .correct_with_trace("The dogs bark in a park.")
        .unwrap();

    assert_eq!(corrected, "The dogs bark in a park.");
    assert!(applied.is_empty());
}

struct TagOnlyAnnotator(HeuristicAnnotator);

impl Annotate for TagOnlyAnnotator {
    fn annotate(&self, sentence: &str) -> Result<Vec<Token>, Error> {
        let mut tokens = self.0.annotate(sentence)?;
        for token in &mut tokens {
            token.lemma = None;
        }
        Ok(tokens)
    }
}

#[test]
fn verbs_without_lemmas_are_not_stemmed_by_guesswork() {
    // with no lemma to validate against, agreement must leave the verb
    // alone instead of producing a stem like "chas"
    let corrector = Corrector::new(TagOnlyAnnotator(HeuristicAnnotator::new()));
    assert_eq!(
        corrector.correct("the cats chases the mouse.").unwrap(),
        "The cats chases the mouse."
    );
}

struct UnavailableAnnotator;

impl Annotate for UnavailableAnnotator {
    fn annotate(&self, _sentence: &str) -> Result<Vec<Token>, Error> {
        Err(Error::AnnotatorUnavailable {
            reason: "model not loaded".into(),
        })
    }
}

#[test]
fn annotator_failure_is_fatal() {
    let corrector = Corrector::new(UnavailableAnnotator);
    assert!(matches!(
        corrector.correct("some text."),
        Err(Error::AnnotatorUnavailable { .. })
    ));
    assert!(corrector.correct_with_trace("some text.").is_err());
}
