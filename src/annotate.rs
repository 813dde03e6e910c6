//! The annotation contract the pipeline consumes, and a small built-in
//! annotator.
//!
//! The correction rules are driven by part-of-speech tags, lemmas,
//! dependency edges and entity labels produced by an external NLP model.
//! That model is abstracted behind [`Annotate`]; everything it returns is
//! taken at face value and never second-guessed by the rules.

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::lexicon::Lexicon;
use crate::text;
use crate::types::{Entity, Relation, Tag, Token};
use crate::Error;

/// Produces annotated tokens for a single sentence.
///
/// Implementations wrap whatever tagger/parser/NER backend is available.
/// Failure is fatal to the pipeline: there is no fallback annotation and the
/// caller does not retry.
pub trait Annotate {
    fn annotate(&self, sentence: &str) -> Result<Vec<Token>, Error>;
}

impl<'a, T> Annotate for &'a T
where
    T: Annotate,
{
    fn annotate(&self, sentence: &str) -> Result<Vec<Token>, Error> {
        (*self).annotate(sentence)
    }
}

/// Word entry: surface form, Penn tag, lemma (when it differs from the
/// surface form in a way the rules care about).
const VOCABULARY: &[(&str, &str, &str)] = &[
    // determiners
    ("a", "DT", "a"),
    ("an", "DT", "an"),
    ("the", "DT", "the"),
    ("this", "DT", "this"),
    ("that", "DT", "that"),
    ("these", "DT", "these"),
    ("those", "DT", "those"),
    // pronouns
    ("i", "PRP", "i"),
    ("you", "PRP", "you"),
    ("he", "PRP", "he"),
    ("she", "PRP", "she"),
    ("it", "PRP", "it"),
    ("we", "PRP", "we"),
    ("they", "PRP", "they"),
    ("me", "PRP", "me"),
    ("him", "PRP", "him"),
    ("her", "PRP", "her"),
    ("us", "PRP", "us"),
    ("them", "PRP", "them"),
    // prepositions and conjunctions
    ("to", "IN", "to"),
    ("of", "IN", "of"),
    ("in", "IN", "in"),
    ("on", "IN", "on"),
    ("at", "IN", "at"),
    ("for", "IN", "for"),
    ("with", "IN", "with"),
    ("from", "IN", "from"),
    ("by", "IN", "by"),
    ("into", "IN", "into"),
    ("about", "IN", "about"),
    ("and", "CC", "and"),
    ("or", "CC", "or"),
    ("but", "CC", "but"),
    // adverbs
    ("yesterday", "RB", "yesterday"),
    ("today", "RB", "today"),
    ("tomorrow", "RB", "tomorrow"),
    ("here", "RB", "here"),
    ("there", "RB", "there"),
    ("now", "RB", "now"),
    ("home", "RB", "home"),
    ("not", "RB", "not"),
    ("never", "RB", "never"),
    ("always", "RB", "always"),
    // adjectives
    ("big", "JJ", "big"),
    ("small", "JJ", "small"),
    ("good", "JJ", "good"),
    ("bad", "JJ", "bad"),
    ("new", "JJ", "new"),
    ("old", "JJ", "old"),
    ("happy", "JJ", "happy"),
    ("young", "JJ", "young"),
    // nouns
    ("man", "NN", "man"),
    ("woman", "NN", "woman"),
    ("cat", "NN", "cat"),
    ("dog", "NN", "dog"),
    ("mouse", "NN", "mouse"),
    ("apple", "NN", "apple"),
    ("table", "NN", "table"),
    ("school", "NN", "school"),
    ("market", "NN", "market"),
    ("park", "NN", "park"),
    ("house", "NN", "house"),
    ("boy", "NN", "boy"),
    ("girl", "NN", "girl"),
    ("car", "NN", "car"),
    ("bus", "NN", "bus"),
    ("book", "NN", "book"),
    ("teacher", "NN", "teacher"),
    ("student", "NN", "student"),
    ("tree", "NN", "tree"),
    ("bird", "NN", "bird"),
    ("church", "NN", "church"),
    ("city", "NN", "city"),
    ("child", "NN", "child"),
    ("foot", "NN", "foot"),
    ("person", "NN", "person"),
    // irregular plurals
    ("men", "NNS", "man"),
    ("women", "NNS", "woman"),
    ("children", "NNS", "child"),
    ("mice", "NNS", "mouse"),
    ("feet", "NNS", "foot"),
    ("people", "NNS", "person"),
    // verbs, base / non-3rd-person present
    ("go", "VBP", "go"),
    ("chase", "VBP", "chase"),
    ("eat", "VBP", "eat"),
    ("run", "VBP", "run"),
    ("walk", "VBP", "walk"),
    ("like", "VBP", "like"),
    ("see", "VBP", "see"),
    ("play", "VBP", "play"),
    ("bark", "VBP", "bark"),
    ("read", "VBP", "read"),
    ("write", "VBP", "write"),
    ("drink", "VBP", "drink"),
    ("take", "VBP", "take"),
    ("make", "VBP", "make"),
    ("know", "VBP", "know"),
    ("come", "VBP", "come"),
    ("give", "VBP", "give"),
    ("find", "VBP", "find"),
    ("tell", "VBP", "tell"),
    ("teach", "VBP", "teach"),
    ("watch", "VBP", "watch"),
    ("wash", "VBP", "wash"),
    ("fix", "VBP", "fix"),
    ("push", "VBP", "push"),
    ("pass", "VBP", "pass"),
    ("miss", "VBP", "miss"),
    ("do", "VBP", "do"),
    ("have", "VBP", "have"),
    ("am", "VBP", "be"),
    ("are", "VBP", "be"),
    // verbs, 3rd-person singular present
    ("goes", "VBZ", "go"),
    ("chases", "VBZ", "chase"),
    ("eats", "VBZ", "eat"),
    ("runs", "VBZ", "run"),
    ("walks", "VBZ", "walk"),
    ("likes", "VBZ", "like"),
    ("sees", "VBZ", "see"),
    ("plays", "VBZ", "play"),
    ("barks", "VBZ", "bark"),
    ("does", "VBZ", "do"),
    ("has", "VBZ", "have"),
    ("is", "VBZ", "be"),
    ("teaches", "VBZ", "teach"),
    ("watches", "VBZ", "watch"),
    ("washes", "VBZ", "wash"),
    // verbs, past tense
    ("went", "VBD", "go"),
    ("ate", "VBD", "eat"),
    ("ran", "VBD", "run"),
    ("walked", "VBD", "walk"),
    ("chased", "VBD", "chase"),
    ("was", "VBD", "be"),
    ("were", "VBD", "be"),
    ("did", "VBD", "do"),
    ("had", "VBD", "have"),
    ("saw", "VBD", "see"),
    ("barked", "VBD", "bark"),
    // verbs, past participle
    ("gone", "VBN", "go"),
    ("eaten", "VBN", "eat"),
    ("been", "VBN", "be"),
    ("done", "VBN", "do"),
    ("seen", "VBN", "see"),
    ("taken", "VBN", "take"),
    // verbs, gerund
    ("going", "VBG", "go"),
    ("eating", "VBG", "eat"),
    ("running", "VBG", "run"),
    ("being", "VBG", "be"),
    ("chasing", "VBG", "chase"),
    // auxiliaries and modals
    ("don't", "AUX", "do"),
    ("doesn't", "AUX", "do"),
    ("hasn't", "AUX", "have"),
    ("haven't", "AUX", "have"),
    ("can", "MD", "can"),
    ("will", "MD", "will"),
    ("should", "MD", "should"),
    ("would", "MD", "would"),
    ("could", "MD", "could"),
    // titles (already canonicalized by the abbreviation pass)
    ("dr.", "NNP", "dr."),
    ("mr.", "NNP", "mr."),
    ("mrs.", "NNP", "mrs."),
    ("ms.", "NNP", "ms."),
    ("prof.", "NNP", "prof."),
    ("st.", "NNP", "st."),
];

/// Entity labels for a handful of names, enough for demos and tests.
const ENTITIES: &[(&str, Entity)] = &[
    ("smith", Entity::Person),
    ("jones", Entity::Person),
    ("john", Entity::Person),
    ("mary", Entity::Person),
    ("london", Entity::GeoPolitical),
    ("paris", Entity::GeoPolitical),
    ("france", Entity::GeoPolitical),
    ("google", Entity::Organization),
    ("everest", Entity::Location),
];

struct WordEntry {
    tag: Tag,
    lemma: &'static str,
}

lazy_static! {
    static ref WORDS: HashMap<&'static str, WordEntry> = VOCABULARY
        .iter()
        .map(|(word, penn, lemma)| {
            (
                *word,
                WordEntry {
                    tag: Tag::from_penn(penn),
                    lemma,
                },
            )
        })
        .collect();
    static ref ENTITY_MAP: HashMap<&'static str, Entity> =
        ENTITIES.iter().map(|(word, e)| (*word, e.clone())).collect();
}

/// A vocabulary-and-suffix annotator.
///
/// This is not a linguistic model. It covers enough common English for the
/// reference CLI and the test suite to run without an external tagger; real
/// deployments should implement [`Annotate`] against a proper model.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicAnnotator;

impl HeuristicAnnotator {
    pub fn new() -> Self {
        HeuristicAnnotator
    }

    fn tag_word(&self, word: &str) -> (Tag, Option<String>) {
        let lower = word.to_lowercase();

        if let Some(entry) = WORDS.get(lower.as_str()) {
            return (entry.tag.clone(), Some(entry.lemma.to_string()));
        }

        if !word.chars().any(char::is_alphanumeric) {
            return (Tag::Other(word.to_string()), None);
        }

        if lower.len() > 4 && lower.ends_with("ing") {
            return (Tag::Gerund, None);
        }

        if lower.len() > 3 && lower.ends_with("ed") {
            return (Tag::PastVerb, None);
        }

        // regular plural of a known singular noun
        if let Some(stem) = lower
            .strip_suffix("es")
            .into_iter()
            .chain(lower.strip_suffix('s'))
            .find(|stem| {
                WORDS
                    .get(*stem)
                    .map_or(false, |entry| entry.tag == Tag::SingularNoun)
            })
        {
            return (Tag::PluralNoun, Some(stem.to_string()));
        }

        if crate::utils::starts_uppercase(word) {
            return (Tag::ProperNoun, None);
        }

        if lower.ends_with('s') {
            return (Tag::PluralNoun, None);
        }

        (Tag::SingularNoun, None)
    }
}

impl Annotate for HeuristicAnnotator {
    fn annotate(&self, sentence: &str) -> Result<Vec<Token>, Error> {
        let lexicon = Lexicon::shared();

        let mut tokens: Vec<Token> = text::tokenize(sentence, lexicon)
            .into_iter()
            .map(|raw| {
                let (tag, lemma) = self.tag_word(raw.text);
                let mut token = Token::new(raw.text, tag, raw.char_span);
                if let Some(lemma) = lemma {
                    token = token.with_lemma(lemma);
                }
                if let Some(entity) = ENTITY_MAP.get(raw.text.to_lowercase().as_str()) {
                    token = token.with_entity(entity.clone());
                }
                token
            })
            .collect();

        // one nominal subject per sentence: the last noun or pronoun before
        // the first (possibly auxiliary) verb
        let verb = tokens
            .iter()
            .position(|t| t.tag.is_verb() || matches!(&t.tag, Tag::Other(s) if s == "AUX"));
        if let Some(verb) = verb {
            let subject = tokens[..verb]
                .iter()
                .rposition(|t| t.tag.is_noun() || t.tag == Tag::Pronoun);
            if let Some(subject) = subject {
                tokens[subject].dependency = Some(crate::types::Dependency {
                    relation: Relation::Subject,
                    head: verb,
                });
            }
        }

        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_scenario_sentence() {
        let tokens = HeuristicAnnotator::new()
            .annotate("the cats chases the mouse .")
            .unwrap();

        let tags: Vec<_> = tokens.iter().map(|t| t.tag.clone()).collect();
        assert_eq!(
            tags,
            vec![
                Tag::Determiner,
                Tag::PluralNoun,
                Tag::PresentThirdVerb,
                Tag::Determiner,
                Tag::SingularNoun,
                Tag::Other(".".into()),
            ]
        );
        assert_eq!(tokens[1].lemma_or_text(), "cat");
        assert_eq!(tokens[2].lemma_or_text(), "chase");
    }

    #[test]
    fn finds_the_subject_of_the_first_verb() {
        let tokens = HeuristicAnnotator::new()
            .annotate("the man go to school")
            .unwrap();

        let dependency = tokens[1].dependency.as_ref().unwrap();
        assert_eq!(dependency.relation, Relation::Subject);
        assert_eq!(dependency.head, 2);
        assert!(tokens[0].dependency.is_none());
    }

    #[test]
    fn labels_known_entities() {
        let tokens = HeuristicAnnotator::new().annotate("smith went to london").unwrap();
        assert_eq!(tokens[0].entity, Some(Entity::Person));
        assert_eq!(tokens[3].entity, Some(Entity::GeoPolitical));
    }

    #[test]
    fn unknown_capitalized_word_is_a_proper_noun() {
        let tokens = HeuristicAnnotator::new().annotate("Kowalski left").unwrap();
        assert_eq!(tokens[0].tag, Tag::ProperNoun);
    }
}
