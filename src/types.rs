//! Fundamental types used by this crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Part-of-speech tag from a closed, Penn-Treebank-equivalent tagset.
///
/// Only the tags the correction rules dispatch on get a named variant;
/// everything else is carried through verbatim in [`Tag::Other`] so that an
/// unhandled tag is visible instead of silently compared as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    /// `NN`
    SingularNoun,
    /// `NNS`
    PluralNoun,
    /// `NNP`
    ProperNoun,
    /// `NNPS`
    ProperNounPlural,
    /// `PRP`
    Pronoun,
    /// `VB`
    BaseVerb,
    /// `VBP` (present, non-3rd-person-singular)
    PresentVerb,
    /// `VBZ` (present, 3rd-person-singular)
    PresentThirdVerb,
    /// `VBD`
    PastVerb,
    /// `VBN`
    PastParticiple,
    /// `VBG`
    Gerund,
    /// `DT`
    Determiner,
    /// Any tag the rules do not dispatch on.
    Other(String),
}

impl Tag {
    /// Parses a Penn Treebank tag string.
    pub fn from_penn(tag: &str) -> Self {
        match tag {
            "NN" => Tag::SingularNoun,
            "NNS" => Tag::PluralNoun,
            "NNP" => Tag::ProperNoun,
            "NNPS" => Tag::ProperNounPlural,
            "PRP" => Tag::Pronoun,
            "VB" => Tag::BaseVerb,
            "VBP" => Tag::PresentVerb,
            "VBZ" => Tag::PresentThirdVerb,
            "VBD" => Tag::PastVerb,
            "VBN" => Tag::PastParticiple,
            "VBG" => Tag::Gerund,
            "DT" => Tag::Determiner,
            other => Tag::Other(other.to_string()),
        }
    }

    /// The Penn Treebank spelling of this tag.
    pub fn as_penn(&self) -> &str {
        match self {
            Tag::SingularNoun => "NN",
            Tag::PluralNoun => "NNS",
            Tag::ProperNoun => "NNP",
            Tag::ProperNounPlural => "NNPS",
            Tag::Pronoun => "PRP",
            Tag::BaseVerb => "VB",
            Tag::PresentVerb => "VBP",
            Tag::PresentThirdVerb => "VBZ",
            Tag::PastVerb => "VBD",
            Tag::PastParticiple => "VBN",
            Tag::Gerund => "VBG",
            Tag::Determiner => "DT",
            Tag::Other(tag) => tag.as_str(),
        }
    }

    pub fn is_verb(&self) -> bool {
        matches!(
            self,
            Tag::BaseVerb
                | Tag::PresentVerb
                | Tag::PresentThirdVerb
                | Tag::PastVerb
                | Tag::PastParticiple
                | Tag::Gerund
        )
    }

    pub fn is_noun(&self) -> bool {
        matches!(
            self,
            Tag::SingularNoun | Tag::PluralNoun | Tag::ProperNoun | Tag::ProperNounPlural
        )
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_penn())
    }
}

/// Label of a dependency edge from a token to its syntactic head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relation {
    /// Nominal subject of the head verb.
    Subject,
    Other(String),
}

/// A labeled dependency edge. `head` is an index into the sentence's tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub relation: Relation,
    pub head: usize,
}

/// Coarse entity category assigned by the named-entity recognizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entity {
    Person,
    Organization,
    GeoPolitical,
    Location,
    Product,
    Event,
    Other(String),
}

/// A single annotated token of one sentence.
///
/// `char_span` refers to the *original* sentence the token was produced
/// from and is never re-based after a correction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub tag: Tag,
    pub lemma: Option<String>,
    pub dependency: Option<Dependency>,
    pub entity: Option<Entity>,
    /// Char start (inclusive) and end (exclusive) offset in the sentence.
    pub char_span: (usize, usize),
}

impl Token {
    pub fn new<S: Into<String>>(text: S, tag: Tag, char_span: (usize, usize)) -> Self {
        Token {
            text: text.into(),
            tag,
            lemma: None,
            dependency: None,
            entity: None,
            char_span,
        }
    }

    pub fn with_lemma<S: Into<String>>(mut self, lemma: S) -> Self {
        self.lemma = Some(lemma.into());
        self
    }

    pub fn with_dependency(mut self, relation: Relation, head: usize) -> Self {
        self.dependency = Some(Dependency { relation, head });
        self
    }

    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entity = Some(entity);
        self
    }

    /// The lemma if the annotator provided one, the surface text otherwise.
    pub fn lemma_or_text(&self) -> &str {
        self.lemma.as_deref().unwrap_or(&self.text)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// A change to one token proposed by a transform stage.
///
/// A stage proposes at most one correction per token. When several stages
/// target the same token, the stage that runs later overwrites the earlier
/// result (see [`merge`][crate::transform::merge]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    /// Index of the targeted token.
    pub index: usize,
    /// New surface text, if the text changes.
    pub replacement: Option<String>,
    /// New tag, if the tag changes.
    pub retag: Option<Tag>,
}

impl Correction {
    pub fn replace<S: Into<String>>(index: usize, replacement: S) -> Self {
        Correction {
            index,
            replacement: Some(replacement.into()),
            retag: None,
        }
    }

    pub fn replace_and_retag<S: Into<String>>(index: usize, replacement: S, tag: Tag) -> Self {
        Correction {
            index,
            replacement: Some(replacement.into()),
            retag: Some(tag),
        }
    }

    pub fn retag(index: usize, tag: Tag) -> Self {
        Correction {
            index,
            replacement: None,
            retag: Some(tag),
        }
    }
}

/// Audit record of one correction in the offset-preserving pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedCorrection {
    /// Name of the stage the correction came from.
    pub source: String,
    /// Surface text being replaced.
    pub original: String,
    /// Replacement text.
    pub replacement: String,
    /// Start char offset (inclusive) into the original sentence.
    pub start: usize,
    /// End char offset (exclusive) into the original sentence.
    pub end: usize,
}
