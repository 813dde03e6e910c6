//! Static lexical resources: irregular verb paradigms, abbreviation
//! canonicalization and the English stopword set.
//!
//! All tables are built once behind a [`lazy_static`] and never mutated
//! afterwards, so they can be shared freely across callers.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

/// Irregular verb paradigms keyed by lemma. The first listed form is the
/// past tense, the second (when present) the past participle. The "be"
/// paradigm carries its full form set.
const IRREGULAR_VERBS: &[(&str, &[&str])] = &[
    ("be", &["am", "is", "are", "was", "were", "been", "being"]),
    ("beat", &["beat", "beaten"]),
    ("become", &["became", "become"]),
    ("begin", &["began", "begun"]),
    ("bend", &["bent"]),
    ("bet", &["bet"]),
    ("bid", &["bid"]),
    ("bind", &["bound"]),
    ("bite", &["bit", "bitten"]),
    ("bleed", &["bled"]),
    ("blow", &["blew", "blown"]),
    ("break", &["broke", "broken"]),
    ("bring", &["brought"]),
    ("build", &["built"]),
    ("burn", &["burnt", "burned"]),
    ("burst", &["burst"]),
    ("buy", &["bought"]),
    ("catch", &["caught"]),
    ("choose", &["chose", "chosen"]),
    ("come", &["came", "come"]),
    ("cost", &["cost"]),
    ("cut", &["cut"]),
    ("deal", &["dealt"]),
    ("dig", &["dug"]),
    ("do", &["did", "done"]),
    ("draw", &["drew", "drawn"]),
    ("dream", &["dreamt", "dreamed"]),
    ("drink", &["drank", "drunk"]),
    ("drive", &["drove", "driven"]),
    ("eat", &["ate", "eaten"]),
    ("fall", &["fell", "fallen"]),
    ("feed", &["fed"]),
    ("feel", &["felt"]),
    ("fight", &["fought"]),
    ("find", &["found"]),
    ("fly", &["flew", "flown"]),
    ("forget", &["forgot", "forgotten"]),
    ("forgive", &["forgave", "forgiven"]),
    ("freeze", &["froze", "frozen"]),
    ("get", &["got", "gotten"]),
    ("give", &["gave", "given"]),
    ("go", &["went", "gone"]),
    ("grow", &["grew", "grown"]),
    ("hang", &["hung"]),
    ("have", &["had"]),
    ("hear", &["heard"]),
    ("hide", &["hid", "hidden"]),
    ("hit", &["hit"]),
    ("hold", &["held"]),
    ("hurt", &["hurt"]),
    ("keep", &["kept"]),
    ("know", &["knew", "known"]),
    ("lay", &["laid"]),
    ("lead", &["led"]),
    ("leave", &["left"]),
    ("lend", &["lent"]),
    ("let", &["let"]),
    ("lie", &["lay", "lain"]),
    ("light", &["lit", "lighted"]),
    ("lose", &["lost"]),
    ("make", &["made"]),
    ("mean", &["meant"]),
    ("meet", &["met"]),
    ("pay", &["paid"]),
    ("put", &["put"]),
    ("read", &["read"]),
    ("ride", &["rode", "ridden"]),
    ("ring", &["rang", "rung"]),
    ("rise", &["rose", "risen"]),
    ("run", &["ran", "run"]),
    ("say", &["said"]),
    ("see", &["saw", "seen"]),
    ("sell", &["sold"]),
    ("send", &["sent"]),
    ("set", &["set"]),
    ("shake", &["shook", "shaken"]),
    ("shine", &["shone"]),
    ("shoot", &["shot"]),
    ("show", &["showed", "shown"]),
    ("shut", &["shut"]),
    ("sing", &["sang", "sung"]),
    ("sink", &["sank", "sunk"]),
    ("sit", &["sat"]),
    ("sleep", &["slept"]),
    ("speak", &["spoke", "spoken"]),
    ("spend", &["spent"]),
    ("stand", &["stood"]),
    ("steal", &["stole", "stolen"]),
    ("stick", &["stuck"]),
    ("strike", &["struck"]),
    ("swear", &["swore", "sworn"]),
    ("swim", &["swam", "swum"]),
    ("take", &["took", "taken"]),
    ("teach", &["taught"]),
    ("tear", &["tore", "torn"]),
    ("tell", &["told"]),
    ("think", &["thought"]),
    ("throw", &["threw", "thrown"]),
    ("understand", &["understood"]),
    ("wake", &["woke", "woken"]),
    ("wear", &["wore", "worn"]),
    ("win", &["won"]),
    ("write", &["wrote", "written"]),
];

/// Abbreviation canonicalization table. Keys are lowercase and include the
/// trailing period; values keep their canonical casing. "dr." appears twice
/// in the upstream word list with the same value; insertion order is kept
/// and the last definition wins, so the duplicate is a no-op.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("dr.", "Dr."),
    ("mr.", "Mr."),
    ("mrs.", "Mrs."),
    ("ms.", "Ms."),
    ("prof.", "Prof."),
    ("i.e.", "i.e."),
    ("e.g.", "e.g."),
    ("etc.", "etc."),
    ("vs.", "vs."),
    ("jr.", "Jr."),
    ("sr.", "Sr."),
    ("gov.", "Gov."),
    ("lt.", "Lt."),
    ("sgt.", "Sgt."),
    ("col.", "Col."),
    ("gen.", "Gen."),
    ("rep.", "Rep."),
    ("sen.", "Sen."),
    ("rev.", "Rev."),
    ("a.m.", "a.m."),
    ("p.m.", "p.m."),
    ("b.c.", "B.C."),
    ("a.d.", "A.D."),
    ("st.", "St."),
    ("ave.", "Ave."),
    ("blvd.", "Blvd."),
    ("rd.", "Rd."),
    ("dr.", "Dr."),
    ("mt.", "Mt."),
    ("ft.", "Ft."),
];

/// A small English stopword set in the spirit of the usual corpus lists.
/// The stopword stage keeps every token regardless of membership, so this
/// only needs to be representative.
const STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "you", "your", "he", "him", "his", "she",
    "her", "it", "its", "they", "them", "their", "what", "which", "who", "this", "that", "these",
    "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
    "does", "did", "a", "an", "the", "and", "but", "if", "or", "because", "as", "until", "while",
    "of", "at", "by", "for", "with", "about", "against", "between", "into", "through", "during",
    "before", "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off",
    "over", "under", "again", "then", "once", "here", "there", "when", "where", "why", "how",
    "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor",
    "not", "only", "own", "same", "so", "than", "too", "very", "can", "will", "just", "should",
    "now",
];

/// Read-only lexical lookup tables shared by all transforms.
pub struct Lexicon {
    irregular: HashMap<&'static str, &'static [&'static str]>,
    abbreviations: IndexMap<&'static str, &'static str>,
    stopwords: HashSet<&'static str>,
}

impl Lexicon {
    fn build() -> Self {
        let mut abbreviations = IndexMap::with_capacity(ABBREVIATIONS.len());
        for (key, canonical) in ABBREVIATIONS {
            // last-defined wins for duplicate keys
            abbreviations.insert(*key, *canonical);
        }

        Lexicon {
            irregular: IRREGULAR_VERBS.iter().cloned().collect(),
            abbreviations,
            stopwords: STOPWORDS.iter().cloned().collect(),
        }
    }

    /// The process-wide lexicon instance.
    pub fn shared() -> &'static Lexicon {
        lazy_static! {
            static ref LEXICON: Lexicon = Lexicon::build();
        }
        &LEXICON
    }

    /// Past tense and past participle of an irregular verb, keyed by lemma.
    /// Single-form paradigms use the same form for both.
    pub fn irregular_forms(&self, lemma: &str) -> Option<(&'static str, &'static str)> {
        self.irregular.get(lemma).map(|forms| {
            let past = forms[0];
            let participle = forms.get(1).copied().unwrap_or(past);
            (past, participle)
        })
    }

    /// Whether `lemma` is the base form of a known irregular verb.
    pub fn is_irregular(&self, lemma: &str) -> bool {
        self.irregular.contains_key(lemma)
    }

    /// Canonical form of an abbreviation. `lower` must be lowercased and
    /// include the trailing period.
    pub fn canonical_abbreviation(&self, lower: &str) -> Option<&'static str> {
        self.abbreviations.get(lower).copied()
    }

    pub fn is_stopword(&self, lower: &str) -> bool {
        self.stopwords.contains(lower)
    }
}
