//! Article ("a"/"an") agreement with the following word.

use super::Transform;
use crate::lexicon::Lexicon;
use crate::types::{Correction, Token};
use crate::utils::starts_with_vowel;
use itertools::Itertools;

/// Chooses between "a" and "an" based on the first letter of the next
/// token. Purely token-adjacent: the neighbor does not have to be the
/// article's grammatical head. A determiner with no following token is
/// left unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArticleAgreement;

impl Transform for ArticleAgreement {
    fn name(&self) -> &'static str {
        "article-agreement"
    }

    fn corrections(&self, tokens: &[Token], _lexicon: &Lexicon) -> Vec<Correction> {
        tokens
            .iter()
            .tuple_windows()
            .enumerate()
            .filter_map(|(i, (article, next)): (usize, (&Token, &Token))| {
                let vowel = starts_with_vowel(&next.text);
                match article.text.to_lowercase().as_str() {
                    "a" if vowel => Some(Correction::replace(i, "an")),
                    "an" if !vowel && next.text.chars().next().is_some() => {
                        Some(Correction::replace(i, "a"))
                    }
                    _ => None,
                }
            })
            .collect()
    }
}
