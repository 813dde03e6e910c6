//! Tag-conditioned rule transforms and the stage machinery that runs them.
//!
//! Each transform reads the *current* token list and proposes corrections;
//! it never mutates tokens itself. The pipeline applies stages in a fixed
//! order with last-write-wins semantics: when a later stage targets a token
//! an earlier stage already corrected, the later result replaces the earlier
//! one. [`merge`] logs every such overwrite so the behavior stays auditable.

use enum_dispatch::enum_dispatch;
use log::{debug, warn};

use crate::lexicon::Lexicon;
use crate::types::{Correction, Token};

mod agreement;
mod article;
mod casing;
mod noun;
mod verb;

pub use agreement::{DependencyAgreement, SubjectVerbAgreement};
pub use article::ArticleAgreement;
pub use casing::EntityCasing;
pub use noun::NounForms;
pub use verb::IrregularVerbs;

/// A single correction rule operating on an annotated token list.
#[enum_dispatch]
pub trait Transform {
    /// Stable stage name, used in logs and correction traces.
    fn name(&self) -> &'static str;

    /// Proposes corrections against the current token list, at most one per
    /// token. A rule that cannot determine a correction for a token simply
    /// proposes none.
    fn corrections(&self, tokens: &[Token], lexicon: &Lexicon) -> Vec<Correction>;
}

/// The closed set of token-level transform stages.
#[enum_dispatch(Transform)]
#[derive(Debug, Clone)]
pub enum Stage {
    EntityCasing,
    ArticleAgreement,
    SubjectVerbAgreement,
    DependencyAgreement,
    NounForms,
    IrregularVerbs,
}

/// Stage order of the token-rewriting pipeline. The placement of
/// [`IrregularVerbs`] after [`SubjectVerbAgreement`] is deliberate: the
/// normalization pass wins when both target the same token.
pub fn rewrite_stages() -> Vec<Stage> {
    vec![
        EntityCasing.into(),
        ArticleAgreement.into(),
        SubjectVerbAgreement.into(),
        NounForms.into(),
        IrregularVerbs.into(),
    ]
}

/// Stage order of the offset-preserving (trace) pipeline, which relies on a
/// dependency parse instead of tag adjacency.
pub fn trace_stages() -> Vec<Stage> {
    vec![
        DependencyAgreement.into(),
        ArticleAgreement.into(),
        EntityCasing.into(),
    ]
}

/// Folds one stage's corrections into the token list.
///
/// `corrected_by` records, per token, the name of the last stage that
/// changed it; an overwrite of an earlier stage's result is reported via
/// `warn!` but still applied (last write wins).
pub fn merge(
    tokens: &mut [Token],
    stage: &'static str,
    corrections: Vec<Correction>,
    corrected_by: &mut [Option<&'static str>],
) {
    for correction in corrections {
        let token = match tokens.get_mut(correction.index) {
            Some(token) => token,
            None => {
                warn!(
                    "{}: correction targets token {} out of {}, skipping",
                    stage,
                    correction.index,
                    corrected_by.len()
                );
                continue;
            }
        };

        if let Some(earlier) = corrected_by[correction.index] {
            warn!(
                "{} overwrites a correction from {} on {:?}",
                stage, earlier, token.text
            );
        }

        if let Some(replacement) = correction.replacement {
            debug!("{}: {:?} -> {:?}", stage, token.text, replacement);
            token.text = replacement;
        }
        if let Some(tag) = correction.retag {
            debug!("{}: retag {:?} as {}", stage, token.text, tag);
            token.tag = tag;
        }

        corrected_by[correction.index] = Some(stage);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tag;

    #[test]
    fn later_stage_overwrites_earlier_correction() {
        let mut tokens = vec![Token::new("go", Tag::PresentVerb, (0, 2))];
        let mut corrected_by = vec![None];

        merge(
            &mut tokens,
            "first",
            vec![Correction::replace(0, "goes")],
            &mut corrected_by,
        );
        merge(
            &mut tokens,
            "second",
            vec![Correction::replace(0, "went")],
            &mut corrected_by,
        );

        assert_eq!(tokens[0].text, "went");
        assert_eq!(corrected_by[0], Some("second"));
    }

    #[test]
    fn out_of_range_correction_is_skipped() {
        let mut tokens = vec![Token::new("go", Tag::PresentVerb, (0, 2))];
        let mut corrected_by = vec![None];

        merge(
            &mut tokens,
            "stage",
            vec![Correction::replace(7, "oops")],
            &mut corrected_by,
        );

        assert_eq!(tokens[0].text, "go");
    }

    #[test]
    fn retag_only_correction_keeps_the_text() {
        let mut tokens = vec![Token::new("went", Tag::PastVerb, (0, 4))];
        let mut corrected_by = vec![None];

        merge(
            &mut tokens,
            "stage",
            vec![Correction::retag(0, Tag::PastParticiple)],
            &mut corrected_by,
        );

        assert_eq!(tokens[0].text, "went");
        assert_eq!(tokens[0].tag, Tag::PastParticiple);
    }
}
