//! Rule-based English grammar correction over part-of-speech tagged tokens.
//!
//! # Overview
//!
//! gramit has the following core abstractions:
//! - An [Annotate][annotate::Annotate] implementation producing tagged,
//!   lemmatized, dependency-parsed and entity-labeled tokens for a sentence.
//!   The crate ships a vocabulary-based
//!   [HeuristicAnnotator][annotate::HeuristicAnnotator] for demos and tests;
//!   real deployments wrap an actual NLP model.
//! - A [Corrector][correct::Corrector] running a fixed, ordered sequence of
//!   correction stages: abbreviation normalization, entity/proper-noun
//!   capitalization, article agreement, subject-verb agreement, noun form
//!   and irregular-verb normalization, then sentence-initial capitalization
//!   and punctuation spacing cleanup.
//!
//! # Examples
//!
//! Correct a text:
//!
//! ```no_run
//! use gramit::{annotate::HeuristicAnnotator, Corrector};
//!
//! let corrector = Corrector::new(HeuristicAnnotator::new());
//!
//! assert_eq!(
//!     corrector.correct("the cats chases the mouse.")?,
//!     "The cats chase the mouse."
//! );
//! # Ok::<(), gramit::Error>(())
//! ```
//!
//! Correct a sentence in place and inspect what was applied:
//!
//! ```no_run
//! use gramit::{annotate::HeuristicAnnotator, Corrector};
//!
//! let corrector = Corrector::new(HeuristicAnnotator::new());
//!
//! let (corrected, applied) = corrector.correct_with_trace("The dogs barks in a park.")?;
//! assert_eq!(corrected, "The dogs bark in a park.");
//! assert_eq!(applied[0].replacement, "bark");
//! assert_eq!(applied[0].source, "dependency-agreement");
//! # Ok::<(), gramit::Error>(())
//! ```

use thiserror::Error;

pub mod annotate;
pub mod apply;
pub mod correct;
pub mod lexicon;
pub mod text;
pub mod transform;
pub mod types;
pub(crate) mod utils;

pub use correct::Corrector;

#[derive(Error, Debug)]
pub enum Error {
    /// The external tagging/parsing service failed to load or respond.
    /// Fatal to the pipeline: no partial output is produced and the call
    /// is not retried.
    #[error("annotator unavailable: {reason}")]
    AnnotatorUnavailable { reason: String },
}
