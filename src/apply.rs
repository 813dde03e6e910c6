//! Offset-preserving application of corrections to a sentence.
//!
//! Offsets always refer to the original sentence, so corrections are
//! validated against an occupancy mask in proposal order and then patched
//! in from right to left; spans never drift, whatever the replacement
//! lengths are.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::types::AppliedCorrection;

/// Why a proposed correction was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropReason {
    /// The recorded span does not match the original text at apply time.
    MalformedOffset,
    /// The span overlaps a correction applied earlier in transform order.
    Overlap,
}

/// A correction rejected by [`apply_corrections`], kept for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroppedCorrection {
    pub correction: AppliedCorrection,
    pub reason: DropReason,
}

/// Result of patching one sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub text: String,
    pub applied: Vec<AppliedCorrection>,
    pub dropped: Vec<DroppedCorrection>,
}

/// Patches `sentence` with the given corrections.
///
/// Corrections are considered in the order given (transform-execution
/// order). One that no longer matches the original text is dropped as
/// [`DropReason::MalformedOffset`]; one that overlaps an already accepted
/// span is dropped as [`DropReason::Overlap`]. A dropped correction never
/// aborts the rest.
pub fn apply_corrections(sentence: &str, corrections: Vec<AppliedCorrection>) -> Outcome {
    let chars: Vec<char> = sentence.chars().collect();
    let mut occupied = vec![false; chars.len()];

    let mut applied = Vec::new();
    let mut dropped = Vec::new();

    for correction in corrections {
        let matches_original = correction.start <= correction.end
            && correction.end <= chars.len()
            && chars[correction.start..correction.end]
                .iter()
                .copied()
                .eq(correction.original.chars());

        if !matches_original {
            warn!(
                "dropping {} correction {:?} -> {:?}: span {}..{} does not match the sentence",
                correction.source,
                correction.original,
                correction.replacement,
                correction.start,
                correction.end
            );
            dropped.push(DroppedCorrection {
                correction,
                reason: DropReason::MalformedOffset,
            });
            continue;
        }

        if occupied[correction.start..correction.end].iter().any(|x| *x) {
            warn!(
                "dropping {} correction {:?} -> {:?}: span {}..{} overlaps an earlier correction",
                correction.source,
                correction.original,
                correction.replacement,
                correction.start,
                correction.end
            );
            dropped.push(DroppedCorrection {
                correction,
                reason: DropReason::Overlap,
            });
            continue;
        }

        occupied[correction.start..correction.end]
            .iter_mut()
            .for_each(|x| *x = true);
        applied.push(correction);
    }

    // patch right to left so earlier spans stay valid
    let mut chars = chars;
    let mut by_offset: Vec<&AppliedCorrection> = applied.iter().collect();
    by_offset.sort_by(|a, b| b.start.cmp(&a.start));

    for correction in by_offset {
        chars.splice(
            correction.start..correction.end,
            correction.replacement.chars(),
        );
    }

    Outcome {
        text: chars.into_iter().collect(),
        applied,
        dropped,
    }
}
