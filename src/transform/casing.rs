//! Named-entity and proper-noun capitalization.

use super::Transform;
use crate::lexicon::Lexicon;
use crate::types::{Correction, Entity, Tag, Token};
use crate::utils::{capitalize_first, starts_uppercase};

fn is_named_entity(entity: &Entity) -> bool {
    matches!(
        entity,
        Entity::Person
            | Entity::Organization
            | Entity::GeoPolitical
            | Entity::Location
            | Entity::Product
            | Entity::Event
    )
}

/// Capitalizes the first letter of named entities and proper nouns.
///
/// One policy covers both triggers: a token is capitalized when its entity
/// label is one of the six named categories, or when it is tagged as a
/// proper noun, and it is not already capitalized.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityCasing;

impl Transform for EntityCasing {
    fn name(&self) -> &'static str {
        "entity-casing"
    }

    fn corrections(&self, tokens: &[Token], _lexicon: &Lexicon) -> Vec<Correction> {
        tokens
            .iter()
            .enumerate()
            .filter_map(|(i, token)| {
                let triggered = token.entity.as_ref().map_or(false, is_named_entity)
                    || matches!(token.tag, Tag::ProperNoun | Tag::ProperNounPlural);

                if triggered && !starts_uppercase(&token.text) {
                    Some(Correction::replace(i, capitalize_first(&token.text)))
                } else {
                    None
                }
            })
            .collect()
    }
}
