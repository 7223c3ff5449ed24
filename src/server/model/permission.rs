//! App-level permission catalog.

use crate::{model::guild::PermissionDto, server::model::tier::Tier};

/// Named capability from the permission catalog.
///
/// The catalog is seeded by migration; `tier` classifies which tier's role
/// receives the permission.
#[derive(Debug, Clone, PartialEq)]
pub struct Permission {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    /// Tier the permission belongs to, `None` for untiered permissions.
    pub tier: Option<Tier>,
}

impl Permission {
    pub fn from_entity(entity: entity::permission::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            description: entity.description,
            tier: entity.role_note.as_deref().and_then(Tier::from_note),
        }
    }

    pub fn into_dto(self) -> PermissionDto {
        PermissionDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            description: self.description,
            role_note: self.tier.map(|tier| tier.note().to_string()),
        }
    }
}
