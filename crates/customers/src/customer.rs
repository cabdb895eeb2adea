use serde::{Deserialize, Serialize};

use numibank_core::{CustomerId, Entity};

/// Customer identity record.
///
/// The id is generated at construction and is immutable; the name is stored
/// verbatim (no normalization, no uniqueness check — names may repeat).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
}

impl Customer {
    /// Register a new customer under a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CustomerId::new(),
            name: name.into(),
        }
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
