//! Tenant records: the people renting the landlord's properties.

use serde::{Deserialize, Serialize};

use super::Collection;
use crate::error::{Result, StoreError};
use crate::ids::TenantId;

/// A tenant as entered on the landlord's tenant screens.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: TenantId,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    #[serde(default)]
    pub image_uri: Option<String>,
}

impl Tenant {
    /// Creates a tenant with a freshly generated id and no photo.
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Tenant {
            id: TenantId::generate(),
            name: name.into(),
            phone_number: phone_number.into(),
            email: email.into(),
            image_uri: None,
        }
    }

    /// Case-insensitive match against the fields the tenant list searches.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.phone_number.to_lowercase().contains(&query)
            || self.email.to_lowercase().contains(&query)
    }
}

impl Collection for Tenant {
    type Id = TenantId;

    const STORAGE_KEY: &'static str = "@tenants";

    fn id(&self) -> &TenantId {
        &self.id
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(StoreError::Validation(
                "tenant name must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
