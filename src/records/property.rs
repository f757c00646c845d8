//! Property records owned by the landlord.

use serde::{Deserialize, Serialize};

use super::Collection;
use crate::error::{Result, StoreError};
use crate::ids::{PropertyId, TenantId};

/// A rental property. `tenant_id` is a soft reference to the occupying
/// tenant; `None` means the property is vacant.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub tenant_id: Option<TenantId>,
    #[serde(default)]
    pub image_uri: Option<String>,
}

impl Property {
    /// Creates a vacant property with a freshly generated id.
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Property {
            id: PropertyId::generate(),
            name: name.into(),
            address: address.into(),
            tenant_id: None,
            image_uri: None,
        }
    }

    pub fn is_vacant(&self) -> bool {
        self.tenant_id.is_none()
    }
}

impl Collection for Property {
    type Id = PropertyId;

    const STORAGE_KEY: &'static str = "@properties";

    fn id(&self) -> &PropertyId {
        &self.id
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(StoreError::Validation(
                "property name must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_property_is_vacant() {
        let property = Property::new("Sunset Apartments", "1 Main St");
        assert!(property.is_vacant());
    }

    #[test]
    fn test_null_tenant_id_round_trips() {
        let property = Property::new("Sunset Apartments", "1 Main St");
        let json = serde_json::to_string(&property).unwrap();
        assert!(json.contains("\"tenantId\":null"));

        let back: Property = serde_json::from_str(&json).unwrap();
        assert_eq!(back, property);
    }

    #[test]
    fn test_blank_name_fails_validation() {
        let property = Property::new("", "1 Main St");
        assert!(matches!(
            property.validate(),
            Err(StoreError::Validation(_))
        ));
    }
}
