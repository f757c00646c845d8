//! Joined display views over the base collections.
//!
//! The list screens never render a bare record: the property list shows each
//! property with its tenant, the maintenance list shows each request with
//! the property and tenant names, and the payment history is ordered most
//! recent first. These views resolve the soft references once, centrally,
//! instead of every screen scanning on its own.

use super::{find_by_id, RecordStore};
use crate::error::Result;
use crate::records::{MaintenanceRequest, Property, RentPayment, Tenant};
use crate::storage::KeyValueStorage;

/// A property with its occupying tenant attached, `None` when vacant or
/// when the reference dangles.
#[derive(Debug, Clone)]
pub struct PropertyOverview {
    pub property: Property,
    pub tenant: Option<Tenant>,
}

impl PropertyOverview {
    /// Case-insensitive match against the fields the property list
    /// searches: name, address and tenant name.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.property.name.to_lowercase().contains(&query)
            || self.property.address.to_lowercase().contains(&query)
            || self
                .tenant
                .as_ref()
                .is_some_and(|t| t.name.to_lowercase().contains(&query))
    }
}

/// A maintenance request enriched with the names of the referenced property
/// and tenant, for display.
#[derive(Debug, Clone)]
pub struct RequestDetails {
    pub request: MaintenanceRequest,
    pub property_name: Option<String>,
    pub tenant_name: Option<String>,
}

impl RequestDetails {
    /// Case-insensitive match against the fields the maintenance list
    /// searches: title, description, property name, tenant name and status.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.request.title.to_lowercase().contains(&query)
            || self.request.description.to_lowercase().contains(&query)
            || self
                .property_name
                .as_ref()
                .is_some_and(|n| n.to_lowercase().contains(&query))
            || self
                .tenant_name
                .as_ref()
                .is_some_and(|n| n.to_lowercase().contains(&query))
            || self.request.status.as_str().contains(&query)
    }
}

impl<S> RecordStore<S>
where
    S: KeyValueStorage,
{
    /// Loads all properties with their tenants attached.
    pub async fn property_overviews(&self) -> Result<Vec<PropertyOverview>> {
        let properties: Vec<Property> = self.load_or_empty().await?;
        let tenants: Vec<Tenant> = self.load_or_empty().await?;

        let overviews = super::join_by_reference(
            &properties,
            &tenants,
            |property: &Property| property.tenant_id.as_ref(),
        )
        .into_iter()
        .map(|(property, tenant)| PropertyOverview {
            property: property.clone(),
            tenant: tenant.cloned(),
        })
        .collect();

        Ok(overviews)
    }

    /// Loads all maintenance requests with property and tenant names
    /// attached. A dangling reference leaves the name `None`.
    pub async fn request_details(&self) -> Result<Vec<RequestDetails>> {
        let requests: Vec<MaintenanceRequest> = self.load_or_empty().await?;
        let properties: Vec<Property> = self.load_or_empty().await?;
        let tenants: Vec<Tenant> = self.load_or_empty().await?;

        let details = requests
            .into_iter()
            .map(|request| {
                let property_name =
                    find_by_id(&properties, &request.property_id)
                        .map(|p| p.name.clone());
                let tenant_name = find_by_id(&tenants, &request.tenant_id)
                    .map(|t| t.name.clone());
                RequestDetails { request, property_name, tenant_name }
            })
            .collect();

        Ok(details)
    }

    /// Loads all rent payments, most recent first.
    pub async fn payment_history(&self) -> Result<Vec<RentPayment>> {
        let mut payments: Vec<RentPayment> = self.load_or_empty().await?;
        payments.sort_by(|a, b| b.paid_at.cmp(&a.paid_at));
        Ok(payments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{PropertyId, TenantId};
    use crate::records::{current_month, Priority};
    use crate::storage::MemoryStorage;
    use chrono::{Duration, Utc};

    fn store() -> RecordStore<MemoryStorage> {
        RecordStore::new(MemoryStorage::new())
    }

    #[tokio::test]
    async fn test_request_details_attaches_both_names() {
        let store = store();

        let tenant = Tenant::new("Sarah Johnson", "435-324-2345", "s@x.com");
        let property = Property::new("Sunset Apartments", "1 Main St");
        let request = MaintenanceRequest::new(
            "Leaking faucet",
            "Kitchen faucet drips constantly",
            Priority::High,
            tenant.id.clone(),
            property.id.clone(),
        );

        store.create(tenant).await.unwrap();
        store.create(property).await.unwrap();
        store.create(request).await.unwrap();

        let details = store.request_details().await.unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(
            details[0].property_name.as_deref(),
            Some("Sunset Apartments")
        );
        assert_eq!(details[0].tenant_name.as_deref(), Some("Sarah Johnson"));
    }

    #[tokio::test]
    async fn test_request_details_leaves_dangling_names_none() {
        let store = store();

        let request = MaintenanceRequest::new(
            "Broken heater",
            "No heat since Monday",
            Priority::Urgent,
            TenantId::from("t-gone"),
            PropertyId::from("p-gone"),
        );
        store.create(request).await.unwrap();

        let details = store.request_details().await.unwrap();
        assert_eq!(details[0].property_name, None);
        assert_eq!(details[0].tenant_name, None);
    }

    #[tokio::test]
    async fn test_payment_history_is_most_recent_first() {
        let store = store();

        let mut older = RentPayment::new(
            1000.0,
            current_month(),
            TenantId::from("t-1"),
            PropertyId::from("p-1"),
        );
        older.paid_at = Utc::now() - Duration::days(30);
        let newer = RentPayment::new(
            1000.0,
            current_month(),
            TenantId::from("t-1"),
            PropertyId::from("p-1"),
        );

        store.create(older.clone()).await.unwrap();
        store.create(newer.clone()).await.unwrap();

        let history = store.payment_history().await.unwrap();
        assert_eq!(history[0].id, newer.id);
        assert_eq!(history[1].id, older.id);
    }

    #[tokio::test]
    async fn test_search_covers_joined_fields() {
        let store = store();

        let tenant = Tenant::new("Sarah Johnson", "435-324-2345", "s@x.com");
        let mut property = Property::new("Sunset Apartments", "1 Main St");
        property.tenant_id = Some(tenant.id.clone());

        store.create(tenant).await.unwrap();
        store.create(property).await.unwrap();

        let overviews = store.property_overviews().await.unwrap();
        assert!(overviews[0].matches("sunset"));
        assert!(overviews[0].matches("main st"));
        assert!(overviews[0].matches("sarah"));
        assert!(!overviews[0].matches("hillside"));
    }
}
