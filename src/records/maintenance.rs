//! Maintenance request records submitted by tenants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Collection;
use crate::error::{Result, StoreError};
use crate::ids::{PropertyId, RequestId, TenantId};

/// Urgency of a maintenance request, as picked on the submit form.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

/// Workflow state of a maintenance request.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::InProgress => "in_progress",
            RequestStatus::Completed => "completed",
            RequestStatus::Cancelled => "cancelled",
        }
    }
}

/// A maintenance request. Both `tenant_id` and `property_id` are soft
/// references; the store never checks that the referenced records exist.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequest {
    pub id: RequestId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: RequestStatus,
    pub tenant_id: TenantId,
    pub property_id: PropertyId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub image_uri: Option<String>,
}

impl MaintenanceRequest {
    /// Creates a pending request stamped with the current time.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        tenant_id: TenantId,
        property_id: PropertyId,
    ) -> Self {
        let now = Utc::now();
        MaintenanceRequest {
            id: RequestId::generate(),
            title: title.into(),
            description: description.into(),
            priority,
            status: RequestStatus::Pending,
            tenant_id,
            property_id,
            created_at: now,
            updated_at: now,
            image_uri: None,
        }
    }

    /// Rewrites the fields the edit form exposes and refreshes
    /// `updated_at`. Id, status, tenant and creation time are untouched.
    pub fn apply_edit(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        property_id: PropertyId,
        image_uri: Option<String>,
    ) {
        self.title = title.into();
        self.description = description.into();
        self.priority = priority;
        self.property_id = property_id;
        self.image_uri = image_uri;
        self.updated_at = Utc::now();
    }

    /// Moves the request to a new workflow state.
    pub fn set_status(&mut self, status: RequestStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

impl Collection for MaintenanceRequest {
    type Id = RequestId;

    const STORAGE_KEY: &'static str = "@maintenance_requests";

    fn id(&self) -> &RequestId {
        &self.id
    }

    fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(StoreError::Validation(
                "maintenance request title must not be empty".to_owned(),
            ));
        }
        if self.description.trim().is_empty() {
            return Err(StoreError::Validation(
                "maintenance request description must not be empty"
                    .to_owned(),
            ));
        }
        Ok(())
    }
}
