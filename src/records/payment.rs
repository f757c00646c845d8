//! Rent payment records. Payments are append-only in practice: the app
//! records them when a payment goes through and never edits one afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Collection;
use crate::error::{Result, StoreError};
use crate::ids::{PaymentId, PropertyId, TenantId};

/// Outcome of a rent payment attempt.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Completed,
    Pending,
    Failed,
}

/// A single rent payment for one month of one property.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RentPayment {
    pub id: PaymentId,
    pub amount: f64,
    /// Month the payment covers, in "YYYY-MM" form.
    pub month: String,
    pub paid_at: DateTime<Utc>,
    pub tenant_id: TenantId,
    pub property_id: PropertyId,
    pub status: PaymentStatus,
}

impl RentPayment {
    /// Records a completed payment stamped with the current time.
    pub fn new(
        amount: f64,
        month: impl Into<String>,
        tenant_id: TenantId,
        property_id: PropertyId,
    ) -> Self {
        RentPayment {
            id: PaymentId::generate(),
            amount,
            month: month.into(),
            paid_at: Utc::now(),
            tenant_id,
            property_id,
            status: PaymentStatus::Completed,
        }
    }
}

/// The current month in the "YYYY-MM" form payments are keyed by.
pub fn current_month() -> String {
    Utc::now().format("%Y-%m").to_string()
}

fn is_valid_month(month: &str) -> bool {
    let bytes = month.as_bytes();
    if bytes.len() != 7 || bytes[4] != b'-' {
        return false;
    }
    if !bytes[..4].iter().all(u8::is_ascii_digit)
        || !bytes[5..].iter().all(u8::is_ascii_digit)
    {
        return false;
    }
    matches!(month[5..].parse::<u8>(), Ok(1..=12))
}

impl Collection for RentPayment {
    type Id = PaymentId;

    const STORAGE_KEY: &'static str = "@rent_payments";

    fn id(&self) -> &PaymentId {
        &self.id
    }

    fn validate(&self) -> Result<()> {
        if self.amount <= 0.0 {
            return Err(StoreError::Validation(
                "payment amount must be positive".to_owned(),
            ));
        }
        if !is_valid_month(&self.month) {
            return Err(StoreError::Validation(format!(
                "payment month {:?} is not in YYYY-MM form",
                self.month
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payment(month: &str) -> RentPayment {
        RentPayment::new(
            1000.0,
            month,
            TenantId::from("t-1"),
            PropertyId::from("p-1"),
        )
    }

    #[test]
    fn test_new_payment_is_completed() {
        let payment = sample_payment("2024-01");
        assert_eq!(payment.status, PaymentStatus::Completed);
        assert!(payment.validate().is_ok());
    }

    #[test]
    fn test_current_month_is_valid() {
        assert!(is_valid_month(&current_month()));
    }

    #[test]
    fn test_month_format_is_checked() {
        assert!(sample_payment("2024-1").validate().is_err());
        assert!(sample_payment("2024-13").validate().is_err());
        assert!(sample_payment("24-01").validate().is_err());
        assert!(sample_payment("January").validate().is_err());
        assert!(sample_payment("2024-12").validate().is_ok());
    }

    #[test]
    fn test_non_positive_amount_fails_validation() {
        let mut payment = sample_payment("2024-01");
        payment.amount = 0.0;
        assert!(matches!(
            payment.validate(),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn test_paid_at_serializes_as_iso_timestamp() {
        let payment = sample_payment("2024-01");
        let json = serde_json::to_string(&payment).unwrap();
        assert!(json.contains("\"paidAt\":\""));

        let back: RentPayment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payment);
    }
}
