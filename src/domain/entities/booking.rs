use crate::domain::value_objects::BookingId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input for creating a booking. Identity and timestamps are assigned by
/// [`Booking::new`], not by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDraft {
    pub customer_name: String,
    pub phone_number: String,
    pub email: String,
    pub service_type: String,
    pub appointment_at: DateTime<Utc>,
}

/// A booking queued locally until the remote side confirms it.
///
/// `id` and `created_at` are assigned once at creation and never change.
/// A booking with `is_synced == true` lives only in the synced list; one with
/// `is_synced == false` lives only in the pending list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub customer_name: String,
    pub phone_number: String,
    pub email: String,
    pub service_type: String,
    pub appointment_at: DateTime<Utc>,
    pub is_synced: bool,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(draft: BookingDraft) -> Self {
        Self {
            id: BookingId::generate(),
            customer_name: draft.customer_name,
            phone_number: draft.phone_number,
            email: draft.email,
            service_type: draft.service_type,
            appointment_at: draft.appointment_at,
            is_synced: false,
            created_at: Utc::now(),
        }
    }

    /// Confirmed copy of this booking for the synced list. Consumes the value
    /// so a pending snapshot can never alias a synced one.
    pub fn mark_synced(self) -> Self {
        Self {
            is_synced: true,
            ..self
        }
    }
}
