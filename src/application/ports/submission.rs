use crate::domain::entities::Booking;
use crate::domain::value_objects::SubmissionOutcome;
use crate::shared::error::AppError;
use async_trait::async_trait;

/// Remote "create booking" operation.
///
/// Implementations must be idempotent with respect to the booking id: a
/// resubmission of an id the remote already registered has to come back as
/// `Accepted`, since a pass interrupted after the remote call but before the
/// local commit will replay the same booking on the next pass.
#[async_trait]
pub trait SubmissionChannel: Send + Sync {
    /// Attempts to register one booking remotely. Transport problems should
    /// be reported as `Ok(SubmissionOutcome::Unreachable)` where possible;
    /// an `Err` is treated the same way by the synchronizer.
    async fn submit(&self, booking: &Booking) -> Result<SubmissionOutcome, AppError>;
}
