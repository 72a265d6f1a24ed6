use crate::application::ports::SubmissionChannel;
use crate::domain::entities::Booking;
use crate::domain::value_objects::SubmissionOutcome;
use crate::shared::config::SubmissionConfig;
use crate::shared::error::AppError;
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};

/// Remote booking API client.
///
/// Outcome mapping: any 2xx is `Accepted`; 409 is also `Accepted` because it
/// means the remote already holds this booking id (a replayed submission);
/// every other status is `Rejected`; transport errors are `Unreachable`.
pub struct HttpSubmissionChannel {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSubmissionChannel {
    pub fn new(config: &SubmissionConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn bookings_url(&self) -> String {
        format!("{}/api/bookings", self.base_url)
    }
}

#[async_trait]
impl SubmissionChannel for HttpSubmissionChannel {
    async fn submit(&self, booking: &Booking) -> Result<SubmissionOutcome, AppError> {
        let response = self
            .client
            .post(self.bookings_url())
            .json(booking)
            .send()
            .await;

        match response {
            Ok(response) => {
                let status = response.status();
                if status.is_success() || status == StatusCode::CONFLICT {
                    debug!(id = %booking.id, %status, "booking registered remotely");
                    Ok(SubmissionOutcome::Accepted)
                } else {
                    warn!(id = %booking.id, %status, "remote declined booking");
                    Ok(SubmissionOutcome::Rejected)
                }
            }
            Err(e) => {
                warn!(id = %booking.id, error = %e, "booking endpoint unreachable");
                Ok(SubmissionOutcome::Unreachable)
            }
        }
    }
}
