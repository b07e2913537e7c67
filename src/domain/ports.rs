use crate::domain::model::TimeSlot;
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait FareSource: Send + Sync {
    /// Outbound time slots for one destination. A response without the
    /// expected slot list yields an empty vector, not an error.
    async fn fetch_time_slots(&self, destination_code: &str) -> Result<Vec<TimeSlot>>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, subject: &str, body: &str) -> Result<()>;
}
