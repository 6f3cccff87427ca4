//! Outbound delivery of shaped messages.
//!
//! The [`Sink`] trait is the seam between the dispatcher and the
//! notification service. [`telegram::TelegramSink`] is the production
//! implementation; tests plug in their own.

pub mod telegram;

use async_trait::async_trait;

use crate::error::DeliveryError;
use crate::registry::RouteKey;

pub use telegram::TelegramSink;

// async_trait is required here because Sink is stored as Arc<dyn Sink>
// and native async fn in traits does not support dyn dispatch.
#[async_trait]
pub trait Sink: Send + Sync {
    fn name(&self) -> &'static str;

    /// Make one delivery attempt for `text`, which was shaped for `route`.
    async fn deliver(&self, route: &RouteKey, text: &str) -> Result<(), DeliveryError>;
}
