//! SRV resolvers.

use crate::SrvRecord;
use async_trait::async_trait;
use rand::Rng;

#[cfg(feature = "hickory")]
mod hickory;

/// Represents the ability to act as a SRV resolver.
///
/// Implementations perform a fresh lookup on every call; the flow queries
/// DNS at most once per form submission and keeps no cache.
#[async_trait]
pub trait SrvResolver: Send + Sync {
    /// SRV record representation produced by the resolver.
    type Record: SrvRecord + Send;

    /// Errors encountered during SRV resolution.
    type Error: std::error::Error + Send + 'static;

    /// Gets the records corresponding to a srv name without sorting by
    /// priority or shuffling based on weight.
    async fn srv_records_unordered(&self, srv: &str) -> Result<Vec<Self::Record>, Self::Error>;

    /// Gets the records corresponding to a srv name, sorting by priority
    /// and shuffling based on weight.
    async fn srv_records(&self, srv: &str) -> Result<Vec<Self::Record>, Self::Error> {
        let mut records = self.srv_records_unordered(srv).await?;
        Self::order_srv_records(&mut records, rand::rng());
        Ok(records)
    }

    /// Sorts SRV records by priority and weight per RFC 2782.
    fn order_srv_records(records: &mut [Self::Record], mut rng: impl Rng) {
        records.sort_by_cached_key(|record| record.sort_key(&mut rng));
    }
}
