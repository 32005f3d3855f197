//! SRV records.

use crate::Endpoint;
use rand::Rng;
use std::{cmp::Reverse, fmt::Display};

/// Representation of types that contain the fields of a SRV record.
pub trait SrvRecord {
    /// Type representing the SRV record's target. Must implement `Display`
    /// so it can be turned into a probe [`Endpoint`].
    type Target: Display + ?Sized;

    /// Gets a SRV record's target.
    fn target(&self) -> &Self::Target;

    /// Gets a SRV record's port.
    fn port(&self) -> u16;

    /// Gets a SRV record's priority.
    fn priority(&self) -> u16;

    /// Gets a SRV record's weight.
    fn weight(&self) -> u16;

    /// Converts a SRV record into the endpoint a probe should target.
    /// The trailing dot of a fully qualified answer is dropped.
    ///
    /// ```
    /// use mc_config_flow::{Endpoint, SrvRecord};
    /// # struct Record;
    /// # impl SrvRecord for Record {
    /// #     type Target = str;
    /// #     fn target(&self) -> &str { "mc.dummyserver.com." }
    /// #     fn port(&self) -> u16 { 23456 }
    /// #     fn priority(&self) -> u16 { 1 }
    /// #     fn weight(&self) -> u16 { 1 }
    /// # }
    /// # let record = Record;
    /// assert_eq!(
    ///     record.endpoint(),
    ///     Endpoint { host: "mc.dummyserver.com".to_string(), port: 23456 }
    /// );
    /// ```
    fn endpoint(&self) -> Endpoint {
        let target = self.target().to_string();
        Endpoint {
            host: target.trim_end_matches('.').to_string(),
            port: self.port(),
        }
    }

    /// Generates a key to sort a SRV record by priority and weight per RFC 2782.
    fn sort_key(&self, rng: impl Rng) -> (u16, Reverse<u32>) {
        sort_key(self.priority(), self.weight(), rng)
    }
}

/// Generates a key to sort a SRV record by priority and weight per RFC 2782.
pub(crate) fn sort_key(priority: u16, weight: u16, mut rng: impl Rng) -> (u16, Reverse<u32>) {
    // Sort ascending by priority, then descending (hence `Reverse`) by randomized weight
    let rand = rng.random::<u16>() as u32;
    (priority, Reverse(weight as u32 * rand))
}
