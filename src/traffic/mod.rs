//! Synthetic network traffic.
//!
//! Each [`Service`] produces a per-second arrival series from a Poisson
//! process. Series are summarised into a histogram for the statistics plot and
//! weighted by packet size and share of the link into a combined load.

mod generator;
mod histogram;

use std::collections::BTreeMap;
use std::fmt;

pub use generator::{generate, poisson};
pub use histogram::histogram;

/// Traffic source kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Service {
    /// Bursty best-effort data.
    Data,
    /// Voice calls.
    Voice,
    /// Video streams.
    Video,
}

impl Service {
    /// Every service, in display order.
    pub const ALL: [Service; 3] = [Service::Data, Service::Voice, Service::Video];

    /// Lowercase name, also used as the curve name.
    pub fn name(self) -> &'static str {
        match self {
            Service::Data => "data",
            Service::Voice => "voice",
            Service::Video => "video",
        }
    }

    /// Parameters the simulation starts with.
    pub fn default_parameters(self) -> ServiceParameters {
        match self {
            Service::Data => ServiceParameters::new(100, 1.0, 0.1),
            Service::Voice => ServiceParameters::new(1000, 2140.0, 0.5),
            Service::Video => ServiceParameters::new(300, 7000.0, 0.4),
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Load characteristics of one service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceParameters {
    /// Packet length in bytes.
    pub packet_len: u32,
    /// Mean arrivals per second per terminal.
    pub intensity: f64,
    /// Share of the link the service is weighted by.
    pub fraction: f64,
}

impl ServiceParameters {
    /// Create parameters.
    pub const fn new(packet_len: u32, intensity: f64, fraction: f64) -> Self {
        Self {
            packet_len,
            intensity,
            fraction,
        }
    }
}

/// Default parameters of every service.
pub fn default_services() -> BTreeMap<Service, ServiceParameters> {
    Service::ALL
        .into_iter()
        .map(|s| (s, s.default_parameters()))
        .collect()
}

/// Weighted sum of every service's series.
///
/// Sample `i` of the result is the sum of `traffic[s][i] * packet_len *
/// fraction` over services that have a sample at `i`. The result is as long
/// as the longest series. Services without parameters contribute nothing.
pub fn combine(
    traffic: &BTreeMap<Service, Vec<f64>>,
    params: &BTreeMap<Service, ServiceParameters>,
) -> Vec<f64> {
    let len = traffic.values().map(Vec::len).max().unwrap_or(0);
    let mut load = vec![0.0; len];
    for (service, samples) in traffic {
        let Some(p) = params.get(service) else {
            continue;
        };
        let weight = f64::from(p.packet_len) * p.fraction;
        for (slot, sample) in load.iter_mut().zip(samples) {
            *slot += sample * weight;
        }
    }
    load
}
