//! Route finder configuration.

/// Parameters for estimating travel time.
///
/// Direct results take `minutes_per_hop` per station-to-station hop.
/// Transfer results are costed by the combined length of both lines, at
/// `transfer_minutes_per_station` per station.
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Minutes per hop on a direct route.
    pub minutes_per_hop: usize,

    /// Minutes per counted station on a transfer route.
    pub transfer_minutes_per_station: usize,
}

impl FinderConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(minutes_per_hop: usize, transfer_minutes_per_station: usize) -> Self {
        Self {
            minutes_per_hop,
            transfer_minutes_per_station,
        }
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            minutes_per_hop: 3,
            transfer_minutes_per_station: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = FinderConfig::default();

        assert_eq!(config.minutes_per_hop, 3);
        assert_eq!(config.transfer_minutes_per_station, 2);
    }

    #[test]
    fn custom_config() {
        let config = FinderConfig::new(4, 1);

        assert_eq!(config.minutes_per_hop, 4);
        assert_eq!(config.transfer_minutes_per_station, 1);
    }
}
