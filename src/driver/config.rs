//! Configuration types for the USB2 PHY driver

use crate::constants::{
    CLKOUT_SETTLE_MIN_US, CLKOUT_SETTLE_US, HOST_PORT_LABEL, OTG_PORT_LABEL,
    POWER_ON_SETTLE_MIN_US, POWER_ON_SETTLE_US,
};
use crate::driver::error::{ConfigError, ConfigResult};

/// USB port personality of a PHY sub-device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PortRole {
    /// On-the-go (device or host) port
    #[default]
    Otg = 0,
    /// Host-only port
    Host = 1,
}

impl PortRole {
    /// Number of port roles per PHY instance
    pub const COUNT: usize = 2;

    /// Both roles, in table index order
    pub const ALL: [PortRole; Self::COUNT] = [PortRole::Otg, PortRole::Host];

    /// Index into [`ChipVariant::ports`](crate::ChipVariant::ports)
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Device-tree node name of the sub-device
    pub const fn label(self) -> &'static str {
        match self {
            PortRole::Otg => OTG_PORT_LABEL,
            PortRole::Host => HOST_PORT_LABEL,
        }
    }

    /// Role for a sub-device node name, ignoring ASCII case
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownRole`] for any other label.
    pub fn from_label(label: &str) -> ConfigResult<Self> {
        Self::ALL
            .into_iter()
            .find(|role| role.label().eq_ignore_ascii_case(label))
            .ok_or(ConfigError::UnknownRole)
    }
}

/// What to do with a sub-device whose label names no known role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RoleFallback {
    /// Fail the bind with [`ConfigError::UnknownRole`]
    #[default]
    Reject,
    /// Report the label and bind it as the OTG port
    DefaultToOtg,
}

/// Driver configuration
///
/// Settle delays are blocking waits after a register write and are part of
/// the hardware contract; they cannot be set below the documented minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyConfig {
    /// Wait after leaving suspend before the port is usable (µs)
    pub power_on_settle_us: u32,
    /// Wait after ungating the 480 MHz output before it is stable (µs)
    pub clkout_settle_us: u32,
    /// Handling of unrecognized port labels
    pub role_fallback: RoleFallback,
}

impl Default for PhyConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PhyConfig {
    /// Configuration with the documented upper-bound delays
    pub const fn new() -> Self {
        Self {
            power_on_settle_us: POWER_ON_SETTLE_US,
            clkout_settle_us: CLKOUT_SETTLE_US,
            role_fallback: RoleFallback::Reject,
        }
    }

    /// Set the power-on settle delay
    #[must_use]
    pub const fn with_power_on_settle_us(mut self, us: u32) -> Self {
        self.power_on_settle_us = us;
        self
    }

    /// Set the clock output settle delay
    #[must_use]
    pub const fn with_clkout_settle_us(mut self, us: u32) -> Self {
        self.clkout_settle_us = us;
        self
    }

    /// Set the unknown-label policy
    #[must_use]
    pub const fn with_role_fallback(mut self, fallback: RoleFallback) -> Self {
        self.role_fallback = fallback;
        self
    }

    /// Check delays against the hardware minimums
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidSettleDelay`] if either delay is too short.
    pub const fn validate(&self) -> ConfigResult<()> {
        if self.power_on_settle_us < POWER_ON_SETTLE_MIN_US
            || self.clkout_settle_us < CLKOUT_SETTLE_MIN_US
        {
            return Err(ConfigError::InvalidSettleDelay);
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = PhyConfig::new();

        assert_eq!(config.power_on_settle_us, 2_000);
        assert_eq!(config.clkout_settle_us, 1_300);
        assert_eq!(config.role_fallback, RoleFallback::Reject);
        assert_eq!(config, PhyConfig::default());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn config_builder() {
        let config = PhyConfig::new()
            .with_power_on_settle_us(1_500)
            .with_clkout_settle_us(1_200)
            .with_role_fallback(RoleFallback::DefaultToOtg);

        assert_eq!(config.power_on_settle_us, 1_500);
        assert_eq!(config.clkout_settle_us, 1_200);
        assert_eq!(config.role_fallback, RoleFallback::DefaultToOtg);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn config_rejects_short_delays() {
        let config = PhyConfig::new().with_power_on_settle_us(1_499);
        assert_eq!(config.validate(), Err(ConfigError::InvalidSettleDelay));

        let config = PhyConfig::new().with_clkout_settle_us(0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidSettleDelay));
    }

    #[test]
    fn role_index_matches_table_layout() {
        assert_eq!(PortRole::Otg.index(), 0);
        assert_eq!(PortRole::Host.index(), 1);
        assert_eq!(PortRole::default(), PortRole::Otg);
    }

    #[test]
    fn role_from_label_ignores_case() {
        assert_eq!(PortRole::from_label("otg-port"), Ok(PortRole::Otg));
        assert_eq!(PortRole::from_label("HOST-PORT"), Ok(PortRole::Host));
        assert_eq!(PortRole::from_label("Host-Port"), Ok(PortRole::Host));
    }

    #[test]
    fn role_from_label_rejects_others() {
        for label in ["", "otg", "host_port", "usb-port", "otg-port "] {
            assert_eq!(PortRole::from_label(label), Err(ConfigError::UnknownRole), "{label:?}");
        }
    }
}
