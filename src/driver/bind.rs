//! Platform binding helpers
//!
//! The platform layer (device tree or a hard-coded board description) owns
//! enumeration. This module turns what it reports into the inputs the
//! controller needs: the variant table for the compatible string, the match
//! key from the `reg` property, and a port role for each sub-device label.

use embedded_hal::delay::DelayNs;

use crate::constants::{DEFAULT_CLOCK_OUTPUT_NAME, PHY_CLOCK_NAME};
use crate::driver::config::{PhyConfig, PortRole, RoleFallback};
use crate::driver::error::{ConfigError, ConfigResult, Result};
use crate::driver::phy::{PhyPort, Usb2Phy};
use crate::hal::clock::ClockHandle;
use crate::register::RegisterBlock;
use crate::variant::{PhyFamily, VariantTable};

/// Map a sub-device label to its port role
///
/// Labels are compared ignoring ASCII case. With
/// [`RoleFallback::DefaultToOtg`] an unknown label binds as the OTG port.
///
/// # Errors
///
/// [`ConfigError::UnknownRole`] for an unknown label under
/// [`RoleFallback::Reject`].
pub fn resolve_port_role(label: &str, fallback: RoleFallback) -> ConfigResult<PortRole> {
    match PortRole::from_label(label) {
        Ok(role) => Ok(role),
        Err(e) => match fallback {
            RoleFallback::Reject => {
                #[cfg(feature = "defmt")]
                defmt::warn!("usb2phy: unknown port label {=str}", label);
                Err(e)
            }
            RoleFallback::DefaultToOtg => {
                #[cfg(feature = "defmt")]
                defmt::warn!("usb2phy: unknown port label {=str}, using otg", label);
                Ok(PortRole::Otg)
            }
        },
    }
}

/// Extract the variant match key from the cells of a `reg` property
///
/// The key is the first cell. With two address cells the first cell is the
/// upper half of the address; when it is zero the key is the second cell.
///
/// # Errors
///
/// [`ConfigError::MissingRegCell`] if the needed cell is not present.
pub fn match_key_from_reg(cells: &[u32], address_cells: u32) -> ConfigResult<u32> {
    let first = *cells.first().ok_or(ConfigError::MissingRegCell)?;
    if address_cells == 2 && first == 0 {
        return cells.get(1).copied().ok_or(ConfigError::MissingRegCell);
    }
    Ok(first)
}

/// What the platform reports for one PHY node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlatformDesc<'a> {
    /// Compatible string of the node
    pub compatible: &'a str,
    /// Raw cells of the `reg` property
    pub reg: &'a [u32],
    /// `#address-cells` of the parent bus
    pub address_cells: u32,
    /// First entry of `clock-output-names`, if any
    pub clock_output_name: Option<&'a str>,
}

impl<'a> PlatformDesc<'a> {
    /// Describe a node with the default clock output name
    pub const fn new(compatible: &'a str, reg: &'a [u32], address_cells: u32) -> Self {
        Self {
            compatible,
            reg,
            address_cells,
            clock_output_name: None,
        }
    }

    /// Set the clock output name
    #[must_use]
    pub const fn with_clock_output_name(mut self, name: &'a str) -> Self {
        self.clock_output_name = Some(name);
        self
    }

    /// PHY family named by the compatible string
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownFamily`].
    pub fn family(&self) -> ConfigResult<PhyFamily> {
        PhyFamily::from_compatible(self.compatible)
    }

    /// Variant table for the compatible string
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownFamily`].
    pub fn table(&self) -> ConfigResult<&'static VariantTable<'static>> {
        self.family().map(PhyFamily::table)
    }

    /// Variant match key from the `reg` property
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingRegCell`].
    pub fn match_key(&self) -> ConfigResult<u32> {
        match_key_from_reg(self.reg, self.address_cells)
    }

    /// Name to register the clock output under
    pub fn clock_output_name(&self) -> &'a str {
        self.clock_output_name.unwrap_or(DEFAULT_CLOCK_OUTPUT_NAME)
    }

    /// Name of the input clock to hand to [`Usb2Phy::probe`]
    pub const fn input_clock_name(&self) -> &'static str {
        PHY_CLOCK_NAME
    }
}

impl<R, C, D> Usb2Phy<'static, R, C, D>
where
    R: RegisterBlock,
    C: ClockHandle,
    D: DelayNs,
{
    /// Create a controller from a platform node description
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownFamily`], [`ConfigError::MissingRegCell`],
    /// [`ConfigError::NoMatchingVariant`], or any error of [`Usb2Phy::new`].
    pub fn probe(
        desc: &PlatformDesc<'_>,
        regs: R,
        clock: C,
        delay: D,
        config: PhyConfig,
    ) -> Result<Self> {
        let table = desc.table()?;
        let match_key = desc.match_key()?;

        #[cfg(feature = "defmt")]
        defmt::debug!("usb2phy: probe {=str} key {=u32:#x}", desc.compatible, match_key);

        Self::bind(table, match_key, regs, clock, delay, config)
    }
}

impl<'v, R, C, D> Usb2Phy<'v, R, C, D>
where
    R: RegisterBlock,
    C: ClockHandle,
    D: DelayNs,
{
    /// Borrow the port sub-device named by a platform label
    ///
    /// Uses the controller's [`RoleFallback`] policy.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownRole`], see [`resolve_port_role`].
    pub fn port_for_label(&mut self, label: &str) -> Result<PhyPort<'_, 'v, R, C, D>> {
        let role = resolve_port_role(label, self.config().role_fallback)?;
        Ok(self.port(role))
    }
}
