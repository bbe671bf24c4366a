//! USB2 PHY controller
//!
//! [`Usb2Phy`] is bound to one [`ChipVariant`] and one register window. It
//! drives the three logical sub-devices of a PHY block: the OTG port, the
//! HOST port and the 480 MHz clock output. All three share the same
//! register block, so they are exposed as borrowed views
//! ([`PhyPort`], [`ClockOutput`]) of one controller rather than as
//! independent objects.
//!
//! # Example
//!
//! ```ignore
//! use rk_inno_usb2phy::{MmioRegisters, PhyConfig, PortRole, Usb2Phy, variant::rk3399::RK3399};
//!
//! let regs = unsafe { MmioRegisters::new(GRF_BASE) };
//! let mut phy = Usb2Phy::bind(&RK3399, 0xe450, regs, phyclk, delay, PhyConfig::new())?;
//!
//! phy.clock_output().enable()?;
//! let mut otg = phy.port(PortRole::Otg);
//! otg.init()?;
//! otg.power_on()?;
//! ```

use embedded_hal::delay::DelayNs;

use crate::constants::{CLKOUT_RATE_HZ, DEFAULT_CLOCK_OUTPUT_NAME};
use crate::driver::config::{PhyConfig, PortRole};
use crate::driver::error::{ConfigError, IoError, Result};
use crate::hal::clock::{ClockError, ClockHandle, ClockState};
use crate::register::{BitField, RegisterBlock, read_field, read_field_value, write_field};
use crate::variant::{ChipVariant, Detect, PortField, VariantTable};

// =============================================================================
// Line State
// =============================================================================

/// UTMI line state of a port (D+/D- levels)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineState {
    /// Single-ended zero (both lines low)
    Se0,
    /// J state
    J,
    /// K state
    K,
    /// Single-ended one (both lines high)
    Se1,
}

impl LineState {
    /// Decode the two-bit UTMI line state value
    pub const fn from_bits(bits: u32) -> Self {
        match bits & 0b11 {
            0 => LineState::Se0,
            1 => LineState::J,
            2 => LineState::K,
            _ => LineState::Se1,
        }
    }
}

// =============================================================================
// Controller
// =============================================================================

/// Controller for one USB2 PHY block
///
/// Generic over the register window `R`, the PHY input clock `C` and the
/// delay provider `D`. Each of them may be owned or a `&mut` borrow.
///
/// Operations on a port role or field the bound variant does not implement
/// succeed without touching the register window.
#[derive(Debug)]
pub struct Usb2Phy<'v, R, C, D> {
    regs: R,
    variant: &'v ChipVariant,
    clock: C,
    delay: D,
    config: PhyConfig,
    clock_state: ClockState,
}

impl<'v, R, C, D> Usb2Phy<'v, R, C, D>
where
    R: RegisterBlock,
    C: ClockHandle,
    D: DelayNs,
{
    /// Create a controller for an already resolved chip variant
    ///
    /// Nothing is written to the hardware.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidSettleDelay`] if `config` is below the
    ///   hardware minimums
    /// - [`ConfigError::MalformedField`] / [`ConfigError::FieldNotWritable`]
    ///   if the variant has a bad descriptor
    pub fn new(
        variant: &'v ChipVariant,
        regs: R,
        clock: C,
        delay: D,
        config: PhyConfig,
    ) -> Result<Self> {
        config.validate()?;
        variant.validate()?;

        Ok(Self {
            regs,
            variant,
            clock,
            delay,
            config,
            clock_state: ClockState::Unconfigured,
        })
    }

    /// Resolve `match_key` in `table` and create a controller for it
    ///
    /// # Errors
    ///
    /// [`ConfigError::NoMatchingVariant`] if the table has no entry for the
    /// key, otherwise as for [`Usb2Phy::new`].
    pub fn bind(
        table: &VariantTable<'v>,
        match_key: u32,
        regs: R,
        clock: C,
        delay: D,
        config: PhyConfig,
    ) -> Result<Self> {
        let Some(variant) = table.resolve(match_key) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("usb2phy: no variant for key {=u32:#x}", match_key);
            return Err(ConfigError::NoMatchingVariant.into());
        };

        #[cfg(feature = "defmt")]
        defmt::debug!("usb2phy: bound variant {=u32:#x}", match_key);

        Self::new(variant, regs, clock, delay, config)
    }

    /// The bound chip variant
    pub const fn variant(&self) -> &'v ChipVariant {
        self.variant
    }

    /// The active configuration
    pub const fn config(&self) -> &PhyConfig {
        &self.config
    }

    /// Input clock state as last driven by [`init`](Self::init) / [`exit`](Self::exit)
    pub const fn input_clock_state(&self) -> ClockState {
        self.clock_state
    }

    /// Give back the register window, clock handle and delay provider
    pub fn release(self) -> (R, C, D) {
        (self.regs, self.clock, self.delay)
    }

    // =========================================================================
    // Port Lifecycle
    // =========================================================================

    /// Prepare a port for use
    ///
    /// Enables the PHY input clock, then clears and enables the B-valid
    /// detection latch. A clock provider that cannot gate the clock is not
    /// an error.
    ///
    /// # Errors
    ///
    /// [`IoError::ClockFault`] if the clock fails to start (no register is
    /// written then), or any register window error.
    pub fn init(&mut self, role: PortRole) -> Result<()> {
        self.enable_input_clock()?;
        self.apply(role, PortField::BvalidDetectClear, true)?;
        self.apply(role, PortField::BvalidDetectEnable, true)
    }

    /// Release a port
    ///
    /// Disables the PHY input clock. Port registers are left as they are.
    ///
    /// # Errors
    ///
    /// [`IoError::ClockFault`] if the clock fails to stop.
    pub fn exit(&mut self, _role: PortRole) -> Result<()> {
        match self.clock.disable() {
            Ok(()) => {
                self.clock_state = ClockState::Disabled;
                Ok(())
            }
            Err(ClockError::NotSupported) => Ok(()),
            Err(ClockError::Failed) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("usb2phy: failed to disable phyclk");
                Err(IoError::ClockFault.into())
            }
        }
    }

    /// Take a port out of suspend and wait for it to settle
    ///
    /// # Errors
    ///
    /// Any register window error.
    pub fn power_on(&mut self, role: PortRole) -> Result<()> {
        self.apply(role, PortField::Suspend, false)?;
        self.delay.delay_us(self.config.power_on_settle_us);
        Ok(())
    }

    /// Put a port into suspend
    ///
    /// # Errors
    ///
    /// Any register window error.
    pub fn power_off(&mut self, role: PortRole) -> Result<()> {
        self.apply(role, PortField::Suspend, true)
    }

    // =========================================================================
    // Port Status
    // =========================================================================

    /// Read one port field as a flag
    ///
    /// Returns `None` when the variant does not implement the field for
    /// `role`.
    ///
    /// # Errors
    ///
    /// Any register window error.
    pub fn read_port_field(&mut self, role: PortRole, which: PortField) -> Result<Option<bool>> {
        let field = *self.variant.port(role).field(which);
        if field.is_absent() {
            return Ok(None);
        }
        read_field(&mut self.regs, &field).map(Some)
    }

    /// Current UTMI line state of a port
    ///
    /// # Errors
    ///
    /// Any register window error.
    pub fn line_state(&mut self, role: PortRole) -> Result<Option<LineState>> {
        let field = self.variant.port(role).utmi_ls;
        if field.is_absent() {
            return Ok(None);
        }
        let bits = read_field_value(&mut self.regs, &field)?;
        Ok(Some(LineState::from_bits(bits)))
    }

    /// True when a detection event is latched
    ///
    /// # Errors
    ///
    /// Any register window error.
    pub fn detect_pending(&mut self, role: PortRole, detect: Detect) -> Result<Option<bool>> {
        let (_, status, _) = detect.fields();
        self.read_port_field(role, status)
    }

    /// Clear a latched detection event
    ///
    /// # Errors
    ///
    /// Any register window error.
    pub fn clear_detect(&mut self, role: PortRole, detect: Detect) -> Result<()> {
        let (_, _, clear) = detect.fields();
        self.apply(role, clear, true)
    }

    /// Enable or disable a detection interrupt
    ///
    /// # Errors
    ///
    /// Any register window error.
    pub fn set_detect_enabled(&mut self, role: PortRole, detect: Detect, enable: bool) -> Result<()> {
        let (en, _, _) = detect.fields();
        self.apply(role, en, enable)
    }

    // =========================================================================
    // Clock Output
    // =========================================================================

    /// Ungate the 480 MHz clock output
    ///
    /// Writes and waits only if the gate is currently closed, so calling
    /// this repeatedly is cheap.
    ///
    /// # Errors
    ///
    /// Any register window error.
    pub fn clock_enable(&mut self) -> Result<()> {
        let gate = self.variant.clkout_ctl;
        if gate.is_absent() {
            return Ok(());
        }
        if !read_field(&mut self.regs, &gate)? {
            write_field(&mut self.regs, &gate, true)?;
            self.delay.delay_us(self.config.clkout_settle_us);
        }
        Ok(())
    }

    /// Gate the 480 MHz clock output
    ///
    /// # Errors
    ///
    /// Any register window error.
    pub fn clock_disable(&mut self) -> Result<()> {
        let gate = self.variant.clkout_ctl;
        if gate.is_absent() {
            return Ok(());
        }
        write_field(&mut self.regs, &gate, false)
    }

    /// Whether the clock output is ungated
    ///
    /// # Errors
    ///
    /// Any register window error.
    pub fn clock_is_enabled(&mut self) -> Result<bool> {
        let gate = self.variant.clkout_ctl;
        if gate.is_absent() {
            return Ok(false);
        }
        read_field(&mut self.regs, &gate)
    }

    /// Rate the clock output runs at for any requested rate
    pub const fn clock_round_rate(&self, _requested_hz: u64) -> u64 {
        CLKOUT_RATE_HZ
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Borrow the controller as one port sub-device
    pub fn port(&mut self, role: PortRole) -> PhyPort<'_, 'v, R, C, D> {
        PhyPort { phy: self, role }
    }

    /// Borrow the controller as its clock output sub-device
    pub fn clock_output(&mut self) -> ClockOutput<'_, 'v, R, C, D> {
        ClockOutput { phy: self }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn enable_input_clock(&mut self) -> Result<()> {
        match self.clock.enable() {
            Ok(()) | Err(ClockError::NotSupported) => {
                self.clock_state = ClockState::Enabled;
                Ok(())
            }
            Err(ClockError::Failed) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("usb2phy: failed to enable phyclk");
                Err(IoError::ClockFault.into())
            }
        }
    }

    /// Write one port field, skipping fields the variant lacks
    fn apply(&mut self, role: PortRole, which: PortField, enable: bool) -> Result<()> {
        let field: BitField = *self.variant.port(role).field(which);
        if field.is_absent() {
            return Ok(());
        }
        write_field(&mut self.regs, &field, enable)
    }
}

// =============================================================================
// Sub-device Views
// =============================================================================

/// One port role of a [`Usb2Phy`]
#[derive(Debug)]
pub struct PhyPort<'a, 'v, R, C, D> {
    phy: &'a mut Usb2Phy<'v, R, C, D>,
    role: PortRole,
}

impl<R, C, D> PhyPort<'_, '_, R, C, D>
where
    R: RegisterBlock,
    C: ClockHandle,
    D: DelayNs,
{
    /// Role of this port
    pub const fn role(&self) -> PortRole {
        self.role
    }

    /// True when the bound variant implements this role
    pub fn is_present(&self) -> bool {
        self.phy.variant.has_port(self.role)
    }

    /// See [`Usb2Phy::init`]
    pub fn init(&mut self) -> Result<()> {
        self.phy.init(self.role)
    }

    /// See [`Usb2Phy::exit`]
    pub fn exit(&mut self) -> Result<()> {
        self.phy.exit(self.role)
    }

    /// See [`Usb2Phy::power_on`]
    pub fn power_on(&mut self) -> Result<()> {
        self.phy.power_on(self.role)
    }

    /// See [`Usb2Phy::power_off`]
    pub fn power_off(&mut self) -> Result<()> {
        self.phy.power_off(self.role)
    }

    /// See [`Usb2Phy::line_state`]
    pub fn line_state(&mut self) -> Result<Option<LineState>> {
        self.phy.line_state(self.role)
    }

    /// See [`Usb2Phy::read_port_field`]
    pub fn read_field(&mut self, which: PortField) -> Result<Option<bool>> {
        self.phy.read_port_field(self.role, which)
    }
}

/// The 480 MHz clock output of a [`Usb2Phy`]
#[derive(Debug)]
pub struct ClockOutput<'a, 'v, R, C, D> {
    phy: &'a mut Usb2Phy<'v, R, C, D>,
}

impl<R, C, D> ClockOutput<'_, '_, R, C, D>
where
    R: RegisterBlock,
    C: ClockHandle,
    D: DelayNs,
{
    /// Name the clock is registered under when the platform gives none
    pub const fn default_name(&self) -> &'static str {
        DEFAULT_CLOCK_OUTPUT_NAME
    }

    /// See [`Usb2Phy::clock_enable`]
    pub fn enable(&mut self) -> Result<()> {
        self.phy.clock_enable()
    }

    /// See [`Usb2Phy::clock_disable`]
    pub fn disable(&mut self) -> Result<()> {
        self.phy.clock_disable()
    }

    /// See [`Usb2Phy::clock_is_enabled`]
    pub fn is_enabled(&mut self) -> Result<bool> {
        self.phy.clock_is_enabled()
    }

    /// See [`Usb2Phy::clock_round_rate`]
    pub fn round_rate(&self, requested_hz: u64) -> u64 {
        self.phy.clock_round_rate(requested_hz)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
