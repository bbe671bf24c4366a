//! Critical-section protected PHY controller.
//!
//! The OTG port, the HOST port and the clock output of one PHY block write
//! to the same registers. Users that live in different contexts (USB
//! controller driver, clock consumer, interrupt handler) share one
//! [`SharedUsb2Phy`] so their accesses never interleave.

use embedded_hal::delay::DelayNs;

use super::primitives::CriticalSectionCell;
use crate::driver::config::PortRole;
use crate::driver::phy::{ClockOutput, PhyPort, Usb2Phy};
use crate::hal::clock::ClockHandle;
use crate::register::RegisterBlock;

/// ISR-safe PHY controller wrapper using critical sections.
///
/// All access goes through `critical_section::with()`, disabling interrupts
/// for the duration of the closure.
///
/// # Example
///
/// ```ignore
/// let phy = Usb2Phy::bind(&RK3568, 0xfe8a_0000, regs, phyclk, delay, PhyConfig::new())?;
/// let shared = SharedUsb2Phy::new(phy);
///
/// shared.with_clock_output(|clk| clk.enable())?;
/// shared.with_port(PortRole::Otg, |otg| otg.power_on())?;
/// ```
pub struct SharedUsb2Phy<'v, R, C, D> {
    inner: CriticalSectionCell<Usb2Phy<'v, R, C, D>>,
}

impl<'v, R, C, D> SharedUsb2Phy<'v, R, C, D>
where
    R: RegisterBlock,
    C: ClockHandle,
    D: DelayNs,
{
    /// Wrap a bound controller.
    pub const fn new(phy: Usb2Phy<'v, R, C, D>) -> Self {
        Self {
            inner: CriticalSectionCell::new(phy),
        }
    }

    /// Execute a closure with exclusive access to the controller.
    #[inline]
    pub fn with<T, F>(&self, f: F) -> T
    where
        F: FnOnce(&mut Usb2Phy<'v, R, C, D>) -> T,
    {
        self.inner.with(f)
    }

    /// Try to execute a closure, returning `None` if already borrowed.
    #[inline]
    pub fn try_with<T, F>(&self, f: F) -> Option<T>
    where
        F: FnOnce(&mut Usb2Phy<'v, R, C, D>) -> T,
    {
        self.inner.try_with(f)
    }

    /// Execute a closure with exclusive access to one port.
    pub fn with_port<T, F>(&self, role: PortRole, f: F) -> T
    where
        F: FnOnce(&mut PhyPort<'_, 'v, R, C, D>) -> T,
    {
        self.inner.with(|phy| f(&mut phy.port(role)))
    }

    /// Execute a closure with exclusive access to the clock output.
    pub fn with_clock_output<T, F>(&self, f: F) -> T
    where
        F: FnOnce(&mut ClockOutput<'_, 'v, R, C, D>) -> T,
    {
        self.inner.with(|phy| f(&mut phy.clock_output()))
    }

    /// Unwrap the controller.
    pub fn into_inner(self) -> Usb2Phy<'v, R, C, D> {
        self.inner.into_inner()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec;

    use super::*;
    use crate::driver::config::PhyConfig;
    use crate::test_utils::{MockClock, MockDelay, MockRegisterBlock};
    use crate::variant::rk3568::RK3568;

    #[test]
    fn sub_devices_serialize_on_one_controller() {
        let (regs, clock, delay) = (MockRegisterBlock::new(), MockClock::new(), MockDelay::new());
        regs.set_register(0x0008, 1 << 4);
        let phy = Usb2Phy::bind(&RK3568, 0xfe8b_0000, &regs, &clock, &delay, PhyConfig::new())
            .unwrap();
        let shared = SharedUsb2Phy::new(phy);

        shared.with_clock_output(|clk| clk.enable()).unwrap();
        shared.with_port(PortRole::Otg, |otg| otg.power_on()).unwrap();
        shared.with_port(PortRole::Host, |host| host.power_off()).unwrap();

        assert_eq!(
            regs.writes(),
            vec![(0x0008, 0x0010_0000), (0x0000, 0x01ff_01d2), (0x0004, 0x01ff_01d1)]
        );
        assert_eq!(shared.with(|phy| phy.variant().match_key), 0xfe8b_0000);
    }

    #[test]
    fn try_with_reports_reentrant_borrow() {
        let (regs, clock, delay) = (MockRegisterBlock::new(), MockClock::new(), MockDelay::new());
        let phy = Usb2Phy::bind(&RK3568, 0xfe8a_0000, &regs, &clock, &delay, PhyConfig::new())
            .unwrap();
        let shared = SharedUsb2Phy::new(phy);

        let nested = shared.with(|_| shared.try_with(|phy| phy.clock_is_enabled()));
        assert!(nested.is_none());
        assert!(shared.try_with(|phy| phy.clock_is_enabled()).is_some());

        let (_, _, d) = shared.into_inner().release();
        assert_eq!(d.calls(), 0);
    }
}
