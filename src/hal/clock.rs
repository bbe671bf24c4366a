//! PHY Input Clock HAL
//!
//! The PHY needs its input clock ("phyclk") running before the port can be
//! initialized. The clock belongs to the platform clock tree; the driver
//! only borrows a handle to switch it on and off.

/// Failure reported by a clock handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// The provider cannot gate this clock (it is always on)
    NotSupported,
    /// The provider failed to change the clock
    Failed,
}

/// Trait for an external clock the PHY consumes
///
/// Reference counting, if any, is the provider's business.
pub trait ClockHandle {
    /// Ungate the clock
    fn enable(&mut self) -> Result<(), ClockError>;

    /// Gate the clock
    fn disable(&mut self) -> Result<(), ClockError>;
}

impl<T: ClockHandle + ?Sized> ClockHandle for &mut T {
    #[inline]
    fn enable(&mut self) -> Result<(), ClockError> {
        T::enable(self)
    }

    #[inline]
    fn disable(&mut self) -> Result<(), ClockError> {
        T::disable(self)
    }
}

/// Clock handle for platforms where the PHY clock is always running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlwaysOnClock;

impl ClockHandle for AlwaysOnClock {
    fn enable(&mut self) -> Result<(), ClockError> {
        Err(ClockError::NotSupported)
    }

    fn disable(&mut self) -> Result<(), ClockError> {
        Err(ClockError::NotSupported)
    }
}

/// Input clock state as last driven by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockState {
    /// Clock not touched yet
    #[default]
    Unconfigured,
    /// Clock enabled (or always on)
    Enabled,
    /// Clock disabled
    Disabled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_on_reports_not_supported() {
        let mut clk = AlwaysOnClock;
        assert_eq!(clk.enable(), Err(ClockError::NotSupported));
        assert_eq!(clk.disable(), Err(ClockError::NotSupported));
    }

    #[test]
    fn mut_ref_forwards() {
        fn cycle<C: ClockHandle>(mut clk: C) -> Result<(), ClockError> {
            clk.enable()?;
            clk.disable()
        }

        let mut clk = AlwaysOnClock;
        assert_eq!(cycle(&mut clk), Err(ClockError::NotSupported));
    }
}
