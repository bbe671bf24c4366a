//! Testing utilities and mock implementations
//!
//! This module provides mock implementations for testing the PHY driver
//! on the host without hardware access.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::vec::Vec;

use crate::driver::error::{IoError, Result};
use crate::hal::clock::{ClockError, ClockHandle};
use crate::register::RegisterBlock;

// =============================================================================
// Mock Register Block
// =============================================================================

/// Simulated GRF register window
///
/// Writes follow the hiword mask convention: only low bits whose strobe in
/// the high half is set change; the high half of the stored word (status
/// bits on real hardware) is never written.
///
/// # Example
///
/// ```ignore
/// let regs = MockRegisterBlock::new();
/// regs.set_register(0xe450, 1 << 4);
///
/// let mut phy = Usb2Phy::new(variant, &regs, &clock, &delay, PhyConfig::new())?;
/// phy.clock_enable()?;
/// assert_eq!(regs.writes(), vec![(0xe450, 0x0010_0000)]);
/// ```
#[derive(Debug, Default)]
pub struct MockRegisterBlock {
    /// Register values by offset
    registers: RefCell<HashMap<u32, u32>>,
    /// Record of writes: (offset, written word)
    write_log: RefCell<Vec<(u32, u32)>>,
    /// Record of read offsets
    read_log: RefCell<Vec<u32>>,
    /// Offsets that report a bus fault
    faulty: RefCell<HashSet<u32>>,
    /// Offsets whose access fails the test
    forbidden: RefCell<HashSet<u32>>,
}

impl MockRegisterBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload a register value
    pub fn set_register(&self, offset: u32, value: u32) {
        self.registers.borrow_mut().insert(offset, value);
    }

    /// Current register value (0 if never set)
    pub fn register(&self, offset: u32) -> u32 {
        self.registers.borrow().get(&offset).copied().unwrap_or(0)
    }

    /// All writes in order
    pub fn writes(&self) -> Vec<(u32, u32)> {
        self.write_log.borrow().clone()
    }

    /// Words written to one offset, in order
    pub fn writes_to(&self, offset: u32) -> Vec<u32> {
        self.write_log
            .borrow()
            .iter()
            .filter(|(o, _)| *o == offset)
            .map(|(_, v)| *v)
            .collect()
    }

    /// All read offsets in order
    pub fn reads(&self) -> Vec<u32> {
        self.read_log.borrow().clone()
    }

    /// Forget recorded reads and writes
    pub fn clear_log(&self) {
        self.write_log.borrow_mut().clear();
        self.read_log.borrow_mut().clear();
    }

    /// Make every access to `offset` report [`IoError::BusFault`]
    pub fn fail_at(&self, offset: u32) {
        self.faulty.borrow_mut().insert(offset);
    }

    /// Panic on any access to `offset`
    pub fn forbid(&self, offset: u32) {
        self.forbidden.borrow_mut().insert(offset);
    }

    fn check(&self, offset: u32) -> Result<()> {
        assert!(
            !self.forbidden.borrow().contains(&offset),
            "access to forbidden register offset {offset:#06x}"
        );
        if self.faulty.borrow().contains(&offset) {
            return Err(IoError::BusFault.into());
        }
        Ok(())
    }

    fn do_read(&self, offset: u32) -> Result<u32> {
        self.check(offset)?;
        self.read_log.borrow_mut().push(offset);
        Ok(self.register(offset))
    }

    fn do_write(&self, offset: u32, value: u32) -> Result<()> {
        self.check(offset)?;
        self.write_log.borrow_mut().push((offset, value));

        let strobes = value >> 16;
        let old = self.register(offset);
        let new = (old & !strobes) | (value & strobes);
        self.set_register(offset, new);
        Ok(())
    }
}

impl RegisterBlock for MockRegisterBlock {
    fn read(&mut self, offset: u32) -> Result<u32> {
        self.do_read(offset)
    }

    fn write(&mut self, offset: u32, value: u32) -> Result<()> {
        self.do_write(offset, value)
    }
}

impl RegisterBlock for &MockRegisterBlock {
    fn read(&mut self, offset: u32) -> Result<u32> {
        self.do_read(offset)
    }

    fn write(&mut self, offset: u32, value: u32) -> Result<()> {
        self.do_write(offset, value)
    }
}

// =============================================================================
// Mock Clock
// =============================================================================

/// Mock PHY input clock
///
/// Counts calls and returns configurable results.
#[derive(Debug)]
pub struct MockClock {
    enable_calls: Cell<u32>,
    disable_calls: Cell<u32>,
    enable_result: Cell<core::result::Result<(), ClockError>>,
    disable_result: Cell<core::result::Result<(), ClockError>>,
    running: Cell<bool>,
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MockClock {
    pub fn new() -> Self {
        Self {
            enable_calls: Cell::new(0),
            disable_calls: Cell::new(0),
            enable_result: Cell::new(Ok(())),
            disable_result: Cell::new(Ok(())),
            running: Cell::new(false),
        }
    }

    /// Clock whose provider cannot gate it
    pub fn not_supported() -> Self {
        let clk = Self::new();
        clk.set_enable_result(Err(ClockError::NotSupported));
        clk.set_disable_result(Err(ClockError::NotSupported));
        clk
    }

    pub fn set_enable_result(&self, result: core::result::Result<(), ClockError>) {
        self.enable_result.set(result);
    }

    pub fn set_disable_result(&self, result: core::result::Result<(), ClockError>) {
        self.disable_result.set(result);
    }

    pub fn enable_calls(&self) -> u32 {
        self.enable_calls.get()
    }

    pub fn disable_calls(&self) -> u32 {
        self.disable_calls.get()
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    fn do_enable(&self) -> core::result::Result<(), ClockError> {
        self.enable_calls.set(self.enable_calls.get() + 1);
        let result = self.enable_result.get();
        if result.is_ok() {
            self.running.set(true);
        }
        result
    }

    fn do_disable(&self) -> core::result::Result<(), ClockError> {
        self.disable_calls.set(self.disable_calls.get() + 1);
        let result = self.disable_result.get();
        if result.is_ok() {
            self.running.set(false);
        }
        result
    }
}

impl ClockHandle for MockClock {
    fn enable(&mut self) -> core::result::Result<(), ClockError> {
        self.do_enable()
    }

    fn disable(&mut self) -> core::result::Result<(), ClockError> {
        self.do_disable()
    }
}

impl ClockHandle for &MockClock {
    fn enable(&mut self) -> core::result::Result<(), ClockError> {
        self.do_enable()
    }

    fn disable(&mut self) -> core::result::Result<(), ClockError> {
        self.do_disable()
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records delays for verification without actually waiting.
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Total nanoseconds delayed
    total_ns: Cell<u64>,
    /// Number of delay calls
    calls: Cell<u32>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total nanoseconds that were "delayed"
    pub fn total_ns(&self) -> u64 {
        self.total_ns.get()
    }

    /// Get total microseconds that were "delayed"
    pub fn total_us(&self) -> u64 {
        self.total_ns() / 1_000
    }

    /// Number of `delay_ns` calls
    pub fn calls(&self) -> u32 {
        self.calls.get()
    }

    /// Reset the delay counters
    pub fn reset(&self) {
        self.total_ns.set(0);
        self.calls.set(0);
    }

    fn record(&self, ns: u32) {
        self.total_ns.set(self.total_ns.get() + u64::from(ns));
        self.calls.set(self.calls.get() + 1);
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.record(ns);
    }
}

impl embedded_hal::delay::DelayNs for &MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.record(ns);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::delay::DelayNs;
    use std::vec;

    #[test]
    fn mock_register_honours_write_strobes() {
        let mut regs = MockRegisterBlock::new();
        regs.set_register(0x10, 0xffff_00f0);

        regs.write(0x10, 0x000f_0005).unwrap();
        assert_eq!(regs.register(0x10), 0xffff_00f5);

        // data bits without strobes are ignored
        regs.write(0x10, 0x0000_ff00).unwrap();
        assert_eq!(regs.register(0x10), 0xffff_00f5);

        assert_eq!(regs.writes(), vec![(0x10, 0x000f_0005), (0x10, 0x0000_ff00)]);
    }

    #[test]
    fn mock_register_reads_default_zero() {
        let mut regs = MockRegisterBlock::new();
        assert_eq!(regs.read(0x44).unwrap(), 0);
        assert_eq!(regs.reads(), vec![0x44]);
    }

    #[test]
    fn mock_register_fault_injection() {
        let mut regs = MockRegisterBlock::new();
        regs.fail_at(0x8);
        assert!(regs.read(0x8).is_err());
        assert!(regs.write(0x8, 0).is_err());
        assert!(regs.writes().is_empty());
    }

    #[test]
    #[should_panic(expected = "forbidden register offset")]
    fn mock_register_forbidden_offset_panics() {
        let mut regs = MockRegisterBlock::new();
        regs.forbid(0);
        let _ = regs.read(0);
    }

    #[test]
    fn mock_clock_counts_calls() {
        let clk = MockClock::new();
        let mut handle = &clk;
        handle.enable().unwrap();
        assert!(clk.is_running());
        handle.disable().unwrap();
        assert!(!clk.is_running());
        assert_eq!((clk.enable_calls(), clk.disable_calls()), (1, 1));
    }

    #[test]
    fn mock_delay_tracking() {
        let delay = MockDelay::new();
        let mut handle = &delay;

        handle.delay_us(1_300);
        assert_eq!(delay.total_us(), 1_300);

        handle.delay_ns(500);
        assert_eq!(delay.total_ns(), 1_300_500);

        delay.reset();
        assert_eq!(delay.total_ns(), 0);
    }
}
