//! Centralized Constants
//!
//! This module provides a single source of truth for the magic numbers used
//! throughout the USB2 PHY driver.
//!
//! # Organization
//!
//! Constants are grouped by category:
//! - **Register convention**: write-enable strobe layout
//! - **Timing**: settle delays after register writes
//! - **Clock**: the fixed 480 MHz output and the names the platform uses
//!
//! # Note
//!
//! Per-revision field descriptors live in the `variant` tables, not here.

// =============================================================================
// Register Convention
// =============================================================================

/// Bit distance between a data bit and its write-enable strobe
pub const WRITE_ENABLE_SHIFT: u32 = 16;

/// Highest data bit that still has a strobe inside a 32-bit word
pub const MAX_WRITABLE_BIT: u8 = 15;

/// Highest bit index inside a 32-bit register
pub const MAX_FIELD_BIT: u8 = 31;

/// Register access width in bytes
pub const REGISTER_WIDTH: u32 = 4;

// =============================================================================
// Timing Constants
// =============================================================================

/// Minimum wait for the UTMI clock after leaving suspend (µs)
pub const POWER_ON_SETTLE_MIN_US: u32 = 1_500;

/// Default wait for the UTMI clock after leaving suspend (µs)
pub const POWER_ON_SETTLE_US: u32 = 2_000;

/// Minimum wait for the 480 MHz output after ungating (µs)
pub const CLKOUT_SETTLE_MIN_US: u32 = 1_200;

/// Default wait for the 480 MHz output after ungating (µs)
pub const CLKOUT_SETTLE_US: u32 = 1_300;

// =============================================================================
// Clock
// =============================================================================

/// The only rate the PHY clock output can produce
pub const CLKOUT_RATE_HZ: u64 = 480_000_000;

/// Clock output name used when the platform does not provide one
pub const DEFAULT_CLOCK_OUTPUT_NAME: &str = "clk_usbphy_480m";

/// Name of the input clock the PHY must have running before init
pub const PHY_CLOCK_NAME: &str = "phyclk";

/// Port label of the OTG sub-device
pub const OTG_PORT_LABEL: &str = "otg-port";

/// Port label of the HOST sub-device
pub const HOST_PORT_LABEL: &str = "host-port";
