//! Core driver components for the USB2 PHY.
//!
//! - [`config`] - Port roles and the configuration builder
//! - [`error`] - Error types and result aliases
//! - [`phy`] - The PHY controller and its sub-device views
//! - [`bind`] - Platform binding helpers (labels, `reg` cells, probe)
//!
//! # Example
//!
//! ```ignore
//! use rk_inno_usb2phy::driver::{PhyConfig, PlatformDesc, Usb2Phy};
//!
//! let desc = PlatformDesc::new("rockchip,rk3568-usb2phy", &[0, 0xfe8a_0000, 0, 0x10000], 2);
//! let mut phy = Usb2Phy::probe(&desc, regs, phyclk, delay, PhyConfig::new())?;
//! phy.port_for_label("otg-port")?.init()?;
//! ```

// Submodules
pub mod bind;
pub mod config;
pub mod error;
pub mod phy;

// Re-exports for convenience
pub use bind::{PlatformDesc, match_key_from_reg, resolve_port_role};
pub use config::{PhyConfig, PortRole, RoleFallback};
pub use error::{ConfigError, ConfigResult, Error, IoError, IoResult, Result};
pub use phy::{ClockOutput, LineState, PhyPort, Usb2Phy};
