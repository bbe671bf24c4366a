//! Rockchip Innosilicon USB2.0 PHY Driver
//!
//! A `no_std`, `no_alloc` Rust driver core for the Innosilicon USB2.0 PHY
//! found in Rockchip RK3399, RK3568 and RK3588 SoCs.
//!
//! The same PHY IP is wired into each SoC with a different register layout.
//! The driver therefore splits into a small generic engine and per-SoC data:
//!
//! 1. **Register Layer** ([`register`]): bit field descriptors and the
//!    hiword-mask write primitive
//! 2. **Variant Layer** ([`variant`]): per-SoC tables of field descriptors,
//!    selected by a hardware match key
//! 3. **Driver Layer** ([`driver`]): the [`Usb2Phy`] controller with its OTG
//!    port, HOST port and 480 MHz clock output sub-devices
//! 4. **HAL Layer** ([`hal`]): the PHY input clock seam
//!
//! # Supported SoCs
//!
//! | SoC    | Compatible                | Clock output |
//! |--------|---------------------------|--------------|
//! | RK3399 | `rockchip,rk3399-usb2phy` | yes          |
//! | RK3568 | `rockchip,rk3568-usb2phy` | yes          |
//! | RK3588 | `rockchip,rk3588-usb2phy` | no           |
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting and binding diagnostics
//! - `critical-section`: Enable the ISR-safe [`sync::SharedUsb2Phy`] wrapper
//!
//! # Example
//!
//! ```ignore
//! use rk_inno_usb2phy::{MmioRegisters, PhyConfig, PlatformDesc, PortRole, Usb2Phy};
//!
//! // SAFETY: GRF_BASE is the mapped general register file
//! let regs = unsafe { MmioRegisters::new(GRF_BASE) };
//! let desc = PlatformDesc::new("rockchip,rk3399-usb2phy", &[0xe450, 0x10], 1);
//!
//! let mut phy = Usb2Phy::probe(&desc, regs, phyclk, delay, PhyConfig::new())?;
//! phy.clock_output().enable()?;
//!
//! let mut otg = phy.port(PortRole::Otg);
//! otg.init()?;
//! otg.power_on()?;
//! ```

#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
// Clippy lint levels live here and in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

// =============================================================================
// Modules
// =============================================================================

pub mod constants;
pub mod driver;
pub mod hal;
pub mod register;
pub mod variant;

// Internal implementation details (pub(crate) only)
mod internal;

#[cfg(feature = "critical-section")]
#[cfg_attr(docsrs, doc(cfg(feature = "critical-section")))]
pub mod sync;

// Test utilities (only available during testing)
#[cfg(test)]
pub(crate) mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use driver::bind::{PlatformDesc, match_key_from_reg, resolve_port_role};
pub use driver::config::{PhyConfig, PortRole, RoleFallback};
pub use driver::error::{ConfigError, ConfigResult, Error, IoError, IoResult, Result};
pub use driver::phy::{ClockOutput, LineState, PhyPort, Usb2Phy};
pub use hal::clock::{AlwaysOnClock, ClockError, ClockHandle, ClockState};
pub use register::{BitField, MmioRegisters, RegisterBlock};
pub use variant::{ChipVariant, Detect, PhyFamily, PortField, PortFieldSet, VariantTable, resolve};

// Re-export sync types when critical-section is enabled
#[cfg(feature = "critical-section")]
pub use sync::SharedUsb2Phy;
