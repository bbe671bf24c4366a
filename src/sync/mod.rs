//! Synchronization support
//!
//! - [`CriticalSectionCell`] - ISR-safe interior mutability
//! - [`SharedUsb2Phy`] - critical-section protected PHY controller
//!
//! Enabled by the `critical-section` feature.

mod primitives;
mod shared;

pub use primitives::CriticalSectionCell;
pub use shared::SharedUsb2Phy;
