//! Hardware Abstraction Layer
//!
//! Seams to the collaborators the PHY core depends on but does not own.
//!
//! # Modules
//!
//! - [`clock`]: The external PHY input clock handle
//!
//! # Delay Integration
//!
//! Settle delays use `embedded_hal::delay::DelayNs` directly.
//! Pass any delay implementation from your HAL.

pub mod clock;

// Re-export commonly used types
pub use clock::{AlwaysOnClock, ClockError, ClockHandle, ClockState};
