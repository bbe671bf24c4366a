//! Register window and field access for the USB2 PHY
//!
//! The PHY control registers live inside a shared general register file
//! (GRF) that also serves unrelated blocks. Every PHY control register uses
//! the "hiword mask" convention: bits `[31:16]` of a written word are
//! per-bit write strobes for bits `[15:0]`, so a field can be updated with a
//! single write and without a read-modify-write cycle.
//!
//! - [`RegisterBlock`]: the seam for 32-bit accesses into the register window
//! - [`MmioRegisters`]: volatile memory-mapped implementation
//! - [`field`]: [`BitField`] descriptors
//! - [`access`]: [`write_field`] / [`read_field`] primitives

pub mod access;
pub mod field;

pub use access::{read_field, read_field_value, write_field};
pub use field::BitField;

use crate::constants::REGISTER_WIDTH;
use crate::driver::error::{IoError, Result};
use crate::internal::register::{read_reg, write_reg};

// =============================================================================
// Register Block Trait
// =============================================================================

/// Trait for 32-bit register window access
///
/// Offsets are byte offsets from the start of the window. Implementations
/// may be memory-mapped, behind a regmap/syscon service, or simulated.
pub trait RegisterBlock {
    /// Read the 32-bit word at `offset`
    fn read(&mut self, offset: u32) -> Result<u32>;

    /// Write a 32-bit word at `offset`
    fn write(&mut self, offset: u32, value: u32) -> Result<()>;
}

impl<T: RegisterBlock + ?Sized> RegisterBlock for &mut T {
    #[inline]
    fn read(&mut self, offset: u32) -> Result<u32> {
        T::read(self, offset)
    }

    #[inline]
    fn write(&mut self, offset: u32, value: u32) -> Result<()> {
        T::write(self, offset, value)
    }
}

// =============================================================================
// Memory-Mapped Register Window
// =============================================================================

/// Volatile memory-mapped register window
///
/// Several controllers for sibling PHY blocks may hold an `MmioRegisters`
/// for the same GRF base; this type is `Copy` and carries no ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MmioRegisters {
    base: usize,
}

impl MmioRegisters {
    /// Create a register window at `base`
    ///
    /// # Safety
    ///
    /// `base` must be the virtual address of a mapped register region that
    /// covers every offset of the bound chip variant, and must stay mapped
    /// for as long as the window is used.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    /// Base address of the window
    pub const fn base(&self) -> usize {
        self.base
    }

    fn address(&self, offset: u32) -> Result<usize> {
        if offset % REGISTER_WIDTH != 0 {
            return Err(IoError::MisalignedAccess.into());
        }
        self.base
            .checked_add(offset as usize)
            .ok_or(IoError::BusFault.into())
    }
}

impl RegisterBlock for MmioRegisters {
    fn read(&mut self, offset: u32) -> Result<u32> {
        let addr = self.address(offset)?;
        // SAFETY: `new` requires the window to cover every accessed offset,
        // and `address` checked word alignment.
        Ok(unsafe { read_reg(addr) })
    }

    fn write(&mut self, offset: u32, value: u32) -> Result<()> {
        let addr = self.address(offset)?;
        // SAFETY: see `read`.
        unsafe { write_reg(addr, value) };
        Ok(())
    }
}
