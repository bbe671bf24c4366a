//! Bit field descriptors
//!
//! A [`BitField`] names one contiguous bit range inside one register of the
//! PHY window, together with the codes that mean "disabled" and "enabled"
//! for that range. Descriptors are plain data so that whole per-revision
//! tables can live in `static` memory.

use crate::constants::{MAX_FIELD_BIT, MAX_WRITABLE_BIT, WRITE_ENABLE_SHIFT};
use crate::driver::error::{ConfigError, ConfigResult};

/// One field inside a 32-bit PHY register
///
/// `bit_high` and `bit_low` form an inclusive range. The all-zero value is
/// [`BitField::ABSENT`]: the revision does not implement the field, and it
/// must never be written or read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitField {
    /// Byte offset of the register inside the window
    pub offset: u32,
    /// Highest bit of the field (inclusive)
    pub bit_high: u8,
    /// Lowest bit of the field (inclusive)
    pub bit_low: u8,
    /// Field value meaning "disabled"
    pub disable: u32,
    /// Field value meaning "enabled"
    pub enable: u32,
}

impl BitField {
    /// Marker for a field the revision does not implement
    pub const ABSENT: Self = Self::new(0, 0, 0, 0, 0);

    /// Create a field descriptor
    ///
    /// No validation happens here so that descriptors can be built in
    /// `static` tables; see [`BitField::validate`].
    pub const fn new(offset: u32, bit_high: u8, bit_low: u8, disable: u32, enable: u32) -> Self {
        Self {
            offset,
            bit_high,
            bit_low,
            disable,
            enable,
        }
    }

    /// Create a single-bit field with the usual 0 = disabled, 1 = enabled codes
    pub const fn bit(offset: u32, bit: u8) -> Self {
        Self::new(offset, bit, bit, 0, 1)
    }

    /// True for the "not configured for this role" sentinel
    pub const fn is_absent(&self) -> bool {
        self.offset == 0
            && self.bit_high == 0
            && self.bit_low == 0
            && self.disable == 0
            && self.enable == 0
    }

    /// Number of bits covered by the field
    pub const fn width(&self) -> u32 {
        self.bit_high.saturating_sub(self.bit_low) as u32 + 1
    }

    /// Right-aligned mask of the field width (`GENMASK(width - 1, 0)`)
    pub const fn value_mask(&self) -> u32 {
        let width = self.width();
        if width >= u32::BITS {
            u32::MAX
        } else {
            (1 << width) - 1
        }
    }

    /// Mask of the field at its position in the register
    pub const fn field_mask(&self) -> u32 {
        self.value_mask() << self.bit_low
    }

    /// Code for the requested state
    pub const fn code(&self, enable: bool) -> u32 {
        if enable { self.enable } else { self.disable }
    }

    /// True when the field has write-enable strobes inside a 32-bit word
    pub const fn is_writable(&self) -> bool {
        self.bit_high <= MAX_WRITABLE_BIT
    }

    /// Check the range and both codes
    ///
    /// # Errors
    ///
    /// [`ConfigError::MalformedField`] if the range is inverted, reaches past
    /// bit 31, or a code does not fit the range.
    pub const fn validate(&self) -> ConfigResult<()> {
        if self.bit_high < self.bit_low || self.bit_high > MAX_FIELD_BIT {
            return Err(ConfigError::MalformedField);
        }
        let mask = self.value_mask();
        if self.disable & !mask != 0 || self.enable & !mask != 0 {
            return Err(ConfigError::MalformedField);
        }
        Ok(())
    }

    /// Check the field can be written with the hiword mask convention
    ///
    /// # Errors
    ///
    /// [`ConfigError::MalformedField`] as for [`BitField::validate`], or
    /// [`ConfigError::FieldNotWritable`] if `bit_high` is above bit 15.
    pub const fn validate_writable(&self) -> ConfigResult<()> {
        if let Err(e) = self.validate() {
            return Err(e);
        }
        if !self.is_writable() {
            return Err(ConfigError::FieldNotWritable);
        }
        Ok(())
    }

    /// Word that sets the field to the code for `enable`
    ///
    /// Low half: the code at the field position. High half: the field mask
    /// as write strobes. Only meaningful for fields that pass
    /// [`BitField::validate_writable`].
    pub const fn encode(&self, enable: bool) -> u32 {
        let mask = self.field_mask();
        ((self.code(enable) << self.bit_low) & mask) | (mask << WRITE_ENABLE_SHIFT)
    }

    /// Extract the field value from a register word
    pub const fn decode(&self, word: u32) -> u32 {
        (word & self.field_mask()) >> self.bit_low
    }

    /// True when the field value in `word` differs from the disable code
    ///
    /// This is deliberately not an equality test against the enable code:
    /// a two-bit line state reads "enabled" for every non-idle value.
    pub const fn is_enabled_in(&self, word: u32) -> bool {
        self.decode(word) != self.disable
    }
}
