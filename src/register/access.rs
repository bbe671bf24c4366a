//! Field read/write primitives
//!
//! All register traffic of the driver goes through these three functions so
//! the hiword mask arithmetic lives in exactly one place.

use super::RegisterBlock;
use super::field::BitField;
use crate::driver::error::Result;

/// Set `field` to its enable or disable code with a single masked write
///
/// Bits outside the field are untouched by the hardware because their
/// write strobes are zero.
///
/// # Errors
///
/// - [`ConfigError::MalformedField`](crate::ConfigError::MalformedField) or
///   [`ConfigError::FieldNotWritable`](crate::ConfigError::FieldNotWritable)
///   if the descriptor cannot be written
/// - any I/O error from the register window
pub fn write_field<R: RegisterBlock + ?Sized>(
    regs: &mut R,
    field: &BitField,
    enable: bool,
) -> Result<()> {
    field.validate_writable()?;
    regs.write(field.offset, field.encode(enable))
}

/// Report whether `field` currently holds anything other than its disable code
///
/// # Errors
///
/// [`ConfigError::MalformedField`](crate::ConfigError::MalformedField) for a
/// bad descriptor, or any I/O error from the register window.
pub fn read_field<R: RegisterBlock + ?Sized>(regs: &mut R, field: &BitField) -> Result<bool> {
    field.validate()?;
    let word = regs.read(field.offset)?;
    Ok(field.is_enabled_in(word))
}

/// Read the raw right-aligned value of `field`
///
/// # Errors
///
/// Same as [`read_field`].
pub fn read_field_value<R: RegisterBlock + ?Sized>(regs: &mut R, field: &BitField) -> Result<u32> {
    field.validate()?;
    let word = regs.read(field.offset)?;
    Ok(field.decode(word))
}
