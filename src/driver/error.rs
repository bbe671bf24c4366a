//! Error types for the USB2 PHY driver core
//!
//! Errors are organized by domain for better diagnostics:
//! - [`ConfigError`]: Variant resolution, field descriptor and binding failures
//! - [`IoError`]: Register window and clock handle failures at runtime
//!
//! The unified [`Error`] enum wraps both domain errors and is returned
//! by most driver methods.

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration and binding errors
///
/// These errors occur while resolving a chip variant, validating its
/// field descriptors, or binding a port sub-device to a role. They are
/// fatal for binding: no controller is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// No chip variant in the table matches the register block identifier
    NoMatchingVariant,
    /// Compatible string does not name a known PHY family
    UnknownFamily,
    /// Field descriptor has an inverted bit range, a bit above 31, or a
    /// code wider than its bit range
    MalformedField,
    /// Field would need write-enable strobes above bit 31 (bit_high >= 16)
    FieldNotWritable,
    /// Two variants in one table share a match key
    DuplicateMatchKey,
    /// Port label is neither "otg-port" nor "host-port"
    UnknownRole,
    /// The `reg` property lacks the cell holding the block identifier
    MissingRegCell,
    /// Settle delay shorter than the hardware minimum
    InvalidSettleDelay,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::NoMatchingVariant => "no matching phy variant",
            ConfigError::UnknownFamily => "unknown phy family",
            ConfigError::MalformedField => "malformed register field",
            ConfigError::FieldNotWritable => "field exceeds write-enable mask",
            ConfigError::DuplicateMatchKey => "duplicate variant match key",
            ConfigError::UnknownRole => "unknown port role",
            ConfigError::MissingRegCell => "missing reg cell",
            ConfigError::InvalidSettleDelay => "settle delay below hardware minimum",
        }
    }
}

// =============================================================================
// I/O Errors
// =============================================================================

/// Runtime register and clock errors
///
/// These are never retried by the driver; they indicate a bus fault that
/// higher layers must handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError {
    /// The register window reported a transport or bus error
    BusFault,
    /// Register offset is not 32-bit aligned
    MisalignedAccess,
    /// The external clock handle failed to enable or disable
    ClockFault,
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IoError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IoError::BusFault => "register bus fault",
            IoError::MisalignedAccess => "misaligned register access",
            IoError::ClockFault => "phy clock fault",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match result {
///     Err(Error::Config(ConfigError::NoMatchingVariant)) => { /* ... */ }
///     Err(Error::Io(IoError::ClockFault)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// I/O error
    Io(IoError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Io(e) => write!(f, "io: {}", e.as_str()),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}

/// Result type alias for PHY operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for I/O operations
pub type IoResult<T> = core::result::Result<T, IoError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    extern crate std;
    use std::format;

    use super::*;

    #[test]
    fn config_error_as_str_non_empty() {
        let variants = [
            ConfigError::NoMatchingVariant,
            ConfigError::UnknownFamily,
            ConfigError::MalformedField,
            ConfigError::FieldNotWritable,
            ConfigError::DuplicateMatchKey,
            ConfigError::UnknownRole,
            ConfigError::MissingRegCell,
            ConfigError::InvalidSettleDelay,
        ];

        for variant in variants {
            assert!(!variant.as_str().is_empty(), "{variant:?} has empty string");
        }
    }

    #[test]
    fn config_error_display() {
        let display = format!("{}", ConfigError::UnknownRole);
        assert_eq!(display, "unknown port role");
    }

    #[test]
    fn io_error_as_str_non_empty() {
        for variant in [IoError::BusFault, IoError::MisalignedAccess, IoError::ClockFault] {
            assert!(!variant.as_str().is_empty(), "{variant:?} has empty string");
        }
    }

    #[test]
    fn error_from_config_error() {
        let err: Error = ConfigError::NoMatchingVariant.into();
        assert_eq!(err, Error::Config(ConfigError::NoMatchingVariant));
    }

    #[test]
    fn error_from_io_error() {
        let err: Error = IoError::BusFault.into();
        assert_eq!(err, Error::Io(IoError::BusFault));
    }

    #[test]
    fn error_display_prefixes_domain() {
        let display = format!("{}", Error::Config(ConfigError::FieldNotWritable));
        assert!(display.starts_with("config: "));
        assert!(display.contains("write-enable"));

        let display = format!("{}", Error::Io(IoError::ClockFault));
        assert!(display.starts_with("io: "));
        assert!(display.contains("clock"));
    }

    #[test]
    fn result_aliases_work() {
        fn config() -> ConfigResult<u32> {
            Err(ConfigError::MissingRegCell)
        }
        fn io() -> IoResult<u32> {
            Ok(7)
        }
        fn unified() -> Result<u32> {
            let v = io()?;
            config().map(|c| c + v).map_err(Error::from)
        }

        assert_eq!(unified(), Err(Error::Config(ConfigError::MissingRegCell)));
    }
}
