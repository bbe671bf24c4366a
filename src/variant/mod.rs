//! Chip variant descriptors and lookup
//!
//! The same Innosilicon USB2 PHY is integrated into several Rockchip SoCs,
//! each time with a different placement of its control and status bits.
//! A [`ChipVariant`] captures one PHY instance of one SoC; a
//! [`VariantTable`] lists every instance of an SoC family and is searched
//! by the identifier the platform reports for the PHY node.
//!
//! # Supported Families
//!
//! | Compatible                 | Table           | PHY instances |
//! |----------------------------|-----------------|---------------|
//! | `rockchip,rk3399-usb2phy`  | [`rk3399::RK3399`] | 2          |
//! | `rockchip,rk3568-usb2phy`  | [`rk3568::RK3568`] | 2          |
//! | `rockchip,rk3588-usb2phy`  | [`rk3588::RK3588`] | 4          |
//!
//! Tables have an explicit length. There is no terminating entry, and a
//! match key of zero is an ordinary key (RK3588 uses it).

pub mod rk3399;
pub mod rk3568;
pub mod rk3588;

use crate::driver::config::PortRole;
use crate::driver::error::{ConfigError, ConfigResult};
use crate::register::BitField;

// =============================================================================
// Port Fields
// =============================================================================

/// Names of the fields in a [`PortFieldSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortField {
    /// Port suspend control
    Suspend,
    /// B-valid detection interrupt enable
    BvalidDetectEnable,
    /// B-valid detection latched status
    BvalidDetectStatus,
    /// B-valid detection latch clear
    BvalidDetectClear,
    /// Line-state change detection interrupt enable
    LineStateDetectEnable,
    /// Line-state change detection latched status
    LineStateDetectStatus,
    /// Line-state change detection latch clear
    LineStateDetectClear,
    /// UTMI A-session valid
    UtmiAvalid,
    /// UTMI B-session valid
    UtmiBvalid,
    /// UTMI line state (two bits)
    UtmiLineState,
    /// UTMI host disconnect detect
    UtmiHostDisconnect,
}

impl PortField {
    /// Every field, in descriptor order
    pub const ALL: [PortField; 11] = [
        PortField::Suspend,
        PortField::BvalidDetectEnable,
        PortField::BvalidDetectStatus,
        PortField::BvalidDetectClear,
        PortField::LineStateDetectEnable,
        PortField::LineStateDetectStatus,
        PortField::LineStateDetectClear,
        PortField::UtmiAvalid,
        PortField::UtmiBvalid,
        PortField::UtmiLineState,
        PortField::UtmiHostDisconnect,
    ];

    /// True for fields the driver writes; the rest are only read
    pub const fn is_control(self) -> bool {
        matches!(
            self,
            PortField::Suspend
                | PortField::BvalidDetectEnable
                | PortField::BvalidDetectClear
                | PortField::LineStateDetectEnable
                | PortField::LineStateDetectClear
        )
    }
}

/// Detection latch selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Detect {
    /// B-valid (VBUS session) detection
    Bvalid,
    /// Line-state change detection
    LineState,
}

impl Detect {
    /// Enable, status and clear fields of this detector
    pub const fn fields(self) -> (PortField, PortField, PortField) {
        match self {
            Detect::Bvalid => (
                PortField::BvalidDetectEnable,
                PortField::BvalidDetectStatus,
                PortField::BvalidDetectClear,
            ),
            Detect::LineState => (
                PortField::LineStateDetectEnable,
                PortField::LineStateDetectStatus,
                PortField::LineStateDetectClear,
            ),
        }
    }
}

/// Register fields of one port role on one PHY instance
///
/// Any field may be [`BitField::ABSENT`]; operations that need it then do
/// nothing for that step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PortFieldSet {
    /// Suspend control (enable code = suspended)
    pub phy_sus: BitField,
    /// B-valid detection enable
    pub bvalid_det_en: BitField,
    /// B-valid detection status
    pub bvalid_det_st: BitField,
    /// B-valid detection clear
    pub bvalid_det_clr: BitField,
    /// Line-state detection enable
    pub ls_det_en: BitField,
    /// Line-state detection status
    pub ls_det_st: BitField,
    /// Line-state detection clear
    pub ls_det_clr: BitField,
    /// UTMI A-valid status
    pub utmi_avalid: BitField,
    /// UTMI B-valid status
    pub utmi_bvalid: BitField,
    /// UTMI line state status
    pub utmi_ls: BitField,
    /// UTMI host disconnect status
    pub utmi_hstdet: BitField,
}

impl PortFieldSet {
    /// A port role the PHY instance does not have
    pub const ABSENT: Self = Self {
        phy_sus: BitField::ABSENT,
        bvalid_det_en: BitField::ABSENT,
        bvalid_det_st: BitField::ABSENT,
        bvalid_det_clr: BitField::ABSENT,
        ls_det_en: BitField::ABSENT,
        ls_det_st: BitField::ABSENT,
        ls_det_clr: BitField::ABSENT,
        utmi_avalid: BitField::ABSENT,
        utmi_bvalid: BitField::ABSENT,
        utmi_ls: BitField::ABSENT,
        utmi_hstdet: BitField::ABSENT,
    };

    /// Descriptor of a named field
    pub const fn field(&self, which: PortField) -> &BitField {
        match which {
            PortField::Suspend => &self.phy_sus,
            PortField::BvalidDetectEnable => &self.bvalid_det_en,
            PortField::BvalidDetectStatus => &self.bvalid_det_st,
            PortField::BvalidDetectClear => &self.bvalid_det_clr,
            PortField::LineStateDetectEnable => &self.ls_det_en,
            PortField::LineStateDetectStatus => &self.ls_det_st,
            PortField::LineStateDetectClear => &self.ls_det_clr,
            PortField::UtmiAvalid => &self.utmi_avalid,
            PortField::UtmiBvalid => &self.utmi_bvalid,
            PortField::UtmiLineState => &self.utmi_ls,
            PortField::UtmiHostDisconnect => &self.utmi_hstdet,
        }
    }

    /// True when no field is configured, i.e. the role does not exist here
    pub fn is_absent(&self) -> bool {
        PortField::ALL.iter().all(|f| self.field(*f).is_absent())
    }

    /// Validate every present field
    ///
    /// Control fields must also be writable with the hiword mask.
    ///
    /// # Errors
    ///
    /// The first [`ConfigError`] found, in [`PortField::ALL`] order.
    pub fn validate(&self) -> ConfigResult<()> {
        for which in PortField::ALL {
            let field = self.field(which);
            if field.is_absent() {
                continue;
            }
            if which.is_control() {
                field.validate_writable()?;
            } else {
                field.validate()?;
            }
        }
        Ok(())
    }
}

// =============================================================================
// Chip Variant
// =============================================================================

/// One PHY instance of one SoC revision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChipVariant {
    /// Identifier of the PHY register block (first `reg` cell of its node)
    pub match_key: u32,
    /// 480 MHz clock output gate, absent where the PHY has none
    pub clkout_ctl: BitField,
    /// Port fields, indexed by [`PortRole::index`]
    pub ports: [PortFieldSet; PortRole::COUNT],
}

impl ChipVariant {
    /// Fields of one port role
    pub const fn port(&self, role: PortRole) -> &PortFieldSet {
        &self.ports[role.index()]
    }

    /// True when this instance exposes the given role
    pub fn has_port(&self, role: PortRole) -> bool {
        !self.port(role).is_absent()
    }

    /// True when this instance has a gateable clock output
    pub const fn has_clock_output(&self) -> bool {
        !self.clkout_ctl.is_absent()
    }

    /// Validate the clock gate and both port field sets
    ///
    /// # Errors
    ///
    /// [`ConfigError::MalformedField`] or [`ConfigError::FieldNotWritable`]
    /// for the first bad descriptor.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.has_clock_output() {
            self.clkout_ctl.validate_writable()?;
        }
        for port in &self.ports {
            port.validate()?;
        }
        Ok(())
    }
}

// =============================================================================
// Variant Table
// =============================================================================

/// Every PHY instance of one SoC family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VariantTable<'a> {
    compatible: &'a str,
    variants: &'a [ChipVariant],
}

impl<'a> VariantTable<'a> {
    /// Create a table for the given compatible string
    pub const fn new(compatible: &'a str, variants: &'a [ChipVariant]) -> Self {
        Self {
            compatible,
            variants,
        }
    }

    /// Compatible string selecting this table
    pub const fn compatible(&self) -> &'a str {
        self.compatible
    }

    /// Entries in table order
    pub const fn variants(&self) -> &'a [ChipVariant] {
        self.variants
    }

    /// Number of entries
    pub const fn len(&self) -> usize {
        self.variants.len()
    }

    /// True when the table has no entries
    pub const fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// First entry whose match key equals `match_key`
    pub fn resolve(&self, match_key: u32) -> Option<&'a ChipVariant> {
        resolve(self, match_key)
    }

    /// Check every entry and that match keys are unique
    ///
    /// # Errors
    ///
    /// [`ConfigError::DuplicateMatchKey`] or the first field error.
    pub fn validate(&self) -> ConfigResult<()> {
        for (i, variant) in self.variants.iter().enumerate() {
            variant.validate()?;
            if self.variants[..i]
                .iter()
                .any(|earlier| earlier.match_key == variant.match_key)
            {
                return Err(ConfigError::DuplicateMatchKey);
            }
        }
        Ok(())
    }
}

/// Find the chip variant for a register block identifier
///
/// Linear scan in table order; the first match wins. Pure function of its
/// arguments.
pub fn resolve<'a>(table: &VariantTable<'a>, match_key: u32) -> Option<&'a ChipVariant> {
    table.variants.iter().find(|v| v.match_key == match_key)
}

// =============================================================================
// PHY Family
// =============================================================================

/// SoC families sharing the Innosilicon USB2 PHY
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhyFamily {
    /// RK3399
    Rk3399,
    /// RK3568
    Rk3568,
    /// RK3588
    Rk3588,
}

impl PhyFamily {
    /// Every supported family
    pub const ALL: [PhyFamily; 3] = [PhyFamily::Rk3399, PhyFamily::Rk3568, PhyFamily::Rk3588];

    /// Family for a device-tree compatible string
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownFamily`] if no family uses `compatible`.
    pub fn from_compatible(compatible: &str) -> ConfigResult<Self> {
        Self::ALL
            .into_iter()
            .find(|family| family.compatible() == compatible)
            .ok_or(ConfigError::UnknownFamily)
    }

    /// Device-tree compatible string of the family
    pub fn compatible(self) -> &'static str {
        self.table().compatible()
    }

    /// Variant table of the family
    pub fn table(self) -> &'static VariantTable<'static> {
        match self {
            PhyFamily::Rk3399 => &rk3399::RK3399,
            PhyFamily::Rk3568 => &rk3568::RK3568,
            PhyFamily::Rk3588 => &rk3588::RK3588,
        }
    }
}
