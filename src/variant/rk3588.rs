//! RK3588 USB2 PHY instances
//!
//! Four PHYs, each with one port and no gateable clock output. The match
//! key is the offset of the PHY inside the USB2PHY GRF, so PHY0 uses key
//! zero.

use super::{ChipVariant, PortFieldSet, VariantTable};
use crate::register::BitField;

/// Compatible string of the RK3588 USB2 PHY node
pub const COMPATIBLE: &str = "rockchip,rk3588-usb2phy";

/// Line-state detection and status, identical on every RK3588 port
const LS_PORT: PortFieldSet = PortFieldSet {
    ls_det_en: BitField::new(0x0080, 0, 0, 0, 1),
    ls_det_st: BitField::new(0x0084, 0, 0, 0, 1),
    ls_det_clr: BitField::new(0x0088, 0, 0, 0, 1),
    utmi_ls: BitField::new(0x00c0, 10, 9, 0, 1),
    ..PortFieldSet::ABSENT
};

/// USB2 PHY0 to PHY3
pub static RK3588_VARIANTS: [ChipVariant; 4] = [
    ChipVariant {
        match_key: 0x0000,
        clkout_ctl: BitField::ABSENT,
        ports: [
            PortFieldSet {
                phy_sus: BitField::new(0x000c, 11, 11, 0, 1),
                ..LS_PORT
            },
            PortFieldSet::ABSENT,
        ],
    },
    ChipVariant {
        match_key: 0x4000,
        clkout_ctl: BitField::ABSENT,
        ports: [
            PortFieldSet {
                phy_sus: BitField::new(0x000c, 11, 11, 0, 0),
                ..LS_PORT
            },
            PortFieldSet::ABSENT,
        ],
    },
    ChipVariant {
        match_key: 0x8000,
        clkout_ctl: BitField::ABSENT,
        ports: [
            PortFieldSet::ABSENT,
            PortFieldSet {
                phy_sus: BitField::new(0x0008, 2, 2, 0, 1),
                ..LS_PORT
            },
        ],
    },
    ChipVariant {
        match_key: 0xc000,
        clkout_ctl: BitField::ABSENT,
        ports: [
            PortFieldSet::ABSENT,
            PortFieldSet {
                phy_sus: BitField::new(0x0008, 2, 2, 0, 1),
                ..LS_PORT
            },
        ],
    },
];

/// RK3588 variant table
pub static RK3588: VariantTable<'static> = VariantTable::new(COMPATIBLE, &RK3588_VARIANTS);
