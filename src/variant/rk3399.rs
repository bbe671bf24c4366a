//! RK3399 USB2 PHY instances
//!
//! Both PHYs sit in the GRF; the match key is the offset of the PHY's first
//! control register. The OTG port detects B-valid, the HOST port detects
//! line-state changes.

use super::{ChipVariant, PortFieldSet, VariantTable};
use crate::register::BitField;

/// Compatible string of the RK3399 USB2 PHY node
pub const COMPATIBLE: &str = "rockchip,rk3399-usb2phy";

/// USB2 PHY0 and PHY1
pub static RK3399_VARIANTS: [ChipVariant; 2] = [
    ChipVariant {
        match_key: 0xe450,
        clkout_ctl: BitField::new(0xe450, 4, 4, 1, 0),
        ports: [
            PortFieldSet {
                phy_sus: BitField::new(0xe454, 1, 0, 2, 1),
                bvalid_det_en: BitField::new(0xe3c0, 3, 3, 0, 1),
                bvalid_det_st: BitField::new(0xe3e0, 3, 3, 0, 1),
                bvalid_det_clr: BitField::new(0xe3d0, 3, 3, 0, 1),
                utmi_avalid: BitField::new(0xe2ac, 7, 7, 0, 1),
                utmi_bvalid: BitField::new(0xe2ac, 12, 12, 0, 1),
                ..PortFieldSet::ABSENT
            },
            PortFieldSet {
                phy_sus: BitField::new(0xe458, 1, 0, 0x2, 0x1),
                ls_det_en: BitField::new(0xe3c0, 6, 6, 0, 1),
                ls_det_st: BitField::new(0xe3e0, 6, 6, 0, 1),
                ls_det_clr: BitField::new(0xe3d0, 6, 6, 0, 1),
                utmi_ls: BitField::new(0xe2ac, 22, 21, 0, 1),
                utmi_hstdet: BitField::new(0xe2ac, 23, 23, 0, 1),
                ..PortFieldSet::ABSENT
            },
        ],
    },
    ChipVariant {
        match_key: 0xe460,
        clkout_ctl: BitField::new(0xe460, 4, 4, 1, 0),
        ports: [
            PortFieldSet {
                phy_sus: BitField::new(0xe464, 1, 0, 2, 1),
                bvalid_det_en: BitField::new(0xe3c0, 8, 8, 0, 1),
                bvalid_det_st: BitField::new(0xe3e0, 8, 8, 0, 1),
                bvalid_det_clr: BitField::new(0xe3d0, 8, 8, 0, 1),
                utmi_avalid: BitField::new(0xe2ac, 10, 10, 0, 1),
                utmi_bvalid: BitField::new(0xe2ac, 16, 16, 0, 1),
                ..PortFieldSet::ABSENT
            },
            PortFieldSet {
                phy_sus: BitField::new(0xe468, 1, 0, 0x2, 0x1),
                ls_det_en: BitField::new(0xe3c0, 11, 11, 0, 1),
                ls_det_st: BitField::new(0xe3e0, 11, 11, 0, 1),
                ls_det_clr: BitField::new(0xe3d0, 11, 11, 0, 1),
                utmi_ls: BitField::new(0xe2ac, 26, 25, 0, 1),
                utmi_hstdet: BitField::new(0xe2ac, 27, 27, 0, 1),
                ..PortFieldSet::ABSENT
            },
        ],
    },
];

/// RK3399 variant table
pub static RK3399: VariantTable<'static> = VariantTable::new(COMPATIBLE, &RK3399_VARIANTS);
