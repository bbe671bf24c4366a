//! RK3568 USB2 PHY instances
//!
//! Each PHY has its own register window; the match key is the physical
//! base address of the PHY and field offsets are relative to it. PHY0 has
//! an OTG port, PHY1 has two host-only ports.

use super::{ChipVariant, PortFieldSet, VariantTable};
use crate::register::BitField;

/// Compatible string of the RK3568 USB2 PHY node
pub const COMPATIBLE: &str = "rockchip,rk3568-usb2phy";

/// USB2 PHY0 and PHY1
pub static RK3568_VARIANTS: [ChipVariant; 2] = [
    ChipVariant {
        match_key: 0xfe8a_0000,
        clkout_ctl: BitField::new(0x0008, 4, 4, 1, 0),
        ports: [
            PortFieldSet {
                phy_sus: BitField::new(0x0000, 8, 0, 0x052, 0x1d1),
                bvalid_det_en: BitField::new(0x0080, 2, 2, 0, 1),
                bvalid_det_st: BitField::new(0x0084, 2, 2, 0, 1),
                bvalid_det_clr: BitField::new(0x0088, 2, 2, 0, 1),
                ls_det_en: BitField::new(0x0080, 0, 0, 0, 1),
                ls_det_st: BitField::new(0x0084, 0, 0, 0, 1),
                ls_det_clr: BitField::new(0x0088, 0, 0, 0, 1),
                utmi_avalid: BitField::new(0x00c0, 10, 10, 0, 1),
                utmi_bvalid: BitField::new(0x00c0, 9, 9, 0, 1),
                utmi_ls: BitField::new(0x00c0, 5, 4, 0, 1),
                ..PortFieldSet::ABSENT
            },
            PortFieldSet {
                phy_sus: BitField::new(0x0004, 8, 0, 0x1d2, 0x1d1),
                ls_det_en: BitField::new(0x0080, 1, 1, 0, 1),
                ls_det_st: BitField::new(0x0084, 1, 1, 0, 1),
                ls_det_clr: BitField::new(0x0088, 1, 1, 0, 1),
                utmi_ls: BitField::new(0x00c0, 17, 16, 0, 1),
                utmi_hstdet: BitField::new(0x00c0, 19, 19, 0, 1),
                ..PortFieldSet::ABSENT
            },
        ],
    },
    ChipVariant {
        match_key: 0xfe8b_0000,
        clkout_ctl: BitField::new(0x0008, 4, 4, 1, 0),
        ports: [
            PortFieldSet {
                phy_sus: BitField::new(0x0000, 8, 0, 0x1d2, 0x1d1),
                ls_det_en: BitField::new(0x0080, 0, 0, 0, 1),
                ls_det_st: BitField::new(0x0084, 0, 0, 0, 1),
                ls_det_clr: BitField::new(0x0088, 0, 0, 0, 1),
                utmi_ls: BitField::new(0x00c0, 5, 4, 0, 1),
                utmi_hstdet: BitField::new(0x00c0, 7, 7, 0, 1),
                ..PortFieldSet::ABSENT
            },
            PortFieldSet {
                phy_sus: BitField::new(0x0004, 8, 0, 0x1d2, 0x1d1),
                ls_det_en: BitField::new(0x0080, 1, 1, 0, 1),
                ls_det_st: BitField::new(0x0084, 1, 1, 0, 1),
                ls_det_clr: BitField::new(0x0088, 1, 1, 0, 1),
                utmi_ls: BitField::new(0x00c0, 17, 16, 0, 1),
                utmi_hstdet: BitField::new(0x00c0, 19, 19, 0, 1),
                ..PortFieldSet::ABSENT
            },
        ],
    },
];

/// RK3568 variant table
pub static RK3568: VariantTable<'static> = VariantTable::new(COMPATIBLE, &RK3568_VARIANTS);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::config::PortRole;

    #[test]
    fn suspend_uses_nine_bit_codes() {
        let phy0 = RK3568.resolve(0xfe8a_0000).unwrap();
        let sus = phy0.port(PortRole::Otg).phy_sus;

        assert_eq!(sus.offset, 0x0000);
        assert_eq!(sus.value_mask(), 0x1ff);
        assert_eq!(sus.encode(false), 0x01ff_0052);
        assert_eq!(sus.encode(true), 0x01ff_01d1);
    }

    #[test]
    fn phy1_has_no_bvalid_detection() {
        let phy1 = RK3568.resolve(0xfe8b_0000).unwrap();
        for port in &phy1.ports {
            assert!(port.bvalid_det_en.is_absent());
            assert!(port.bvalid_det_clr.is_absent());
        }
    }

    #[test]
    fn register_offset_not_used_as_key() {
        assert!(RK3568.resolve(0x0000).is_none());
        assert!(RK3568.resolve(0x0008).is_none());
    }
}
