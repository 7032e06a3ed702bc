//! Authored shade data: 64 colors per base hue, darkest to lightest.
//!
//! Each table runs from `#000000` through the hue's built-in palette colors
//! (sorted by luminance) to `#FFFFFF`, with intermediate steps interpolated in
//! linear light. Luminance is linear along each interpolated segment, so the
//! tables are ordered by construction; `tests/shade_invariants.rs` checks it.
//!
//! Saved gallery records reference these values by color, so existing
//! entries must not change.

use crate::shade::RAMP_LEN;

#[rustfmt::skip]
pub(crate) const RED: [u32; RAMP_LEN] = [
    0x000000, 0x190101, 0x260202, 0x300303, 0x380404, 0x3E0505, 0x440505, 0x4A0606,
    0x4F0707, 0x530808, 0x580909, 0x5C0A0A, 0x650B0D, 0x6C0C10, 0x740C12, 0x7A0D14,
    0x800E16, 0x860E18, 0x8C0F19, 0x91101B, 0x96101D, 0x9B111E, 0x9C2321, 0x9C2F23,
    0x9D3825, 0x9E4027, 0x9F4629, 0x9F4C2B, 0xA0522D, 0xA6553D, 0xAD5749, 0xB25A53,
    0xB85C5C, 0xE53935, 0xFF0000, 0xFF073A, 0xFF314B, 0xFF4458, 0xFF5364, 0xFF5F6E,
    0xFF6976, 0xFF737F, 0xFF7B86, 0xFF838D, 0xFF8A94, 0xFF919A, 0xFF97A0, 0xFF9DA6,
    0xFFA3AB, 0xFFA9B0, 0xFFAEB5, 0xFFB3BA, 0xFFBBC1, 0xFFC2C8, 0xFFCACE, 0xFFD0D4,
    0xFFD7DA, 0xFFDDE0, 0xFFE3E6, 0xFFE9EB, 0xFFEFF0, 0xFFF4F5, 0xFFFAFA, 0xFFFFFF,
];

#[rustfmt::skip]
pub(crate) const ORANGE: [u32; RAMP_LEN] = [
    0x000000, 0x190700, 0x260E00, 0x301300, 0x381700, 0x3E1A00, 0x441E00, 0x4A2000,
    0x4F2300, 0x542600, 0x582800, 0x5C2A00, 0x602C00, 0x642E00, 0x673000, 0x6B3200,
    0x6E3400, 0x713500, 0x743700, 0x773800, 0x7A3A00, 0x823E03, 0x8A4205, 0x914508,
    0x98490A, 0x9E4C0D, 0xA44F0F, 0xAA5211, 0xAF5513, 0xB55714, 0xBA5A16, 0xBF5C17,
    0xC35F19, 0xC8611A, 0xC9671C, 0xCA6D1E, 0xCB7220, 0xCC7722, 0xE76C21, 0xFF5F1F,
    0xC98B5E, 0xE68643, 0xFF8000, 0xFB8C00, 0xFB9435, 0xFC9C4B, 0xFCA35B, 0xFCA969,
    0xFCB074, 0xFDB67F, 0xFDBC88, 0xFDC190, 0xFEC798, 0xFECCA0, 0xFED1A7, 0xFED6AE,
    0xFFDAB4, 0xFFDFBA, 0xFFE5C8, 0xFFEAD4, 0xFFF0E0, 0xFFF5EB, 0xFFFAF5, 0xFFFFFF,
];

#[rustfmt::skip]
pub(crate) const YELLOW: [u32; RAMP_LEN] = [
    0x000000, 0x141000, 0x1F1A00, 0x282100, 0x2E2700, 0x342D00, 0x3A3100, 0x3E3500,
    0x433900, 0x473D00, 0x4B4000, 0x4E4300, 0x524600, 0x554900, 0x584C00, 0x5B4F00,
    0x5E5100, 0x605300, 0x635600, 0x665800, 0x685A00, 0x6B5C00, 0x6D5F00, 0x6F6100,
    0x726300, 0x746400, 0x766600, 0x786800, 0x7A6A00, 0x816F04, 0x887409, 0x8E780D,
    0x957C11, 0x9A8014, 0xA08416, 0xA58819, 0xAA8B1B, 0xAF8F1D, 0xB4921F, 0xB89621,
    0xBD9922, 0xC19C24, 0xC59F25, 0xC9A227, 0xCFA621, 0xD5A91A, 0xDBAD10, 0xE0B000,
    0xDDB748, 0xD9BE65, 0xD6C57A, 0xDFC970, 0xE7CD65, 0xEED159, 0xF6D449, 0xFDD835,
    0xF2E343, 0xE7EE4F, 0xEDF244, 0xF3F738, 0xF9FB26, 0xFFFF00, 0xFFFFBA, 0xFFFFFF,
];

#[rustfmt::skip]
pub(crate) const GREEN: [u32; RAMP_LEN] = [
    0x000000, 0x010B01, 0x021302, 0x021902, 0x031E03, 0x042304, 0x052705, 0x062A06,
    0x062D06, 0x073007, 0x083308, 0x093609, 0x093809, 0x0A3B0A, 0x0B3D0B, 0x0A430B,
    0x09480A, 0x094C0A, 0x085109, 0x075509, 0x065808, 0x065C08, 0x056007, 0x046307,
    0x2A6517, 0x3D6721, 0x4A6929, 0x556B2F, 0x537232, 0x527835, 0x507E37, 0x4E833A,
    0x4D893C, 0x4B8E3F, 0x499341, 0x479743, 0x459C45, 0x43A047, 0x5CA15E, 0x6FA270,
    0x7FA37F, 0x7BAB7B, 0x77B377, 0x72BA72, 0x6EC16E, 0x69C869, 0x64CE64, 0x5FD55F,
    0x59DA59, 0x52E052, 0x4BE64B, 0x43EB43, 0x3AF03A, 0x2FF52F, 0x20FA20, 0x00FF00,
    0x39FF14, 0x79FF7B, 0x9EFFA8, 0xBAFFC9, 0xCEFFD8, 0xE0FFE6, 0xF0FFF3, 0xFFFFFF,
];

#[rustfmt::skip]
pub(crate) const BLUE: [u32; RAMP_LEN] = [
    0x000000, 0x01051C, 0x020A2B, 0x030E35, 0x04123E, 0x061545, 0x07184C, 0x081B51,
    0x091D57, 0x0A1F5C, 0x091E6F, 0x091D7F, 0x081C8D, 0x081A99, 0x0719A4, 0x0618AE,
    0x0616B7, 0x0515C0, 0x0513C8, 0x0411D0, 0x040FD8, 0x030DDF, 0x020BE6, 0x0208EC,
    0x0105F3, 0x0103F9, 0x0000FF, 0x0F52BA, 0x1F51FF, 0x2A5DF2, 0x3368E5, 0x3A72D6,
    0x407AC6, 0x4682B4, 0x3685CE, 0x1E88E5, 0x538CCC, 0x6F8FAF, 0x7595B5, 0x7A9BBA,
    0x80A1BF, 0x85A6C5, 0x89ABCA, 0x8EB0CE, 0x92B5D3, 0x96B9D7, 0x9ABEDC, 0x9EC2E0,
    0xA2C6E4, 0xA6CAE8, 0xA9CEEC, 0xADD2F0, 0xB0D6F4, 0xB4DAF8, 0xB7DDFB, 0xBAE1FF,
    0xC4E5FF, 0xCEE9FF, 0xD7EDFF, 0xE0F1FF, 0xE8F4FF, 0xF0F8FF, 0xF8FCFF, 0xFFFFFF,
];

#[rustfmt::skip]
pub(crate) const PURPLE: [u32; RAMP_LEN] = [
    0x000000, 0x110115, 0x1B0221, 0x230429, 0x290530, 0x2E0636, 0x33083C, 0x370941,
    0x3B0A45, 0x3F104E, 0x431556, 0x46195D, 0x4A1C64, 0x4D206A, 0x50226F, 0x532575,
    0x56287A, 0x582A7E, 0x5B2C83, 0x800080, 0x7C217D, 0x78317A, 0x743C77, 0x704674,
    0x6B4E71, 0x8E24AA, 0x9722BC, 0x9F1FCB, 0xA71DD9, 0xAE1AE6, 0xB517F3, 0xBC13FE,
    0xAE4AE6, 0x9F66CA, 0x8E7AA8, 0x947FAF, 0x9A84B6, 0x9F89BC, 0xA48EC3, 0xA992C9,
    0xAE96CE, 0xB39AD4, 0xB79ED9, 0xBCA2DE, 0xC0A6E3, 0xC4A9E8, 0xC8ADED, 0xCCB0F2,
    0xD0B4F6, 0xD3B7FB, 0xD7BAFF, 0xDAC0FF, 0xDEC7FF, 0xE1CDFF, 0xE4D2FF, 0xE7D8FF,
    0xEBDDFF, 0xEEE3FF, 0xF1E8FF, 0xF4EDFF, 0xF7F1FF, 0xF9F6FF, 0xFCFBFF, 0xFFFFFF,
];

#[rustfmt::skip]
pub(crate) const WHITE: [u32; RAMP_LEN] = [
    0x000000, 0x1D1D1D, 0x2C2C2C, 0x373737, 0x3F3F3F, 0x474747, 0x4E4E4E, 0x545454,
    0x595959, 0x5F5F5F, 0x646464, 0x686868, 0x6C6C6C, 0x717171, 0x757575, 0x787878,
    0x7C7C7C, 0x808080, 0x838383, 0x868686, 0x8A8A8A, 0x8D8D8D, 0x909090, 0x939393,
    0x969696, 0x989898, 0x9B9B9B, 0x9E9E9E, 0xA0A0A0, 0xA3A3A3, 0xA5A5A5, 0xA8A8A8,
    0xAAAAAA, 0xADADAD, 0xAFAFAF, 0xB1B1B1, 0xB4B4B4, 0xB6B6B6, 0xB8B8B8, 0xBABABA,
    0xBCBCBC, 0xBEBEBE, 0xC0C0C0, 0xC2C2C2, 0xC4C4C4, 0xC6C6C6, 0xC8C8C8, 0xCACACA,
    0xCCCCCC, 0xCECECE, 0xD0D0D0, 0xD2D2D2, 0xD4D4D4, 0xD5D5D5, 0xD7D7D7, 0xD9D9D9,
    0xE3E0D8, 0xEDE6D6, 0xE8E8E8, 0xF0EAD6, 0xF8F8FF, 0xFAF9F6, 0xFAFAFA, 0xFFFFFF,
];

#[rustfmt::skip]
pub(crate) const BLACK: [u32; RAMP_LEN] = [
    0x000000, 0x050505, 0x0D0D0D, 0x0E1115, 0x0F151B, 0x101820, 0x171B20, 0x1C1E21,
    0x212121, 0x262422, 0x2B2724, 0x2F2A25, 0x322F2B, 0x353331, 0x373636, 0x3A3A3A,
    0x3E3E3E, 0x414141, 0x444444, 0x474747, 0x4A4A4A, 0x555555, 0x5E5E5E, 0x666666,
    0x6E6E6E, 0x757575, 0x7B7B7B, 0x818181, 0x878787, 0x8C8C8C, 0x919191, 0x969696,
    0x9B9B9B, 0xA0A0A0, 0xA4A4A4, 0xA8A8A8, 0xACACAC, 0xB0B0B0, 0xB4B4B4, 0xB8B8B8,
    0xBCBCBC, 0xBFBFBF, 0xC3C3C3, 0xC6C6C6, 0xCACACA, 0xCDCDCD, 0xD0D0D0, 0xD3D3D3,
    0xD6D6D6, 0xD9D9D9, 0xDCDCDC, 0xDFDFDF, 0xE2E2E2, 0xE5E5E5, 0xE8E8E8, 0xEAEAEA,
    0xEDEDED, 0xF0F0F0, 0xF2F2F2, 0xF5F5F5, 0xF8F8F8, 0xFAFAFA, 0xFDFDFD, 0xFFFFFF,
];
