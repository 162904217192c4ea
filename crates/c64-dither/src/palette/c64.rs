//! The fixed 16-color C64 palette.
//!
//! Index order is the VIC-II color code order, so a palette index can be
//! written straight into color RAM.

use crate::color::Rgba;

/// The C64 palette as (name, color) pairs, in color code order.
pub const C64_PALETTE: [(&str, Rgba); 16] = [
    ("Black", Rgba::from_u8(0x00, 0x00, 0x00)),
    ("White", Rgba::from_u8(0xff, 0xff, 0xff)),
    ("Red", Rgba::from_u8(0x9f, 0x4e, 0x44)),
    ("Cyan", Rgba::from_u8(0x6a, 0xbf, 0xc6)),
    ("Purple", Rgba::from_u8(0xa0, 0x57, 0xa3)),
    ("Green", Rgba::from_u8(0x5c, 0xab, 0x5e)),
    ("Blue", Rgba::from_u8(0x50, 0x45, 0x9b)),
    ("Yellow", Rgba::from_u8(0xc9, 0xd4, 0x87)),
    ("Orange", Rgba::from_u8(0xa1, 0x68, 0x3c)),
    ("Brown", Rgba::from_u8(0x6d, 0x54, 0x12)),
    ("Light Red", Rgba::from_u8(0xcb, 0x7e, 0x75)),
    ("Dark Gray", Rgba::from_u8(0x62, 0x62, 0x62)),
    ("Mid Gray", Rgba::from_u8(0x89, 0x89, 0x89)),
    ("Light Green", Rgba::from_u8(0x9a, 0xe2, 0x9b)),
    ("Light Blue", Rgba::from_u8(0x88, 0x7e, 0xcb)),
    ("Light Gray", Rgba::from_u8(0xad, 0xad, 0xad)),
];

/// Returns the C64 name of a color code, if it is in range.
pub fn color_name(index: u8) -> Option<&'static str> {
    C64_PALETTE.get(index as usize).map(|(name, _)| *name)
}
