//! The fixed 16-colour EGA palette.

use crate::color::Rgba8;

/// Number of palette entries.
pub const PALETTE_SIZE: usize = 16;

/// Index of the colour used when a command carries an index outside the palette.
pub const FALLBACK_INDEX: u8 = 15;

/// Index painted by a reset.
pub const BACKGROUND_INDEX: u8 = 0;

/// EGA colours in index order.
pub const EGA_PALETTE: [Rgba8; PALETTE_SIZE] = [
    Rgba8::from_rgb24(0x000000), // black
    Rgba8::from_rgb24(0x0000AA), // blue
    Rgba8::from_rgb24(0x00AA00), // green
    Rgba8::from_rgb24(0x00AAAA), // cyan
    Rgba8::from_rgb24(0xAA0000), // red
    Rgba8::from_rgb24(0xAA00AA), // magenta
    Rgba8::from_rgb24(0xAA5500), // brown
    Rgba8::from_rgb24(0xAAAAAA), // light gray
    Rgba8::from_rgb24(0x555555), // dark gray
    Rgba8::from_rgb24(0x5555FF), // light blue
    Rgba8::from_rgb24(0x55FF55), // light green
    Rgba8::from_rgb24(0x55FFFF), // light cyan
    Rgba8::from_rgb24(0xFF5555), // light red
    Rgba8::from_rgb24(0xFF55FF), // light magenta
    Rgba8::from_rgb24(0xFFFF55), // yellow
    Rgba8::from_rgb24(0xFFFFFF), // white
];

/// Resolve a palette index, falling back to white for anything out of range.
#[inline]
pub fn color(index: u8) -> Rgba8 {
    EGA_PALETTE
        .get(index as usize)
        .copied()
        .unwrap_or(EGA_PALETTE[FALLBACK_INDEX as usize])
}

/// Human-readable name of a palette entry, if the index is valid.
pub fn name(index: u8) -> Option<&'static str> {
    const NAMES: [&str; PALETTE_SIZE] = [
        "black",
        "blue",
        "green",
        "cyan",
        "red",
        "magenta",
        "brown",
        "light gray",
        "dark gray",
        "light blue",
        "light green",
        "light cyan",
        "light red",
        "light magenta",
        "yellow",
        "white",
    ];
    NAMES.get(index as usize).copied()
}
