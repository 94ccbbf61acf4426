//! Visual color tags.  Opaque to the engine; carried through to the renderer.

use std::fmt;

/// A `0xRRGGBB` color.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorTag(pub u32);

/// Default palette, assigned round-robin by agent index.
pub const PALETTE: [ColorTag; 6] = [
    ColorTag(0xfee44e), // yellow
    ColorTag(0xdb4243), // red
    ColorTag(0x0aabd7), // blue
    ColorTag(0x5da14f), // green
    ColorTag(0xb23d75), // purple
    ColorTag(0xfe9c00), // orange
];

impl ColorTag {
    /// Round-robin pick from `palette`; black if the palette is empty.
    pub fn cycled(palette: &[ColorTag], index: usize) -> ColorTag {
        if palette.is_empty() {
            ColorTag::default()
        } else {
            palette[index % palette.len()]
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}
