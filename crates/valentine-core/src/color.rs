use glam::{Vec3, Vec4};

/// Convert a packed `0xRRGGBB` value into linear-ish 0..1 RGB components.
#[inline]
pub fn rgb_from_hex(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    Vec3::new(r, g, b)
}

#[inline]
pub fn rgba_from_hex(hex: u32, alpha: f32) -> Vec4 {
    rgb_from_hex(hex).extend(alpha)
}
