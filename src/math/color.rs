/// Splits a `0xRRGGBB` value into sRGB components in [0, 1]
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// Converts one sRGB channel to linear light
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// `0xRRGGBB` straight to linear RGB, the space the shaders light in
pub fn hex_to_linear(hex: u32) -> [f32; 3] {
    hex_to_rgb(hex).map(srgb_to_linear)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb_cube_blue() {
        let rgb = hex_to_rgb(0x66ccff);
        assert!((rgb[0] - 0.4).abs() < 0.01);
        assert!((rgb[1] - 0.8).abs() < 0.01);
        assert!((rgb[2] - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_hex_to_rgb_black_and_white() {
        assert_eq!(hex_to_rgb(0x000000), [0.0, 0.0, 0.0]);
        assert_eq!(hex_to_rgb(0xffffff), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_srgb_to_linear_endpoints() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        // mid grey is darker in linear space
        assert!(srgb_to_linear(0.5) < 0.25);
    }

    #[test]
    fn test_hex_to_linear_is_monotonic_per_channel() {
        let dark = hex_to_linear(0x666666);
        let light = hex_to_linear(0xbbbbbb);
        for i in 0..3 {
            assert!(dark[i] < light[i]);
        }
    }
}
