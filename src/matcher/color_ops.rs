use color::{AlphaColor, ParseError};
use image::Rgb;
use itertools::Itertools;

/// Parse a string into a color, with format like this #RRGGBB (used by test fixtures)
#[allow(dead_code)]
pub(crate) fn parse_hex(value: &str) -> Result<Rgb<u8>, ParseError> {
    let color = color::parse_color(value)?;
    let color: AlphaColor<color::Srgb> = color.to_alpha_color();
    let [r, g, b, _] = color.to_rgba8().to_u8_array();
    Ok(Rgb([r, g, b]))
}

/// Format a color as uppercase #RRGGBB
pub(crate) fn to_hex(color: &Rgb<u8>) -> String {
    format!("#{}", color.0.iter().map(|c| format!("{c:02X}")).join(""))
}

/// Euclidean distance between two colors in RGB space
pub(crate) fn color_distance(a: &Rgb<u8>, b: &Rgb<u8>) -> f32 {
    let r_diff = a[0] as f32 - b[0] as f32;
    let g_diff = a[1] as f32 - b[1] as f32;
    let b_diff = a[2] as f32 - b[2] as f32;
    (r_diff * r_diff + g_diff * g_diff + b_diff * b_diff).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        let color = Rgb([18, 52, 86]);
        assert_eq!(color_distance(&color, &color), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Rgb([255, 0, 0]);
        let b = Rgb([0, 128, 64]);
        assert_eq!(color_distance(&a, &b), color_distance(&b, &a));
    }

    #[test]
    fn distance_between_primaries() {
        let red = Rgb([255, 0, 0]);
        let green = Rgb([0, 255, 0]);
        let expected = (2.0f32 * 255.0 * 255.0).sqrt();
        assert!((color_distance(&red, &green) - expected).abs() < 0.01);
    }

    #[test]
    fn distance_maximum() {
        let black = Rgb([0, 0, 0]);
        let white = Rgb([255, 255, 255]);
        let expected = (3.0f32 * 255.0 * 255.0).sqrt();
        assert!((color_distance(&black, &white) - expected).abs() < 0.01);
    }

    #[test]
    fn hex_formatting_is_uppercase_and_zero_padded() {
        assert_eq!(to_hex(&Rgb([0, 0, 0])), "#000000");
        assert_eq!(to_hex(&Rgb([255, 255, 255])), "#FFFFFF");
        assert_eq!(to_hex(&Rgb([1, 10, 171])), "#010AAB");
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(parse_hex("#FF0000").unwrap(), Rgb([255, 0, 0]));
        assert_eq!(parse_hex("#808080").unwrap(), Rgb([128, 128, 128]));
        assert_eq!(parse_hex("#010AAB").unwrap(), Rgb([1, 10, 171]));
    }

    #[test]
    fn hex_round_trip_is_lossless() {
        for value in [0u8, 1, 17, 85, 127, 128, 200, 254, 255] {
            let color = Rgb([value, value.wrapping_add(3), value.wrapping_mul(7)]);
            assert_eq!(parse_hex(&to_hex(&color)).unwrap(), color);
        }
    }
}
