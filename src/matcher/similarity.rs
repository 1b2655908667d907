use image::Rgb;

use crate::{Error, Result};

use super::color_ops;

/// Average nearest-neighbor distance from each reference color to the
/// candidate palette.
///
/// The match is one-directional: a candidate color may be matched by several
/// reference colors or by none, so the measure is asymmetric. Lower is more
/// similar; 0.0 means every reference color has an exact match.
pub(crate) fn palette_similarity(reference: &[Rgb<u8>], candidate: &[Rgb<u8>]) -> Result<f32> {
    if reference.is_empty() || candidate.is_empty() {
        return Err(Error::EmptyPalette);
    }
    let total: f32 = reference
        .iter()
        .map(|reference_color| {
            candidate
                .iter()
                .map(|candidate_color| color_ops::color_distance(reference_color, candidate_color))
                .fold(f32::INFINITY, f32::min)
        })
        .sum();
    Ok(total / reference.len() as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn identical_palettes_score_zero() {
        let palette = [Rgb([255, 0, 0]), Rgb([0, 255, 0]), Rgb([12, 34, 56])];
        assert_eq!(palette_similarity(&palette, &palette).unwrap(), 0.0);
    }

    #[test]
    fn empty_reference_palette_fails() {
        let candidate = [Rgb([255, 0, 0])];
        let result = palette_similarity(&[], &candidate);
        assert!(matches!(result, Err(Error::EmptyPalette)));
    }

    #[test]
    fn empty_candidate_palette_fails() {
        let reference = [Rgb([255, 0, 0])];
        let result = palette_similarity(&reference, &[]);
        assert!(matches!(result, Err(Error::EmptyPalette)));
    }

    #[test]
    fn measure_is_asymmetric() {
        let red = Rgb([255, 0, 0]);
        let green = Rgb([0, 255, 0]);
        // Every color in [red] is covered by [red, green], but not the reverse
        let forward = palette_similarity(&[red], &[red, green]).unwrap();
        let backward = palette_similarity(&[red, green], &[red]).unwrap();
        assert_eq!(forward, 0.0);
        let green_to_red = (2.0f32 * 255.0 * 255.0).sqrt();
        assert!((backward - green_to_red / 2.0).abs() < 0.01);
    }

    #[test]
    fn near_match_scores_small() {
        let reference = [Rgb([128, 128, 128]), Rgb([0, 0, 0])];
        let candidate = [Rgb([127, 127, 127]), Rgb([1, 1, 1])];
        let score = palette_similarity(&reference, &candidate).unwrap();
        // Each reference color is one step away per channel, sqrt(3) apart
        assert!((score - 3.0f32.sqrt()).abs() < 0.01);
    }
}
