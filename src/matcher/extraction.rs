use image::{DynamicImage, Rgb};
use itertools::Itertools;

/// Quantization runs on a downscaled copy; dominant colors survive resampling
const SAMPLE_DIM: u32 = 128;

/// Extract up to `palette_size` dominant colors with median-cut quantization.
///
/// Fully transparent pixels are ignored. Colors come out ordered by how much
/// of the image they cover, most dominant first. Images with fewer distinct
/// colors than requested yield a shorter palette; an image with no visible
/// pixels yields an empty one.
pub(crate) fn extract_palette(image: &DynamicImage, palette_size: u8) -> Vec<Rgb<u8>> {
    let sample = image.thumbnail(SAMPLE_DIM, SAMPLE_DIM).to_rgba8();
    let pixels: Vec<[u8; 3]> = sample
        .pixels()
        .filter(|pixel| pixel[3] > 0)
        .map(|pixel| [pixel[0], pixel[1], pixel[2]])
        .collect();
    if pixels.is_empty() {
        return Vec::new();
    }

    let mut buckets = vec![pixels];
    while buckets.len() < palette_size as usize {
        let Some(index) = widest_bucket(&buckets) else {
            break;
        };
        let bucket = buckets.swap_remove(index);
        let (low, high) = split_bucket(bucket);
        buckets.push(low);
        buckets.push(high);
    }

    // A median split can land inside one population and leave two buckets
    // averaging to the same color, so duplicates are dropped
    buckets
        .iter()
        .sorted_by(|a, b| a.len().cmp(&b.len()).reverse())
        .map(|bucket| average_color(bucket))
        .unique()
        .collect()
}

/// Index of the bucket with the widest channel spread, if any bucket can still split
fn widest_bucket(buckets: &[Vec<[u8; 3]>]) -> Option<usize> {
    buckets
        .iter()
        .enumerate()
        .filter(|(_, bucket)| bucket.len() > 1)
        .map(|(index, bucket)| (index, widest_channel(bucket).1))
        .filter(|(_, spread)| *spread > 0)
        .max_by_key(|(_, spread)| *spread)
        .map(|(index, _)| index)
}

/// Channel with the widest min-max spread in the bucket, and that spread
fn widest_channel(bucket: &[[u8; 3]]) -> (usize, u8) {
    (0..3)
        .map(|channel| {
            let (min, max) = bucket
                .iter()
                .map(|pixel| pixel[channel])
                .minmax()
                .into_option()
                .unwrap_or((0, 0));
            (channel, max - min)
        })
        .max_by_key(|(_, spread)| *spread)
        .unwrap_or((0, 0))
}

/// Sort the bucket along its widest channel and cut it at the median
fn split_bucket(mut bucket: Vec<[u8; 3]>) -> (Vec<[u8; 3]>, Vec<[u8; 3]>) {
    let (channel, _) = widest_channel(&bucket);
    bucket.sort_by_key(|pixel| pixel[channel]);
    let high = bucket.split_off(bucket.len() / 2);
    (bucket, high)
}

fn average_color(bucket: &[[u8; 3]]) -> Rgb<u8> {
    let count = bucket.len() as u64;
    let mut sums = [0u64; 3];
    for pixel in bucket {
        for (sum, value) in sums.iter_mut().zip(pixel) {
            *sum += *value as u64;
        }
    }
    Rgb(sums.map(|sum| (sum / count) as u8))
}
