use std::fmt;
use std::path::PathBuf;

use image::Rgb;

use crate::{Error, Result};

use super::similarity;

/// Identifier handed out by the session, unique for the lifetime of its store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ImageId(u32);

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "img_{}", self.0)
    }
}

/// A folder image with its extracted palette. Never mutated once stored.
#[derive(Debug, Clone)]
pub(crate) struct ImageRecord {
    pub name: String,
    pub palette: Vec<Rgb<u8>>,
    pub source: PathBuf,
}

/// The single photo every stored image is ranked against.
/// Replaced wholesale when a new reference is supplied.
#[derive(Debug, Clone)]
pub(crate) struct ReferenceImage {
    pub name: String,
    pub palette: Vec<Rgb<u8>>,
    pub source: PathBuf,
}

/// One ranking result, produced fresh by every call to [`Session::rank`]
#[derive(Debug, Clone)]
pub(crate) struct RankedMatch {
    pub id: ImageId,
    pub record: ImageRecord,
    pub score: f32,
}

/// Insertion-ordered mapping of image id to record
#[derive(Debug, Default)]
pub(crate) struct ImageStore {
    records: Vec<(ImageId, ImageRecord)>,
}

impl ImageStore {
    /// Insert a record, overwriting any existing record with the same id
    pub fn put(&mut self, id: ImageId, record: ImageRecord) {
        match self.records.iter_mut().find(|(existing, _)| *existing == id) {
            Some(slot) => slot.1 = record,
            None => self.records.push((id, record)),
        }
    }

    /// All records in insertion order
    pub fn all(&self) -> impl Iterator<Item = &(ImageId, ImageRecord)> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

/// Owns the image store, the optional reference photo and the id counter
/// for one run. All session state lives here, nothing is process-wide.
#[derive(Debug, Default)]
pub(crate) struct Session {
    store: ImageStore,
    reference: Option<ReferenceImage>,
    image_counter: u32,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &ImageStore {
        &self.store
    }

    /// Store a freshly extracted image under the next monotonic id
    pub fn add_image(&mut self, record: ImageRecord) -> ImageId {
        self.image_counter += 1;
        let id = ImageId(self.image_counter);
        self.store.put(id, record);
        id
    }

    /// Set or replace the reference photo
    pub fn set_reference(&mut self, reference: ReferenceImage) {
        self.reference = Some(reference);
    }

    /// Empty the store and drop the reference. The id counter keeps running
    /// so ids stay unique across resets.
    pub fn clear(&mut self) {
        self.store.clear();
        self.reference = None;
    }

    /// Similarity score of every stored image against the reference,
    /// in insertion order
    pub fn scores(&self) -> Result<Vec<(ImageId, f32)>> {
        let reference = self.reference.as_ref().ok_or(Error::NoReference)?;
        self.store
            .all()
            .map(|(id, record)| {
                similarity::palette_similarity(&reference.palette, &record.palette)
                    .map(|score| (*id, score))
            })
            .collect()
    }

    /// Rank all stored images against the reference photo.
    ///
    /// Returns the matches with `score < threshold`, ascending by score; ties
    /// keep insertion order. An empty result means no image matched, which is
    /// a valid outcome distinct from [`Error::NoReference`].
    pub fn rank(&self, threshold: f32) -> Result<Vec<RankedMatch>> {
        let reference = self.reference.as_ref().ok_or(Error::NoReference)?;
        let mut matches = Vec::new();
        for (id, record) in self.store.all() {
            let score = similarity::palette_similarity(&reference.palette, &record.palette)?;
            if score < threshold {
                matches.push(RankedMatch {
                    id: *id,
                    record: record.clone(),
                    score,
                });
            }
        }
        // Stable sort keeps insertion order for equal scores
        matches.sort_by(|a, b| a.score.total_cmp(&b.score));
        Ok(matches)
    }
}
