//! Photo gallery - the ordered ornament collection
//!
//! Insertion order is newest first; the combined list is truncated to the 30
//! most recent members after every add. Removal by id is a no-op when the id
//! is absent. State lives in memory only and does not survive the process.

use bytes::Bytes;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tinsel_core::PhotoId;

/// Hard cap on gallery size.
pub const MAX_PHOTOS: usize = 30;

/// Number of placeholder photos seeded at startup.
pub const PLACEHOLDER_COUNT: usize = 15;

/// One photo-ornament's identity and image payload.
#[derive(Debug, Clone)]
pub struct PhotoData {
    pub id: PhotoId,
    pub image: Bytes,
}

/// The capped, ordered photo collection.
#[derive(Debug)]
pub struct Gallery {
    photos: Vec<PhotoData>,
    rng: StdRng,
}

impl Gallery {
    /// Empty gallery with an entropy-seeded id generator.
    pub fn new() -> Self {
        Self {
            photos: Vec::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Empty gallery with a deterministic id generator.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            photos: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Gallery pre-seeded with `count` placeholder photos, matching the
    /// startup state of the host application.
    pub fn with_placeholders(count: usize) -> Self {
        let mut gallery = Self::new();
        let images = (0..count.min(MAX_PHOTOS))
            .map(|i| Bytes::from(vec![i as u8]))
            .collect();
        gallery.add_photos(images);
        gallery
    }

    /// Add photos, newest first. Each blob gets a generated unique id; the
    /// combined list is truncated to [`MAX_PHOTOS`]. Returns the assigned
    /// ids in input order.
    pub fn add_photos(&mut self, images: Vec<Bytes>) -> Vec<PhotoId> {
        let new_photos: Vec<PhotoData> = images
            .into_iter()
            .map(|image| PhotoData {
                id: self.next_id(),
                image,
            })
            .collect();
        let ids: Vec<PhotoId> = new_photos.iter().map(|p| p.id).collect();

        let mut combined = new_photos;
        combined.append(&mut self.photos);
        combined.truncate(MAX_PHOTOS);
        self.photos = combined;

        ids
    }

    /// Remove a photo by id. Returns whether anything was removed.
    pub fn remove(&mut self, id: PhotoId) -> bool {
        let before = self.photos.len();
        self.photos.retain(|p| p.id != id);
        self.photos.len() != before
    }

    /// Current collection, newest first.
    pub fn photos(&self) -> &[PhotoData] {
        &self.photos
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn contains(&self, id: PhotoId) -> bool {
        self.photos.iter().any(|p| p.id == id)
    }

    fn next_id(&mut self) -> PhotoId {
        loop {
            let id = PhotoId::new(self.rng.gen());
            if id != PhotoId::ZERO && !self.contains(id) {
                return id;
            }
        }
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}
