use serde::Deserialize;

/// One photo in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    pub category: String,
}

const GALLERY_SEED: &str = include_str!("../data/gallery.json");

/// Lightbox state for the photo gallery. The image list and the index of the
/// currently enlarged photo live here as instance state rather than in
/// page-level globals.
pub struct GalleryController {
    images: Vec<GalleryImage>,
    current: usize,
}

impl GalleryController {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self { images, current: 0 }
    }

    /// Load the built-in photo set.
    pub fn standard() -> Self {
        let images: Vec<GalleryImage> =
            serde_json::from_str(GALLERY_SEED).expect("Bad gallery seed JSON");
        Self::new(images)
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_image(&self) -> Option<&GalleryImage> {
        self.images.get(self.current)
    }

    /// Open the lightbox at a photo. Out-of-range indices are ignored.
    pub fn open(&mut self, index: usize) {
        if index < self.images.len() {
            self.current = index;
        }
    }

    /// Index of the photo after the current one, wrapping past the end.
    pub fn next_index(&self) -> usize {
        if self.images.is_empty() {
            return 0;
        }
        (self.current + 1) % self.images.len()
    }

    /// Index of the photo before the current one, wrapping before the start.
    pub fn prev_index(&self) -> usize {
        if self.images.is_empty() {
            return 0;
        }
        (self.current + self.images.len() - 1) % self.images.len()
    }

    /// Step to the next photo.
    pub fn next(&mut self) {
        self.current = self.next_index();
    }

    /// Step to the previous photo.
    pub fn prev(&mut self) {
        self.current = self.prev_index();
    }

    /// "3 / 12" counter shown under the enlarged photo.
    pub fn counter(&self) -> String {
        if self.images.is_empty() {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.current + 1, self.images.len())
    }

    /// Photos in a category; "all" returns everything.
    pub fn filtered(&self, filter: &str) -> Vec<&GalleryImage> {
        self.images
            .iter()
            .filter(|img| filter == "all" || img.category == filter)
            .collect()
    }

    /// Distinct categories in first-seen order, for the filter buttons.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for img in &self.images {
            if !out.contains(&img.category.as_str()) {
                out.push(&img.category);
            }
        }
        out
    }
}
