use std::collections::HashSet;

use log::warn;
use serde::Deserialize;

use crate::config::ConfigError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Album {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub images: Vec<String>,
}

impl Album {
    /// The cover is the first image; it is still part of the gallery.
    pub fn cover(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Albums in display order plus the ids that are shown but not openable.
/// Never mutated once loaded.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AlbumCatalog {
    albums: Vec<Album>,
    disabled: HashSet<String>,
}

impl AlbumCatalog {
    pub fn new(albums: Vec<Album>, disabled: impl IntoIterator<Item = String>) -> Self {
        Self {
            albums,
            disabled: disabled.into_iter().collect(),
        }
    }

    pub fn albums(&self) -> impl Iterator<Item = &Album> {
        self.albums.iter()
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Album> {
        self.albums.iter().find(|album| album.id == id)
    }

    pub fn is_disabled(&self, id: &str) -> bool {
        self.disabled.contains(id)
    }

    /// Owned copy of an album's images, or `None` when the album is unknown
    /// or disabled.
    pub fn images_for(&self, id: &str) -> Option<Vec<String>> {
        if self.is_disabled(id) {
            return None;
        }
        self.get(id).map(|album| album.images.clone())
    }

    /// Duplicate ids are fatal. An album without images is kept: it shows no
    /// cover and opening it renders nothing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for album in &self.albums {
            if !seen.insert(album.id.as_str()) {
                return Err(ConfigError::DuplicateAlbum(album.id.clone()));
            }
            if album.images.is_empty() {
                warn!("Album {} has no images", album.id);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn sample_catalog() -> AlbumCatalog {
    let album = |id: &str, images: &[&str]| Album {
        id: id.to_string(),
        title: None,
        images: images.iter().map(|s| s.to_string()).collect(),
    };
    AlbumCatalog::new(
        vec![
            album("album1", &["A", "B", "C"]),
            album("album2", &["D"]),
            album("album3", &["E", "F"]),
        ],
        vec!["album2".to_string()],
    )
}
