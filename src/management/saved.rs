use crate::{types::ArtistRecord, utils};

/// Artists saved during one session, unique by id, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct SavedSearchSet {
    artists: Vec<ArtistRecord>,
}

impl SavedSearchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the artist unless one with the same id is already saved.
    /// Returns whether it was added.
    pub fn add(&mut self, artist: ArtistRecord) -> bool {
        if self.has(&artist.id) {
            return false;
        }
        self.artists.push(artist);
        true
    }

    pub fn has(&self, artist_id: &str) -> bool {
        self.artists.iter().any(|a| a.id == artist_id)
    }

    /// Case-insensitive lookup by artist name.
    pub fn find_by_name(&self, name: &str) -> Option<&ArtistRecord> {
        let wanted = utils::normalized_name(name);
        self.artists
            .iter()
            .find(|a| utils::normalized_name(&a.name) == wanted)
    }

    /// Removes the first artist whose name matches case-insensitively.
    pub fn remove_by_name(&mut self, name: &str) -> Option<ArtistRecord> {
        let wanted = utils::normalized_name(name);
        let idx = self
            .artists
            .iter()
            .position(|a| utils::normalized_name(&a.name) == wanted)?;
        Some(self.artists.remove(idx))
    }

    pub fn get_artists(&self) -> &[ArtistRecord] {
        &self.artists
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    pub fn clear(&mut self) {
        self.artists.clear();
    }
}
