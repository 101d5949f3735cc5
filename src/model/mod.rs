// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application—Videos and
//! Playlists—representing the underlying data schema used for catalogue
//! browsing and playback.

use serde::Deserialize;

/// A single catalogue record. Records are supplied by the catalogue and are
/// never mutated by the player.
#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A named, ordered collection of video ids.
///
/// The display name keeps the casing it was created with; lookup casing is
/// the business of the store, not of the playlist itself. The member list
/// never contains the same id twice.
#[derive(Debug, Clone)]
pub struct Playlist {
    name: String,
    video_ids: Vec<String>,
}

impl Playlist {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            video_ids: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member ids in insertion order.
    pub fn video_ids(&self) -> &[String] {
        &self.video_ids
    }

    pub fn contains(&self, video_id: &str) -> bool {
        self.video_ids.iter().any(|id| id == video_id)
    }

    /// Appends an id, returning `false` if it is already a member.
    pub fn add(&mut self, video_id: &str) -> bool {
        if self.contains(video_id) {
            return false;
        }
        self.video_ids.push(video_id.to_string());
        true
    }

    /// Removes an id, returning `false` if it was not a member. The order of
    /// the remaining members is preserved.
    pub fn remove(&mut self, video_id: &str) -> bool {
        let before = self.video_ids.len();
        self.video_ids.retain(|id| id != video_id);
        self.video_ids.len() != before
    }

    pub fn clear(&mut self) {
        self.video_ids.clear();
    }
}
