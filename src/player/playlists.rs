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

//! Playlist collection state.
//!
//! Playlists are keyed by the lowercase form of their name, so `My List`
//! and `my list` are the same playlist. The display casing is whatever the
//! playlist was created with.

use std::collections::HashMap;

use crate::model::Playlist;

#[derive(Debug, Default)]
pub struct PlaylistStore {
    playlists: HashMap<String, Playlist>,
}

impl PlaylistStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(name: &str) -> String {
        name.to_lowercase()
    }

    /// Creates an empty playlist, returning `false` if a playlist with the
    /// same case-insensitive name already exists.
    pub fn create(&mut self, name: &str) -> bool {
        let key = Self::key(name);
        if self.playlists.contains_key(&key) {
            return false;
        }
        self.playlists.insert(key, Playlist::new(name));
        true
    }

    pub fn get(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&Self::key(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Playlist> {
        self.playlists.get_mut(&Self::key(name))
    }

    /// Deletes a playlist, returning `false` if it did not exist.
    pub fn remove(&mut self, name: &str) -> bool {
        self.playlists.remove(&Self::key(name)).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    /// Display names of all playlists, in plain lexicographic order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .playlists
            .values()
            .map(|playlist| playlist.name().to_string())
            .collect();
        names.sort();
        names
    }
}
