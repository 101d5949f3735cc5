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

//! Data access layer for the video catalogue.
//!
//! The catalogue is an immutable collection of [`Video`] records fixed at
//! startup. It supports exact-id lookup and full enumeration, nothing else;
//! all mutable state lives in the player.
//!
//! A small built-in catalogue is compiled in for the default deployment, and
//! a TOML catalogue file can be supplied through the application
//! configuration:
//!
//! ```toml
//! [[videos]]
//! id = "amazing_cats_video_id"
//! title = "Amazing Cats"
//! tags = ["#cat", "#animal"]
//! ```

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::model::Video;

const BUILTIN_CATALOG: &[(&str, &str, &[&str])] = &[
    ("Funny Dogs", "funny_dogs_video_id", &["#dog", "#animal"]),
    ("Amazing Cats", "amazing_cats_video_id", &["#cat", "#animal"]),
    ("Another Cat Video", "another_cat_video_id", &["#cat", "#animal"]),
    ("Life at Google", "life_at_google_video_id", &["#google", "#career"]),
    ("Video about nothing", "nothing_video_id", &[]),
];

#[derive(Debug, Deserialize)]
struct CatalogFile {
    videos: Vec<Video>,
}

/// The static collection of all known videos.
#[derive(Debug)]
pub struct VideoLibrary {
    videos: Vec<Video>,
}

impl VideoLibrary {
    pub fn new(videos: Vec<Video>) -> Self {
        Self { videos }
    }

    /// The compiled-in default catalogue.
    pub fn builtin() -> Self {
        let videos = BUILTIN_CATALOG
            .iter()
            .map(|(title, id, tags)| Video {
                id: id.to_string(),
                title: title.to_string(),
                tags: tags.iter().map(|tag| tag.to_string()).collect(),
            })
            .collect();
        Self::new(videos)
    }

    /// Loads a catalogue from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse as a
    /// catalogue document.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let file: CatalogFile = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse catalog file {}", path.display()))?;

        debug!(videos = file.videos.len(), path = %path.display(), "catalog file parsed");

        Ok(Self::new(file.videos))
    }

    /// All records, in their stable enumeration order.
    pub fn all(&self) -> &[Video] {
        &self.videos
    }

    pub fn get(&self, video_id: &str) -> Option<&Video> {
        self.videos.iter().find(|video| video.id == video_id)
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
