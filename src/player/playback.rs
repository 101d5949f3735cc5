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

//! Playback slot state.
//!
//! At most one video is loaded at a time, and the pause flag is only ever
//! set while a video is loaded.

#[derive(Debug, Default)]
pub struct PlaybackState {
    current: Option<String>,
    paused: bool,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id of the loaded video, if any.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Loads a video. Always starts unpaused.
    pub fn load(&mut self, video_id: &str) {
        self.current = Some(video_id.to_string());
        self.paused = false;
    }

    /// Unloads the slot, returning the id that was loaded.
    pub fn stop(&mut self) -> Option<String> {
        self.paused = false;
        self.current.take()
    }

    pub fn pause(&mut self) {
        if self.current.is_some() {
            self.paused = true;
        }
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }
}
