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

//! Playback control and command handling.
//!
//! This module provides the high-level [`VideoPlayer`] used to drive the
//! catalogue simulator. It owns the three pieces of mutable state (the
//! playback slot, the playlist collection, and the moderation registry),
//! enforces the legality of every command against them, and reports results
//! as rendered lines through the injected output sink.
//!
//! Commands never mutate on refusal: each handler validates first and
//! returns a [`PlayerError`] with the state untouched, or fully applies its
//! change and emits the corresponding notifications.

mod error;
mod moderation;
mod playback;
mod playlists;
mod search;

pub use error::{ErrorKind, PlayerError};
pub use moderation::DEFAULT_FLAG_REASON;

use rand::seq::IndexedRandom;

use crate::{
    catalog::VideoLibrary,
    console::{InputSource, OutputSink},
    model::{Playlist, Video},
    player::{moderation::ModerationRegistry, playback::PlaybackState, playlists::PlaylistStore},
    util::format,
};

/// The stateful core of the simulator.
///
/// Holds the catalogue collaborator plus all mutable player state behind
/// command methods; nothing outside this type touches that state directly.
pub struct VideoPlayer {
    library: VideoLibrary,
    playback: PlaybackState,
    playlists: PlaylistStore,
    moderation: ModerationRegistry,
    sink: Box<dyn OutputSink>,
    input: Box<dyn InputSource>,
}

impl VideoPlayer {
    pub fn new(
        library: VideoLibrary,
        sink: Box<dyn OutputSink>,
        input: Box<dyn InputSource>,
    ) -> Self {
        Self {
            library,
            playback: PlaybackState::new(),
            playlists: PlaylistStore::new(),
            moderation: ModerationRegistry::new(),
            sink,
            input,
        }
    }

    /// Writes a line to the output sink on behalf of the caller.
    ///
    /// The command loop uses this to report refusals and help text through
    /// the same channel as ordinary results.
    pub fn emit(&mut self, line: &str) {
        self.sink.line(line);
    }

    /// The id of the loaded video, if any.
    pub fn current_video(&self) -> Option<&str> {
        self.playback.current()
    }

    pub fn is_paused(&self) -> bool {
        self.playback.is_paused()
    }

    pub fn is_flagged(&self, video_id: &str) -> bool {
        self.moderation.is_flagged(video_id)
    }

    pub fn playlist(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(name)
    }

    pub fn number_of_videos(&mut self) {
        self.sink
            .line(&format!("{} videos in the library", self.library.len()));
    }

    /// Lists every catalogue video, sorted by its rendered descriptor.
    pub fn show_all_videos(&mut self) {
        let mut lines: Vec<String> = self
            .library
            .all()
            .iter()
            .map(|video| self.render(video))
            .collect();
        lines.sort();

        self.sink.line("Here's a list of all available videos:");
        for line in lines {
            self.sink.line(&format!("\t{line}"));
        }
    }

    /// Loads and plays a video, stopping whatever was playing first.
    ///
    /// Playing the id that is already loaded restarts it, emitting the stop
    /// and play notifications again.
    pub fn play_video(&mut self, video_id: &str) -> Result<(), PlayerError> {
        let Some(video) = self.library.get(video_id) else {
            return Err(PlayerError::new(
                ErrorKind::VideoNotFound,
                "Cannot play video: Video does not exist",
            ));
        };
        let title = video.title.clone();

        if let Some(reason) = self.moderation.reason(video_id) {
            return Err(PlayerError::new(
                ErrorKind::VideoFlagged,
                format!("Cannot play video: Video is currently flagged (reason: {reason})"),
            ));
        }

        if self.playback.current().is_some() {
            self.stop_video()?;
        }

        self.playback.load(video_id);
        self.sink.line(&format!("Playing video: {title}"));
        Ok(())
    }

    pub fn stop_video(&mut self) -> Result<(), PlayerError> {
        if self.playback.current().is_none() {
            return Err(PlayerError::new(
                ErrorKind::NothingPlaying,
                "Cannot stop video: No video is currently playing",
            ));
        }

        if let Some(video_id) = self.playback.stop() {
            let title = self.title_of(&video_id);
            self.sink.line(&format!("Stopping video: {title}"));
        }
        Ok(())
    }

    /// Plays a video chosen uniformly among the unflagged catalogue videos.
    pub fn play_random_video(&mut self) -> Result<(), PlayerError> {
        let video_id = {
            let candidates: Vec<&Video> = self
                .library
                .all()
                .iter()
                .filter(|video| !self.moderation.is_flagged(&video.id))
                .collect();

            let Some(video) = candidates.choose(&mut rand::rng()) else {
                return Err(PlayerError::new(
                    ErrorKind::NoPlayableVideos,
                    "No videos available",
                ));
            };
            video.id.clone()
        };

        self.play_video(&video_id)
    }

    pub fn pause_video(&mut self) -> Result<(), PlayerError> {
        let Some(video_id) = self.playback.current() else {
            return Err(PlayerError::new(
                ErrorKind::NothingPlaying,
                "Cannot pause video: No video is currently playing",
            ));
        };
        let title = self.title_of(video_id);

        if self.playback.is_paused() {
            self.sink.line(&format!("Video already paused: {title}"));
        } else {
            self.playback.pause();
            self.sink.line(&format!("Pausing video: {title}"));
        }
        Ok(())
    }

    pub fn continue_video(&mut self) -> Result<(), PlayerError> {
        let Some(video_id) = self.playback.current() else {
            return Err(PlayerError::new(
                ErrorKind::NothingPlaying,
                "Cannot continue video: No video is currently playing",
            ));
        };
        let title = self.title_of(video_id);

        if self.playback.is_paused() {
            self.playback.resume();
            self.sink.line(&format!("Continuing video: {title}"));
        } else {
            self.sink.line("Cannot continue video: Video is not paused");
        }
        Ok(())
    }

    pub fn show_playing(&mut self) -> Result<(), PlayerError> {
        let Some(video_id) = self.playback.current() else {
            return Err(PlayerError::new(
                ErrorKind::NothingPlaying,
                "No video is currently playing",
            ));
        };

        let descriptor = match self.library.get(video_id) {
            Some(video) => format::video_line(video),
            None => video_id.to_string(),
        };
        let line = if self.playback.is_paused() {
            format!("Currently playing: {descriptor} - PAUSED")
        } else {
            format!("Currently playing: {descriptor}")
        };
        self.sink.line(&line);
        Ok(())
    }

    pub fn create_playlist(&mut self, name: &str) -> Result<(), PlayerError> {
        if !self.playlists.create(name) {
            return Err(PlayerError::new(
                ErrorKind::PlaylistAlreadyExists,
                "Cannot create playlist: A playlist with the same name already exists",
            ));
        }
        self.sink
            .line(&format!("Successfully created new playlist: {name}"));
        Ok(())
    }

    /// Appends a video to a playlist.
    ///
    /// Checks run in a fixed order: playlist existence, video existence,
    /// flag state, membership. Refusal lines render the playlist name as the
    /// caller typed it.
    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> Result<(), PlayerError> {
        let Some(playlist) = self.playlists.get_mut(name) else {
            return Err(PlayerError::new(
                ErrorKind::PlaylistNotFound,
                format!("Cannot add video to {name}: Playlist does not exist"),
            ));
        };
        let Some(video) = self.library.get(video_id) else {
            return Err(PlayerError::new(
                ErrorKind::VideoNotFound,
                format!("Cannot add video to {name}: Video does not exist"),
            ));
        };
        if let Some(reason) = self.moderation.reason(video_id) {
            return Err(PlayerError::new(
                ErrorKind::VideoFlagged,
                format!("Cannot add video to {name}: Video is currently flagged (reason: {reason})"),
            ));
        }
        if !playlist.add(video_id) {
            return Err(PlayerError::new(
                ErrorKind::VideoAlreadyAdded,
                format!("Cannot add video to {name}: Video already added"),
            ));
        }

        let title = video.title.clone();
        self.sink.line(&format!("Added video to {name}: {title}"));
        Ok(())
    }

    pub fn remove_from_playlist(&mut self, name: &str, video_id: &str) -> Result<(), PlayerError> {
        let Some(playlist) = self.playlists.get_mut(name) else {
            return Err(PlayerError::new(
                ErrorKind::PlaylistNotFound,
                format!("Cannot remove video from {name}: Playlist does not exist"),
            ));
        };
        let Some(video) = self.library.get(video_id) else {
            return Err(PlayerError::new(
                ErrorKind::VideoNotFound,
                format!("Cannot remove video from {name}: Video does not exist"),
            ));
        };
        if !playlist.remove(video_id) {
            return Err(PlayerError::new(
                ErrorKind::VideoNotInPlaylist,
                format!("Cannot remove video from {name}: Video is not in playlist"),
            ));
        }

        let title = video.title.clone();
        self.sink
            .line(&format!("Removed video from {name}: {title}"));
        Ok(())
    }

    /// Empties a playlist, keeping the playlist itself.
    pub fn clear_playlist(&mut self, name: &str) -> Result<(), PlayerError> {
        let Some(playlist) = self.playlists.get_mut(name) else {
            return Err(PlayerError::new(
                ErrorKind::PlaylistNotFound,
                format!("Cannot clear playlist {name}: Playlist does not exist"),
            ));
        };
        playlist.clear();
        self.sink
            .line(&format!("Successfully removed all videos from {name}"));
        Ok(())
    }

    pub fn delete_playlist(&mut self, name: &str) -> Result<(), PlayerError> {
        if !self.playlists.remove(name) {
            return Err(PlayerError::new(
                ErrorKind::PlaylistNotFound,
                format!("Cannot delete playlist {name}: Playlist does not exist"),
            ));
        }
        self.sink.line(&format!("Deleted playlist: {name}"));
        Ok(())
    }

    pub fn show_all_playlists(&mut self) {
        if self.playlists.is_empty() {
            self.sink.line("No playlists exist yet");
            return;
        }

        self.sink.line("Showing all playlists:");
        for name in self.playlists.names() {
            self.sink.line(&format!("\t{name}"));
        }
    }

    /// Lists a playlist's videos in insertion order, flag annotations
    /// included.
    pub fn show_playlist(&mut self, name: &str) -> Result<(), PlayerError> {
        let Some(playlist) = self.playlists.get(name) else {
            return Err(PlayerError::new(
                ErrorKind::PlaylistNotFound,
                format!("Cannot show playlist {name}: Playlist does not exist"),
            ));
        };

        let mut lines = vec![format!("Showing playlist: {name}")];
        if playlist.video_ids().is_empty() {
            lines.push("\tNo videos here yet".to_string());
        } else {
            for video_id in playlist.video_ids() {
                let rendered = match self.library.get(video_id) {
                    Some(video) => self.render(video),
                    None => video_id.clone(),
                };
                lines.push(format!("\t{rendered}"));
            }
        }

        for line in lines {
            self.sink.line(&line);
        }
        Ok(())
    }

    /// Flags a video, stopping it first if it is the one loaded.
    pub fn flag_video(&mut self, video_id: &str, reason: Option<&str>) -> Result<(), PlayerError> {
        let Some(video) = self.library.get(video_id) else {
            return Err(PlayerError::new(
                ErrorKind::VideoNotFound,
                "Cannot flag video: Video does not exist",
            ));
        };
        let title = video.title.clone();

        if self.moderation.is_flagged(video_id) {
            return Err(PlayerError::new(
                ErrorKind::VideoAlreadyFlagged,
                "Cannot flag video: Video is already flagged",
            ));
        }

        if self.playback.current() == Some(video_id) {
            self.stop_video()?;
        }

        let reason = reason.unwrap_or(DEFAULT_FLAG_REASON);
        self.moderation.flag(video_id, reason);
        self.sink
            .line(&format!("Successfully flagged video: {title} (reason: {reason})"));
        Ok(())
    }

    pub fn allow_video(&mut self, video_id: &str) -> Result<(), PlayerError> {
        let Some(video) = self.library.get(video_id) else {
            return Err(PlayerError::new(
                ErrorKind::VideoNotFound,
                "Cannot remove flag from video: Video does not exist",
            ));
        };
        let title = video.title.clone();

        if !self.moderation.allow(video_id) {
            return Err(PlayerError::new(
                ErrorKind::VideoNotFlagged,
                "Cannot remove flag from video: Video is not flagged",
            ));
        }
        self.sink
            .line(&format!("Successfully removed flag from video: {title}"));
        Ok(())
    }

    fn render(&self, video: &Video) -> String {
        match self.moderation.reason(&video.id) {
            Some(reason) => format::flagged_video_line(video, reason),
            None => format::video_line(video),
        }
    }

    fn title_of(&self, video_id: &str) -> String {
        self.library
            .get(video_id)
            .map_or_else(|| video_id.to_string(), |video| video.title.clone())
    }
}
