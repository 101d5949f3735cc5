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

//! Catalogue search commands.
//!
//! Both searches are case-insensitive substring matches, over the title or
//! over the rendered tag list. Flagged videos are never candidates. After a
//! non-empty listing the player reads one line from its input source; a
//! 1-based number within range plays that result, anything else is a no.

use crate::{
    model::Video,
    player::{PlayerError, VideoPlayer},
    util::format,
};

impl VideoPlayer {
    /// Searches video titles for the given term.
    pub fn search_videos(&mut self, term: &str) -> Result<(), PlayerError> {
        self.search_catalog(term, |video, needle| {
            video.title.to_lowercase().contains(needle)
        })
    }

    /// Searches rendered tag lists for the given tag.
    pub fn search_videos_with_tag(&mut self, tag: &str) -> Result<(), PlayerError> {
        self.search_catalog(tag, |video, needle| {
            format::tag_list(&video.tags).to_lowercase().contains(needle)
        })
    }

    fn search_catalog(
        &mut self,
        term: &str,
        matches: impl Fn(&Video, &str) -> bool,
    ) -> Result<(), PlayerError> {
        let needle = term.to_lowercase();
        let mut results: Vec<(String, String)> = self
            .library
            .all()
            .iter()
            .filter(|video| !self.moderation.is_flagged(&video.id))
            .filter(|video| matches(video, &needle))
            .map(|video| (video.id.clone(), format::video_line(video)))
            .collect();
        // Tuples of (id, descriptor), so this orders by video id.
        results.sort();

        if results.is_empty() {
            self.sink.line(&format!("No search results for {term}"));
            return Ok(());
        }

        self.sink.line(&format!("Here are the results for {term}:"));
        for (index, (_, descriptor)) in results.iter().enumerate() {
            self.sink.line(&format!("    {}) {descriptor}", index + 1));
        }
        self.sink
            .line("Would you like to play any of the above? If yes, specify the number of the video.");
        self.sink
            .line("If your answer is not a valid number, we will assume it's a no.");

        let Some(answer) = self.input.read_line() else {
            return Ok(());
        };
        let Ok(choice) = answer.trim().parse::<usize>() else {
            return Ok(());
        };
        if (1..=results.len()).contains(&choice) {
            let video_id = results[choice - 1].0.clone();
            self.play_video(&video_id)?;
        }
        Ok(())
    }
}
