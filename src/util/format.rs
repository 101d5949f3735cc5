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

use crate::model::Video;

/// Renders a tag set as a bracketed, space-separated list.
///
/// Tags keep their original casing. An empty tag set renders as `[]`.
pub fn tag_list(tags: &[String]) -> String {
    format!("[{}]", tags.join(" "))
}

/// Formats the canonical descriptor of a video.
///
/// This is the form used by every listing command, for example
/// `Amazing Cats (amazing_cats_video_id) [#cat #animal]`.
pub fn video_line(video: &Video) -> String {
    format!("{} ({}) {}", video.title, video.id, tag_list(&video.tags))
}

/// Formats the descriptor of a flagged video, with the flag annotation
/// appended.
pub fn flagged_video_line(video: &Video, reason: &str) -> String {
    format!("{} - FLAGGED (reason: {})", video_line(video), reason)
}
