use std::path::Path;

use lofty::prelude::{ItemKey, TaggedFileExt};
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::{Album, Track};

const UNKNOWN_ARTIST: &str = "Unknown Artist";
const UNKNOWN_ALBUM: &str = "Unknown Album";
const COVER_NAMES: [&str; 4] = ["cover.jpg", "cover.png", "folder.jpg", "folder.png"];

/// Whether `path` carries one of the configured `extensions` (case-insensitive).
pub fn is_media_file(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            extensions
                .iter()
                .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
                .any(|e| !e.is_empty() && e == ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Look for a conventional cover image next to the track.
fn find_cover(dir: &Path) -> Option<String> {
    COVER_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
        .map(|p| p.display().to_string())
}

fn read_track(path: &Path) -> Track {
    let mut title = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN")
        .to_string();
    let mut artist = UNKNOWN_ARTIST.to_string();
    let mut album = UNKNOWN_ALBUM.to_string();

    match lofty::read_from_path(path) {
        Ok(tagged) => {
            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                let read = |key: &ItemKey| {
                    tag.get_string(key)
                        .map(str::trim)
                        .filter(|v| !v.is_empty())
                        .map(str::to_string)
                };
                if let Some(v) = read(&ItemKey::TrackTitle) {
                    title = v;
                }
                if let Some(v) = read(&ItemKey::TrackArtist) {
                    artist = v;
                }
                if let Some(v) = read(&ItemKey::AlbumTitle) {
                    album = v;
                }
            }
        }
        Err(e) => log::debug!("no tags for {}: {e}", path.display()),
    }

    Track {
        title,
        artist,
        album: Album {
            name: album,
            image: path.parent().and_then(find_cover),
        },
        file: path.display().to_string(),
    }
}

/// Collect the playable files under `dir` in file-name order.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    let mut walker = WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .sort_by_file_name();

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    let tracks: Vec<Track> = walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file() && is_media_file(e.path(), &settings.extensions))
        .map(|e| read_track(e.path()))
        .collect();

    log::debug!("scanned {} tracks under {}", tracks.len(), dir.display());
    tracks
}
