use std::path::{Path, PathBuf};

use rodio::mixer::Mixer;

use crate::cinema::{PageElement, attach_all};
use crate::config::Settings;
use crate::library::{is_media_file, scan};
use crate::media::RodioMedia;
use crate::player::Player;

use super::deck::Deck;

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    /// `playdeck [DIR]`
    Player { dir: Option<PathBuf> },
    /// `playdeck cinema FILE...`
    Cinema { paths: Vec<PathBuf> },
}

impl Mode {
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Self {
        let mut args = args.into_iter();
        match args.next() {
            Some(first) if first == "cinema" => Mode::Cinema {
                paths: args.map(PathBuf::from).collect(),
            },
            Some(first) => Mode::Player {
                dir: Some(PathBuf::from(first)),
            },
            None => Mode::Player { dir: None },
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

fn page_element(path: &Path, settings: &Settings, mixer: &Mixer) -> PageElement<RodioMedia> {
    let name = display_name(path);
    if !is_media_file(path, &settings.library.extensions) {
        return PageElement::Other { name };
    }
    match RodioMedia::open(mixer.clone(), path) {
        Ok(media) => PageElement::Media(media),
        Err(e) => {
            log::warn!("cannot open {}: {e}", path.display());
            PageElement::Other { name }
        }
    }
}

pub fn build_deck(
    mode: Mode,
    settings: &Settings,
    mixer: &Mixer,
) -> Result<Deck, Box<dyn std::error::Error>> {
    match mode {
        Mode::Player { dir } => {
            let tracks = dir.map(|d| scan(&d, &settings.library));
            if tracks.as_ref().is_some_and(Vec::is_empty) {
                log::warn!("no playable files found, using the sample playlist");
            }
            let media = RodioMedia::new(mixer.clone());
            Ok(Deck::Player(Player::new(
                media,
                settings.player.clone(),
                tracks,
            )))
        }
        Mode::Cinema { paths } => {
            let elements: Vec<(PageElement<RodioMedia>, String)> = paths
                .iter()
                .map(|p| (page_element(p, settings, mixer), display_name(p)))
                .collect();
            // `attach_all` keeps media elements in order, so their names line up.
            let names: Vec<String> = elements
                .iter()
                .filter(|(e, _)| matches!(e, PageElement::Media(_)))
                .map(|(_, name)| name.clone())
                .collect();
            let overlays = attach_all(elements.into_iter().map(|(e, _)| e), &settings.cinema);
            if overlays.is_empty() {
                return Err("cinema needs at least one playable media file".into());
            }
            Ok(Deck::Cinema { overlays, names })
        }
    }
}
