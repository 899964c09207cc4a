use ratatui::Frame;

use crate::cinema::Cinema;
use crate::media::RodioMedia;
use crate::player::Player;
use crate::ui;

/// The widget(s) the program is running.
pub enum Deck {
    Player(Player<RodioMedia>),
    Cinema {
        overlays: Vec<Cinema<RodioMedia>>,
        names: Vec<String>,
    },
}

impl Deck {
    /// Deliver pending media signals to their widgets.
    pub fn pump_media_events(&mut self) {
        match self {
            Deck::Player(player) => player.pump_media_events(),
            Deck::Cinema { overlays, .. } => {
                for cinema in overlays.iter_mut() {
                    cinema.pump_media_events();
                }
            }
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        match self {
            Deck::Player(player) => ui::draw_player(frame, player),
            Deck::Cinema { overlays, names } => ui::draw_cinemas(frame, overlays, names),
        }
    }
}
