use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::cinema::Cinema;
use crate::media::MediaElement;
use crate::player::{Player, SongAction};
use crate::ui;

use super::deck::Deck;

/// Pointer state tracked across iterations so hover changes fire once.
pub struct EventLoopState {
    media_hovered: Vec<bool>,
    volume_hovered: Vec<bool>,
}

impl EventLoopState {
    pub fn new(deck: &Deck) -> Self {
        match deck {
            Deck::Player(_) => Self::for_overlays(0),
            Deck::Cinema { overlays, .. } => Self::for_overlays(overlays.len()),
        }
    }

    fn for_overlays(count: usize) -> Self {
        Self {
            media_hovered: vec![false; count],
            volume_hovered: vec![false; count],
        }
    }
}

/// Main terminal event loop: forwards media signals, draws, and routes
/// mouse input to the widgets. Returns `Ok(())` when `q`/`Esc` is pressed.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    deck: &mut Deck,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        deck.pump_media_events();

        let area = terminal.draw(|f| deck.draw(f))?.area;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => handle_mouse(mouse, area, deck, state),
                _ => {}
            }
        }
    }
}

fn handle_mouse(mouse: MouseEvent, area: Rect, deck: &mut Deck, state: &mut EventLoopState) {
    let pos = Position::new(mouse.column, mouse.row);
    let click = matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left));
    match deck {
        Deck::Player(player) => {
            if click {
                player_click(player, area, pos);
            }
        }
        Deck::Cinema { overlays, .. } => {
            if click || matches!(mouse.kind, MouseEventKind::Moved) {
                cinema_pointer(overlays, area, pos, click, state);
            }
        }
    }
}

fn player_click<M: MediaElement>(player: &mut Player<M>, area: Rect, pos: Position) {
    let layout = ui::player_layout(area);
    let result = if layout.prev.contains(pos) {
        player.change_song(SongAction::Prev)
    } else if layout.next.contains(pos) {
        player.change_song(SongAction::Next)
    } else if layout.play.contains(pos) {
        player.play();
        Ok(())
    } else if let Some(index) = layout.track_at(pos, player.state().index, player.tracks().len()) {
        player.select(index)
    } else {
        Ok(())
    };

    if let Err(e) = result {
        log::warn!("{e}");
    }
}

/// Cells between the first and last slider cell; a single cell still maps onto 0.
fn slider_span(width: u16) -> u16 {
    width.saturating_sub(1).max(1)
}

fn cinema_pointer<M: MediaElement>(
    overlays: &mut [Cinema<M>],
    area: Rect,
    pos: Position,
    click: bool,
    state: &mut EventLoopState,
) {
    let full_screen = overlays.iter().position(|c| c.state().full_screen);
    let panels = ui::cinema_panels(area, overlays.len(), full_screen);

    for (i, (cinema, panel)) in overlays.iter_mut().zip(panels).enumerate() {
        let inside = panel.is_some_and(|p| p.contains(pos));
        if inside != state.media_hovered[i] {
            state.media_hovered[i] = inside;
            if inside {
                cinema.media_mouseover();
            } else {
                cinema.media_mouseout();
            }
        }

        let Some(panel) = panel else {
            continue;
        };
        let Some(bar) = ui::cinema_layout(panel, cinema.options(), cinema.toolbar()).toolbar
        else {
            continue;
        };

        let over_volume =
            bar.volume_btn.contains(pos) || bar.volume_bar.is_some_and(|r| r.contains(pos));
        if over_volume != state.volume_hovered[i] {
            state.volume_hovered[i] = over_volume;
            if over_volume {
                cinema.volume_mouseover();
            } else {
                cinema.volume_mouseout();
            }
        }

        if !click {
            continue;
        }
        // Hovering may have revealed the volume bar, so lay out again.
        let Some(bar) = ui::cinema_layout(panel, cinema.options(), cinema.toolbar()).toolbar
        else {
            continue;
        };
        if bar.play.contains(pos) {
            cinema.play_pause();
        } else if let Some(r) = bar.progress.filter(|r| r.contains(pos)) {
            cinema.progress_bar_update(pos.x - r.x, r.width);
        } else if let Some(r) = bar.volume_bar.filter(|r| r.contains(pos)) {
            // First cell mutes, last is full volume.
            cinema.set_volume_from_input(pos.x - r.x, slider_span(r.width));
        } else if bar.full_screen.is_some_and(|r| r.contains(pos)) {
            cinema.full_screen();
        }
    }
}
