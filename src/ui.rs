//! Terminal rendering for both widgets.
//!
//! Every draw function has a matching layout function so the event loop
//! can map a mouse position back to the control under it.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

use crate::cinema::{Cinema, PlayIcon, Toolbar, VolumeIcon};
use crate::config::CinemaOptions;
use crate::media::MediaElement;
use crate::player::Player;

const HINT: &str = "click a control · q quits";
/// Rows used by one list entry (title + artist).
const ROWS_PER_TRACK: u16 = 2;

pub struct PlayerLayout {
    pub header: Rect,
    pub list: Rect,
    /// Area inside the list border where entries are drawn.
    pub list_inner: Rect,
    pub prev: Rect,
    pub play: Rect,
    pub next: Rect,
    pub footer: Rect,
}

impl PlayerLayout {
    fn visible_tracks(&self) -> usize {
        (self.list_inner.height / ROWS_PER_TRACK) as usize
    }

    /// List entry under `pos`, if any.
    pub fn track_at(&self, pos: Position, active: usize, len: usize) -> Option<usize> {
        if !self.list_inner.contains(pos) {
            return None;
        }
        let row = ((pos.y - self.list_inner.y) / ROWS_PER_TRACK) as usize;
        let index = list_offset(active, len, self.visible_tracks()) + row;
        (index < len).then_some(index)
    }
}

/// First list entry to draw so the active one stays in view.
pub fn list_offset(active: usize, len: usize, visible: usize) -> usize {
    if visible == 0 || len <= visible {
        return 0;
    }
    active.saturating_sub(visible / 2).min(len - visible)
}

pub fn player_layout(area: Rect) -> PlayerLayout {
    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(4),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .split(area);
    let buttons = Layout::horizontal([Constraint::Fill(1); 3]).split(rows[2]);

    PlayerLayout {
        header: rows[0],
        list: rows[1],
        list_inner: Block::bordered().inner(rows[1]),
        prev: buttons[0],
        play: buttons[1],
        next: buttons[2],
        footer: rows[3],
    }
}

fn button(label: &str) -> Paragraph<'_> {
    Paragraph::new(label)
        .alignment(Alignment::Center)
        .block(Block::bordered())
}

pub fn draw_player<M: MediaElement>(frame: &mut Frame, player: &Player<M>) {
    let layout = player_layout(frame.area());
    let state = player.state();
    let track = player.current_track();

    let now_playing = format!(
        "{} · {} · {}",
        track.title, track.artist, track.album.name
    );
    let header = Paragraph::new(now_playing).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(if state.playing { " playing " } else { " paused " })
            .title_alignment(Alignment::Center),
    );
    frame.render_widget(header, layout.header);

    let tracks = player.tracks();
    let visible = layout.visible_tracks();
    let offset = list_offset(state.index, tracks.len(), visible);
    let items: Vec<ListItem> = tracks
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible.max(1))
        .map(|(i, t)| {
            let marker = if player.is_active(i) { "> " } else { "  " };
            let text = Text::from(vec![
                Line::from(format!("{marker}{}", t.title)),
                Line::from(Span::styled(
                    format!("  {}", t.artist),
                    Style::default().add_modifier(Modifier::DIM),
                )),
            ]);
            let item = ListItem::new(text);
            if player.is_active(i) {
                item.style(Style::default().add_modifier(Modifier::REVERSED))
            } else {
                item
            }
        })
        .collect();
    let list = List::new(items).block(Block::bordered().title(" songs "));
    frame.render_widget(list, layout.list);

    frame.render_widget(button("Prev"), layout.prev);
    frame.render_widget(button(player.play_label().as_str()), layout.play);
    frame.render_widget(button("Next"), layout.next);
    frame.render_widget(Paragraph::new(HINT).dim(), layout.footer);
}

#[derive(Default)]
pub struct ToolbarLayout {
    pub play: Rect,
    pub times: Option<Rect>,
    pub progress: Option<Rect>,
    pub volume_btn: Rect,
    pub volume_bar: Option<Rect>,
    pub full_screen: Option<Rect>,
}

pub struct CinemaLayout {
    /// Whole panel; pointer presence here counts as hovering the media.
    pub panel: Rect,
    pub screen: Rect,
    pub toolbar: Option<ToolbarLayout>,
}

#[derive(Copy, Clone)]
enum Part {
    Play,
    Times,
    Progress,
    VolumeBtn,
    VolumeBar,
    FullScreen,
}

pub fn cinema_layout(panel: Rect, options: &CinemaOptions, toolbar: &Toolbar) -> CinemaLayout {
    let inner = Block::bordered().inner(panel);
    if !toolbar.visible || inner.height < 2 {
        return CinemaLayout {
            panel,
            screen: inner,
            toolbar: None,
        };
    }

    let rows = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

    let display = &options.display;
    let mut parts: Vec<(Part, Constraint)> = vec![(Part::Play, Constraint::Length(4))];
    if display.times {
        parts.push((Part::Times, Constraint::Length(17)));
    }
    if display.progress_bar {
        parts.push((Part::Progress, Constraint::Min(8)));
    }
    parts.push((Part::VolumeBtn, Constraint::Length(5)));
    if display.volume_bar && toolbar.volume_bar_visible {
        parts.push((Part::VolumeBar, Constraint::Length(10)));
    }
    if display.full_screen_btn {
        parts.push((Part::FullScreen, Constraint::Length(4)));
    }

    let cells = Layout::horizontal(parts.iter().map(|(_, c)| *c))
        .spacing(1)
        .split(rows[1]);
    let mut bar = ToolbarLayout::default();
    for ((part, _), rect) in parts.iter().zip(cells.iter().copied()) {
        match part {
            Part::Play => bar.play = rect,
            Part::Times => bar.times = Some(rect),
            Part::Progress => bar.progress = Some(rect),
            Part::VolumeBtn => bar.volume_btn = rect,
            Part::VolumeBar => bar.volume_bar = Some(rect),
            Part::FullScreen => bar.full_screen = Some(rect),
        }
    }

    CinemaLayout {
        panel,
        screen: rows[0],
        toolbar: Some(bar),
    }
}

/// Panels for each overlay; a full-screen overlay takes the whole area and hides the rest.
pub fn cinema_panels(area: Rect, count: usize, full_screen: Option<usize>) -> Vec<Option<Rect>> {
    if let Some(fs) = full_screen {
        return (0..count).map(|i| (i == fs).then_some(area)).collect();
    }
    if count == 0 {
        return Vec::new();
    }
    let body = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    Layout::vertical(vec![Constraint::Fill(1); count])
        .split(body)
        .iter()
        .map(|r| Some(*r))
        .collect()
}

fn play_icon(icon: PlayIcon) -> &'static str {
    match icon {
        PlayIcon::Play => " ▶ ",
        PlayIcon::Pause => " ❚❚",
        PlayIcon::Replay => " ↺ ",
    }
}

fn volume_icon(icon: VolumeIcon) -> &'static str {
    match icon {
        VolumeIcon::Mute => "♪ × ",
        VolumeIcon::Low => "♪ ▃ ",
        VolumeIcon::High => "♪ ▇ ",
    }
}

/// Played share as solid blocks, buffered share shaded, the rest as a rule.
fn progress_text(width: u16, progress: f64, buffered: f64) -> String {
    let width = width as usize;
    let played = ((width as f64) * progress / 100.0).round() as usize;
    let loaded = ((width as f64) * buffered / 100.0).round() as usize;
    (0..width)
        .map(|i| {
            if i < played {
                '█'
            } else if i < loaded {
                '▒'
            } else {
                '─'
            }
        })
        .collect()
}

fn volume_text(width: u16, volume: f64) -> String {
    let width = width as usize;
    let filled = ((width as f64) * volume).round() as usize;
    (0..width).map(|i| if i < filled { '█' } else { '░' }).collect()
}

fn draw_cinema<M: MediaElement>(frame: &mut Frame, cinema: &Cinema<M>, name: &str, panel: Rect) {
    let layout = cinema_layout(panel, cinema.options(), cinema.toolbar());
    let state = cinema.state();
    let toolbar = cinema.toolbar();

    let title = if state.full_screen {
        format!(" {name} [full screen] ")
    } else {
        format!(" {name} ")
    };
    frame.render_widget(Block::bordered().title(title), layout.panel);

    let status = match toolbar.play_icon {
        _ if state.playing => "playing",
        PlayIcon::Replay => "ended",
        _ => "paused",
    };
    let screen = Paragraph::new(status)
        .alignment(Alignment::Center)
        .block(Block::default().padding(Padding::top(layout.screen.height / 2)));
    frame.render_widget(screen, layout.screen);

    let Some(bar) = layout.toolbar else {
        return;
    };
    frame.render_widget(Paragraph::new(play_icon(toolbar.play_icon)).bold(), bar.play);
    if let Some(r) = bar.times {
        let times = format!("{} / {}", toolbar.elapsed, toolbar.duration);
        frame.render_widget(Paragraph::new(times), r);
    }
    if let Some(r) = bar.progress {
        let text = progress_text(r.width, toolbar.progress_percent, toolbar.buffered_percent);
        frame.render_widget(Paragraph::new(text), r);
    }
    frame.render_widget(Paragraph::new(volume_icon(toolbar.volume_icon)), bar.volume_btn);
    if let Some(r) = bar.volume_bar {
        frame.render_widget(Paragraph::new(volume_text(r.width, toolbar.volume)), r);
    }
    if let Some(r) = bar.full_screen {
        let label = if state.full_screen { " ⤡ " } else { " ⤢ " };
        frame.render_widget(Paragraph::new(label), r);
    }
}

/// Render every overlay; `names` labels the panels in the same order.
pub fn draw_cinemas<M: MediaElement>(frame: &mut Frame, cinemas: &[Cinema<M>], names: &[String]) {
    let area = frame.area();
    let full_screen = cinemas.iter().position(|c| c.state().full_screen);
    let panels = cinema_panels(area, cinemas.len(), full_screen);

    for ((cinema, name), panel) in cinemas.iter().zip(names).zip(panels) {
        if let Some(panel) = panel {
            draw_cinema(frame, cinema, name, panel);
        }
    }

    if full_screen.is_none() {
        let footer = Rect {
            y: area.bottom().saturating_sub(1),
            height: area.height.min(1),
            ..area
        };
        frame.render_widget(Paragraph::new(HINT).dim(), footer);
    }
}
