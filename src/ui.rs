//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`, plus the
//! button geometry shared by drawing and mouse hit-testing.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::{App, Scene};
use crate::config::UiSettings;
use crate::track::{LyricLine, Track};

const BUTTON_WIDTH: u16 = 12;
const BUTTON_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 2;

/// Height of the button row, borders included.
pub const BUTTON_ROW_HEIGHT: u16 = BUTTON_HEIGHT;

const MENU_CONTROLS: &str = "[j/k] select | [tab/h/l] focus | [enter] press | [o] open | [q] quit";
const TRACK_CONTROLS: &str =
    "[tab/h/l] focus | [enter] press | [p/space] play | [b/esc] back | [q] quit";

/// Split the frame into header, body, button row and footer.
pub fn layout(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(BUTTON_ROW_HEIGHT),
            Constraint::Length(3),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Equal-width button rectangles centered horizontally in `row`.
/// Buttons that do not fit are clipped to the row.
pub fn button_rects(row: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let count_u16 = count.min(u16::MAX as usize) as u16;
    let total = BUTTON_WIDTH
        .saturating_mul(count_u16)
        .saturating_add(BUTTON_GAP.saturating_mul(count_u16 - 1));
    let start = row.x + row.width.saturating_sub(total) / 2;
    let right = row.x.saturating_add(row.width);

    (0..count_u16)
        .map(|i| {
            let x = start.saturating_add(i.saturating_mul(BUTTON_WIDTH + BUTTON_GAP));
            let x = x.min(right);
            Rect {
                x,
                y: row.y,
                width: BUTTON_WIDTH.min(right - x),
                height: BUTTON_HEIGHT.min(row.height),
            }
        })
        .collect()
}

/// Index of the rectangle containing `(x, y)`. Edges count as inside.
pub fn hit_test(rects: &[Rect], x: u16, y: u16) -> Option<usize> {
    rects.iter().position(|r| {
        r.width > 0
            && r.height > 0
            && x >= r.x
            && x <= r.x + r.width - 1
            && y >= r.y
            && y <= r.y + r.height - 1
    })
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn left_padded(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

/// Text lines describing one lyric line.
fn lyric_lines(line: &LyricLine) -> Vec<Line<'static>> {
    let mut out = vec![Line::from(format!("[{:>6}] {}", line.start_time, line.text.original)).bold()];
    if let Some(p) = &line.text.pronunciation {
        out.push(Line::from(format!("         {p}")).italic());
    }
    if let Some(m) = &line.text.meaning {
        out.push(Line::from(format!("         {m}")).dim());
    }
    if !line.syllables.is_empty() {
        let syllables = line
            .syllables
            .iter()
            .map(|s| format!("{}({} {})", s.text, s.duration, s.note_key))
            .collect::<Vec<String>>()
            .join(" ");
        out.push(Line::from(format!("         {syllables}")).dim());
    }
    out
}

/// Metadata header shown on the track screen.
fn track_summary(track: &Track) -> Vec<Line<'static>> {
    vec![
        Line::from(format!("Track: {}", track.metadata.title)),
        Line::from(format!("Artist: {}", track.metadata.artist)),
        Line::from(format!("Language: {}", track.metadata.language)),
        Line::from(format!("Audio: {}", track.metadata.audio_file)),
        Line::from(format!(
            "Lines: {} • Syllables: {}",
            track.lyrics.len(),
            track.syllable_count()
        )),
    ]
}

fn draw_menu(frame: &mut Frame, app: &App, area: Rect) {
    if !app.has_entries() {
        let hint = format!(
            "No track files found{}.\n\nOpen will load {}",
            app.tracks_dir
                .as_deref()
                .map(|d| format!(" in {d}"))
                .unwrap_or_default(),
            app.default_track.display()
        );
        let p = Paragraph::new(hint)
            .block(left_padded(" tracks "))
            .wrap(Wrap { trim: true });
        frame.render_widget(p, area);
        return;
    }

    let items: Vec<ListItem> = app
        .entries
        .iter()
        .map(|e| {
            if e.readable {
                ListItem::new(e.display.as_str())
            } else {
                ListItem::new(format!("{} (unreadable)", e.display))
                    .style(Style::default().add_modifier(Modifier::DIM))
            }
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" tracks "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_track(frame: &mut Frame, app: &App, area: Rect, ui_settings: &UiSettings) {
    let Some(track) = &app.track else {
        let p = Paragraph::new("No track loaded").block(left_padded(" track "));
        frame.render_widget(p, area);
        return;
    };

    let summary = track_summary(track);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(summary.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(area);

    let summary = Paragraph::new(summary)
        .block(left_padded(" track "))
        .wrap(Wrap { trim: false });
    frame.render_widget(summary, chunks[0]);

    if ui_settings.show_lyrics {
        let lines: Vec<Line> = track.lyrics.iter().flat_map(lyric_lines).collect();
        let lyrics = if lines.is_empty() {
            Paragraph::new("(no lyrics)")
        } else {
            Paragraph::new(lines)
        };
        frame.render_widget(
            lyrics.block(left_padded(" lyrics ")).wrap(Wrap { trim: false }),
            chunks[1],
        );
    }
}

fn draw_buttons(frame: &mut Frame, app: &App, row: Rect) {
    let buttons = app.buttons();
    for (i, (button, rect)) in buttons.iter().zip(button_rects(row, buttons.len())).enumerate() {
        let style = if i == app.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let b = Paragraph::new(button.label)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(b, rect);
    }
}

fn draw_error(frame: &mut Frame, message: &str) {
    let area = centered_rect_sized(60, 7, frame.area());
    frame.render_widget(Clear, area);
    let p = Paragraph::new(message)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Error (any key closes) ")
                .title_alignment(Alignment::Center),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(p, area);
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let [header_area, body, button_row, footer_area] = layout(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" karaoke ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, header_area);

    match app.scene {
        Scene::Menu => draw_menu(frame, app, body),
        Scene::TrackLoaded => draw_track(frame, app, body, ui_settings),
    }

    draw_buttons(frame, app, button_row);

    let controls = match app.scene {
        Scene::Menu => MENU_CONTROLS,
        Scene::TrackLoaded => TRACK_CONTROLS,
    };
    let footer_text = if app.status.is_empty() {
        controls.to_string()
    } else {
        format!("{} • {}", app.status, controls)
    };
    let footer = Paragraph::new(footer_text)
        .block(left_padded(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, footer_area);

    if let Some(message) = &app.error {
        draw_error(frame, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::{LyricText, Syllable};

    #[test]
    fn button_rects_are_centered_and_evenly_spaced() {
        let row = Rect::new(0, 10, 40, 3);
        let rects = button_rects(row, 2);
        assert_eq!(rects.len(), 2);
        // 2 * 12 + 2 = 26 wide, (40 - 26) / 2 = 7
        assert_eq!(rects[0], Rect::new(7, 10, 12, 3));
        assert_eq!(rects[1], Rect::new(21, 10, 12, 3));
        assert!(button_rects(row, 0).is_empty());
    }

    #[test]
    fn button_rects_clip_to_narrow_rows() {
        let row = Rect::new(5, 0, 14, 3);
        let rects = button_rects(row, 2);
        assert_eq!(rects[0].x, 5);
        assert!(rects.iter().all(|r| r.x + r.width <= 19));
    }

    #[test]
    fn hit_test_includes_edges() {
        let rects = vec![Rect::new(7, 10, 12, 3), Rect::new(21, 10, 12, 3)];
        assert_eq!(hit_test(&rects, 7, 10), Some(0));
        assert_eq!(hit_test(&rects, 18, 12), Some(0));
        assert_eq!(hit_test(&rects, 19, 11), None);
        assert_eq!(hit_test(&rects, 21, 11), Some(1));
        assert_eq!(hit_test(&rects, 25, 13), None);
        assert_eq!(hit_test(&[Rect::new(0, 0, 0, 0)], 0, 0), None);
    }

    #[test]
    fn layout_reserves_button_row_above_footer() {
        let [header, body, buttons, footer] = layout(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 3);
        assert_eq!(buttons.height, BUTTON_ROW_HEIGHT);
        assert_eq!(footer.height, 3);
        assert_eq!(body.height, 24 - 3 - BUTTON_ROW_HEIGHT - 3);
        assert_eq!(buttons.y + buttons.height, footer.y);
    }

    #[test]
    fn lyric_lines_show_optional_text_only_when_present() {
        let mut line = LyricLine {
            start_time: 1200,
            text: LyricText {
                original: "hello".into(),
                pronunciation: None,
                meaning: None,
            },
            syllables: vec![Syllable {
                text: "hel".into(),
                duration: 300,
                note_key: "C4".into(),
            }],
        };
        assert_eq!(lyric_lines(&line).len(), 2);

        line.text.pronunciation = Some("heh-lo".into());
        line.text.meaning = Some("greeting".into());
        let rendered: Vec<String> = lyric_lines(&line).iter().map(|l| l.to_string()).collect();
        assert_eq!(rendered.len(), 4);
        assert!(rendered[0].contains("1200"));
        assert!(rendered[0].contains("hello"));
        assert!(rendered[1].contains("heh-lo"));
        assert!(rendered[2].contains("greeting"));
        assert!(rendered[3].contains("hel(300 C4)"));
    }
}
