use crate::theme::stylesheet;
use crate::tui::app::{App, Focus, HitRegions};
use crate::view::MAX_PINNED;
use ratatui::layout::Alignment;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Rows taken by one pinned entry: three labels plus borders.
const PINNED_ENTRY_HEIGHT: u16 = 5;
const COUNTER_WIDTH: u16 = 16;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let theme = stylesheet();
    let area = frame.area();
    frame.render_widget(Block::default().style(theme.app), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Search line
            Constraint::Min(3),    // Pinned list
            Constraint::Length(1), // Key help
        ])
        .split(area);

    let mut regions = HitRegions::default();

    draw_title(frame, app, chunks[0]);
    draw_pinned(frame, app, chunks[3], &mut regions);
    draw_footer(frame, app, chunks[4]);
    // Last, so the dropdown overlays the pinned list
    draw_search_line(frame, app, chunks[2], &mut regions);

    app.regions = regions;
}

fn draw_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(app.view.title())
        .style(stylesheet().title)
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn draw_search_line(frame: &mut Frame, app: &App, area: Rect, regions: &mut HitRegions) {
    let theme = stylesheet();

    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(COUNTER_WIDTH)])
        .split(area);
    let input_area = parts[0];
    let counter_area = parts[1];

    let focused = app.focus == Focus::SearchInput;
    let input_style = if focused { theme.input_focused } else { theme.input };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Search ")
        .style(theme.input);
    let inner = block.inner(input_area);

    // Keep the tail of long queries visible
    let width = inner.width.saturating_sub(1) as usize;
    let chars: Vec<char> = app.view.input().chars().collect();
    let visible: String = chars[chars.len().saturating_sub(width)..].iter().collect();
    let visible_len = visible.chars().count() as u16;

    frame.render_widget(Paragraph::new(visible).style(input_style).block(block), input_area);

    if let Some(total) = app.view.counter() {
        let counter_row = Rect {
            y: counter_area.y + counter_area.height / 2,
            height: 1,
            ..counter_area
        };
        let counter = Paragraph::new(format!(" {} found", total))
            .style(theme.counter);
        frame.render_widget(counter, counter_row);
    }

    if focused {
        frame.set_cursor_position(Position::new(inner.x + visible_len, inner.y));
    }

    regions.search_line = area;
    regions.input = input_area;

    if app.view.is_autocomplete_visible() {
        draw_dropdown(frame, app, input_area, regions);
    }
}

fn draw_dropdown(frame: &mut Frame, app: &App, input_area: Rect, regions: &mut HitRegions) {
    let theme = stylesheet();
    let suggestions = app.view.suggestions();

    let y = input_area.bottom();
    let wanted = suggestions.len().max(1) as u16 + 2;
    let height = wanted.min(frame.area().bottom().saturating_sub(y));
    if height < 3 {
        return;
    }

    let dropdown = Rect {
        x: input_area.x,
        y,
        width: input_area.width,
        height,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .style(theme.dropdown);
    let inner = block.inner(dropdown);

    frame.render_widget(Clear, dropdown);
    frame.render_widget(block, dropdown);
    regions.dropdown = Some(dropdown);

    if suggestions.is_empty() {
        frame.render_widget(
            Paragraph::new("No repositories found").style(theme.dropdown),
            Rect { height: 1, ..inner },
        );
        return;
    }

    for (i, result) in suggestions.iter().enumerate() {
        let row_y = inner.y + i as u16;
        if row_y >= inner.bottom() {
            break;
        }
        let row = Rect {
            y: row_y,
            height: 1,
            ..inner
        };
        let style = if i == app.highlighted_suggestion {
            theme.dropdown_highlight
        } else {
            theme.dropdown_item
        };
        frame.render_widget(
            Paragraph::new(result.name.as_str())
                .style(style)
                .alignment(Alignment::Center),
            row,
        );
        regions.suggestions.push(row);
    }
}

fn draw_pinned(frame: &mut Frame, app: &App, area: Rect, regions: &mut HitRegions) {
    let theme = stylesheet();
    let pinned = app.view.pinned();

    let header = Paragraph::new(format!("Pinned ({}/{})", pinned.len(), MAX_PINNED))
        .style(theme.title);
    frame.render_widget(header, Rect { height: 1, ..area });

    let mut y = area.y + 1;
    for (i, entry) in pinned.iter().enumerate() {
        if y + PINNED_ENTRY_HEIGHT > area.bottom() {
            break;
        }
        let rect = Rect {
            y,
            height: PINNED_ENTRY_HEIGHT,
            ..area
        };
        y += PINNED_ENTRY_HEIGHT;

        let highlighted = app.focus == Focus::PinnedList && i == app.highlighted_pinned;
        let style = if highlighted {
            theme.pinned_highlight
        } else {
            theme.pinned
        };
        let block = Block::default().borders(Borders::ALL).style(style);
        let inner = block.inner(rect);

        let labels = vec![
            Line::from(entry.name_label()),
            Line::from(entry.owner_label()),
            Line::from(entry.stars_label()),
        ];
        frame.render_widget(Paragraph::new(labels).block(block), rect);

        let button = Rect {
            x: inner.right().saturating_sub(4),
            y: inner.y + 1,
            width: 3,
            height: 1,
        };
        frame.render_widget(Paragraph::new(" X ").style(theme.delete_button), button);

        regions.pinned_rows.push((rect, entry.id()));
        regions.delete_buttons.push((button, entry.id()));
    }
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help = match app.focus {
        Focus::SearchInput => {
            "Type to search  ↑↓ choose  Enter pin  Tab pinned list  Esc close  Ctrl+Q quit"
        }
        Focus::PinnedList => "↑↓ choose  Del/x remove  Tab search  Ctrl+Q quit",
        Focus::Elsewhere => "Tab search  Ctrl+Q quit",
    };
    frame.render_widget(Paragraph::new(help).style(stylesheet().footer), area);
}
