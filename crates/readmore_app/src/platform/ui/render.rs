use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use readmore_core::{AppViewModel, BookCardView, EMPTY_STATE_TEXT, SEARCHING_LABEL};

use super::constants::*;
use super::layout::{card_slots, chip_text, grid_columns, screen_areas, tag_rows};
use crate::platform::input::{Cursor, Focus};

const BUTTON_WIDTH: u16 = 24;

pub(crate) fn draw(frame: &mut Frame, view: &AppViewModel, cursor: &Cursor) {
    let area = frame.area();
    let labels: Vec<&str> = view.tags.iter().map(|tag| tag.label).collect();
    let rows = tag_rows(&labels, area.width.saturating_sub(2));
    let areas = screen_areas(area, rows.len() as u16);

    draw_header(frame, areas.header);
    frame.render_widget(
        Paragraph::new(HEADLINE).bold().fg(Color::White).centered(),
        areas.headline,
    );
    draw_tags(frame, areas.tags, view, cursor, &rows);
    draw_button(frame, areas.button, view);
    draw_results(frame, areas.results, view, cursor);
    draw_footer(frame, areas.footer, view, cursor);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled("▌ ", Style::default().fg(ACCENT)),
        Span::styled(APP_TITLE, Style::default().fg(Color::White).bold()),
    ]);
    frame.render_widget(
        Paragraph::new(title).centered().block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(MUTED)),
        ),
        area,
    );
}

fn draw_tags(
    frame: &mut Frame,
    area: Rect,
    view: &AppViewModel,
    cursor: &Cursor,
    rows: &[Vec<usize>],
) {
    let focused = cursor.focus == Focus::Tags;
    let lines: Vec<Line> = rows
        .iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for (pos, &index) in row.iter().enumerate() {
                if pos > 0 {
                    spans.push(Span::raw(" ".repeat(usize::from(TAG_GAP))));
                }
                let tag = &view.tags[index];
                let mut style = if tag.selected {
                    Style::default().fg(Color::White).bg(ACCENT).bold()
                } else {
                    Style::default().fg(TEXT).bg(Color::Black)
                };
                if focused && index == cursor.tag {
                    style = style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
                }
                spans.push(Span::styled(chip_text(tag.label), style));
            }
            Line::from(spans)
        })
        .collect();

    let border = if focused { ACCENT } else { MUTED };
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::bordered()
                .title(TAGS_HEADING)
                .title_style(Style::default().fg(Color::White).bold())
                .border_style(Style::default().fg(border)),
        ),
        area,
    );
}

fn draw_button(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let [button] = Layout::horizontal([Constraint::Length(BUTTON_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    let style = if view.search_enabled {
        Style::default().fg(Color::White).bold()
    } else {
        Style::default().fg(MUTED)
    };
    let border = if view.search_enabled { ACCENT } else { MUTED };
    frame.render_widget(
        Paragraph::new(view.search_label())
            .style(style)
            .centered()
            .block(Block::bordered().border_style(Style::default().fg(border))),
        button,
    );
}

fn draw_results(frame: &mut Frame, area: Rect, view: &AppViewModel, cursor: &Cursor) {
    if view.show_empty_state {
        draw_centered_note(frame, area, EMPTY_STATE_TEXT);
        return;
    }
    if view.cards.is_empty() {
        draw_centered_note(frame, area, SEARCHING_LABEL);
        return;
    }

    let focused = cursor.focus == Focus::Results;
    let block = Block::bordered()
        .title(format!(" Results ({}) ", view.cards.len()))
        .border_style(Style::default().fg(if focused { ACCENT } else { MUTED }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = grid_columns(area.width);
    for (index, slot) in card_slots(inner, view.cards.len(), columns, cursor.card) {
        let selected = focused && index == cursor.card;
        draw_card(frame, slot, &view.cards[index], selected);
    }
}

fn draw_centered_note(frame: &mut Frame, area: Rect, text: &str) {
    let [line] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(Paragraph::new(text).fg(MUTED).centered(), line);
}

fn draw_card(frame: &mut Frame, area: Rect, card: &BookCardView, selected: bool) {
    let border = if selected { ACCENT } else { MUTED };
    let block = Block::bordered().border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title, authors, published, description, cover, link] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let title_style = if selected {
        Style::default().fg(ACCENT).bold()
    } else {
        Style::default().fg(Color::White).bold()
    };
    frame.render_widget(Paragraph::new(card.title.as_str()).style(title_style), title);
    frame.render_widget(Paragraph::new(card.authors.as_str()).fg(TEXT), authors);
    if let Some(date) = card.published_date.as_deref() {
        frame.render_widget(Paragraph::new(format!("Published {date}")).fg(MUTED), published);
    }
    frame.render_widget(
        Paragraph::new(card.description.as_str())
            .fg(TEXT)
            .wrap(Wrap { trim: true }),
        description,
    );
    frame.render_widget(
        Paragraph::new(format!("Cover {}", card.cover_url)).fg(MUTED),
        cover,
    );
    if let Some(url) = card.link.as_deref() {
        frame.render_widget(Paragraph::new(format!("↗ {url}")).fg(ACCENT), link);
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, view: &AppViewModel, cursor: &Cursor) {
    let help = match cursor.focus {
        Focus::Tags => KEY_HELP_TAGS,
        Focus::Results => KEY_HELP_RESULTS,
    };
    frame.render_widget(
        Paragraph::new(format!("{} selected | {}", view.selected_count, help))
            .fg(MUTED)
            .centered(),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use readmore_core::{
        update, AppState, Msg, SearchResult, Tag, NO_DESCRIPTION, SEARCH_LABEL, UNKNOWN_AUTHOR,
    };

    fn render_text(view: &AppViewModel, cursor: &Cursor) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, view, cursor)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = usize::from(buffer.area.width);
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn initial_screen_shows_tags_button_and_empty_state() {
        let text = render_text(&AppState::new().view(), &Cursor::default());
        assert!(text.contains(APP_TITLE));
        assert!(text.contains(HEADLINE));
        assert!(text.contains(TAGS_HEADING));
        assert!(text.contains(" Fiction "));
        assert!(text.contains(" Young adult "));
        assert!(text.contains(SEARCH_LABEL));
        assert!(text.contains(EMPTY_STATE_TEXT));
    }

    #[test]
    fn loading_hides_empty_state() {
        let (state, _) = update(AppState::new(), Msg::TagToggled(Tag::Fiction));
        let (state, _) = update(state, Msg::SearchClicked);

        let text = render_text(&state.view(), &Cursor::default());

        assert!(text.contains(SEARCHING_LABEL));
        assert!(!text.contains(EMPTY_STATE_TEXT));
        assert!(text.contains("1 selected"));
    }

    #[test]
    fn card_shows_fallbacks_for_missing_fields() {
        let (state, _) = update(AppState::new(), Msg::TagToggled(Tag::Fiction));
        let (state, _) = update(state, Msg::SearchClicked);
        let (state, _) = update(
            state,
            Msg::SearchSucceeded(vec![SearchResult {
                id: "x1".to_string(),
                title: "Dune".to_string(),
                published_date: Some("1965".to_string()),
                ..SearchResult::default()
            }]),
        );

        let text = render_text(&state.view(), &Cursor::default());

        assert!(text.contains("Results (1)"));
        assert!(text.contains("Dune"));
        assert!(text.contains(UNKNOWN_AUTHOR));
        assert!(text.contains(NO_DESCRIPTION));
        assert!(text.contains("Published 1965"));
        assert!(!text.contains(EMPTY_STATE_TEXT));
    }
}
