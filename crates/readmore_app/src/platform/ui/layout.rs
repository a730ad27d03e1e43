use ratatui::layout::{Constraint, Layout, Rect};

use super::constants::{CARD_HEIGHT, TAG_GAP, THREE_COLUMN_WIDTH, TWO_COLUMN_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScreenAreas {
    pub header: Rect,
    pub headline: Rect,
    pub tags: Rect,
    pub button: Rect,
    pub results: Rect,
    pub footer: Rect,
}

/// Splits the frame top to bottom; `tag_rows` is the wrapped height of the chips.
pub(crate) fn screen_areas(area: Rect, tag_rows: u16) -> ScreenAreas {
    let [header, headline, tags, button, results, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Length(tag_rows + 2),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);
    ScreenAreas {
        header,
        headline,
        tags,
        button,
        results,
        footer,
    }
}

/// Chip text as drawn for a tag label.
pub(crate) fn chip_text(label: &str) -> String {
    format!(" {label} ")
}

/// Greedily packs chips into rows no wider than `width`, returning label indices per row.
pub(crate) fn tag_rows(labels: &[&str], width: u16) -> Vec<Vec<usize>> {
    let width = usize::from(width.max(1));
    let gap = usize::from(TAG_GAP);
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut used = 0;
    for (index, label) in labels.iter().enumerate() {
        let chip = chip_text(label).chars().count();
        match rows.last_mut() {
            Some(row) if used + gap + chip <= width => {
                row.push(index);
                used += gap + chip;
            }
            _ => {
                rows.push(vec![index]);
                used = chip;
            }
        }
    }
    rows
}

/// Number of card columns for the given terminal width.
pub(crate) fn grid_columns(width: u16) -> usize {
    if width >= THREE_COLUMN_WIDTH {
        3
    } else if width >= TWO_COLUMN_WIDTH {
        2
    } else {
        1
    }
}

/// Card rectangles for the visible window of the grid, paired with card indices.
///
/// The window scrolls so the row holding `selected` is always on screen.
pub(crate) fn card_slots(
    area: Rect,
    card_count: usize,
    columns: usize,
    selected: usize,
) -> Vec<(usize, Rect)> {
    if card_count == 0 || area.height == 0 {
        return Vec::new();
    }
    let columns = columns.max(1);
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let selected_row = selected.min(card_count - 1) / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let row_areas =
        Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows]).split(area);
    let mut slots = Vec::new();
    for (offset, row_area) in row_areas.iter().enumerate() {
        let col_areas = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);
        for (col, cell) in col_areas.iter().enumerate() {
            let index = (first_row + offset) * columns + col;
            if index < card_count {
                slots.push((index, *cell));
            }
        }
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_pick_column_count() {
        assert_eq!(grid_columns(60), 1);
        assert_eq!(grid_columns(80), 2);
        assert_eq!(grid_columns(119), 2);
        assert_eq!(grid_columns(200), 3);
    }

    #[test]
    fn chips_wrap_when_row_is_full() {
        let rows = tag_rows(&["Art", "Travel", "Horror"], 18);
        // " Art " (5) + gap + " Travel " (8) = 14; " Horror " does not fit.
        assert_eq!(rows, vec![vec![0, 1], vec![2]]);
    }

    #[test]
    fn oversize_chip_gets_its_own_row() {
        let rows = tag_rows(&["Young adult", "Art"], 4);
        assert_eq!(rows, vec![vec![0], vec![1]]);
    }

    #[test]
    fn grid_scrolls_to_keep_selection_visible() {
        let area = Rect::new(0, 0, 90, CARD_HEIGHT * 2);
        let slots = card_slots(area, 9, 2, 7);
        let indices: Vec<_> = slots.iter().map(|(i, _)| *i).collect();
        // Row of card 7 is row 3; two rows fit, so rows 2 and 3 are shown.
        assert_eq!(indices, vec![4, 5, 6, 7]);
    }

    #[test]
    fn grid_without_cards_is_empty() {
        assert!(card_slots(Rect::new(0, 0, 90, 40), 0, 2, 0).is_empty());
    }
}
