//! Key mapping and the on-screen cursor.
//!
//! The cursor is presentation state only; anything that changes what the
//! user has chosen goes through a [`Msg`].

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use readmore_core::{Msg, Tag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Focus {
    #[default]
    Tags,
    Results,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Cursor {
    pub focus: Focus,
    pub tag: usize,
    pub card: usize,
    /// Grid columns in the last drawn frame.
    pub columns: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            focus: Focus::Tags,
            tag: 0,
            card: 0,
            columns: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    Dispatch(Msg),
    MoveTag(isize),
    MoveCard(isize),
    SwitchFocus,
    Quit,
    Ignore,
}

impl Cursor {
    pub(crate) fn focused_tag(&self) -> Tag {
        Tag::ALL[self.tag.min(Tag::ALL.len() - 1)]
    }

    pub(crate) fn move_tag(&mut self, delta: isize) {
        self.tag = step(self.tag, delta, Tag::ALL.len());
    }

    pub(crate) fn move_card(&mut self, delta: isize, card_count: usize) {
        self.card = step(self.card, delta, card_count);
    }

    pub(crate) fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Tags => Focus::Results,
            Focus::Results => Focus::Tags,
        };
    }

    /// Keeps the card cursor inside a result list that may have shrunk.
    pub(crate) fn clamp_cards(&mut self, card_count: usize) {
        self.card = self.card.min(card_count.saturating_sub(1));
    }
}

fn step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    current.saturating_add_signed(delta).min(len - 1)
}

pub(crate) fn map_key(key: KeyEvent, cursor: &Cursor) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
        KeyCode::Tab | KeyCode::BackTab => return Action::SwitchFocus,
        KeyCode::Char('s') => return Action::Dispatch(Msg::SearchClicked),
        _ => {}
    }

    let columns = cursor.columns.max(1) as isize;
    match cursor.focus {
        Focus::Tags => match key.code {
            KeyCode::Left | KeyCode::Char('h') => Action::MoveTag(-1),
            KeyCode::Right | KeyCode::Char('l') => Action::MoveTag(1),
            KeyCode::Char(' ') => Action::Dispatch(Msg::TagToggled(cursor.focused_tag())),
            KeyCode::Enter => Action::Dispatch(Msg::SearchClicked),
            _ => Action::Ignore,
        },
        Focus::Results => match key.code {
            KeyCode::Left | KeyCode::Char('h') => Action::MoveCard(-1),
            KeyCode::Right | KeyCode::Char('l') => Action::MoveCard(1),
            KeyCode::Up | KeyCode::Char('k') => Action::MoveCard(-columns),
            KeyCode::Down | KeyCode::Char('j') => Action::MoveCard(columns),
            KeyCode::Enter | KeyCode::Char('o') => Action::Dispatch(Msg::OpenRequested {
                index: cursor.card,
            }),
            _ => Action::Ignore,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn space_toggles_focused_tag() {
        let mut cursor = Cursor::default();
        cursor.move_tag(2);
        assert_eq!(
            map_key(press(KeyCode::Char(' ')), &cursor),
            Action::Dispatch(Msg::TagToggled(Tag::Science))
        );
    }

    #[test]
    fn search_key_works_from_either_pane() {
        let mut cursor = Cursor::default();
        assert_eq!(
            map_key(press(KeyCode::Char('s')), &cursor),
            Action::Dispatch(Msg::SearchClicked)
        );
        cursor.switch_focus();
        assert_eq!(
            map_key(press(KeyCode::Char('s')), &cursor),
            Action::Dispatch(Msg::SearchClicked)
        );
    }

    #[test]
    fn results_pane_moves_by_grid_rows() {
        let cursor = Cursor {
            focus: Focus::Results,
            card: 4,
            columns: 3,
            ..Cursor::default()
        };
        assert_eq!(map_key(press(KeyCode::Down), &cursor), Action::MoveCard(3));
        assert_eq!(map_key(press(KeyCode::Char('k')), &cursor), Action::MoveCard(-3));
        assert_eq!(
            map_key(press(KeyCode::Enter), &cursor),
            Action::Dispatch(Msg::OpenRequested { index: 4 })
        );
    }

    #[test]
    fn ctrl_c_and_q_quit() {
        let cursor = Cursor::default();
        assert_eq!(
            map_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &cursor
            ),
            Action::Quit
        );
        assert_eq!(map_key(press(KeyCode::Char('q')), &cursor), Action::Quit);
    }

    #[test]
    fn cursor_moves_stay_in_bounds() {
        let mut cursor = Cursor::default();
        cursor.move_tag(-1);
        assert_eq!(cursor.tag, 0);
        cursor.move_tag(100);
        assert_eq!(cursor.focused_tag(), Tag::Horror);

        cursor.move_card(5, 3);
        assert_eq!(cursor.card, 2);
        cursor.clamp_cards(1);
        assert_eq!(cursor.card, 0);
        cursor.move_card(1, 0);
        assert_eq!(cursor.card, 0);
    }
}
