use crate::model::RollState;
use crate::roster::SummaryKind;
use crate::ui::app::{App, Focus, PopupKind};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.focus() {
        Focus::Popup(PopupKind::Activity) => handle_activity_key(app, key),
        Focus::Search => handle_search_key(app, key),
        Focus::Board => handle_board_key(app, key),
    }
}

fn handle_activity_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('q') => app.close_activity_dialog(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_activity_up(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_activity_down(),
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.end_search(),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_search_char(ch)
        }
        _ => {}
    }
}

fn handle_board_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Char('/') => app.begin_search(),
        KeyCode::Char('f') => app.toggle_sort_key(),
        KeyCode::Char('o') => app.toggle_sort_direction(),
        KeyCode::Char('r') => app.request_students(),
        KeyCode::Char('h') => app.open_activity_dialog(),
        KeyCode::Char('q') => app.request_quit(),
        _ if app.roster().is_roll_active() => handle_roll_key(app, key),
        KeyCode::Char('s') => app.start_roll(),
        KeyCode::Esc => app.clear_search(),
        _ => {}
    }
}

fn handle_roll_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('p') => app.mark_selected(RollState::Present),
        KeyCode::Char('l') => app.mark_selected(RollState::Late),
        KeyCode::Char('a') => app.mark_selected(RollState::Absent),
        KeyCode::Char('u') => app.mark_selected(RollState::Unmarked),
        KeyCode::Char(ch @ '1'..='4') => {
            let index = ch as usize - '1' as usize;
            app.filter_by_bucket(SummaryKind::ORDER[index]);
        }
        KeyCode::Enter => app.complete_roll(),
        KeyCode::Esc => app.exit_roll(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
