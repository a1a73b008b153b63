//! Event handler for the TUI
//!
//! Routes key events to the active view. Global keys come first; while a
//! Register text field has focus, plain characters are typed into it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::TransactionKind;
use crate::services::Interaction;

use super::app::{ActiveView, App, RegisterField};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => app.expire_notification(),
        Event::Resize(_, _) | Event::Error(_) => {}
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    if handle_global_key(app, key) {
        return;
    }

    match app.active_view {
        ActiveView::Register => handle_register_key(app, key),
        ActiveView::History => handle_history_key(app, key),
        ActiveView::MonthlySummary => handle_summary_key(app, key),
    }
}

/// Keys that work in every view. Returns true when the key was consumed.
fn handle_global_key(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return true;
    }

    match key.code {
        KeyCode::F(1) => app.switch_view(ActiveView::Register),
        KeyCode::F(2) => app.switch_view(ActiveView::History),
        KeyCode::F(3) => app.switch_view(ActiveView::MonthlySummary),
        _ => {
            // Plain characters belong to a focused text field
            if is_typing(app) {
                return false;
            }
            match key.code {
                KeyCode::Char('q') => app.quit(),
                KeyCode::Char('1') => app.switch_view(ActiveView::Register),
                KeyCode::Char('2') => app.switch_view(ActiveView::History),
                KeyCode::Char('3') => app.switch_view(ActiveView::MonthlySummary),
                _ => return false,
            }
        }
    }
    true
}

fn is_typing(app: &App) -> bool {
    app.active_view == ActiveView::Register && app.register.focused.is_text()
}

fn handle_register_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('s') {
            app.save_entry();
        }
        return;
    }

    let focused = app.register.focused;
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.register.set_focus(focused.next()),
        KeyCode::BackTab | KeyCode::Up => app.register.set_focus(focused.prev()),
        KeyCode::Esc => app.register.set_focus(RegisterField::Kind),
        _ if focused.is_text() => handle_text_key(app, key),
        _ => match focused {
            RegisterField::Kind => handle_kind_key(app, key),
            RegisterField::Category => match key.code {
                KeyCode::Left | KeyCode::Char('h') => app.register.prev_category(),
                KeyCode::Right | KeyCode::Char('l') => app.register.next_category(),
                KeyCode::Enter => app.register.set_focus(RegisterField::Save),
                _ => {}
            },
            RegisterField::Save => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    app.save_entry();
                }
            }
            _ => {}
        },
    }

    if !app.register.focused.is_text() && key.code == KeyCode::Char('t') {
        app.reset_date();
    }
}

fn handle_kind_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
            app.interact(Interaction::ToggleKind)
        }
        KeyCode::Char('i') => app.interact(Interaction::SelectKind(TransactionKind::Income)),
        KeyCode::Char('e') => app.interact(Interaction::SelectKind(TransactionKind::Expense)),
        KeyCode::Enter => app.register.set_focus(RegisterField::Date),
        _ => {}
    }
}

fn handle_text_key(app: &mut App, key: KeyEvent) {
    let focused = app.register.focused;
    let Some(input) = app.register.focused_input() else {
        return;
    };

    match key.code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        KeyCode::Enter => app.register.set_focus(focused.next()),
        _ => {}
    }
}

fn handle_history_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.history_down(),
        KeyCode::Char('k') | KeyCode::Up => app.history_up(),
        KeyCode::Home | KeyCode::Char('g') => app.history_index = 0,
        KeyCode::End | KeyCode::Char('G') => {
            app.history_index = app.transactions.len().saturating_sub(1)
        }
        KeyCode::Char('r') => app.refresh(),
        _ => {}
    }
}

fn handle_summary_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.summary.prev_month(),
        KeyCode::Right | KeyCode::Char('l') => app.summary.next_month(),
        KeyCode::Up | KeyCode::Char('k') => app.summary.newer_year(),
        KeyCode::Down | KeyCode::Char('j') => app.summary.older_year(),
        KeyCode::Char('i') => app.interact(Interaction::ShowDetails(TransactionKind::Income)),
        KeyCode::Char('e') => app.interact(Interaction::ShowDetails(TransactionKind::Expense)),
        KeyCode::Char('r') => app.refresh(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::config::settings::Settings;
    use crate::models::Category;
    use crate::services::DrillDown;
    use crate::store::{JsonStore, TransactionStore};
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, JsonStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = JsonStore::open(&paths).unwrap();
        store
            .set_categories(vec![
                Category::new("Salary", TransactionKind::Income),
                Category::new("Food", TransactionKind::Expense),
            ])
            .unwrap();
        (temp_dir, store)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_view_switching() {
        let (_temp, store) = create_test_store();
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.active_view, ActiveView::History);
        press(&mut app, KeyCode::F(3));
        assert_eq!(app.active_view, ActiveView::MonthlySummary);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_typing_does_not_trigger_global_keys() {
        let (_temp, store) = create_test_store();
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);
        app.switch_view(ActiveView::Register);
        app.register.set_focus(RegisterField::Description);

        type_text(&mut app, "q2");
        assert!(!app.should_quit);
        assert_eq!(app.active_view, ActiveView::Register);
        assert_eq!(app.register.description_input.value(), "q2");
    }

    #[test]
    fn test_register_flow_saves_expense() {
        let (_temp, store) = create_test_store();
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);
        app.switch_view(ActiveView::Register);

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.session.entry_kind, TransactionKind::Expense);
        assert_eq!(app.register.categories, vec!["Food"]);

        press(&mut app, KeyCode::Tab);
        app.register.date_input.clear();
        type_text(&mut app, "2024-05-10");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "100");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "Lunch");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.register.focused, RegisterField::Category);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        let saved = store.list_transactions().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].kind, TransactionKind::Expense);
        assert_eq!(saved[0].description, "Lunch");
    }

    #[test]
    fn test_summary_detail_keys() {
        let (_temp, store) = create_test_store();
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);
        app.switch_view(ActiveView::MonthlySummary);

        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.session.drill_down, DrillDown::ShowingIncome);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.session.drill_down, DrillDown::ShowingExpense);
        // Drill-down does not touch the entry kind
        assert_eq!(app.session.entry_kind, TransactionKind::Income);
    }

    #[test]
    fn test_ctrl_c_quits_while_typing() {
        let (_temp, store) = create_test_store();
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);
        app.register.set_focus(RegisterField::Amount);

        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        );
        assert!(app.should_quit);
    }
}
