use super::model::TableModel;
use crossterm::event::{KeyCode, KeyModifiers};

/// What the event loop should do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    /// Close the browser
    Quit,

    /// A repository was picked
    Selected(String),

    /// No action needed
    None,
}

/// Key handling for the table browser
pub struct TableUpdate;

impl TableUpdate {
    /// Handle a key press and update the model accordingly
    pub fn handle_key(model: &mut TableModel, key: KeyCode, modifiers: KeyModifiers) -> TableAction {
        match key {
            KeyCode::Char('q') => return Self::quit(model),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                return Self::quit(model);
            }
            KeyCode::Esc => {
                model.focused = !model.focused;
                return TableAction::None;
            }
            _ => {}
        }

        // A blurred table ignores navigation and selection
        if !model.focused {
            return TableAction::None;
        }

        match key {
            KeyCode::Up | KeyCode::Char('k') => model.move_up(1),
            KeyCode::Down | KeyCode::Char('j') => model.move_down(1),
            KeyCode::PageUp => model.move_up(model.page_size),
            KeyCode::PageDown => model.move_down(model.page_size),
            KeyCode::Home | KeyCode::Char('g') => model.move_to_start(),
            KeyCode::End | KeyCode::Char('G') => model.move_to_end(),
            KeyCode::Enter => {
                if let Some(row) = model.current_row() {
                    let repository = row.repository.clone();
                    model.selected.push(repository.clone());
                    return TableAction::Selected(repository);
                }
            }
            _ => {}
        }

        TableAction::None
    }

    /// Handle terminal resize
    pub fn handle_resize(model: &mut TableModel, height: u16) {
        // Borders, header and status bar take six lines
        model.page_size = usize::from(height.saturating_sub(6)).max(1);
    }

    fn quit(model: &mut TableModel) -> TableAction {
        model.should_quit = true;
        TableAction::Quit
    }
}
