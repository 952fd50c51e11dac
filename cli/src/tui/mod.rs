//! Interactive table of scan results (model / update / view).

pub mod model;
pub mod update;
pub mod view;

pub use model::{TableModel, TableRow};
pub use update::{TableAction, TableUpdate};
pub use view::TableView;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use tracing::{debug, info};

/// Shows the table until the user quits and returns the final model.
pub fn browse(mut model: TableModel) -> io::Result<TableModel> {
    enable_raw_mode()?;
    let mut terminal = or_undo(enter_terminal(), leave_raw_mode)?;

    let result = run_loop(&mut terminal, &mut model);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.map(|()| model)
}

fn enter_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Best-effort exit from raw mode and the alternate screen.
fn leave_raw_mode() {
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Passes `setup` through, calling `undo` first when it failed.
fn or_undo<T>(setup: io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    setup.inspect_err(|_| undo())
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, model: &mut TableModel) -> io::Result<()> {
    TableUpdate::handle_resize(model, terminal.size()?.height);

    while !model.should_quit {
        terminal.draw(|frame| TableView::render(model, frame))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match TableUpdate::handle_key(model, key.code, key.modifiers) {
                    TableAction::Selected(repository) => {
                        info!(repo = %repository, "Repository selected");
                    }
                    TableAction::Quit => debug!("Quit requested by user"),
                    TableAction::None => {}
                }
            }
            Event::Resize(_, height) => TableUpdate::handle_resize(model, height),
            _ => {}
        }
    }

    Ok(())
}
