use crate::ui;
use codexskills_core::{
    InstallError, Result, SelectionKey, SelectionPhase, SelectionState, Selector,
};
use console::style;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute, queue};
use std::io::{self, IsTerminal, Write};

const TITLE: &str = "Select skills to install:";
const HELP: &str = "Use ↑/↓ to move, Space to toggle, A to toggle all, Enter to confirm, Ctrl+C to abort.";

/// Full-screen checkbox picker on the controlling terminal.
pub struct TerminalSelector;

impl Selector for TerminalSelector {
    fn select(&self, names: &[String]) -> Result<Vec<bool>> {
        if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
            return Err(InstallError::NoInteractiveTerminal);
        }

        let outcome = {
            let _raw = RawMode::enable()?;
            browse(SelectionState::new(names.to_vec()))
        };

        match &outcome {
            Ok(flags) => tracing::debug!(
                picked = flags.iter().filter(|f| **f).count(),
                offered = names.len(),
                "Selection confirmed"
            ),
            Err(e) => tracing::debug!(error = %e, "Selection ended"),
        }

        outcome
    }
}

fn browse(mut state: SelectionState) -> Result<Vec<bool>> {
    let mut stdout = io::stdout();

    loop {
        draw(&mut stdout, &state)
            .map_err(|e| InstallError::io("Failed to draw selection", e))?;

        let event = event::read().map_err(|e| InstallError::io("Failed to read key", e))?;

        match state.apply(map_event(&event)) {
            SelectionPhase::Browsing => {}
            SelectionPhase::Confirmed => return Ok(state.into_selected()),
            SelectionPhase::Aborted => return Err(InstallError::Aborted),
        }
    }
}

/// Raw input mode for as long as the guard lives. Dropping it clears the
/// screen, shows the cursor and restores cooked mode, whatever the exit path.
struct RawMode;

impl RawMode {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode().map_err(|_| InstallError::NoInteractiveTerminal)?;
        let _ = execute!(io::stdout(), cursor::Hide);
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            cursor::Show
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn draw(out: &mut impl Write, state: &SelectionState) -> io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    for line in frame_lines(state) {
        // Raw mode does not translate \n into a carriage return.
        write!(out, "{line}\r\n")?;
    }
    out.flush()
}

fn frame_lines(state: &SelectionState) -> Vec<String> {
    let mut lines = ui::banner_lines();
    lines.push(format!("  {}", style(TITLE).white().bold()));
    lines.push(format!("  {}", style(HELP).dim()));
    lines.push(String::new());

    for row in state.rows() {
        let marker = if row.is_cursor { '>' } else { ' ' };
        let checkbox = if row.selected { "[x]" } else { "[ ]" };
        let text = format!("{marker} {checkbox} {}", row.name);
        if row.is_cursor {
            lines.push(format!("  {}", style(text).cyan().bold()));
        } else {
            lines.push(format!("  {text}"));
        }
    }

    lines
}

fn map_event(event: &Event) -> SelectionKey {
    let Event::Key(key) = event else {
        return SelectionKey::Other;
    };
    if key.kind == KeyEventKind::Release {
        return SelectionKey::Other;
    }

    match key.code {
        KeyCode::Char('c' | 'C') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            SelectionKey::Interrupt
        }
        KeyCode::Up => SelectionKey::Up,
        KeyCode::Down => SelectionKey::Down,
        KeyCode::Char(' ') => SelectionKey::Toggle,
        KeyCode::Char('a' | 'A') => SelectionKey::ToggleAll,
        KeyCode::Enter => SelectionKey::Confirm,
        _ => SelectionKey::Other,
    }
}
