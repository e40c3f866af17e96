use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const KEY_LEFT: u32 = 37;
const KEY_UP: u32 = 38;
const KEY_RIGHT: u32 = 39;
const KEY_DOWN: u32 = 40;

/// What a key press asks the game to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCommand {
    /// Browser-style key code, mapped to a direction by the game.
    Key(u32),
    TogglePlay,
    NewGame,
    Quit,
}

/// Arrows map to their browser key codes and W, A, S, D to their uppercase
/// ASCII codes. Releases and repeats on terminals that report them are ignored.
pub fn command_for_key(key: &KeyEvent) -> Option<InputCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    // Raw mode swallows SIGINT, so Ctrl+C arrives as a key.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(InputCommand::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up => Some(InputCommand::Key(KEY_UP)),
        KeyCode::Down => Some(InputCommand::Key(KEY_DOWN)),
        KeyCode::Left => Some(InputCommand::Key(KEY_LEFT)),
        KeyCode::Right => Some(InputCommand::Key(KEY_RIGHT)),
        KeyCode::Esc => Some(InputCommand::Quit),
        KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
            'p' => Some(InputCommand::TogglePlay),
            'n' => Some(InputCommand::NewGame),
            'q' => Some(InputCommand::Quit),
            'w' | 'a' | 's' | 'd' => Some(InputCommand::Key(ch.to_ascii_uppercase() as u32)),
            _ => None,
        },
        _ => None,
    }
}

pub const HELP_TEXT: &str = "Arrows or w/a/s/d to turn, p to start or pause, n for a new game, q to quit";
