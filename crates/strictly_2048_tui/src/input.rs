//! Key bindings: terminal keys to game commands.
//!
//! The engine only understands [`Direction`]; this map is the one place the
//! frontend's key codes are translated, and it is injected into the app so
//! alternative layouts need no code changes elsewhere.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use strictly_2048::Direction;
use tracing::instrument;

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Command {
    /// Slide the tiles.
    #[display("move {}", _0)]
    Move(Direction),
    /// Throw the current board away and start over.
    #[display("new game")]
    NewGame,
    /// Dismiss the win banner and continue on the same board.
    #[display("keep playing")]
    KeepPlaying,
    /// Leave the game.
    #[display("quit")]
    Quit,
}

/// Mapping from key codes to commands.
#[derive(Debug, Clone, Default)]
pub struct KeyBindings {
    bindings: HashMap<KeyCode, Command>,
}

impl KeyBindings {
    /// Creates an empty binding set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Arrow keys only, plus the control keys.
    #[instrument]
    pub fn arrows() -> Self {
        Self::empty()
            .bind(KeyCode::Up, Command::Move(Direction::Up))
            .bind(KeyCode::Down, Command::Move(Direction::Down))
            .bind(KeyCode::Left, Command::Move(Direction::Left))
            .bind(KeyCode::Right, Command::Move(Direction::Right))
            .bind(KeyCode::Char('n'), Command::NewGame)
            .bind(KeyCode::Char('c'), Command::KeepPlaying)
            .bind(KeyCode::Char('q'), Command::Quit)
            .bind(KeyCode::Esc, Command::Quit)
    }

    /// Arrows plus `wasd` and vi-style `hjkl`.
    #[instrument]
    pub fn standard() -> Self {
        [
            ('w', Direction::Up),
            ('s', Direction::Down),
            ('a', Direction::Left),
            ('d', Direction::Right),
            ('k', Direction::Up),
            ('j', Direction::Down),
            ('h', Direction::Left),
            ('l', Direction::Right),
        ]
        .into_iter()
        .fold(Self::arrows(), |keys, (c, direction)| {
            keys.bind(KeyCode::Char(c), Command::Move(direction))
        })
    }

    /// Adds or replaces a binding.
    pub fn bind(mut self, key: KeyCode, command: Command) -> Self {
        self.bindings.insert(key, command);
        self
    }

    /// Looks up the command for `key`.
    ///
    /// Letters match regardless of case.
    pub fn resolve(&self, key: KeyCode) -> Option<Command> {
        let key = match key {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        self.bindings.get(&key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_map_to_directions() {
        let keys = KeyBindings::arrows();
        assert_eq!(keys.resolve(KeyCode::Up), Some(Command::Move(Direction::Up)));
        assert_eq!(keys.resolve(KeyCode::Right), Some(Command::Move(Direction::Right)));
        assert_eq!(keys.resolve(KeyCode::Char('w')), None);
    }

    #[test]
    fn test_standard_adds_letter_layouts() {
        let keys = KeyBindings::standard();
        assert_eq!(keys.resolve(KeyCode::Char('a')), Some(Command::Move(Direction::Left)));
        assert_eq!(keys.resolve(KeyCode::Char('j')), Some(Command::Move(Direction::Down)));
        assert_eq!(keys.resolve(KeyCode::Char('W')), Some(Command::Move(Direction::Up)));
        assert_eq!(keys.resolve(KeyCode::Esc), Some(Command::Quit));
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        assert_eq!(KeyBindings::standard().resolve(KeyCode::Char('z')), None);
        assert_eq!(KeyBindings::empty().resolve(KeyCode::Up), None);
    }

    #[test]
    fn test_bind_overrides() {
        let keys = KeyBindings::arrows().bind(KeyCode::Char('q'), Command::NewGame);
        assert_eq!(keys.resolve(KeyCode::Char('q')), Some(Command::NewGame));
    }

    #[test]
    fn test_command_display() {
        assert_eq!(Command::Move(Direction::Left).to_string(), "move left");
        assert_eq!(Command::KeepPlaying.to_string(), "keep playing");
    }
}
