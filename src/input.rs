use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Heading;

/// A directional key press, before the reversal guard is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Turn(Key),
}

/// Sorts a raw key event into a game command. Arrow keys and WASD both
/// steer; Esc, q and CTRL+C quit; everything else is ignored.
pub fn classify(ev: &KeyEvent) -> Option<Command> {
    if is_ctrl_c(ev) {
        return Some(Command::Quit);
    }

    let command = match ev.code {
        KeyCode::Esc | KeyCode::Char('q') => Command::Quit,
        KeyCode::Up | KeyCode::Char('w') => Command::Turn(Key::Up),
        KeyCode::Down | KeyCode::Char('s') => Command::Turn(Key::Down),
        KeyCode::Left | KeyCode::Char('a') => Command::Turn(Key::Left),
        KeyCode::Right | KeyCode::Char('d') => Command::Turn(Key::Right),
        _ => return None,
    };

    Some(command)
}

/// The steering table. A key on the axis the snake is already moving along
/// leaves the heading unchanged, so a 180° turn can never come out of input
/// handling.
pub fn translate(current: Heading, key: Key) -> Heading {
    use Heading::*;

    match (current, key) {
        (Left, Key::Up) | (Right, Key::Up) => Up,
        (Left, Key::Down) | (Right, Key::Down) => Down,
        (Up, Key::Left) | (Down, Key::Left) => Left,
        (Up, Key::Right) | (Down, Key::Right) => Right,
        _ => current,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

#[cfg(test)]
mod tests {
    use super::*;
    use Heading::*;

    const KEYS: [Key; 4] = [Key::Up, Key::Down, Key::Left, Key::Right];
    const HEADINGS: [Heading; 4] = [Up, Down, Left, Right];

    #[test]
    fn perpendicular_keys_turn() {
        assert_eq!(translate(Left, Key::Up), Up);
        assert_eq!(translate(Right, Key::Up), Up);
        assert_eq!(translate(Left, Key::Down), Down);
        assert_eq!(translate(Right, Key::Down), Down);
        assert_eq!(translate(Up, Key::Left), Left);
        assert_eq!(translate(Down, Key::Left), Left);
        assert_eq!(translate(Up, Key::Right), Right);
        assert_eq!(translate(Down, Key::Right), Right);
    }

    #[test]
    fn same_axis_keys_keep_the_heading() {
        assert_eq!(translate(Right, Key::Left), Right);
        assert_eq!(translate(Right, Key::Right), Right);
        assert_eq!(translate(Left, Key::Right), Left);
        assert_eq!(translate(Up, Key::Down), Up);
        assert_eq!(translate(Down, Key::Up), Down);
    }

    #[test]
    fn translation_never_reverses() {
        for &heading in &HEADINGS {
            for &key in &KEYS {
                assert_ne!(translate(heading, key), heading.opposite());
            }
        }
    }

    #[test]
    fn classify_maps_arrows_and_wasd() {
        let key = |code| KeyEvent { code, modifiers: KeyModifiers::NONE };

        assert_eq!(classify(&key(KeyCode::Up)), Some(Command::Turn(Key::Up)));
        assert_eq!(classify(&key(KeyCode::Char('w'))), Some(Command::Turn(Key::Up)));
        assert_eq!(classify(&key(KeyCode::Char('s'))), Some(Command::Turn(Key::Down)));
        assert_eq!(classify(&key(KeyCode::Left)), Some(Command::Turn(Key::Left)));
        assert_eq!(classify(&key(KeyCode::Char('d'))), Some(Command::Turn(Key::Right)));
        assert_eq!(classify(&key(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(classify(&key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(classify(&key(KeyCode::Enter)), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let ev = KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL };
        assert_eq!(classify(&ev), Some(Command::Quit));

        let plain = KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::NONE };
        assert_eq!(classify(&plain), None);
    }
}
