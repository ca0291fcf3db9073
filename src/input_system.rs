use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;

/// One of the four ship movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Actions the player can perform in the game
///
/// Raw SDL2 events are translated into these so the game controller never
/// touches the event pump directly.
#[derive(Debug, Clone, PartialEq)]
pub enum GameAction {
    // === Ship ===
    StartMoving(Direction),
    StopMoving(Direction),
    Fire,

    // === Mouse ===
    Click(i32, i32), // x, y in window coordinates

    // === System ===
    Quit,
}

/// Maps a key press/release to an action.
///
/// Movement keys map on both edges (they drive flags); fire and quit are
/// one-shot and only react to the press.
pub fn action_for_key(key: Keycode, pressed: bool) -> Option<GameAction> {
    let direction = match key {
        Keycode::Left => Some(Direction::Left),
        Keycode::Right => Some(Direction::Right),
        Keycode::Up => Some(Direction::Up),
        Keycode::Down => Some(Direction::Down),
        _ => None,
    };

    if let Some(direction) = direction {
        return Some(if pressed {
            GameAction::StartMoving(direction)
        } else {
            GameAction::StopMoving(direction)
        });
    }

    if !pressed {
        return None;
    }

    match key {
        Keycode::Space => Some(GameAction::Fire),
        Keycode::Q => Some(GameAction::Quit),
        _ => None,
    }
}

/// Translates one SDL2 event into a game action, if it means anything
pub fn translate_event(event: &Event) -> Option<GameAction> {
    match event {
        Event::Quit { .. } => Some(GameAction::Quit),
        Event::KeyDown {
            keycode: Some(key),
            ..
        } => action_for_key(*key, true),
        Event::KeyUp {
            keycode: Some(key),
            ..
        } => action_for_key(*key, false),
        Event::MouseButtonDown {
            mouse_btn: MouseButton::Left,
            x,
            y,
            ..
        } => Some(GameAction::Click(*x, *y)),
        _ => None,
    }
}

/// Drains every pending event and returns the resulting actions in order
pub fn poll_actions(event_pump: &mut sdl2::EventPump) -> Vec<GameAction> {
    event_pump
        .poll_iter()
        .filter_map(|event| translate_event(&event))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_both_edges() {
        assert_eq!(
            action_for_key(Keycode::Left, true),
            Some(GameAction::StartMoving(Direction::Left))
        );
        assert_eq!(
            action_for_key(Keycode::Left, false),
            Some(GameAction::StopMoving(Direction::Left))
        );
        assert_eq!(
            action_for_key(Keycode::Down, true),
            Some(GameAction::StartMoving(Direction::Down))
        );
        assert_eq!(
            action_for_key(Keycode::Up, false),
            Some(GameAction::StopMoving(Direction::Up))
        );
    }

    #[test]
    fn test_fire_and_quit_are_press_only() {
        assert_eq!(action_for_key(Keycode::Space, true), Some(GameAction::Fire));
        assert_eq!(action_for_key(Keycode::Space, false), None);
        assert_eq!(action_for_key(Keycode::Q, true), Some(GameAction::Quit));
        assert_eq!(action_for_key(Keycode::Q, false), None);
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert_eq!(action_for_key(Keycode::A, true), None);
        assert_eq!(action_for_key(Keycode::Escape, true), None);
    }

    #[test]
    fn test_quit_event() {
        let event = Event::Quit { timestamp: 0 };
        assert_eq!(translate_event(&event), Some(GameAction::Quit));
    }
}
