//! DOM `KeyboardEvent.code` bindings.

use super::queue::{Direction, SimEvent};

/// What a key does when pressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction {
    /// Fires once on key-down.
    Event(SimEvent),
    /// Held for as long as the key stays down.
    Pan(Direction),
}

/// Look up the binding for a key code. Unbound keys return `None`.
pub fn action_for_key(code: &str) -> Option<KeyAction> {
    use KeyAction::{Event, Pan};

    let action = match code {
        "KeyX" | "Escape" => Event(SimEvent::Quit),
        "Space" | "KeyP" => Event(SimEvent::TogglePause),
        "KeyS" => Event(SimEvent::ToggleTrails),
        "KeyL" => Event(SimEvent::ToggleLabels),
        "KeyA" => Event(SimEvent::FocusNext),
        "KeyJ" => Event(SimEvent::SpeedDown),
        "KeyK" => Event(SimEvent::SpeedUp),
        "KeyG" => Event(SimEvent::ToggleGuides),
        "KeyH" => Event(SimEvent::ToggleHud),
        "KeyR" => Event(SimEvent::ResetView),
        "Equal" | "NumpadAdd" => Event(SimEvent::ZoomIn),
        "Minus" | "NumpadSubtract" => Event(SimEvent::ZoomOut),
        "ArrowUp" => Pan(Direction::Up),
        "ArrowDown" => Pan(Direction::Down),
        "ArrowLeft" => Pan(Direction::Left),
        "ArrowRight" => Pan(Direction::Right),
        _ => return None,
    };
    Some(action)
}

/// One wheel notch. Scrolling up (negative `deltaY`) zooms in.
pub fn wheel_event(delta_y: f64) -> Option<SimEvent> {
    if delta_y < 0.0 {
        Some(SimEvent::ZoomIn)
    } else if delta_y > 0.0 {
        Some(SimEvent::ZoomOut)
    } else {
        None
    }
}

/// Help lines shown by the HUD, matching the bindings above.
pub const HELP_LINES: &[&str] = &[
    "Space/P: pause",
    "S: trails  L: labels  G: guides  H: help",
    "A: focus next",
    "J/K: slower/faster",
    "+/- or wheel: zoom  R: reset",
    "Arrows: pan  X/Esc: quit",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_bindings() {
        assert_eq!(action_for_key("KeyX"), Some(KeyAction::Event(SimEvent::Quit)));
        assert_eq!(action_for_key("Escape"), Some(KeyAction::Event(SimEvent::Quit)));
        assert_eq!(action_for_key("Space"), Some(KeyAction::Event(SimEvent::TogglePause)));
        assert_eq!(action_for_key("KeyS"), Some(KeyAction::Event(SimEvent::ToggleTrails)));
        assert_eq!(action_for_key("KeyA"), Some(KeyAction::Event(SimEvent::FocusNext)));
        assert_eq!(action_for_key("KeyJ"), Some(KeyAction::Event(SimEvent::SpeedDown)));
        assert_eq!(action_for_key("KeyK"), Some(KeyAction::Event(SimEvent::SpeedUp)));
    }

    #[test]
    fn arrows_pan() {
        assert_eq!(action_for_key("ArrowLeft"), Some(KeyAction::Pan(Direction::Left)));
        assert_eq!(action_for_key("ArrowDown"), Some(KeyAction::Pan(Direction::Down)));
    }

    #[test]
    fn unbound_keys() {
        assert_eq!(action_for_key("KeyQ"), None);
        assert_eq!(action_for_key(""), None);
    }

    #[test]
    fn wheel_direction() {
        assert_eq!(wheel_event(-120.0), Some(SimEvent::ZoomIn));
        assert_eq!(wheel_event(3.0), Some(SimEvent::ZoomOut));
        assert_eq!(wheel_event(0.0), None);
        assert_eq!(wheel_event(f64::NAN), None);
    }
}
