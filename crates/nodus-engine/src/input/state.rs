use std::collections::HashSet;

use super::types::{InputEvent, Key, KeyState};

/// Current keyboard state for the window.
///
/// Holds "is down" information only; callers poll it once per frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // A key released while unfocused never reports its release.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    self.keys_down.insert(*key);
                }
                KeyState::Released => {
                    self.keys_down.remove(key);
                }
            },
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key { key, state, repeat: false }
    }

    #[test]
    fn press_then_release_toggles_held_state() {
        let mut input = InputState::default();
        input.apply_event(&key(Key::Escape, KeyState::Pressed));
        assert!(input.key_down(Key::Escape));

        input.apply_event(&key(Key::Escape, KeyState::Released));
        assert!(!input.key_down(Key::Escape));
    }

    #[test]
    fn repeat_press_keeps_key_held() {
        let mut input = InputState::default();
        input.apply_event(&key(Key::Space, KeyState::Pressed));
        input.apply_event(&InputEvent::Key { key: Key::Space, state: KeyState::Pressed, repeat: true });
        assert!(input.key_down(Key::Space));
        assert_eq!(input.keys_down.len(), 1);
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut input = InputState::default();
        input.apply_event(&InputEvent::Focused(true));
        input.apply_event(&key(Key::A, KeyState::Pressed));
        input.apply_event(&key(Key::Escape, KeyState::Pressed));

        input.apply_event(&InputEvent::Focused(false));
        assert!(!input.focused);
        assert!(input.keys_down.is_empty());
    }

    #[test]
    fn releasing_unheld_key_is_noop() {
        let mut input = InputState::default();
        input.apply_event(&key(Key::Q, KeyState::Released));
        assert!(input.keys_down.is_empty());
    }
}
