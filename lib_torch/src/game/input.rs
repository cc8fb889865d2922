#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Button {
    pub downs: u8,
    pub pressed: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: Button,
    pub right: Button,
    pub up: Button,
    pub down: Button,
}

impl Controls {
    fn button_mut(&mut self, key: Key) -> Option<&mut Button> {
        match key {
            Key::Left => Some(&mut self.left),
            Key::Right => Some(&mut self.right),
            Key::Up => Some(&mut self.up),
            Key::Down => Some(&mut self.down),
            Key::Other => None,
        }
    }

    /// Returns true when the event was a directional key.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::KeyDown(key) => match self.button_mut(key) {
                Some(button) => {
                    button.downs = button.downs.saturating_add(1);
                    button.pressed = true;
                    true
                }
                None => false,
            },
            InputEvent::KeyUp(key) => match self.button_mut(key) {
                Some(button) => {
                    button.pressed = false;
                    true
                }
                None => false,
            },
        }
    }

    pub fn clear_downs(&mut self) {
        self.left.downs = 0;
        self.right.downs = 0;
        self.up.downs = 0;
        self.down.downs = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_down_and_up() {
        let mut controls = Controls::default();
        assert!(controls.handle(InputEvent::KeyDown(Key::Left)));
        assert!(controls.left.pressed);
        assert_eq!(controls.left.downs, 1);

        assert!(controls.handle(InputEvent::KeyUp(Key::Left)));
        assert!(!controls.left.pressed);
        assert_eq!(controls.left.downs, 1);

        controls.clear_downs();
        assert_eq!(controls.left.downs, 0);
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut controls = Controls::default();
        assert!(!controls.handle(InputEvent::KeyDown(Key::Other)));
        assert!(!controls.handle(InputEvent::KeyUp(Key::Other)));
        assert_eq!(controls, Controls::default());
    }
}
