//! Keyboard handler slots and event dispatch.

use fw_common::keysym::KeySym;
use fw_keymap::{KeyEvent, KeyTranslator};
use log::trace;
use std::cell::RefCell;
use std::rc::Rc;

pub type KeyHandler = Rc<dyn Fn(KeySym)>;

fn noop_handler() -> KeyHandler {
    Rc::new(|_| {})
}

/// One down and one up handler, each replaced wholesale on registration.
pub struct Keyboard {
    translator: Box<dyn KeyTranslator>,
    down: RefCell<KeyHandler>,
    up: RefCell<KeyHandler>,
}

impl Keyboard {
    pub fn new(translator: Box<dyn KeyTranslator>) -> Self {
        Self {
            translator,
            down: RefCell::new(noop_handler()),
            up: RefCell::new(noop_handler()),
        }
    }

    pub fn translator(&self) -> &dyn KeyTranslator {
        self.translator.as_ref()
    }

    pub fn set_down_handler(&self, handler: impl Fn(KeySym) + 'static) {
        *self.down.borrow_mut() = Rc::new(handler);
    }

    pub fn set_up_handler(&self, handler: impl Fn(KeySym) + 'static) {
        *self.up.borrow_mut() = Rc::new(handler);
    }

    /// Put both slots back to the no-op handler.
    pub fn reset_handlers(&self) {
        *self.down.borrow_mut() = noop_handler();
        *self.up.borrow_mut() = noop_handler();
    }

    /// Dispatch a host key-down. Returns whether the host default should run.
    pub fn key_down(&self, event: &KeyEvent) -> bool {
        self.dispatch(&self.down, event)
    }

    /// Dispatch a host key-up. Returns whether the host default should run.
    pub fn key_up(&self, event: &KeyEvent) -> bool {
        self.dispatch(&self.up, event)
    }

    fn dispatch(&self, slot: &RefCell<KeyHandler>, event: &KeyEvent) -> bool {
        let Some(sym) = self.translator.resolve(event) else {
            return true;
        };
        trace!("[hkbd] {event:?} -> {sym}");
        // Clone out of the slot so the handler may re-register itself.
        let handler = Rc::clone(&slot.borrow());
        handler(sym);
        self.translator.allows_default(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fw_common::config::KeyScheme;
    use fw_keymap::position::{DOM_PK_ARROW_LEFT, DOM_PK_F11, DOM_PK_UNKNOWN};
    use fw_keymap::translator_for;
    use fw_keymap::virtual_key::{DOM_VK_F5, DOM_VK_NUMPAD7, DOM_VK_A};
    use std::cell::Cell;

    fn recorder() -> (Rc<RefCell<Vec<KeySym>>>, impl Fn(KeySym) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |sym| sink.borrow_mut().push(sym))
    }

    fn position_event(code: u32, key: i32) -> KeyEvent {
        KeyEvent {
            key,
            code,
            ..KeyEvent::default()
        }
    }

    fn legacy_event(key_code: u32) -> KeyEvent {
        KeyEvent {
            key_code,
            ..KeyEvent::default()
        }
    }

    #[test]
    fn test_down_handler_called_once_with_symbol() {
        let keyboard = Keyboard::new(translator_for(KeyScheme::Position));
        let (seen, handler) = recorder();
        keyboard.set_down_handler(handler);

        let allow = keyboard.key_down(&position_event(DOM_PK_ARROW_LEFT, 0));

        assert!(!allow);
        assert_eq!(*seen.borrow(), vec![KeySym::ARROW_LEFT]);
    }

    #[test]
    fn test_up_goes_to_up_handler_only() {
        let keyboard = Keyboard::new(translator_for(KeyScheme::Position));
        let (downs, down) = recorder();
        let (ups, up) = recorder();
        keyboard.set_down_handler(down);
        keyboard.set_up_handler(up);

        keyboard.key_up(&position_event(DOM_PK_UNKNOWN, 'x' as i32));

        assert!(downs.borrow().is_empty());
        assert_eq!(*ups.borrow(), vec![KeySym::from_char('x')]);
    }

    #[test]
    fn test_last_writer_wins() {
        let keyboard = Keyboard::new(translator_for(KeyScheme::Position));
        let (first, h1) = recorder();
        let (second, h2) = recorder();
        keyboard.set_down_handler(h1);
        keyboard.set_down_handler(h2);

        keyboard.key_down(&position_event(DOM_PK_ARROW_LEFT, 0));

        assert!(first.borrow().is_empty());
        assert_eq!(second.borrow().len(), 1);
    }

    #[test]
    fn test_function_key_dispatched_but_default_allowed() {
        let keyboard = Keyboard::new(translator_for(KeyScheme::Position));
        let (seen, handler) = recorder();
        keyboard.set_down_handler(handler);

        let allow = keyboard.key_down(&position_event(DOM_PK_F11, KeySym::named(0x7a).0));

        assert!(allow);
        assert_eq!(*seen.borrow(), vec![KeySym::named(0x7a)]);
        assert_ne!(seen.borrow()[0], KeySym::from_char('z'));
    }

    #[test]
    fn test_legacy_unmapped_key_not_dispatched() {
        let keyboard = Keyboard::new(translator_for(KeyScheme::Legacy));
        let (seen, handler) = recorder();
        keyboard.set_down_handler(handler);

        assert!(keyboard.key_down(&legacy_event(0xFF)));
        assert!(!keyboard.key_down(&legacy_event(DOM_VK_NUMPAD7)));
        assert!(!keyboard.key_down(&legacy_event(DOM_VK_A)));

        assert_eq!(
            *seen.borrow(),
            vec![KeySym::from_char('7'), KeySym::from_char('a')]
        );
    }

    #[test]
    fn test_legacy_function_key_dispatched_once_with_default() {
        let keyboard = Keyboard::new(translator_for(KeyScheme::Legacy));
        let (seen, handler) = recorder();
        keyboard.set_down_handler(handler);

        let allow = keyboard.key_down(&legacy_event(DOM_VK_F5));

        assert!(allow);
        assert_eq!(*seen.borrow(), vec![KeySym::named(DOM_VK_F5)]);
    }

    #[test]
    fn test_handler_may_reregister_while_running() {
        let keyboard = Rc::new(Keyboard::new(translator_for(KeyScheme::Position)));
        let calls = Rc::new(Cell::new(0));
        let kb = Rc::clone(&keyboard);
        let counter = Rc::clone(&calls);
        keyboard.set_down_handler(move |_| {
            counter.set(counter.get() + 1);
            kb.reset_handlers();
        });

        keyboard.key_down(&position_event(DOM_PK_ARROW_LEFT, 0));
        keyboard.key_down(&position_event(DOM_PK_ARROW_LEFT, 0));

        assert_eq!(calls.get(), 1);
    }
}
