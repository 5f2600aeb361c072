//! Capture state machine implementation
//!
//! Handles transitions between Idle and Selecting based on focus and key
//! events delivered by the host, validates candidate keys against the key
//! filter and notifies subscribers when the committed hotkey changes.

use tracing::{debug, info, trace};

use crate::config::PickerConfig;
use crate::events::{HotkeyChanged, Notifier, SubscriptionId};
use crate::hotkey::{names, KeyCode};

use super::filter::{FilterMode, KeyFilter};

/// The two capture states of a picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Not capturing; a hotkey may or may not be committed
    #[default]
    Idle,
    /// Focused and waiting for a key
    Selecting,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Idle => write!(f, "Idle"),
            Mode::Selecting => write!(f, "Selecting"),
        }
    }
}

/// What a key event did to the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key became the hotkey
    Committed,
    /// The cancel key aborted the selection and cleared the hotkey
    Cancelled,
    /// The key was filtered out; still selecting
    Rejected,
    /// The picker was not selecting
    Ignored,
}

impl KeyOutcome {
    /// Whether the host should move focus away from the picker
    pub fn releases_focus(self) -> bool {
        matches!(self, KeyOutcome::Committed | KeyOutcome::Cancelled)
    }
}

#[derive(Debug, Clone)]
struct Committed {
    key: KeyCode,
    name: Option<String>,
}

impl Committed {
    /// Label text, the raw code for keys without a name
    fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{:#x}", self.key.value()),
        }
    }
}

/// Single-key hotkey capture control
///
/// The host calls [`on_focus_gained`](Self::on_focus_gained),
/// [`on_focus_lost`](Self::on_focus_lost) and [`on_key`](Self::on_key) from
/// its event thread and renders [`label`](Self::label).
#[derive(Debug)]
pub struct HotkeyPicker {
    mode: Mode,
    committed: Option<Committed>,
    label: String,
    default_text: String,
    selection_text: String,
    cancel_key: KeyCode,
    filter: KeyFilter,
    notifier: Notifier,
}

impl Default for HotkeyPicker {
    fn default() -> Self {
        Self::new(PickerConfig::default())
    }
}

impl HotkeyPicker {
    /// Create a new picker with no hotkey selected
    pub fn new(config: PickerConfig) -> Self {
        let filter = KeyFilter::new(
            config.filter_enabled,
            config.allowed_keys,
            config.forbidden_keys,
        );

        Self {
            mode: Mode::Idle,
            committed: None,
            label: config.default_text.clone(),
            default_text: config.default_text,
            selection_text: config.selection_text,
            cancel_key: config.cancel_key,
            filter,
            notifier: Notifier::new(),
        }
    }

    /// Display name of a key code, `None` for unknown codes
    pub fn key_code_to_string(key: KeyCode) -> Option<String> {
        names::name_of(key)
    }

    /// Current capture mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether the picker is waiting for a key
    pub fn is_selecting(&self) -> bool {
        self.mode == Mode::Selecting
    }

    /// Text the host should currently display
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The committed hotkey, if any
    pub fn hotkey(&self) -> Option<KeyCode> {
        self.committed.as_ref().map(|c| c.key)
    }

    /// Display name of the committed hotkey, if any
    pub fn hotkey_name(&self) -> Option<&str> {
        self.committed.as_ref().and_then(|c| c.name.as_deref())
    }

    /// Register a callback for hotkey changes
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&HotkeyChanged) + 'static,
    {
        self.notifier.subscribe(callback)
    }

    /// Remove a callback, returning whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// The picker received input focus
    pub fn on_focus_gained(&mut self) {
        self.label = self.selection_text.clone();
        self.transition_to(Mode::Selecting);
    }

    /// The picker lost input focus
    ///
    /// Leaving without choosing a key restores the previous label. The name
    /// of a committed key is looked up again, so name overrides registered
    /// since the commit show up here.
    pub fn on_focus_lost(&mut self) {
        if self.mode != Mode::Selecting {
            trace!("focus lost while idle");
            return;
        }

        match self.committed.as_mut() {
            Some(committed) => {
                if let Some(name) = names::name_of(committed.key) {
                    committed.name = Some(name);
                }
                self.label = committed.label();
            }
            None => self.label = self.default_text.clone(),
        }

        self.transition_to(Mode::Idle);
    }

    /// A key was pressed while the picker has focus
    pub fn on_key(&mut self, key: KeyCode) -> KeyOutcome {
        if self.mode != Mode::Selecting {
            trace!(code = key.value(), "key ignored while idle");
            return KeyOutcome::Ignored;
        }

        if key == self.cancel_key {
            debug!("selection cancelled");
            self.label = self.default_text.clone();
            self.transition_to(Mode::Idle);
            self.clear_committed();
            return KeyOutcome::Cancelled;
        }

        if !self.accepts(key) {
            return KeyOutcome::Rejected;
        }

        // A pressed key is committed even when the naming table has no entry
        self.commit(key, names::name_of(key));
        KeyOutcome::Committed
    }

    /// Set the hotkey without user interaction
    ///
    /// Keys rejected by the filter or without a display name are ignored.
    /// Returns whether the hotkey was applied.
    pub fn set_hotkey(&mut self, key: KeyCode) -> bool {
        if !self.accepts(key) {
            return false;
        }

        match names::name_of(key) {
            Some(name) => {
                self.commit(key, Some(name));
                true
            }
            None => {
                debug!(code = key.value(), "key has no name");
                false
            }
        }
    }

    /// Clear the hotkey and return to the default label
    pub fn reset(&mut self) {
        self.label = self.default_text.clone();
        self.transition_to(Mode::Idle);
        self.clear_committed();
    }

    /// Label shown when no hotkey is selected
    pub fn default_text(&self) -> &str {
        &self.default_text
    }

    /// Set the label shown when no hotkey is selected
    pub fn set_default_text(&mut self, text: impl Into<String>) {
        self.default_text = text.into();
        if self.mode == Mode::Idle && self.committed.is_none() {
            self.label = self.default_text.clone();
        }
    }

    /// Label shown while selecting
    pub fn selection_text(&self) -> &str {
        &self.selection_text
    }

    /// Set the label shown while selecting
    pub fn set_selection_text(&mut self, text: impl Into<String>) {
        self.selection_text = text.into();
        if self.mode == Mode::Selecting {
            self.label = self.selection_text.clone();
        }
    }

    /// Key that aborts the current selection
    pub fn cancel_key(&self) -> KeyCode {
        self.cancel_key
    }

    /// Change the key that aborts a selection
    pub fn set_cancel_key(&mut self, key: KeyCode) {
        self.cancel_key = key;
    }

    /// Whether the allow/deny lists are checked
    pub fn is_key_filter_enabled(&self) -> bool {
        self.filter.is_enabled()
    }

    /// Turn the allow/deny lists on or off
    pub fn set_key_filter_enabled(&mut self, enabled: bool) {
        self.filter.set_enabled(enabled);
    }

    /// Which list currently decides acceptance
    pub fn filter_mode(&self) -> FilterMode {
        self.filter.mode()
    }

    /// Keys that may be chosen, if non-empty
    pub fn allowed_keys(&self) -> &[KeyCode] {
        self.filter.allowed_keys()
    }

    /// Replace the allow-list; a non-empty list clears the forbidden keys
    pub fn set_allowed_keys(&mut self, keys: impl Into<Vec<KeyCode>>) {
        self.filter.set_allowed_keys(keys.into());
    }

    /// Keys that may not be chosen, if non-empty
    pub fn forbidden_keys(&self) -> &[KeyCode] {
        self.filter.forbidden_keys()
    }

    /// Replace the deny-list; a non-empty list clears the allowed keys
    pub fn set_forbidden_keys(&mut self, keys: impl Into<Vec<KeyCode>>) {
        self.filter.set_forbidden_keys(keys.into());
    }

    fn accepts(&self, key: KeyCode) -> bool {
        let accepted = self.filter.accepts(key);
        if !accepted {
            debug!(
                code = key.value(),
                filter = %self.filter.mode(),
                "key rejected by filter"
            );
        }
        accepted
    }

    fn commit(&mut self, key: KeyCode, name: Option<String>) {
        info!(code = key.value(), name = ?name, "hotkey committed");

        let committed = Committed { key, name };
        self.label = committed.label();
        let event = HotkeyChanged {
            key: Some(key),
            name: committed.name.clone(),
        };
        self.committed = Some(committed);
        self.transition_to(Mode::Idle);

        self.notifier.notify(&event);
    }

    /// Drop the committed key, notifying only if there was one
    fn clear_committed(&mut self) {
        if let Some(previous) = self.committed.take() {
            info!(code = previous.key.value(), "hotkey cleared");
            self.notifier.notify(&HotkeyChanged::cleared());
        }
    }

    fn transition_to(&mut self, new_mode: Mode) {
        let old_mode = self.mode;
        if old_mode == new_mode {
            return;
        }

        debug!(from = %old_mode, to = %new_mode, "capture transition");
        self.mode = new_mode;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    type Seen = Rc<RefCell<Vec<HotkeyChanged>>>;

    fn create_picker(config: PickerConfig) -> (HotkeyPicker, Seen) {
        let seen: Seen = Rc::new(RefCell::new(Vec::new()));
        let mut picker = HotkeyPicker::new(config);
        let sink = Rc::clone(&seen);
        picker.subscribe(move |event| sink.borrow_mut().push(event.clone()));
        (picker, seen)
    }

    #[test]
    fn test_initial_values() {
        let (picker, seen) = create_picker(PickerConfig::default());

        assert_eq!(picker.mode(), Mode::Idle);
        assert_eq!(picker.hotkey(), None);
        assert_eq!(picker.hotkey_name(), None);
        assert_eq!(picker.label(), "None");
        assert_eq!(picker.default_text(), "None");
        assert_eq!(picker.selection_text(), "..");
        assert_eq!(picker.cancel_key(), KeyCode::ESCAPE);
        assert!(!picker.is_key_filter_enabled());
        assert!(picker.allowed_keys().is_empty());
        assert!(picker.forbidden_keys().is_empty());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_focus_then_cancel() {
        let (mut picker, seen) = create_picker(PickerConfig::default());

        picker.on_focus_gained();
        assert_eq!(picker.mode(), Mode::Selecting);
        assert!(picker.is_selecting());
        assert_eq!(picker.label(), "..");

        assert_eq!(picker.on_key(KeyCode::ESCAPE), KeyOutcome::Cancelled);
        assert_eq!(picker.mode(), Mode::Idle);
        assert!(!picker.is_selecting());
        assert_eq!(picker.label(), "None");
        assert_eq!(picker.hotkey(), None);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_cancel_clears_committed_key() {
        let (mut picker, seen) = create_picker(PickerConfig::default());

        picker.set_hotkey(KeyCode::F5);
        picker.on_focus_gained();
        assert_eq!(picker.on_key(KeyCode::ESCAPE), KeyOutcome::Cancelled);

        assert_eq!(picker.hotkey(), None);
        assert_eq!(picker.label(), "None");
        assert_eq!(
            *seen.borrow(),
            vec![
                HotkeyChanged::committed(KeyCode::F5, "F5"),
                HotkeyChanged::cleared(),
            ]
        );

        // Nothing left to clear
        picker.on_focus_gained();
        picker.on_key(KeyCode::ESCAPE);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_key_commits() {
        let (mut picker, seen) = create_picker(PickerConfig::default());

        picker.on_focus_gained();
        let outcome = picker.on_key(KeyCode::F8);

        assert_eq!(outcome, KeyOutcome::Committed);
        assert!(outcome.releases_focus());
        assert_eq!(picker.mode(), Mode::Idle);
        assert_eq!(picker.hotkey(), Some(KeyCode::F8));
        assert_eq!(picker.hotkey_name(), Some("F8"));
        assert_eq!(picker.label(), "F8");
        assert_eq!(*seen.borrow(), vec![HotkeyChanged::committed(KeyCode::F8, "F8")]);
    }

    #[test]
    fn test_key_ignored_while_idle() {
        let (mut picker, seen) = create_picker(PickerConfig::default());

        assert_eq!(picker.on_key(KeyCode::F8), KeyOutcome::Ignored);
        assert!(!KeyOutcome::Ignored.releases_focus());
        assert_eq!(picker.hotkey(), None);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_key_filter_allowed() {
        let config = PickerConfig::default()
            .with_filter_enabled(true)
            .with_allowed_keys([KeyCode::F1, KeyCode::F2, KeyCode::F3]);
        let (mut picker, seen) = create_picker(config);

        picker.on_focus_gained();
        assert_eq!(picker.on_key(KeyCode::F8), KeyOutcome::Rejected);
        assert_eq!(picker.mode(), Mode::Selecting);
        assert_eq!(picker.label(), "..");
        assert_eq!(picker.hotkey(), None);
        assert!(seen.borrow().is_empty());

        assert_eq!(picker.on_key(KeyCode::F2), KeyOutcome::Committed);
        assert_eq!(picker.hotkey(), Some(KeyCode::F2));
        assert_eq!(*seen.borrow(), vec![HotkeyChanged::committed(KeyCode::F2, "F2")]);
    }

    #[test]
    fn test_key_filter_forbidden() {
        let config = PickerConfig::default()
            .with_filter_enabled(true)
            .with_forbidden_keys([KeyCode::F1, KeyCode::F2, KeyCode::F3]);
        let (mut picker, _) = create_picker(config);

        picker.on_focus_gained();
        assert_eq!(picker.on_key(KeyCode::F8), KeyOutcome::Committed);
        assert_eq!(picker.hotkey(), Some(KeyCode::F8));

        picker.on_focus_gained();
        assert_eq!(picker.on_key(KeyCode::F2), KeyOutcome::Rejected);
        picker.on_focus_lost();
        assert_eq!(picker.hotkey(), Some(KeyCode::F8));
        assert_eq!(picker.label(), "F8");
    }

    #[test]
    fn test_cancel_key_bypasses_filter() {
        let config = PickerConfig::default()
            .with_filter_enabled(true)
            .with_allowed_keys([KeyCode::F1]);
        let (mut picker, _) = create_picker(config);

        picker.on_focus_gained();
        assert_eq!(picker.on_key(KeyCode::ESCAPE), KeyOutcome::Cancelled);
    }

    #[test]
    fn test_key_filter_both() {
        let config = PickerConfig::default()
            .with_filter_enabled(true)
            .with_allowed_keys([KeyCode::F1, KeyCode::F2, KeyCode::F3])
            .with_forbidden_keys([KeyCode::F4, KeyCode::F5, KeyCode::F6]);
        let (mut picker, _) = create_picker(config);

        assert_eq!(picker.allowed_keys(), &[KeyCode::F1, KeyCode::F2, KeyCode::F3]);
        assert!(picker.forbidden_keys().is_empty());

        picker.set_forbidden_keys([KeyCode::A, KeyCode::B, KeyCode::C]);
        assert!(picker.allowed_keys().is_empty());
        assert_eq!(picker.forbidden_keys(), &[KeyCode::A, KeyCode::B, KeyCode::C]);
        assert_eq!(picker.filter_mode(), FilterMode::DenyList);

        picker.set_allowed_keys([KeyCode::D, KeyCode::E, KeyCode::F]);
        assert_eq!(picker.allowed_keys(), &[KeyCode::D, KeyCode::E, KeyCode::F]);
        assert!(picker.forbidden_keys().is_empty());
    }

    #[test]
    fn test_unnamed_key_commits_when_pressed() {
        let (mut picker, seen) = create_picker(PickerConfig::default());
        let unnamed = KeyCode::new(0x0100_0061);
        assert_eq!(names::name_of(unnamed), None);

        picker.on_focus_gained();
        assert_eq!(picker.on_key(unnamed), KeyOutcome::Committed);
        assert_eq!(picker.mode(), Mode::Idle);
        assert_eq!(picker.hotkey(), Some(unnamed));
        assert_eq!(picker.hotkey_name(), None);
        assert_eq!(picker.label(), "0x1000061");
        assert_eq!(
            *seen.borrow(),
            vec![HotkeyChanged {
                key: Some(unnamed),
                name: None,
            }]
        );

        // Focus loss keeps the raw code as the label
        picker.on_focus_gained();
        picker.on_focus_lost();
        assert_eq!(picker.label(), "0x1000061");
        assert_eq!(picker.hotkey(), Some(unnamed));
    }

    #[test]
    fn test_set_hotkey_unnamed_key_ignored() {
        let (mut picker, seen) = create_picker(PickerConfig::default());
        let unnamed = KeyCode::new(0x01ff_ffff);

        assert!(!picker.set_hotkey(unnamed));
        assert_eq!(picker.hotkey(), None);
        assert_eq!(picker.label(), "None");
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_set_hotkey() {
        let (mut picker, _) = create_picker(PickerConfig::default());

        assert!(picker.set_hotkey(KeyCode::F8));
        assert_eq!(picker.hotkey(), Some(KeyCode::F8));

        picker.set_key_filter_enabled(true);
        picker.set_allowed_keys([KeyCode::RETURN, KeyCode::ENTER, KeyCode::CONTROL]);
        assert!(!picker.set_hotkey(KeyCode::A));
        assert_eq!(picker.hotkey(), Some(KeyCode::F8));
        assert!(picker.set_hotkey(KeyCode::CONTROL));
        assert_eq!(picker.hotkey(), Some(KeyCode::CONTROL));

        picker.set_forbidden_keys([KeyCode::RETURN, KeyCode::ENTER, KeyCode::CONTROL]);
        assert!(picker.set_hotkey(KeyCode::A));
        assert_eq!(picker.hotkey(), Some(KeyCode::A));
        assert!(!picker.set_hotkey(KeyCode::CONTROL));
        assert_eq!(picker.hotkey(), Some(KeyCode::A));
    }

    #[test]
    fn test_set_hotkey_abandons_selection() {
        let (mut picker, seen) = create_picker(PickerConfig::default());

        picker.on_focus_gained();
        assert!(picker.set_hotkey(KeyCode::F4));
        assert_eq!(picker.mode(), Mode::Idle);
        assert_eq!(picker.label(), "F4");
        assert_eq!(seen.borrow().len(), 1);

        // Focus loss after the abandoned selection changes nothing
        picker.on_focus_lost();
        assert_eq!(picker.label(), "F4");
    }

    #[test]
    fn test_set_hotkey_rejected_while_selecting() {
        let config = PickerConfig::default()
            .with_filter_enabled(true)
            .with_allowed_keys([KeyCode::F1]);
        let (mut picker, seen) = create_picker(config);

        picker.on_focus_gained();
        assert!(!picker.set_hotkey(KeyCode::F2));
        assert_eq!(picker.mode(), Mode::Selecting);
        assert!(picker.is_selecting());
        assert_eq!(picker.label(), picker.selection_text());
        assert_eq!(picker.hotkey(), None);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_focus_out_with_selected_key() {
        let (mut picker, _) = create_picker(PickerConfig::default());

        picker.set_hotkey(KeyCode::F3);
        picker.on_focus_gained();
        assert_eq!(picker.label(), picker.selection_text());

        picker.on_focus_lost();
        assert_eq!(picker.label(), "F3");
        assert_eq!(picker.hotkey(), Some(KeyCode::F3));
    }

    #[test]
    fn test_focus_out_without_key() {
        let (mut picker, seen) = create_picker(PickerConfig::default());

        picker.on_focus_gained();
        picker.on_focus_lost();
        assert_eq!(picker.mode(), Mode::Idle);
        assert_eq!(picker.label(), "None");

        picker.on_focus_lost();
        assert_eq!(picker.label(), "None");
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_reset() {
        let (mut picker, seen) = create_picker(PickerConfig::default());

        picker.set_hotkey(KeyCode::F5);
        picker.reset();
        assert_eq!(picker.hotkey(), None);
        assert_eq!(picker.label(), "None");
        assert_eq!(picker.mode(), Mode::Idle);

        picker.reset();
        assert_eq!(picker.hotkey(), None);
        assert_eq!(picker.label(), "None");
        assert_eq!(picker.mode(), Mode::Idle);

        assert_eq!(
            *seen.borrow(),
            vec![
                HotkeyChanged::committed(KeyCode::F5, "F5"),
                HotkeyChanged::cleared(),
            ]
        );
    }

    #[test]
    fn test_reset_while_selecting() {
        let (mut picker, _) = create_picker(PickerConfig::default());

        picker.on_focus_gained();
        picker.reset();
        assert_eq!(picker.mode(), Mode::Idle);
        assert_eq!(picker.label(), "None");
    }

    #[test]
    fn test_set_default_text() {
        let (mut picker, _) = create_picker(PickerConfig::default());

        picker.set_default_text("nothing");
        assert_eq!(picker.default_text(), "nothing");
        assert_eq!(picker.label(), "nothing");

        // Not displayed while a key is committed
        picker.set_hotkey(KeyCode::F1);
        picker.set_default_text("empty");
        assert_eq!(picker.label(), "F1");
    }

    #[test]
    fn test_set_selection_text() {
        let (mut picker, _) = create_picker(PickerConfig::default());

        picker.set_selection_text("selecting..");
        assert_eq!(picker.selection_text(), "selecting..");
        assert_eq!(picker.label(), "None");

        picker.on_focus_gained();
        assert_eq!(picker.label(), "selecting..");

        picker.set_selection_text("press key..");
        assert_eq!(picker.label(), "press key..");
        assert_eq!(picker.mode(), Mode::Selecting);

        picker.on_focus_lost();
        assert_eq!(picker.label(), picker.default_text());
    }

    #[test]
    fn test_set_cancel_key() {
        let (mut picker, _) = create_picker(PickerConfig::default());

        picker.set_cancel_key(KeyCode::RETURN);
        assert_eq!(picker.cancel_key(), KeyCode::RETURN);

        picker.on_focus_gained();
        assert_eq!(picker.label(), picker.selection_text());

        assert_eq!(picker.on_key(KeyCode::RETURN), KeyOutcome::Cancelled);
        assert_eq!(picker.label(), picker.default_text());

        // Escape is an ordinary key now
        picker.on_focus_gained();
        assert_eq!(picker.on_key(KeyCode::ESCAPE), KeyOutcome::Committed);
        assert_eq!(picker.hotkey_name(), Some("Escape"));
    }

    #[test]
    fn test_name_override_applies_on_focus_lost() {
        let key = KeyCode::new(0x0200_0201);
        names::set_name(key, "Dial");

        let (mut picker, _) = create_picker(PickerConfig::default());
        assert!(picker.set_hotkey(key));
        assert_eq!(picker.label(), "Dial");

        names::set_name(key, "Knob");
        assert_eq!(picker.label(), "Dial");

        picker.on_focus_gained();
        picker.on_focus_lost();
        assert_eq!(picker.label(), "Knob");
        assert_eq!(picker.hotkey_name(), Some("Knob"));
    }

    #[test]
    fn test_key_code_to_string() {
        assert_eq!(HotkeyPicker::key_code_to_string(KeyCode::A).as_deref(), Some("A"));
        assert_eq!(HotkeyPicker::key_code_to_string(KeyCode::new(65)).as_deref(), Some("A"));
        assert_eq!(
            HotkeyPicker::key_code_to_string(KeyCode::ESCAPE).as_deref(),
            Some("Escape")
        );
        assert_eq!(
            HotkeyPicker::key_code_to_string(KeyCode::CONTROL).as_deref(),
            Some("Control")
        );
        assert_eq!(HotkeyPicker::key_code_to_string(KeyCode::F12).as_deref(), Some("F12"));
        assert_eq!(HotkeyPicker::key_code_to_string(KeyCode::new(0)), None);
    }

    #[test]
    fn test_unsubscribed_callback_not_called() {
        let (mut picker, seen) = create_picker(PickerConfig::default());
        let extra = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&extra);
        let id = picker.subscribe(move |_| *counter.borrow_mut() += 1);

        picker.set_hotkey(KeyCode::F1);
        assert!(picker.unsubscribe(id));
        picker.set_hotkey(KeyCode::F2);

        assert_eq!(*extra.borrow(), 1);
        assert_eq!(seen.borrow().len(), 2);
    }
}
