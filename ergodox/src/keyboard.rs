use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Instant, Timer};
use embedded_hal_async::delay::DelayNs;
use usbd_hid::descriptor::{MediaKeyboardReport, MouseReport, SystemControlReport};

use crate::boot;
use crate::channel::KEY_EVENT_CHANNEL;
use crate::config::BehaviorConfig;
use crate::event::KeyEvent;
use crate::function::{FunctionId, TapRecord};
use crate::hid::{HidReporter, Report, as_consumer_control_usage_id, as_system_control_usage_id};
use crate::hid_state::{HidMouseButtons, HidState};
use crate::keyboard_macro::{MacroId, MacroOperation};
use crate::keymap::KeyMap;
use crate::layer::LayerState;
use crate::resolver::FnResolver;
use crate::types::action::Action;
use crate::types::keycode::KeyCode;
use crate::types::modifier::HidModifiers;

/// The action dispatcher.
///
/// Receives key events, resolves them through the keymap and the function resolver, and turns the
/// resulting actions into HID reports, which are written to the reporter `R`.
pub struct Keyboard<'a, R: HidReporter, D: DelayNs, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Keymap, owns the layer state
    keymap: KeyMap<'a, ROW, COL, NUM_LAYER>,

    /// Resolver of the function slots
    resolver: FnResolver<'a>,

    /// Where the reports go
    reporter: R,

    /// Timer used by macros and the bootloader key
    delay: D,

    behavior: BehaviorConfig,

    /// Registered keys, modifiers and mouse buttons
    hid_state: HidState,

    /// Actions resolved when the keys were pressed, the release executes the same action
    action_cache: [[Action; COL]; ROW],

    /// The tap/hold key which is not resolved yet, and when it was pressed
    pending_tap: Option<(KeyEvent, Instant)>,

    /// The keys which the backspace/delete keys registered on press
    backspace_delete: [[Option<KeyCode>; COL]; ROW],
}

impl<'a, R: HidReporter, D: DelayNs, const ROW: usize, const COL: usize, const NUM_LAYER: usize>
    Keyboard<'a, R, D, ROW, COL, NUM_LAYER>
{
    pub fn new(
        layers: &'a [[[KeyCode; COL]; ROW]; NUM_LAYER],
        resolver: FnResolver<'a>,
        reporter: R,
        delay: D,
        behavior: BehaviorConfig,
    ) -> Self {
        Keyboard {
            keymap: KeyMap::new(layers),
            resolver,
            reporter,
            delay,
            behavior,
            hid_state: HidState::new(),
            action_cache: [[Action::No; COL]; ROW],
            pending_tap: None,
            backspace_delete: [[None; COL]; ROW],
        }
    }

    /// Process key events from [`KEY_EVENT_CHANNEL`] forever.
    ///
    /// While a tap/hold key is pending, the next event races against its hold timeout.
    pub async fn run(&mut self) {
        loop {
            let key_event = match self.pending_tap {
                Some((_, pressed_at)) => {
                    let hold_timeout = Timer::at(pressed_at + self.hold_timeout());
                    match select(hold_timeout, KEY_EVENT_CHANNEL.receive()).await {
                        Either::First(_) => {
                            self.process_hold_timeout().await;
                            continue;
                        }
                        Either::Second(e) => e,
                    }
                }
                None => KEY_EVENT_CHANNEL.receive().await,
            };
            self.process_key_event(key_event).await;
        }
    }

    pub fn keymap(&self) -> &KeyMap<'a, ROW, COL, NUM_LAYER> {
        &self.keymap
    }

    pub fn layer_state(&self) -> LayerState {
        self.keymap.layer_state()
    }

    pub fn hid_state(&self) -> &HidState {
        &self.hid_state
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    fn hold_timeout(&self) -> Duration {
        Duration::from_millis(self.behavior.hold_timeout_ms as u64)
    }

    /// Resolve the pending tap/hold key as held, if it's pressed longer than the hold timeout
    pub async fn process_hold_timeout(&mut self) {
        if let Some((pending, pressed_at)) = self.pending_tap
            && pressed_at.elapsed() >= self.hold_timeout()
        {
            debug!("Hold timeout, got HOLD: {:?}", pending);
            self.pending_tap = None;
            let action = self.action_cache[pending.row as usize][pending.col as usize];
            self.process_action_hold(action, pending).await;
        }
    }

    /// Process key changes at (row, col)
    pub async fn process_key_event(&mut self, key_event: KeyEvent) {
        let (row, col) = (key_event.row as usize, key_event.col as usize);
        if row >= ROW || col >= COL {
            warn!("Key event out of the matrix: {:?}", key_event);
            return;
        }

        if key_event.pressed {
            // Another key is pressed, the pending tap/hold key is held
            if let Some((pending, _)) = self.pending_tap.take() {
                let action = self.action_cache[pending.row as usize][pending.col as usize];
                debug!("Tap/hold key {:?} interrupted by {:?}", pending, key_event);
                self.process_action_hold(action, pending).await;
            }

            let action = self.resolve_action(row, col);
            debug!("Pressed {:?}, action: {:?}", key_event, action);
            self.action_cache[row][col] = action;
            if action.is_tap_hold() {
                self.pending_tap = Some((key_event, Instant::now()));
            } else {
                self.process_action(action, key_event).await;
            }
        } else {
            let action = core::mem::take(&mut self.action_cache[row][col]);
            debug!("Released {:?}, action: {:?}", key_event, action);
            if action.is_tap_hold() {
                match self.pending_tap.take_if(|(p, _)| p.same_position(&key_event)) {
                    // Released before any other key is pressed, within the hold timeout
                    Some((_, pressed_at)) if pressed_at.elapsed() < self.hold_timeout() => {
                        self.process_action_tap(action, key_event).await;
                    }
                    // The hold timeout has passed without being noticed, press and release the hold action
                    Some((pending, _)) => {
                        debug!("Hold timeout, got HOLD: {:?}", pending);
                        self.process_action_hold(action, pending).await;
                        self.process_action_hold(action, key_event).await;
                    }
                    None => self.process_action_hold(action, key_event).await,
                }
            } else {
                self.process_action(action, key_event).await;
            }
        }
    }

    /// Get the action of the key at (row, col), with current layer state
    fn resolve_action(&self, row: usize, col: usize) -> Action {
        let keycode = self.keymap.get_keycode(row, col);
        if keycode.is_fn() {
            self.resolver.resolve(keycode, self.keymap.get_activated_layer())
        } else if keycode == KeyCode::No {
            Action::No
        } else {
            Action::Key(keycode)
        }
    }

    async fn process_action(&mut self, action: Action, key_event: KeyEvent) {
        let pressed = key_event.pressed;
        match action {
            Action::No => (),
            Action::Key(key) => self.process_action_key(key, pressed).await,
            Action::LayerOn(layer_num) => {
                // Activate a layer while the key is held
                if pressed {
                    self.keymap.activate_layer(layer_num);
                } else {
                    self.keymap.deactivate_layer(layer_num);
                }
            }
            Action::LayerToggle(layer_num) => {
                // Toggle a layer when the key is release
                if !pressed {
                    self.keymap.toggle_layer(layer_num);
                }
            }
            Action::LayerSet(layer_num, trigger) => {
                if trigger.fires_on(pressed) {
                    self.keymap.move_to_layer(layer_num);
                }
            }
            Action::TriggerMacro(id) => self.process_action_macro(id, pressed).await,
            Action::Function(id) => self.process_function(id, key_event, TapRecord::default()).await,
            Action::ModifierTap(_, _) | Action::LayerTap(_, _) | Action::FunctionTap(_) => {
                error!("Tap/hold action {:?} dispatched without tap/hold resolution", action)
            }
        }
    }

    /// The hold side of a tap/hold action
    async fn process_action_hold(&mut self, action: Action, key_event: KeyEvent) {
        let pressed = key_event.pressed;
        match action {
            Action::ModifierTap(modifiers, _) => {
                if pressed {
                    self.hid_state.add_mods(modifiers.to_hid_modifiers());
                } else {
                    self.hid_state.del_mods(modifiers.to_hid_modifiers());
                }
                self.send_keyboard_report().await;
            }
            Action::LayerTap(layer_num, _) => {
                if pressed {
                    self.keymap.activate_layer(layer_num);
                } else {
                    self.keymap.deactivate_layer(layer_num);
                }
            }
            Action::FunctionTap(id) => self.process_function(id, key_event, TapRecord::HELD).await,
            _ => (),
        }
    }

    /// The tap side of a tap/hold action, press and release at once
    async fn process_action_tap(&mut self, action: Action, key_event: KeyEvent) {
        match action {
            Action::ModifierTap(_, key) | Action::LayerTap(_, key) => {
                self.process_action_key(key, true).await;
                self.process_action_key(key, false).await;
            }
            Action::FunctionTap(id) => {
                let press = KeyEvent::press(key_event.row, key_event.col);
                let release = KeyEvent::release(key_event.row, key_event.col);
                self.process_function(id, press, TapRecord::TAPPED).await;
                self.process_function(id, release, TapRecord::TAPPED).await;
            }
            _ => (),
        }
    }

    async fn process_action_key(&mut self, key: KeyCode, pressed: bool) {
        if key.is_consumer() {
            self.process_action_consumer_control(key, pressed).await;
        } else if key.is_system() {
            self.process_action_system_control(key, pressed).await;
        } else if key.is_mouse_key() {
            self.process_action_mouse(key, pressed).await;
        } else if key.is_basic() {
            if pressed {
                self.register_key(key);
            } else {
                self.unregister_key(key);
            }
            self.send_keyboard_report().await;
        } else {
            debug!("Ignored keycode {:?}", key);
        }
    }

    /// Process consumer control action. Consumer control keys are keys in hid consumer page, such as media keys.
    async fn process_action_consumer_control(&mut self, key: KeyCode, pressed: bool) {
        let usage_id = if pressed {
            as_consumer_control_usage_id(key) as u16
        } else {
            0
        };
        self.send_report(Report::MediaKeyboardReport(MediaKeyboardReport { usage_id }))
            .await;
    }

    /// Process system control action. System control keys are keys in system page, such as power key.
    async fn process_action_system_control(&mut self, key: KeyCode, pressed: bool) {
        let usage_id = if pressed {
            match as_system_control_usage_id(key) {
                Some(system_key) => system_key as u8,
                None => return,
            }
        } else {
            0
        };
        self.send_report(Report::SystemControlReport(SystemControlReport { usage_id }))
            .await;
    }

    /// Process mouse key action.
    ///
    /// A movement or wheel key moves a single step on press, the release sends an empty movement.
    async fn process_action_mouse(&mut self, key: KeyCode, pressed: bool) {
        let move_delta = self.behavior.mouse_move_delta;
        let wheel_delta = self.behavior.mouse_wheel_delta;
        let buttons = HidMouseButtons::from_keycode(key);
        if buttons.into_bits() != 0 {
            if pressed {
                self.hid_state.press_mouse_buttons(buttons);
            } else {
                self.hid_state.release_mouse_buttons(buttons);
            }
            self.send_mouse_report(0, 0, 0, 0).await;
            return;
        }

        if !pressed {
            self.send_mouse_report(0, 0, 0, 0).await;
            return;
        }

        match key {
            KeyCode::MouseUp => self.send_mouse_report(0, move_delta.saturating_neg(), 0, 0).await,
            KeyCode::MouseDown => self.send_mouse_report(0, move_delta, 0, 0).await,
            KeyCode::MouseLeft => self.send_mouse_report(move_delta.saturating_neg(), 0, 0, 0).await,
            KeyCode::MouseRight => self.send_mouse_report(move_delta, 0, 0, 0).await,
            KeyCode::MouseWheelUp => self.send_mouse_report(0, 0, wheel_delta, 0).await,
            KeyCode::MouseWheelDown => self.send_mouse_report(0, 0, wheel_delta.saturating_neg(), 0).await,
            KeyCode::MouseWheelLeft => self.send_mouse_report(0, 0, 0, wheel_delta.saturating_neg()).await,
            KeyCode::MouseWheelRight => self.send_mouse_report(0, 0, 0, wheel_delta).await,
            _ => debug!("Mouse key {:?} is not supported", key),
        }
    }

    async fn process_action_macro(&mut self, id: u8, pressed: bool) {
        let Some(macro_id) = MacroId::from_u8(id) else {
            warn!("Unknown macro id: {}", id);
            return;
        };

        if pressed {
            let sequence = macro_id.sequence(self.behavior.macro_interval_ms);
            self.play_macro(&sequence).await;
        } else {
            // Make sure the modifier doesn't stick, whatever the macro did
            self.hid_state.del_mods(macro_id.modifier().to_hid_modifiers());
            self.send_keyboard_report().await;
        }
    }

    /// Play a macro sequence, until `End` or the end of the sequence.
    ///
    /// After every operation, the player waits the interval set by the last `Interval` operation.
    async fn play_macro(&mut self, sequence: &[MacroOperation]) {
        let mut interval_ms = 0;
        for operation in sequence {
            match *operation {
                MacroOperation::Press(k) => {
                    self.register_key(k);
                    self.send_keyboard_report().await;
                }
                MacroOperation::Release(k) => {
                    self.unregister_key(k);
                    self.send_keyboard_report().await;
                }
                MacroOperation::Tap(k) => {
                    self.register_key(k);
                    self.send_keyboard_report().await;
                    self.unregister_key(k);
                    self.send_keyboard_report().await;
                }
                MacroOperation::Interval(ms) => interval_ms = ms,
                MacroOperation::Delay(ms) => self.delay.delay_ms(ms as u32).await,
                MacroOperation::End => break,
            }
            if interval_ms > 0 {
                self.delay.delay_ms(interval_ms as u32).await;
            }
        }
    }

    async fn process_function(&mut self, id: u8, key_event: KeyEvent, tap: TapRecord) {
        let pressed = key_event.pressed;
        match FunctionId::from_u8(id) {
            Some(FunctionId::Bootloader) => {
                if pressed {
                    self.process_boot().await;
                }
            }
            Some(FunctionId::CopyOrAlt) => self.process_copy_or_alt(pressed, tap).await,
            Some(FunctionId::BackspaceOrDelete) => self.process_backspace_or_delete(key_event).await,
            None => warn!("Unknown function id: {}", id),
        }
    }

    async fn process_boot(&mut self) {
        self.clear().await;
        info!("Jump to bootloader...");
        self.delay.delay_ms(self.behavior.bootloader_delay_ms as u32).await;
        boot::jump_to_bootloader();
        warn!("Jump to bootloader is not supported");
    }

    /// Left Alt while held, Ctrl + C when tapped
    async fn process_copy_or_alt(&mut self, pressed: bool, tap: TapRecord) {
        let alt = KeyCode::LAlt.to_hid_modifiers();
        if pressed {
            if !tap.is_tap() {
                self.hid_state.add_mods(alt);
                self.send_keyboard_report().await;
            }
        } else if tap.is_tap() {
            let ctrl = KeyCode::LCtrl.to_hid_modifiers();
            self.hid_state.add_weak_mods(ctrl);
            self.send_keyboard_report().await;
            self.register_key(KeyCode::C);
            self.send_keyboard_report().await;
            self.unregister_key(KeyCode::C);
            self.send_keyboard_report().await;
            self.hid_state.del_weak_mods(ctrl);
            self.send_keyboard_report().await;
        } else {
            self.hid_state.del_mods(alt);
            self.send_keyboard_report().await;
        }
    }

    /// Backspace, or Delete if any Ctrl is held.
    ///
    /// Ctrl is removed from the report carrying `Delete` and registered back afterwards, the release
    /// removes the key registered by the press of the same key.
    async fn process_backspace_or_delete(&mut self, key_event: KeyEvent) {
        let session = &mut self.backspace_delete[key_event.row as usize][key_event.col as usize];
        if key_event.pressed {
            let ctrl = self.hid_state.mods() & HidModifiers::CTRL_MASK;
            if ctrl.is_empty() {
                *session = Some(KeyCode::Backspace);
                self.hid_state.add_key(KeyCode::Backspace);
                self.send_keyboard_report().await;
            } else {
                *session = Some(KeyCode::Delete);
                self.hid_state.del_mods(ctrl);
                self.hid_state.add_key(KeyCode::Delete);
                self.send_keyboard_report().await;
                self.hid_state.add_mods(ctrl);
            }
        } else {
            let key = session.take().unwrap_or(KeyCode::Backspace);
            self.hid_state.del_key(key);
            self.send_keyboard_report().await;
        }
    }

    /// Release all keys, modifiers and mouse buttons, send the empty reports
    pub async fn clear(&mut self) {
        self.hid_state.clear();
        self.pending_tap = None;
        self.backspace_delete = [[None; COL]; ROW];
        self.send_keyboard_report().await;
        self.send_mouse_report(0, 0, 0, 0).await;
        self.send_report(Report::SystemControlReport(SystemControlReport { usage_id: 0 }))
            .await;
        self.send_report(Report::MediaKeyboardReport(MediaKeyboardReport { usage_id: 0 }))
            .await;
    }

    /// Register a key, the key can be a basic keycode or a modifier.
    fn register_key(&mut self, key: KeyCode) {
        if key.is_modifier() {
            self.hid_state.add_mods(key.to_hid_modifiers());
        } else if key.is_basic() {
            self.hid_state.add_key(key);
        }
    }

    /// Unregister a key, the key can be a basic keycode or a modifier.
    fn unregister_key(&mut self, key: KeyCode) {
        if key.is_modifier() {
            self.hid_state.del_mods(key.to_hid_modifiers());
        } else if key.is_basic() {
            self.hid_state.del_key(key);
        }
    }

    async fn send_report(&mut self, report: Report) {
        if let Err(e) = self.reporter.write_report(report).await {
            error!("Send report error: {:?}", e);
        }
    }

    async fn send_keyboard_report(&mut self) {
        let report = self.hid_state.keyboard_report();
        self.send_report(Report::KeyboardReport(report)).await;
    }

    async fn send_mouse_report(&mut self, x: i8, y: i8, wheel: i8, pan: i8) {
        let report = MouseReport {
            buttons: self.hid_state.mouse_buttons().into_bits(),
            x,
            y,
            wheel,
            pan,
        };
        self.send_report(Report::MouseReport(report)).await;
    }
}
