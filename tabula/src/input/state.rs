use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::{debug, trace};

use super::appearance::{
    Affordance, Appearance, InputKind, InputMessage, InputSize, InputVariant, MessageKind, Tone,
};

/// Character used for masked password display.
pub const MASK_CHAR: char = '•';

type ChangeHandler = Arc<dyn Fn(&str) + Send + Sync>;
type ClearHandler = Arc<dyn Fn() + Send + Sync>;

/// Unique identifier for an InputField instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputId(usize);

impl InputId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for InputId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__input_{}", self.0)
    }
}

/// Internal state for an InputField
#[derive(Default)]
struct InputInner {
    value: String,
    label: Option<String>,
    placeholder: String,
    helper_text: Option<String>,
    /// Error message shown below the input (if any)
    error: Option<String>,
    disabled: bool,
    invalid: bool,
    loading: bool,
    variant: InputVariant,
    size: InputSize,
    kind: InputKind,
    clearable: bool,
    /// Password currently shown in clear text
    revealed: bool,
    focused: bool,
    on_change: Option<ChangeHandler>,
    on_clear: Option<ClearHandler>,
}

impl InputInner {
    /// The error message, unless it is empty.
    fn error_text(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }

    fn has_error(&self) -> bool {
        self.invalid || self.error_text().is_some()
    }

    fn is_editable(&self) -> bool {
        !self.disabled && !self.loading
    }

    fn shows_clear(&self) -> bool {
        self.clearable && !self.value.is_empty() && !self.loading
    }

    fn shows_reveal(&self) -> bool {
        self.kind == InputKind::Password && !self.loading
    }
}

/// A decorated text input with error and visibility state.
///
/// `InputField` manages its own value, password visibility and focus. Trailing
/// controls (spinner, clear button, reveal toggle) are derived from its
/// properties on every render pass.
///
/// # Example
///
/// ```ignore
/// let password = InputField::new()
///     .label("Password")
///     .kind(InputKind::Password)
///     .helper_text("At least 8 characters");
///
/// password.type_text("hunter22");
/// assert_eq!(password.display_value(), "••••••••");
/// password.toggle_reveal();
/// assert_eq!(password.display_value(), "hunter22");
/// ```
pub struct InputField {
    /// Unique identifier for this input instance
    id: InputId,
    /// Internal state
    inner: Arc<RwLock<InputInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl InputField {
    /// Create a new empty input
    pub fn new() -> Self {
        Self {
            id: InputId::new(),
            inner: Arc::new(RwLock::new(InputInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create an input with an initial value
    pub fn with_value(value: impl Into<String>) -> Self {
        let input = Self::new();
        if let Ok(mut guard) = input.inner.write() {
            guard.value = value.into();
        }
        input
    }

    fn update(self, f: impl FnOnce(&mut InputInner)) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            f(&mut *guard);
        }
        self
    }

    // -------------------------------------------------------------------------
    // Builder
    // -------------------------------------------------------------------------

    pub fn label(self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.update(|i| i.label = Some(label))
    }

    pub fn placeholder(self, placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        self.update(|i| i.placeholder = placeholder)
    }

    pub fn helper_text(self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.update(|i| i.helper_text = Some(text))
    }

    pub fn variant(self, variant: InputVariant) -> Self {
        self.update(|i| i.variant = variant)
    }

    pub fn size(self, size: InputSize) -> Self {
        self.update(|i| i.size = size)
    }

    pub fn kind(self, kind: InputKind) -> Self {
        self.update(|i| i.kind = kind)
    }

    /// Show a clear button while the input has a value.
    pub fn clearable(self) -> Self {
        self.update(|i| i.clearable = true)
    }

    /// Called with the new value after every accepted edit.
    pub fn on_change<F>(self, f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.update(|i| i.on_change = Some(Arc::new(f)))
    }

    /// Called after the clear button empties the input.
    pub fn on_clear<F>(self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.update(|i| i.on_clear = Some(Arc::new(f)))
    }

    /// Get the unique ID for this input
    pub fn id(&self) -> InputId {
        self.id
    }

    /// Get the ID as a string (for element binding)
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    fn read<T: Default>(&self, f: impl FnOnce(&InputInner) -> T) -> T {
        self.inner.read().map(|g| f(&*g)).unwrap_or_default()
    }

    /// Get the current text value
    pub fn value(&self) -> String {
        self.read(|i| i.value.clone())
    }

    /// Get the label text
    pub fn label_text(&self) -> Option<String> {
        self.read(|i| i.label.clone())
    }

    /// Get the placeholder text
    pub fn placeholder_text(&self) -> String {
        self.read(|i| i.placeholder.clone())
    }

    pub fn kind_of(&self) -> InputKind {
        self.read(|i| i.kind)
    }

    pub fn is_disabled(&self) -> bool {
        self.read(|i| i.disabled)
    }

    pub fn is_loading(&self) -> bool {
        self.read(|i| i.loading)
    }

    pub fn is_focused(&self) -> bool {
        self.read(|i| i.focused)
    }

    pub fn is_revealed(&self) -> bool {
        self.read(|i| i.revealed)
    }

    /// Get the error message, if one is set.
    pub fn error_message(&self) -> Option<String> {
        self.read(|i| i.error.clone())
    }

    /// Check if the input shows its error state.
    pub fn has_error(&self) -> bool {
        self.read(|i| i.has_error())
    }

    /// Whether the value is hidden behind mask characters.
    pub fn is_masked(&self) -> bool {
        self.read(|i| i.kind == InputKind::Password && !i.revealed)
    }

    /// Whether typing is accepted.
    pub fn is_editable(&self) -> bool {
        self.read(|i| i.is_editable())
    }

    /// The value as it should be displayed.
    pub fn display_value(&self) -> String {
        self.read(|i| {
            if i.kind == InputKind::Password && !i.revealed {
                std::iter::repeat_n(MASK_CHAR, i.value.chars().count()).collect()
            } else {
                i.value.clone()
            }
        })
    }

    /// Trailing controls, in display order.
    pub fn affordances(&self) -> Vec<Affordance> {
        self.read(|i| {
            let mut out = Vec::new();
            if i.loading {
                out.push(Affordance::Spinner);
            }
            if i.shows_clear() {
                out.push(Affordance::Clear);
            }
            if i.shows_reveal() {
                out.push(Affordance::Reveal {
                    revealed: i.revealed,
                });
            }
            out
        })
    }

    /// Error message if present, otherwise helper text.
    pub fn message(&self) -> Option<InputMessage> {
        let id = self.id_string();
        self.read(|i| {
            let kind = if i.has_error() {
                MessageKind::Error
            } else {
                MessageKind::Helper
            };
            let text = i
                .error_text()
                .map(str::to_string)
                .or_else(|| i.helper_text.clone())?;
            let element_id = match kind {
                MessageKind::Error => format!("{}-error", id),
                MessageKind::Helper => format!("{}-helper", id),
            };
            Some(InputMessage {
                kind,
                text,
                element_id,
            })
        })
    }

    /// Derived decoration for this render pass.
    pub fn appearance(&self) -> Appearance {
        self.read(|i| Appearance {
            variant: i.variant,
            size: i.size,
            tone: if i.has_error() { Tone::Error } else { Tone::Normal },
            dimmed: i.disabled,
            trailing_padding: i.kind == InputKind::Password || i.clearable || i.loading,
        })
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the value programmatically. Does not fire `on_change`.
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.write(|i| i.disabled = disabled);
    }

    pub fn set_loading(&self, loading: bool) {
        self.write(|i| i.loading = loading);
    }

    /// Force the error state without a message.
    pub fn set_invalid(&self, invalid: bool) {
        self.write(|i| i.invalid = invalid);
    }

    /// Set or clear the error message. An empty message counts as none.
    pub fn set_error_message(&self, message: Option<String>) {
        self.write(|i| i.error = message);
    }

    pub fn set_helper_text(&self, text: Option<String>) {
        self.write(|i| i.helper_text = text);
    }

    fn write(&self, f: impl FnOnce(&mut InputInner)) {
        if let Ok(mut guard) = self.inner.write() {
            f(&mut *guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Gestures
    // -------------------------------------------------------------------------

    /// Replace the value from user input.
    ///
    /// Ignored while disabled or loading. Returns true if accepted.
    pub fn type_text(&self, value: impl Into<String>) -> bool {
        let value = value.into();
        let handler = {
            let Ok(mut guard) = self.inner.write() else {
                return false;
            };
            if !guard.is_editable() {
                trace!("{}: edit ignored, input not editable", self.id);
                return false;
            }
            guard.value = value.clone();
            guard.on_change.clone()
        };
        self.dirty.store(true, Ordering::SeqCst);
        if let Some(handler) = handler {
            handler(&value);
        }
        true
    }

    /// Press the clear button.
    ///
    /// Only acts while the clear button is shown. Returns true if accepted.
    pub fn press_clear(&self) -> bool {
        let handler = {
            let Ok(mut guard) = self.inner.write() else {
                return false;
            };
            if !guard.shows_clear() {
                return false;
            }
            guard.value.clear();
            guard.on_clear.clone()
        };
        debug!("{}: cleared", self.id);
        self.dirty.store(true, Ordering::SeqCst);
        if let Some(handler) = handler {
            handler();
        }
        true
    }

    /// Toggle password visibility.
    ///
    /// Only acts while the reveal toggle is shown. Returns the new state.
    pub fn toggle_reveal(&self) -> Option<bool> {
        let mut guard = self.inner.write().ok()?;
        if !guard.shows_reveal() {
            return None;
        }
        guard.revealed = !guard.revealed;
        self.dirty.store(true, Ordering::SeqCst);
        Some(guard.revealed)
    }

    pub fn focus(&self) {
        self.write(|i| i.focused = true);
    }

    pub fn blur(&self) {
        self.write(|i| i.focused = false);
    }

    /// Check if the input needs re-rendering.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for InputField {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for InputField {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputField")
            .field("id", &self.id)
            .field("kind", &self.kind_of())
            .field("has_error", &self.has_error())
            .finish()
    }
}
