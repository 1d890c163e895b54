//! Detached elements handed back to callers by removal operations

/// An element removed from a queue
///
/// Ownership of the value moves to the caller on removal. Dropping the
/// element (or calling [`Element::release`]) frees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    value: String,
}

impl Element {
    pub(crate) fn new(value: String) -> Self {
        Self { value }
    }

    /// The stored value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Take the stored value, consuming the element
    pub fn into_value(self) -> String {
        self.value
    }

    /// Release the element and its value
    pub fn release(self) {}
}

/// Copy `value` into a caller-supplied byte buffer, NUL-terminated
///
/// At most `out.len() - 1` bytes of the value are copied; longer values are
/// truncated silently. An empty buffer receives nothing. Returns the number
/// of value bytes copied, not counting the terminator.
pub fn copy_value_into(value: &str, out: &mut [u8]) -> usize {
    let Some(capacity) = out.len().checked_sub(1) else {
        return 0;
    };

    let bytes = value.as_bytes();
    let copied = bytes.len().min(capacity);
    out[..copied].copy_from_slice(&bytes[..copied]);
    out[copied] = 0;
    copied
}
