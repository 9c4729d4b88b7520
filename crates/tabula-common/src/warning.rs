//! Deduplicated warnings.
//!
//! Some limitations (for example void elements rendered with an explicit
//! closing tag) would otherwise be reported once per node. Warnings go
//! through the `log` facade at `warn` level, once per unique message.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a known limitation (emitted once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("render", "void element <br> rendered with a closing tag");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_emit = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_emit {
        log::warn!(target: component, "{message}");
    }
}

/// Returns true if this exact warning has already been emitted.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    guard.as_ref().is_some_and(|set| set.contains(&key))
}

/// Clear all recorded warnings (call before rendering an unrelated document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_once_records_message() {
        warn_once("test", "first message");
        assert!(was_warned("test", "first message"));
        assert!(!was_warned("test", "never sent"));
    }

    #[test]
    fn test_components_are_separate_keys() {
        warn_once("alpha", "shared text");
        assert!(was_warned("alpha", "shared text"));
        assert!(!was_warned("beta", "shared text"));
    }
}
