//! Hover Target
//!
//! Tracks which single key is under the pointer.

/// The currently hovered key, if any.
///
/// A leave event only clears the target when it names the key that is
/// currently hovered, so a late leave from the previous row cannot wipe out
/// the enter that already replaced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverTarget<K> {
    current: Option<K>,
}

impl<K> Default for HoverTarget<K> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<K: PartialEq> HoverTarget<K> {
    pub fn enter(&mut self, key: K) {
        self.current = Some(key);
    }

    pub fn leave(&mut self, key: &K) {
        if self.current.as_ref() == Some(key) {
            self.current = None;
        }
    }

    pub fn is_hovered(&self, key: &K) -> bool {
        self.current.as_ref() == Some(key)
    }

    pub fn current(&self) -> Option<&K> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatched_leave_keeps_target() {
        let mut hover = HoverTarget::default();
        hover.enter("a");
        hover.leave(&"b");
        assert_eq!(hover.current(), Some(&"a"));
    }

    #[test]
    fn test_matching_leave_clears() {
        let mut hover = HoverTarget::default();
        hover.enter("a");
        hover.leave(&"a");
        assert_eq!(hover.current(), None);
    }

    #[test]
    fn test_stale_leave_after_new_enter() {
        // enter(a), enter(b), then a's leave arrives late
        let mut hover = HoverTarget::default();
        hover.enter(1u32);
        hover.enter(2u32);
        hover.leave(&1);
        assert!(hover.is_hovered(&2));
        assert!(!hover.is_hovered(&1));
    }
}
