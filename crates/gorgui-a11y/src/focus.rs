//! Focus Management
//!
//! Keyboard navigation and focus handling.

/// Focus manager
#[derive(Debug, Clone)]
pub struct FocusManager<K> {
    focused: Option<K>,
    focus_order: Vec<K>,
}

impl<K> Default for FocusManager<K> {
    fn default() -> Self {
        Self {
            focused: None,
            focus_order: Vec::new(),
        }
    }
}

impl<K: Copy + PartialEq> FocusManager<K> {
    pub fn new() -> Self { Self::default() }

    /// Set focus order
    pub fn set_focus_order(&mut self, order: Vec<K>) {
        self.focus_order = order;
    }

    /// Current sequential focus order
    pub fn focus_order(&self) -> &[K] {
        &self.focus_order
    }

    /// Focus element
    ///
    /// With a non-empty focus order, only members of the order can take focus.
    pub fn focus(&mut self, id: K) -> bool {
        if self.focus_order.is_empty() || self.focus_order.contains(&id) {
            self.focused = Some(id);
            true
        } else {
            false
        }
    }

    /// Get focused element
    pub fn focused(&self) -> Option<K> {
        self.focused
    }

    /// Focus next element
    pub fn focus_next(&mut self) -> Option<K> {
        let len = self.focus_order.len();
        if len == 0 {
            return self.focused;
        }

        let next = match self.position() {
            Some(p) => self.focus_order[(p + 1) % len],
            None => self.focus_order[0],
        };

        self.focused = Some(next);
        self.focused
    }

    /// Focus previous element
    pub fn focus_prev(&mut self) -> Option<K> {
        let len = self.focus_order.len();
        if len == 0 {
            return self.focused;
        }

        let prev = match self.position() {
            Some(p) => self.focus_order[(p + len - 1) % len],
            None => self.focus_order[len - 1],
        };

        self.focused = Some(prev);
        self.focused
    }

    /// Blur current focus
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Blur only if `id` holds focus
    pub fn blur_if(&mut self, id: K) -> bool {
        if self.focused == Some(id) {
            self.focused = None;
            true
        } else {
            false
        }
    }

    fn position(&self) -> Option<usize> {
        let current = self.focused?;
        self.focus_order.iter().position(|&id| id == current)
    }
}

/// Tab index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIndex {
    NotFocusable,       // tabindex="-1", absent, or malformed
    Sequential(i32),    // tabindex="0" or positive
}

impl TabIndex {
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<i32>() {
            Ok(n) if n < 0 => Self::NotFocusable,
            Ok(n) => Self::Sequential(n),
            Err(_) => Self::NotFocusable,
        }
    }

    /// Tab index of an element given its optional `tabindex` attribute
    pub fn from_attribute(value: Option<&str>) -> Self {
        value.map(Self::parse).unwrap_or(Self::NotFocusable)
    }

    pub fn is_focusable(&self) -> bool {
        matches!(self, Self::Sequential(_))
    }
}
