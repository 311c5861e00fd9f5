//! Shadow DOM CSS Scoping
//!
//! CSS encapsulation for shadow roots.

/// Scoped stylesheet
#[derive(Debug, Clone, PartialEq)]
pub struct ScopedStyleSheet {
    /// Scope identifier
    pub scope_id: u32,
    /// CSS rules (scoped)
    pub rules: Vec<ScopedRule>,
}

/// Scoped CSS rule
#[derive(Debug, Clone, PartialEq)]
pub struct ScopedRule {
    /// Original selector
    pub selector: String,
    /// Scoped selector (with scope prefix)
    pub scoped_selector: String,
    /// CSS declarations
    pub declarations: Vec<(String, String)>,
}

impl ScopedStyleSheet {
    /// Create a new scoped stylesheet
    pub fn new(scope_id: u32) -> Self {
        Self {
            scope_id,
            rules: Vec::new(),
        }
    }

    /// Add a rule and scope it
    pub fn add_rule(&mut self, selector: &str, declarations: &[(&str, &str)]) {
        let scoped_selector = self.scope_selector(selector);
        self.rules.push(ScopedRule {
            selector: selector.to_string(),
            scoped_selector,
            declarations: declarations
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
    }

    /// Builder form of [`add_rule`](Self::add_rule)
    pub fn rule(mut self, selector: &str, declarations: &[(&str, &str)]) -> Self {
        self.add_rule(selector, declarations);
        self
    }

    /// Scope a selector
    pub fn scope_selector(&self, selector: &str) -> String {
        let selector = selector.trim();
        if selector.starts_with(":host") {
            return self.scope_host_selector(selector);
        }

        if selector.starts_with("::slotted") {
            return selector.to_string();
        }

        format!("[data-scope=\"{}\"] {}", self.scope_id, selector)
    }

    /// Scope :host selector
    ///
    /// Handles `:host`, `:host(<compound>)` and a trailing pseudo part such as
    /// `:host([checked]):after`.
    fn scope_host_selector(&self, selector: &str) -> String {
        let host = format!("[data-host=\"{}\"]", self.scope_id);
        let rest = &selector[":host".len()..];

        if let Some(inner) = rest.strip_prefix('(') {
            if let Some(close) = inner.find(')') {
                let (compound, tail) = (&inner[..close], &inner[close + 1..]);
                return format!("{}{}{}", host, compound, tail);
            }
            return selector.to_string();
        }

        format!("{}{}", host, rest)
    }

    /// Whether any rule targets the host element
    pub fn styles_host(&self) -> bool {
        self.rules.iter().any(|r| r.selector.starts_with(":host"))
    }

    /// Generate adoptable stylesheet
    pub fn to_css(&self) -> String {
        self.rules
            .iter()
            .map(|rule| {
                let decls = rule
                    .declarations
                    .iter()
                    .map(|(k, v)| format!("{}: {};", k, v))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("{} {{ {} }}", rule.scoped_selector, decls)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
