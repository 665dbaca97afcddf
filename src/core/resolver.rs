//! Color Resolution
//!
//! Collapses a previously active attribute list and a newly applied one into
//! the single foreground/background pair a terminal would display.
//!
//! Resolution runs two passes over a small `(fg, bg, bold)` state machine:
//!
//! 1. `previous`, in the order given. Colors are taken raw, bright colors
//!    turn bold on, and the default-color codes are inert.
//! 2. `current`, in ascending numeric order. A standard color seen while bold
//!    is on is promoted to its high-intensity code, and the default-color
//!    codes reset their channel.
//!
//! Promotion never reaches back across passes: a standard color from
//! `previous` stays standard even if `current` turns bold on.

use serde::{Deserialize, Serialize};

use super::attribute::{Attribute, AttributeKind, AttributeList};

/// The foreground and background a terminal ends up displaying
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedStyle {
    pub fg: Attribute,
    pub bg: Attribute,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self {
            fg: Attribute::FG_DEFAULT,
            bg: Attribute::BG_DEFAULT,
        }
    }
}

impl ResolvedStyle {
    pub fn new(fg: Attribute, bg: Attribute) -> Self {
        Self { fg, bg }
    }

    /// `[fg, bg]` as an attribute list
    pub fn to_list(self) -> AttributeList {
        AttributeList::from(vec![self.fg, self.bg])
    }

    /// SGR sequence selecting exactly this pair
    pub fn to_ansi(self) -> String {
        crate::sequence::set(&[self.fg, self.bg])
    }
}

/// What to do with codes outside every known category.
///
/// The resolver never fails; `Reject` is enforced by callers through
/// [`AttributeList::validate`] before resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownCodePolicy {
    /// Skip silently (trace-level event only)
    #[default]
    Ignore,
    /// Skip and emit a warning
    Warn,
    /// Refuse input containing unknown codes
    Reject,
}

/// Two-pass color resolver
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver {
    policy: UnknownCodePolicy,
}

impl Resolver {
    pub fn new(policy: UnknownCodePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> UnknownCodePolicy {
        self.policy
    }

    /// Resolve without touching either input; `current` is scanned through a
    /// sorted copy.
    pub fn resolve(&self, previous: &[Attribute], current: &[Attribute]) -> ResolvedStyle {
        let mut sorted = current.to_vec();
        sorted.sort_unstable();
        self.resolve_sorted(previous, &sorted)
    }

    /// Resolve, leaving `current` sorted ascending afterwards
    pub fn resolve_in_place(
        &self,
        previous: &[Attribute],
        current: &mut AttributeList,
    ) -> ResolvedStyle {
        current.sort();
        self.resolve_sorted(previous, current)
    }

    fn resolve_sorted(&self, previous: &[Attribute], current: &[Attribute]) -> ResolvedStyle {
        let mut state = ColorState::default();
        for &attr in previous {
            if !state.apply_previous(attr) {
                self.skipped(attr, "previous");
            }
        }
        for &attr in current {
            if !state.apply_current(attr) {
                self.skipped(attr, "current");
            }
        }
        state.style
    }

    fn skipped(&self, attr: Attribute, pass: &'static str) {
        if attr.is_recognized() {
            tracing::trace!(code = attr.0, pass, "attribute has no effect on color");
            return;
        }
        match self.policy {
            UnknownCodePolicy::Warn => {
                tracing::warn!(code = attr.0, pass, "ignoring unrecognized attribute code");
            }
            UnknownCodePolicy::Ignore | UnknownCodePolicy::Reject => {
                tracing::trace!(code = attr.0, pass, "ignoring unrecognized attribute code");
            }
        }
    }
}

/// Running state threaded through both passes
#[derive(Debug, Default)]
struct ColorState {
    style: ResolvedStyle,
    bold: bool,
}

impl ColorState {
    /// Baseline pass. Returns false when the code left the state untouched.
    fn apply_previous(&mut self, attr: Attribute) -> bool {
        match attr.kind() {
            AttributeKind::Bold => self.bold = true,
            AttributeKind::Foreground => self.style.fg = attr,
            AttributeKind::Background => self.style.bg = attr,
            AttributeKind::ForegroundBright => {
                self.bold = true;
                self.style.fg = attr;
            }
            AttributeKind::BackgroundBright => {
                self.bold = true;
                self.style.bg = attr;
            }
            AttributeKind::Reset
            | AttributeKind::StyleFlag
            | AttributeKind::ForegroundDefault
            | AttributeKind::BackgroundDefault
            | AttributeKind::Unrecognized => return false,
        }
        true
    }

    /// Promoting pass. Returns false when the code left the state untouched.
    fn apply_current(&mut self, attr: Attribute) -> bool {
        match attr.kind() {
            AttributeKind::Bold => self.bold = true,
            AttributeKind::Foreground => self.style.fg = self.promote(attr),
            AttributeKind::Background => self.style.bg = self.promote(attr),
            AttributeKind::ForegroundBright | AttributeKind::ForegroundDefault => {
                self.style.fg = attr;
            }
            AttributeKind::BackgroundBright | AttributeKind::BackgroundDefault => {
                self.style.bg = attr;
            }
            AttributeKind::Reset | AttributeKind::StyleFlag | AttributeKind::Unrecognized => {
                return false
            }
        }
        true
    }

    fn promote(&self, attr: Attribute) -> Attribute {
        if self.bold {
            attr.brighten()
        } else {
            attr
        }
    }
}

/// Resolve `previous` then `current` with the default resolver
pub fn resolve_colors(previous: &[Attribute], current: &[Attribute]) -> ResolvedStyle {
    Resolver::default().resolve(previous, current)
}

impl AttributeList {
    /// Consolidate this list (as the newly applied attributes) on top of
    /// `previous`. Sorts `self` in place.
    pub fn consolidate_colors(&mut self, previous: &[Attribute]) -> ResolvedStyle {
        Resolver::default().resolve_in_place(previous, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(previous: &[Attribute], current: &[Attribute]) -> (Attribute, Attribute) {
        let style = resolve_colors(previous, current);
        (style.fg, style.bg)
    }

    #[test]
    fn test_empty_lists_resolve_to_defaults() {
        assert_eq!(
            resolve(&[], &[]),
            (Attribute::FG_DEFAULT, Attribute::BG_DEFAULT)
        );
        assert_eq!(resolve_colors(&[], &[]), ResolvedStyle::default());
    }

    #[test]
    fn test_bold_promotes_current_foreground() {
        let (fg, bg) = resolve(&[], &[Attribute::BOLD, Attribute::FG_RED]);
        assert_eq!(fg, Attribute::FG_HI_RED);
        assert_eq!(bg, Attribute::BG_DEFAULT);
    }

    #[test]
    fn test_bold_after_color_still_promotes() {
        // Sorting puts Bold (1) before FgRed (31)
        let (fg, _) = resolve(&[], &[Attribute::FG_RED, Attribute::BOLD]);
        assert_eq!(fg, Attribute::FG_HI_RED);
    }

    #[test]
    fn test_bold_promotes_current_background() {
        let (_, bg) = resolve(&[], &[Attribute::BG_BLUE, Attribute::BOLD]);
        assert_eq!(bg, Attribute::BG_HI_BLUE);
    }

    #[test]
    fn test_bold_from_previous_promotes_current() {
        let (fg, bg) = resolve(&[Attribute::BOLD], &[Attribute::FG_GREEN, Attribute::BG_BLACK]);
        assert_eq!(fg, Attribute::FG_HI_GREEN);
        assert_eq!(bg, Attribute::BG_HI_BLACK);
    }

    #[test]
    fn test_bright_previous_turns_bold_on() {
        let (fg, bg) = resolve(&[Attribute::FG_HI_CYAN], &[Attribute::BG_RED]);
        assert_eq!(fg, Attribute::FG_HI_CYAN);
        assert_eq!(bg, Attribute::BG_HI_RED);
    }

    #[test]
    fn test_previous_pass_never_promotes() {
        let (fg, bg) = resolve(&[Attribute::BOLD, Attribute::FG_RED, Attribute::BG_GREEN], &[]);
        assert_eq!(fg, Attribute::FG_RED);
        assert_eq!(bg, Attribute::BG_GREEN);
    }

    #[test]
    fn test_promotion_does_not_reach_back_into_previous() {
        let (fg, bg) = resolve(&[Attribute::FG_BLUE], &[Attribute::BOLD]);
        assert_eq!(fg, Attribute::FG_BLUE);
        assert_eq!(bg, Attribute::BG_DEFAULT);
    }

    #[test]
    fn test_default_in_current_overrides_bold_color() {
        let (fg, bg) = resolve(
            &[Attribute::FG_HI_RED, Attribute::BG_HI_RED],
            &[Attribute::BOLD, Attribute::FG_DEFAULT, Attribute::BG_DEFAULT],
        );
        assert_eq!(fg, Attribute::FG_DEFAULT);
        assert_eq!(bg, Attribute::BG_DEFAULT);
    }

    #[test]
    fn test_default_in_previous_is_inert() {
        let (fg, bg) = resolve(
            &[Attribute::FG_RED, Attribute::FG_DEFAULT, Attribute::BG_RED, Attribute::BG_DEFAULT],
            &[],
        );
        assert_eq!(fg, Attribute::FG_RED);
        assert_eq!(bg, Attribute::BG_RED);
    }

    #[test]
    fn test_bright_current_is_not_promoted_again() {
        let (fg, _) = resolve(&[Attribute::BOLD], &[Attribute::FG_HI_GREEN]);
        assert_eq!(fg, Attribute::FG_HI_GREEN);

        let again = resolve_colors(&[], &[Attribute::BOLD, fg]);
        assert_eq!(again.fg, Attribute::FG_HI_GREEN);
    }

    #[test]
    fn test_highest_code_wins_after_sort() {
        // Given order is irrelevant for `current`; 36 sorts after 31
        let (fg, _) = resolve(&[], &[Attribute::FG_CYAN, Attribute::FG_RED]);
        assert_eq!(fg, Attribute::FG_CYAN);

        // Bright 91 sorts after the default 39
        let (fg, _) = resolve(&[], &[Attribute::FG_HI_RED, Attribute::FG_DEFAULT]);
        assert_eq!(fg, Attribute::FG_HI_RED);
    }

    #[test]
    fn test_last_wins_in_previous_order() {
        let (fg, _) = resolve(&[Attribute::FG_CYAN, Attribute::FG_RED], &[]);
        assert_eq!(fg, Attribute::FG_RED);
    }

    #[test]
    fn test_unrecognized_codes_are_inert() {
        let noise = [Attribute(10), Attribute(38), Attribute(48), Attribute(200)];
        assert_eq!(resolve_colors(&noise, &noise), ResolvedStyle::default());

        let warn = Resolver::new(UnknownCodePolicy::Warn);
        let style = warn.resolve(&[Attribute(38), Attribute::FG_RED], &[Attribute(255)]);
        assert_eq!(style.fg, Attribute::FG_RED);
    }

    #[test]
    fn test_style_flags_and_reset_are_inert() {
        let flags: Vec<Attribute> = (2..=9).map(Attribute).chain([Attribute::RESET]).collect();
        assert_eq!(
            resolve_colors(&flags, &[Attribute::FG_RED]).fg,
            Attribute::FG_RED
        );
    }

    #[test]
    fn test_resolve_leaves_inputs_untouched() {
        let current = vec![Attribute::FG_RED, Attribute::BOLD];
        let _ = resolve_colors(&[], &current);
        assert_eq!(current, vec![Attribute::FG_RED, Attribute::BOLD]);
    }

    #[test]
    fn test_consolidate_sorts_in_place() {
        let mut current = AttributeList::from(vec![Attribute::FG_RED, Attribute::BOLD]);
        let style = current.consolidate_colors(&[]);
        assert_eq!(style.fg, Attribute::FG_HI_RED);
        assert_eq!(current.as_slice(), &[Attribute::BOLD, Attribute::FG_RED]);
    }

    #[test]
    fn test_resolved_style_renders() {
        let style = ResolvedStyle::new(Attribute::FG_HI_RED, Attribute::BG_BLUE);
        assert_eq!(style.to_ansi(), "\x1b[91;44m");
        assert_eq!(
            style.to_list().as_slice(),
            &[Attribute::FG_HI_RED, Attribute::BG_BLUE]
        );
    }

    #[test]
    fn test_policy_serialization() {
        assert_eq!(
            serde_json::to_string(&UnknownCodePolicy::Warn).unwrap(),
            "\"warn\""
        );
        let policy: UnknownCodePolicy = serde_json::from_str("\"reject\"").unwrap();
        assert_eq!(policy, UnknownCodePolicy::Reject);
    }
}
