#![forbid(unsafe_code)]

//! Display state: the renderable model built from a fit result.

use crate::fit::{FitOptions, FitResult, ITEM_SEPARATOR, OVERFLOW_SUFFIX};
use overbadge_text::StyleClass;

/// The "+N" badge to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeModel {
    /// Number of hidden items the badge summarizes.
    pub count: usize,
    /// Style class the host renders the badge with.
    pub class: StyleClass,
}

/// Renderable output of one relayout pass.
///
/// This is the engine's only observable output: a text node (absent in
/// badge-only mode), an optional badge, and the full-list tooltip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayModel {
    /// Visible item text, or `None` when no text node is rendered.
    pub text: Option<String>,
    /// Badge to render, or `None` when everything fits.
    pub badge: Option<BadgeModel>,
    /// Full original list, exposed as hover text regardless of truncation.
    pub tooltip: String,
}

impl DisplayModel {
    /// Model for a component that has not laid out yet.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            text: Some(String::new()),
            badge: None,
            tooltip: String::new(),
        }
    }

    /// Badge count, or zero when no badge is rendered.
    #[must_use]
    pub fn badge_count(&self) -> usize {
        self.badge.as_ref().map_or(0, |b| b.count)
    }
}

impl Default for DisplayModel {
    fn default() -> Self {
        Self::empty()
    }
}

/// Combine a fit result into the renderable model.
///
/// - Everything visible: the joined text alone; trailing ellipsis on
///   presentational overflow is the host's concern.
/// - Items hidden: the joined survivors plus [`OVERFLOW_SUFFIX`] (an empty
///   survivor set renders as empty text) next to a badge carrying the hidden
///   count, unless badge-only mode suppresses the text node entirely.
/// - The tooltip always carries the full original list.
#[must_use]
pub fn build_display(items: &[String], fit: &FitResult, opts: &FitOptions) -> DisplayModel {
    let tooltip = items.join(ITEM_SEPARATOR);

    if fit.hidden == 0 {
        return DisplayModel {
            text: Some(fit.joined()),
            badge: None,
            tooltip,
        };
    }

    let badge = Some(BadgeModel {
        count: fit.hidden,
        class: opts.badge_class.clone(),
    });

    let text = if opts.only_badge {
        None
    } else {
        let joined = fit.joined();
        if joined.is_empty() {
            Some(String::new())
        } else {
            Some(format!("{joined}{OVERFLOW_SUFFIX}"))
        }
    };

    DisplayModel {
        text,
        badge,
        tooltip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Item {i}")).collect()
    }

    #[test]
    fn full_fit_renders_plain_text_and_no_badge() {
        let items = items(3);
        let fit = FitResult {
            visible: items.clone(),
            hidden: 0,
        };
        let model = build_display(&items, &fit, &FitOptions::default());
        assert_eq!(model.text.as_deref(), Some("Item 0, Item 1, Item 2"));
        assert!(model.badge.is_none());
        assert_eq!(model.badge_count(), 0);
        assert_eq!(model.tooltip, "Item 0, Item 1, Item 2");
    }

    #[test]
    fn truncation_appends_suffix_and_badge() {
        let items = items(4);
        let fit = FitResult {
            visible: items[..2].to_vec(),
            hidden: 2,
        };
        let model = build_display(&items, &fit, &FitOptions::default());
        assert_eq!(model.text.as_deref(), Some("Item 0, Item 1, ..."));
        let badge = model.badge.expect("badge rendered");
        assert_eq!(badge.count, 2);
        assert_eq!(badge.class, StyleClass::default());
    }

    #[test]
    fn all_hidden_renders_empty_text_next_to_badge() {
        let items = items(5);
        let fit = FitResult {
            visible: Vec::new(),
            hidden: 5,
        };
        let model = build_display(&items, &fit, &FitOptions::default());
        assert_eq!(model.text.as_deref(), Some(""));
        assert_eq!(model.badge_count(), 5);
    }

    #[test]
    fn only_badge_suppresses_the_text_node() {
        let items = items(10);
        let fit = FitResult {
            visible: Vec::new(),
            hidden: 10,
        };
        let opts = FitOptions {
            only_badge: true,
            ..FitOptions::default()
        };
        let model = build_display(&items, &fit, &opts);
        assert!(model.text.is_none());
        assert_eq!(model.badge_count(), 10);
    }

    #[test]
    fn custom_badge_class_is_carried_through() {
        let items = items(2);
        let fit = FitResult {
            visible: Vec::new(),
            hidden: 2,
        };
        let opts = FitOptions {
            badge_class: StyleClass::new("test-badge-class"),
            ..FitOptions::default()
        };
        let model = build_display(&items, &fit, &opts);
        assert_eq!(
            model.badge.expect("badge rendered").class.as_str(),
            "test-badge-class"
        );
    }

    #[test]
    fn tooltip_always_lists_every_item() {
        let items = items(3);
        let fit = FitResult {
            visible: items[..1].to_vec(),
            hidden: 2,
        };
        let opts = FitOptions {
            only_badge: true,
            ..FitOptions::default()
        };
        let model = build_display(&items, &fit, &opts);
        assert_eq!(model.tooltip, "Item 0, Item 1, Item 2");
    }

    #[test]
    fn empty_model_has_no_badge() {
        let model = DisplayModel::empty();
        assert_eq!(model.text.as_deref(), Some(""));
        assert!(model.badge.is_none());
        assert!(model.tooltip.is_empty());
    }
}
