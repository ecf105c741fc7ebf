#![forbid(unsafe_code)]

//! The overflow-badge component: configuration, change detection, relayout.
//!
//! One [`OverflowBadge`] owns everything a single container needs: its
//! measurement service, its resize monitor, and the last rendered
//! [`DisplayModel`]. Hosts drive it from their own loop:
//!
//! 1. forward raw size-change notifications to [`OverflowBadge::on_resize`];
//! 2. call [`OverflowBadge::pump`] each tick with the live container;
//! 3. render [`OverflowBadge::display`] whenever `pump` reports a relayout.
//!
//! Recomputation is explicit change detection, not framework reactivity: a
//! pass runs only when the settled width, font, item list, badge class,
//! minimum width, or badge-only flag differs from the last applied inputs.

use std::time::{Duration, Instant};

use overbadge_layout::{DisplayModel, FitOptions, build_display, plan};
use overbadge_text::{FontSpec, MeasureService, StyleClass, SurfaceFactory};

use crate::debounce::DEFAULT_DEBOUNCE;
use crate::monitor::ResizeMonitor;

/// Read-only view of the hosting container.
///
/// Both accessors return `None` until the container is mounted; a relayout
/// pass against an unmounted container is skipped, never an error.
pub trait Container {
    /// Content-box width in pixels (excluding padding).
    fn content_width(&self) -> Option<f64>;

    /// Font currently applied to the container.
    fn font(&self) -> Option<FontSpec>;
}

/// A container with fixed width and font, for hosts and tests that manage
/// geometry themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedContainer {
    /// Content-box width, `None` while unmounted.
    pub width: Option<f64>,
    /// Container font, `None` while unmounted.
    pub font: Option<FontSpec>,
}

impl FixedContainer {
    /// A mounted container.
    #[must_use]
    pub fn mounted(width: f64, font: FontSpec) -> Self {
        Self {
            width: Some(width),
            font: Some(font),
        }
    }

    /// A container that has not mounted yet.
    #[must_use]
    pub fn unmounted() -> Self {
        Self {
            width: None,
            font: None,
        }
    }
}

impl Container for FixedContainer {
    fn content_width(&self) -> Option<f64> {
        self.width
    }

    fn font(&self) -> Option<FontSpec> {
        self.font.clone()
    }
}

/// Component configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeConfig {
    /// Items to display, in order; trailing items are hidden first.
    pub items: Vec<String>,
    /// Style class for the badge.
    pub badge_class: StyleClass,
    /// Minimum pixel width worth showing text in; measured sample if unset.
    pub min_width: Option<f64>,
    /// Always show only the badge, never text.
    pub only_badge: bool,
    /// Quiet period for resize debouncing.
    pub resize_debounce: Duration,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            badge_class: StyleClass::default(),
            min_width: None,
            only_badge: false,
            resize_debounce: DEFAULT_DEBOUNCE,
        }
    }
}

impl BadgeConfig {
    /// Configuration with the given items and defaults everywhere else.
    #[must_use]
    pub fn new(items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the badge style class.
    #[must_use]
    pub fn with_badge_class(mut self, class: impl Into<StyleClass>) -> Self {
        self.badge_class = class.into();
        self
    }

    /// Override the minimum text width.
    #[must_use]
    pub fn with_min_width(mut self, min_width: f64) -> Self {
        self.min_width = Some(min_width);
        self
    }

    /// Enable or disable badge-only mode.
    #[must_use]
    pub fn only_badge(mut self, only_badge: bool) -> Self {
        self.only_badge = only_badge;
        self
    }

    /// Set the resize debounce quiet period.
    #[must_use]
    pub fn with_resize_debounce(mut self, delay: Duration) -> Self {
        self.resize_debounce = delay;
        self
    }
}

/// Inputs the last relayout pass was computed from.
///
/// The next pass runs only when the current inputs differ.
#[derive(Debug, Clone, PartialEq)]
struct LayoutInputs {
    width: f64,
    font: FontSpec,
    items: Vec<String>,
    badge_class: StyleClass,
    min_width: Option<f64>,
    only_badge: bool,
}

/// The overflow-badge component.
#[derive(Debug)]
pub struct OverflowBadge<F: SurfaceFactory> {
    config: BadgeConfig,
    service: MeasureService<F>,
    monitor: ResizeMonitor,
    /// Last debounced width; gates resize-driven recomputation.
    settled_width: Option<f64>,
    last_inputs: Option<LayoutInputs>,
    model: DisplayModel,
    disposed: bool,
}

impl<F: SurfaceFactory> OverflowBadge<F> {
    /// Create a component over the host's surface factory.
    #[must_use]
    pub fn new(factory: F, config: BadgeConfig) -> Self {
        let monitor = ResizeMonitor::new(config.resize_debounce);
        Self {
            service: MeasureService::new(factory, FontSpec::default()),
            monitor,
            config,
            settled_width: None,
            last_inputs: None,
            model: DisplayModel::empty(),
            disposed: false,
        }
    }

    /// Forward a raw container size-change notification.
    pub fn on_resize(&mut self, width: f64, now: Instant) {
        if self.disposed {
            return;
        }
        self.monitor.notify(width, now);
    }

    /// Run one cooperative tick; returns `true` when a relayout was applied.
    ///
    /// Applies the debounced width if one settled, then re-runs the fit pass
    /// when any input changed since the last applied pass. An unmounted
    /// container skips the pass entirely.
    pub fn pump<C: Container>(&mut self, container: &C, now: Instant) -> bool {
        if self.disposed {
            return false;
        }

        if let Some(width) = self.monitor.poll(now) {
            self.settled_width = Some(width);
        }

        let Some(live_width) = container.content_width() else {
            return false;
        };
        let Some(font) = container.font() else {
            return false;
        };

        // Resize-driven recomputation is gated on the settled width, but the
        // pass itself always measures against the freshly read container.
        let gate_width = self.settled_width.unwrap_or(live_width);

        let unchanged = self.last_inputs.as_ref().is_some_and(|prev| {
            prev.width == gate_width
                && prev.font == font
                && prev.items == self.config.items
                && prev.badge_class == self.config.badge_class
                && prev.min_width == self.config.min_width
                && prev.only_badge == self.config.only_badge
        });
        if unchanged {
            return false;
        }

        let inputs = LayoutInputs {
            width: gate_width,
            font,
            items: self.config.items.clone(),
            badge_class: self.config.badge_class.clone(),
            min_width: self.config.min_width,
            only_badge: self.config.only_badge,
        };
        self.relayout(live_width, inputs);
        true
    }

    fn relayout(&mut self, live_width: f64, inputs: LayoutInputs) {
        self.service.apply_font(&inputs.font);

        let opts = FitOptions {
            only_badge: inputs.only_badge,
            min_width: inputs.min_width,
            badge_class: inputs.badge_class.clone(),
        };
        let fit = plan(&inputs.items, live_width, &opts, &mut self.service);

        tracing::debug!(
            width = live_width,
            visible = fit.visible.len(),
            hidden = fit.hidden,
            "relayout applied"
        );

        self.model = build_display(&inputs.items, &fit, &opts);
        self.settled_width = Some(inputs.width);
        self.last_inputs = Some(inputs);
    }

    /// Replace the item list.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = impl Into<String>>) {
        self.config.items = items.into_iter().map(Into::into).collect();
    }

    /// Replace the badge style class.
    pub fn set_badge_class(&mut self, class: impl Into<StyleClass>) {
        self.config.badge_class = class.into();
    }

    /// Override or clear the minimum text width.
    pub fn set_min_width(&mut self, min_width: Option<f64>) {
        self.config.min_width = min_width;
    }

    /// Enable or disable badge-only mode.
    pub fn set_only_badge(&mut self, only_badge: bool) {
        self.config.only_badge = only_badge;
    }

    /// Change the resize debounce quiet period.
    ///
    /// Re-creates the monitor, dropping any pending notification.
    pub fn set_resize_debounce(&mut self, delay: Duration) {
        self.config.resize_debounce = delay;
        if !self.disposed {
            self.monitor = ResizeMonitor::new(delay);
        }
    }

    /// The current renderable model.
    #[must_use]
    pub fn display(&self) -> &DisplayModel {
        &self.model
    }

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> &BadgeConfig {
        &self.config
    }

    /// Tear the component down.
    ///
    /// Disconnects the monitor; notifications and pumps after disposal are
    /// no-ops, so a late callback can never touch a dead component.
    pub fn dispose(&mut self) {
        self.monitor.disconnect();
        self.disposed = true;
    }

    /// True once [`dispose`](Self::dispose) has run.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use overbadge_text::MonospaceFactory;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn unit_font() -> FontSpec {
        FontSpec::new("monospace", 2.0)
    }

    fn component(items: &[&str]) -> OverflowBadge<MonospaceFactory> {
        OverflowBadge::new(
            MonospaceFactory::with_badge_chrome(16.0),
            BadgeConfig::new(items.iter().copied()).with_resize_debounce(ms(2)),
        )
    }

    #[test]
    fn first_pump_lays_out() {
        let mut badge = component(&["Item 0", "Item 1"]);
        let container = FixedContainer::mounted(1000.0, unit_font());

        assert!(badge.pump(&container, Instant::now()));
        assert_eq!(badge.display().text.as_deref(), Some("Item 0, Item 1"));
        assert!(badge.display().badge.is_none());
    }

    #[test]
    fn unmounted_container_skips_the_pass() {
        let mut badge = component(&["Item 0"]);
        let container = FixedContainer::unmounted();

        assert!(!badge.pump(&container, Instant::now()));
        assert_eq!(badge.display(), &DisplayModel::empty());
    }

    #[test]
    fn repeated_pump_with_same_inputs_is_a_noop() {
        let mut badge = component(&["Item 0", "Item 1"]);
        let container = FixedContainer::mounted(1000.0, unit_font());
        let t0 = Instant::now();

        assert!(badge.pump(&container, t0));
        assert!(!badge.pump(&container, t0 + ms(1)));
    }

    #[test]
    fn container_width_changes_wait_for_the_debouncer() {
        let mut badge = component(&["Item 0", "Item 1", "Item 2", "Item 3"]);
        let mut container = FixedContainer::mounted(1000.0, unit_font());
        let t0 = Instant::now();

        assert!(badge.pump(&container, t0));
        assert_eq!(badge.display().badge_count(), 0);

        // The container shrank but no notification settled yet: no relayout.
        container.width = Some(0.0);
        assert!(!badge.pump(&container, t0 + ms(1)));

        // Raw events arrive; the pass runs only after the quiet period.
        badge.on_resize(0.0, t0 + ms(1));
        assert!(!badge.pump(&container, t0 + ms(2)));
        assert!(badge.pump(&container, t0 + ms(4)));
        assert_eq!(badge.display().badge_count(), 4);
    }

    #[test]
    fn item_changes_apply_without_a_resize() {
        let mut badge = component(&["Item 0"]);
        let container = FixedContainer::mounted(1000.0, unit_font());
        let t0 = Instant::now();

        badge.pump(&container, t0);
        badge.set_items(["Item 0", "Item 1", "Item 2"]);

        assert!(badge.pump(&container, t0 + ms(1)));
        assert_eq!(
            badge.display().text.as_deref(),
            Some("Item 0, Item 1, Item 2")
        );
    }

    #[test]
    fn font_changes_trigger_a_pass() {
        let mut badge = component(&["Item 0", "Item 1"]);
        let mut container = FixedContainer::mounted(30.0, unit_font());
        let t0 = Instant::now();

        badge.pump(&container, t0);
        assert_eq!(badge.display().badge_count(), 0);

        // Four times the font: the same text no longer fits.
        container.font = Some(FontSpec::new("monospace", 8.0));
        assert!(badge.pump(&container, t0 + ms(1)));
        assert!(badge.display().badge_count() > 0);
    }

    #[test]
    fn only_badge_mode_hides_the_text_node() {
        let mut badge = component(&["Item 0", "Item 1"]);
        let container = FixedContainer::mounted(1000.0, unit_font());
        let t0 = Instant::now();

        badge.pump(&container, t0);
        badge.set_only_badge(true);
        assert!(badge.pump(&container, t0 + ms(1)));

        assert!(badge.display().text.is_none());
        assert_eq!(badge.display().badge_count(), 2);
    }

    #[test]
    fn tooltip_carries_the_full_list() {
        let mut badge = component(&["Item 0", "Item 1", "Item 2"]);
        let container = FixedContainer::mounted(0.0, unit_font());

        badge.pump(&container, Instant::now());
        assert_eq!(badge.display().tooltip, "Item 0, Item 1, Item 2");
    }

    #[test]
    fn dispose_drops_all_further_work() {
        let mut badge = component(&["Item 0", "Item 1"]);
        let container = FixedContainer::mounted(1000.0, unit_font());
        let t0 = Instant::now();

        badge.pump(&container, t0);
        badge.dispose();
        assert!(badge.is_disposed());

        badge.on_resize(0.0, t0 + ms(1));
        badge.set_items(["changed"]);
        assert!(!badge.pump(&container, t0 + ms(10)));
        // Model frozen at the pre-disposal state.
        assert_eq!(badge.display().text.as_deref(), Some("Item 0, Item 1"));
    }

    #[test]
    fn set_resize_debounce_rearms_the_monitor() {
        let mut badge = component(&["Item 0", "Item 1"]);
        let container = FixedContainer::mounted(1000.0, unit_font());
        let t0 = Instant::now();

        badge.pump(&container, t0);
        badge.set_resize_debounce(ms(50));
        assert_eq!(badge.config().resize_debounce, ms(50));

        badge.on_resize(500.0, t0 + ms(1));
        assert!(!badge.pump(&container, t0 + ms(10)));
    }
}
