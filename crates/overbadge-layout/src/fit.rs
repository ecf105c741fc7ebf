#![forbid(unsafe_code)]

//! The fit planner: greedy trailing eviction against a width budget.
//!
//! The planner makes one pass over the item list, measuring the comma-joined
//! candidate text and popping the tail whenever the text overruns the width
//! left after reserving badge space. The pass runs exactly once per item,
//! never to a fixed point; the candidate set only ever shrinks from the tail,
//! so items keep their original order and the leading item survives whenever
//! anything does.

use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;

use overbadge_text::{MeasureService, StyleClass, SurfaceFactory};

/// Separator between rendered items.
pub const ITEM_SEPARATOR: &str = ", ";

/// Suffix appended to truncated text in the rendered model.
pub const OVERFLOW_SUFFIX: &str = ", ...";

// Marker measured during the fit pass. One dot wider than the rendered
// suffix, so an item disappears slightly before it would touch the badge.
const EVICTION_PROBE: &str = ", .....";

/// Caller-tunable fit policy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FitOptions {
    /// Always hide all text and show only the badge.
    pub only_badge: bool,
    /// Minimum pixel width worth showing text in; measured sample if unset.
    pub min_width: Option<f64>,
    /// Style class the badge is measured (and rendered) with.
    pub badge_class: StyleClass,
}

/// Outcome of a fit pass.
///
/// Invariants: `visible.len() + hidden` equals the input length, and
/// `hidden == 0` exactly when every item is visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FitResult {
    /// Items that fit, in original order.
    pub visible: Vec<String>,
    /// Number of trailing items hidden behind the badge.
    pub hidden: usize,
}

impl FitResult {
    /// The visible items joined for display.
    #[must_use]
    pub fn joined(&self) -> String {
        self.visible.join(ITEM_SEPARATOR)
    }

    /// True when nothing was hidden.
    #[must_use]
    pub fn all_visible(&self) -> bool {
        self.hidden == 0
    }
}

/// Minimum width below which no text is shown, derived from a short sample.
///
/// The sample is the first two graphemes of the leading item plus `", ..."`
/// for multi-item lists, or the first three graphemes plus `"..."` for a
/// single item. An empty list has no sample and yields zero.
pub fn default_min_width<F: SurfaceFactory>(
    items: &[String],
    service: &mut MeasureService<F>,
) -> f64 {
    match items {
        [] => 0.0,
        [only] => {
            let sample = format!("{}...", grapheme_prefix(only, 3));
            service.measure_text(&sample)
        }
        [first, ..] => {
            let sample = format!("{}{OVERFLOW_SUFFIX}", grapheme_prefix(first, 2));
            service.measure_text(&sample)
        }
    }
}

/// Decide the visible/hidden split for `items` in `available_width` pixels.
///
/// Policy, in order:
/// 1. An empty list yields an empty, badge-less result.
/// 2. The effective minimum width is the caller override or the measured
///    sample from [`default_min_width`].
/// 3. Badge space is reserved only for multi-item lists.
/// 4. If `only_badge` is set, or less than the minimum width remains after
///    the badge reservation, all text is hidden. This is the only path that
///    can badge a single-item list.
/// 5. Otherwise a multi-item list goes through the single eviction pass:
///    while the candidate tail is still the true final item the text is
///    measured bare with no badge reservation (a last item that fits is
///    never followed by a badge); once the tail has been evicted below the
///    final item the candidate text is measured with the continuation
///    marker appended and the full badge width reserved. An overrun evicts
///    the candidate tail unless only one candidate remains.
pub fn plan<F: SurfaceFactory>(
    items: &[String],
    available_width: f64,
    opts: &FitOptions,
    service: &mut MeasureService<F>,
) -> FitResult {
    if items.is_empty() {
        return FitResult::default();
    }

    let min_width = opts
        .min_width
        .unwrap_or_else(|| default_min_width(items, service));

    let badge_width = if items.len() == 1 {
        0.0
    } else {
        service.badge_width(&opts.badge_class)
    };

    if opts.only_badge || (available_width - badge_width) < min_width {
        return FitResult {
            visible: Vec::new(),
            hidden: items.len(),
        };
    }

    let mut candidates: SmallVec<[&str; 8]> = items.iter().map(String::as_str).collect();
    let mut hidden = 0_usize;

    if items.len() > 1 {
        let badge_width = service.badge_width(&opts.badge_class);
        let final_item = items.last().map(String::as_str);

        for _ in 0..items.len() {
            let is_last = candidates.last().copied() == final_item;
            let joined = candidates.join(ITEM_SEPARATOR);

            let (measured, reserved) = if is_last {
                (service.measure_text(&joined), 0.0)
            } else {
                let probe = format!("{joined}{EVICTION_PROBE}");
                (service.measure_text(&probe), badge_width)
            };

            if measured > available_width - reserved && candidates.len() > 1 {
                candidates.pop();
                hidden += 1;
            }
        }
    }

    debug_assert_eq!(candidates.len() + hidden, items.len());

    FitResult {
        visible: candidates.iter().map(|s| (*s).to_string()).collect(),
        hidden,
    }
}

/// Prefix of `s` holding at most `n` grapheme clusters.
fn grapheme_prefix(s: &str, n: usize) -> &str {
    match s.grapheme_indices(true).nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
