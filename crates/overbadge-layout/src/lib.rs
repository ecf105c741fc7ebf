#![forbid(unsafe_code)]

//! Overflow-fit planning for the overbadge engine.
//!
//! Given an ordered item list, an available pixel width, and a measurement
//! service, [`plan`] decides how many trailing items must be hidden behind a
//! "+N" badge, and [`build_display`] turns that decision into the renderable
//! model the host consumes.
//!
//! # Example
//! ```
//! use overbadge_layout::{build_display, plan, FitOptions};
//! use overbadge_text::{FontSpec, MeasureService, MonospaceFactory};
//!
//! let items: Vec<String> = (0..3).map(|i| format!("Item {i}")).collect();
//! let mut service = MeasureService::new(
//!     MonospaceFactory::default(),
//!     FontSpec::new("monospace", 2.0),
//! );
//!
//! let opts = FitOptions::default();
//! let fit = plan(&items, 1000.0, &opts, &mut service);
//! assert_eq!(fit.hidden, 0);
//!
//! let model = build_display(&items, &fit, &opts);
//! assert_eq!(model.text.as_deref(), Some("Item 0, Item 1, Item 2"));
//! assert!(model.badge.is_none());
//! ```

pub mod display;
pub mod fit;

pub use display::{BadgeModel, DisplayModel, build_display};
pub use fit::{
    FitOptions, FitResult, ITEM_SEPARATOR, OVERFLOW_SUFFIX, default_min_width, plan,
};
