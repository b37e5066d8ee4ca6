//! deltachart core
//!
//! This crate provides the foundational primitives shared by the deltachart crates:
//!
//! - **Data model**: data points, series, time ranges, and Y-axis scaling modes
//! - **Errors**: a single error enum for model validation
//! - **Event dispatch**: observer lists that publish selection and scaling changes
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use deltachart_core::{ChartEvent, EventDispatcher, TimeRange};
//! use deltachart_core::events::event_types;
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//!
//! let mut dispatcher = EventDispatcher::new();
//! dispatcher.register(event_types::RANGE_SELECTED, move |event| {
//!     if let ChartEvent::RangeSelected(range) = event {
//!         sink.lock().unwrap().push(*range);
//!     }
//! });
//!
//! dispatcher.dispatch(&ChartEvent::RangeSelected(TimeRange::new(4.0, 1.0)));
//! assert_eq!(seen.lock().unwrap()[0], TimeRange::new(1.0, 4.0));
//! ```

pub mod error;
pub mod events;
pub mod model;

pub use error::{Error, Result};
pub use events::{ChartEvent, EventDispatcher, EventType};
pub use model::{DataPoint, ScalingMode, Series, TimeRange, YExtent};
