//! Sky Schedule Library
//!
//! Turns the Sky Sports weekly listings into classified events and email digests

pub mod types;
pub mod classifier;
pub mod dates;
pub mod window;
pub mod priority;
pub mod grouping;
pub mod detail;
pub mod channels;
pub mod extract;
pub mod fetch;
pub mod digest;
pub mod html;
pub mod config;
pub mod storage;
pub mod logging;

pub use types::*;
pub use classifier::classify;
pub use dates::{compare_date_labels, parse_date_label, MonthDay};
pub use window::{is_in_window, UpcomingWindow};
pub use priority::{is_high_priority, PriorityRules};
pub use grouping::{group_and_order, split_by_sport};
