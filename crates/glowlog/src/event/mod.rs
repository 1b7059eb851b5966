//! Log event data model: levels, events, and property values.

mod level;
mod log_event;
mod value;

pub use level::{Level, ParseLevelError};
pub use log_event::LogEvent;
pub use value::{PropertyValue, Scalar, Structure};
