//! Campus scheduling value types.
//!
//! Events, their priority levels, and the half-open intervals they book.
//!
//! | campus-schedule | Meaning |
//! |-----------------|---------|
//! | Event | A reservation of one location for one interval |
//! | Priority | Optional < High < Mandatory |
//! | Interval | Half-open tick range `[start, end)` |
//! | EventRequest | Caller input for add/update |

mod event;
mod interval;

pub use event::{Event, EventRequest, Priority};
pub use interval::Interval;
