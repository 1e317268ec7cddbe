//! fieldlog: a field officer's mission logger.
//!
//! One mission at a time moves through start, site visits, incidents,
//! reports, and completion. The whole state is written to a key-value
//! store after every change, and completed missions are kept in an
//! append-only mission log.

pub mod cli;
pub mod config;
pub mod model;
pub mod report;
pub mod storage;
pub mod tracker;
