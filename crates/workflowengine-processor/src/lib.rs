//! Processing of individual items.
//!
//! A [`Processor`] is fed items one at a time. Each successful item is given
//! the next item number and described by a [`ProcessResult`] whose `data`
//! carries the item's byte length, processing time and item number.

mod error;
mod processor;
mod result;

pub use error::ProcessError;
pub use processor::{Processor, ProcessorStats};
pub use result::{ItemMetadata, ProcessResult};
