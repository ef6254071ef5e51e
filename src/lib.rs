#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod level;
mod macros;
mod record;
#[cfg(feature = "enabled")]
mod sink;
mod source;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use crate::level::{Level, ParseLevelError};
pub use crate::record::Record;
#[cfg(feature = "enabled")]
#[cfg_attr(docsrs, doc(cfg(feature = "enabled")))]
pub use crate::sink::emit;
pub use crate::source::SourceLocation;
#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub use crate::tracing_bridge::{TinylogLayer, init_tracing};
