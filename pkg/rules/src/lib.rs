//! Rule mapping engine: derives HostRule, HTTPRule and GSLBHostRule
//! documents from an ingress and its embedded proxy configuration.

pub mod engine;
pub mod gslb;
pub mod host;
pub mod http;
pub mod outcome;
pub mod reference;
pub mod source;

#[cfg(test)]
mod testutil;

pub use engine::{Conversion, ItemRules, Skip, convert, map_item};
pub use outcome::{MappingOutcome, SkipReason};
pub use source::IngressItem;
