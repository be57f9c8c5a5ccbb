pub mod tabs;

pub use tabs::{lookup, registry, ParseTabError, TabDescriptor, TabId, TABS};
