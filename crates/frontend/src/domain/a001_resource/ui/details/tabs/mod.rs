//! Tab viewers of the resource page

mod document;
mod example;
mod optional;
mod parameters;
mod raw;
mod usage;
mod versions;

pub use document::{ChangelogTab, ReadmeTab};
pub use example::ExampleTab;
pub use optional::OptionalTab;
pub use parameters::ParametersTab;
pub use raw::RawTab;
pub use usage::UsageTab;
pub use versions::VersionsTab;
