// Operations module - the fetch, compute and render pipeline

pub mod aggregator;
pub mod progress;
pub mod refresh;
pub mod report;
pub mod resolver;

pub use aggregator::*;
pub use progress::*;
pub use refresh::*;
pub use report::*;
pub use resolver::*;
