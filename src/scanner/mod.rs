mod filter;
mod walker;

pub use filter::{InclusionFilter, ScanScope};
pub use walker::TreeWalker;
