mod scanner;
mod types;

pub use scanner::BlockScanner;
pub use types::BlockRecord;
