pub mod oracle;
pub use oracle::*;

pub mod snapshot;
pub use snapshot::*;
