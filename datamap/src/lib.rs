pub use persist::*;
pub use storage::*;

mod persist;
mod storage;
