pub use memory::*;
pub use records::*;
pub use sqlite::*;
pub use storage::*;

mod memory;
mod records;
mod restoring;
mod sqlite;
mod storage;
mod write_back;
