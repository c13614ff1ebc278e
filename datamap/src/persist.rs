use rusqlite::{Row, Statement};

/// Row mapping of a persisted record.
///
/// Table name and column order are fixed by the implementor, `bind` must bind
/// every column of [`Persist::columns`] in the same order, starting at index 1.
pub trait Persist: Sized {
    const TABLE: &'static str;

    fn columns() -> &'static [&'static str];

    fn bind(&self, statement: &mut Statement) -> rusqlite::Result<()>;

    fn parse(row: &Row) -> rusqlite::Result<Self>;
}
