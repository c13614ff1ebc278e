use crate::Persist;
use log::{debug, info};
use rusqlite::{Connection, Params};
use std::path::Path;

pub struct Storage {
    connection: Connection,
}

impl Storage {
    pub fn open<P: AsRef<Path>>(path: P) -> rusqlite::Result<Self> {
        info!("Open storage {:?}", path.as_ref());
        Connection::open(path.as_ref()).map(|connection| Storage { connection })
    }

    pub fn open_in_memory() -> rusqlite::Result<Self> {
        Connection::open_in_memory().map(|connection| Storage { connection })
    }

    #[inline]
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub fn setup_schema(&self, schema: &str) -> rusqlite::Result<()> {
        info!("Setup storage schema");
        self.connection.execute_batch(schema)
    }

    pub fn find_all<T, P>(&self, where_clause: &str, params: P) -> rusqlite::Result<Vec<T>>
    where
        T: Persist,
        P: Params,
    {
        let mut statement = self
            .connection
            .prepare(&format!("select * from {} {}", T::TABLE, where_clause))?;
        let mut rows = statement.query(params)?;
        let mut values = vec![];
        while let Some(row) = rows.next()? {
            values.push(T::parse(row)?);
        }
        debug!("Found {} rows in {}", values.len(), T::TABLE);
        Ok(values)
    }

    pub fn find_one<T, P>(&self, where_clause: &str, params: P) -> rusqlite::Result<Option<T>>
    where
        T: Persist,
        P: Params,
    {
        let values = self.find_all(where_clause, params)?;
        Ok(values.into_iter().next())
    }

    /// Inserts the record or replaces existing one with the same primary key.
    pub fn save<T: Persist>(&self, item: &T) -> rusqlite::Result<()> {
        let columns = T::columns();
        let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{}", i)).collect();
        let sql = format!(
            "insert or replace into {} ({}) values ({})",
            T::TABLE,
            columns.join(", "),
            placeholders.join(", ")
        );
        let mut statement = self.connection.prepare_cached(&sql)?;
        item.bind(&mut statement)?;
        statement.raw_execute()?;
        Ok(())
    }

    pub fn delete<T, P>(&self, where_clause: &str, params: P) -> rusqlite::Result<usize>
    where
        T: Persist,
        P: Params,
    {
        let sql = format!("delete from {} {}", T::TABLE, where_clause);
        self.connection.execute(&sql, params)
    }
}
