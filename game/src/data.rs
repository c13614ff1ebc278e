use std::error::Error;
use std::fmt::{Display, Formatter};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::ToSql;

use crate::building::{StructureId, StructureKey};
use crate::economy::ResourceKey;
use crate::knowledge::CatalogError;
use crate::model::FarmId;
use crate::planting::{CropId, CropKey, CropStatus};
use crate::raising::{AnimalId, AnimalKey};

/// Failure at the storage boundary, never caused by player action.
#[derive(Debug)]
pub enum DataError {
    Sql(rusqlite::Error),
    Json(serde_json::Error),
    Catalog(CatalogError),
    Inconsistency { reason: String },
}

impl Display for DataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::Sql(error) => write!(f, "storage error: {}", error),
            DataError::Json(error) => write!(f, "malformed data: {}", error),
            DataError::Catalog(error) => write!(f, "stale record: {}", error),
            DataError::Inconsistency { reason } => write!(f, "inconsistent data: {}", reason),
        }
    }
}

impl Error for DataError {}

impl From<rusqlite::Error> for DataError {
    fn from(error: rusqlite::Error) -> Self {
        Self::Sql(error)
    }
}

impl From<serde_json::Error> for DataError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<CatalogError> for DataError {
    fn from(error: CatalogError) -> Self {
        Self::Catalog(error)
    }
}

impl DataError {
    pub fn inconsistency(reason: impl Into<String>) -> Self {
        Self::Inconsistency {
            reason: reason.into(),
        }
    }
}

macro_rules! sql_key {
    ($($key:ty),+) => {
        $(
            impl ToSql for $key {
                fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                    Ok(ToSqlOutput::from(self.as_str()))
                }
            }

            impl FromSql for $key {
                fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                    value
                        .as_str()?
                        .parse()
                        .map_err(|error: CatalogError| FromSqlError::Other(Box::new(error)))
                }
            }
        )+
    };
}

sql_key!(ResourceKey, StructureKey, CropKey, AnimalKey);

macro_rules! sql_id {
    ($($id:ident),+) => {
        $(
            impl ToSql for $id {
                fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                    self.0.to_sql()
                }
            }

            impl FromSql for $id {
                fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                    usize::column_result(value).map($id)
                }
            }
        )+
    };
}

sql_id!(FarmId, StructureId, CropId, AnimalId);

impl ToSql for CropStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let status = match self {
            CropStatus::Growing => "growing",
            CropStatus::ReadyToHarvest => "ready",
        };
        Ok(ToSqlOutput::from(status))
    }
}

impl FromSql for CropStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "growing" => Ok(CropStatus::Growing),
            "ready" => Ok(CropStatus::ReadyToHarvest),
            _ => Err(FromSqlError::InvalidType),
        }
    }
}
