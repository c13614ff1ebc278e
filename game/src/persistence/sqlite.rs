use std::path::Path;

use datamap::{Persist, Storage};
use log::info;
use rusqlite::{params, Row, Statement};

use crate::data::DataError;
use crate::model::{Farm, FarmId};
use crate::persistence::{AnimalRow, CropRow, FarmStorage, ResourceRow, StructureRow};
use crate::planting::CropId;
use crate::Timestamp;

const SCHEMA: &str = "
create table if not exists farms (
    id integer primary key autoincrement,
    owner text not null unique,
    name text not null,
    level integer not null,
    currency integer not null,
    experience integer not null,
    created_at integer not null
);
create table if not exists resources (
    farm integer not null,
    kind text not null,
    quantity integer not null,
    updated_at integer not null,
    primary key (farm, kind)
);
create table if not exists structures (
    farm integer not null,
    id integer not null,
    kind text not null,
    level integer not null,
    x integer not null,
    y integer not null,
    occupied integer not null,
    primary key (farm, id),
    unique (farm, x, y)
);
create table if not exists crops (
    farm integer not null,
    id integer not null,
    field integer not null,
    kind text not null,
    planted_at integer not null,
    ready_at integer not null,
    status text not null,
    primary key (farm, id)
);
create table if not exists animals (
    farm integer not null,
    id integer not null,
    barn integer not null,
    kind text not null,
    name text,
    age integer not null,
    health integer not null,
    happiness integer not null,
    last_fed integer not null,
    created_at integer not null,
    primary key (farm, id)
);
";

pub struct SqliteStorage {
    storage: Storage,
}

impl SqliteStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        Self::prepare(Storage::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, DataError> {
        Self::prepare(Storage::open_in_memory()?)
    }

    fn prepare(storage: Storage) -> Result<Self, DataError> {
        storage.setup_schema(SCHEMA)?;
        Ok(Self { storage })
    }
}

impl FarmStorage for SqliteStorage {
    fn find_farm(&self, owner: &str) -> Result<Option<Farm>, DataError> {
        let farm = self.storage.find_one("where owner = ?1", [owner])?;
        Ok(farm)
    }

    fn create_farm(&mut self, owner: &str, name: &str, now: Timestamp) -> Result<Farm, DataError> {
        let connection = self.storage.connection();
        connection.execute(
            "insert into farms (owner, name, level, currency, experience, created_at) values (?1, ?2, 1, 0, 0, ?3)",
            params![owner, name, now],
        )?;
        let id = connection.last_insert_rowid() as usize;
        info!("Farm {} of {} created", id, owner);
        Ok(Farm {
            id: FarmId(id),
            owner: owner.to_string(),
            name: name.to_string(),
            level: 1,
            currency: 0,
            experience: 0,
            created_at: now,
        })
    }

    fn save_farm(&mut self, farm: &Farm) -> Result<(), DataError> {
        self.storage.save(farm)?;
        Ok(())
    }

    fn find_resources(&self, farm: FarmId) -> Result<Vec<ResourceRow>, DataError> {
        let rows = self.storage.find_all("where farm = ?1", [farm])?;
        Ok(rows)
    }

    fn save_resource(&mut self, row: &ResourceRow) -> Result<(), DataError> {
        self.storage.save(row)?;
        Ok(())
    }

    fn find_structures(&self, farm: FarmId) -> Result<Vec<StructureRow>, DataError> {
        let rows = self.storage.find_all("where farm = ?1 order by id", [farm])?;
        Ok(rows)
    }

    fn save_structure(&mut self, row: &StructureRow) -> Result<(), DataError> {
        self.storage.save(row)?;
        Ok(())
    }

    fn find_crops(&self, farm: FarmId) -> Result<Vec<CropRow>, DataError> {
        let rows = self.storage.find_all("where farm = ?1 order by id", [farm])?;
        Ok(rows)
    }

    fn save_crop(&mut self, row: &CropRow) -> Result<(), DataError> {
        self.storage.save(row)?;
        Ok(())
    }

    fn delete_crop(&mut self, farm: FarmId, crop: CropId) -> Result<(), DataError> {
        self.storage
            .delete::<CropRow, _>("where farm = ?1 and id = ?2", params![farm, crop])?;
        Ok(())
    }

    fn find_animals(&self, farm: FarmId) -> Result<Vec<AnimalRow>, DataError> {
        let rows = self.storage.find_all("where farm = ?1 order by id", [farm])?;
        Ok(rows)
    }

    fn save_animal(&mut self, row: &AnimalRow) -> Result<(), DataError> {
        self.storage.save(row)?;
        Ok(())
    }
}

impl Persist for Farm {
    const TABLE: &'static str = "farms";

    fn columns() -> &'static [&'static str] {
        &[
            "id",
            "owner",
            "name",
            "level",
            "currency",
            "experience",
            "created_at",
        ]
    }

    fn bind(&self, statement: &mut Statement) -> rusqlite::Result<()> {
        statement.raw_bind_parameter(1, self.id)?;
        statement.raw_bind_parameter(2, &self.owner)?;
        statement.raw_bind_parameter(3, &self.name)?;
        statement.raw_bind_parameter(4, self.level)?;
        statement.raw_bind_parameter(5, self.currency)?;
        statement.raw_bind_parameter(6, self.experience)?;
        statement.raw_bind_parameter(7, self.created_at)
    }

    fn parse(row: &Row) -> rusqlite::Result<Self> {
        Ok(Farm {
            id: row.get("id")?,
            owner: row.get("owner")?,
            name: row.get("name")?,
            level: row.get("level")?,
            currency: row.get("currency")?,
            experience: row.get("experience")?,
            created_at: row.get("created_at")?,
        })
    }
}

impl Persist for ResourceRow {
    const TABLE: &'static str = "resources";

    fn columns() -> &'static [&'static str] {
        &["farm", "kind", "quantity", "updated_at"]
    }

    fn bind(&self, statement: &mut Statement) -> rusqlite::Result<()> {
        statement.raw_bind_parameter(1, self.farm)?;
        statement.raw_bind_parameter(2, self.kind)?;
        statement.raw_bind_parameter(3, self.quantity)?;
        statement.raw_bind_parameter(4, self.updated_at)
    }

    fn parse(row: &Row) -> rusqlite::Result<Self> {
        Ok(ResourceRow {
            farm: row.get("farm")?,
            kind: row.get("kind")?,
            quantity: row.get("quantity")?,
            updated_at: row.get("updated_at")?,
        })
    }
}

impl Persist for StructureRow {
    const TABLE: &'static str = "structures";

    fn columns() -> &'static [&'static str] {
        &["farm", "id", "kind", "level", "x", "y", "occupied"]
    }

    fn bind(&self, statement: &mut Statement) -> rusqlite::Result<()> {
        statement.raw_bind_parameter(1, self.farm)?;
        statement.raw_bind_parameter(2, self.id)?;
        statement.raw_bind_parameter(3, self.kind)?;
        statement.raw_bind_parameter(4, self.level)?;
        statement.raw_bind_parameter(5, self.x)?;
        statement.raw_bind_parameter(6, self.y)?;
        statement.raw_bind_parameter(7, self.occupied)
    }

    fn parse(row: &Row) -> rusqlite::Result<Self> {
        Ok(StructureRow {
            farm: row.get("farm")?,
            id: row.get("id")?,
            kind: row.get("kind")?,
            level: row.get("level")?,
            x: row.get("x")?,
            y: row.get("y")?,
            occupied: row.get("occupied")?,
        })
    }
}

impl Persist for CropRow {
    const TABLE: &'static str = "crops";

    fn columns() -> &'static [&'static str] {
        &[
            "farm",
            "id",
            "field",
            "kind",
            "planted_at",
            "ready_at",
            "status",
        ]
    }

    fn bind(&self, statement: &mut Statement) -> rusqlite::Result<()> {
        statement.raw_bind_parameter(1, self.farm)?;
        statement.raw_bind_parameter(2, self.id)?;
        statement.raw_bind_parameter(3, self.field)?;
        statement.raw_bind_parameter(4, self.kind)?;
        statement.raw_bind_parameter(5, self.planted_at)?;
        statement.raw_bind_parameter(6, self.ready_at)?;
        statement.raw_bind_parameter(7, self.status)
    }

    fn parse(row: &Row) -> rusqlite::Result<Self> {
        Ok(CropRow {
            farm: row.get("farm")?,
            id: row.get("id")?,
            field: row.get("field")?,
            kind: row.get("kind")?,
            planted_at: row.get("planted_at")?,
            ready_at: row.get("ready_at")?,
            status: row.get("status")?,
        })
    }
}

impl Persist for AnimalRow {
    const TABLE: &'static str = "animals";

    fn columns() -> &'static [&'static str] {
        &[
            "farm",
            "id",
            "barn",
            "kind",
            "name",
            "age",
            "health",
            "happiness",
            "last_fed",
            "created_at",
        ]
    }

    fn bind(&self, statement: &mut Statement) -> rusqlite::Result<()> {
        statement.raw_bind_parameter(1, self.farm)?;
        statement.raw_bind_parameter(2, self.id)?;
        statement.raw_bind_parameter(3, self.barn)?;
        statement.raw_bind_parameter(4, self.kind)?;
        statement.raw_bind_parameter(5, &self.name)?;
        statement.raw_bind_parameter(6, self.age)?;
        statement.raw_bind_parameter(7, self.health)?;
        statement.raw_bind_parameter(8, self.happiness)?;
        statement.raw_bind_parameter(9, self.last_fed)?;
        statement.raw_bind_parameter(10, self.created_at)
    }

    fn parse(row: &Row) -> rusqlite::Result<Self> {
        Ok(AnimalRow {
            farm: row.get("farm")?,
            id: row.get("id")?,
            barn: row.get("barn")?,
            kind: row.get("kind")?,
            name: row.get("name")?,
            age: row.get("age")?,
            health: row.get("health")?,
            happiness: row.get("happiness")?,
            last_fed: row.get("last_fed")?,
            created_at: row.get("created_at")?,
        })
    }
}
