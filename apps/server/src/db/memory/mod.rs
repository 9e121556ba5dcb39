//! In-process middleware backed by ordered in-memory tables.
//!
//! Each table is keyed by record id, so listings come back in ascending id
//! order. A single `RwLock` guards all tables; it is taken for the duration of
//! one call and never held across an `.await`.

mod germplasm_list;
mod location;
mod ontology;
mod program;
mod role;
mod study;

use super::seed::{FavoriteLocation, SeedData};
use crate::{
    models::{
        DataTypeSummary, GermplasmList, Location, MethodSummary, Project, PropertySummary, Role,
        StudyInstance, StudyTransaction,
    },
    Error, Result,
};
use std::collections::{BTreeMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct Tables {
    projects: Vec<Project>,
    locations: BTreeMap<i32, Location>,
    favorite_locations: HashSet<FavoriteLocation>,
    roles: BTreeMap<i32, Role>,
    germplasm_lists: BTreeMap<i32, GermplasmList>,
    study_instances: BTreeMap<i32, StudyInstance>,
    study_transactions: BTreeMap<i32, StudyTransaction>,
    methods: BTreeMap<i32, MethodSummary>,
    properties: BTreeMap<i32, PropertySummary>,
    data_types: Vec<DataTypeSummary>,
}

/// The one concrete implementation of every service trait.
#[derive(Debug)]
pub struct InMemoryMiddleware {
    tables: RwLock<Tables>,
}

impl Default for InMemoryMiddleware {
    fn default() -> Self {
        Self {
            tables: RwLock::new(Tables {
                data_types: DataTypeSummary::builtin(),
                ..Tables::default()
            }),
        }
    }
}

impl InMemoryMiddleware {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a fixture. Duplicate ids within one table are rejected.
    pub fn from_seed(seed: SeedData) -> Result<Self> {
        let tables = Tables {
            projects: seed.projects,
            locations: index_by(seed.locations, "location", |l| l.id)?,
            favorite_locations: seed
                .favorite_locations
                .into_iter()
                .map(|f| FavoriteLocation {
                    crop_name: f.crop_name.to_lowercase(),
                    ..f
                })
                .collect(),
            roles: index_by(seed.roles, "role", |r| r.id)?,
            germplasm_lists: index_by(seed.germplasm_lists, "germplasm list", |l| l.id)?,
            study_instances: index_by(seed.study_instances, "study instance", |i| {
                i.instance_id
            })?,
            study_transactions: index_by(seed.study_transactions, "study transaction", |t| {
                t.transaction_id
            })?,
            methods: index_by(seed.methods, "method", |m| m.id)?,
            properties: index_by(seed.properties, "property", |p| p.id)?,
            data_types: if seed.data_types.is_empty() {
                DataTypeSummary::builtin()
            } else {
                seed.data_types
            },
        };

        tracing::info!(
            projects = tables.projects.len(),
            locations = tables.locations.len(),
            roles = tables.roles.len(),
            germplasm_lists = tables.germplasm_lists.len(),
            study_instances = tables.study_instances.len(),
            study_transactions = tables.study_transactions.len(),
            methods = tables.methods.len(),
            properties = tables.properties.len(),
            "Middleware seeded"
        );

        Ok(Self {
            tables: RwLock::new(tables),
        })
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| Error::Query("middleware tables lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| Error::Internal("middleware tables lock poisoned".to_string()))
    }
}

fn index_by<T>(
    records: Vec<T>,
    kind: &str,
    id_of: impl Fn(&T) -> i32,
) -> Result<BTreeMap<i32, T>> {
    let mut map = BTreeMap::new();
    for record in records {
        let id = id_of(&record);
        if map.insert(id, record).is_some() {
            return Err(Error::Internal(format!(
                "Duplicate {} id {} in seed data",
                kind, id
            )));
        }
    }
    Ok(map)
}

/// Next free id: one past the largest key.
fn next_id<T>(table: &BTreeMap<i32, T>) -> i32 {
    table.keys().next_back().map_or(1, |id| id + 1)
}

fn same_crop(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}
