//! Table manager owning many independent craps tables.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{
    config::{ConfigError, TableConfig},
    craps_table::CrapsTable,
};
use crate::game::entities::{Chips, Phase};

/// Table ID type
pub type TableId = u64;

/// Table metadata for discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMetadata {
    pub id: TableId,
    pub name: String,
    pub phase: Phase,
    pub point: Option<u8>,
    pub balance: Chips,
    pub staked: Chips,
    pub rolls: u64,
}

impl TableMetadata {
    fn new(id: TableId, table: &CrapsTable) -> Self {
        Self {
            id,
            name: table.config().name.clone(),
            phase: table.phase(),
            point: table.point(),
            balance: table.balance(),
            staked: table.total_staked(),
            rolls: table.rolls(),
        }
    }
}

/// Owns every open table. Tables never share state; the manager only
/// hands out references by ID.
#[derive(Debug)]
pub struct TableManager {
    tables: HashMap<TableId, CrapsTable>,
    next_table_id: TableId,
}

impl Default for TableManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TableManager {
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
            next_table_id: 1,
        }
    }

    /// Open a table with the config's starting balance.
    ///
    /// # Errors
    ///
    /// Returns the config's validation error; no ID is consumed on failure.
    pub fn create_table(&mut self, config: TableConfig) -> Result<TableId, ConfigError> {
        let table = CrapsTable::new(config)?;
        let table_id = self.next_table_id;
        self.next_table_id += 1;
        log::info!("Created table {} ({})", table_id, table.config().name);
        self.tables.insert(table_id, table);
        Ok(table_id)
    }

    pub fn table(&self, table_id: TableId) -> Option<&CrapsTable> {
        self.tables.get(&table_id)
    }

    pub fn table_mut(&mut self, table_id: TableId) -> Option<&mut CrapsTable> {
        self.tables.get_mut(&table_id)
    }

    /// List all open tables, ordered by ID.
    pub fn list_tables(&self) -> Vec<TableMetadata> {
        let mut metadata: Vec<_> = self
            .tables
            .iter()
            .map(|(id, table)| TableMetadata::new(*id, table))
            .collect();
        metadata.sort_by_key(|m| m.id);
        metadata
    }

    /// Close a table, handing it back to the caller so any remaining
    /// balance can be settled up.
    pub fn close_table(&mut self, table_id: TableId) -> Option<CrapsTable> {
        let table = self.tables.remove(&table_id)?;
        log::info!(
            "Closed table {} with balance {} after {} rolls",
            table_id,
            table.balance(),
            table.rolls()
        );
        Some(table)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{dice::ScriptedDice, entities::BetCategory};

    fn named(name: &str) -> TableConfig {
        TableConfig {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut manager = TableManager::new();
        assert!(manager.is_empty());
        assert_eq!(manager.create_table(named("one")), Ok(1));
        assert_eq!(manager.create_table(named("two")), Ok(2));
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_invalid_config_consumes_no_id() {
        let mut manager = TableManager::new();
        assert!(manager.create_table(named("  ")).is_err());
        assert_eq!(manager.create_table(named("ok")), Ok(1));
    }

    #[test]
    fn test_tables_are_independent() {
        let mut manager = TableManager::new();
        let a = manager.create_table(named("a")).unwrap();
        let b = manager.create_table(named("b")).unwrap();

        let table = manager.table_mut(a).unwrap();
        table.add(BetCategory::PassLine, 10).unwrap();
        table.begin_roll(&mut ScriptedDice::new([(2, 2)])).unwrap();

        assert_eq!(manager.table(a).unwrap().point(), Some(4));
        assert_eq!(manager.table(b).unwrap().point(), None);
        assert!(manager.table(b).unwrap().book().is_empty());
    }

    #[test]
    fn test_list_tables_sorted_with_state() {
        let mut manager = TableManager::new();
        for name in ["a", "b", "c"] {
            manager.create_table(named(name)).unwrap();
        }
        manager
            .table_mut(2)
            .unwrap()
            .add(BetCategory::Field, 25)
            .unwrap();

        let listed = manager.list_tables();
        let ids: Vec<_> = listed.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(listed[1].name, "b");
        assert_eq!(listed[1].staked, 25);
        assert_eq!(listed[1].phase, Phase::Betting);
        assert_eq!(listed[0].staked, 0);
    }

    #[test]
    fn test_close_table_returns_it() {
        let mut manager = TableManager::new();
        let id = manager.create_table(named("a")).unwrap();
        let table = manager.close_table(id).unwrap();
        assert_eq!(table.config().name, "a");
        assert!(manager.table(id).is_none());
        assert!(manager.close_table(id).is_none());
    }
}
