use std::slice;

use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{next_id, position_of},
    plan::Plan,
    record::Record,
};

/// Entries removed from the live lists, kept until restored or purged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrashBin {
    #[serde(default)]
    pub records: Vec<Record>,
    #[serde(default)]
    pub plans: Vec<Plan>,
}

impl TrashBin {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.plans.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len() + self.plans.len()
    }
}

/// The complete tracker state: what is loaded at startup and written after each change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub records: Vec<Record>,
    #[serde(default)]
    pub plans: Vec<Plan>,
    #[serde(default, skip_serializing_if = "TrashBin::is_empty")]
    pub trash: TrashBin,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records in insertion order. Call again to restart the enumeration.
    pub fn records(&self) -> slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Plans in insertion order.
    pub fn plans(&self) -> slice::Iter<'_, Plan> {
        self.plans.iter()
    }

    pub fn record(&self, id: u64) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn record_mut(&mut self, id: u64) -> Option<&mut Record> {
        self.records.iter_mut().find(|record| record.id == id)
    }

    pub fn plan(&self, id: u64) -> Option<&Plan> {
        self.plans.iter().find(|plan| plan.id == id)
    }

    pub fn plan_mut(&mut self, id: u64) -> Option<&mut Plan> {
        self.plans.iter_mut().find(|plan| plan.id == id)
    }

    /// Ids held by trashed records stay reserved so a later restore cannot collide.
    pub fn next_record_id(&self) -> u64 {
        next_id(self.records.iter().chain(self.trash.records.iter()))
    }

    pub fn next_plan_id(&self) -> u64 {
        next_id(self.plans.iter().chain(self.trash.plans.iter()))
    }

    pub fn take_record(&mut self, id: u64) -> Option<Record> {
        position_of(&self.records, id).map(|index| self.records.remove(index))
    }

    pub fn take_plan(&mut self, id: u64) -> Option<Plan> {
        position_of(&self.plans, id).map(|index| self.plans.remove(index))
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.plans.is_empty()
    }
}
