//! Memoized CSV export keyed on simulation parameters

use super::{csv_bytes, ExportError};
use crate::config::SimulationConfig;
use crate::projection::project;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

/// Entries kept before the cache is flushed
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Cache of exported CSV tables
///
/// The projection is a pure function of its config, so the export for a
/// given config never changes and can be reused until `clear` is called.
/// Holds at most `capacity` entries; a miss on a full cache clears it first.
#[derive(Debug)]
pub struct ExportCache {
    entries: HashMap<[u64; 7], Arc<[u8]>>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl Default for ExportCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

impl ExportCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache holding at most `capacity` exports (minimum 1)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: capacity.max(1),
            hits: 0,
            misses: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Return the CSV export for `config`, projecting and exporting on a miss
    pub fn get_or_export(&mut self, config: &SimulationConfig) -> Result<Arc<[u8]>, ExportError> {
        let key = config.cache_key();
        if let Some(bytes) = self.entries.get(&key) {
            self.hits += 1;
            return Ok(Arc::clone(bytes));
        }

        self.misses += 1;
        let bytes: Arc<[u8]> = csv_bytes(&project(config))?.into();
        if self.entries.len() >= self.capacity {
            debug!("Export cache full at {} entries, flushing", self.entries.len());
            self.entries.clear();
        }
        debug!("Cached {} byte export for {:?}", bytes.len(), config);
        self.entries.insert(key, Arc::clone(&bytes));
        Ok(bytes)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
