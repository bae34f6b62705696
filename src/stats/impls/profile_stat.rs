use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use crossbeam_skiplist::SkipMap;
use serde_json::{Map, Value, json};
use crate::stats::structs::profile_stat::{ProfileEntry, ProfileEntryKey, ProfileStat};

impl ProfileEntry {
    pub fn new() -> ProfileEntry
    {
        ProfileEntry {
            execute_count: AtomicU64::new(0),
            execute_time_nanos: AtomicU64::new(0),
        }
    }

    pub fn get_execute_count(&self) -> u64
    {
        self.execute_count.load(Ordering::SeqCst)
    }

    pub fn get_execute_time_nanos(&self) -> u64
    {
        self.execute_time_nanos.load(Ordering::SeqCst)
    }
}

impl Default for ProfileEntry {
    fn default() -> Self
    {
        ProfileEntry::new()
    }
}

impl ProfileStat {
    pub fn new() -> ProfileStat
    {
        ProfileStat {
            entries: SkipMap::new(),
        }
    }

    /// Records one timed invocation of the profiled operation `key`.
    ///
    /// The entry is created lock-free on first sight; concurrent recorders
    /// for the same key land on the same entry.
    pub fn record(&self, key: ProfileEntryKey, nanos: u64)
    {
        let entry = self.entries.get_or_insert_with(key, || Arc::new(ProfileEntry::new()));
        entry.value().execute_count.fetch_add(1, Ordering::SeqCst);
        entry.value().execute_time_nanos.fetch_add(nanos, Ordering::SeqCst);
    }

    pub fn get(&self, key: &ProfileEntryKey) -> Option<Arc<ProfileEntry>>
    {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize
    {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.entries.is_empty()
    }

    /// Ordered export of every profiled operation, one map per entry.
    pub fn get_stats_data(&self) -> Vec<Value>
    {
        let mut data = Vec::new();

        for entry in self.entries.iter() {
            let key = entry.key();
            let value = entry.value();

            let mut item = Map::new();
            item.insert(String::from("Parent"), match &key.parent {
                Some(parent) => json!(parent),
                None => Value::Null,
            });
            item.insert(String::from("Name"), json!(key.name));
            item.insert(String::from("Category"), json!(key.category));
            item.insert(String::from("ExecuteCount"), json!(value.get_execute_count()));
            item.insert(String::from("ExecuteTimeMillis"), json!(value.get_execute_time_nanos() / 1_000_000));

            data.push(Value::Object(item));
        }

        data
    }
}

impl Default for ProfileStat {
    fn default() -> Self
    {
        ProfileStat::new()
    }
}
