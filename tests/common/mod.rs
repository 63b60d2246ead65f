#![allow(dead_code)]

use igvendetta::browser::ErrorReporter;
use igvendetta::error::{IgError, Result};
use igvendetta::profile::Profile;
use igvendetta::store::{MemoryStore, Store};

pub fn user(id: usize, verified: bool) -> Profile {
    Profile {
        id: id.to_string(),
        username: format!("user{id}"),
        full_name: format!("User {id}"),
        profile_pic_url: format!("https://cdn.example.com/pics/{id}.jpg"),
        is_private: id % 2 == 0,
        is_verified: verified,
        ..Profile::default()
    }
}

/// `verified` verified accounts followed by `unverified` unverified ones.
pub fn dataset(verified: usize, unverified: usize) -> Vec<Profile> {
    (0..verified)
        .map(|i| user(i, true))
        .chain((verified..verified + unverified).map(|i| user(i, false)))
        .collect()
}

pub fn dataset_json(verified: usize, unverified: usize) -> String {
    serde_json::to_string(&dataset(verified, unverified)).unwrap()
}

#[derive(Default)]
pub struct Recorder {
    pub errors: Vec<String>,
}

impl ErrorReporter for Recorder {
    fn report(&mut self, context: &str, err: &IgError) {
        self.errors.push(format!("{context}: {err}"));
    }
}

/// Memory store whose reads or writes can be switched to fail.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl Store for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(IgError::Store {
                path: "memory".into(),
                message: "access denied".into(),
            });
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(IgError::Store {
                path: "memory".into(),
                message: "quota exceeded".into(),
            });
        }
        self.inner.set(key, value)
    }
}
