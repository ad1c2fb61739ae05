use std::fmt;

use log::warn;

/// Environment marker a forked worker reads to learn its identity.
/// Absence means the process is the controller.
pub const WORKER_ID_ENV: &str = "HARNESS_WORKER_ID";

/// Controller-assigned worker identifier.
///
/// Ids grow monotonically for the lifetime of a controller and are
/// never reused, so ordering by id is ordering by fork time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkerId(u32);

impl WorkerId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Read the worker id marker from the environment.
    ///
    /// A malformed value is treated as absent, so the process falls
    /// back to the controller role rather than aborting.
    pub fn from_env() -> Option<Self> {
        let raw = std::env::var(WORKER_ID_ENV).ok()?;
        match raw.parse() {
            Ok(id) => Some(Self(id)),
            Err(_) => {
                warn!("Ignoring malformed {WORKER_ID_ENV}={raw}");
                None
            }
        }
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
