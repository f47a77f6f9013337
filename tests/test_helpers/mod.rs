//! Environment helpers shared by integration tests that touch process state.

use std::env;
use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Applies environment changes and restores the previous values on drop.
///
/// Guards serialize on a process-wide mutex, so only one is alive at a time.
pub struct EnvVarGuard {
    previous: Vec<(OsString, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    /// Sets (`Some`) or removes (`None`) each variable for the guard lifetime.
    pub fn set_many(changes: &[(OsString, Option<OsString>)]) -> Self {
        let lock = ENV_MUTEX.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = changes
            .iter()
            .map(|(key, value)| {
                let old = env::var_os(key);
                apply(key, value.as_ref());
                (key.clone(), old)
            })
            .collect();
        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..).rev() {
            apply(&key, value.as_ref());
        }
    }
}

fn apply(key: &OsString, value: Option<&OsString>) {
    // SAFETY: `ENV_MUTEX` is held by the calling guard for every mutation.
    unsafe {
        match value {
            Some(new_value) => env::set_var(key, new_value),
            None => env::remove_var(key),
        }
    }
}
