//! Runs embedded `PostgreSQL` lifecycle steps on behalf of a root test runner.
//!
//! `PostgreSQL` refuses to run as root, so when the integration tests are
//! executed with root privileges the embedded cluster is driven through this
//! helper instead of in-process:
//!
//! ```text
//! pg_worker <setup|start|stop> <payload-path>
//! ```
//!
//! The payload is the JSON `WorkerPayload` written by
//! `pg_embedded_setup_unpriv`: cluster settings plus environment overrides.
//! The worker drops to the `nobody` account before touching the cluster.

/// Boxed error type for the process result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[cfg(unix)]
fn main() -> Result<(), BoxError> {
    let args = worker::collect_args()?;
    worker::run(&args).map_err(Into::into)
}

#[cfg(not(unix))]
fn main() -> Result<(), BoxError> {
    Err("pg_worker is only supported on Unix platforms".into())
}

#[cfg(unix)]
mod worker {
    use camino::{Utf8Path, Utf8PathBuf};
    use nix::unistd::{Uid, User, initgroups, setgid, setuid};
    use pg_embedded_setup_unpriv::ambient_dir_and_path;
    use pg_embedded_setup_unpriv::worker::{PlainSecret, WorkerPayload};
    use postgresql_embedded::{PostgreSQL, Status};
    use std::env;
    use std::ffi::CString;
    use std::mem::ManuallyDrop;
    use std::str::FromStr;
    use thiserror::Error;
    use tokio::runtime::{Builder, Runtime};

    const UNPRIVILEGED_USER: &str = "nobody";

    /// Failures reported by the worker process.
    #[derive(Debug, Error)]
    pub enum WorkerError {
        #[error("invalid arguments: {0}")]
        InvalidArgs(String),
        #[error("failed to read worker payload: {0}")]
        PayloadRead(#[source] super::BoxError),
        #[error("failed to parse worker payload: {0}")]
        PayloadParse(#[source] serde_json::Error),
        #[error("invalid cluster settings: {0}")]
        Settings(String),
        #[error("failed to build runtime: {0}")]
        Runtime(#[source] std::io::Error),
        #[error("failed to drop privileges: {0}")]
        PrivilegeDrop(String),
        #[error("postgres {operation} failed: {message}")]
        Postgres {
            operation: &'static str,
            message: String,
        },
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Operation {
        Setup,
        Start,
        Stop,
    }

    impl Operation {
        const fn name(self) -> &'static str {
            match self {
                Self::Setup => "setup",
                Self::Start => "start",
                Self::Stop => "stop",
            }
        }

        fn failed(self, err: &dyn std::fmt::Display) -> WorkerError {
            WorkerError::Postgres {
                operation: self.name(),
                message: err.to_string(),
            }
        }
    }

    impl FromStr for Operation {
        type Err = WorkerError;

        fn from_str(value: &str) -> Result<Self, Self::Err> {
            match value {
                "setup" => Ok(Self::Setup),
                "start" => Ok(Self::Start),
                "stop" => Ok(Self::Stop),
                other => Err(WorkerError::InvalidArgs(format!(
                    "unknown operation '{other}'; expected setup, start, or stop"
                ))),
            }
        }
    }

    pub fn collect_args() -> Result<Vec<Utf8PathBuf>, WorkerError> {
        env::args_os()
            .skip(1)
            .map(|arg| {
                arg.into_string()
                    .map(Utf8PathBuf::from)
                    .map_err(|_| WorkerError::InvalidArgs("argument is not valid UTF-8".into()))
            })
            .collect()
    }

    pub fn run(args: &[Utf8PathBuf]) -> Result<(), WorkerError> {
        let [operation_arg, payload_path] = args else {
            return Err(WorkerError::InvalidArgs(format!(
                "expected <operation> <payload-path>, got {} argument(s)",
                args.len()
            )));
        };
        let operation = operation_arg.as_str().parse::<Operation>()?;
        let payload = load_payload(payload_path)?;
        drop_privileges_if_root(UNPRIVILEGED_USER)?;
        let settings = payload
            .settings
            .into_settings()
            .map_err(|err| WorkerError::Settings(err.to_string()))?;
        let runtime = build_runtime()?;
        apply_environment(&payload.environment);

        let mut postgres = PostgreSQL::new(settings);
        runtime.block_on(async {
            match operation {
                Operation::Setup => {
                    postgres.setup().await.map_err(|err| operation.failed(&err))?;
                    ensure_started(&mut postgres, operation).await
                }
                Operation::Start => ensure_started(&mut postgres, operation).await,
                Operation::Stop => postgres.stop().await.map_err(|err| operation.failed(&err)),
            }
        })?;

        if operation != Operation::Stop {
            // Dropping the handle would stop the server this process just started.
            let _running = ManuallyDrop::new(postgres);
        }
        Ok(())
    }

    async fn ensure_started(
        postgres: &mut PostgreSQL,
        operation: Operation,
    ) -> Result<(), WorkerError> {
        if matches!(postgres.status(), Status::Started) {
            return Ok(());
        }
        postgres.start().await.map_err(|err| operation.failed(&err))
    }

    fn load_payload(path: &Utf8Path) -> Result<WorkerPayload, WorkerError> {
        let (dir, relative) =
            ambient_dir_and_path(path).map_err(|err| WorkerError::PayloadRead(err.into()))?;
        let bytes = dir
            .read(relative.as_std_path())
            .map_err(|err| WorkerError::PayloadRead(err.into()))?;
        serde_json::from_slice(&bytes).map_err(WorkerError::PayloadParse)
    }

    fn drop_privileges_if_root(username: &str) -> Result<(), WorkerError> {
        if !Uid::effective().is_root() {
            return Ok(());
        }

        let user = User::from_name(username)
            .map_err(|err| WorkerError::PrivilegeDrop(err.to_string()))?
            .ok_or_else(|| WorkerError::PrivilegeDrop(format!("user '{username}' not found")))?;
        let user_name = CString::new(user.name.clone())
            .map_err(|err| WorkerError::PrivilegeDrop(err.to_string()))?;
        initgroups(&user_name, user.gid)
            .map_err(|err| WorkerError::PrivilegeDrop(err.to_string()))?;
        setgid(user.gid).map_err(|err| WorkerError::PrivilegeDrop(err.to_string()))?;
        setuid(user.uid).map_err(|err| WorkerError::PrivilegeDrop(err.to_string()))?;

        // SAFETY: no other threads exist yet; the runtime is built afterwards.
        unsafe {
            env::set_var("HOME", &user.dir);
            env::set_var("USER", &user.name);
            env::set_var("LOGNAME", &user.name);
        }
        Ok(())
    }

    fn build_runtime() -> Result<Runtime, WorkerError> {
        Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(WorkerError::Runtime)
    }

    fn apply_environment(environment: &[(String, Option<PlainSecret>)]) {
        for (key, value) in environment {
            // SAFETY: the current-thread runtime has not spawned any workers, so
            // nothing else reads the environment concurrently.
            unsafe {
                match value {
                    Some(secret) => env::set_var(key, secret.expose()),
                    None => env::remove_var(key),
                }
            }
        }
    }
}
