use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// The planner met a filesystem object it does not know how to reconcile.
    Planning(String),
    /// A symlink could not be created.
    Link(String),
    /// No Chromium checkout at the expected location.
    MissingCheckout(PathBuf),
    /// Dangerous actions are pending and --force was not given.
    DangerousPending,
    /// The operator answered "no" to the confirmation prompt.
    Declined,
    /// Missing privileges to create symlinks.
    Privilege(String),
    /// The links db could not be read or written.
    Store(String),
    Msg(String),
}

impl Error {
    pub fn msg<M: Into<String>>(msg: M) -> Self {
        Self::Msg(msg.into())
    }

    /// Process exit code for this failure.
    ///
    /// 1 = operator action required (or generic failure), 2 = checkout
    /// missing, 3 = planning or link operation failed.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::MissingCheckout(_) => 2,
            Error::Planning(_) | Error::Link(_) => 3,
            Error::DangerousPending
            | Error::Declined
            | Error::Privilege(_)
            | Error::Store(_)
            | Error::Msg(_) => 1,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Planning(msg) | Error::Link(msg) | Error::Privilege(msg)
            | Error::Store(msg) | Error::Msg(msg) => write!(f, "{msg}"),
            Error::MissingCheckout(path) => write!(
                f,
                "cannot find a Chromium checkout at {}. Did you run `gclient sync` before running this tool?",
                path.display()
            ),
            Error::DangerousPending => {
                write!(f, "dangerous actions pending; re-run with --force")
            }
            Error::Declined => write!(f, "aborted at operator request"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::msg(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
