use std::fmt;

/// Lifecycle of the advanced analysis backend as seen from this process.
///
/// The backend itself is external; this state machine only tracks what the
/// supervisor last observed. `CoolingDown` means the backend is still usable
/// but will be considered stopped once its idle deadline passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    Stopped,
    Starting,
    Running,
    CoolingDown,
}

impl fmt::Display for ServerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stopped => write!(f, "stopped"),
            Self::Starting => write!(f, "starting"),
            Self::Running => write!(f, "running"),
            Self::CoolingDown => write!(f, "cooling down"),
        }
    }
}
