use crate::enums::server_state::ServerState;
use crate::traits::analysis_backend::AnalysisBackend;
use std::time::{Duration, Instant};

/// Tracks the lifecycle of the external analysis backend.
///
/// State machine: Stopped -> Starting -> Running -> CoolingDown -> Stopped.
/// Use during the cooldown window promotes the backend straight back to
/// Running; once the idle deadline passes it decays to Stopped and the next
/// use probes health again.
pub struct BackendSupervisor {
    state: ServerState,
    cooldown: Duration,
    idle_deadline: Option<Instant>,
}

impl BackendSupervisor {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            state: ServerState::Stopped,
            cooldown,
            idle_deadline: None,
        }
    }

    pub fn state(&self) -> ServerState {
        self.decayed_state()
    }

    /// Make sure the backend is reachable; returns whether it can be used.
    pub async fn ensure_running<B: AnalysisBackend>(&mut self, backend: &B) -> bool {
        match self.decayed_state() {
            ServerState::Running => {
                self.state = ServerState::Running;
                self.idle_deadline = None;
                true
            }
            ServerState::CoolingDown => {
                // Still warm, cancel the shutdown.
                self.state = ServerState::Running;
                self.idle_deadline = None;
                true
            }
            ServerState::Stopped | ServerState::Starting => {
                self.state = ServerState::Starting;
                log::info!("🚀 Contacting advanced analysis backend...");

                match backend.health_check().await {
                    Ok(()) => {
                        self.state = ServerState::Running;
                        self.idle_deadline = None;
                        true
                    }
                    Err(e) => {
                        log::warn!("💤 Advanced backend not reachable: {e}");
                        self.state = ServerState::Stopped;
                        false
                    }
                }
            }
        }
    }

    /// Arm the idle shutdown after a command finishes with the backend.
    pub fn begin_cooldown(&mut self) {
        if self.state == ServerState::Running {
            self.state = ServerState::CoolingDown;
            self.idle_deadline = Some(Instant::now() + self.cooldown);
        }
    }

    fn decayed_state(&self) -> ServerState {
        match (self.state, self.idle_deadline) {
            (ServerState::CoolingDown, Some(deadline)) if Instant::now() >= deadline => {
                ServerState::Stopped
            }
            (state, _) => state,
        }
    }
}
