// ============================================================================
// COMMAND RUNNER - Ejecuta los comandos del ViewModel contra los services
// ============================================================================
// Cada comando termina en exactamente un evento que vuelve a la cola.
// ============================================================================

use crate::services::{AuthClient, DashboardClient, HttpTransport};
use crate::state::{AppEvent, Command};

pub struct CommandRunner<T: HttpTransport> {
    auth: AuthClient<T>,
    dashboard: DashboardClient<T>,
}

impl<T: HttpTransport + Clone> CommandRunner<T> {
    pub fn new(transport: T) -> Self {
        Self {
            auth: AuthClient::new(transport.clone()),
            dashboard: DashboardClient::new(transport),
        }
    }
}

impl<T: HttpTransport> CommandRunner<T> {
    pub async fn run(&self, command: Command) -> AppEvent {
        match command {
            Command::Login(credentials) => match self.auth.login(&credentials).await {
                Ok(token) => AppEvent::LoginSucceeded(token),
                Err(e) => AppEvent::LoginFailed(e.to_string()),
            },
            Command::FetchDashboard(ticket) => match self.dashboard.fetch_all(&ticket.token).await {
                Ok(data) => AppEvent::DashboardLoaded { ticket, data },
                Err(error) => AppEvent::DashboardFailed { ticket, error },
            },
        }
    }
}
