// ============================================================================
// DASHBOARD SERVICE - proyectos + leaderboard + badges
// ============================================================================
// Las tres peticiones salen a la vez; se espera a las tres (join) y solo
// entonces se inspeccionan los resultados en `GatheredResponses::inspect`.
// Regla: un 401 en cualquiera gana sobre cualquier otro fallo.
// ============================================================================

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{BadgeAward, DashboardData, LeaderboardEntry, Project};
use crate::services::http::{HttpResponse, HttpTransport, TransportError};
use crate::utils::{BADGES_ENDPOINT, LEADERBOARD_ENDPOINT, PROJECTS_ENDPOINT};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("sesión inválida (401)")]
    SessionInvalid,
    #[error("error transitorio: {0}")]
    Transient(String),
}

type Gathered = Result<HttpResponse, TransportError>;

/// Resultado crudo de las tres peticiones, ya completadas
#[derive(Debug, Clone)]
pub struct GatheredResponses {
    pub projects: Gathered,
    pub leaderboard: Gathered,
    pub badges: Gathered,
}

impl GatheredResponses {
    fn any_unauthorized(&self) -> bool {
        [&self.projects, &self.leaderboard, &self.badges]
            .iter()
            .any(|result| matches!(result, Ok(response) if response.is_unauthorized()))
    }

    /// 401 → SessionInvalid; cualquier otro fallo → Transient; si no, datos
    pub fn inspect(self) -> Result<DashboardData, DashboardError> {
        if self.any_unauthorized() {
            return Err(DashboardError::SessionInvalid);
        }

        Ok(DashboardData {
            projects: parse_collection::<Project>("projects", self.projects)?,
            leaderboard: parse_collection::<LeaderboardEntry>("leaderboard", self.leaderboard)?,
            badges: parse_collection::<BadgeAward>("badges", self.badges)?,
        })
    }
}

fn parse_collection<D: DeserializeOwned>(
    label: &str,
    result: Gathered,
) -> Result<Vec<D>, DashboardError> {
    let response = result.map_err(|e| DashboardError::Transient(format!("{}: {}", label, e)))?;

    if !response.ok() {
        return Err(DashboardError::Transient(format!(
            "{}: HTTP {}",
            label, response.status
        )));
    }

    serde_json::from_str(&response.body)
        .map_err(|e| DashboardError::Transient(format!("{}: Parse error: {}", label, e)))
}

pub struct DashboardClient<T: HttpTransport> {
    transport: T,
}

impl<T: HttpTransport> DashboardClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Lanza las tres peticiones y devuelve todo o nada
    pub async fn fetch_all(&self, token: &str) -> Result<DashboardData, DashboardError> {
        log::info!("📋 [DASHBOARD] Cargando proyectos, leaderboard y badges...");

        let (projects, leaderboard, badges) = futures::join!(
            self.transport.get_with_bearer(PROJECTS_ENDPOINT, token),
            self.transport.get_with_bearer(LEADERBOARD_ENDPOINT, token),
            self.transport.get_with_bearer(BADGES_ENDPOINT, token)
        );

        let result = GatheredResponses {
            projects,
            leaderboard,
            badges,
        }
        .inspect();

        match &result {
            Ok(data) => log::info!(
                "✅ [DASHBOARD] {} proyectos, {} usuarios en leaderboard, {} badges",
                data.projects.len(),
                data.leaderboard.len(),
                data.badges.len()
            ),
            Err(e) => log::warn!("⚠️ [DASHBOARD] {}", e),
        }

        result
    }
}
