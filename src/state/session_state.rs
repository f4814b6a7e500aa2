// ============================================================================
// SESSION STATE - Lo que las vistas pintan
// ============================================================================

use crate::models::DashboardData;

/// Vistas mutuamente excluyentes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    Dashboard,
}

/// Estado de presentación. Solo lo modifica `SessionViewModel`.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SessionState {
    pub view: View,
    /// Error inline del formulario de login
    pub login_error: Option<String>,
    /// Hay un POST /auth/token en vuelo
    pub login_pending: bool,
    /// `sub` del token, solo para mostrar
    pub welcome_name: String,
    /// None mientras no hayan llegado las tres colecciones
    pub dashboard: Option<DashboardData>,
}
