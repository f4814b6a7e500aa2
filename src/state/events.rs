// ============================================================================
// EVENTS - Eventos de entrada, comandos de salida y la cola que los serializa
// ============================================================================

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use crate::models::{Credentials, DashboardData};
use crate::services::DashboardError;

/// Identifica un fetch del dashboard: token con el que salió + secuencia.
/// Las respuestas con un ticket que ya no es el actual se descartan.
#[derive(Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub token: String,
    pub seq: u64,
}

// Sin token en los logs
impl fmt::Debug for FetchTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FetchTicket(#{})", self.seq)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AppEvent {
    /// Página lista
    Started,
    LoginSubmitted(Credentials),
    LoginSucceeded(String),
    LoginFailed(String),
    LogoutClicked,
    DashboardLoaded {
        ticket: FetchTicket,
        data: DashboardData,
    },
    DashboardFailed {
        ticket: FetchTicket,
        error: DashboardError,
    },
}

impl AppEvent {
    /// Nombre corto para logs (sin credenciales ni tokens)
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::Started => "Started",
            AppEvent::LoginSubmitted(_) => "LoginSubmitted",
            AppEvent::LoginSucceeded(_) => "LoginSucceeded",
            AppEvent::LoginFailed(_) => "LoginFailed",
            AppEvent::LogoutClicked => "LogoutClicked",
            AppEvent::DashboardLoaded { .. } => "DashboardLoaded",
            AppEvent::DashboardFailed { .. } => "DashboardFailed",
        }
    }
}

/// Trabajo asíncrono que pide el ViewModel
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Login(Credentials),
    FetchDashboard(FetchTicket),
}

/// Cola FIFO de eventos, compartida entre handlers DOM y futures
#[derive(Clone, Default)]
pub struct EventQueue {
    events: Rc<RefCell<VecDeque<AppEvent>>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: AppEvent) {
        self.events.borrow_mut().push_back(event);
    }

    pub fn pop(&self) -> Option<AppEvent> {
        self.events.borrow_mut().pop_front()
    }
}
