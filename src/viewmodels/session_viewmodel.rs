// ============================================================================
// SESSION VIEWMODEL - Máquina de estados Login / Dashboard
// ============================================================================
// Sin DOM y sin red: recibe un evento, actualiza `SessionState` y devuelve
// (como mucho) un comando asíncrono que otro ejecuta.
//
//   (inicio)   Started + token       → Dashboard  (Fetch)
//   (inicio)   Started sin token     → Login
//   Login      LoginSubmitted        → Login      (Login)
//   Login      LoginSucceeded        → Dashboard  (store.set, Fetch)
//   Login      LoginFailed           → Login      (error inline)
//   Dashboard  LogoutClicked         → Login      (store.clear)
//   Dashboard  DashboardFailed       → Login      (store.clear)
//   Dashboard  DashboardLoaded       → Dashboard  (listas)
// ============================================================================

use crate::models::UnverifiedClaims;
use crate::state::{AppEvent, Command, FetchTicket, SessionState, View};
use crate::stores::SessionStore;

pub struct SessionViewModel {
    store: SessionStore,
    state: SessionState,
    current_ticket: Option<FetchTicket>,
    next_seq: u64,
}

impl SessionViewModel {
    pub fn new(store: SessionStore) -> Self {
        Self {
            store,
            state: SessionState::default(),
            current_ticket: None,
            next_seq: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Aplica un evento y devuelve el comando a ejecutar, si hay
    pub fn dispatch(&mut self, event: AppEvent) -> Option<Command> {
        log::debug!("📨 [VM] {} en vista {:?}", event.name(), self.state.view);

        match event {
            AppEvent::Started => match self.store.get() {
                Some(token) => {
                    log::info!("💾 [VM] Token encontrado en storage, abriendo dashboard");
                    self.enter_dashboard(token)
                }
                None => {
                    self.enter_login();
                    None
                }
            },

            AppEvent::LoginSubmitted(credentials) => {
                if self.state.view != View::Login {
                    log::warn!("⚠️ [VM] Login enviado fuera de la vista de login, ignorado");
                    return None;
                }
                if self.state.login_pending {
                    log::debug!("⏳ [VM] Ya hay un login en curso");
                    return None;
                }
                self.state.login_error = None;
                self.state.login_pending = true;
                Some(Command::Login(credentials))
            }

            AppEvent::LoginSucceeded(token) => {
                if !self.awaiting_login() {
                    log::warn!("⚠️ [VM] Respuesta de login tardía, ignorada");
                    return None;
                }
                self.state.login_pending = false;
                self.store.set(&token);
                self.enter_dashboard(token)
            }

            AppEvent::LoginFailed(message) => {
                if !self.awaiting_login() {
                    log::warn!("⚠️ [VM] Error de login tardío, ignorado");
                    return None;
                }
                self.state.login_pending = false;
                self.state.login_error = Some(message);
                None
            }

            AppEvent::LogoutClicked => {
                log::info!("👋 [VM] Logout");
                self.logout();
                None
            }

            AppEvent::DashboardLoaded { ticket, data } => {
                if !self.is_current(&ticket) {
                    log::debug!("🗑️ [VM] Datos de {:?} descartados (obsoletos)", ticket);
                    return None;
                }
                self.current_ticket = None;
                self.state.dashboard = Some(data);
                None
            }

            AppEvent::DashboardFailed { ticket, error } => {
                if !self.is_current(&ticket) {
                    log::debug!(
                        "🗑️ [VM] Error de {:?} descartado (obsoleto): {}",
                        ticket,
                        error
                    );
                    return None;
                }
                log::error!("❌ [VM] Error cargando dashboard: {}", error);
                self.logout();
                None
            }
        }
    }

    fn awaiting_login(&self) -> bool {
        self.state.view == View::Login && self.state.login_pending
    }

    fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.state.view == View::Dashboard && self.current_ticket.as_ref() == Some(ticket)
    }

    fn enter_dashboard(&mut self, token: String) -> Option<Command> {
        // Nombre solo para mostrar: payload sin verificar
        let claims = match UnverifiedClaims::decode(&token) {
            Ok(claims) => claims,
            Err(e) => {
                log::error!("❌ [VM] Token ilegible, cerrando sesión: {}", e);
                self.logout();
                return None;
            }
        };

        self.state.view = View::Dashboard;
        self.state.login_error = None;
        self.state.login_pending = false;
        self.state.welcome_name = claims.sub;
        self.state.dashboard = None;

        self.next_seq += 1;
        let ticket = FetchTicket {
            token,
            seq: self.next_seq,
        };
        self.current_ticket = Some(ticket.clone());
        Some(Command::FetchDashboard(ticket))
    }

    fn enter_login(&mut self) {
        self.current_ticket = None;
        self.state = SessionState::default();
    }

    fn logout(&mut self) {
        self.store.clear();
        self.enter_login();
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::models::auth::fake_token;
    use crate::models::{Credentials, DashboardData, Project};
    use crate::services::DashboardError;
    use crate::stores::MemoryStorage;

    const KEY: &str = "accessToken";

    fn vm_with(token: Option<&str>) -> (SessionViewModel, SessionStore) {
        let storage = match token {
            Some(token) => MemoryStorage::with_item(KEY, token),
            None => MemoryStorage::new(),
        };
        let store = SessionStore::new(Rc::new(storage), KEY);
        (SessionViewModel::new(store.clone()), store)
    }

    fn alice_token() -> String {
        fake_token(r#"{"sub":"alice"}"#)
    }

    fn ticket_of(command: Option<Command>) -> FetchTicket {
        match command {
            Some(Command::FetchDashboard(ticket)) => ticket,
            other => panic!("se esperaba FetchDashboard, llegó {:?}", other),
        }
    }

    fn sample_data() -> DashboardData {
        DashboardData {
            projects: vec![Project {
                id: 1,
                name: "Foo".to_string(),
                repo_url: None,
            }],
            ..DashboardData::default()
        }
    }

    #[test]
    fn test_start_without_token_shows_login() {
        let (mut vm, _) = vm_with(None);
        assert_eq!(vm.dispatch(AppEvent::Started), None);
        assert_eq!(vm.state().view, View::Login);
    }

    #[test]
    fn test_start_with_token_opens_dashboard_and_fetches() {
        let token = alice_token();
        let (mut vm, _) = vm_with(Some(&token));

        let ticket = ticket_of(vm.dispatch(AppEvent::Started));
        assert_eq!(ticket.token, token);
        assert_eq!(vm.state().view, View::Dashboard);
        assert_eq!(vm.state().welcome_name, "alice");
        assert_eq!(vm.state().dashboard, None);
    }

    #[test]
    fn test_login_success_persists_token_verbatim() {
        let (mut vm, store) = vm_with(None);
        vm.dispatch(AppEvent::Started);

        let command = vm.dispatch(AppEvent::LoginSubmitted(Credentials::new("alice", "pw")));
        assert_eq!(command, Some(Command::Login(Credentials::new("alice", "pw"))));
        assert!(vm.state().login_pending);

        let token = alice_token();
        let ticket = ticket_of(vm.dispatch(AppEvent::LoginSucceeded(token.clone())));
        assert_eq!(store.get(), Some(token.clone()));
        assert_eq!(ticket.token, token);
        assert_eq!(vm.state().view, View::Dashboard);
        assert_eq!(vm.state().login_error, None);
    }

    #[test]
    fn test_login_failure_stays_on_login_with_message() {
        let (mut vm, store) = vm_with(None);
        vm.dispatch(AppEvent::Started);
        vm.dispatch(AppEvent::LoginSubmitted(Credentials::new("alice", "bad")));

        assert_eq!(vm.dispatch(AppEvent::LoginFailed("Invalid credentials".to_string())), None);
        assert_eq!(vm.state().view, View::Login);
        assert_eq!(vm.state().login_error.as_deref(), Some("Invalid credentials"));
        assert!(!vm.state().login_pending);
        assert_eq!(store.get(), None);

        // Reintento: el error se limpia al volver a enviar
        vm.dispatch(AppEvent::LoginSubmitted(Credentials::new("alice", "good")));
        assert_eq!(vm.state().login_error, None);
    }

    #[test]
    fn test_duplicate_submit_while_pending_is_ignored() {
        let (mut vm, _) = vm_with(None);
        vm.dispatch(AppEvent::Started);
        assert!(vm
            .dispatch(AppEvent::LoginSubmitted(Credentials::new("a", "b")))
            .is_some());
        assert_eq!(
            vm.dispatch(AppEvent::LoginSubmitted(Credentials::new("a", "b"))),
            None
        );
    }

    #[test]
    fn test_loaded_data_is_shown() {
        let (mut vm, _) = vm_with(Some(&alice_token()));
        let ticket = ticket_of(vm.dispatch(AppEvent::Started));

        vm.dispatch(AppEvent::DashboardLoaded {
            ticket,
            data: sample_data(),
        });
        assert_eq!(vm.state().dashboard, Some(sample_data()));
    }

    #[test]
    fn test_logout_clears_token_and_lists() {
        let (mut vm, store) = vm_with(Some(&alice_token()));
        let ticket = ticket_of(vm.dispatch(AppEvent::Started));
        vm.dispatch(AppEvent::DashboardLoaded {
            ticket,
            data: sample_data(),
        });

        vm.dispatch(AppEvent::LogoutClicked);
        assert_eq!(store.get(), None);
        assert_eq!(vm.state().view, View::Login);
        assert_eq!(vm.state().dashboard, None);
        assert_eq!(vm.state().welcome_name, "");
    }

    #[test]
    fn test_session_invalid_forces_logout() {
        let (mut vm, store) = vm_with(Some(&alice_token()));
        let ticket = ticket_of(vm.dispatch(AppEvent::Started));

        vm.dispatch(AppEvent::DashboardFailed {
            ticket,
            error: DashboardError::SessionInvalid,
        });
        assert_eq!(store.get(), None);
        assert_eq!(vm.state().view, View::Login);
        assert_eq!(vm.state().dashboard, None);
    }

    #[test]
    fn test_transient_error_forces_logout() {
        let (mut vm, store) = vm_with(Some(&alice_token()));
        let ticket = ticket_of(vm.dispatch(AppEvent::Started));

        vm.dispatch(AppEvent::DashboardFailed {
            ticket,
            error: DashboardError::Transient("projects: HTTP 500".to_string()),
        });
        assert_eq!(store.get(), None);
        assert_eq!(vm.state().view, View::Login);
    }

    #[test]
    fn test_stale_response_after_logout_is_ignored() {
        let (mut vm, store) = vm_with(Some(&alice_token()));
        let stale = ticket_of(vm.dispatch(AppEvent::Started));
        vm.dispatch(AppEvent::LogoutClicked);

        // Nuevo login con otro usuario mientras el fetch viejo seguía en vuelo
        vm.dispatch(AppEvent::LoginSubmitted(Credentials::new("bob", "pw")));
        let bob = fake_token(r#"{"sub":"bob"}"#);
        let fresh = ticket_of(vm.dispatch(AppEvent::LoginSucceeded(bob.clone())));
        assert_ne!(stale, fresh);

        vm.dispatch(AppEvent::DashboardLoaded {
            ticket: stale.clone(),
            data: sample_data(),
        });
        assert_eq!(vm.state().dashboard, None);

        vm.dispatch(AppEvent::DashboardFailed {
            ticket: stale,
            error: DashboardError::SessionInvalid,
        });
        assert_eq!(vm.state().view, View::Dashboard);
        assert_eq!(store.get(), Some(bob));
        assert_eq!(vm.state().welcome_name, "bob");
    }

    #[test]
    fn test_late_login_response_after_view_change_is_ignored() {
        let (mut vm, store) = vm_with(None);
        vm.dispatch(AppEvent::Started);

        assert_eq!(vm.dispatch(AppEvent::LoginSucceeded(alice_token())), None);
        assert_eq!(store.get(), None);
        assert_eq!(vm.state().view, View::Login);
    }

    #[test]
    fn test_malformed_stored_token_goes_back_to_login() {
        let (mut vm, store) = vm_with(Some("garbage"));
        assert_eq!(vm.dispatch(AppEvent::Started), None);
        assert_eq!(vm.state().view, View::Login);
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_unusual_claim_types_keep_the_session() {
        for payload in [r#"{"sub":42,"exp":1.7e9}"#, r#"{"sub":"alice","exp":1700000000.5}"#] {
            let token = fake_token(payload);
            let (mut vm, store) = vm_with(Some(&token));

            ticket_of(vm.dispatch(AppEvent::Started));

            assert_eq!(vm.state().view, View::Dashboard);
            assert_eq!(store.get(), Some(token));
        }
    }

    #[test]
    fn test_numeric_sub_is_shown_as_text() {
        let token = fake_token(r#"{"sub":42}"#);
        let (mut vm, _store) = vm_with(Some(&token));
        vm.dispatch(AppEvent::Started);
        assert_eq!(vm.state().welcome_name, "42");
    }

    #[test]
    fn test_non_object_payload_goes_back_to_login() {
        let (mut vm, store) = vm_with(Some(&fake_token("[1,2]")));
        assert_eq!(vm.dispatch(AppEvent::Started), None);
        assert_eq!(vm.state().view, View::Login);
        assert_eq!(store.get(), None);
    }
}
