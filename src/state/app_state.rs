// ============================================================================
// APP STATE - Estado compartido (Rc<RefCell>) + bucle de eventos
// ============================================================================
// Todo cambio de estado entra como `AppEvent` por `send`; la cola se vacía
// en un único sitio, así que las transiciones nunca se solapan aunque los
// futures terminen en cualquier orden.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;

use crate::services::GlooTransport;
use crate::state::{AppEvent, Command, EventQueue, SessionState};
use crate::stores::SessionStore;
use crate::viewmodels::{CommandRunner, SessionViewModel};

#[derive(Clone)]
pub struct AppState {
    pub session: Rc<RefCell<SessionViewModel>>,
    queue: EventQueue,
    dispatching: Rc<Cell<bool>>,
    render_scheduled: Rc<Cell<bool>>,
    runner: Rc<CommandRunner<GlooTransport>>,
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new(store: SessionStore) -> Self {
        Self {
            session: Rc::new(RefCell::new(SessionViewModel::new(store))),
            queue: EventQueue::new(),
            dispatching: Rc::new(Cell::new(false)),
            render_scheduled: Rc::new(Cell::new(false)),
            runner: Rc::new(CommandRunner::new(GlooTransport::new())),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Copia del estado de presentación actual
    pub fn snapshot(&self) -> SessionState {
        self.session.borrow().state().clone()
    }

    /// Encolar un evento y procesar la cola
    pub fn send(&self, event: AppEvent) {
        self.queue.push(event);

        // Llamada re-entrante: el bucle de fuera se encarga
        if self.dispatching.get() {
            return;
        }

        self.dispatching.set(true);
        while let Some(event) = self.queue.pop() {
            let command = self.session.borrow_mut().dispatch(event);
            if let Some(command) = command {
                self.spawn(command);
            }
        }
        self.dispatching.set(false);

        self.schedule_render();
    }

    fn spawn(&self, command: Command) {
        let state = self.clone();
        spawn_local(async move {
            let event = state.runner.run(command).await;
            state.send(event);
        });
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    // Varios eventos seguidos = un solo render
    fn schedule_render(&self) {
        if self.render_scheduled.replace(true) {
            return;
        }
        let state = self.clone();
        Timeout::new(0, move || {
            state.render_scheduled.set(false);
            state.notify_subscribers();
        })
        .forget();
    }

    fn notify_subscribers(&self) {
        let subscribers: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}
