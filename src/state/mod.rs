// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + cola de eventos
// ============================================================================

pub mod session_state;
pub mod events;
pub mod app_state;

pub use session_state::*;
pub use events::*;
pub use app_state::*;
