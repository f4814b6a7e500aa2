pub mod session_viewmodel;
pub mod command_runner;

pub use session_viewmodel::SessionViewModel;
pub use command_runner::CommandRunner;
