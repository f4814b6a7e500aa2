pub mod app;
pub mod login;
pub mod dashboard;
pub mod lists;

pub use app::{render_app, update_app, AppElements};
pub use login::render_login;
pub use dashboard::render_dashboard;
pub use lists::{render_list, ListItem};
