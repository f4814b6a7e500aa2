// Rutas del backend

pub const TOKEN_ENDPOINT: &str = "/auth/token";
pub const PROJECTS_ENDPOINT: &str = "/api/v1/projects";
pub const LEADERBOARD_ENDPOINT: &str = "/api/v1/leaderboard";
pub const BADGES_ENDPOINT: &str = "/api/v1/users/me/badges";

// Textos de estado vacío (literales, se muestran tal cual)

pub const EMPTY_PROJECTS: &str = "No projects analyzed yet. Use the API docs to analyze one!";
pub const EMPTY_LEADERBOARD: &str = "No points scored yet! Resolve an issue to get on the board.";
pub const EMPTY_BADGES: &str = "No badges earned yet. Keep fixing issues!";

// Mensajes de login

pub const LOGIN_FAILED_FALLBACK: &str = "Login failed.";
pub const LOGIN_GENERIC_ERROR: &str = "An error occurred.";
