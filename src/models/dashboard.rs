use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub repo_url: Option<String>,
}

impl Project {
    pub fn display_text(&self) -> String {
        format!("{} (ID: {})", self.name, self.id)
    }
}

/// Fila del leaderboard, en el orden que devuelve el servidor
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LeaderboardEntry {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    pub total_points: i64,
}

impl LeaderboardEntry {
    pub fn display_text(&self) -> String {
        format!("{} - {} points", self.username, self.total_points)
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Badge {
    pub name: String,
    pub description: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct BadgeAward {
    pub badge: Badge,
    #[serde(default)]
    pub awarded_date: Option<String>,
}

/// Las tres colecciones del dashboard, siempre completas (todo o nada)
#[derive(Clone, PartialEq, Debug, Default)]
pub struct DashboardData {
    pub projects: Vec<Project>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub badges: Vec<BadgeAward>,
}
