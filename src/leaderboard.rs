use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: &'static str,
    pub points: i64,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub success: bool,
    pub items: Vec<LeaderboardEntry>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/leaderboard", get(leaderboard))
}

// Static data; there is no scoring pipeline behind this.
fn entries() -> Vec<LeaderboardEntry> {
    vec![
        LeaderboardEntry { rank: 1, name: "Anaya R.", points: 2450 },
        LeaderboardEntry { rank: 2, name: "You", points: 0 },
        LeaderboardEntry { rank: 3, name: "Rahul K.", points: 1650 },
        LeaderboardEntry { rank: 4, name: "Meera S.", points: 1280 },
        LeaderboardEntry { rank: 5, name: "Jacob T.", points: 980 },
    ]
}

pub async fn leaderboard() -> Json<LeaderboardResponse> {
    Json(LeaderboardResponse {
        success: true,
        items: entries(),
    })
}
