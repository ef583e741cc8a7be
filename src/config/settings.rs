#[derive(Clone)]
pub struct AuthSettings {
    pub admin_password: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        // Same fallback the hosted frontend shipped with
        let admin_password =
            std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());
        Self { admin_password }
    }
}

#[derive(Clone)]
pub struct StandingsSettings {
    pub bust_club_limit: usize,
}

impl Default for StandingsSettings {
    fn default() -> Self {
        Self {
            bust_club_limit: 10,
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub auth: AuthSettings,
    pub standings: StandingsSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            auth: AuthSettings::default(),
            standings: StandingsSettings::default(),
        }
    }
}
