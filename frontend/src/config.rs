// API host used by the booking and worker forms. Set API_BASE_URL at build
// time to point a build at a different host.
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or("http://localhost:3001")  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or("")  // Same origin in production
}

pub fn api_url(path: &str) -> String {
    join_url(get_backend_url(), path)
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

/// Delay before a submitted form flips back to an empty draft.
pub const RESET_DELAY_MS: u32 = 3_000;
pub const TESTIMONIAL_INTERVAL_MS: u32 = 5_000;
pub const TOAST_LIFETIME_MS: u32 = 4_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_keeps_relative_paths_relative() {
        assert_eq!(join_url("", "/api/bookings"), "/api/bookings");
    }

    #[test]
    fn join_url_does_not_double_slashes() {
        assert_eq!(join_url("http://localhost:3001/", "/api/workers"), "http://localhost:3001/api/workers");
        assert_eq!(join_url("https://api.example.com", "api/workers"), "https://api.example.com/api/workers");
    }
}
