// Backend routes and the Riot path the backend proxies to

pub const SEARCH_PATH: &str = "/search";
pub const SUMMONER_BY_NAME: &str = "/lol/summoner/v4/summoners/by-name";

pub fn search_url(backend_base: &str) -> String {
    format!("{}{}", backend_base.trim_end_matches('/'), SEARCH_PATH)
}

/// The name is a single path segment, so `/`, `?` and `#` are escaped.
pub fn summoner_by_name(name: &str) -> String {
    format!("{}/{}", SUMMONER_BY_NAME, urlencoding::encode(name))
}
