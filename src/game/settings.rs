#[derive(Clone, Debug)]
pub struct Settings {
    pub round_size: usize,
    pub refresh_interval: u32,
    pub fetch_limit: u32,
    pub region: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            round_size: 10,
            refresh_interval: 5,
            fetch_limit: 50,
            region: "PL".to_owned(),
        }
    }
}
