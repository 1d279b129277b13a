use serde::{Deserialize, Serialize};
use std::fs;

use crate::models::Endpoint;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_matches_url")]
    pub matches_url: String,

    #[serde(default = "default_competitions_url")]
    pub competitions_url: String,
}

fn default_matches_url() -> String {
    "https://jsonmock.hackerrank.com/api/football_matches".to_string()
}

fn default_competitions_url() -> String {
    "https://jsonmock.hackerrank.com/api/football_competitions".to_string()
}

impl Default for Config {
    fn default() -> Config {
        Config {
            matches_url: default_matches_url(),
            competitions_url: default_competitions_url(),
        }
    }
}

impl Config {
    pub fn get_url(&self, endpoint: &Endpoint) -> &str {
        match endpoint {
            Endpoint::Matches => self.matches_url.as_str(),
            Endpoint::Competitions => self.competitions_url.as_str(),
        }
    }
}

pub fn get_config() -> Config {
    let path = std::env::var("CONFIG_PATH").ok()
        .unwrap_or_else(|| "./deployment/config.json".to_string());
    match fs::read_to_string(&path) {
        Ok(data) => {
            let result: Config = serde_json::from_str(&data)
                .unwrap_or_else(|_| panic!("{}", &format!("Could not parse JSON at {path}!")));
            println!("[CONFIG] {:?}", result);
            result
        }
        // No config file => public mock API
        Err(_) => Config::default(),
    }
}
