use dotenvy::dotenv;
use std::env;

pub struct Config {
    pub owner_name: String,
    pub owner_title: String,
}

impl Config {
    pub fn load() -> Self {
        dotenv().ok();
        Self {
            owner_name: env::var("FOLIO_OWNER_NAME").unwrap_or_else(|_| "Pranshu Yadav".to_string()),
            owner_title: env::var("FOLIO_OWNER_TITLE")
                .unwrap_or_else(|_| "Data Engineer & AI Developer".to_string()),
        }
    }
}
