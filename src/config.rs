// src/config.rs

use std::collections::HashMap;
use std::env;

use dotenvy::dotenv;

/// Default read-access credential table, matching the reference deployment.
const DEFAULT_USERS: &str = "alice:wonderland,bob:builder,clementine:mandarine";
const DEFAULT_ADMIN_PASSWORD: &str = "4dm1N";

#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the CSV file the dataset is loaded from at startup.
    pub questions_csv: String,

    /// Static username -> password table granting read access. Fixed at
    /// process start; never mutated afterwards.
    pub users: HashMap<String, String>,

    /// Secret of the single 'admin' write-access credential, kept outside
    /// the user table.
    pub admin_password: String,

    pub rust_log: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let questions_csv =
            env::var("QUESTIONS_CSV").unwrap_or_else(|_| "questions.csv".to_string());

        let users = parse_users(&env::var("API_USERS").unwrap_or_else(|_| DEFAULT_USERS.to_string()));

        let admin_password =
            env::var("ADMIN_PASSWORD").unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string());

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);

        Self {
            questions_csv,
            users,
            admin_password,
            rust_log,
            port,
        }
    }
}

/// Parses comma-separated `user:password` pairs. Entries without a colon are
/// ignored.
fn parse_users(raw: &str) -> HashMap<String, String> {
    raw.split(',')
        .filter_map(|pair| pair.split_once(':'))
        .map(|(user, pass)| (user.trim().to_string(), pass.trim().to_string()))
        .collect()
}
