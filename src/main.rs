mod commands;
mod config;
mod discovery;
mod jira;
mod picker;
mod report;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok(); // Load .env file if it exists
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    commands::Cli::run()
}
