use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use log::{debug, info, warn};

use crate::config::Config;
use crate::discovery;
use crate::jira::JiraClient;
use crate::picker;
use crate::report;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Jira sprint report CLI - export an active sprint as a tab-separated table"
)]
#[command(
    long_about = "Finds the active sprints across every Jira board you can see, lets you pick \
    one, and prints its issues as tab-separated rows (link, epic, assignee) ready to paste \
    into a Confluence table. Configured via JIRA_URL, JIRA_EMAIL and JIRA_API_TOKEN."
)]
pub struct Cli {}

impl Cli {
    pub fn run() -> Result<()> {
        let _cli = Self::parse();

        let config = Config::from_env()?;
        let client = JiraClient::new(&config);
        run_report(&config, &client, &mut io::stdout())
    }
}

fn run_report(config: &Config, client: &JiraClient, out: &mut impl Write) -> Result<()> {
    info!("Fetching active sprints...");
    let scan = discovery::scan_boards(client)?;

    info!("Found {} boards", scan.scans().len());
    for entry in scan.scans() {
        match &entry.result {
            Ok(sprints) => debug!(
                "Board {} ({}) has {} active sprints",
                entry.board.id,
                entry.board.name,
                sprints.len()
            ),
            Err(err) => warn!(
                "Skipping board {} ({}): {:#}",
                entry.board.id, entry.board.name, err
            ),
        }
    }

    let sprints = scan.into_sprints();
    let sprint = picker::select_sprint(&sprints)?;

    info!("Fetching issues for sprint: {}", sprint.name);
    let issues = client.list_sprint_issues(sprint.id)?;

    out.write_all(report::render(&config.base_url, &issues).as_bytes())?;
    Ok(())
}
