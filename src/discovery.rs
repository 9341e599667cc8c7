use anyhow::{bail, Context, Result};

use crate::jira::{Board, JiraClient, Sprint};

/// Outcome of probing one board: its active sprints, or the reason the board
/// was skipped.
#[derive(Debug)]
pub struct BoardScan {
    pub board: Board,
    pub result: Result<Vec<Sprint>>,
}

#[derive(Debug)]
pub struct ScanReport {
    scans: Vec<BoardScan>,
}

impl ScanReport {
    pub fn scans(&self) -> &[BoardScan] {
        &self.scans
    }

    /// All active sprints found, concatenated in board order. Failed boards
    /// contribute nothing; a sprint shared by overlapping boards appears once
    /// per board.
    pub fn into_sprints(self) -> Vec<Sprint> {
        self.scans
            .into_iter()
            .filter_map(|scan| scan.result.ok())
            .flatten()
            .collect()
    }
}

/// Checks every visible board for active sprints. A board that fails to list
/// its sprints is recorded and skipped; only the board list itself failing,
/// or coming back empty, aborts the scan.
pub fn scan_boards(client: &JiraClient) -> Result<ScanReport> {
    let boards = client.list_boards().context("Failed to fetch boards")?;
    if boards.is_empty() {
        bail!("no boards found");
    }

    let scans = boards
        .into_iter()
        .map(|board| {
            let result = client.list_active_sprints(board.id);
            BoardScan { board, result }
        })
        .collect();

    Ok(ScanReport { scans })
}
