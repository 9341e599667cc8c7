use std::io::{self, Write};

use anyhow::{bail, Result};
use crossterm::{
    cursor::{self, Hide, Show},
    event::{self, Event, KeyCode},
    execute,
    style::{Color, Print, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};

use crate::jira::Sprint;

/// Picks a sprint from the candidates. A single candidate is returned
/// without prompting; several open an interactive menu on stderr. An empty
/// candidate list and a cancelled menu are both errors.
pub fn select_sprint(sprints: &[Sprint]) -> Result<&Sprint> {
    select_sprint_with(sprints, prompt_choice)
}

fn select_sprint_with<F>(sprints: &[Sprint], choose: F) -> Result<&Sprint>
where
    F: FnOnce(&[Sprint]) -> Result<usize>,
{
    if sprints.is_empty() {
        bail!("no active sprints found");
    }
    if sprints.len() == 1 {
        return Ok(&sprints[0]);
    }

    let index = choose(sprints)?;
    Ok(&sprints[index])
}

fn prompt_choice(sprints: &[Sprint]) -> Result<usize> {
    let mut menu = Menu::new(sprints);
    let mut stderr = io::stderr();

    terminal::enable_raw_mode()?;
    execute!(stderr, Hide)?;

    let mut result = None;

    loop {
        menu.render(&mut stderr)?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Up => menu.move_up(),
                KeyCode::Down => menu.move_down(),
                KeyCode::Enter => {
                    result = Some(menu.selected);
                    break;
                }
                KeyCode::Esc => break,
                _ => {}
            }
        }
    }

    terminal::disable_raw_mode()?;
    execute!(stderr, Show, Print("\n"))?;

    result.ok_or_else(|| anyhow::anyhow!("sprint selection cancelled"))
}

struct Menu<'a> {
    sprints: &'a [Sprint],
    selected: usize,
}

impl<'a> Menu<'a> {
    fn new(sprints: &'a [Sprint]) -> Self {
        Self {
            sprints,
            selected: 0,
        }
    }

    fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    fn move_down(&mut self) {
        if !self.sprints.is_empty() && self.selected < self.sprints.len() - 1 {
            self.selected += 1;
        }
    }

    fn label(sprint: &Sprint) -> String {
        format!("{} ({})", sprint.name, sprint.state)
    }

    fn render(&self, out: &mut impl Write) -> Result<()> {
        execute!(
            out,
            Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            Print("Select an active sprint (Enter to confirm, Esc to cancel):\n\n")
        )?;

        for (i, sprint) in self.sprints.iter().enumerate() {
            let prefix = if i == self.selected { "> " } else { "  " };
            let color = if i == self.selected {
                Color::Green
            } else {
                Color::Reset
            };

            execute!(
                out,
                SetForegroundColor(color),
                Print(format!("{}{}\n", prefix, Self::label(sprint))),
                SetForegroundColor(Color::Reset)
            )?;
        }

        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprint(id: u64, name: &str) -> Sprint {
        Sprint {
            id,
            name: name.to_string(),
            state: "active".to_string(),
            start_date: None,
            end_date: None,
            origin_board_id: None,
        }
    }

    #[test]
    fn test_empty_candidates_fail() {
        let result = select_sprint_with(&[], |_| panic!("prompt should not be invoked"));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("no active sprints found"));
    }

    #[test]
    fn test_single_candidate_skips_prompt() -> Result<()> {
        let sprints = [sprint(10, "Sprint 5")];
        let selected = select_sprint_with(&sprints, |_| panic!("prompt should not be invoked"))?;
        assert_eq!(selected.id, 10);
        Ok(())
    }

    #[test]
    fn test_multiple_candidates_use_choice() -> Result<()> {
        let sprints = [sprint(10, "Sprint 5"), sprint(11, "Sprint 6")];
        let selected = select_sprint_with(&sprints, |_| Ok(1))?;
        assert_eq!(selected.id, 11);
        Ok(())
    }

    #[test]
    fn test_cancelled_choice_propagates() {
        let sprints = [sprint(10, "Sprint 5"), sprint(11, "Sprint 6")];
        let result = select_sprint_with(&sprints, |_| bail!("sprint selection cancelled"));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("sprint selection cancelled"));
    }

    #[test]
    fn test_menu_movement_stays_in_bounds() {
        let sprints = [sprint(10, "Sprint 5"), sprint(11, "Sprint 6")];
        let mut menu = Menu::new(&sprints);

        assert_eq!(menu.selected, 0);
        menu.move_up();
        assert_eq!(menu.selected, 0);

        menu.move_down();
        assert_eq!(menu.selected, 1);
        menu.move_down();
        assert_eq!(menu.selected, 1);

        menu.move_up();
        assert_eq!(menu.selected, 0);
    }

    #[test]
    fn test_menu_label() {
        assert_eq!(Menu::label(&sprint(10, "Sprint 5")), "Sprint 5 (active)");
    }
}
