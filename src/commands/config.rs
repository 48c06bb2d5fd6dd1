use anyhow::Result;
use eventboard_core::board::Board;
use owo_colors::OwoColorize;

/// Settings to change; `None` leaves a setting as it is.
#[derive(Default)]
pub struct ConfigChanges {
    pub data_file: Option<String>,
    pub upcoming_days: Option<i64>,
    pub calendar_weeks: Option<u32>,
}

impl ConfigChanges {
    fn is_empty(&self) -> bool {
        self.data_file.is_none() && self.upcoming_days.is_none() && self.calendar_weeks.is_none()
    }
}

pub fn run(board: &mut Board, changes: ConfigChanges) -> Result<()> {
    if !changes.is_empty() {
        board.update_config(|config| {
            if let Some(path) = changes.data_file {
                config.data_file = path.into();
            }
            if let Some(days) = changes.upcoming_days {
                config.upcoming_days = days;
            }
            if let Some(weeks) = changes.calendar_weeks {
                config.calendar_weeks = weeks;
            }
        })?;
        println!("{}", "Config updated".green());
        println!();
    }

    let config = board.config();

    println!("{}", "Paths".bold());
    println!("  Config:  {}", board.config_path().display());
    println!("  Events:  {}", config.data_path().display());
    println!();
    println!("{}", "Views".bold());
    println!("  Upcoming window:  {} days", config.upcoming_days);
    println!("  Calendar window:  {} weeks", config.calendar_weeks);

    Ok(())
}
