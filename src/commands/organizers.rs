use anyhow::Result;
use eventboard_core::Organizer;

pub fn run() -> Result<()> {
    for organizer in Organizer::ALL {
        println!("{}", organizer);
    }
    Ok(())
}
