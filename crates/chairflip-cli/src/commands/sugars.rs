use crate::error::Result;
use crate::ui;
use chairflip::core::sugars::resolver::list_sugars;
use tracing::info;

pub fn run() -> Result<()> {
    let sugars = list_sugars();
    info!("Listing {} sugar template(s).", sugars.len());
    print!("{}", ui::render_sugars(&sugars));
    Ok(())
}
