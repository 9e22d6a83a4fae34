use crate::cli::SubstituentsArgs;
use crate::error::Result;
use crate::ui;
use chairflip::core::strain::table::StrainTable;
use tracing::info;

const LISTING_PRECISION: usize = 2;

pub fn run(args: SubstituentsArgs) -> Result<()> {
    let table = match &args.strain_table {
        Some(path) => {
            info!("Loading custom strain constants from {:?}.", path);
            StrainTable::load(path)?
        }
        None => StrainTable::standard(),
    };

    let entries = table.entries();
    info!(
        "Listing {} substituent group(s), {} custom.",
        entries.len(),
        table.custom_len()
    );
    print!("{}", ui::render_substituents(&entries, LISTING_PRECISION));
    Ok(())
}
