use crate::cli::AnalyzeArgs;
use crate::config::PartialAnalysisConfig;
use crate::error::Result;
use crate::ui;
use chairflip::core::models::molecule::MoleculeState;
use chairflip::core::sugars::resolver::instantiate_sugar;
use chairflip::workflows::analyze;
use tracing::{debug, info};

pub fn run(args: AnalyzeArgs) -> Result<()> {
    info!("Starting chair conformer analysis.");

    let (config, output) = PartialAnalysisConfig::for_args(&args)?.merge_with_cli(&args)?;
    debug!("Resolved analysis config: {:?}", config);

    let state = build_state(&args)?;
    let report = analyze::run(&state, &config)?;

    print!("{}", ui::render_report(&report, output.precision));
    Ok(())
}

/// Builds the molecule described by the arguments, already in the requested chair.
fn build_state(args: &AnalyzeArgs) -> Result<MoleculeState> {
    let state = match &args.sugar {
        Some(name) => {
            info!("Building the {} anomer of '{}'.", args.anomer, name);
            instantiate_sugar(&name.to_ascii_lowercase(), args.anomer)?
        }
        None => args
            .substituents
            .iter()
            .fold(MoleculeState::new(), |state, sub| {
                debug!("Placing substituent {}.", sub);
                state.set_substituent(sub.carbon_index, sub.position, &sub.group)
            }),
    };

    Ok(if args.flipped {
        state.flip_chair()
    } else {
        state
    })
}
