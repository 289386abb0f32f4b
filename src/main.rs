// Guild Wars 2 collection goal tracker - Main Entry Point

use gw2_tracker::targets::{self, PromptSelector, TargetSelector};
use gw2_tracker::verbosity::set_verbosity_level;
use gw2_tracker::{args, v_error, v_info, FixedSelector, Gw2Client, RefreshLoop, TrackerSettings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::parse();
    set_verbosity_level(args.verbose);
    println!();

    let mut settings = TrackerSettings::load_or_create(&args.settings)?;
    settings.apply_overrides(&args)?;

    if args.list_targets {
        targets::print_available(&targets::discover(&settings.targets.directory)?);
        return Ok(());
    }

    if let Err(e) = settings.validate() {
        v_error!("❌ {}", e);
        return Err(e.into());
    }
    settings.print_summary();

    let client = Gw2Client::new(&settings.api)?;

    // Fail on a bad key before asking the user for anything.
    if let Err(e) = gw2_tracker::operations::verify_token(&client).await {
        v_error!("❌ {}", e);
        return Err(e.into());
    }

    let selector: Box<dyn TargetSelector> = match &args.target {
        Some(target) => Box::new(FixedSelector::parse(target)),
        None => Box::new(PromptSelector),
    };
    let target_config = match targets::choose(&settings.targets.directory, selector.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            v_error!("❌ {}", e);
            return Err(e.into());
        }
    };
    v_info!("🎯 Loaded targets: {} by {}", target_config.description, target_config.author);

    let mut refresh = RefreshLoop::new(&client, &target_config, &settings.display, std::io::stdout())
        .with_max_cycles(args.cycles)
        .token_verified();
    match refresh.run().await {
        Ok(cycles) => {
            v_info!("🏁 Finished after {} render(s)", cycles);
            Ok(())
        }
        Err(e) => {
            v_error!("\n❌ Refresh failed: {}", e);
            Err(e.into())
        }
    }
}
