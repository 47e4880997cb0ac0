use kalkulus::cli::Cli;
use kalkulus::config::{Config, ConfigLoader, OutputFormat};
use kalkulus::pricing::{self, RankedTier};
use kalkulus::report::{render_json, render_text, render_tier_cost, PricingReport};
use kalkulus::utils::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    // Handle configuration commands
    if cli.init {
        Config::init()?;
        return Ok(());
    }

    if cli.print {
        ConfigLoader::load().print()?;
        return Ok(());
    }

    if cli.check {
        let config = Config::load()?;
        config.check()?;
        println!("✓ Configuration valid");
        return Ok(());
    }

    let config = ConfigLoader::load();

    let settings = match cli.resolve(&config) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.chart {
        #[cfg(feature = "tui")]
        {
            let mut app = kalkulus::ui::TuiApp::new(settings.quantity)?;
            app.run()?;
        }
        #[cfg(not(feature = "tui"))]
        {
            eprintln!("TUI feature is not enabled. Please install with --features tui");
            std::process::exit(1);
        }
        return Ok(());
    }

    if let Some(tier) = cli.tier {
        let report = pricing::evaluate(tier, settings.quantity);
        match settings.format {
            OutputFormat::Text => println!("{}", render_tier_cost(tier, &report)),
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&RankedTier { tier, report })?)
            }
        }
        return Ok(());
    }

    let report = PricingReport::compute(settings.quantity);
    match settings.format {
        OutputFormat::Text => println!("{}", render_text(&report, settings.color)),
        OutputFormat::Json => println!("{}", render_json(&report)?),
    }

    Ok(())
}
