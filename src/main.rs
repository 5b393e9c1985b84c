use anyhow::Context;
use clap::Parser;
use shipquote::utils::error::ErrorCategory;
use shipquote::utils::logger;
use shipquote::{CliConfig, Package, ShippingError, WeightKind};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match cli.load_file_config() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    if file_config.json_logs() {
        logger::init_json_logger(file_config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let options = cli.package_options(&file_config);
    let dimensions = cli.dimensions.iter().cloned();
    let package = match Package::new(cli.weight.as_str(), dimensions, &options) {
        Ok(package) => package,
        Err(e) => exit_with(&e),
    };

    if cli.json {
        let summary = serde_json::to_string_pretty(&package.summary())
            .context("serializing package summary")?;
        println!("{}", summary);
        return Ok(());
    }

    let summary = package.summary();
    println!("units:       {}", summary.units);
    println!("shape:       {:?}", summary.shape);
    println!("weight:      {}", package.weight(WeightKind::Actual));
    println!("volumetric:  {}", package.weight(WeightKind::Volumetric));
    println!("billable:    {}", package.weight(WeightKind::Billable));
    println!("axes (cm):   {:?}", summary.centimetres);
    println!("axes (in):   {:?}", summary.inches);
    println!("girth (cm):  {:.2}", summary.girth_cm);
    println!("volume (cm3): {:.2}", summary.volume_cm3);
    if let Some(value) = summary.value {
        let currency = summary
            .currency
            .as_ref()
            .map(|c| c.as_str())
            .unwrap_or("(no currency)");
        println!("value:       {} minor units {}", value, currency);
    }

    Ok(())
}

fn exit_with(e: &ShippingError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e);
    let exit_code = match e.category() {
        ErrorCategory::Input => 2,
        ErrorCategory::Configuration => 3,
        ErrorCategory::Carrier | ErrorCategory::Transport => 4,
        ErrorCategory::System => 1,
    };
    std::process::exit(exit_code);
}
