use crate::config::{PackageOptions, ShippingConfig};
use crate::domain::units::UnitSystem;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "parcel-measure")]
#[command(about = "Resolve a package's measurements and billable weight")]
pub struct CliConfig {
    /// Weight, either a bare number or a number with a unit (`2.5kg`).
    #[arg(long)]
    pub weight: String,

    /// Comma-separated dimensions, e.g. `10,20,30` or `4in,6in,8in`.
    #[arg(long, value_delimiter = ',')]
    pub dimensions: Vec<String>,

    #[arg(long, help = "Unit system for bare numbers (metric or imperial)")]
    pub units: Option<UnitSystem>,

    #[arg(long, help = "Declared value, e.g. 19.99")]
    pub value: Option<String>,

    #[arg(long, help = "Three-letter currency code of the declared value")]
    pub currency: Option<String>,

    #[arg(long, help = "Treat the package as a cylinder (tube)")]
    pub cylinder: bool,

    #[arg(long)]
    pub gift: bool,

    #[arg(long, help = "TOML file with [defaults] and [logging] sections")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Print the summary as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn load_file_config(&self) -> Result<ShippingConfig> {
        let config = match &self.config {
            Some(path) => ShippingConfig::from_file(path)?,
            None => ShippingConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Command-line flags override the file's `[defaults]`.
    pub fn package_options(&self, file_config: &ShippingConfig) -> PackageOptions {
        let mut options = file_config.package_options();
        if let Some(units) = self.units {
            options = options.units(units);
        }
        if let Some(value) = &self.value {
            options = options.value(value.as_str());
        }
        if let Some(currency) = &self.currency {
            options = options.currency(currency.as_str());
        }
        if self.cylinder {
            options = options.cylinder(true);
        }
        if self.gift {
            options = options.gift(true);
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_file_defaults() {
        let cli = CliConfig::parse_from([
            "parcel-measure",
            "--weight",
            "100",
            "--dimensions",
            "10,20,30",
            "--units",
            "imperial",
            "--value",
            "19.99",
            "--cylinder",
        ]);
        let file_config = ShippingConfig::from_toml_str("[defaults]\ncurrency = \"CAD\"\n").unwrap();
        let options = cli.package_options(&file_config);

        assert_eq!(cli.dimensions, vec!["10", "20", "30"]);
        assert_eq!(options.units, UnitSystem::Imperial);
        assert_eq!(options.currency.as_deref(), Some("CAD"));
        assert!(options.cylinder);
        assert!(options.value.is_some());
    }
}
