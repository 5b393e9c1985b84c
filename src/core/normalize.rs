//! Carrier-specific normalization of result fields. None of these lookups can
//! fail: unknown input always has a defined fallback.

/// Legacy currency codes some carriers still report, keyed by carrier.
const LEGACY_CURRENCIES: &[(&str, &str, &str)] = &[
    ("fedex", "UKL", "GBP"),
    ("fedex", "RMB", "CNY"),
    ("fedex", "SID", "SGD"),
    ("fedex", "NTD", "TWD"),
    ("fedex", "DHS", "AED"),
    ("fedex", "JYE", "JPY"),
    ("fedex", "SFR", "CHF"),
    ("fedex", "WON", "KRW"),
];

struct ServiceCatalog {
    carrier: &'static str,
    brand: &'static str,
    services: &'static [(&'static str, &'static str)],
}

const FEDEX_SERVICES: &[(&str, &str)] = &[
    ("PRIORITY_OVERNIGHT", "FedEx Priority Overnight"),
    ("PRIORITY_OVERNIGHT_SATURDAY_DELIVERY", "FedEx Priority Overnight Saturday Delivery"),
    ("FEDEX_2_DAY", "FedEx 2 Day"),
    ("FEDEX_2_DAY_SATURDAY_DELIVERY", "FedEx 2 Day Saturday Delivery"),
    ("STANDARD_OVERNIGHT", "FedEx Standard Overnight"),
    ("FIRST_OVERNIGHT", "FedEx First Overnight"),
    ("FIRST_OVERNIGHT_SATURDAY_DELIVERY", "FedEx First Overnight Saturday Delivery"),
    ("FEDEX_EXPRESS_SAVER", "FedEx Express Saver"),
    ("FEDEX_1_DAY_FREIGHT", "FedEx 1 Day Freight"),
    ("FEDEX_2_DAY_FREIGHT", "FedEx 2 Day Freight"),
    ("FEDEX_3_DAY_FREIGHT", "FedEx 3 Day Freight"),
    ("FEDEX_GROUND", "FedEx Ground"),
    ("GROUND_HOME_DELIVERY", "FedEx Ground Home Delivery"),
    ("INTERNATIONAL_PRIORITY", "FedEx International Priority"),
    ("INTERNATIONAL_PRIORITY_SATURDAY_DELIVERY", "FedEx International Priority Saturday Delivery"),
    ("INTERNATIONAL_ECONOMY", "FedEx International Economy"),
    ("INTERNATIONAL_FIRST", "FedEx International First"),
    ("INTERNATIONAL_PRIORITY_FREIGHT", "FedEx International Priority Freight"),
    ("INTERNATIONAL_ECONOMY_FREIGHT", "FedEx International Economy Freight"),
    ("INTERNATIONAL_GROUND", "FedEx International Ground"),
    ("SMART_POST", "FedEx SmartPost"),
];

const UPS_SERVICES: &[(&str, &str)] = &[
    ("01", "UPS Next Day Air"),
    ("02", "UPS Second Day Air"),
    ("03", "UPS Ground"),
    ("07", "UPS Worldwide Express"),
    ("08", "UPS Worldwide Expedited"),
    ("11", "UPS Standard"),
    ("12", "UPS Three-Day Select"),
    ("13", "UPS Next Day Air Saver"),
    ("14", "UPS Next Day Air Early A.M."),
    ("54", "UPS Worldwide Express Plus"),
    ("59", "UPS Second Day Air A.M."),
    ("65", "UPS Saver"),
];

const CATALOGS: &[ServiceCatalog] = &[
    ServiceCatalog {
        carrier: "fedex",
        brand: "FedEx",
        services: FEDEX_SERVICES,
    },
    ServiceCatalog {
        carrier: "ups",
        brand: "UPS",
        services: UPS_SERVICES,
    },
];

fn carrier_key(carrier: &str) -> String {
    carrier
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Maps a carrier's legacy currency code to its ISO 4217 equivalent.
/// Unmapped codes pass through exactly as given.
pub fn normalize_currency(carrier: &str, code: &str) -> String {
    let key = carrier_key(carrier);
    LEGACY_CURRENCIES
        .iter()
        .find(|(c, legacy, _)| *c == key && legacy.eq_ignore_ascii_case(code.trim()))
        .map_or_else(|| code.to_string(), |(_, _, iso)| iso.to_string())
}

/// Human-readable name for a carrier service code.
pub fn service_name_for_code(carrier: &str, code: &str) -> String {
    let key = carrier_key(carrier);
    let code = code.trim();
    let Some(catalog) = CATALOGS.iter().find(|catalog| catalog.carrier == key) else {
        return humanize(code);
    };

    if let Some((_, name)) = catalog
        .services
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(code))
    {
        return name.to_string();
    }

    tracing::debug!(carrier, code, "service code not in catalog, humanizing");
    branded(catalog.brand, &humanize(code))
}

/// `SOME_WEIRD_RATE` -> `Some Weird Rate`.
pub fn humanize(code: &str) -> String {
    code.split(|c: char| c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn branded(brand: &str, name: &str) -> String {
    match name.split_once(' ') {
        Some((first, rest)) if first.eq_ignore_ascii_case(brand) => format!("{} {}", brand, rest),
        None if name.eq_ignore_ascii_case(brand) => brand.to_string(),
        _ if name.is_empty() => brand.to_string(),
        _ => format!("{} {}", brand, name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_catalog_entry_resolves() {
        for (code, name) in FEDEX_SERVICES {
            assert_eq!(service_name_for_code("FedEx", code), *name);
        }
        for (code, name) in UPS_SERVICES {
            assert_eq!(service_name_for_code("UPS", code), *name);
        }
    }

    #[test]
    fn test_unknown_codes_are_humanized_with_brand() {
        assert_eq!(
            service_name_for_code("FedEx", "FEDEX_EXPRESS_SAVER_SATURDAY_DELIVERY"),
            "FedEx Express Saver Saturday Delivery"
        );
        assert_eq!(
            service_name_for_code("FedEx", "SOME_WEIRD_RATE"),
            "FedEx Some Weird Rate"
        );
        assert_eq!(service_name_for_code("UPS", "96"), "UPS 96");
    }

    #[test]
    fn test_unknown_carrier_uses_plain_humanize() {
        assert_eq!(
            service_name_for_code("Canada Post", "PRIORITY_WORLDWIDE"),
            "Priority Worldwide"
        );
    }

    #[test]
    fn test_currency_correction() {
        assert_eq!(normalize_currency("FedEx", "UKL"), "GBP");
        assert_eq!(normalize_currency("fedex", "rmb"), "CNY");
        assert_eq!(normalize_currency("FedEx", "CAD"), "CAD");
        assert_eq!(normalize_currency("UPS", "UKL"), "UKL");
        assert_eq!(normalize_currency("FedEx", "cad"), "cad");
        assert_eq!(normalize_currency("UPS", " usd"), " usd");
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("INTERNATIONAL_GROUND"), "International Ground");
        assert_eq!(humanize(""), "");
    }
}
