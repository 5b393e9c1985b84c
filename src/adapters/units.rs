use crate::domain::ports::UnitConverter;
use crate::domain::units::{Length, LengthUnit, Mass, MassUnit};

/// Exact international (1959) conversion factors.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardUnits;

fn grams_per(unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Grams => 1.0,
        MassUnit::Kilograms => 1000.0,
        MassUnit::Ounces => 28.349523125,
        MassUnit::Pounds => 453.59237,
    }
}

fn centimetres_per(unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Millimetres => 0.1,
        LengthUnit::Centimetres => 1.0,
        LengthUnit::Metres => 100.0,
        LengthUnit::Inches => 2.54,
        LengthUnit::Feet => 30.48,
    }
}

impl UnitConverter for StandardUnits {
    fn convert_mass(&self, mass: &Mass, target: MassUnit) -> Mass {
        if mass.unit == target {
            return *mass;
        }
        Mass::new(mass.amount * grams_per(mass.unit) / grams_per(target), target)
    }

    fn convert_length(&self, length: &Length, target: LengthUnit) -> Length {
        if length.unit == target {
            return *length;
        }
        Length::new(
            length.amount * centimetres_per(length.unit) / centimetres_per(target),
            target,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_mass_conversions() {
        let units = StandardUnits;
        assert!(close(units.convert_mass(&Mass::pounds(1.0), MassUnit::Ounces).amount, 16.0));
        assert!(close(units.convert_mass(&Mass::kilograms(1.0), MassUnit::Grams).amount, 1000.0));
        assert!(close(
            units.convert_mass(&Mass::grams(453.59237), MassUnit::Pounds).amount,
            1.0
        ));
    }

    #[test]
    fn test_length_conversions() {
        let units = StandardUnits;
        assert!(close(
            units.convert_length(&Length::inches(1.0), LengthUnit::Centimetres).amount,
            2.54
        ));
        assert!(close(
            units.convert_length(&Length::new(1.0, LengthUnit::Feet), LengthUnit::Inches).amount,
            12.0
        ));
    }

    #[test]
    fn test_same_unit_is_identity() {
        let mass = Mass::ounces(3.3);
        assert_eq!(StandardUnits.convert_mass(&mass, MassUnit::Ounces), mass);
    }
}
