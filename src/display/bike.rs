//! Bike profile display

use crate::config::Settings;
use crate::models::Bike;

pub fn format_bike_details(bike: &Bike, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!("Bike: {}\n", bike.name));
    output.push_str(&format!("  Make:      {}\n", bike.make));
    output.push_str(&format!("  Model:     {}\n", bike.model));
    output.push_str(&format!("  Year:      {}\n", bike.year));
    output.push_str(&format!(
        "  Odometer:  {} {}\n",
        bike.current_mileage,
        settings.distance_unit.label()
    ));
    output.push_str(&format!(
        "  Tank:      {:.1} {}\n",
        bike.fuel_capacity_l,
        settings.fuel_unit.label()
    ));
    output.push_str(&format!("  ID:        {}\n", bike.id));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bike_details() {
        let mut bike = Bike::new("Red Rocket");
        bike.current_mileage = 4200;
        let out = format_bike_details(&bike, &Settings::default());
        assert!(out.starts_with("Bike: Red Rocket"));
        assert!(out.contains("Odometer:  4200 km"));
        assert!(out.contains("Tank:      15.0 L"));
    }
}
