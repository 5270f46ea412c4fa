use crate::{
    runtime::{Component, ComponentContext},
    vehicle::Vehicle,
};

const DASHBOARD_HEADER: &str = "======= Vehicle Dashboard =======";
const DASHBOARD_FOOTER: &str = "=================================";

/// Dashboard view of a vehicle.
pub struct DashboardView<'a>(pub &'a Vehicle);

impl std::fmt::Display for DashboardView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let vehicle = self.0;

        writeln!(f, "{}", DASHBOARD_HEADER)?;
        writeln!(f, "{}", vehicle.speed)?;
        writeln!(f, "{}", vehicle.fuel)?;
        writeln!(f, "{}", vehicle.temperature)?;
        writeln!(f, "{}", vehicle.battery)?;
        writeln!(f, "{}", vehicle.radar)?;
        writeln!(
            f,
            "Throttle Position: {:.2}%",
            vehicle.engine.throttle_position()
        )?;
        writeln!(f, "Brake Pressure: {:.2}%", vehicle.brake.brake_pressure())?;
        writeln!(f, "Current Gear: {}", vehicle.transmission.gear())?;
        writeln!(f, "{}", DASHBOARD_FOOTER)
    }
}

/// Render a snapshot of the vehicle.
pub fn render(vehicle: &Vehicle) -> String {
    DashboardView(vehicle).to_string()
}

/// Vehicle dashboard.
///
/// Prints the vehicle snapshot to standard output on every tick.
pub struct Dashboard;

impl<Cnf: Clone> Component<Cnf> for Dashboard {
    fn new(_config: Cnf) -> Self
    where
        Self: Sized,
    {
        Self
    }

    fn tick(&mut self, ctx: &mut ComponentContext) {
        ctx.log.append("Displaying vehicle dashboard.");

        println!("\n{}", DashboardView(&ctx.vehicle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_initial() {
        let expected = "\
======= Vehicle Dashboard =======
Speed: 0 km/h
Fuel Level: 50.00 liters
Engine Temperature: 70.00 °C
Battery Charge: 100.00%, Battery Temperature: 25.00 °C
Front Vehicle Distance: 100.00 meters
Throttle Position: 0.00%
Brake Pressure: 0.00%
Current Gear: 1
=================================
";

        assert_eq!(render(&Vehicle::default()), expected);
    }

    #[test]
    fn test_render_snapshot() {
        let mut vehicle = Vehicle::default();

        vehicle.speed.set_speed(130.0);
        vehicle.fuel.set_level(3.5);
        vehicle.temperature.set_temperature(83.0);
        vehicle.battery.set_charge(19.994);
        vehicle.battery.set_temperature(25.125);
        vehicle.radar.set_distance(15.0);
        vehicle.engine.set_throttle_position(30.0);
        vehicle.brake.set_brake_pressure(50.0);
        vehicle.transmission.change_gear(4);

        let dashboard = render(&vehicle);
        let lines: Vec<&str> = dashboard.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "Speed: 130 km/h");
        assert_eq!(lines[2], "Fuel Level: 3.50 liters");
        assert_eq!(lines[3], "Engine Temperature: 83.00 °C");
        assert_eq!(lines[5], "Front Vehicle Distance: 15.00 meters");
        assert_eq!(lines[6], "Throttle Position: 30.00%");
        assert_eq!(lines[7], "Brake Pressure: 50.00%");
        assert_eq!(lines[8], "Current Gear: 4");
    }

    #[test]
    fn test_view_matches_render() {
        let mut vehicle = Vehicle::default();
        vehicle.speed.set_speed(88.0);

        assert_eq!(format!("{}", DashboardView(&vehicle)), render(&vehicle));
    }

    #[test]
    fn test_render_is_pure() {
        let vehicle = Vehicle::default();
        let snapshot = vehicle.clone();

        let _ = render(&vehicle);
        let _ = render(&vehicle);

        assert_eq!(vehicle, snapshot);
    }
}
