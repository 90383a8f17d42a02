// =============================================================================
// Factory Method: vehicles
// =============================================================================
//
// Each factory knows which fields its vehicle needs and asks a FieldSource
// for them. Callers only ever see `Box<dyn Vehicle>`.

use std::fmt;

use crate::console::{parse_field, FieldSource};
use crate::error::CreationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleKind {
    Car,
    Motorcycle,
    Truck,
    Bus,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 4] = [
        VehicleKind::Car,
        VehicleKind::Motorcycle,
        VehicleKind::Truck,
        VehicleKind::Bus,
    ];

    /// Maps a menu answer ("1" to "4") to a kind.
    pub fn from_choice(choice: &str) -> Result<Self, CreationError> {
        match choice.trim() {
            "1" => Ok(VehicleKind::Car),
            "2" => Ok(VehicleKind::Motorcycle),
            "3" => Ok(VehicleKind::Truck),
            "4" => Ok(VehicleKind::Bus),
            other => Err(CreationError::InvalidChoice(other.to_string())),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VehicleKind::Car => "Car",
            VehicleKind::Motorcycle => "Motorcycle",
            VehicleKind::Truck => "Truck",
            VehicleKind::Bus => "Bus",
        }
    }

    pub fn factory(self) -> Box<dyn VehicleFactory> {
        match self {
            VehicleKind::Car => Box::new(CarFactory),
            VehicleKind::Motorcycle => Box::new(MotorcycleFactory),
            VehicleKind::Truck => Box::new(TruckFactory),
            VehicleKind::Bus => Box::new(BusFactory),
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub trait Vehicle: fmt::Debug {
    fn drive(&self) -> String;
    fn refuel(&self) -> String;
    fn kind(&self) -> VehicleKind;
}

// =============================================================================
// Products
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub brand: String,
    pub model: String,
    pub fuel_type: String,
}

impl Vehicle for Car {
    fn drive(&self) -> String {
        format!("Car {} {} is driving.", self.brand, self.model)
    }

    fn refuel(&self) -> String {
        format!("Car refueled with {}.", self.fuel_type)
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Car
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Motorcycle {
    pub moto_type: String,
    pub engine_volume_cc: u32,
}

impl Vehicle for Motorcycle {
    fn drive(&self) -> String {
        format!(
            "{} motorcycle with {}cc is driving.",
            self.moto_type, self.engine_volume_cc
        )
    }

    fn refuel(&self) -> String {
        "Motorcycle refueled.".to_string()
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Motorcycle
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Truck {
    pub capacity_tons: f64,
    pub axles: u32,
}

impl Vehicle for Truck {
    fn drive(&self) -> String {
        format!("Truck with {} tons capacity is driving.", self.capacity_tons)
    }

    fn refuel(&self) -> String {
        "Truck refueled.".to_string()
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Truck
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bus {
    pub seats: u32,
}

impl Vehicle for Bus {
    fn drive(&self) -> String {
        format!("Bus with {} seats is driving.", self.seats)
    }

    fn refuel(&self) -> String {
        "Bus refueled.".to_string()
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Bus
    }
}

// =============================================================================
// Factories
// =============================================================================

pub trait VehicleFactory {
    fn create_vehicle(&self, source: &mut dyn FieldSource)
        -> Result<Box<dyn Vehicle>, CreationError>;
}

pub struct CarFactory;

impl VehicleFactory for CarFactory {
    fn create_vehicle(
        &self,
        source: &mut dyn FieldSource,
    ) -> Result<Box<dyn Vehicle>, CreationError> {
        let brand = source.field("Enter car brand")?;
        let model = source.field("Enter car model")?;
        let fuel_type = source.field("Enter fuel type")?;
        Ok(Box::new(Car {
            brand,
            model,
            fuel_type,
        }))
    }
}

pub struct MotorcycleFactory;

impl VehicleFactory for MotorcycleFactory {
    fn create_vehicle(
        &self,
        source: &mut dyn FieldSource,
    ) -> Result<Box<dyn Vehicle>, CreationError> {
        let moto_type = source.field("Enter motorcycle type")?;
        let engine_volume_cc = parse_field(source, "Enter engine volume (cc)")?;
        Ok(Box::new(Motorcycle {
            moto_type,
            engine_volume_cc,
        }))
    }
}

pub struct TruckFactory;

impl VehicleFactory for TruckFactory {
    fn create_vehicle(
        &self,
        source: &mut dyn FieldSource,
    ) -> Result<Box<dyn Vehicle>, CreationError> {
        let label = "Enter truck capacity (tons)";
        let capacity_tons: f64 = parse_field(source, label)?;
        if !capacity_tons.is_finite() || capacity_tons.is_sign_negative() {
            return Err(crate::error::InputError::invalid(
                label,
                capacity_tons.to_string(),
                "capacity must be a non-negative number",
            )
            .into());
        }
        let axles = parse_field(source, "Enter number of axles")?;
        Ok(Box::new(Truck {
            capacity_tons,
            axles,
        }))
    }
}

pub struct BusFactory;

impl VehicleFactory for BusFactory {
    fn create_vehicle(
        &self,
        source: &mut dyn FieldSource,
    ) -> Result<Box<dyn Vehicle>, CreationError> {
        let seats = parse_field(source, "Enter number of seats")?;
        Ok(Box::new(Bus { seats }))
    }
}

/// Resolves a menu choice and runs the matching factory.
pub fn create_from_choice(
    choice: &str,
    source: &mut dyn FieldSource,
) -> Result<Box<dyn Vehicle>, CreationError> {
    let kind = VehicleKind::from_choice(choice)?;
    log::info!("creating {kind} from menu choice {choice}");
    kind.factory().create_vehicle(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedAnswers;
    use crate::error::InputError;

    #[test]
    fn test_car_factory_messages() {
        let mut answers = ScriptedAnswers::new(["Toyota", "Camry", "gasoline"]);
        let car = CarFactory.create_vehicle(&mut answers).unwrap();

        assert_eq!(car.kind(), VehicleKind::Car);
        assert_eq!(car.drive(), "Car Toyota Camry is driving.");
        assert_eq!(car.refuel(), "Car refueled with gasoline.");
        assert_eq!(
            answers.asked(),
            ["Enter car brand", "Enter car model", "Enter fuel type"]
        );
    }

    #[test]
    fn test_motorcycle_factory_parses_engine_volume() {
        let mut answers = ScriptedAnswers::new(["Sport", "600"]);
        let moto = MotorcycleFactory.create_vehicle(&mut answers).unwrap();
        assert_eq!(moto.drive(), "Sport motorcycle with 600cc is driving.");
        assert_eq!(moto.refuel(), "Motorcycle refueled.");
    }

    #[test]
    fn test_truck_factory_formats_whole_capacity() {
        let mut answers = ScriptedAnswers::new(["12", "3"]);
        let truck = TruckFactory.create_vehicle(&mut answers).unwrap();
        assert_eq!(truck.drive(), "Truck with 12 tons capacity is driving.");
        assert_eq!(truck.refuel(), "Truck refueled.");
    }

    #[test]
    fn test_truck_factory_rejects_negative_capacity() {
        let mut answers = ScriptedAnswers::new(["-4", "3"]);
        let result = TruckFactory.create_vehicle(&mut answers);
        assert!(matches!(
            result,
            Err(CreationError::Input(InputError::Invalid { .. }))
        ));
    }

    #[test]
    fn test_truck_factory_rejects_negative_zero_capacity() {
        let mut answers = ScriptedAnswers::new(["-0", "2"]);
        let result = TruckFactory.create_vehicle(&mut answers);
        assert!(matches!(
            result,
            Err(CreationError::Input(InputError::Invalid { .. }))
        ));

        let mut answers = ScriptedAnswers::new(["0", "2"]);
        let truck = TruckFactory.create_vehicle(&mut answers).unwrap();
        assert_eq!(truck.drive(), "Truck with 0 tons capacity is driving.");
    }

    #[test]
    fn test_bus_factory_rejects_non_numeric_seats() {
        let mut answers = ScriptedAnswers::new(["lots"]);
        let result = BusFactory.create_vehicle(&mut answers);
        assert!(matches!(
            result,
            Err(CreationError::Input(InputError::Invalid { .. }))
        ));
    }

    #[test]
    fn test_bus_factory_rejects_negative_seats() {
        let mut answers = ScriptedAnswers::new(["-10"]);
        assert!(BusFactory.create_vehicle(&mut answers).is_err());
    }

    #[test]
    fn test_from_choice() {
        assert_eq!(VehicleKind::from_choice("1").unwrap(), VehicleKind::Car);
        assert_eq!(VehicleKind::from_choice(" 4 ").unwrap(), VehicleKind::Bus);
        assert!(matches!(
            VehicleKind::from_choice("5"),
            Err(CreationError::InvalidChoice(_))
        ));
        assert!(VehicleKind::from_choice("").is_err());
    }

    #[test]
    fn test_each_kind_has_matching_factory() {
        let scripts: [&[&str]; 4] = [
            &["A", "B", "diesel"],
            &["Cruiser", "1200"],
            &["20", "4"],
            &["50"],
        ];
        for (kind, script) in VehicleKind::ALL.into_iter().zip(scripts) {
            let mut answers = ScriptedAnswers::new(script.iter().copied());
            let vehicle = kind.factory().create_vehicle(&mut answers).unwrap();
            assert_eq!(vehicle.kind(), kind);
        }
    }

    #[test]
    fn test_create_from_choice_invalid_does_not_prompt() {
        let mut answers = ScriptedAnswers::new(["unused"]);
        let result = create_from_choice("9", &mut answers);
        assert!(matches!(result, Err(CreationError::InvalidChoice(_))));
        assert!(answers.asked().is_empty());
    }
}
