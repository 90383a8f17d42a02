//! Pattern 1: Factory Method
//! Example: pick a vehicle kind, let its factory ask for the details.
//!
//! Run with: cargo run --bin p1_vehicle_factory

use colored::Colorize;
use creational_patterns::console::Prompter;
use creational_patterns::vehicle::{create_from_choice, VehicleKind};
use creational_patterns::Logger;

fn main() {
    if let Err(err) = Logger::global().install() {
        eprintln!("logger already installed: {err}");
    }

    let mut prompter = Prompter::stdio();
    let labels: Vec<&str> = VehicleKind::ALL.iter().map(|kind| kind.label()).collect();

    let choice = match prompter.menu("Choose vehicle type:", &labels) {
        Ok(choice) => choice,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            return;
        }
    };

    match create_from_choice(&choice, &mut prompter) {
        Ok(vehicle) => {
            println!("{}", vehicle.drive());
            println!("{}", vehicle.refuel());
        }
        Err(err) => println!("{}", err.to_string().red()),
    }
}
