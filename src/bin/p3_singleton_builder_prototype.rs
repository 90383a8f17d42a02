//! Pattern 2: Singleton, Builder and Prototype
//! Example: shared settings, text/HTML reports, duplicated orders.
//!
//! Run with: cargo run --bin p3_singleton_builder_prototype

use std::thread;

use colored::Colorize;
use creational_patterns::order::{Discount, Order, Product};
use creational_patterns::report::{HtmlReportBuilder, ReportDirector, TextReportBuilder};
use creational_patterns::settings::SettingsError;
use creational_patterns::{Logger, Prototype, Settings};

fn singleton_example() -> Result<(), SettingsError> {
    thread::scope(|s| {
        for _ in 0..3 {
            s.spawn(|| {
                let settings = Settings::global();
                println!("Instance ID: {:p}", settings);
            });
        }
    });

    let settings = Settings::global();
    settings.set("theme", "dark");
    settings.save_to_file("config.json")?;
    println!("Saved {} setting(s) to config.json", settings.len());
    Ok(())
}

fn builder_example() {
    let director = ReportDirector::new();
    let text_report = director.construct(&mut TextReportBuilder::new());
    let html_report = director.construct(&mut HtmlReportBuilder::new());

    println!("\nTEXT REPORT:");
    println!("{text_report}");

    println!("\nHTML REPORT:");
    println!("{html_report}");
}

fn prototype_example() {
    let laptop = Product::new("Laptop", 1000.0, 1);
    let order1 = Order::new(vec![laptop], 50.0, Some(Discount::new(10.0)), "Card");
    let mut order2 = order1.duplicate();
    order2.products[0].quantity = 2;

    println!("Order1 total: {}", order1.total_price());
    println!("Order2 total: {}", order2.total_price());
}

fn main() {
    if let Err(err) = Logger::global().install() {
        eprintln!("logger already installed: {err}");
    }

    println!("{}", "===== SINGLETON TEST =====".bold());
    if let Err(err) = singleton_example() {
        eprintln!("{}", err.to_string().red());
    }

    println!("\n{}", "===== BUILDER TEST =====".bold());
    builder_example();

    println!("\n{}", "===== PROTOTYPE TEST =====".bold());
    prototype_example();
}
