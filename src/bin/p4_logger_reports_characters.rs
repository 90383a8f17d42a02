//! Pattern 2: Singleton, Builder and Prototype
//! Example: a shared rotating logger, exported game reports, cloned heroes.
//!
//! Run with: cargo run --bin p4_logger_reports_characters

use std::thread;

use colored::Colorize;
use creational_patterns::character::{Armor, Character, Skill, Weapon};
use creational_patterns::logger::{LogReader, LoggerError};
use creational_patterns::report::{
    HtmlReportBuilder, ReportDirector, ReportError, ReportStyle, TextReportBuilder,
};
use creational_patterns::{LogLevel, Logger};

fn logger_example() -> Result<(), LoggerError> {
    let logger = Logger::global();
    logger.set_log_level(LogLevel::Info);

    thread::scope(|s| {
        for i in 0..3 {
            s.spawn(move || {
                let name = format!("Thread-{i}");
                for (message, level) in [
                    (format!("{name} started"), LogLevel::Info),
                    (format!("{name} warning!"), LogLevel::Warning),
                    (format!("{name} error!"), LogLevel::Error),
                ] {
                    if let Err(err) = logger.log(&message, level) {
                        eprintln!("{err}");
                    }
                }
            });
        }
    });

    println!("\nWarnings and errors in {}:", logger.path().display());
    for line in LogReader::new(logger.path()).read(LogLevel::Warning)? {
        println!("  {line}");
    }
    Ok(())
}

fn report_example() -> Result<(), ReportError> {
    let style = ReportStyle::new("gray", "blue", 14);
    let director = ReportDirector::new();

    let text_report = director.construct_game_report(&mut TextReportBuilder::new(), style.clone());
    let html_report = director.construct_game_report(&mut HtmlReportBuilder::new(), style);

    text_report.export("report.txt")?;
    html_report.export("report.html")?;

    println!("{text_report}");
    Ok(())
}

fn prototype_example() {
    let hero = Character {
        health: 100,
        strength: 20,
        agility: 15,
        intelligence: 10,
        weapon: Weapon::new("Sword", 50),
        armor: Armor::new("Steel Armor", 30),
        skills: vec![Skill::new("Fireball", 100)],
    };
    let clone_hero = hero.with_health(200);

    println!("Original: {hero}");
    println!("Clone: {clone_hero}");
}

fn main() {
    let logger = Logger::global();
    if let Err(err) = logger.install() {
        eprintln!("logger already installed: {err}");
    }

    println!("\n{}", "===== LOGGER TEST =====".bold());
    if let Err(err) = logger_example() {
        eprintln!("{}", err.to_string().red());
    }

    println!("\n{}", "===== REPORT BUILDER TEST =====".bold());
    if let Err(err) = report_example() {
        eprintln!("{}", err.to_string().red());
    }

    println!("\n{}", "===== PROTOTYPE TEST =====".bold());
    prototype_example();
}
