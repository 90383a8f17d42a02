//! Pattern 1: Factory Method
//! Example: document creators looked up by menu key.
//!
//! Run with: cargo run --bin p2_document_factory

use colored::Colorize;
use creational_patterns::console::Prompter;
use creational_patterns::document::CreatorRegistry;
use creational_patterns::Logger;

fn main() {
    if let Err(err) = Logger::global().install() {
        eprintln!("logger already installed: {err}");
    }

    let registry = CreatorRegistry::standard();
    let labels: Vec<String> = registry.choices().into_iter().map(|(_, label)| label).collect();
    let labels: Vec<&str> = labels.iter().map(String::as_str).collect();

    let mut prompter = Prompter::stdio();
    let choice = match prompter.menu("Choose document type:", &labels) {
        Ok(choice) => choice,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            return;
        }
    };

    match registry.create(&choice) {
        Ok(document) => println!("{}", document.open()),
        Err(err) => println!("{}", err.to_string().red()),
    }
}
