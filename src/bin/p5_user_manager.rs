//! Supplement: a small user list with add, update and remove.
//!
//! Run with: cargo run --bin p5_user_manager

use creational_patterns::users::{User, UserManager};
use creational_patterns::Logger;

fn main() {
    if let Err(err) = Logger::global().install() {
        eprintln!("logger already installed: {err}");
    }

    let mut manager = UserManager::new();
    manager.add_user(User::new("Adilet", "a@mail.com", "Admin"));
    manager.add_user(User::new("Ali", "ali@mail.com", "User"));

    println!("Users:");
    print!("{manager}");

    manager.update_user("ali@mail.com", "Alihan", "alih@mail.com", "User");
    println!("\nAfter update:");
    print!("{manager}");

    manager.remove_user("a@mail.com");
    println!("\nAfter remove:");
    print!("{manager}");
}
