use std::fmt;

use crossterm::style::Stylize;

pub fn banner(text: &str) {
    println!();
    println!("{}", "=".repeat(60));
    println!("{}", text.bold());
    println!("{}", "=".repeat(60));
}

pub fn step(text: &str) {
    println!();
    println!("{} {}", ">>".cyan(), text);
}

pub fn pass(text: &str) {
    println!("{} {}", "[ok]".green(), text);
}

pub fn fail(text: &str) {
    println!("{} {}", "[!!]".red(), text);
}

pub fn hint(text: &str) {
    println!("     {}", text.dark_grey());
}

pub fn field<T: fmt::Display>(label: &str, value: T) {
    println!("     {}: {}", label, value);
}
