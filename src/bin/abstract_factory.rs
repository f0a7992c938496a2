//! Pattern: Abstract Factory
//!
//! Run with: cargo run --bin abstract_factory [windows|mac]

use design_patterns::abstract_factory::{Application, MacFactory, Platform, WinFactory};
use design_patterns::console::{self, good, section};
use std::env;
use std::process::ExitCode;

fn render(app: &Application) {
    for line in app.render() {
        println!("  {}", line);
    }
}

fn main() -> ExitCode {
    if let Err(err) = design_patterns::init_demo() {
        eprintln!("{}", console::failure(&err));
        return ExitCode::FAILURE;
    }

    println!("{}\n", console::banner("Pattern: Abstract Factory"));

    println!("{}", section("Windows Family"));
    render(&Application::new(Box::new(WinFactory)));
    println!();

    println!("{}", section("Mac Family"));
    render(&Application::new(Box::new(MacFactory)));
    println!();

    println!("{}", section("Chosen at Runtime"));
    let platform = match env::args().nth(1) {
        Some(arg) => match arg.parse::<Platform>() {
            Ok(platform) => platform,
            Err(err) => {
                eprintln!("{}", console::failure(&err));
                return ExitCode::FAILURE;
            }
        },
        None => Platform::current(),
    };
    println!("{}", good(&format!("application built for {:?}", platform)));
    render(&Application::for_platform(platform));
    println!("  The application never named a concrete button or checkbox.");

    ExitCode::SUCCESS
}
