//! Pattern: Builder
//!
//! Run with: cargo run --bin builder

use design_patterns::builder::{AssemblyLine, BuildSteps, ComputerAssembler, ComputerBuilder};
use design_patterns::console::{self, good, section};
use design_patterns::PatternError;
use std::process::ExitCode;

fn builder_example() {
    println!("{}", good("chain the parts you want"));
    let office = ComputerBuilder::new()
        .cpu("Intel i3")
        .ram("8GB")
        .storage("256GB SSD")
        .build();
    println!("  Office PC: {}", office);
}

fn assembler_example(config: &design_patterns::DemoConfig) -> Result<(), PatternError> {
    let mut assembler = ComputerAssembler::new();

    println!("{}", good("director without a builder"));
    match assembler.build_standard_computer() {
        Ok(computer) => println!("  Unexpected: {}", computer),
        Err(err) => println!("  {}", console::failure(&err)),
    }

    println!("{}", good("standard line"));
    assembler.set_builder(AssemblyLine::standard());
    println!("  Standard PC: {}", assembler.build_standard_computer()?);

    println!("{}", good("gaming line"));
    assembler.set_builder(AssemblyLine::gaming());
    let gaming = assembler.build_gaming_computer()?;
    println!("  Gaming PC: {}", gaming.computer);

    println!("{}", good("gaming recipe on a standard line"));
    assembler.set_builder(AssemblyLine::standard());
    let downgraded = assembler.build_gaming_computer()?;
    if let Some(warning) = downgraded.warning {
        println!("  {}", warning);
    }
    println!("  Gaming PC (standard line): {}", downgraded.computer);

    println!("{}", good("made to order"));
    let custom = assembler.build_custom_computer(&config.builder.custom);
    println!("  Custom PC: {}", custom);

    Ok(())
}

fn main() -> ExitCode {
    let config = match design_patterns::init_demo() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", console::failure(&err));
            return ExitCode::FAILURE;
        }
    };

    println!("{}\n", console::banner("Pattern: Builder"));

    println!("{}", section("Fluent Builder"));
    builder_example();
    println!();

    println!("{}", section("Director"));
    if let Err(err) = assembler_example(&config) {
        eprintln!("{}", console::failure(&err));
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
