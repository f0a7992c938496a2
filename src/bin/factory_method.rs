//! Pattern: Factory Method
//!
//! Run with: cargo run --bin factory_method

use design_patterns::console::{self, bad, good, section};
use design_patterns::factory_method::legacy::{
    deliver_goods_by_kind, LegacyAirplane, LegacyTruck, LegacyVehicle,
};
use design_patterns::factory_method::{
    deliver_goods, Airplane, AirplaneFactory, TrainFactory, Transport, TransportFactory,
    TransportRegistry, Truck, TruckFactory,
};
use design_patterns::{DemoConfig, PatternError};
use std::process::ExitCode;

fn legacy_example(goods: &[String]) {
    println!("{}", bad("each vehicle has its own delivery method"));
    let vehicles = [
        LegacyVehicle::Truck(LegacyTruck),
        LegacyVehicle::Airplane(LegacyAirplane),
    ];
    for (vehicle, item) in vehicles.iter().zip(goods.iter().cycle()) {
        println!("  {}", deliver_goods_by_kind(vehicle, item));
    }
    println!("  Adding a ship means another match arm wherever goods are delivered.");
}

fn shared_interface_example(goods: &[String]) {
    println!("{}", good("one Transport trait for every vehicle"));
    let fleet: Vec<Box<dyn Transport>> = vec![Box::new(Truck), Box::new(Airplane)];
    for (transport, item) in fleet.iter().zip(goods.iter().cycle()) {
        println!("  {}", deliver_goods(transport.as_ref(), item));
    }
}

fn creator_example(goods: &[String]) {
    println!("{}", good("creators decide which product to build"));
    let factories: Vec<Box<dyn TransportFactory>> =
        vec![Box::new(TruckFactory), Box::new(AirplaneFactory), Box::new(TrainFactory)];
    for (factory, item) in factories.iter().zip(goods.iter().cycle()) {
        println!("  {}", factory.deliver_goods(item));
    }
}

fn registry_example(config: &DemoConfig) -> Result<(), PatternError> {
    println!("{}", good("one entry point keyed by tag"));
    let mut registry = TransportRegistry::with_defaults();
    for (alias, target) in &config.factory.aliases {
        registry.register_alias(alias, target)?;
    }
    println!("  Registered: {}", registry.registered_types().join(", "));

    for (tag, item) in registry
        .registered_types()
        .into_iter()
        .zip(config.factory.goods.iter().cycle())
    {
        let transport = registry.create_transport(tag)?;
        println!("  [{}] {}", tag, transport.deliver(item));
    }

    match registry.create_transport("submarine") {
        Ok(transport) => println!("  Unexpected product: {}", transport.name()),
        Err(err) => println!("  {}", console::failure(&err)),
    }
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
    let goods = &config.factory.goods;

    println!("{}\n", console::banner("Pattern: Factory Method"));

    println!("{}", section("Without a shared interface"));
    legacy_example(goods);
    println!();

    println!("{}", section("Shared Transport interface"));
    shared_interface_example(goods);
    println!();

    println!("{}", section("Creator Traits"));
    creator_example(goods);
    println!();

    println!("{}", section("Registry"));
    if let Err(err) = registry_example(&config) {
        eprintln!("{}", console::failure(&err));
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
