//! Pattern: Singleton
//!
//! Run with: cargo run --bin singleton

use design_patterns::console::{self, bad, good, section};
use design_patterns::singleton::{
    eager, global_service, GlobalSlot, RefCountedSingleton, Service, WeakSingleton,
};
use std::process::ExitCode;
use std::rc::Rc;

/// Everything the demo's "components" share, handed to them explicitly.
struct AppContext {
    services: RefCountedSingleton<Service>,
}

impl AppContext {
    fn new() -> Self {
        Self {
            services: RefCountedSingleton::new(Service::new),
        }
    }
}

fn eager_example() {
    println!("{}", bad("module-level instance per package copy"));
    println!("  {} instance: {}", eager::V1_0_0.version, eager::V1_0_0.id);
    println!("  {} instance: {}", eager::V1_0_1.version, eager::V1_0_1.id);
    println!(
        "  Same instance across versions: {}",
        eager::V1_0_0.id == eager::V1_0_1.id
    );
}

fn global_example() {
    println!("{}", good("one lazily built process-wide instance"));
    let first = global_service();
    let second = global_service();
    println!("  {}", first.some_method());
    println!("  Same instance: {}", std::ptr::eq(first, second));

    println!("{}", good("slot installed once at start-up"));
    static GREETING: GlobalSlot<String> = GlobalSlot::new("Greeting");
    match GREETING.get() {
        Ok(value) => println!("  Unexpected value: {}", value),
        Err(err) => println!("  {}", console::failure(&err)),
    }
    match GREETING.install("hello".to_string()) {
        Ok(value) => println!("  Installed: {}", value),
        Err(err) => println!("  {}", console::failure(&err)),
    }
    if let Err(err) = GREETING.install("again".to_string()) {
        println!("  {}", console::failure(&err));
    }
}

fn component(ctx: &AppContext, name: &str) {
    let service = ctx.services.acquire();
    println!(
        "  {} uses service {} (references: {})",
        name,
        service.id(),
        ctx.services.ref_count()
    );
}

fn ref_counted_example(ctx: &AppContext) {
    println!("{}", good("reference counted, reclaimed at zero"));
    let first = ctx.services.get_instance();
    let second = ctx.services.get_instance();
    println!("  Same instance: {}", Rc::ptr_eq(&first, &second));
    println!("  References: {}", ctx.services.ref_count());

    component(ctx, "Sidebar");
    component(ctx, "Toolbar");

    ctx.services.release();
    ctx.services.release();
    println!(
        "  After releasing both: references {}, initialized {}",
        ctx.services.ref_count(),
        ctx.services.is_initialized()
    );

    println!("  One release too many is ignored:");
    ctx.services.release();

    let fresh = ctx.services.get_instance();
    println!("  Fresh instance differs: {}", fresh.id() != first.id());
    ctx.services.release();
}

fn weak_example() {
    println!("{}", good("holder keeps only a weak reference"));
    let holder = WeakSingleton::new(Service::new);
    let first_id = {
        let a = holder.get_instance();
        let b = holder.get_instance();
        println!("  Same instance while in use: {}", Rc::ptr_eq(&a, &b));
        a.id()
    };
    println!("  Alive after the last user dropped it: {}", holder.is_alive());
    let again = holder.get_instance();
    println!("  Rebuilt with a new id: {}", again.id() != first_id);
}

fn main() -> ExitCode {
    if let Err(err) = design_patterns::init_demo() {
        eprintln!("{}", console::failure(&err));
        return ExitCode::FAILURE;
    }

    println!("{}\n", console::banner("Pattern: Singleton"));

    println!("{}", section("Eager Instances"));
    eager_example();
    println!();

    println!("{}", section("Global Slot"));
    global_example();
    println!();

    let ctx = AppContext::new();
    println!("{}", section("Reference Counting"));
    ref_counted_example(&ctx);
    println!();

    println!("{}", section("Weak Reference"));
    weak_example();

    ExitCode::SUCCESS
}
