//! Pattern: Decorator
//!
//! Run with: cargo run --bin decorator

use design_patterns::console::{self, bad, good, section};
use design_patterns::decorator::{
    BorderDecorator, BorderedRect, BorderedShadowedRect, ConsoleContext, Node, Offset, Rect,
    Shadow, ShadowDecorator, ShadowedRect,
};
use std::process::ExitCode;

fn draw(label: &str, node: &dyn Node) {
    println!("  {}:", label);
    let mut ctx = ConsoleContext::new();
    node.draw(&mut ctx, Offset::ORIGIN);
}

fn panel() -> Rect {
    let mut rect = Rect::new(10.0, 10.0, 100.0, 50.0, "blue");
    rect.add_child(Rect::new(5.0, 5.0, 20.0, 20.0, "white"));
    rect
}

fn subclass_example() {
    println!("{}", bad("one type per feature combination"));
    draw(
        "BorderedRect",
        &BorderedRect {
            rect: panel(),
            border_color: "black".to_string(),
            border_width: 2.0,
        },
    );
    draw(
        "ShadowedRect",
        &ShadowedRect {
            rect: panel(),
            shadow: Shadow::default(),
        },
    );
    draw(
        "BorderedShadowedRect",
        &BorderedShadowedRect {
            rect: panel(),
            border_color: "black".to_string(),
            border_width: 2.0,
            shadow: Shadow::default(),
        },
    );
    println!("  A third feature would need four more types.");
}

fn decorator_example() {
    println!("{}", good("wrap any node, in any order"));
    let bordered = BorderDecorator::new(panel(), "black", 2.0);
    draw("border(rect)", &bordered);

    let shadowed_then_bordered =
        BorderDecorator::new(ShadowDecorator::new(panel(), Shadow::default()), "black", 2.0);
    draw("border(shadow(rect))", &shadowed_then_bordered);

    let framed = ShadowDecorator::new(
        BorderDecorator::new(
            BorderDecorator::new(panel(), "gold", 1.0),
            "black",
            3.0,
        ),
        Shadow::new("rgba(0, 0, 0, 0.8)", 10.0, 4.0, 4.0),
    );
    draw("shadow(border(border(rect)))", &framed);

    let unwrapped = framed.into_inner();
    draw("after removing the shadow", &unwrapped);
}

fn main() -> ExitCode {
    if let Err(err) = design_patterns::init_demo() {
        eprintln!("{}", console::failure(&err));
        return ExitCode::FAILURE;
    }

    println!("{}\n", console::banner("Pattern: Decorator"));

    println!("{}", section("Subclass per Combination"));
    subclass_example();
    println!();

    println!("{}", section("Decorators"));
    decorator_example();

    ExitCode::SUCCESS
}
