//! Pattern: Bridge
//!
//! Run with: cargo run --bin bridge

use design_patterns::bridge::{
    BridgedPlayer, Mp3, Player, Smartphone, SmartphoneMp3Player, SmartphoneWavPlayer, Tablet,
    TabletMp3Player, TabletWavPlayer, Wav,
};
use design_patterns::console::{self, bad, good, section};
use std::process::ExitCode;

const SONG: &str = "Bohemian Rhapsody";

fn class_per_combination_example() {
    println!("{}", bad("one type per device and format"));
    let players: Vec<Box<dyn Player>> = vec![
        Box::new(SmartphoneMp3Player),
        Box::new(SmartphoneWavPlayer),
        Box::new(TabletMp3Player),
        Box::new(TabletWavPlayer),
    ];
    for player in &players {
        println!("  {}", player.play(SONG));
    }
    println!("  2 devices x 2 formats = {} types. A third format adds 2 more.", players.len());
}

fn bridged_example() {
    println!("{}", good("device holds a format"));
    let players: Vec<Box<dyn Player>> = vec![
        Box::new(BridgedPlayer::new(Smartphone, Box::new(Mp3))),
        Box::new(BridgedPlayer::new(Smartphone, Box::new(Wav))),
        Box::new(BridgedPlayer::new(Tablet, Box::new(Mp3))),
        Box::new(BridgedPlayer::new(Tablet, Box::new(Wav))),
    ];
    for player in &players {
        println!("  {}", player.play(SONG));
    }

    let mut tablet = BridgedPlayer::new(Tablet, Box::new(Mp3));
    tablet.switch_format(Box::new(Wav));
    println!("  After switching format: {}", tablet.play(SONG));
    println!("  2 devices + 2 formats = 4 types. A third format adds 1 more.");
}

fn main() -> ExitCode {
    if let Err(err) = design_patterns::init_demo() {
        eprintln!("{}", console::failure(&err));
        return ExitCode::FAILURE;
    }

    println!("{}\n", console::banner("Pattern: Bridge"));

    println!("{}", section("Class per Combination"));
    class_per_combination_example();
    println!();

    println!("{}", section("Bridged Hierarchies"));
    bridged_example();

    ExitCode::SUCCESS
}
