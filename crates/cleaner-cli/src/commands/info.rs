//! Info command implementation.

use cleaner_core::CleanerKind;

/// Run the info command.
pub fn run() {
    println!("TTS Text Cleaners");
    println!("=================");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!();
    println!("Crates:");
    println!("  cleaner-core: Core types, traits and configuration");
    println!("  text-cleaners: Normalization stages and pipelines");
    println!("  cleaner-cli: This CLI tool");
    println!();
    println!("Cleaners:");
    for kind in CleanerKind::ALL {
        let lang = kind.lang().map_or("-", |lang| lang.as_str());
        println!("  {:<16} {:<28} lang: {}", kind.key(), kind.config_name(), lang);
    }
}
