/// Example program to print the loaded configuration
///
/// Run with: cargo run -p passage-config --example print_config

fn main() {
    // Load configuration from passage.toml
    let config = passage_config::PassageConfig::load();

    println!("=== Passage Configuration ===\n");

    println!("Transition Settings:");
    println!("  Name: {:?}", config.transition.name);
    println!("  Timeout (ms): {:?}", config.transition.timeout_ms);
    println!("  Props: {:?}", config.transition.props);
    println!("  Global Props: {:?}", config.transition.global_props);
    println!();

    println!("Style Settings:");
    println!(
        "  Disable Default Classes: {}",
        config.style.disable_default_classes
    );
    println!();

    println!("Effective Descriptor: {:?}", config.descriptor());

    // Try to serialize to TOML for verification
    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("\n=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
