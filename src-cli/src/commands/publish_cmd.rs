//! Publish Instructions Command

use showcase_core::ShowcaseConfig;

/// Named address the Move package declares for its publisher.
const NAMED_ADDRESS: &str = "aptos_vibes";

pub fn publish_instructions(config: &ShowcaseConfig) {
    println!("🚀 Deploying {}::{}", config.contract.module_address, config.contract.module_name);
    println!("{}", instructions(config));
}

pub fn instructions(config: &ShowcaseConfig) -> String {
    let address = &config.contract.module_address;
    [
        "⚠️  To complete deployment, run this command:".to_string(),
        format!(
            "aptos move publish --profile default --package-dir . --named-addresses {}={}",
            NAMED_ADDRESS, address
        ),
        String::new(),
        "Then run the initialization:".to_string(),
        format!(
            "aptos move run --profile default --function-id {}",
            config.contract.function_id("initialize")
        ),
    ]
    .join("\n")
}
