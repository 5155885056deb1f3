use greview_core::ReviewPreset;

use crate::config::load_config;
use crate::output;

pub fn run() -> anyhow::Result<()> {
    println!("{}", output::header("Vote presets"));
    for preset in ReviewPreset::builtin() {
        println!(
            "{:<20} {:<6} {:<10} {}",
            preset.key(),
            preset.title(),
            preset.icon.as_str(),
            preset.description()
        );
    }

    let catalog = load_config().label_catalog()?;
    println!();
    println!("{}", output::header("Labels"));
    for (label, range) in catalog.labels() {
        println!("{}", output::kv(label, &format!("{:+}..{:+}", range.min, range.max)));
    }
    Ok(())
}
