use medterm_config::Config;

/// Strategy for initializing the configuration.
///
/// Creates the default configuration file at `~/medterm/config.json`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::create_config()?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - cache.annotation: TTL (seconds) and size of the annotated-text cache");
        println!("   - cache.schema: TTL (seconds) and size of the page schema cache");
        println!("   - logging.level: trace, debug, info, warn or error");
        println!();
        Ok(())
    }
}
