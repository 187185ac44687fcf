mod platform;

fn main() -> anyhow::Result<()> {
    let config = platform::config::load()?;
    platform::logging::initialize(&config.log);
    platform::run_app(config)
}
