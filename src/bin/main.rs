use closest_holiday::app;
use closest_holiday::config::Config;
use closest_holiday::employees::ExternalEmployees;
use closest_holiday::source::NagerDateSource;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "closest_holiday=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::debug!(
        country = %config.country_code,
        year = config.year,
        api_base_url = %config.api_base_url,
        "loaded configuration"
    );

    let source = NagerDateSource::new(&config.api_base_url)?;
    let mut employees = ExternalEmployees::new(config.employees_command.clone());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    app::run(
        &config,
        &source,
        &mut employees,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
}
