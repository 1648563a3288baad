use clap::Parser;
use course_catalog::config::{CatalogConfig, FailurePolicy, FetchBackend};
use course_catalog::crawlers::{HttpFetcher, WebDriverFetcher};
use course_catalog::{BuildReport, CatalogBuilder, query, snapshot};
use std::error::Error;

mod args;
use args::{Args, Command, convert_backend};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => CatalogConfig::from_file(path)?,
        None => CatalogConfig::default(),
    }
    .apply_env();
    if let Some(path) = args.snapshot {
        config.snapshot_path = path;
    }

    match args.command {
        Command::Harvest {
            backend,
            skip_failed,
        } => {
            if let Some(backend) = backend {
                config.backend = convert_backend(backend);
            }
            if skip_failed {
                config.on_department_error = FailurePolicy::Skip;
            }
            harvest(&config).await
        }
        Command::Majors => {
            let catalog = snapshot::load(&config.snapshot_path)?;
            for major in query::majors(&catalog) {
                println!("{}", major);
            }
            Ok(())
        }
        Command::Courses { major } => {
            let catalog = snapshot::load(&config.snapshot_path)?;
            for code in query::courses_for_major(&catalog, &major)? {
                println!("{}", code);
            }
            Ok(())
        }
        Command::Offered { major, term, all } => {
            let catalog = snapshot::load(&config.snapshot_path)?;
            let lookups = if all {
                query::term_lookups(&catalog, &major, &term)?
            } else {
                query::courses_offered_in_term(&catalog, &major, &term)?
            };
            for lookup in lookups {
                println!("{}", lookup);
            }
            Ok(())
        }
    }
}

async fn harvest(config: &CatalogConfig) -> Result<(), Box<dyn Error>> {
    ::log::info!("Starting harvest of {}", config.index_url);
    let builder = CatalogBuilder::from_config(config)?;
    let start_time = std::time::Instant::now();

    let report: BuildReport = match config.backend {
        FetchBackend::Http => {
            let fetcher = HttpFetcher::new(config.request_timeout_secs)?;
            builder.build(&fetcher).await?
        }
        FetchBackend::Webdriver => {
            println!(
                "Note: the webdriver backend requires a WebDriver server (e.g., ChromeDriver)."
            );
            println!(
                "Set WEBDRIVER_URL environment variable if not using the default http://localhost:4444"
            );
            let fetcher =
                WebDriverFetcher::connect(&config.webdriver_url, config.request_timeout_secs)
                    .await?;
            let result = builder.build(&fetcher).await;
            fetcher.close().await;
            result?
        }
    };

    ::log::info!(
        "Harvest complete in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );
    println!("Total links found: {}", report.links_found);
    for failure in &report.failures {
        println!(
            "Skipped {} ({}): {}",
            failure.link.display_text, failure.link.url, failure.error
        );
    }

    if snapshot::save_report(&report, &config.snapshot_path)? {
        println!(
            "Saved {} departments ({} courses) to {}",
            report.catalog.len(),
            report.catalog.course_count(),
            config.snapshot_path.display()
        );
    } else {
        println!(
            "No departments harvested; leaving {} untouched",
            config.snapshot_path.display()
        );
    }
    Ok(())
}
