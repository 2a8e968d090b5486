use anyhow::{Context, Result};
use std::env;
use tracing::info;
use world_dishes::{
    config,
    imaging::{ImageSource, MenuImage},
    state::{Language, TranslationState, TranslationViewState},
    translate::TranslationClient,
};

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let Some(image_path) = args.next() else {
        eprintln!("Usage: world-dishes <menu-image> [language]");
        std::process::exit(2);
    };
    let language = args.next().map(|name| name.parse::<Language>()).transpose()?;

    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Determine log level: environment variable overrides config
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&log_level))
        .json()
        .init();

    info!("Starting menu translation with log level: {}", log_level);

    let image = MenuImage::open(&image_path)
        .with_context(|| format!("failed to open menu image {}", image_path))?;

    let locale = env::var("LANG").ok();
    let mut view = TranslationViewState::new(locale.as_deref());
    view.select_image(image, ImageSource::PhotoLibrary);
    if let Some(language) = language {
        view.select_language(language);
    }

    let client = TranslationClient::new(&config.translator);
    client.translate(&mut view).await?;

    match view.state() {
        TranslationState::Success(menu) => {
            if let Some(menu_language) = &menu.menu_language {
                println!("Menu Language: {}", menu_language);
            }
            if let Some(source_language) = &menu.source_language {
                println!("Source Language: {}", source_language);
            }
            println!("{}", menu.status_message());
            for dish in &menu.dishes {
                let certified = if dish.is_certified { " [certified]" } else { "" };
                println!("\n{} -> {}{}", dish.original_name, dish.translation, certified);
                if !dish.description.is_empty() {
                    println!("  {}", dish.description);
                }
                if let Some(allergens) = dish.allergen_summary() {
                    println!("  Allergens: {}", allergens);
                }
            }
        }
        TranslationState::Error(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
        TranslationState::Idle | TranslationState::InFlight => {}
    }

    Ok(())
}
