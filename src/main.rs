use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use object_identifier::{cli, config, display, error, gemini, image_file, logging};
use object_identifier_common::{identify, parse_identification, EXAMPLES};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::process::ExitCode;
use std::time::Duration;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("✖ {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Identify { image, raw, model } => {
            let asset = image_file::load_image(&image)?;
            let config = Config::load()?;
            let api_key = config.api_key()?;
            let model = model.unwrap_or_else(|| config.model.clone());
            tracing::info!(model = %model, image = %image.display(), "identifying");

            let backend = gemini::HttpGeminiBackend::new(api_key, model);

            let spinner = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
                spinner.set_style(style);
            }
            spinner.set_message("Identifying...");
            spinner.enable_steady_tick(Duration::from_millis(100));

            let result = identify(&backend, Some(&asset)).await;
            spinner.finish_and_clear();
            let text = result?;

            if raw {
                println!("{}", text);
            } else {
                let table = parse_identification(&text);
                if table.is_empty() {
                    tracing::warn!("応答に `ラベル: 値` 形式の行がありません（--raw で全文を表示）");
                }
                println!("{}", display::format_table(&table));
            }
        }

        Commands::Examples => {
            for (index, example) in EXAMPLES.iter().enumerate() {
                if index > 0 {
                    println!();
                }
                println!("# Example {} ({})", index + 1, example.image_url);
                println!("{}", display::format_table(&example.result()));
            }
        }

        Commands::Config { set_api_key, model, show } => {
            let mut config = Config::load_for_update()?;
            let changed = set_api_key.is_some() || model.is_some();

            if let Some(key) = set_api_key {
                config.api_key = Some(key);
            }
            if let Some(model) = model {
                config.model = model;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  モデル: {}", config.model);
                println!("  APIキー: {}", if config.api_key.is_some() { "設定済み" } else { "未設定" });
                println!("  環境変数 {}: {}", config::API_KEY_ENV,
                    if std::env::var(config::API_KEY_ENV).is_ok() { "設定済み" } else { "未設定" });
            }
        }
    }

    Ok(())
}
