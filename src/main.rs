use clap::Parser;
use photo_grid::{cli, config, error, manifest, output, scanner};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use photo_grid_common::{balance, BreakpointTable, LayoutVariant};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;

    match cli.command {
        Commands::Balance { input, columns, width, variant, min_difference, format, output: output_path } => {
            let variant = variant.unwrap_or(config.default_variant);
            let photos = manifest::load_manifest(&input)?;

            // カラム数の明示指定はブレークポイントを使わない
            let report = match columns {
                Some(column_count) => balance(&photos, column_count, &config.balance_options(min_difference)),
                None => {
                    let viewport_width = config.viewport_width(width)?;
                    config.photo_grid(variant, min_difference)?.recompute_report(&photos, viewport_width)
                }
            };
            tracing::info!(
                photos = photos.len(),
                columns = report.columns.len(),
                passes = report.passes,
                stop = ?report.stop,
                "balanced"
            );

            let rendered = output::render_columns(&report.columns, format)?;
            match output_path {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    println!("✔ 結果を保存: {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Scan { folder, output: output_path } => {
            println!("📸 photo-grid - フォルダスキャン\n");

            let photos = scanner::scan_folder(&folder)?;
            if photos.is_empty() {
                println!("画像が見つかりません: {}", folder.display());
                return Ok(());
            }
            println!("✔ {}枚の写真を検出", photos.len());

            let output_path = output_path.unwrap_or_else(|| folder.join("photos.json"));
            manifest::save_manifest(&output_path, &photos)?;
            println!("✔ マニフェストを保存: {}", output_path.display());
        }

        Commands::Breakpoints { variant, width } => {
            let variant = variant.unwrap_or(config.default_variant);
            let grid = config.photo_grid(variant, None)?;
            print_table(variant, grid.table());

            if let Some(width) = width {
                println!("\n{}px → {}カラム", width, grid.column_count_for(width));
            }
        }

        Commands::Config { set_variant, set_width, show } => {
            let mut config = config;

            if set_variant.is_some() || set_width.is_some() {
                if let Some(variant) = set_variant {
                    config.default_variant = variant;
                }
                if let Some(width) = set_width {
                    config.default_viewport_width = Some(width);
                }
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show {
                println!("設定:");
                println!("  レイアウト種別: {}", config.default_variant);
                match config.default_viewport_width {
                    Some(width) => println!("  ビューポート幅: {}px", width),
                    None => println!("  ビューポート幅: 未設定"),
                }
                println!("  最小高低差: {}", config.min_difference);
                println!("  ブレークポイント上書き: {}件", config.breakpoints.len());
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_table(variant: LayoutVariant, table: &BreakpointTable) {
    println!("ブレークポイント ({}):", variant);
    for (min_width, columns) in table.iter() {
        println!("  {:>5}px 以上 → {}カラム", min_width, columns);
    }
}
