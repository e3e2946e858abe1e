use anyhow::Context;
use clap::Parser;
use std::io::Write;
use filecat::utils::{logger, validation::Validate};
use filecat::{CliConfig, ConcatEngine, ConcatPipeline, FilecatError, LocalStorage};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting filecat");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 解析並驗證配置
    let settings = match cli.resolve().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => fail(e),
    };

    if settings.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(settings.source_dir.clone());
    let output_path = settings.output_path.clone();
    let suffix = settings.suffix.clone();
    let monitor = settings.monitor;
    let pipeline = ConcatPipeline::new(storage, settings);
    let engine = ConcatEngine::new_with_monitoring(pipeline, output_path.clone(), monitor);

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        let planned = match engine.plan() {
            Ok(planned) => planned,
            Err(e) => fail(e),
        };
        let mut stdout = std::io::stdout().lock();
        writeln!(
            stdout,
            "{} {} files would be written to {}:",
            planned.len(),
            suffix,
            output_path.display()
        )
        .context("failed to write dry run report")?;
        for entry in planned {
            writeln!(stdout, "  {}", entry.name).context("failed to write dry run report")?;
        }
        return Ok(());
    }

    match engine.run() {
        Ok(summary) => {
            tracing::info!("✅ Concatenated {} files", summary.records_written());
            println!(
                "All {} files have been written to {}.",
                suffix,
                summary.output_path.display()
            );
        }
        Err(e) => fail(e),
    }

    Ok(())
}

fn fail(e: FilecatError) -> ! {
    tracing::error!(
        "❌ filecat failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code().max(1));
}
