/*
 * FORMAT BENCH - SYSTEM ENTRY POINT
 * =================================================================
 * Component: engine/src/main.rs
 * Responsibility: توليد البيانات ثم قياس كل صيغة بالترتيب وطباعة التقرير.
 * =================================================================
 */

use clap::Parser;
use tracing::{debug, info};

use format_bench::cli::Cli;
use format_bench::hardware;
use format_bench::utils::logger::init_logger;
use format_bench::{generate_people, BenchConfig, BenchmarkRunner};

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // أ. الإعدادات (Configuration)
    let cli = Cli::parse();
    let mut cfg = BenchConfig::load(cli.config.as_deref())?;
    cli.apply(&mut cfg);
    cfg.validate()?;

    // ب. الصندوق الأسود (Logging)
    let _guard = init_logger(&cfg.logging);
    info!(
        records = cfg.dataset.records,
        seed = ?cfg.dataset.seed,
        formats = ?cfg.run.formats,
        iterations = cfg.run.iterations,
        "BENCH: boot"
    );

    // ج. توليد البيانات (Dataset)
    println!("Generating data...");
    let people = generate_people(&cfg.dataset);
    info!(heap = ?hardware::snapshot(), "BENCH: dataset ready");

    // د. القياس (Measurement)
    let runner = BenchmarkRunner::new(&cfg.run);
    let report = runner.run(&people, cfg.dataset.seed)?;
    print!("{}", report.render_text());
    debug!("{}", runner.tracker().get_report());

    if let Some(path) = &cfg.run.output {
        report.write_json(path)?;
        info!(path = %path.display(), "BENCH: report written");
    }

    Ok(())
}
