use clap::Parser;
use employee_record::utils::error::RecordError;
use employee_record::utils::logger;
use employee_record::utils::validation::Validate;
use employee_record::CliConfig;

fn report_and_exit(e: &RecordError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        report_and_exit(&e);
    }

    let roster = match config.build_roster() {
        Ok(roster) => roster,
        Err(e) => report_and_exit(&e),
    };

    match roster.render(config.format) {
        Ok(output) => print!("{}", output),
        Err(e) => report_and_exit(&e),
    }

    Ok(())
}
