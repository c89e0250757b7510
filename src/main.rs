use bottl::utils::{logger, validation::Validate};
use bottl::{app, BottlError, CliConfig, FileConfig, MenuApp, Settings, StdConsole};
use clap::Parser;

fn report_and_exit(e: BottlError) -> ! {
    tracing::error!("{} (category: {:?})", e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = cli.validate() {
        report_and_exit(e);
    }

    let file = match FileConfig::discover(cli.config.as_deref()) {
        Ok(file) => file,
        Err(e) => report_and_exit(e),
    };
    let settings = match Settings::resolve(&cli, &file) {
        Ok(settings) => settings,
        Err(e) => report_and_exit(e),
    };

    let mut console = StdConsole;
    let outcome = if cli.menu {
        MenuApp::new(console, settings).run()
    } else {
        app::run_one_shot(&mut console, &settings, cli.birth_year.as_deref()).map(|_| ())
    };

    if let Err(e) = outcome {
        report_and_exit(e);
    }
    Ok(())
}
