use anyhow::Result;
use clap::Parser;
use logtally::csv_output::CsvOutput;
use logtally::json_output::JsonReport;
use logtally::{
    cli::{Cli, OutputFormat},
    scanner::{self, ScanConfig},
};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let config = ScanConfig {
        log_folder: args.log_folder,
        marker: args.marker,
        methods: args.methods,
    };

    let tracker = scanner::scan_log_folder(&config)?;

    match args.format {
        OutputFormat::Text => {
            let stdout = std::io::stdout();
            tracker.write_summary(stdout.lock())?;
        }
        OutputFormat::Json => {
            println!("{}", JsonReport::from_tracker(&tracker).to_json_pretty()?);
        }
        OutputFormat::Csv => {
            print!("{}", CsvOutput::new(&tracker).to_csv());
        }
    }

    Ok(())
}
