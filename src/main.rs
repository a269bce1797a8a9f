use clap::{Parser, Subcommand};
use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;
use subnet_planner::output::{render_describe, render_vlsm};
use subnet_planner::{describe_cidr, plan_vlsm, Config, OutputFormat, SubnetRequirement};

#[derive(Parser)]
#[command(name = "subnet-planner")]
#[command(about = "IPv4 subnet calculator and VLSM planner", long_about = None)]
struct Cli {
    /// Output format, overrides SUBNET_PLANNER_FORMAT
    #[arg(short, long, value_enum, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show network, broadcast, mask and usable range for one prefix
    Describe {
        /// Address as IP/CIDR (e.g. 192.168.1.100/26), or IP with PREFIX
        address: String,
        /// Prefix length when not given in ADDRESS
        prefix: Option<String>,
    },
    /// Allocate subnets largest-first from a base network
    Vlsm {
        /// Base network as IP/CIDR (e.g. 192.168.1.0/24)
        base: String,
        /// Subnet requirement as NAME=HOSTS, repeat for each subnet
        #[arg(short, long = "subnet", value_name = "NAME=HOSTS", required = true)]
        subnets: Vec<SubnetRequirement>,
    },
}

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env();
    if let Err(e) = init_logging(&config.log_config) {
        eprintln!("{} logging disabled: {e}", "WARN".yellow());
    }
    log::info!("#Start main()");

    let cli = Cli::parse();
    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{} {e}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &Config) -> Result<(), Box<dyn Error>> {
    let format = cli.format.unwrap_or(config.format);

    let text = match cli.command {
        Commands::Describe { address, prefix } => {
            let d = describe_cidr(&address, prefix.as_deref())?;
            render_describe(&d, format)?
        }
        Commands::Vlsm { base, subnets } => {
            let plan = plan_vlsm(&base, &subnets)?;
            render_vlsm(&plan, format)?
        }
    };
    print!("{text}");

    Ok(())
}

/// Use the log4rs yaml file when present, else warnings to stderr.
fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    if path.exists() {
        log4rs::init_file(path, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", path.display()))?;
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {t} - {m}{n}")))
        .build();
    let config = log4rs::config::Config::builder()
        .appender(log4rs::config::Appender::builder().build("stderr", Box::new(stderr)))
        .build(
            log4rs::config::Root::builder()
                .appender("stderr")
                .build(LevelFilter::Warn),
        )?;
    log4rs::init_config(config)?;
    Ok(())
}
