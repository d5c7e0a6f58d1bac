use anyhow::Result;
use clap::{Arg, Command};

use ndm::commands;

fn main() -> Result<()> {
    ndm::init_logging();

    let matches = build_cli().get_matches();

    if matches.get_flag("version") {
        println!("ndm version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    match matches.subcommand() {
        Some(("provision", sub_matches)) => commands::provision::execute(sub_matches),
        Some(("config", sub_matches)) => commands::config::execute(sub_matches),
        Some(("ping", sub_matches)) => commands::health::ping(sub_matches),
        Some(("status", sub_matches)) => commands::health::status(sub_matches),
        Some(("uptime", sub_matches)) => commands::health::uptime(sub_matches),
        Some(("metrics", sub_matches)) => commands::metrics::execute(sub_matches),
        Some(("completions", sub_matches)) => {
            let mut cli = build_cli();
            commands::completions::execute(sub_matches, &mut cli)
        }
        Some(("version", _)) => commands::version::execute(),
        _ => {
            println!("Welcome to ndm CLI!");
            println!("Use 'ndm --help' for more information.");
            Ok(())
        }
    }
}

fn build_cli() -> Command {
    Command::new("ndm")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Network device configuration management and health monitoring")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(with_device_args(
            Command::new("provision")
                .about("Run the full provisioning walkthrough for a device")
                .arg(
                    Arg::new("username")
                        .short('u')
                        .long("username")
                        .value_name("USERNAME")
                        .help("Login username for the device")
                        .default_value("admin"),
                )
                .arg(
                    Arg::new("password")
                        .short('p')
                        .long("password")
                        .value_name("PASSWORD")
                        .help("Login password for the device")
                        .default_value("password123"),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("FILE")
                        .help("Path of the configuration file to write")
                        .default_value("device-config.json"),
                ),
        ))
        .subcommand(
            Command::new("config")
                .about("Manage device configuration files (use 'ndm config --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(with_device_args(
                    Command::new("generate")
                        .about("Generate a configuration file from device details")
                        .arg(
                            Arg::new("output")
                                .short('o')
                                .long("output")
                                .value_name("FILE")
                                .help("Path of the configuration file to write")
                                .default_value("device-config.json"),
                        ),
                ))
                .subcommand(
                    Command::new("show")
                        .about("Show the contents of a configuration file")
                        .arg(
                            Arg::new("file")
                                .help("Configuration file to read")
                                .index(1)
                                .default_value("device-config.json"),
                        ),
                )
                .subcommand(
                    Command::new("validate")
                        .about("Check that a configuration file has all required keys")
                        .arg(
                            Arg::new("file")
                                .help("Configuration file to check")
                                .index(1)
                                .default_value("device-config.json"),
                        ),
                )
                .subcommand(
                    Command::new("clear")
                        .about("Reset a configuration file (decommissioning)")
                        .arg(
                            Arg::new("file")
                                .help("Configuration file to reset")
                                .index(1)
                                .default_value("device-config.json"),
                        ),
                ),
        )
        .subcommand(
            Command::new("ping")
                .about("Check whether a device responds to ping")
                .arg(
                    Arg::new("host")
                        .help("IP address or hostname of the device")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("retries")
                        .short('r')
                        .long("retries")
                        .value_name("N")
                        .help("Number of attempts before giving up")
                        .value_parser(clap::value_parser!(u32))
                        .default_value("1"),
                ),
        )
        .subcommand(
            Command::new("status")
                .about("Report whether a device is online or unreachable")
                .arg(
                    Arg::new("host")
                        .help("IP address or hostname of the device")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("uptime")
                .about("Report device uptime and recent-reboot status")
                .arg(
                    Arg::new("host")
                        .help("IP address or hostname of the device")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("metrics")
                .about("Sample device metrics and evaluate alert thresholds")
                .arg(
                    Arg::new("host")
                        .help("IP address or hostname of the device")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("device-id")
                        .long("device-id")
                        .value_name("ID")
                        .help("Device identifier for threshold bookkeeping (defaults to the address)"),
                )
                .arg(
                    Arg::new("cpu-limit")
                        .long("cpu-limit")
                        .value_name("PERCENT")
                        .help("Alert when CPU usage exceeds this percentage")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("memory-limit")
                        .long("memory-limit")
                        .value_name("PERCENT")
                        .help("Alert when memory usage exceeds this percentage")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("bandwidth-limit")
                        .long("bandwidth-limit")
                        .value_name("MBPS")
                        .help("Alert when combined traffic exceeds this bandwidth")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the metrics snapshot as JSON")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for (bash, zsh, fish, powershell, elvish)")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}

/// Attach the shared device-description flags.
///
/// Defaults describe the walkthrough's sample device.
fn with_device_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("id")
            .long("id")
            .value_name("ID")
            .help("Unique device identifier")
            .default_value("1"),
    )
    .arg(
        Arg::new("ip")
            .long("ip")
            .value_name("ADDR")
            .help("IP address of the device")
            .default_value("192.168.1.10"),
    )
    .arg(
        Arg::new("status")
            .long("status")
            .value_name("STATUS")
            .help("Operational status (active or inactive)")
            .default_value("inactive"),
    )
    .arg(
        Arg::new("role")
            .long("role")
            .value_name("ROLE")
            .help("Role of the device in the network (e.g. Router, Switch)")
            .default_value("Router"),
    )
    .arg(
        Arg::new("os")
            .long("os")
            .value_name("OS")
            .help("Operating system family (e.g. IOS-XE, IOS-XR, NX-OS)")
            .default_value("IOS-XE"),
    )
    .arg(
        Arg::new("location")
            .long("location")
            .value_name("LOCATION")
            .help("Physical or logical location of the device")
            .default_value("Data Center A"),
    )
    .arg(
        Arg::new("tag")
            .long("tag")
            .value_name("TAG")
            .help("Categorization tag for the device")
            .default_value("Core-Router"),
    )
}
