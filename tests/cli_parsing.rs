//! CLI parsing tests for the drover command tree.

use clap::Parser;

use drover::cli::{Cli, Commands, KillCommands, MonitorCommands, StartCommands, StopCommands};

#[test]
fn parse_start_drain_with_defaults() {
    let cli = Cli::try_parse_from(["drover", "start", "drain", "host-a", "host-b"]).unwrap();

    match cli.command {
        Commands::Start(StartCommands::Drain { targets, interval, timeout }) => {
            assert_eq!(targets.hosts, vec!["host-a", "host-b"]);
            assert!(!targets.json);
            assert!(targets.json_file.is_none());
            assert_eq!(interval, 5);
            assert_eq!(timeout, 600);
        }
        _ => panic!("Wrong command"),
    }
    assert!(!cli.to_json);
}

#[test]
fn parse_start_drain_with_json_file() {
    let cli = Cli::try_parse_from([
        "drover",
        "start",
        "drain",
        "--json-file",
        "/tmp/hosts.json",
        "--interval",
        "2",
        "--timeout",
        "30",
    ])
    .unwrap();

    match cli.command {
        Commands::Start(StartCommands::Drain { targets, interval, timeout }) => {
            assert!(targets.hosts.is_empty());
            assert_eq!(
                targets.json_file.as_deref(),
                Some(std::path::Path::new("/tmp/hosts.json"))
            );
            assert_eq!(interval, 2);
            assert_eq!(timeout, 30);
        }
        _ => panic!("Wrong command"),
    }
}

#[test]
fn parse_sla_drain_flags() {
    let cli = Cli::try_parse_from([
        "drover",
        "start",
        "sla-drain",
        "host-a",
        "--percentage",
        "80",
        "--duration",
        "120",
        "--sla-limit",
        "1800",
    ])
    .unwrap();

    match cli.command {
        Commands::Start(StartCommands::SlaDrain {
            count,
            percentage,
            duration,
            sla_limit,
            interval,
            timeout,
            ..
        }) => {
            assert_eq!(count, None);
            assert_eq!(percentage, Some(80.0));
            assert_eq!(duration, 120);
            assert_eq!(sla_limit, 1800);
            // SLA drains poll slower and wait longer by default.
            assert_eq!(interval, 10);
            assert_eq!(timeout, 1200);
        }
        _ => panic!("Wrong command"),
    }
}

#[test]
fn parse_stop_drain_short_timeout_default() {
    let cli = Cli::try_parse_from(["drover", "stop", "drain", "host-a"]).unwrap();

    match cli.command {
        Commands::Stop(StopCommands::Drain { timeout, .. }) => assert_eq!(timeout, 60),
        _ => panic!("Wrong command"),
    }
}

#[test]
fn parse_monitor_hosts_statuses_list() {
    let cli = Cli::try_parse_from([
        "drover",
        "monitor",
        "hosts",
        "host-a",
        "--statuses",
        "none,draining",
    ])
    .unwrap();

    match cli.command {
        Commands::Monitor(MonitorCommands::Hosts { statuses, .. }) => {
            assert_eq!(statuses, vec!["none", "draining"]);
        }
        _ => panic!("Wrong command"),
    }
}

#[test]
fn monitor_hosts_statuses_default_to_drained() {
    let cli = Cli::try_parse_from(["drover", "monitor", "hosts", "host-a"]).unwrap();

    match cli.command {
        Commands::Monitor(MonitorCommands::Hosts { statuses, .. }) => {
            assert_eq!(statuses, vec!["DRAINED"]);
        }
        _ => panic!("Wrong command"),
    }
}

#[test]
fn parse_kill_instances() {
    let cli = Cli::try_parse_from([
        "drover", "kill", "instances", "-e", "prod", "-r", "www-data", "-n", "hello", "-i",
        "0,1,3", "--monitor", "false",
    ])
    .unwrap();

    match cli.command {
        Commands::Kill(KillCommands::Instances { job, instances, monitor, .. }) => {
            assert_eq!(job.environment, "prod");
            assert_eq!(job.role, "www-data");
            assert_eq!(job.name, "hello");
            assert_eq!(instances, vec![0, 1, 3]);
            assert!(!monitor);
        }
        _ => panic!("Wrong command"),
    }
}

#[test]
fn kill_instances_requires_job_key() {
    let result = Cli::try_parse_from(["drover", "kill", "instances", "-i", "0"]);
    assert!(result.is_err());
}

#[test]
fn global_to_json_flag_is_accepted_after_subcommand() {
    let cli =
        Cli::try_parse_from(["drover", "start", "drain", "host-a", "--to-json"]).unwrap();
    assert!(cli.to_json);
}

#[test]
fn global_scheduler_overrides_parse() {
    let cli = Cli::try_parse_from([
        "drover",
        "-s",
        "https://scheduler.example.com:8443",
        "-u",
        "ops",
        "-p",
        "hunter2",
        "stop",
        "drain",
        "host-a",
    ])
    .unwrap();

    assert_eq!(
        cli.scheduler_addr.as_deref(),
        Some("https://scheduler.example.com:8443")
    );
    assert_eq!(cli.username.as_deref(), Some("ops"));
    assert_eq!(cli.password.as_deref(), Some("hunter2"));
}
