// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! restlog CLI
//!
//! Performs a single logged request and prints the captured record.

use std::env;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use bytes::Bytes;
use restlog::{HttpClient, HttpClientConfig, Request, RestLogConfig};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("restlog=info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let config_path = option_value(&args, "--config");
    let timeout = match option_value(&args, "--timeout").map(str::parse::<u64>) {
        Some(Ok(ms)) => Some(Duration::from_millis(ms)),
        Some(Err(e)) => {
            eprintln!("Invalid --timeout: {}", e);
            return ExitCode::from(1);
        }
        None => None,
    };

    match args[1].as_str() {
        "fetch" => {
            if args.len() < 3 {
                eprintln!("Usage: restlog fetch <url> [--config <file>]");
                return ExitCode::from(1);
            }
            report(run(config_path, timeout, Request::get(&args[2]), Bytes::new()).await)
        }
        "post" => {
            if args.len() < 4 {
                eprintln!("Usage: restlog post <url> <body> [--config <file>]");
                return ExitCode::from(1);
            }
            let body = Bytes::from(args[3].clone());
            report(run(config_path, timeout, Request::post(&args[2]), body).await)
        }
        "--help" | "-h" | "help" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "--version" | "-v" | "version" => {
            println!("restlog {}", restlog::VERSION);
            ExitCode::SUCCESS
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"restlog - HTTP client with per-call request logging

USAGE:
    restlog <COMMAND> [OPTIONS]

COMMANDS:
    fetch <url>          GET a URL and print its request log
    post <url> <body>    POST a body and print its request log
    help                 Show this help message
    version              Show version information

OPTIONS:
    --config <file>      JSON client properties
    --timeout <ms>       Per-request timeout

EXAMPLES:
    restlog fetch https://example.com
    restlog post https://example.com/api '{{"id":1}}' --config client.json
"#
    );
}

fn option_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn build_client(config_path: Option<&str>) -> anyhow::Result<HttpClient> {
    let config = match config_path {
        Some(path) => RestLogConfig::from_file(path)
            .with_context(|| format!("failed to load {}", path))?
            .into_client_config()?,
        None => HttpClientConfig::default(),
    };
    Ok(HttpClient::with_config(config)?)
}

async fn run(
    config_path: Option<&str>,
    timeout: Option<Duration>,
    request: restlog::Result<Request>,
    body: Bytes,
) -> anyhow::Result<bool> {
    let client = build_client(config_path)?;
    let mut request = request.context("invalid request URL")?;
    if let Some(timeout) = timeout {
        request = request.timeout(timeout);
    }

    let (record, result) = client.execute_logged(request, body).await;
    println!("{}", serde_json::to_string_pretty(&record)?);

    match result {
        Ok(response) => {
            println!("\n=== Response ===");
            println!("Status: {}", response.status_code());
            println!("URL: {}", response.url);
            println!("Content-Type: {:?}", response.content_type());
            println!("Size: {} bytes", response.body_len());
            println!("Time: {}ms", response.response_time_ms);
            println!("\n{}", response.text_lossy());
            Ok(response.is_success())
        }
        Err(e) => {
            eprintln!("Request failed: {}", e);
            Ok(false)
        }
    }
}

fn report(outcome: anyhow::Result<bool>) -> ExitCode {
    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
