// SPDX-FileCopyrightText: 2026 Procserve Contributors
// SPDX-License-Identifier: MIT

//! Procserve CLI entrypoint.
//!
//! By default this serves MCP over streamable HTTP at
//! `http://127.0.0.1:<port>/mcp`.
//!
//! Use `--stdio` to run the MCP server over stdio instead (intended for tool
//! integrations).

use std::error::Error;

const DEFAULT_HTTP_PORT: u16 = 8000;
const DEFAULT_BIND_ADDR: &str = "127.0.0.1";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--port <port>] [--bind <addr>]\n  {program} --stdio\n\nHTTP mode (default) serves MCP at `http://<addr>:<port>/mcp`.\n--port selects the port (0 = ephemeral; default {DEFAULT_HTTP_PORT}).\n--bind selects the listen address (default {DEFAULT_BIND_ADDR}).\n\n--stdio serves MCP over stdin/stdout and cannot be combined with --port/--bind."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    stdio: bool,
    port: Option<u16>,
    bind: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--stdio" => {
                if options.stdio {
                    return Err(());
                }
                options.stdio = true;
            }
            "--port" => {
                if options.port.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let port: u16 = raw.parse().map_err(|_| ())?;
                options.port = Some(port);
            }
            "--bind" => {
                if options.bind.is_some() {
                    return Err(());
                }
                let addr = args.next().ok_or(())?;
                options.bind = Some(addr);
            }
            _ => return Err(()),
        }
    }

    if options.stdio && (options.port.is_some() || options.bind.is_some()) {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "procserve".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let mcp = procserve::mcp::ProcServeMcp::new();
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        if options.stdio {
            runtime.block_on(mcp.serve_stdio())?;
            return Ok(());
        }

        let port = options.port.unwrap_or(DEFAULT_HTTP_PORT);
        let bind = options.bind.unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());

        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind((bind.as_str(), port)).await?;
            let addr = listener.local_addr()?;
            eprintln!("procserve: serving MCP at http://{addr}/mcp");

            axum::serve(listener, mcp.http_app())
                .with_graceful_shutdown(async {
                    let _ = tokio::signal::ctrl_c().await;
                })
                .await?;
            Ok::<(), Box<dyn Error>>(())
        })?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("procserve: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    #[test]
    fn parses_empty_args() {
        let options = parse_options(std::iter::empty()).expect("parse options");
        assert_eq!(options, CliOptions::default());
    }

    #[test]
    fn parses_stdio_flag() {
        let options = parse_options(["--stdio".to_owned()].into_iter()).expect("parse options");
        assert!(options.stdio);
        assert_eq!(options.port, None);
        assert_eq!(options.bind, None);
    }

    #[test]
    fn parses_port() {
        let options = parse_options(["--port".to_owned(), "1234".to_owned()].into_iter())
            .expect("parse options");
        assert_eq!(options.port, Some(1234));
        assert!(!options.stdio);
    }

    #[test]
    fn parses_bind_with_port_in_any_order() {
        let options = parse_options(
            ["--bind".to_owned(), "0.0.0.0".to_owned(), "--port".to_owned(), "0".to_owned()]
                .into_iter(),
        )
        .expect("parse options");
        assert_eq!(options.bind.as_deref(), Some("0.0.0.0"));
        assert_eq!(options.port, Some(0));

        let options = parse_options(
            ["--port".to_owned(), "0".to_owned(), "--bind".to_owned(), "0.0.0.0".to_owned()]
                .into_iter(),
        )
        .expect("parse options");
        assert_eq!(options.bind.as_deref(), Some("0.0.0.0"));
        assert_eq!(options.port, Some(0));
    }

    #[test]
    fn rejects_port_with_stdio_mode() {
        parse_options(["--stdio".to_owned(), "--port".to_owned(), "0".to_owned()].into_iter())
            .unwrap_err();
    }

    #[test]
    fn rejects_bind_with_stdio_mode() {
        parse_options(
            ["--bind".to_owned(), "0.0.0.0".to_owned(), "--stdio".to_owned()].into_iter(),
        )
        .unwrap_err();
    }

    #[test]
    fn rejects_unknown_args() {
        parse_options(["--nope".to_owned()].into_iter()).unwrap_err();
        parse_options(["stray".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_flags() {
        parse_options(["--stdio".to_owned(), "--stdio".to_owned()].into_iter()).unwrap_err();

        parse_options(
            ["--port".to_owned(), "1".to_owned(), "--port".to_owned(), "2".to_owned()].into_iter(),
        )
        .unwrap_err();
    }

    #[test]
    fn rejects_invalid_or_missing_port_value() {
        parse_options(["--port".to_owned()].into_iter()).unwrap_err();
        parse_options(["--port".to_owned(), "not-a-port".to_owned()].into_iter()).unwrap_err();
        parse_options(["--port".to_owned(), "65536".to_owned()].into_iter()).unwrap_err();
    }
}
