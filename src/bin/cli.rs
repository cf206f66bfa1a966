//! RHCP CLI Client
//!
//! Command-line client speaking RHCP/1.0 over TCP.

use std::io::{Read, Write};
use std::net::{Shutdown, TcpStream};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

/// RHCP CLI
#[derive(Parser, Debug)]
#[command(name = "rhcp-cli")]
#[command(about = "CLI client for the RHCP status protocol")]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:7070")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Query the recorded status of an object
    Get {
        /// The object to query
        object: String,
    },

    /// Set the status of an object
    Set {
        /// The object to update
        object: String,

        /// The new status (on or off)
        status: String,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    // the version token carries the RHCP/ prefix so the server-side
    // registry can find it in the raw text
    let request = match &args.command {
        Commands::Get { object } => format!("GET {} RHCP/1.0\r\n\r\n\r\n", object),
        Commands::Set { object, status } => {
            format!("SET {} RHCP/1.0\r\nStatus: {}\r\n\r\n\r\n", object, status)
        }
    };

    match exchange(&args.server, &request) {
        Ok(response) => {
            print!("{}", response);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Send one request and read the full response.
///
/// The write side is shut down after sending so the server sees end of
/// input and processes the request.
fn exchange(server: &str, request: &str) -> std::io::Result<String> {
    let mut stream = TcpStream::connect(server)?;
    stream.write_all(request.as_bytes())?;
    stream.shutdown(Shutdown::Write)?;

    let mut response = String::new();
    stream.read_to_string(&mut response)?;
    Ok(response)
}
