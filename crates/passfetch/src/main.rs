use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Retrieve a password from the given source and print it on stdout
#[derive(Parser, Debug)]
#[command(name = "passfetch", version)]
#[command(about = "Retrieve a password from a configurable source")]
struct Cli {
    /// Password source: cmd:command, env:var, fd:num, file:pathname,
    /// keychain:name, lpass:name, op:name, pass:password, stdin, tty[:prompt]
    source: Option<String>,
}

fn main() {
    // Diagnostics go to stderr; stdout carries only the secret.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match passfetch_sources::getpass(cli.source.as_deref()) {
        Ok(secret) => println!("{secret}"),
        Err(err) => {
            let source = cli.source.as_deref().unwrap_or("tty");
            eprintln!("passfetch: unable to get password using '{source}': {err}");
            std::process::exit(1);
        }
    }
}
