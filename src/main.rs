use std::io::Cursor;

use anyhow::Context;
use clap::Parser;
use dnsq::{
    new_named_query, parse_header, Client, Flags, Header, RecordType, CLASS_IN, RECURSION_FLAG,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dnsq")]
#[command(version)]
#[command(about = "Send a single DNS query over UDP and print the response header")]
struct Cli {
    /// Domain name to look up
    name: String,

    /// Resolver address
    #[arg(short = 's', long, default_value = "8.8.8.8")]
    server: String,

    /// Resolver port
    #[arg(short = 'p', long, default_value_t = 53)]
    port: u16,

    /// Query type (A, AAAA, MX, ...)
    #[arg(short = 't', long = "type", default_value = "A")]
    type_: RecordType,

    /// Clear the recursion desired flag
    #[arg(long)]
    no_recursion: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let flags = if cli.no_recursion {
        Flags::default()
    } else {
        Flags::new(RECURSION_FLAG)
    };
    let header = Header::query(flags);
    let request = new_named_query(&header, cli.name.as_bytes(), cli.type_ as u16, CLASS_IN);

    info!(id = header.id, name = %cli.name, type_ = ?cli.type_, "querying {}:{}", cli.server, cli.port);

    let client = Client::new(cli.server, cli.port);
    let response = client
        .send_query(&request)
        .context("query failed")?;

    let response = parse_header(&mut Cursor::new(&response[..]))
        .with_context(|| format!("lookup of {} failed", cli.name))?;

    println!("{:#?}", response);
    println!("response code: {:?}", response.flags.response_code());

    Ok(())
}
