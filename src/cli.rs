use crate::search::DEFAULT_LIMIT;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "native-docs")]
#[command(about = "Serve namespaced native function reference docs", long_about = None, version)]
pub struct Cli {
    /// Directory containing namespace subdirectories of markdown docs
    #[arg(long, env = "NATIVE_DOCS_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Socket address to listen on
    #[arg(long, env = "NATIVE_DOCS_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Maximum number of search suggestions returned
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub suggest_limit: usize,
}
