use super::StopMergeOperation;
use clap::Parser;

/// command line tool for grouping co-located delivery stops in route sheets
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct StopMergeApp {
    #[command(subcommand)]
    pub op: StopMergeOperation,
}
