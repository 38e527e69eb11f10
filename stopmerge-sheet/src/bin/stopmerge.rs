//! groups the delivery stops of route sheets that share a drop-off point,
//! writing one grouped csv per route.
use clap::Parser;
use stopmerge_sheet::app::StopMergeApp;

fn main() {
    env_logger::init();
    let args = StopMergeApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("stopmerge failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
