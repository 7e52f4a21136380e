// src/main.rs

use proc_chain::chain::FAILURE_EXIT_CODE;
use proc_chain::{cli, config, logging, run};

// One task, one thread: awaiting the child is the only thing this process does.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    match run_main().await {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("proc-chain error: {err:?}");
            std::process::exit(FAILURE_EXIT_CODE);
        }
    }
}

async fn run_main() -> anyhow::Result<i32> {
    let args = cli::parse();
    let cfg = config::load_default()?;
    logging::init_logging(&cfg.logging.level)?;
    run(args, &cfg).await
}
