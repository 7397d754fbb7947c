use mvcat::{cli, MvcatError};

fn main() {
    // Install global collector configured based on MVCAT_LOG env var.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("MVCAT_LOG"))
        .with_target(true)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_thread_ids(true)
        .init();

    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(num_cpus::get())
        .on_thread_start(|| tracing::trace!("thread start"))
        .on_thread_stop(|| tracing::trace!("thread stop"))
        .enable_io()
        .enable_time()
        .build()
        .unwrap()
        .block_on(async {
            run().await;
        })
}

async fn run() {
    // The command runs as a single future; ctrl-c drops it, which aborts
    // any in-flight request instead of letting a stale response land.
    let result = tokio::select! {
        result = run_inner() => result,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("interrupted");
            std::process::exit(130);
        }
    };

    if let Err(err) = result {
        let code = match err {
            MvcatError::Unauthenticated => {
                eprintln!("unauthenticated");
                2
            }
            MvcatError::Forbidden => {
                eprintln!("administrator role required");
                2
            }
            MvcatError::Validation { errors } => {
                for error in errors {
                    eprintln!("{}", error);
                }
                1
            }
            _ => {
                eprintln!("{}", err);
                1
            }
        };
        std::process::exit(code);
    };
}

async fn run_inner() -> mvcat::Result<()> {
    let command = cli::parse();
    let ctx = cli::context(command.client).await?;

    match command.command {
        cli::Command::Status(c) => c.run(&ctx).await,
        cli::Command::Register(c) => c.run(&ctx).await,
        cli::Command::Login(c) => c.run(&ctx).await,
        cli::Command::Logout(c) => c.run(&ctx).await,
        cli::Command::Movies(c) => c.run(&ctx).await,
    }
}
