use std::process::ExitCode;

use quiz_extract::orchestrator::parse_args;
use quiz_extract::utils::logging;
use quiz_extract::{App, Config};
use tracing::error;

fn main() -> ExitCode {
    let input = match parse_args(std::env::args()) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    // 加载配置
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    // 初始化日志
    logging::init(config.verbose_logging);

    let result = App::new(&config).and_then(|app| app.run(&input));

    match result {
        Ok(summary) if summary.succeeded() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            error!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}
