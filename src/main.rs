use std::process::ExitCode;

fn main() -> ExitCode {
    match url_sieve::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("url-sieve error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
