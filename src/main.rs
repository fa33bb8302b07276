use std::process::ExitCode;

fn main() -> ExitCode {
    match pummel::entry::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pummel: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
