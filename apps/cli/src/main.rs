use std::process::ExitCode;

fn main() -> ExitCode {
    match bilingual_decks::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
