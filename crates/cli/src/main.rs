use std::process::ExitCode;

fn main() -> ExitCode {
    gameshelf_cli::run()
}
