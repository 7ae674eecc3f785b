use std::io;

fn main() {
    texasduel_cli::logging::init_logging();
    let code = texasduel_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
