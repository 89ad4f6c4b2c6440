use std::env;
use std::path::PathBuf;
use std::process;

mod audio;
mod keymap;
mod run;

fn main() {
    env_logger::init();

    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "ocho".to_string());
    let rom = match (args.next(), args.next()) {
        (Some(rom), None) => PathBuf::from(rom),
        _ => {
            eprintln!("usage: {} <rom>", program);
            process::exit(1);
        }
    };

    if let Err(e) = run::run(rom) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
