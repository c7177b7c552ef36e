use std::{env, process};

use exprc::{compile, display_error};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: exprc <expression>");
        process::exit(1);
    }

    let source = &args[1];

    match compile(source) {
        Ok(asm) => print!("{asm}"),
        Err(error) => {
            display_error(source, &error);
            process::exit(1);
        }
    }
}
