use std::{env, fs, num::ParseIntError, path::PathBuf};

const DEFAULT_SIZE: usize = 5;
const SIZES: std::ops::RangeInclusive<usize> = 1..=16;

fn parse_size(s: &str) -> Result<usize, String> {
    let size = s.trim().parse::<usize>().map_err(|e: ParseIntError| e.to_string())?;
    if SIZES.contains(&size) {
        Ok(size)
    } else {
        Err(format!(
            "The value must be in [{}..={}]",
            SIZES.start(),
            SIZES.end()
        ))
    }
}

fn main() -> std::io::Result<()> {
    let size = match env::var("WORDLE_SIZE") {
        Ok(size) => match parse_size(&size) {
            Ok(size) => size,
            Err(e) => {
                eprintln!("Could not parse WORDLE_SIZE ('{size}') into a valid word length: {e}");
                std::process::exit(1);
            }
        },
        Err(_) => DEFAULT_SIZE,
    };

    println!("cargo:rerun-if-env-changed=WORDLE_SIZE");
    println!("cargo:rerun-if-changed=build.rs");

    let out = PathBuf::from(env::var_os("OUT_DIR").unwrap_or_default()).join("word_length.rs");
    fs::write(
        out,
        format!("/// Number of letters in every word\npub const WORD_LENGTH: usize = {size};\n"),
    )
}
