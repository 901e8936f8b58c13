//! Build script for the genre filter CLI.
//!
//! Copies the configuration template and the default genre vocabulary from
//! the crate root into the user's local data directory so that a freshly
//! built binary finds both files where it expects them at runtime.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` and `genres.txt` into `<data_local_dir>/genresift/`.
///
/// Missing source files produce a cargo warning instead of failing the
/// build; directory creation and write failures are fatal.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the templates change
    println!("cargo:rerun-if-changed=.env.example");
    println!("cargo:rerun-if-changed=genres.txt");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("genresift");
    fs::create_dir_all(&out_dir)?;

    for name in [".env.example", "genres.txt"] {
        let source = manifest_dir.join(name);
        if source.is_file() {
            let contents = fs::read_to_string(&source)?;
            fs::write(out_dir.join(name), contents)?;
        } else {
            println!("cargo:warning={} not found at {}", name, source.display());
        }
    }

    Ok(())
}
