use std::path::PathBuf;

use numberlut_codegen::{generate, Language};

fn main() -> Result<(), Box<dyn std::error::Error>> {
   println!("cargo:rerun-if-changed=build.rs");
   println!("cargo:rerun-if-changed=src/c/host.c");

   let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);
   for language in [Language::C, Language::Rust] {
      std::fs::write(out_dir.join(language.default_file_name()), generate(language))?;
   }

   // Host consumer for the generated header; linked into the unit tests.
   cc::Build::new().file("src/c/host.c").include(&out_dir).compile("numberlut_host");

   Ok(())
}
