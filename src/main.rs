use std::path::PathBuf;

use numberlut_codegen::{generate, Language};
use structopt::StructOpt;

mod output;
mod progress;

#[derive(StructOpt)]
#[structopt(name = "numberlut")]
struct Args {
   /// Where to save the generated table.
   ///
   /// Defaults to `src/c/generated/numberlut.h` for C and `src/generated/numberlut.rs` for Rust.
   output_file: Option<PathBuf>,

   /// The language to emit the table in (`c` or `rust`).
   #[structopt(long, default_value = "c")]
   lang: Language,

   /// Don't write anything; fail if the output file is missing or out of date.
   #[structopt(long)]
   check: bool,

   /// Prints the table to stdout instead of saving it.
   #[structopt(long, conflicts_with_all = &["check", "output-file"])]
   stdout: bool,
}

impl Args {
   fn output_file(&self) -> PathBuf {
      self.output_file.clone().unwrap_or_else(|| {
         let dir = match self.lang {
            Language::C => "src/c/generated",
            Language::Rust => "src/generated",
         };
         PathBuf::from(dir).join(self.lang.default_file_name())
      })
   }
}

fn main() -> anyhow::Result<()> {
   let args = Args::from_args();
   let code = generate(args.lang);

   if args.stdout {
      print!("{}", code);
      return Ok(());
   }

   let output_file = args.output_file();
   if args.check {
      progress::task(&format!("Checking {}", output_file.display()));
      if !output::is_up_to_date(&output_file, &code)? {
         anyhow::bail!(
            "{} is out of date; rerun numberlut to regenerate it",
            output_file.display()
         );
      }
      progress::done("Up to date");
   } else {
      progress::task(&format!("Writing {} lookup table to {}", args.lang, output_file.display()));
      output::write_atomically(&output_file, &code)?;
      progress::done("Done");
   }

   Ok(())
}
