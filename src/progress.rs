//! Progress reporting utilities.

use colored::Colorize;

/// Reports a task.
pub fn task(name: &str) {
   println!("{}", name.bold());
}

/// Reports that the run finished successfully.
pub fn done(message: &str) {
   println!("{}", message.green());
}
