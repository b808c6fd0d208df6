use clap::Parser;

use solc_adapter::{adapter, ProgramArgs, Result};

fn main() {
  env_logger::init();

  let args = ProgramArgs::parse();
  if let Err(e) = run(&args) {
    eprintln!("{}", e);
    std::process::exit(1);
  }
}

fn run(args: &ProgramArgs) -> Result<()> {
  let output = adapter::run(args)?;
  println!("{}", adapter::render_output(&output)?);
  Ok(())
}
