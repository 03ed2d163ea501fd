include!("src/cli.rs");

use clap::{Command as ClapCommand, CommandFactory, ValueEnum};
use clap_complete::Shell;
use clap_mangen::Man;
use std::env::var_os;
use std::fs::create_dir_all;
use std::io::{Error, Result};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    let out_dir = PathBuf::from(var_os("OUT_DIR").ok_or_else(|| Error::other("OUT_DIR is not set"))?);
    let mut app = Args::command();
    write_completions(&mut app, &out_dir.join("complete"))?;
    write_man_pages(&app, &out_dir.join("man"))
}

/// One completion script per shell supported by clap_complete.
fn write_completions(app: &mut ClapCommand, dir: &Path) -> Result<()> {
    create_dir_all(dir)?;
    let bin_name = app.get_name().to_owned();
    for shell in Shell::value_variants() {
        clap_complete::generate_to(*shell, app, &bin_name, dir)?;
    }
    Ok(())
}

/// `xmlchars.1` plus one page per subcommand (`check.1`, `classify.1`, `ranges.1`).
fn write_man_pages(app: &ClapCommand, dir: &Path) -> Result<()> {
    create_dir_all(dir)?;
    let pages = [app.clone()]
        .into_iter()
        .chain(app.get_subcommands().cloned());
    for page in pages {
        Man::new(page.disable_help_subcommand(true)).generate_to(dir)?;
    }
    Ok(())
}
