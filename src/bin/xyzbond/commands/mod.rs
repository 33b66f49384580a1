mod bonds;
mod elements;

use bonds::run_bonds;
use elements::run_elements;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Bonds(args) => run_bonds(args, ctx),
        Command::Elements(args) => run_elements(args, ctx),
    }
}
