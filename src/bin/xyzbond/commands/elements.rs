use anyhow::{Context, Result};

use crate::cli::ElementsArgs;
use crate::config::load_table;
use crate::display::{Context as DisplayContext, Progress};
use crate::io::Endpoint;
use crate::report::write_table;

const TOTAL_STEPS: u8 = 2;

pub fn run_elements(args: ElementsArgs, ctx: DisplayContext) -> Result<()> {
    let output = Endpoint::output(args.io.output.as_deref());
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Loading element table");
    let (table, source) = load_table(&args.table)?;
    progress.complete_step(
        "Loading element table",
        &[format!("{} elements from {source}", table.len())],
    );

    progress.step("Writing table");
    let out = output.writer()?;
    write_table(out, &table).context("Failed to write element table")?;
    progress.complete_step(
        "Writing table",
        &[format!("to {output}")],
    );

    progress.finish();

    Ok(())
}
