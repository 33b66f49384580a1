use anyhow::{Context, Result, bail};
use log::{info, warn};
use xyzbond::{BondDetector, BondSet, Strategy, Structure, StructureLoader};

use crate::cli::{BondsArgs, ReportFormat};
use crate::config::{build_detect_config, load_table};
use crate::display::{
    Context as DisplayContext, Progress, print_bond_summary, print_element_distribution,
    print_structure_info,
};
use crate::io::Endpoint;
use crate::report::{write_json, write_text};

const TOTAL_STEPS: u8 = 4;

pub fn run_bonds(args: BondsArgs, ctx: DisplayContext) -> Result<()> {
    let input = Endpoint::input(args.input.as_deref());
    let output = Endpoint::output(args.io.output.as_deref());
    if input.is_interactive_stdin() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUsage: xyzbond bonds <INPUT> or pipe XYZ data via stdin."
        );
    }

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Loading element table");
    let (table, source) = load_table(&args.table)?;
    progress.complete_step(
        "Loading element table",
        &[format!("{} elements from {source}", table.len())],
    );

    progress.step("Reading structure");
    let center = !args.no_center;
    let structure = StructureLoader::new(&table)
        .read(input.reader()?, center)
        .with_context(|| format!("Failed to read structure from {input}"))?;
    info!(
        "read {} atoms from {input} (centered: {})",
        structure.atom_count(),
        structure.is_centered()
    );
    if structure.is_large() {
        info!(
            "structure has {} atoms; consider --strategy grid",
            structure.atom_count()
        );
    }
    progress.complete_step("Reading structure", &read_details(&structure, center));

    if ctx.interactive {
        print_structure_info(&structure);
        print_element_distribution(&structure);
    }

    progress.step("Detecting bonds");
    let config = build_detect_config(&args.detect);
    let bonds = BondDetector::new(config).detect(&structure);
    warn_overbonded(&structure, &bonds);
    progress.complete_step(
        "Detecting bonds",
        &[
            format!("{} bonds", bonds.bond_count()),
            format!("{:?} threshold", config.threshold),
            strategy_name(config.strategy).to_string(),
        ],
    );

    if ctx.interactive {
        print_bond_summary(&structure, &bonds);
    }

    progress.step("Writing report");
    let out = output.writer()?;
    let written = match args.format {
        ReportFormat::Text => write_text(out, &structure, &bonds),
        ReportFormat::Json => write_json(out, &structure, &bonds),
    };
    written.context("Failed to write bond report")?;
    progress.complete_step(
        "Writing report",
        &[format!("{:?} report to {output}", args.format)],
    );

    progress.finish();

    Ok(())
}

fn read_details(structure: &Structure, center: bool) -> Vec<String> {
    let mut details = vec![
        format!("Parse {} atom lines", structure.atom_count()),
        "Shift origin to the bounding-box minimum".to_string(),
    ];
    if center {
        details.push("Center on the centroid".to_string());
    }
    details
}

fn strategy_name(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::BruteForce => "All-pairs scan",
        Strategy::Grid => "Spatial grid scan",
        Strategy::Parallel => "Parallel all-pairs scan",
    }
}

fn warn_overbonded(structure: &Structure, bonds: &BondSet) {
    let degrees = bonds.degrees(structure.atom_count());
    for atom in bonds.overbonded(structure) {
        warn!(
            "atom {atom} ({}) has {} bonds, above its maximum of {}",
            structure.symbols()[atom],
            degrees[atom],
            structure.max_bonds()[atom]
        );
    }
}
