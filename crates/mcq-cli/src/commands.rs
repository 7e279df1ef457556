use anyhow::Result;
use comfy_table::Table;
use tracing::info_span;

use mcq_cli::pipeline::{process_file, render_json};
use mcq_model::{MagnitudePolicy, McqError, ProcessingOptions, Subscale};

use crate::cli::ProcessArgs;
use crate::summary::apply_table_style;
use crate::types::ProcessResult;

pub fn run_subscales() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        "Subscale",
        "Item",
        "Weight",
        "Sequence",
        "Completeness",
        "Magnitude",
    ]);
    apply_table_style(&mut table);
    for subscale in Subscale::ALL {
        for item in subscale.items() {
            table.add_row(vec![
                subscale.label().to_string(),
                item.field.to_string(),
                item.weight.to_string(),
                subscale.sequence_field().to_string(),
                subscale.completeness_field().to_string(),
                subscale.magnitude_field().to_string(),
            ]);
        }
    }
    println!("{table}");
    Ok(())
}

pub fn run_process(args: &ProcessArgs) -> Result<ProcessResult> {
    let Some(source) = args.file.clone() else {
        return Err(McqError::MissingInput.into());
    };
    let span = info_span!("process_command", source = %source.display());
    let _guard = span.enter();

    let options = processing_options(args);
    let report = process_file(&source, &options)?;
    let output = render_json(&report.dataset)?;
    Ok(ProcessResult {
        source,
        output,
        summary: report.summary,
    })
}

fn processing_options(args: &ProcessArgs) -> ProcessingOptions {
    let policy = if args.strict {
        MagnitudePolicy::Reject
    } else {
        MagnitudePolicy::Propagate
    };
    ProcessingOptions::default()
        .with_completeness_threshold(args.threshold)
        .with_magnitude_policy(policy)
}
