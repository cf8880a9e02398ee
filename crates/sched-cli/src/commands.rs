//! Subcommand implementations.

use anyhow::{Context, Result};

use sched_cli::pipeline::{PipelineOutput, load_sheets, validate_file};
use sched_model::DayType;
use sched_report::{
    DescriptionFormat, at_hour, coverage_table, describe, gap_table, hour_label, period_views,
    verdict_line,
};

use crate::cli::{DescribeArgs, DescribeFormatArg, HoursArgs, InputArgs, ValidateArgs};

/// Run the validation pipeline and print the report. Returns whether
/// any gaps were found at the study-type level.
pub fn run_validate(args: &ValidateArgs) -> Result<bool> {
    let output = validate_file(&args.input.file)?;
    if args.json {
        print_json(&output)?;
    } else {
        print_tables(&output, !args.no_categories);
    }
    Ok(!output.report.passed())
}

fn print_json(output: &PipelineOutput) -> Result<()> {
    let json = serde_json::to_string_pretty(&output.report).context("serialize report")?;
    println!("{json}");
    Ok(())
}

fn print_tables(output: &PipelineOutput, categories: bool) {
    println!("Study type coverage");
    println!("{}", coverage_table(&output.matrix, "Study type"));
    if categories {
        println!();
        println!("Category coverage");
        println!("{}", coverage_table(&output.categories, "Category"));
    }
    println!();
    if output.report.passed() {
        println!("No coverage gaps found");
    } else {
        println!("Coverage gaps");
        println!("{}", gap_table(&output.report.gaps));
    }
    println!();
    println!(
        "Sheets: {}  Study types: {}  Coverage markers: {}",
        output.report.sheet_count, output.report.subject_count, output.report.marker_count
    );
    println!("{}", verdict_line(&output.report));
}

pub fn run_sheets(args: &InputArgs) -> Result<()> {
    let sheets = load_sheets(&args.file)?;
    for period in period_views(&sheets) {
        let specialty = period
            .specialty
            .map(|specialty| format!(" ({specialty})"))
            .unwrap_or_default();
        // Sheets outside the known ranges run through extended hours.
        let time_range = period.time_range.map_or("extended hours", |rule| rule.label);
        println!(
            "{}: {} / {}{}  [{} study types]",
            period.sheet_name,
            period.day_type,
            time_range,
            specialty,
            period.study_types().len()
        );
    }
    Ok(())
}

pub fn run_describe(args: &DescribeArgs) -> Result<()> {
    let sheets = load_sheets(&args.input.file)?;
    let format = match args.format {
        DescribeFormatArg::Short => DescriptionFormat::Short,
        DescribeFormatArg::Medium => DescriptionFormat::Medium,
        DescribeFormatArg::Long => DescriptionFormat::Long,
        DescribeFormatArg::Patient => DescriptionFormat::PatientFriendly,
    };
    let mut study_types: Vec<&str> = sheets
        .iter()
        .flat_map(|sheet| sheet.studies.keys().map(String::as_str))
        .collect();
    study_types.sort_unstable();
    study_types.dedup();
    for study_type in study_types {
        println!("{study_type}");
        println!("    -> {}", describe(study_type, format));
    }
    Ok(())
}

pub fn run_hours(args: &HoursArgs) -> Result<()> {
    let sheets = load_sheets(&args.input.file)?;
    let periods = period_views(&sheets);
    let day_type = if args.weekend {
        DayType::Weekend
    } else {
        DayType::Weekday
    };
    let selected: Vec<_> = match args.hour {
        Some(hour) => at_hour(&periods, hour, day_type),
        None => periods
            .iter()
            .filter(|period| period.day_type == day_type)
            .collect(),
    };
    if selected.is_empty() {
        match args.hour {
            Some(hour) => println!("No coverage found for {day_type} at {}", hour_label(hour)),
            None => println!("No {day_type} sheets found"),
        }
        return Ok(());
    }
    for period in selected {
        let specialty = period
            .specialty
            .map(|specialty| format!(" ({specialty})"))
            .unwrap_or_default();
        println!("Time period: {}{specialty}", period.time_range_label());
        for (position, studies) in &period.assignments {
            println!("  {position}:");
            for study_type in studies {
                println!("    - {study_type}");
            }
        }
        println!();
    }
    Ok(())
}
