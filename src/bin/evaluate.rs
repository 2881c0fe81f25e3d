//! Batch evaluation harness.
//!
//! Loads a labeled JSON test set (an array of
//! `{"text": ..., "result": {"province": ..., "district": ..., "ward": ...}}`
//! records), resolves every `text`, scores each component against the
//! expected label, and prints an accuracy and timing summary. A per-case
//! detail report can be written as CSV.
//!
//! Usage: vietaddr-eval <test-file.json> [--data-dir DIR] [--csv PATH]

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::process;
use std::time::Instant;

use serde::Deserialize;

use vietaddr::profiling::PerformanceProfiler;
use vietaddr::{AddressResult, VietAddr, VietAddrConfig};

#[derive(Debug, Deserialize)]
struct TestCase {
    text: String,
    result: Expected,
}

#[derive(Debug, Deserialize)]
struct Expected {
    province: String,
    district: String,
    ward: String,
}

struct Options {
    test_file: String,
    data_dir: Option<String>,
    csv_path: Option<String>,
}

fn parse_args() -> Result<Options, String> {
    let mut test_file: Option<String> = None;
    let mut data_dir: Option<String> = None;
    let mut csv_path: Option<String> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data-dir" => {
                data_dir = Some(args.next().ok_or("--data-dir requires a value")?);
            }
            "--csv" => {
                csv_path = Some(args.next().ok_or("--csv requires a value")?);
            }
            "--help" | "-h" => {
                println!("Usage: vietaddr-eval <test-file.json> [--data-dir DIR] [--csv PATH]");
                process::exit(0);
            }
            _ if test_file.is_none() => test_file = Some(arg),
            _ => return Err(format!("unexpected argument: {arg}")),
        }
    }

    Ok(Options {
        test_file: test_file.ok_or("missing test file argument")?,
        data_dir,
        csv_path,
    })
}

/// Lenient label comparison: case-insensitive, and leading zeros are not
/// significant for purely numeric labels ("01" scores as "1").
fn canon_label(label: &str) -> String {
    let lowered = label.trim().to_lowercase();
    if !lowered.is_empty() && lowered.chars().all(|c| c.is_ascii_digit()) {
        let stripped = lowered.trim_start_matches('0');
        if stripped.is_empty() {
            "0".to_string()
        } else {
            stripped.to_string()
        }
    } else {
        lowered
    }
}

fn labels_match(expected: &str, extracted: &str) -> bool {
    canon_label(expected) == canon_label(extracted)
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let options = parse_args()?;

    println!("Loading test data from {}...", options.test_file);
    let raw = fs::read_to_string(&options.test_file)?;
    let cases: Vec<TestCase> = serde_json::from_str(&raw)?;
    println!("Loaded {} test cases.\n", cases.len());

    println!("Building resolver from gazetteer...");
    let mut builder = VietAddrConfig::builder();
    if let Some(dir) = &options.data_dir {
        builder = builder.data_dir(dir);
    }
    let vietaddr = VietAddr::with_config(builder.build())?;
    println!("Resolver ready.\n");

    let profiler = PerformanceProfiler::new();
    let mut correct = [0usize; 3]; // province, district, ward
    let mut csv = String::from(
        "id,text,expected_province,extracted_province,province_correct,\
         expected_district,extracted_district,district_correct,\
         expected_ward,extracted_ward,ward_correct,time_us\n",
    );

    println!("Processing test cases...");
    for (idx, case) in cases.iter().enumerate() {
        let started = Instant::now();
        let result: AddressResult = vietaddr.resolve(&case.text);
        let elapsed = started.elapsed();
        profiler.record_resolve_operation(elapsed);

        let scores = [
            labels_match(&case.result.province, &result.province),
            labels_match(&case.result.district, &result.district),
            labels_match(&case.result.ward, &result.ward),
        ];
        for (i, ok) in scores.iter().enumerate() {
            if *ok {
                correct[i] += 1;
            }
        }

        let _ = writeln!(
            csv,
            "{},{},{},{},{},{},{},{},{},{},{},{}",
            idx,
            csv_field(&case.text),
            csv_field(&case.result.province),
            csv_field(&result.province),
            scores[0] as u8,
            csv_field(&case.result.district),
            csv_field(&result.district),
            scores[1] as u8,
            csv_field(&case.result.ward),
            csv_field(&result.ward),
            scores[2] as u8,
            elapsed.as_micros(),
        );

        if (idx + 1) % 100 == 0 {
            println!("Processed {}/{} test cases...", idx + 1, cases.len());
        }
    }

    let total_correct: usize = correct.iter().sum();
    let total = cases.len() * 3;
    let accuracy = if total > 0 {
        total_correct as f64 / total as f64
    } else {
        0.0
    };
    let summary = profiler.summary();

    println!("\n==================================================");
    println!("Test Results Summary");
    println!("==================================================");
    println!("Correct:        {total_correct}/{total}");
    println!("Score /10:      {:.2}", accuracy * 10.0);
    println!(
        "Province:       {}/{} correct",
        correct[0],
        cases.len()
    );
    println!(
        "District:       {}/{} correct",
        correct[1],
        cases.len()
    );
    println!("Ward:           {}/{} correct", correct[2], cases.len());
    println!(
        "Max time:       {:.4} sec",
        summary.max_resolve_time.as_secs_f64()
    );
    println!(
        "Avg time:       {:.4} sec",
        summary.average_resolve_time.as_secs_f64()
    );
    println!(
        "Throughput:     {:.0} addresses/sec",
        summary.operations_per_second()
    );
    println!("Memory:         {}", summary.format_memory_usage());

    if let Some(path) = &options.csv_path {
        fs::write(path, csv)?;
        println!("\nDetailed results saved to {path}");
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
