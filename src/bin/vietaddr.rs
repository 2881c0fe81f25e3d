//! Command-line address resolution.
//!
//! Resolves a single address against the gazetteer in the default (or
//! given) data directory and prints the extracted components.
//!
//! Usage: vietaddr [--data-dir DIR] <address>

use std::env;
use std::process;

use vietaddr::{VietAddr, VietAddrConfig};

fn main() {
    let mut data_dir: Option<String> = None;
    let mut address_words: Vec<String> = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data-dir" => match args.next() {
                Some(dir) => data_dir = Some(dir),
                None => {
                    eprintln!("error: --data-dir requires a value");
                    process::exit(2);
                }
            },
            "--help" | "-h" => {
                println!("Usage: vietaddr [--data-dir DIR] <address>");
                return;
            }
            _ => address_words.push(arg),
        }
    }

    if address_words.is_empty() {
        eprintln!("Usage: vietaddr [--data-dir DIR] <address>");
        process::exit(2);
    }
    let address = address_words.join(" ");

    let mut builder = VietAddrConfig::builder();
    if let Some(dir) = data_dir {
        builder = builder.data_dir(dir);
    }

    let vietaddr = match VietAddr::with_config(builder.build()) {
        Ok(vietaddr) => vietaddr,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let result = vietaddr.resolve(&address);
    println!("Input:    {address}");
    println!("Province: {}", result.province);
    println!("District: {}", result.district);
    println!("Ward:     {}", result.ward);
    if !result.remnant.is_empty() {
        println!("Remnant:  {}", result.remnant);
    }
}
