//! Interactive selector over the hub-hosted code datasets.
//!
//! Prints a fixed menu, reads one line, fetches the chosen datasets and
//! prints the download summary plus the complete corpus inventory.

use std::env;
use std::io::{self, Write};
use std::process;

use corpusfetch::hub;
use corpusfetch::report::{self, Outcome};
use corpusfetch::util::{self, banner};

fn main() {
    install_interrupt_handler();

    let config = util::config_from_args(env::args().skip(1));

    banner("DATASET DOWNLOADER\nUsing verified, working hub datasets");
    print_menu();

    print!("\nWhat to download? (1-4): ");
    let _ = io::stdout().flush();

    let mut choice = String::new();
    if io::stdin().read_line(&mut choice).is_err() {
        eprintln!("Could not read choice");
        process::exit(1);
    }

    // Unrecognized input terminates immediately; there is no retry loop.
    let Some(selected) = hub::select(choice.trim()) else {
        eprintln!("Invalid choice");
        process::exit(1);
    };

    let mut outcomes = Vec::new();
    for dataset in selected {
        banner(&format!("DOWNLOADING: {}", dataset.name));
        let result = hub::fetch_hub_dataset(&config, dataset);
        match &result {
            Ok(_) => println!("\n{} downloaded successfully", dataset.name),
            Err(e) => println!("Failed: {e}"),
        }
        outcomes.push(Outcome {
            name: dataset.name,
            result,
        });
    }

    banner("DOWNLOAD SUMMARY");
    report::print_outcomes(&outcomes);

    banner("COMPLETE DATASET INVENTORY");
    report::print_inventory(&outcomes);
}

fn print_menu() {
    println!();
    println!("1. Code Alpaca - Python code instructions");
    println!("   - 20K instruction-code pairs, ~50MB");
    println!();
    println!("2. Python Code Instructions");
    println!("   - Iamtarun/python_code_instructions_18k_alpaca, 18K examples");
    println!();
    println!("3. MBPP - Python code problems");
    println!("   - google-research-datasets/mbpp, 1,000 problems, ~5MB");
    println!();
    println!("4. Download ALL (options 1+2+3)");
    println!("   - ~39K examples combined");
}

fn install_interrupt_handler() {
    let result = ctrlc::set_handler(|| {
        println!("\nInterrupted by user");
        process::exit(130);
    });
    if let Err(e) = result {
        corpusfetch::warn!("could not install interrupt handler: {e}");
    }
}
