use dealer_directory::{load_directory, DirectoryDocument, DirectoryError};
use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: dealer-render [--check] <directory.yaml>...");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  dealer-render dealers.yaml > directory.html");
        eprintln!("  dealer-render --check dealers.yaml");
        process::exit(1);
    }

    let check_only = args[1] == "--check";
    let files: Vec<_> = if check_only {
        args[2..].to_vec()
    } else {
        args[1..].to_vec()
    };

    if files.is_empty() {
        eprintln!("dealer-render: no input files");
        process::exit(1);
    }

    let mut exit_code = 0;

    for file_path in files {
        match load_file(&file_path) {
            Ok(doc) => {
                if check_only {
                    println!("✓ {} is valid ({} dealers)", file_path, doc.dealers.len());
                } else {
                    print!("{}", doc.render_page());
                }
            }
            Err(e) => {
                eprintln!("✗ {} has errors:", file_path);
                eprintln!("  {}", e);
                exit_code = 1;
            }
        }
    }

    process::exit(exit_code);
}

fn load_file(path: &str) -> Result<DirectoryDocument, DirectoryError> {
    let content = fs::read_to_string(path)?;
    let doc = load_directory(&content)?;
    doc.validate()?;
    Ok(doc)
}
