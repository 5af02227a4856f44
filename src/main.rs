use b64::{decode, encode};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "b64")]
#[command(version)]
#[command(about = "Encode and decode Base64 from the command line", long_about = None)]
struct Cli {
    /// Encode input to Base64
    #[arg(short, long)]
    encode: bool,

    /// Decode input from Base64
    #[arg(short, long, conflicts_with = "encode")]
    decode: bool,

    /// Read input from a file instead of the TEXT argument
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Text to process (if neither TEXT nor --input is given, reads from stdin)
    #[arg(value_name = "TEXT")]
    text: Option<String>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("b64: {}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if !cli.encode && !cli.decode {
        return Err("use --encode (-e) or --decode (-d); see --help".into());
    }

    // Read input data
    let input_data = if let Some(text) = cli.text {
        text.into_bytes()
    } else if let Some(file_path) = &cli.input {
        fs::read(file_path)?
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        buffer
    };

    if cli.decode {
        let input_str = String::from_utf8(input_data)
            .map_err(|_| "Input must be valid UTF-8 for decoding")?;
        let decoded = decode(input_str.trim())?;
        write_output(cli.output.as_deref(), &decoded)?;
    } else {
        let encoded = encode(&input_data);
        write_output(cli.output.as_deref(), encoded.as_bytes())?;
    }

    Ok(())
}

/// Writes `data` to the given file, or newline-terminated to stdout.
fn write_output(path: Option<&Path>, data: &[u8]) -> io::Result<()> {
    match path {
        Some(path) => fs::write(path, data),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.write_all(b"\n")
        }
    }
}
