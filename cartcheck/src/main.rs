use clap::Parser;

use std::fs;

use gbc::GbcBinary;

/// Check a GBC ROM image and print its header.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path of the ROM image.
    rom: String,

    /// Also dump the raw header bytes.
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let buffer = fs::read(&args.rom).expect("couldn't open ROM");

    match GbcBinary::parse(buffer) {
        Ok(binary) => {
            println!("{}", binary);
            if args.dump {
                dump_header(binary.rom());
            }
            if !binary.logo_valid() || !binary.header_valid() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("not a GBC binary: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print the header region as rows of hex bytes.
fn dump_header(rom: &[u8]) {
    let end = rom.len().min(0x150);
    for (i, row) in rom[0x100..end].chunks(16).enumerate() {
        print!("{:04X}:", 0x100 + (i * 16));
        for byte in row {
            print!(" {:02X}", byte);
        }
        println!();
    }
}
