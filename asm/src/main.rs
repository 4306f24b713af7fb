use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use color_print::cprintln;

use hasm::{assemble, util, Error};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input files
    input: Vec<String>,

    /// Assemble every .asm file in the current directory
    #[clap(short, long)]
    all: bool,

    /// Output file (single input only)
    #[clap(short, long)]
    output: Option<String>,

    /// Write the resolved symbol table next to the output
    #[clap(short, long)]
    sym: bool,

    /// Dump the assembly listing
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("Hack Assembler");

    let mut targets = args.input.clone();
    if args.all {
        match scan_asm_dir() {
            Ok(found) => targets.extend(found),
            Err(err) => {
                cprintln!("<red,bold>error</>: {}", err);
                std::process::exit(2);
            }
        }
    }
    if targets.is_empty() {
        cprintln!("<red,bold>error</>: no input files (pass paths or use --all)");
        std::process::exit(2);
    }
    if args.output.is_some() && targets.len() > 1 {
        cprintln!("<red,bold>error</>: --output needs exactly one input file");
        std::process::exit(2);
    }

    let mut assembled = 0;
    let mut failed = 0;
    for path in &targets {
        match run(path, &args) {
            Ok(()) => assembled += 1,
            Err(err) => {
                cprintln!("<red,bold>error</>: {}", err);
                failed += 1;
            }
        }
    }

    println!("Done! {} program(s) assembled", assembled);
    if failed > 0 {
        cprintln!("<red,bold>{} program(s) failed</>", failed);
        std::process::exit(1);
    }
}

/// Assemble one file. Each file gets a fresh symbol table.
fn run(path: &str, args: &Args) -> Result<(), Error> {
    println!("  < {}", path);
    let mut source = String::new();
    std::fs::File::open(path)
        .map_err(|err| Error::FileOpen(path.to_string(), err))?
        .read_to_string(&mut source)
        .map_err(Error::FileRead)?;

    let assembly = match assemble(&source) {
        Ok(assembly) => assembly,
        Err(errs) => {
            let lines: Vec<&str> = source.lines().collect();
            let count = errs.len();
            for (idx, err) in &errs {
                err.print_diag(path, &lines, *idx);
            }
            return Err(Error::Abort(count));
        }
    };

    let out = match &args.output {
        Some(out) => PathBuf::from(out),
        None => Path::new(path).with_extension("hack"),
    };
    println!("  > {}", out.display());
    write_text(&out, &assembly.text())?;

    if args.sym {
        let sym_out = out.with_extension("sym.yaml");
        println!("  > {}", sym_out.display());
        write_text(&sym_out, &assembly.symbols.to_yaml()?)?;
    }

    println!(
        "  - {} word(s), {} symbol(s)",
        assembly.words.len(),
        assembly.symbols.len()
    );

    if args.dump {
        util::print_dump(path, &assembly.lines, &assembly.symbols);
    }

    Ok(())
}

fn scan_asm_dir() -> Result<Vec<String>, Error> {
    let mut found = vec![];
    let entries = std::fs::read_dir(".").map_err(|err| Error::FileOpen(".".to_string(), err))?;
    for entry in entries {
        let entry = entry.map_err(Error::FileRead)?;
        let path = entry.path();
        if path.extension().map_or(false, |ext| ext == "asm") {
            found.push(path.display().to_string());
        }
    }
    found.sort();
    Ok(found)
}

fn write_text(path: &Path, text: &str) -> Result<(), Error> {
    let mut file = std::fs::File::create(path)
        .map_err(|err| Error::FileCreate(path.display().to_string(), err))?;
    file.write_all(text.as_bytes())
        .map_err(|err| Error::FileWrite(path.display().to_string(), err))?;
    Ok(())
}
