// hyphora-dict-info: print dictionary statistics.
//
// Usage:
//   hyphora-dict-info --dict FILE
//   hyphora-dict-info [-d DICT_DIR]              (lists all registry locales)
//   hyphora-dict-info [-d DICT_DIR] LOCALE...

use std::io::{self, Write};

use hyphora_dict::HyphenDict;

fn print_help() {
    println!("hyphora-dict-info: print hyphenation dictionary statistics.");
    println!();
    println!("Usage: hyphora-dict-info [-d DICT_DIR] [--dict FILE] [LOCALE...]");
    println!();
    println!("Options:");
    println!("  -d, --dict-dir PATH    Directory containing dictionaries.json");
    println!("  --dict FILE            Inspect a single dictionary source file");
    println!("  -h, --help             Print this help");
}

fn describe(out: &mut impl Write, name: &str, dict: &HyphenDict) {
    let _ = writeln!(out, "{name}: {} level(s)", dict.levels().len());
    for (i, level) in dict.levels().iter().enumerate() {
        let rule_count: usize = level.rules.values().map(Vec::len).sum();
        let _ = writeln!(
            out,
            "  level {i}: {} pattern(s), {} rule(s), hyphen min {}/{}, compound min {}/{}, {} no-hyphen",
            level.rules.len(),
            rule_count,
            level.left_hyphen_min,
            level.right_hyphen_min,
            level.left_compound_min,
            level.right_compound_min,
            level.no_hyphens.len(),
        );
    }
}

fn main() {
    hyphora_cli::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_dir, args) = hyphora_cli::parse_dict_dir(&args);

    if hyphora_cli::wants_help(&args) {
        print_help();
        return;
    }

    let mut dict_file: Option<String> = None;
    let mut locales: Vec<String> = Vec::new();
    let mut skip_next = false;
    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "--dict" => {
                if i + 1 < args.len() {
                    dict_file = Some(args[i + 1].clone());
                    skip_next = true;
                }
            }
            s if !s.starts_with('-') => locales.push(arg.clone()),
            _ => {}
        }
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if let Some(file) = dict_file {
        let dict = hyphora_dict::registry::load_file(std::path::Path::new(&file))
            .unwrap_or_else(|e| hyphora_cli::fatal(&format!("failed to load {file}: {e}")));
        describe(&mut out, &file, &dict);
        return;
    }

    let registry =
        hyphora_cli::load_registry(dict_dir.as_deref()).unwrap_or_else(|e| hyphora_cli::fatal(&e));

    if locales.is_empty() {
        let mut all: Vec<&str> = registry.locales().collect();
        all.sort_unstable();
        for locale in all {
            if let Some(dict) = registry.get(locale) {
                describe(&mut out, locale, &dict);
            }
        }
    } else {
        for locale in &locales {
            match registry.get(locale) {
                Some(dict) => describe(&mut out, locale, &dict),
                None => {
                    let _ = writeln!(out, "{locale}: no dictionary registered");
                }
            }
        }
    }
}
