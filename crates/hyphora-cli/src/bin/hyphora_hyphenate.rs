// hyphora-hyphenate: hyphenate words from arguments or stdin.
//
// Usage:
//   hyphora-hyphenate [-d DICT_DIR] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-dir PATH    Directory containing dictionaries.json
//   --dict FILE            Load a single dictionary source file instead
//   --locale LOC           Locale to look up in the registry (default: en-US)
//   --separator SEP        Separator inserted at break points (default: -)
//   --urgency N            Urgency level (higher exposes more breaks)
//   --positions            Print position:priority pairs instead
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use hyphora_engine::HyphenationCursor;

fn print_help() {
    println!("hyphora-hyphenate: hyphenate words with a pattern dictionary.");
    println!();
    println!("Usage: hyphora-hyphenate [-d DICT_DIR] [OPTIONS] [WORD...]");
    println!();
    println!("If WORD arguments are given, hyphenates each word.");
    println!("Otherwise reads words from stdin (one per line).");
    println!();
    println!("Options:");
    println!("  -d, --dict-dir PATH    Directory containing dictionaries.json");
    println!("  --dict FILE            Load a single dictionary source file instead");
    println!("  --locale LOC           Locale to look up in the registry (default: en-US)");
    println!("  --separator SEP        Separator inserted at break points (default: -)");
    println!("  --urgency N            Urgency level (higher exposes more breaks)");
    println!("  --positions            Print position:priority pairs instead");
    println!("  -h, --help             Print this help");
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
    let mut locale = "en-US".to_string();
    let mut separator = "-".to_string();
    let mut urgency: Option<u8> = None;
    let mut show_positions = false;
    let mut words: Vec<String> = Vec::new();
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
            "--locale" => {
                if i + 1 < args.len() {
                    locale = args[i + 1].clone();
                    skip_next = true;
                }
            }
            "--separator" => {
                if i + 1 < args.len() {
                    separator = args[i + 1].clone();
                    skip_next = true;
                }
            }
            "--urgency" => {
                if i + 1 < args.len() {
                    urgency = Some(
                        args[i + 1]
                            .parse()
                            .unwrap_or_else(|_| hyphora_cli::fatal("invalid number for --urgency")),
                    );
                    skip_next = true;
                }
            }
            "--positions" => show_positions = true,
            s if !s.starts_with('-') => words.push(arg.clone()),
            _ => {}
        }
    }

    let dict = hyphora_cli::load_dictionary(dict_file.as_deref(), dict_dir.as_deref(), &locale)
        .unwrap_or_else(|e| hyphora_cli::fatal(&e));

    let mut cursor = HyphenationCursor::new(dict);
    if let Some(u) = urgency {
        cursor.set_urgency(u);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut emit = |word: &str, cursor: &mut HyphenationCursor| {
        cursor.set_word(word);
        let mut cuts: Vec<(usize, u8)> = Vec::new();
        let mut item = cursor
            .first()
            .unwrap_or_else(|e| hyphora_cli::fatal(&e.to_string()));
        while let Some(b) = item {
            cuts.push((b.position(), b.priority()));
            item = cursor
                .next()
                .unwrap_or_else(|e| hyphora_cli::fatal(&e.to_string()));
        }

        if show_positions {
            let pairs: Vec<String> = cuts.iter().map(|(p, pr)| format!("{p}:{pr}")).collect();
            let _ = writeln!(out, "{word} {}", pairs.join(" "));
        } else {
            let mut rendered = String::new();
            let mut next_cut = cuts.iter().map(|&(p, _)| p).peekable();
            for (i, c) in word.chars().enumerate() {
                if next_cut.peek() == Some(&i) {
                    rendered.push_str(&separator);
                    next_cut.next();
                }
                rendered.push(c);
            }
            let _ = writeln!(out, "{rendered}");
        }
    };

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let word = line.trim();
            if !word.is_empty() {
                emit(word, &mut cursor);
            }
        }
    } else {
        for word in &words {
            emit(word, &mut cursor);
        }
    }
}
