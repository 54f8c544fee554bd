//! Inktype CLI
//!
//! Usage:
//!   inktype [OPTIONS] [VALUE]
//!
//! Options:
//!   -t, --tokens <FILE>  Token table to resolve against (TOML format)
//!   -l, --list           List text style variants with their metrics
//!   --colors             List color variants with their resolved values
//!   -c, --check          Classify and normalize VALUE instead of resolving it
//!   -h, --help           Print help

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use inktype::{
    color_format, normalize_color, ColorResolver, DesignTokens, ResolveError, TextStyleVariant,
    TypographyResolver, COLOR_VARIANTS, TEXT_STYLE_VARIANTS,
};

#[derive(Parser)]
#[command(name = "inktype")]
#[command(about = "Resolve typography and color variants against design tokens")]
struct Cli {
    /// Variant name or color value (reads from stdin if not provided)
    value: Option<String>,

    /// Token table to resolve against (TOML format)
    #[arg(short, long)]
    tokens: Option<PathBuf>,

    /// List text style variants with their metrics
    #[arg(short, long)]
    list: bool,

    /// List color variants with their resolved values
    #[arg(long)]
    colors: bool,

    /// Classify and normalize the value instead of resolving it
    #[arg(short, long)]
    check: bool,
}

fn main() {
    let cli = Cli::parse();

    // Load token table
    let tokens = match &cli.tokens {
        Some(path) => match DesignTokens::from_file(path) {
            Ok(tokens) => tokens,
            Err(e) => {
                eprintln!("Error loading token table '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => DesignTokens::default(),
    };

    let mut typography = TypographyResolver::new();
    let mut colors = ColorResolver::new();

    // Listing modes print and exit
    if cli.list {
        print_styles(&tokens, &mut typography);
    }
    if cli.colors {
        print_colors(&tokens, &mut colors);
    }
    if cli.list || cli.colors {
        return;
    }

    // If no value and stdin is a terminal (interactive), show intro help
    let values: Vec<String> = match &cli.value {
        Some(value) => vec![value.clone()],
        None => {
            if io::stdin().is_terminal() {
                print_intro();
                return;
            }
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect(),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    for value in &values {
        if cli.check {
            println!("{}  {}", color_format(value), normalize_color(value));
        } else {
            match resolve_value(value, &tokens, &mut typography, &mut colors) {
                Ok(resolved) => println!("{}", resolved),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}

/// Resolve a value as a text style variant when it names one, as a color
/// input otherwise.
fn resolve_value(
    value: &str,
    tokens: &DesignTokens,
    typography: &mut TypographyResolver,
    colors: &mut ColorResolver,
) -> Result<String, ResolveError> {
    match TextStyleVariant::parse(value) {
        Some(variant) => {
            let style = typography.resolve(variant, tokens)?;
            Ok(format!("{} {}", style.font_size, style.font_weight))
        }
        None => colors.resolve(Some(value), tokens),
    }
}

fn print_styles(tokens: &DesignTokens, resolver: &mut TypographyResolver) {
    for variant in TEXT_STYLE_VARIANTS {
        match resolver.resolve(variant, tokens) {
            Ok(style) => println!("{:<16} {:>4} {}", variant, style.font_size, style.font_weight),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn print_colors(tokens: &DesignTokens, resolver: &mut ColorResolver) {
    for variant in COLOR_VARIANTS {
        match resolver.resolve_variant(variant, tokens) {
            Ok(value) => {
                if variant.is_legacy() {
                    println!(
                        "{:<16} {}  (legacy alias of {})",
                        variant,
                        value,
                        variant.canonical()
                    );
                } else {
                    println!("{:<16} {}", variant, value);
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn print_intro() {
    println!(
        r#"Inktype - resolve typography and color variants against design tokens

USAGE:
    inktype [OPTIONS] [VALUE]
    echo 'onError' | inktype

MODES:
    inktype headlineMedium      Font size and weight for a text style
    inktype surfaceVariant      Resolved color for a color variant
    inktype '#ABC' --check      Classify and normalize a color string
    inktype --list              Every text style variant with its metrics
    inktype --colors            Every color variant with its resolved value

OPTIONS:
    -t, --tokens <FILE>   Token table to resolve against (TOML format)
    -c, --check           Classify and normalize instead of resolving
    -h, --help            Print help

Values that are not variant names pass through unchanged, so literal
colors like '#ff5722' resolve to themselves."#
    );
}
