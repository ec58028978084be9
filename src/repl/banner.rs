use console::{style, Term};
use tui_banner::{Align, Banner, ColorMode, Fill, Gradient, GradientDirection, Palette};

use crate::repl::commands::SUGGESTIONS;

const BRAND: u8 = 75;      // sky blue
const BRAND_DIM: u8 = 67;  // steel blue
const DIM: u8 = 240;

const SEP_CHAR: char = '\u{2026}'; // …

const TAGLINE: &str = "AI-Powered Product Discovery";

const FEATURES: &[&str] = &[
    "🔍 Smart Search",
    "⚡ Real-time Results",
    "🎯 AI Recommendations",
    "💰 Price Comparison",
];

/// Print the splash banner above the first prompt.
pub fn show_splash() {
    let term = Term::stdout();
    let _ = term.clear_screen();

    let version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("GIT_HASH").unwrap_or("dev");

    let (_, term_cols) = term.size();
    let term_w = term_cols as usize;

    let center = |text_w: usize| -> String {
        if term_w > text_w + 4 {
            " ".repeat((term_w - text_w) / 2)
        } else {
            "  ".to_string()
        }
    };

    let palette = Palette::from_hex(&[
        "#AFD7FF",
        "#5FAFFF",
        "#5F87D7",
        "#875FD7",
    ]);
    let gradient = Gradient::new(palette.colors().to_vec(), GradientDirection::Diagonal);

    let banner_text = match Banner::new("BROWSEEASE") {
        Ok(b) => b
            .gradient(gradient)
            .fill(Fill::Keep)
            .align(Align::Center)
            .trim_vertical(true)
            .edge_shade(0.35, '\u{2591}') // ░
            .color_mode(ColorMode::TrueColor)
            .width(term_w)
            .render(),
        Err(_) => {
            let p = center(10);
            format!("{}{}\n", p, style("BROWSEEASE").color256(BRAND).bold())
        }
    };

    println!();
    print!("{}", banner_text);

    {
        let version_str = format!("v{} ({})", version, git_hash);
        let p = center(version_str.len());
        println!("{}{}", p, style(version_str).color256(DIM));
    }

    let scene_w = term_w.clamp(40, 76);
    let pad = center(scene_w);
    let separator = style(SEP_CHAR.to_string().repeat(scene_w)).color256(BRAND_DIM);
    println!("{}{}", pad, separator);
    {
        let p = center(TAGLINE.len());
        println!("{}{}", p, style(TAGLINE).white().bold());
    }
    println!("{}{}", pad, separator);
    println!();

    {
        let chips = FEATURES.join("   ");
        let p = center(console::measure_text_width(&chips));
        println!("{}{}", p, style(chips).color256(BRAND));
    }
    println!();

    {
        let p = center(56);
        println!("{}  {}", p, style("Try searching for:").white().bold());
        for s in SUGGESTIONS {
            println!("{}    {}", p, style(s).dim());
        }
        println!();
        println!(
            "{}  {} {}",
            p,
            style("Type a query to search, or").dim(),
            style("/help").white().bold(),
        );
    }
    println!();
}
