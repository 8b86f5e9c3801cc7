use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use trichrome::{Cmyk, ColorState, Field, Hsl, Rgb};

/// Inspect and edit a color across its RGB, CMYK, HSL and hexadecimal
/// forms, keeping all of them in sync.
#[derive(Debug, Parser)]
#[command(name = "swatch")]
struct Args {
    /// Starting color: `#rrggbb`, `rgb R G B`, `cmyk C M Y K` or `hsl H S L`.
    #[arg(default_value = "#808080")]
    color: String,

    /// Write a solid swatch of the settled color to this PNG file.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Swatch side length in pixels.
    #[arg(long, default_value_t = 64)]
    size: u32,

    /// Read `field value` edits from stdin and reprint the state after
    /// each one, e.g. `r 200`, `k 80` or `hex #ff8800`.
    #[arg(short, long)]
    interactive: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut state = parse_color(&args.color)?;
    print_state(&state);

    if args.interactive {
        edit_loop(&mut state)?;
    }

    if let Some(path) = &args.out {
        write_swatch(&state, path, args.size)?;
        println!("wrote {}", path.display());
    }

    Ok(())
}

fn parse_color(text: &str) -> Result<ColorState> {
    let text = text.trim();

    let digits = text.strip_prefix('#').unwrap_or(text);
    if digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Ok(ColorState::from_rgb(Rgb::from_hex(digits)?));
    }

    let parts: Vec<&str> = text.split_whitespace().collect();
    match parts.as_slice() {
        ["rgb", r, g, b] => Ok(ColorState::from_rgb(Rgb::new(
            channel(r, 255)? as u8,
            channel(g, 255)? as u8,
            channel(b, 255)? as u8,
        ))),
        ["cmyk", c, m, y, k] => Ok(ColorState::from_cmyk(Cmyk::new(
            channel(c, 100)? as u8,
            channel(m, 100)? as u8,
            channel(y, 100)? as u8,
            channel(k, 100)? as u8,
        ))),
        ["hsl", h, s, l] => Ok(ColorState::from_hsl(Hsl::new(
            channel(h, 360)?,
            channel(s, 100)? as u8,
            channel(l, 100)? as u8,
        ))),
        _ => bail!("unrecognized color {text:?}"),
    }
}

fn channel(text: &str, max: u16) -> Result<u16> {
    let value: u16 = text
        .parse()
        .with_context(|| format!("bad channel value {text:?}"))?;
    if value > max {
        bail!("channel value {value} is over {max}");
    }
    Ok(value)
}

fn print_state(state: &ColorState) {
    let Cmyk {
        cyan,
        magenta,
        yellow,
        key,
    } = state.cmyk();
    let Hsl {
        hue,
        saturation,
        lightness,
    } = state.hsl();

    println!("hex  {}", state.hex());
    println!("rgb  {}", state.rgb());
    println!("cmyk {cyan}% {magenta}% {yellow}% {key}%");
    println!("hsl  {hue}deg {saturation}% {lightness}%");
}

fn edit_loop(state: &mut ColorState) -> Result<()> {
    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if matches!(line, "q" | "quit" | "exit") {
            break;
        }
        if !line.is_empty() {
            apply_line(state, line);
        }
        prompt()?;
    }
    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

fn apply_line(state: &mut ColorState, line: &str) {
    let Some((field, value)) = line.split_once(char::is_whitespace) else {
        eprintln!("expected `field value`, e.g. `r 200` or `hex #ff8800`");
        return;
    };
    let value = value.trim();

    if field.eq_ignore_ascii_case("hex") {
        match state.set_hex(value) {
            Ok(_) => print_state(state),
            Err(err) => eprintln!("{err}"),
        }
        return;
    }

    match field.parse::<Field>() {
        Ok(field) => {
            let changed = state.edit(field, value);
            if changed.is_empty() {
                println!("no change");
            } else {
                print_state(state);
            }
        }
        Err(err) => eprintln!("{err}"),
    }
}

fn write_swatch(state: &ColorState, path: &Path, size: u32) -> Result<()> {
    let rgb = state.rgb();
    let img = image::RgbImage::from_pixel(size, size, image::Rgb([rgb.red, rgb.green, rgb.blue]));
    img.save(path)
        .with_context(|| format!("could not write image to {}", path.display()))
}
