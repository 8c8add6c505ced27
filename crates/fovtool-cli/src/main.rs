use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use fov_algo::{compute_fov, Algorithm};
use fov_grid::{BitpackedGrid, Grid2D};

/// Compute field-of-view tool.
#[derive(Parser, Debug)]
#[command(name = "fovtool", about = "Compute field-of-view tool")]
struct Cli {
    /// The input file, should be a UTF-8 text file.
    #[arg(short, long)]
    input: PathBuf,

    /// The FOV algorithm to invoke: circular, diamond, recursive, symmetric,
    /// restrictive, or permissive:<1-8>. Defaults to symmetric.
    #[arg(short, long)]
    algo: Option<String>,
}

struct MapInfo {
    transparency: BitpackedGrid,
    visible: BitpackedGrid,
    sources: Vec<(i32, i32)>,
}

fn parse_algorithm(name: &str) -> Result<Algorithm> {
    if let Some(level) = name.strip_prefix("permissive:") {
        let k: i32 = level
            .parse()
            .with_context(|| format!("invalid permissiveness level '{level}'"))?;
        return Ok(Algorithm::Permissive(k));
    }
    Ok(match name {
        "circular" => Algorithm::CircularRaycast,
        "diamond" => Algorithm::DiamondRaycast,
        "recursive" => Algorithm::RecursiveShadow,
        "symmetric" => Algorithm::SymmetricShadow,
        "restrictive" => Algorithm::Restrictive,
        other => bail!("unknown FOV algorithm '{other}'"),
    })
}

fn load_map(path: &PathBuf) -> Result<MapInfo> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading input file '{}'", path.display()))?;
    let mut lines: Vec<&str> = contents.lines().collect();
    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        bail!("input file '{}' has no map data", path.display());
    }
    let height = lines.len() as i32;
    let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0) as i32;

    let mut transparency = BitpackedGrid::new(width, height)?;
    let visible = BitpackedGrid::new(width, height)?;
    let mut sources = Vec::new();

    for (y, line) in lines.iter().enumerate() {
        let mut chars = line.chars();
        for x in 0..width {
            let ch = chars.next().unwrap_or('.');
            transparency.set_bool(x, y as i32, ch != '#');
            if ch == '@' {
                sources.push((x, y as i32));
            }
        }
    }
    Ok(MapInfo {
        transparency,
        visible,
        sources,
    })
}

fn render_map(map: &MapInfo) -> String {
    let mut out = String::new();
    for y in 0..map.transparency.height() {
        if y > 0 {
            out.push('\n');
        }
        for x in 0..map.transparency.width() {
            if map.sources.contains(&(x, y)) {
                out.push('@');
                continue;
            }
            let visible = map.visible.get_bool(x, y);
            let transparent = map.transparency.get_bool(x, y);
            out.push(match (visible, transparent) {
                (true, true) => '.',
                (true, false) => '#',
                (false, _) => ' ',
            });
        }
    }
    out
}

fn run(cli: Cli) -> Result<()> {
    let algorithm = match cli.algo.as_deref() {
        Some(name) => parse_algorithm(name)?,
        None => Algorithm::SymmetricShadow,
    };
    let mut map = load_map(&cli.input)?;
    let sources = map.sources.clone();
    for (x, y) in sources {
        compute_fov(algorithm, &map.transparency, &mut map.visible, x, y, 0, true)
            .map_err(|e| anyhow::anyhow!(e))
            .with_context(|| format!("computing field of view from ({x}, {y})"))?;
        println!("{}", render_map(&map));
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("ERROR: {err}");
        std::process::exit(1);
    }
}
