//! ASCII preview for generated dungeon layouts.
//!
//! Generates a layout and prints it row by row in map coordinates (the
//! isometric projection belongs to a real renderer), or dumps the whole
//! grid as JSON for downstream tooling.

use std::process;

use clap::Parser;

use iso_core::level::{Grid, Point, ScreenPoint, TileType};
use iso_core::{LevelRng, DEFAULT_MAP_SIZE, DEFAULT_TILE_SIZE};

#[derive(Parser)]
#[command(name = "iso-view", about = "Generate a dungeon layout and print it")]
struct Args {
    /// Map width in cells
    #[arg(long, default_value_t = DEFAULT_MAP_SIZE.0)]
    width: i32,

    /// Map height in cells
    #[arg(long, default_value_t = DEFAULT_MAP_SIZE.1)]
    height: i32,

    /// Screen-space tile width for the projection parameters
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE.0)]
    tile_width: f32,

    /// Screen-space tile height for the projection parameters
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE.1)]
    tile_height: f32,

    /// Generation seed; drawn from entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Dump the grid as JSON instead of the ASCII preview
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("iso-view: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let seed = args.seed.unwrap_or_else(|| LevelRng::from_entropy().seed());
    let grid = Grid::generate(
        Point::new(args.width, args.height),
        ScreenPoint::new(args.tile_width, args.tile_height),
        seed,
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&grid)?);
        return Ok(());
    }

    print_map(&grid);
    println!();
    println!(
        "seed {seed}: {} rooms on {}x{}",
        grid.rooms.len(),
        grid.map_size.x,
        grid.map_size.y
    );
    for (i, room) in grid.rooms.iter().enumerate() {
        println!("  room {i}: {} at {:?}", room.shape, room.rects[0].origin);
    }

    Ok(())
}

fn print_map(grid: &Grid) {
    for y in 0..grid.map_size.y {
        let mut row = String::with_capacity(grid.map_size.x as usize);
        for x in 0..grid.map_size.x {
            let tile = grid
                .topmost_type_at(Point::new(x, y))
                .unwrap_or(TileType::Empty);
            row.push(glyph(tile));
        }
        println!("{row}");
    }
}

/// Map-coordinate glyphs for the preview; a real renderer maps the same
/// types to texture regions instead
fn glyph(tile: TileType) -> char {
    match tile {
        TileType::Empty => ' ',
        TileType::Space => ' ',
        TileType::Center => '~',
        TileType::Floor => '.',
        TileType::WallLeft | TileType::WallRight => '|',
        TileType::WallUp | TileType::WallDown => '-',
        TileType::CornerDownLeft
        | TileType::CornerDownRight
        | TileType::CornerUpLeft
        | TileType::CornerUpRight => 'o',
        TileType::JunctionDownRight
        | TileType::JunctionDownLeft
        | TileType::JunctionUpRight
        | TileType::JunctionUpLeft => '*',
        TileType::EntranceLeft
        | TileType::EntranceRight
        | TileType::EntranceUp
        | TileType::EntranceDown => '+',
    }
}
