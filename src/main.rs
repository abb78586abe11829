use docopt::Docopt;
use log::{info, warn};
use partition_maze::{
    generators::Orientation,
    grid_displays::{self, GridDisplay, PathDisplay, PlainDisplay},
    passages::PassageGraph,
    pathing,
    random::RandomSource,
    units::{Height, Width},
    Maze,
};
use rand::{rngs::StdRng, SeedableRng};
use serde_derive::Deserialize;
use std::{
    io,
    io::prelude::*,
    fs::File,
};

const USAGE: &str = "Partition Maze

Usage:
    maze_driver -h | --help
    maze_driver [(--grid-size=<n>|[--grid-width=<w> --grid-height=<h>])] [--seed=<s>] [--first-split=<o>] [(--show-path|--show-distances)] [--text-out=<path>] [--save-edges=<path>]

Options:
    -h --help              Show this screen.
    --grid-size=<n>        The grid size is n * n.
    --grid-width=<w>       The grid width in a w*h grid [default: 20].
    --grid-height=<h>      The grid height in a w*h grid [default: 20].
    --seed=<s>             Seed the random number generator, the same seed and size give the same maze.
    --first-split=<o>      Direction of the first wall line: vertical or horizontal. Picked at random if not given.
    --show-path            Mark the shortest route from the start 'S' to the end 'E' with '.'.
    --show-distances       Show the distance from the start to every open tile as a base 36 digit (wrapping every 36 steps).
    --text-out=<path>      Output file path for the textual rendering of the maze instead of standard output.
    --save-edges=<path>    Serialize the open passages to a text file: each line is a pair of numbers. Line 1: n(#open tiles) m(#edges). Line 2+ edge between tiles. Uses 1-based tile indices.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_size: Option<usize>,
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_seed: Option<u64>,
    flag_first_split: Option<String>,
    flag_show_path: bool,
    flag_show_distances: bool,
    flag_text_out: String,
    flag_save_edges: String,
}

// Error, ErrorKind, ResultExt and Result for the driver, wrapping the library errors
mod errors {
    use error_chain::*;
    error_chain! {
        links {
            Maze(::partition_maze::errors::Error, ::partition_maze::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {
    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let (width, height) = if let Some(square_grid_size) = args.flag_grid_size {
        (square_grid_size, square_grid_size)
    } else {
        (args.flag_grid_width, args.flag_grid_height)
    };

    let first_split = args.flag_first_split
        .as_ref()
        .map(|name| name.parse::<Orientation>())
        .transpose()?;

    let maze = match args.flag_seed {
        Some(seed) => generate_maze(width, height, first_split, &mut StdRng::seed_from_u64(seed))?,
        None => generate_maze(width, height, first_split, &mut rand::thread_rng())?,
    };
    info!("{}x{} maze: {} wall lines, {} wall tiles",
          maze.width(),
          maze.height(),
          maze.partitions().len(),
          maze.walls().count());

    if !args.flag_save_edges.is_empty() {
        save_passage_graph(&maze, &args.flag_save_edges)?;
    }

    let text = render_maze(&maze, &args);
    if args.flag_text_out.is_empty() {
        println!("{}", text);
    } else {
        write_text_to_file(&text, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

fn generate_maze<S: RandomSource>(width: usize,
                                  height: usize,
                                  first_split: Option<Orientation>,
                                  rng: &mut S)
                                  -> Result<Maze> {
    let maze = if let Some(orientation) = first_split {
        Maze::with_first_split(Width(width), Height(height), orientation, rng)?
    } else {
        Maze::with_rng(Width(width), Height(height), rng)?
    };
    Ok(maze)
}

/// Pick the overlay the arguments ask for, falling back to the plain tiles.
fn render_maze(maze: &Maze, maze_args: &MazeArgs) -> String {
    let displayer: Box<dyn GridDisplay> = if maze_args.flag_show_path {
        match pathing::start_to_end_path(maze.grid()) {
            Some(path) => {
                info!("route from start to end is {} tiles long", path.len());
                Box::new(PathDisplay::new(&path))
            }
            None => {
                warn!("no route from {} to {}", maze.start(), maze.end());
                Box::new(PlainDisplay)
            }
        }
    } else if maze_args.flag_show_distances {
        match pathing::Distances::<u32>::new(maze.grid(), maze.start()) {
            Some(distances) => {
                info!("furthest open tile is {} steps from the start", distances.max());
                Box::new(distances)
            }
            None => Box::new(PlainDisplay),
        }
    } else {
        Box::new(PlainDisplay)
    };

    grid_displays::render(maze.grid(), displayer.as_ref())
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_passage_graph(maze: &Maze, file_path: &str) -> Result<()> {
    let passages = PassageGraph::new(maze.grid());
    info!("passage graph: {} open tiles, {} edges, {} areas",
          passages.node_count(),
          passages.edge_count(),
          passages.components());

    write_text_to_file(&passages.to_edge_list(), file_path)
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;

    Ok(())
}
