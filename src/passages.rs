//! The maze as a graph: one node per passable tile, one edge per pair of passable tiles that share
//! a side.

use fnv::FnvHashMap;
use petgraph::algo;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::coordinates::{CompassPrimary, GridCoordinate};
use crate::grid::TileGrid;
use crate::tiles::Tile;

#[derive(Debug, Clone)]
pub struct PassageGraph {
    graph: UnGraph<GridCoordinate, ()>,
    node_indices: FnvHashMap<GridCoordinate, NodeIndex>,
}

impl PassageGraph {
    pub fn new(grid: &TileGrid) -> PassageGraph {
        let open_tiles = grid.iter_tiles()
                             .filter(|&(_, tile)| tile.is_passable())
                             .map(|(coord, _)| coord)
                             .collect::<Vec<_>>();

        // At most one edge east and one edge south per tile.
        let mut graph = UnGraph::with_capacity(open_tiles.len(), open_tiles.len() * 2);
        let mut node_indices = FnvHashMap::with_capacity_and_hasher(open_tiles.len(), Default::default());
        for coord in &open_tiles {
            node_indices.insert(*coord, graph.add_node(*coord));
        }

        // Looking only east and south adds each edge exactly once.
        for coord in &open_tiles {
            for &direction in &[CompassPrimary::East, CompassPrimary::South] {
                let neighbour = grid.neighbour_at_direction(*coord, direction)
                                    .and_then(|neighbour_coord| node_indices.get(&neighbour_coord));
                if let Some(&neighbour_index) = neighbour {
                    graph.add_edge(node_indices[coord], neighbour_index, ());
                }
            }
        }

        PassageGraph { graph, node_indices }
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The node index of a passable tile, None for walls and off grid coordinates.
    #[inline]
    pub fn node_index(&self, coord: GridCoordinate) -> Option<NodeIndex> {
        self.node_indices.get(&coord).cloned()
    }

    /// Is there a route between two tiles? False if either is not passable.
    pub fn is_connected(&self, a: GridCoordinate, b: GridCoordinate) -> bool {
        match (self.node_index(a), self.node_index(b)) {
            (Some(a_index), Some(b_index)) => algo::has_path_connecting(&self.graph, a_index, b_index, None),
            _ => false,
        }
    }

    /// The number of separate open areas.
    pub fn components(&self) -> usize {
        algo::connected_components(&self.graph)
    }

    /// Every pair of neighbouring passable tiles.
    pub fn iter_edges(&self) -> impl Iterator<Item = (GridCoordinate, GridCoordinate)> + '_ {
        self.graph
            .edge_references()
            .map(move |edge| (self.graph[edge.source()], self.graph[edge.target()]))
    }

    /// Text edge list: `n m` (node and edge counts) on the first line, then one `a b` line per edge
    /// using 1-based node numbers. Nodes are numbered in row major order of their tiles.
    pub fn to_edge_list(&self) -> String {
        let mut graph_data = format!("{} {}\n", self.node_count(), self.edge_count());
        for edge in self.graph.edge_references() {
            let src_as_1_based_index = edge.source().index() + 1;
            let dst_as_1_based_index = edge.target().index() + 1;
            graph_data.push_str(&format!("{} {}\n", src_as_1_based_index, dst_as_1_based_index));
        }
        graph_data
    }
}

/// All passable tiles of the grid form a single open area.
pub fn is_fully_connected(grid: &TileGrid) -> bool {
    let passages = PassageGraph::new(grid);
    passages.components() <= 1 && grid.count(Tile::Wall) < grid.size()
}
